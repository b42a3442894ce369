//! Campus Forms Validation
//!
//! Pure validation functions: values in, verdicts out. No DOM, no state.
//! Used by the validation engine and re-exported to JavaScript by the WASM crate.

pub mod email;
pub mod password;
pub mod phone;
pub mod string;

// Re-export all validators
pub use email::*;
pub use password::*;
pub use phone::*;
pub use string::*;
