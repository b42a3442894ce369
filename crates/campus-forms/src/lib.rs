//! # Campus Forms
//!
//! Client-side form validation for the college website: registration,
//! contact and application forms.
//!
//! The engine is split in two:
//!
//! - **Rules** ([`rules`]): pure functions from field snapshots to
//!   `Result<(), FieldError>`.
//! - **Binding** ([`FormValidator`] + [`FormView`]): subscribes the rules to
//!   input/blur/submit events and renders the verdicts. The browser binding
//!   lives in `campus-forms-wasm`; [`HeadlessForm`] renders in memory.
//!
//! ## Example
//!
//! ```rust
//! use campus_forms::{Field, FieldKind, FormValidator, HeadlessForm, ValidatorConfig};
//!
//! let form = HeadlessForm::new(vec![
//!     Field::text("email", FieldKind::Email, "not-an-email").required(),
//! ]);
//! let mut validator = FormValidator::new(form, ValidatorConfig::default());
//!
//! assert!(!validator.validate_field("email"));
//! assert_eq!(
//!     validator.view().display("email").message.as_deref(),
//!     Some("Please enter a valid email address")
//! );
//! ```

pub mod antispam;
pub mod config;
pub mod error;
pub mod field;
pub mod interactive;
pub mod rules;
pub mod state;
pub mod validator;
pub mod view;

pub use antispam::{Clock, ManualClock, RenderStamp, SystemClock};
pub use config::ValidatorConfig;
pub use error::{FieldError, FormError};
pub use field::{Field, FieldKind, FieldValue};
pub use rules::{check_field, RuleContext};
pub use state::{SubmissionState, SubmitOutcome, Validity};
pub use validator::{FormEvent, FormValidator};
pub use view::{FieldDisplay, FormView, HeadlessForm};
