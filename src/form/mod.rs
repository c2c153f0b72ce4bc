//! Form data model and validation.

pub mod model;
pub mod validation;

pub use model::{
    parse_date, ContactSubmission, FieldId, FieldKind, Gender, InvalidOption, Occupation,
    DATE_FORMAT,
};
pub use validation::{phone_digits, validate, FieldError, ValidationErrors, PHONE_DIGITS};
