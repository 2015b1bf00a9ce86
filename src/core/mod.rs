//! Headless form logic: validation, submission flow, and the contracts of
//! the external collaborators (auth service, notifier, navigator)

pub mod auth_client;
#[cfg(feature = "ssr")]
pub mod config;
pub mod form;
pub mod validation;

pub use auth_client::{AuthClient, HttpAuthClient, SignInRequest, SignUpRequest, SubmitError};
pub use form::{
    CALLBACK_TARGET, FormOutcome, Navigator, Notifier, SIGN_IN_FALLBACK_ERROR,
    SIGN_UP_FALLBACK_ERROR, SubmitGate, submit_sign_in, submit_sign_up,
};
pub use validation::{
    FieldError, FieldErrors, MIN_PASSWORD_LENGTH, SignInInput, SignUpInput, validate_email,
    validate_name, validate_password,
};
