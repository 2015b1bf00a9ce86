//! Authentication UI module
//!
//! The sign-in and sign-up form components. All credential handling happens
//! in `core`; these components bind the flow to signals and the router.

use leptos::prelude::*;

use crate::core::SubmitGate;

mod sign_in_form;
mod sign_up_form;

pub use sign_in_form::SignInForm;
pub use sign_up_form::SignUpForm;

// The pending flag doubles as the reactive source for the disabled state of
// the submit button. Reads are untracked: the gate is consulted inside event
// handlers, not render closures.
impl SubmitGate for RwSignal<bool> {
    fn is_pending(&self) -> bool {
        self.get_untracked()
    }

    fn set_pending(&self, pending: bool) {
        self.set(pending);
    }
}
