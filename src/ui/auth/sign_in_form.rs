//! Sign-in form component
//!
//! Collects email and password, validates, and hands the credentials to the
//! external identity service.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::{
    FormOutcome, HttpAuthClient, SignInInput, SubmitGate, submit_sign_in, validate_email,
    validate_password,
};
use crate::ui::common::{FormField, PasswordField};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

/// Sign-in form component
#[component]
pub fn SignInForm(
    /// Callback to switch to the sign-up form
    #[prop(optional, into)]
    on_sign_up_click: Option<Callback<()>>,
) -> impl IntoView {
    let notifier = use_notifications();
    let navigate = use_navigate();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Form validation
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    // Submission-in-progress flag gating the submit control
    let submitting = RwSignal::new(false);

    let validate_email_field = move || {
        email_error.set(validate_email(&email.get_untracked()).map(|e| e.to_string()));
    };
    let validate_password_field = move || {
        password_error.set(validate_password(&password.get_untracked()).map(|e| e.to_string()));
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // One attempt per submit; ignore re-entrant clicks while pending
        if !submitting.try_begin() {
            return;
        }

        let input = SignInInput {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            let client = HttpAuthClient::default();
            let nav = move |path: &str| navigate(path, Default::default());

            if let FormOutcome::Invalid(errors) =
                submit_sign_in(&input, &client, &notifier, &nav).await
            {
                email_error.set(errors.email.map(|e| e.to_string()));
                password_error.set(errors.password.map(|e| e.to_string()));
            }

            submitting.finish();
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <form on:submit=on_submit class="space-y-6">
                // Header
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">
                        "Welcome Back"
                    </h2>
                    <p class="mt-2 text-sm text-theme-secondary">
                        "Sign in to your account to continue"
                    </p>
                </div>

                <FormField
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    value=email
                    error=email_error
                    on_blur=Callback::new(move |_| validate_email_field())
                />

                <PasswordField
                    label="Password"
                    autocomplete="current-password"
                    placeholder="Enter your password"
                    value=password
                    error=password_error
                    on_blur=Callback::new(move |_| validate_password_field())
                />

                // Submit button
                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                           text-white font-medium rounded-lg
                           focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-accent-primary
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                    disabled=move || submitting.get()
                >
                    {move || {
                        if submitting.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4 text-white" />
                                    "Signing in..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span class="block">"Sign In"</span> }.into_any()
                        }
                    }}
                </button>

                // Sign-up link
                <div class="text-center text-sm text-theme-secondary">
                    "Don't have an account? "
                    <button
                        type="button"
                        class="text-accent-primary hover:text-accent-primary-hover font-medium"
                        on:click=move |_| {
                            if let Some(callback) = on_sign_up_click.as_ref() {
                                callback.run(());
                            }
                        }
                    >
                        "Sign up"
                    </button>
                </div>
            </form>
        </div>
    }
}
