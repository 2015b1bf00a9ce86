//! Sign-up form component
//!
//! Collects name, email, and password for account creation. The account
//! itself is created and stored by the external identity service.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::{
    FormOutcome, HttpAuthClient, SignUpInput, SubmitGate, submit_sign_up, validate_email,
    validate_name, validate_password,
};
use crate::ui::common::{FormField, PasswordField};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

/// Sign-up form component
#[component]
pub fn SignUpForm(
    /// Callback to switch to the sign-in form
    #[prop(optional, into)]
    on_sign_in_click: Option<Callback<()>>,
) -> impl IntoView {
    let notifier = use_notifications();
    let navigate = use_navigate();

    // Form state
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Form validation
    let name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    // Submission-in-progress flag gating the submit control
    let submitting = RwSignal::new(false);

    let validate_name_field = move || {
        name_error.set(validate_name(&name.get_untracked()).map(|e| e.to_string()));
    };
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

        let input = SignUpInput {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            let client = HttpAuthClient::default();
            let nav = move |path: &str| navigate(path, Default::default());

            if let FormOutcome::Invalid(errors) =
                submit_sign_up(&input, &client, &notifier, &nav).await
            {
                name_error.set(errors.name.map(|e| e.to_string()));
                email_error.set(errors.email.map(|e| e.to_string()));
                password_error.set(errors.password.map(|e| e.to_string()));
            }

            submitting.finish();
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <form on:submit=on_submit class="space-y-5">
                // Header
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">
                        "Create Account"
                    </h2>
                    <p class="mt-2 text-sm text-theme-secondary">
                        "Sign up to get started"
                    </p>
                </div>

                <FormField
                    label="Name"
                    autocomplete="name"
                    placeholder="Your name"
                    value=name
                    error=name_error
                    on_blur=Callback::new(move |_| validate_name_field())
                />

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
                    autocomplete="new-password"
                    placeholder="Create a password"
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
                                    "Signing up..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span class="block">"Sign Up"</span> }.into_any()
                        }
                    }}
                </button>

                // Sign-in link
                <div class="text-center text-sm text-theme-secondary">
                    "Already have an account? "
                    <button
                        type="button"
                        class="text-accent-primary hover:text-accent-primary-hover font-medium"
                        on:click=move |_| {
                            if let Some(callback) = on_sign_in_click.as_ref() {
                                callback.run(());
                            }
                        }
                    >
                        "Sign in"
                    </button>
                </div>
            </form>
        </div>
    }
}
