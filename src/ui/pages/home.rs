//! Home page component
//!
//! The application root, and the navigation target after a successful
//! sign-in or sign-up.

use leptos::prelude::*;
use leptos_router::components::A;

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-theme-primary mb-4">
                    "Welcome to Authgate"
                </h1>
                <p class="text-theme-secondary mb-8 max-w-md mx-auto">
                    "You are at the application root. Session state lives with the identity service."
                </p>
                <A
                    href="/login"
                    attr:class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                >
                    "Go to Login"
                </A>
            </div>
        </div>
    }
}
