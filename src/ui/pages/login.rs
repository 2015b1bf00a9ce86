//! Login page component
//!
//! Hosts the sign-in and sign-up forms behind a tab switch. Successful
//! authentication navigates to the application root.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::auth::{SignInForm, SignUpForm};
use crate::ui::common::{TabItem, TabPanel, Tabs};

const TAB_SIGN_IN: &str = "sign-in";
const TAB_SIGN_UP: &str = "sign-up";

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let active_tab = RwSignal::new(TAB_SIGN_IN);

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            // Header
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center h-16">
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                                <svg class="w-5 h-5 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                          d="M12 11c1.66 0 3-1.34 3-3V6a3 3 0 10-6 0v2c0 1.66 1.34 3 3 3z" />
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                          d="M5 11h14v9a2 2 0 01-2 2H7a2 2 0 01-2-2v-9z" />
                                </svg>
                            </div>
                            <span class="text-xl font-bold text-theme-primary">"Authgate"</span>
                        </A>
                    </div>
                </div>
            </header>

            // Main content
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md space-y-4">
                    <Tabs
                        tabs=vec![
                            TabItem::new(TAB_SIGN_IN, "Sign In"),
                            TabItem::new(TAB_SIGN_UP, "Sign Up"),
                        ]
                        active_tab=active_tab
                        on_change=Callback::new(move |id| active_tab.set(id))
                    />
                    <TabPanel tab_id=TAB_SIGN_IN active_tab=active_tab>
                        <SignInForm
                            on_sign_up_click=Callback::new(move |_| active_tab.set(TAB_SIGN_UP))
                        />
                    </TabPanel>
                    <TabPanel tab_id=TAB_SIGN_UP active_tab=active_tab>
                        <SignUpForm
                            on_sign_in_click=Callback::new(move |_| active_tab.set(TAB_SIGN_IN))
                        />
                    </TabPanel>
                </div>
            </main>

            // Footer
            <footer class="py-4 border-t border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <p class="text-center text-sm text-theme-tertiary">
                        "© 2026 Authgate. All rights reserved."
                    </p>
                </div>
            </footer>
        </div>
    }
}
