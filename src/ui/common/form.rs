use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Generic form field component with label, input, and inline error
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Autocomplete hint for the browser
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: RwSignal<String>,
    /// Validation error for this field
    error: RwSignal<Option<String>>,
    /// Called when the field loses focus
    #[prop(optional, into)]
    on_blur: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">{label}</label>
            <input
                type=input_type
                class="input-base"
                class:border-red-500=move || error.get().is_some()
                autocomplete=autocomplete
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    error.set(None);
                }
                on:blur=move |_| {
                    if let Some(callback) = on_blur.as_ref() {
                        callback.run(());
                    }
                }
            />
            {move || {
                error.get().map(|err| view! {
                    <div class="flex items-center text-sm text-theme-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Password field with a visibility toggle
#[component]
pub fn PasswordField(
    /// Field label text
    label: &'static str,
    /// Autocomplete hint (current-password or new-password)
    #[prop(default = "current-password")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: RwSignal<String>,
    /// Validation error for this field
    error: RwSignal<Option<String>>,
    /// Called when the field loses focus
    #[prop(optional, into)]
    on_blur: Option<Callback<()>>,
) -> impl IntoView {
    let show_password = RwSignal::new(false);

    view! {
        <div class="space-y-1.5">
            <label class="label">{label}</label>
            <div class="relative">
                <input
                    type=move || if show_password.get() { "text" } else { "password" }
                    class="input-base pr-10"
                    class:border-red-500=move || error.get().is_some()
                    autocomplete=autocomplete
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        value.set(event_target_value(&ev));
                        error.set(None);
                    }
                    on:blur=move |_| {
                        if let Some(callback) = on_blur.as_ref() {
                            callback.run(());
                        }
                    }
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                    on:click=move |_| show_password.update(|v| *v = !*v)
                >
                    {move || {
                        if show_password.get() {
                            view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                        }
                    }}
                </button>
            </div>
            {move || {
                error.get().map(|err| view! {
                    <div class="flex items-center text-sm text-theme-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}
