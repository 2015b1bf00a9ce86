use leptos::prelude::*;

/// Tab item definition
#[derive(Clone, PartialEq)]
pub struct TabItem {
    /// Unique identifier for the tab
    pub id: &'static str,
    /// Display label for the tab
    pub label: &'static str,
}

impl TabItem {
    pub fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Tabs component for organizing content into switchable panels
#[component]
pub fn Tabs(
    /// List of tab items
    tabs: Vec<TabItem>,
    /// Currently active tab ID
    active_tab: RwSignal<&'static str>,
    /// Callback when tab is changed
    on_change: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="tabs-container">
            <div class="tabs-list tabs-full-width" role="tablist">
                {tabs.into_iter().map(|tab| {
                    let tab_id = tab.id;
                    let is_active = Signal::derive(move || active_tab.get() == tab_id);

                    let tab_class = move || {
                        if is_active.get() { "tab-item tab-active" } else { "tab-item" }
                    };

                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| on_change.run(tab_id)
                            role="tab"
                            aria-selected=move || is_active.get().to_string()
                            aria-controls=format!("panel-{}", tab_id)
                        >
                            <span class="tab-label">{tab.label}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Tab panel content component
#[component]
pub fn TabPanel(
    /// Tab ID this panel belongs to
    tab_id: &'static str,
    /// Currently active tab ID
    active_tab: RwSignal<&'static str>,
    /// Panel content
    children: Children,
) -> impl IntoView {
    let is_active = Signal::derive(move || active_tab.get() == tab_id);

    view! {
        <div
            class="tab-panel"
            role="tabpanel"
            id=format!("panel-{}", tab_id)
            style:display=move || if is_active.get() { "block" } else { "none" }
            aria-hidden=move || (!is_active.get()).to_string()
        >
            {children()}
        </div>
    }
}
