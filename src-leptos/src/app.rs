//! Main App component and global state

use crate::bridge;
use crate::i18n::{Catalog, Language};
use crate::pages::Dashboard;
use antigravity_types::{Account, UiConfig};
use leptos::prelude::*;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Account pushed by the host shell, `None` when nothing is active
    pub current_account: RwSignal<Option<Account>>,
    pub config: RwSignal<UiConfig>,
    /// Whether the host registered a switch-account handler
    pub switch_available: RwSignal<bool>,
    /// Translation catalog for `config.language`
    pub catalog: Memo<Catalog>,
}

impl AppState {
    pub fn new(config: UiConfig) -> Self {
        let config = RwSignal::new(config);
        let catalog = Memo::new(move |_| {
            config.with(|c| Catalog::bundled(Language::resolve_or_default(&c.language)))
        });

        Self {
            current_account: RwSignal::new(None),
            config,
            switch_available: RwSignal::new(false),
            catalog,
        }
    }
}

/// Initial UI config: defaults, with the browser's language when it has one.
fn initial_config() -> UiConfig {
    let config = UiConfig::default();
    match web_sys::window().and_then(|w| w.navigator().language()) {
        Some(language) => config.with_language(language),
        None => config,
    }
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(initial_config());
    provide_context(state);

    // Host calls made before mount were buffered by the bridge
    bridge::attach(state);

    view! {
        <div class="app-container" data-theme=move || state.config.with(|c| c.theme.clone())>
            <main class="main-content">
                <Dashboard />
            </main>
        </div>
    }
}
