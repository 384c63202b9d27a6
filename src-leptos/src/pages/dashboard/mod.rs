//! Dashboard page hosting the current account card

pub(crate) mod current_account;
pub mod summary;

use current_account::CurrentAccountSection;

use crate::app::AppState;
use crate::bridge;
use leptos::prelude::*;

/// Dashboard page with the active account overview.
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<AppState>();

    let switch_account = Callback::new(|()| bridge::notify_switch());
    let on_switch =
        Signal::derive(move || state.switch_available.get().then_some(switch_account));

    view! {
        <div class="page dashboard">
            <div class="dashboard-columns">
                <CurrentAccountSection
                    current_account=state.current_account
                    on_switch=on_switch
                />
            </div>
        </div>
    }
}
