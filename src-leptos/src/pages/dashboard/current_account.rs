//! Current account card: active account email and per-model quotas

use super::summary::{AccountSummary, QuotaRow};
use crate::app::AppState;
use crate::components::{value_class, Button, ButtonVariant, QuotaBar};
use antigravity_types::Account;
use chrono::Utc;
use leptos::prelude::*;

/// Current account section showing active account details.
///
/// The switch control only appears while `on_switch` holds a callback.
#[component]
pub fn CurrentAccountSection(
    #[prop(into)] current_account: Signal<Option<Account>>,
    #[prop(optional, into)] on_switch: MaybeProp<Callback<()>>,
) -> impl IntoView {
    let catalog = expect_context::<AppState>().catalog;

    let summary = Memo::new(move |_| {
        AccountSummary::build(
            current_account.get().as_ref(),
            &catalog.get(),
            Utc::now(),
            on_switch.get().is_some(),
        )
    });

    let switch = move || run_switch(on_switch.get_untracked());

    view! {
        <section class="dashboard-card current-account">
            {move || match summary.get() {
                AccountSummary::Empty { header, message } => view! {
                    <h2 class="card-title">{header}</h2>
                    <div class="no-account">{message}</div>
                }.into_any(),
                AccountSummary::Active { header, email, rows, switch_label } => view! {
                    <h2 class="card-title">{header}</h2>
                    <div class="current-account-detail">
                        <div class="account-email">{email}</div>
                        <div class="quota-rows">
                            <For
                                each=move || rows.clone()
                                key=|row| row.key.clone()
                                children=|row| view! { <QuotaRowView row=row /> }
                            />
                        </div>
                    </div>
                    {switch_label.map(|label| view! {
                        <div class="card-actions">
                            <Button
                                text=label
                                variant=ButtonVariant::Secondary
                                block=true
                                on_click=switch
                            />
                        </div>
                    })}
                }.into_any(),
            }}
        </section>
    }
}

/// Activate the switch control: runs the callback once, if there is one.
fn run_switch(on_switch: Option<Callback<()>>) {
    if let Some(callback) = on_switch {
        log::debug!("Switch account requested");
        callback.run(());
    }
}

#[component]
fn QuotaRowView(row: QuotaRow) -> impl IntoView {
    view! {
        <div class="quota-row">
            <div class="quota-row-header">
                <span class="quota-model">{row.display_name}</span>
                <div class="quota-meta">
                    <span class="quota-reset" title=row.reset_tooltip>{row.reset_label}</span>
                    <span class=value_class(row.appearance)>{row.percentage_label}</span>
                </div>
            </div>
            <QuotaBar width=row.fill_width appearance=row.appearance />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_callback() -> (Callback<()>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let callback = Callback::new(move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (callback, calls)
    }

    #[test]
    fn test_run_switch_invokes_callback_once() {
        let (callback, calls) = counting_callback();

        run_switch(Some(callback));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        run_switch(Some(callback));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_run_switch_without_callback_is_noop() {
        let (_callback, calls) = counting_callback();

        run_switch(None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
