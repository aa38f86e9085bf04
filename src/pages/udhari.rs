use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{UdhariApi, UdhariFilters};
use crate::components::icons::{icon_dollar_sign, icon_plus, icon_users};
use crate::components::{UdhariForm, UdhariList};
use crate::format::{format_currency, today};
use crate::models::{UdhariPayload, UdhariRecord, UdhariStatus, UdhariSummary};
use crate::pages::{confirm, page_header, with_prepended, with_replaced, without, LoadState};
use crate::toast::Toaster;

pub fn mark_settled(records: &[UdhariRecord], id: &str, settled_on: String) -> Vec<UdhariRecord> {
    records
        .iter()
        .map(|record| {
            if record.id == id {
                let mut next = record.clone();
                next.status = UdhariStatus::Settled;
                next.settled_date = Some(settled_on.clone());
                next
            } else {
                record.clone()
            }
        })
        .collect()
}

// the summary endpoint has no failure toast; a stale card beats a second banner
fn refresh_summary(summary: UseStateHandle<Option<UdhariSummary>>) {
    spawn_local(async move {
        match UdhariApi::summary().await {
            Ok(data) => summary.set(Some(data)),
            Err(err) => {
                web_sys::console::error_1(&format!("Failed to load udhari summary: {err}").into())
            }
        }
    });
}

fn summary_card(
    label: &'static str,
    icon: Html,
    icon_class: &'static str,
    value: Html,
    sub: Html,
) -> Html {
    html! {
        <div class="card">
            <div class="card-content">
                <div class="flex items-center">
                    <div class={format!("flex-shrink-0 {}", icon_class)}>{ icon }</div>
                    <div class="ml-5 w-0 flex-1">
                        <dl>
                            <dt class="text-sm font-medium text-gray-500 dark:text-gray-400 truncate">{ label }</dt>
                            <dd class="text-lg font-medium">{ value }</dd>
                            { sub }
                        </dl>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(UdhariPage)]
pub fn udhari_page() -> Html {
    let state = use_state(|| LoadState::<Vec<UdhariRecord>>::Idle);
    let summary = use_state(|| None::<UdhariSummary>);
    let filters = use_state(UdhariFilters::default);
    let show_form = use_state(|| false);
    let editing = use_state(|| None::<UdhariRecord>);

    let toaster = use_context::<Toaster>();

    {
        let state = state.clone();
        let summary = summary.clone();
        let toaster = toaster.clone();
        use_effect_with_deps(
            move |filters: &UdhariFilters| {
                let filters = filters.clone();
                let previous = (*state).clone();
                state.set(LoadState::Loading);
                {
                    let state = state.clone();
                    let toaster = toaster.clone();
                    spawn_local(async move {
                        match UdhariApi::list(&filters).await {
                            Ok(records) => state.set(LoadState::Ready(records)),
                            Err(err) => {
                                if let Some(toaster) = &toaster {
                                    toaster
                                        .error(&err.user_message("Failed to load udhari records"));
                                }
                                state.set(previous.failed());
                            }
                        }
                    });
                }
                refresh_summary(summary);
                || ()
            },
            (*filters).clone(),
        );
    }

    let on_kind_change = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.kind = select.value();
            filters.set(next);
        })
    };
    let on_status_change = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.status = select.value();
            filters.set(next);
        })
    };

    let open_form = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(true))
    };
    let close_form = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(false))
    };
    let close_editor = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };
    let start_editing = {
        let editing = editing.clone();
        Callback::from(move |record: UdhariRecord| editing.set(Some(record)))
    };

    let on_create = {
        let state = state.clone();
        let summary = summary.clone();
        let show_form = show_form.clone();
        let toaster = toaster.clone();
        Callback::from(move |payload: UdhariPayload| {
            let state = state.clone();
            let summary = summary.clone();
            let show_form = show_form.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match UdhariApi::create(&payload).await {
                    Ok(record) => {
                        let current = match &*state {
                            LoadState::Ready(list) => list.clone(),
                            _ => Vec::new(),
                        };
                        state.set(LoadState::Ready(with_prepended(&current, record)));
                        show_form.set(false);
                        refresh_summary(summary);
                        if let Some(toaster) = &toaster {
                            toaster.success("Udhari record added successfully");
                        }
                    }
                    Err(err) => {
                        if let Some(toaster) = &toaster {
                            toaster.error(&err.user_message("Failed to add udhari record"));
                        }
                    }
                }
            });
        })
    };

    let on_update = {
        let state = state.clone();
        let summary = summary.clone();
        let editing = editing.clone();
        let toaster = toaster.clone();
        Callback::from(move |payload: UdhariPayload| {
            if let Some(target) = (*editing).clone() {
                let state = state.clone();
                let summary = summary.clone();
                let editing = editing.clone();
                let toaster = toaster.clone();
                spawn_local(async move {
                    match UdhariApi::update(&target.id, &payload).await {
                        Ok(updated) => {
                            let current = match &*state {
                                LoadState::Ready(list) => list.clone(),
                                _ => Vec::new(),
                            };
                            state.set(LoadState::Ready(with_replaced(&current, updated)));
                            editing.set(None);
                            refresh_summary(summary);
                            if let Some(toaster) = &toaster {
                                toaster.success("Udhari record updated successfully");
                            }
                        }
                        Err(err) => {
                            if let Some(toaster) = &toaster {
                                toaster.error(&err.user_message("Failed to update udhari record"));
                            }
                        }
                    }
                });
            }
        })
    };

    let on_delete = {
        let state = state.clone();
        let summary = summary.clone();
        let toaster = toaster.clone();
        Callback::from(move |id: String| {
            if !confirm("Are you sure you want to delete this record?") {
                return;
            }
            let state = state.clone();
            let summary = summary.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match UdhariApi::remove(&id).await {
                    Ok(()) => {
                        let current = match &*state {
                            LoadState::Ready(list) => list.clone(),
                            _ => Vec::new(),
                        };
                        state.set(LoadState::Ready(without(&current, &id)));
                        refresh_summary(summary);
                        if let Some(toaster) = &toaster {
                            toaster.success("Udhari record deleted successfully");
                        }
                    }
                    Err(err) => {
                        if let Some(toaster) = &toaster {
                            toaster.error(&err.user_message("Failed to delete udhari record"));
                        }
                    }
                }
            });
        })
    };

    let on_settle = {
        let state = state.clone();
        let summary = summary.clone();
        let toaster = toaster.clone();
        Callback::from(move |id: String| {
            let state = state.clone();
            let summary = summary.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match UdhariApi::settle(&id).await {
                    Ok(()) => {
                        let current = match &*state {
                            LoadState::Ready(list) => list.clone(),
                            _ => Vec::new(),
                        };
                        state.set(LoadState::Ready(mark_settled(&current, &id, today())));
                        refresh_summary(summary);
                        if let Some(toaster) = &toaster {
                            toaster.success("Record marked as settled");
                        }
                    }
                    Err(err) => {
                        if let Some(toaster) = &toaster {
                            toaster.error(&err.user_message("Failed to settle record"));
                        }
                    }
                }
            });
        })
    };

    let record_count = match &*state {
        LoadState::Ready(records) => records.len(),
        _ => 0,
    };

    html! {
        <div class="space-y-6">
            { page_header("Udhari Tracker", "Track your borrow and lend transactions", html! {
                <button onclick={open_form} class="btn btn-primary btn-md flex items-center">
                    <span class="mr-2">{ icon_plus() }</span>
                    {"Add Record"}
                </button>
            }) }

            if let Some(summary) = &*summary {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    { summary_card("You Lent", icon_dollar_sign(), "text-success-600", html! {
                        <span class="text-success-600">{ format_currency(summary.lend_total, "₹") }</span>
                    }, html! {
                        <dd class="text-xs text-gray-500 dark:text-gray-400">{ format!("{} records", summary.lend_count) }</dd>
                    }) }
                    { summary_card("You Borrowed", icon_dollar_sign(), "text-warning-600", html! {
                        <span class="text-warning-600">{ format_currency(summary.borrow_total, "₹") }</span>
                    }, html! {
                        <dd class="text-xs text-gray-500 dark:text-gray-400">{ format!("{} records", summary.borrow_count) }</dd>
                    }) }
                    { summary_card("Net Balance", icon_dollar_sign(), if summary.net_balance >= 0.0 { "text-success-600" } else { "text-danger-600" }, html! {
                        <span class={if summary.net_balance >= 0.0 { "text-success-600" } else { "text-danger-600" }}>
                            { format_currency(summary.net_balance, "₹") }
                        </span>
                    }, html! {}) }
                    { summary_card("Total Records", icon_users(), "text-primary-600", html! {
                        <span class="text-gray-900 dark:text-white">{ summary.borrow_count + summary.lend_count }</span>
                    }, html! {}) }
                </div>
            }

            <div class="card">
                <div class="card-content">
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{"Type"}</label>
                            <select class="input" onchange={on_kind_change}>
                                <option value="all" selected={filters.kind == "all"}>{"All Types"}</option>
                                <option value="borrow" selected={filters.kind == "borrow"}>{"Borrow"}</option>
                                <option value="lend" selected={filters.kind == "lend"}>{"Lend"}</option>
                            </select>
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{"Status"}</label>
                            <select class="input" onchange={on_status_change}>
                                <option value="all" selected={filters.status == "all"}>{"All Status"}</option>
                                <option value="pending" selected={filters.status == "pending"}>{"Pending"}</option>
                                <option value="settled" selected={filters.status == "settled"}>{"Settled"}</option>
                            </select>
                        </div>
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3 class="text-lg font-medium text-gray-900 dark:text-white">
                        { format!("Udhari Records ({})", record_count) }
                    </h3>
                </div>
                <div class="card-content">
                    {
                        match &*state {
                            current if current.is_fetching() => html! {
                                <div class="flex items-center justify-center h-32">
                                    <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-primary-600"></div>
                                </div>
                            },
                            LoadState::Ready(records) if !records.is_empty() => html! {
                                <UdhariList
                                    records={records.clone()}
                                    on_edit={start_editing}
                                    on_settle={on_settle}
                                    on_delete={on_delete}
                                />
                            },
                            _ => html! {
                                <div class="text-center py-8 text-gray-500 dark:text-gray-400">
                                    {"No udhari records found. Add your first record to get started."}
                                </div>
                            },
                        }
                    }
                </div>
            </div>

            if *show_form {
                <UdhariForm record={None} on_submit={on_create} on_cancel={close_form} />
            }

            if let Some(record) = (*editing).clone() {
                <UdhariForm record={Some(record)} on_submit={on_update} on_cancel={close_editor} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UdhariKind;

    fn record(id: &str, status: UdhariStatus) -> UdhariRecord {
        UdhariRecord {
            id: id.to_string(),
            person_name: "Ravi".to_string(),
            amount: 500.0,
            kind: UdhariKind::Borrow,
            description: String::new(),
            date: "2024-06-01".to_string(),
            notes: String::new(),
            status,
            settled_date: None,
        }
    }

    #[test]
    fn settling_flips_only_the_matching_record() {
        let records = vec![
            record("a", UdhariStatus::Pending),
            record("b", UdhariStatus::Pending),
        ];
        let next = mark_settled(&records, "b", "2024-06-15".to_string());
        assert_eq!(next[0].status, UdhariStatus::Pending);
        assert_eq!(next[0].settled_date, None);
        assert_eq!(next[1].status, UdhariStatus::Settled);
        assert_eq!(next[1].settled_date, Some("2024-06-15".to_string()));
    }

    #[test]
    fn settling_an_unknown_id_changes_nothing() {
        let records = vec![record("a", UdhariStatus::Pending)];
        let next = mark_settled(&records, "zzz", "2024-06-15".to_string());
        assert_eq!(next, records);
    }
}
