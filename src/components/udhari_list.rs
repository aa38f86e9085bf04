use yew::prelude::*;

use crate::components::icons::{icon_check, icon_dollar_sign, icon_edit, icon_trash};
use crate::format::{format_currency, format_date};
use crate::models::{UdhariKind, UdhariRecord, UdhariStatus};

fn kind_icon_class(kind: UdhariKind) -> &'static str {
    match kind {
        UdhariKind::Lend => "bg-success-100 dark:bg-success-900/20 text-success-600 dark:text-success-400",
        UdhariKind::Borrow => "bg-warning-100 dark:bg-warning-900/20 text-warning-600 dark:text-warning-400",
    }
}

fn kind_badge(kind: UdhariKind) -> (&'static str, &'static str) {
    match kind {
        UdhariKind::Lend => (
            "Lent",
            "bg-success-100 text-success-800 dark:bg-success-900/20 dark:text-success-400",
        ),
        UdhariKind::Borrow => (
            "Borrowed",
            "bg-warning-100 text-warning-800 dark:bg-warning-900/20 dark:text-warning-400",
        ),
    }
}

fn status_badge(status: UdhariStatus) -> (&'static str, &'static str) {
    match status {
        UdhariStatus::Settled => (
            "Settled",
            "bg-success-100 text-success-800 dark:bg-success-900/20 dark:text-success-400",
        ),
        UdhariStatus::Pending => (
            "Pending",
            "bg-warning-100 text-warning-800 dark:bg-warning-900/20 dark:text-warning-400",
        ),
    }
}

#[derive(Properties, PartialEq)]
pub struct UdhariListProps {
    pub records: Vec<UdhariRecord>,
    pub on_edit: Callback<UdhariRecord>,
    pub on_settle: Callback<String>,
    pub on_delete: Callback<String>,
}

#[function_component(UdhariList)]
pub fn udhari_list(props: &UdhariListProps) -> Html {
    html! {
        <div class="space-y-4">
            { for props.records.iter().map(|record| {
                let on_edit = {
                    let on_edit = props.on_edit.clone();
                    let record = record.clone();
                    Callback::from(move |_| on_edit.emit(record.clone()))
                };
                let on_settle = {
                    let on_settle = props.on_settle.clone();
                    let id = record.id.clone();
                    Callback::from(move |_| on_settle.emit(id.clone()))
                };
                let on_delete = {
                    let on_delete = props.on_delete.clone();
                    let id = record.id.clone();
                    Callback::from(move |_| on_delete.emit(id.clone()))
                };

                let (kind_label, kind_class) = kind_badge(record.kind);
                let (status_label, status_class) = status_badge(record.status);

                html! {
                    <div key={record.id.clone()} class="flex items-center justify-between p-4 bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg hover:shadow-md transition-shadow">
                        <div class="flex-1">
                            <div class="flex items-center space-x-3">
                                <div class="flex-shrink-0">
                                    <div class={format!("h-10 w-10 rounded-full flex items-center justify-center {}", kind_icon_class(record.kind))}>
                                        { icon_dollar_sign() }
                                    </div>
                                </div>
                                <div class="flex-1 min-w-0">
                                    <div class="flex items-center space-x-2">
                                        <span class={format!("inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}", kind_class)}>
                                            { kind_label }
                                        </span>
                                        <span class={format!("inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}", status_class)}>
                                            { status_label }
                                        </span>
                                    </div>
                                    <p class="text-sm text-gray-900 dark:text-white font-medium">
                                        { format!("{} - {}", record.person_name, format_currency(record.amount, "₹")) }
                                    </p>
                                    if !record.description.is_empty() {
                                        <p class="text-sm text-gray-500 dark:text-gray-400 truncate">
                                            { &record.description }
                                        </p>
                                    }
                                    <div class="flex items-center space-x-4 mt-1">
                                        <span class="text-xs text-gray-500 dark:text-gray-400">
                                            { format!("Date: {}", format_date(&record.date)) }
                                        </span>
                                        if let Some(settled_date) = &record.settled_date {
                                            <span class="text-xs text-gray-500 dark:text-gray-400">
                                                { format!("Settled: {}", format_date(settled_date)) }
                                            </span>
                                        }
                                    </div>
                                </div>
                            </div>
                        </div>
                        <div class="flex items-center space-x-2">
                            if record.status == UdhariStatus::Pending {
                                <button
                                    onclick={on_settle}
                                    class="p-2 text-gray-400 hover:text-success-600 dark:hover:text-success-400 transition-colors"
                                    title="Mark as settled"
                                >
                                    { icon_check() }
                                </button>
                            }
                            <button onclick={on_edit} class="p-2 text-gray-400 hover:text-primary-600 dark:hover:text-primary-400 transition-colors">
                                { icon_edit() }
                            </button>
                            <button onclick={on_delete} class="p-2 text-gray-400 hover:text-danger-600 dark:hover:text-danger-400 transition-colors">
                                { icon_trash() }
                            </button>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lends_read_as_lent_and_borrows_as_borrowed() {
        assert_eq!(kind_badge(UdhariKind::Lend).0, "Lent");
        assert_eq!(kind_badge(UdhariKind::Borrow).0, "Borrowed");
    }

    #[test]
    fn settled_and_pending_use_distinct_badges() {
        let (settled_label, settled_class) = status_badge(UdhariStatus::Settled);
        let (pending_label, pending_class) = status_badge(UdhariStatus::Pending);
        assert_eq!(settled_label, "Settled");
        assert_eq!(pending_label, "Pending");
        assert_ne!(settled_class, pending_class);
    }
}
