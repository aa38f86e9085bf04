use yew::prelude::*;

use crate::components::icons::{icon_dollar_sign, icon_edit, icon_trash};
use crate::format::{format_currency, format_date};
use crate::models::Expense;

fn category_badge_class(category: &str) -> &'static str {
    match category {
        "Breakfast" => "bg-orange-100 text-orange-800 dark:bg-orange-900/20 dark:text-orange-400",
        "Lunch" => "bg-yellow-100 text-yellow-800 dark:bg-yellow-900/20 dark:text-yellow-400",
        "Dinner" => "bg-red-100 text-red-800 dark:bg-red-900/20 dark:text-red-400",
        "Shopping" => "bg-purple-100 text-purple-800 dark:bg-purple-900/20 dark:text-purple-400",
        "Travel" => "bg-blue-100 text-blue-800 dark:bg-blue-900/20 dark:text-blue-400",
        "Entertainment" => "bg-pink-100 text-pink-800 dark:bg-pink-900/20 dark:text-pink-400",
        "Healthcare" => "bg-green-100 text-green-800 dark:bg-green-900/20 dark:text-green-400",
        "Education" => "bg-indigo-100 text-indigo-800 dark:bg-indigo-900/20 dark:text-indigo-400",
        "Utilities" => "bg-gray-100 text-gray-800 dark:bg-gray-900/20 dark:text-gray-400",
        "Transportation" => "bg-cyan-100 text-cyan-800 dark:bg-cyan-900/20 dark:text-cyan-400",
        _ => "bg-slate-100 text-slate-800 dark:bg-slate-900/20 dark:text-slate-400",
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub expenses: Vec<Expense>,
    pub on_edit: Callback<Expense>,
    pub on_delete: Callback<String>,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    html! {
        <div class="space-y-4">
            { for props.expenses.iter().map(|expense| {
                let on_edit = {
                    let on_edit = props.on_edit.clone();
                    let expense = expense.clone();
                    Callback::from(move |_| on_edit.emit(expense.clone()))
                };
                let on_delete = {
                    let on_delete = props.on_delete.clone();
                    let id = expense.id.clone();
                    Callback::from(move |_| on_delete.emit(id.clone()))
                };

                html! {
                    <div key={expense.id.clone()} class="flex items-center justify-between p-4 bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg hover:shadow-md transition-shadow">
                        <div class="flex-1">
                            <div class="flex items-center space-x-3">
                                <div class="flex-shrink-0">
                                    <div class="h-10 w-10 rounded-full bg-primary-100 dark:bg-primary-900 flex items-center justify-center text-primary-600 dark:text-primary-400">
                                        { icon_dollar_sign() }
                                    </div>
                                </div>
                                <div class="flex-1 min-w-0">
                                    <div class="flex items-center space-x-2">
                                        <span class={format!("inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}", category_badge_class(&expense.category))}>
                                            { &expense.category }
                                        </span>
                                        <span class="text-sm text-gray-500 dark:text-gray-400">
                                            { format_date(&expense.date) }
                                        </span>
                                    </div>
                                    <p class="text-sm text-gray-900 dark:text-white font-medium">
                                        { format_currency(expense.amount, "₹") }
                                    </p>
                                    if !expense.description.is_empty() {
                                        <p class="text-sm text-gray-500 dark:text-gray-400 truncate">
                                            { &expense.description }
                                        </p>
                                    }
                                    <div class="flex items-center space-x-4 mt-1">
                                        <span class="text-xs text-gray-500 dark:text-gray-400">
                                            { format!("Payment: {}", expense.payment_method) }
                                        </span>
                                    </div>
                                </div>
                            </div>
                        </div>
                        <div class="flex items-center space-x-2">
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
    fn every_known_category_has_its_own_badge_color() {
        for category in crate::models::CATEGORIES {
            if category == "Other" {
                continue;
            }
            assert_ne!(
                category_badge_class(category),
                category_badge_class("Other"),
                "{category} should not fall back to the default badge"
            );
        }
    }

    #[test]
    fn unknown_categories_share_the_fallback_badge() {
        assert_eq!(
            category_badge_class("Groceries"),
            category_badge_class("Other")
        );
    }
}
