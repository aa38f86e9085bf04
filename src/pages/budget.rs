use std::collections::HashMap;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::BudgetApi;
use crate::components::charts::utilization_bar_class;
use crate::components::icons::{
    icon_dollar_sign, icon_settings, icon_trending_down, icon_trending_up, icon_x,
};
use crate::format::format_currency;
use crate::models::{Budget, BudgetPayload, CategoryBudget, CATEGORIES};
use crate::pages::{page_header, LoadState};
use crate::toast::Toaster;

pub fn build_budget_payload(
    monthly: &str,
    category_amounts: &HashMap<String, String>,
) -> Result<BudgetPayload, String> {
    let monthly_budget = monthly
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| *amount > 0.0)
        .ok_or_else(|| "Please enter a valid budget amount".to_string())?;
    // per-category entries are optional; blank and zero rows are dropped, and the
    // payload keeps the fixed category order rather than typing order
    let category_budgets = CATEGORIES
        .iter()
        .filter_map(|category| {
            let amount = category_amounts.get(*category)?.trim().parse::<f64>().ok()?;
            (amount > 0.0).then(|| CategoryBudget {
                category: category.to_string(),
                amount,
            })
        })
        .collect();
    Ok(BudgetPayload {
        monthly_budget,
        category_budgets,
    })
}

// savings and utilization are computed server-side, so every save is followed
// by a full re-read instead of a local merge
async fn fetch_budget(state: UseStateHandle<LoadState<Option<Budget>>>, toaster: Option<Toaster>) {
    let previous = (*state).clone();
    state.set(LoadState::Loading);
    match BudgetApi::fetch().await {
        Ok(budget) => state.set(LoadState::Ready(budget)),
        Err(err) => {
            if let Some(toaster) = &toaster {
                toaster.error(&err.user_message("Failed to load budget data"));
            }
            state.set(previous.failed());
        }
    }
}

fn overview_card(label: &'static str, icon: Html, icon_class: &'static str, value: Html) -> Html {
    html! {
        <div class="card">
            <div class="card-content">
                <div class="flex items-center">
                    <div class={format!("flex-shrink-0 {}", icon_class)}>{ icon }</div>
                    <div class="ml-5 w-0 flex-1">
                        <dl>
                            <dt class="text-sm font-medium text-gray-500 dark:text-gray-400 truncate">{ label }</dt>
                            <dd class="text-lg font-medium">{ value }</dd>
                        </dl>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(BudgetPage)]
pub fn budget_page() -> Html {
    let state = use_state(|| LoadState::<Option<Budget>>::Idle);
    let show_form = use_state(|| false);
    let monthly = use_state(String::new);
    let category_amounts = use_state(HashMap::<String, String>::new);
    let form_error = use_state(|| None::<String>);

    let toaster = use_context::<Toaster>();

    {
        let state = state.clone();
        let toaster = toaster.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(fetch_budget(state, toaster));
                || ()
            },
            (),
        );
    }

    let open_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(true))
    };
    let close_form = {
        let show_form = show_form.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: MouseEvent| {
            show_form.set(false);
            form_error.set(None);
        })
    };

    let on_monthly_input = {
        let monthly = monthly.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            monthly.set(input.value());
        })
    };
    // one input handler per category row, keyed by the fixed category name
    let amount_input = {
        let category_amounts = category_amounts.clone();
        move |category: &'static str| {
            let category_amounts = category_amounts.clone();
            Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                let mut next = (*category_amounts).clone();
                if input.value().trim().is_empty() {
                    next.remove(category);
                } else {
                    next.insert(category.to_string(), input.value());
                }
                category_amounts.set(next);
            })
        }
    };

    let on_submit = {
        let state = state.clone();
        let show_form = show_form.clone();
        let monthly = monthly.clone();
        let category_amounts = category_amounts.clone();
        let form_error = form_error.clone();
        let toaster = toaster.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match build_budget_payload(&monthly, &category_amounts) {
                Ok(payload) => {
                    form_error.set(None);
                    let state = state.clone();
                    let show_form = show_form.clone();
                    let monthly = monthly.clone();
                    let category_amounts = category_amounts.clone();
                    let toaster = toaster.clone();
                    spawn_local(async move {
                        match BudgetApi::save(&payload).await {
                            Ok(()) => {
                                fetch_budget(state, toaster.clone()).await;
                                show_form.set(false);
                                monthly.set(String::new());
                                category_amounts.set(HashMap::new());
                                if let Some(toaster) = &toaster {
                                    toaster.success("Budget updated successfully");
                                }
                            }
                            Err(err) => {
                                if let Some(toaster) = &toaster {
                                    toaster.error(&err.user_message("Failed to update budget"));
                                }
                            }
                        }
                    });
                }
                Err(message) => form_error.set(Some(message)),
            }
        })
    };

    let budget = match &*state {
        LoadState::Ready(budget) => budget.clone(),
        // a failed first load falls back to the set-budget call to action
        LoadState::Failed => None,
        _ => {
            return html! {
                <div class="flex items-center justify-center h-64">
                    <div class="animate-spin rounded-full h-32 w-32 border-b-2 border-primary-600"></div>
                </div>
            };
        }
    };

    html! {
        <div class="space-y-6">
            { page_header("Budget Management", "Set and track your monthly budget", html! {
                <button onclick={open_form} class="btn btn-primary btn-md flex items-center">
                    <span class="mr-2">{ icon_settings() }</span>
                    { if budget.is_some() { "Update Budget" } else { "Set Budget" } }
                </button>
            }) }

            if let Some(budget) = &budget {
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    { overview_card("Monthly Budget", icon_dollar_sign(), "text-primary-600", html! {
                        <span class="text-gray-900 dark:text-white">{ format_currency(budget.monthly_budget, "₹") }</span>
                    }) }
                    { overview_card("Total Spent", icon_trending_up(), "text-danger-600", html! {
                        <span class="text-gray-900 dark:text-white">{ format_currency(budget.total_spent, "₹") }</span>
                    }) }
                    { overview_card("Savings", icon_trending_down(), if budget.savings >= 0.0 { "text-success-600" } else { "text-danger-600" }, html! {
                        <span class={if budget.savings >= 0.0 { "text-success-600" } else { "text-danger-600" }}>
                            { format_currency(budget.savings, "₹") }
                        </span>
                    }) }
                </div>

                <div class="card">
                    <div class="card-header">
                        <h3 class="text-lg font-medium text-gray-900 dark:text-white">{"Budget Progress"}</h3>
                    </div>
                    <div class="card-content">
                        <div class="space-y-4">
                            <div>
                                <div class="flex justify-between text-sm text-gray-600 dark:text-gray-400 mb-1">
                                    <span>{ format!("Spent: {}", format_currency(budget.total_spent, "₹")) }</span>
                                    <span>{ format!("Budget: {}", format_currency(budget.monthly_budget, "₹")) }</span>
                                </div>
                                <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-3">
                                    <div
                                        class={format!("h-3 rounded-full {}", utilization_bar_class(budget.budget_utilization))}
                                        style={format!("width: {}%", budget.budget_utilization.min(100.0) as i32)}
                                    ></div>
                                </div>
                                <div class="flex justify-between text-xs text-gray-500 dark:text-gray-400 mt-1">
                                    <span>{ format!("{:.1}% utilized", budget.budget_utilization) }</span>
                                    if budget.budget_utilization > 100.0 {
                                        <span class="text-danger-600">{"Over budget"}</span>
                                    }
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                if !budget.category_budgets.is_empty() {
                    <div class="card">
                        <div class="card-header">
                            <h3 class="text-lg font-medium text-gray-900 dark:text-white">{"Category Budgets"}</h3>
                        </div>
                        <div class="card-content">
                            <div class="space-y-4">
                                { for budget.category_budgets.iter().map(|entry| html! {
                                    <div key={entry.category.clone()} class="space-y-2">
                                        <div class="flex justify-between text-sm">
                                            <span class="font-medium text-gray-900 dark:text-white">{ entry.category.clone() }</span>
                                            <span class="text-gray-600 dark:text-gray-400">{ format_currency(entry.amount, "₹") }</span>
                                        </div>
                                        <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2">
                                            <div class="h-2 rounded-full bg-primary-500" style="width: 100%"></div>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                }
            }

            if *show_form {
                <div class="fixed inset-0 z-50 overflow-y-auto">
                    <div class="flex items-center justify-center min-h-screen pt-4 px-4 pb-20 text-center sm:block sm:p-0">
                        <div class="fixed inset-0 bg-gray-500 bg-opacity-75 transition-opacity" onclick={close_form.clone()}></div>

                        <div class="inline-block align-bottom bg-white dark:bg-gray-800 rounded-lg text-left overflow-hidden shadow-xl transform transition-all sm:my-8 sm:align-middle sm:max-w-2xl sm:w-full">
                            <div class="bg-white dark:bg-gray-800 px-4 pt-5 pb-4 sm:p-6 sm:pb-4">
                                <div class="flex items-center justify-between mb-4">
                                    <h3 class="text-lg font-medium text-gray-900 dark:text-white">
                                        { if budget.is_some() { "Update Budget" } else { "Set Monthly Budget" } }
                                    </h3>
                                    <button onclick={close_form.clone()} class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-300">
                                        { icon_x() }
                                    </button>
                                </div>

                                <form onsubmit={on_submit} class="space-y-6">
                                    if let Some(message) = (*form_error).clone() {
                                        <div class="text-sm text-danger-600 dark:text-danger-400">{ message }</div>
                                    }

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                                            {"Monthly Budget *"}
                                        </label>
                                        <input
                                            type="number"
                                            step="0.01"
                                            min="0"
                                            class="input"
                                            placeholder="0.00"
                                            value={(*monthly).clone()}
                                            oninput={on_monthly_input}
                                        />
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                            {"Category Budgets (Optional)"}
                                        </label>
                                        <div class="space-y-3">
                                            { for CATEGORIES.iter().map(|category| html! {
                                                <div key={*category} class="flex items-center space-x-3">
                                                    <div class="flex-1">
                                                        <label class="block text-sm text-gray-600 dark:text-gray-400">{ *category }</label>
                                                    </div>
                                                    <div class="w-32">
                                                        <input
                                                            type="number"
                                                            step="0.01"
                                                            min="0"
                                                            class="input"
                                                            placeholder="0.00"
                                                            value={category_amounts.get(*category).cloned().unwrap_or_default()}
                                                            oninput={amount_input(*category)}
                                                        />
                                                    </div>
                                                </div>
                                            }) }
                                        </div>
                                    </div>

                                    <div class="flex justify-end space-x-3 pt-4">
                                        <button type="button" onclick={close_form.clone()} class="btn btn-secondary btn-md">
                                            {"Cancel"}
                                        </button>
                                        <button type="submit" class="btn btn-primary btn-md">
                                            { if budget.is_some() { "Update Budget" } else { "Set Budget" } }
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_amount_must_be_a_positive_number() {
        let empty = HashMap::new();
        for bad in ["", "abc", "0", "-5"] {
            let err = build_budget_payload(bad, &empty);
            assert_eq!(err, Err("Please enter a valid budget amount".to_string()));
        }
    }

    #[test]
    fn blank_and_zero_category_rows_are_dropped() {
        let mut amounts = HashMap::new();
        amounts.insert("Lunch".to_string(), "1500".to_string());
        amounts.insert("Travel".to_string(), "0".to_string());
        amounts.insert("Shopping".to_string(), "  ".to_string());
        let payload = build_budget_payload("10000", &amounts).unwrap();
        assert_eq!(payload.monthly_budget, 10000.0);
        assert_eq!(payload.category_budgets.len(), 1);
        assert_eq!(payload.category_budgets[0].category, "Lunch");
        assert_eq!(payload.category_budgets[0].amount, 1500.0);
    }

    #[test]
    fn category_rows_follow_the_fixed_category_order() {
        let mut amounts = HashMap::new();
        amounts.insert("Travel".to_string(), "800".to_string());
        amounts.insert("Breakfast".to_string(), "300".to_string());
        let payload = build_budget_payload("5000", &amounts).unwrap();
        let order: Vec<&str> = payload
            .category_budgets
            .iter()
            .map(|entry| entry.category.as_str())
            .collect();
        assert_eq!(order, vec!["Breakfast", "Travel"]);
    }
}
