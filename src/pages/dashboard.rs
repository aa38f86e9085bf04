use futures::join;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{BudgetApi, ExpensesApi, UdhariApi};
use crate::components::charts::utilization_bar_class;
use crate::components::icons::{
    icon_dollar_sign, icon_pie_chart, icon_trending_down, icon_trending_up,
};
use crate::components::{CategoryDonut, TrendChart};
use crate::format::format_currency;
use crate::models::{Analytics, Budget, UdhariSummary};
use crate::pages::{page_header, LoadState};
use crate::toast::Toaster;

#[derive(Clone, Debug, Default, PartialEq)]
struct DashboardData {
    analytics: Analytics,
    budget: Option<Budget>,
    udhari: UdhariSummary,
}

fn stat_card(label: &'static str, icon: Html, icon_class: &'static str, value: Html) -> Html {
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

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let state = use_state(|| LoadState::<DashboardData>::Idle);
    let toaster = use_context::<Toaster>();

    {
        let state = state.clone();
        let toaster = toaster.clone();
        use_effect_with_deps(
            move |_| {
                state.set(LoadState::Loading);
                spawn_local(async move {
                    let (analytics, budget, udhari) = join!(
                        ExpensesApi::analytics(),
                        BudgetApi::fetch(),
                        UdhariApi::summary(),
                    );
                    // one notification no matter how many of the reads failed;
                    // failed sections fall back to their zero state
                    if analytics.is_err() || budget.is_err() || udhari.is_err() {
                        if let Some(toaster) = &toaster {
                            toaster.error("Failed to load dashboard data");
                        }
                    }
                    state.set(LoadState::Ready(DashboardData {
                        analytics: analytics.unwrap_or_default(),
                        budget: budget.unwrap_or(None),
                        udhari: udhari.unwrap_or_default(),
                    }));
                });
                || ()
            },
            (),
        );
    }

    let data = match &*state {
        LoadState::Ready(data) => data,
        _ => {
            return html! {
                <div class="flex items-center justify-center h-64">
                    <div class="animate-spin rounded-full h-32 w-32 border-b-2 border-primary-600"></div>
                </div>
            }
        }
    };

    let analytics = &data.analytics;
    let udhari = &data.udhari;
    let highest = analytics
        .highest_category
        .as_ref()
        .map(|entry| entry.category.clone())
        .unwrap_or_else(|| "N/A".to_string());
    let savings_class = |budget: &Budget| {
        if budget.savings >= 0.0 {
            "text-success-600"
        } else {
            "text-danger-600"
        }
    };

    html! {
        <div class="space-y-6">
            { page_header("Dashboard", "Overview of your financial activity", html! {}) }

            <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4">
                { stat_card("Total Spent", icon_dollar_sign(), "text-primary-600", html! {
                    <span class="text-gray-900 dark:text-white">{ format_currency(analytics.total_spent, "₹") }</span>
                }) }
                { stat_card("Monthly Budget", icon_trending_up(), "text-success-600", html! {
                    <span class="text-gray-900 dark:text-white">
                        { format_currency(data.budget.as_ref().map(|b| b.monthly_budget).unwrap_or(0.0), "₹") }
                    </span>
                }) }
                { stat_card("Savings", icon_trending_down(), "text-warning-600", html! {
                    if let Some(budget) = &data.budget {
                        <span class={savings_class(budget)}>{ format_currency(budget.savings, "₹") }</span>
                    } else {
                        <span class="text-gray-900 dark:text-white">{"₹0.00"}</span>
                    }
                }) }
                { stat_card("Highest Category", icon_pie_chart(), "text-primary-600", html! {
                    <span class="text-gray-900 dark:text-white">{ highest }</span>
                }) }
            </div>

            if let Some(budget) = &data.budget {
                <div class="card">
                    <div class="card-header">
                        <h3 class="text-lg font-medium text-gray-900 dark:text-white">{"Budget Progress"}</h3>
                    </div>
                    <div class="card-content">
                        <div>
                            <div class="flex justify-between text-sm text-gray-600 dark:text-gray-400 mb-1">
                                <span>{ format!("Spent: {}", format_currency(analytics.total_spent, "₹")) }</span>
                                <span>{ format!("Budget: {}", format_currency(budget.monthly_budget, "₹")) }</span>
                            </div>
                            <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2">
                                <div
                                    class={format!("h-2 rounded-full {}", utilization_bar_class(budget.budget_utilization))}
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
            }

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card">
                    <div class="card-header">
                        <h3 class="text-lg font-medium text-gray-900 dark:text-white">{"Category Breakdown"}</h3>
                    </div>
                    <div class="card-content">
                        if analytics.category_breakdown.is_empty() {
                            <div class="h-64 flex items-center justify-center text-gray-500 dark:text-gray-400">
                                {"No expense data available"}
                            </div>
                        } else {
                            <CategoryDonut breakdown={analytics.category_breakdown.clone()} />
                        }
                    </div>
                </div>

                <div class="card">
                    <div class="card-header">
                        <h3 class="text-lg font-medium text-gray-900 dark:text-white">{"Monthly Trend"}</h3>
                    </div>
                    <div class="card-content">
                        if analytics.monthly_trend.is_empty() {
                            <div class="h-64 flex items-center justify-center text-gray-500 dark:text-gray-400">
                                {"No trend data available"}
                            </div>
                        } else {
                            <TrendChart trend={analytics.monthly_trend.clone()} />
                        }
                    </div>
                </div>
            </div>

            if udhari.borrow_total > 0.0 || udhari.lend_total > 0.0 {
                <div class="card">
                    <div class="card-header">
                        <h3 class="text-lg font-medium text-gray-900 dark:text-white">{"Udhari Summary"}</h3>
                    </div>
                    <div class="card-content">
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <div class="text-center p-4 bg-success-50 dark:bg-success-900/20 rounded-lg">
                                <div class="text-2xl font-bold text-success-600 dark:text-success-400">
                                    { format_currency(udhari.lend_total, "₹") }
                                </div>
                                <div class="text-sm text-success-600 dark:text-success-400">
                                    { format!("You Lent ({} records)", udhari.lend_count) }
                                </div>
                            </div>
                            <div class="text-center p-4 bg-warning-50 dark:bg-warning-900/20 rounded-lg">
                                <div class="text-2xl font-bold text-warning-600 dark:text-warning-400">
                                    { format_currency(udhari.borrow_total, "₹") }
                                </div>
                                <div class="text-sm text-warning-600 dark:text-warning-400">
                                    { format!("You Borrowed ({} records)", udhari.borrow_count) }
                                </div>
                            </div>
                        </div>
                        <div class="mt-4 text-center">
                            <div class={if udhari.net_balance >= 0.0 { "text-lg font-medium text-success-600" } else { "text-lg font-medium text-danger-600" }}>
                                { format!("Net Balance: {}", format_currency(udhari.net_balance, "₹")) }
                            </div>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}
