use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ExpenseFilters, ExpensesApi, PAGE_SIZE};
use crate::components::icons::icon_plus;
use crate::components::{ExpenseForm, ExpenseList};
use crate::models::{Expense, ExpensePayload, CATEGORIES};
use crate::pages::{confirm, page_header, with_prepended, with_replaced, without, LoadState};
use crate::toast::Toaster;

pub fn result_window(page: u32, total: u32) -> (u32, u32) {
    let first = (page - 1) * PAGE_SIZE + 1;
    let last = (page * PAGE_SIZE).min(total);
    (first, last)
}

#[function_component(ExpensesPage)]
pub fn expenses_page() -> Html {
    let state = use_state(|| LoadState::<Vec<Expense>>::Idle);
    let filters = use_state(ExpenseFilters::default);
    let page = use_state(|| 1u32);
    let total_pages = use_state(|| 1u32);
    let total = use_state(|| 0u32);
    let show_form = use_state(|| false);
    let editing = use_state(|| None::<Expense>);

    let toaster = use_context::<Toaster>();

    {
        let state = state.clone();
        let page = page.clone();
        let total_pages = total_pages.clone();
        let total = total.clone();
        let toaster = toaster.clone();
        let deps = ((*filters).clone(), *page);
        use_effect_with_deps(
            move |(filters, requested): &(ExpenseFilters, u32)| {
                let filters = filters.clone();
                let requested = *requested;
                let previous = (*state).clone();
                state.set(LoadState::Loading);
                spawn_local(async move {
                    match ExpensesApi::list(&filters, requested).await {
                        Ok(response) => {
                            state.set(LoadState::Ready(response.expenses));
                            page.set(response.current_page);
                            total_pages.set(response.total_pages);
                            total.set(response.total);
                        }
                        Err(err) => {
                            if let Some(toaster) = &toaster {
                                toaster.error(&err.user_message("Failed to load expenses"));
                            }
                            state.set(previous.failed());
                        }
                    }
                });
                || ()
            },
            deps,
        );
    }

    // filter edits reset to the first page
    let apply_filter = {
        let filters = filters.clone();
        let page = page.clone();
        move |update: fn(&mut ExpenseFilters, String)| {
            let filters = filters.clone();
            let page = page.clone();
            Callback::from(move |e: Event| {
                let value = e
                    .target_unchecked_into::<web_sys::HtmlInputElement>()
                    .value();
                let mut next = (*filters).clone();
                update(&mut next, value);
                filters.set(next);
                page.set(1);
            })
        }
    };
    let on_search_change = apply_filter(|filters, value| filters.search = value);
    let on_start_change = apply_filter(|filters, value| filters.start_date = value);
    let on_end_change = apply_filter(|filters, value| filters.end_date = value);
    let on_category_change = {
        let filters = filters.clone();
        let page = page.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.category = select.value();
            filters.set(next);
            page.set(1);
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
        Callback::from(move |expense: Expense| editing.set(Some(expense)))
    };

    let on_create = {
        let state = state.clone();
        let show_form = show_form.clone();
        let toaster = toaster.clone();
        Callback::from(move |payload: ExpensePayload| {
            let state = state.clone();
            let show_form = show_form.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ExpensesApi::create(&payload).await {
                    Ok(expense) => {
                        let current = match &*state {
                            LoadState::Ready(list) => list.clone(),
                            _ => Vec::new(),
                        };
                        state.set(LoadState::Ready(with_prepended(&current, expense)));
                        show_form.set(false);
                        if let Some(toaster) = &toaster {
                            toaster.success("Expense added successfully");
                        }
                    }
                    Err(err) => {
                        if let Some(toaster) = &toaster {
                            toaster.error(&err.user_message("Failed to add expense"));
                        }
                    }
                }
            });
        })
    };

    let on_update = {
        let state = state.clone();
        let editing = editing.clone();
        let toaster = toaster.clone();
        Callback::from(move |payload: ExpensePayload| {
            if let Some(target) = (*editing).clone() {
                let state = state.clone();
                let editing = editing.clone();
                let toaster = toaster.clone();
                spawn_local(async move {
                    match ExpensesApi::update(&target.id, &payload).await {
                        Ok(updated) => {
                            let current = match &*state {
                                LoadState::Ready(list) => list.clone(),
                                _ => Vec::new(),
                            };
                            state.set(LoadState::Ready(with_replaced(&current, updated)));
                            editing.set(None);
                            if let Some(toaster) = &toaster {
                                toaster.success("Expense updated successfully");
                            }
                        }
                        Err(err) => {
                            if let Some(toaster) = &toaster {
                                toaster.error(&err.user_message("Failed to update expense"));
                            }
                        }
                    }
                });
            }
        })
    };

    let on_delete = {
        let state = state.clone();
        let toaster = toaster.clone();
        Callback::from(move |id: String| {
            if !confirm("Are you sure you want to delete this expense?") {
                return;
            }
            let state = state.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ExpensesApi::remove(&id).await {
                    Ok(()) => {
                        let current = match &*state {
                            LoadState::Ready(list) => list.clone(),
                            _ => Vec::new(),
                        };
                        state.set(LoadState::Ready(without(&current, &id)));
                        if let Some(toaster) = &toaster {
                            toaster.success("Expense deleted successfully");
                        }
                    }
                    Err(err) => {
                        if let Some(toaster) = &toaster {
                            toaster.error(&err.user_message("Failed to delete expense"));
                        }
                    }
                }
            });
        })
    };

    let go_previous = {
        let page = page.clone();
        Callback::from(move |_| page.set((*page).saturating_sub(1).max(1)))
    };
    let go_next = {
        let page = page.clone();
        Callback::from(move |_| page.set(*page + 1))
    };

    let (first_shown, last_shown) = result_window(*page, *total);

    html! {
        <div class="space-y-6">
            { page_header("Expenses", "Manage your expense records", html! {
                <button onclick={open_form} class="btn btn-primary btn-md flex items-center">
                    <span class="mr-2">{ icon_plus() }</span>
                    {"Add Expense"}
                </button>
            }) }

            <div class="card">
                <div class="card-content">
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{"Search"}</label>
                            <input
                                type="text"
                                placeholder="Search expenses..."
                                class="input"
                                onchange={on_search_change}
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{"Category"}</label>
                            <select class="input" onchange={on_category_change}>
                                <option value="all" selected={filters.category == "all"}>{"All Categories"}</option>
                                { for CATEGORIES.iter().map(|option| html! {
                                    <option value={*option} selected={filters.category == *option}>{ *option }</option>
                                }) }
                            </select>
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{"Start Date"}</label>
                            <input type="date" class="input" onchange={on_start_change} />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{"End Date"}</label>
                            <input type="date" class="input" onchange={on_end_change} />
                        </div>
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3 class="text-lg font-medium text-gray-900 dark:text-white">
                        { format!("Expense Records ({})", *total) }
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
                            LoadState::Ready(expenses) if !expenses.is_empty() => html! {
                                <ExpenseList
                                    expenses={expenses.clone()}
                                    on_edit={start_editing}
                                    on_delete={on_delete}
                                />
                            },
                            _ => html! {
                                <div class="text-center py-8 text-gray-500 dark:text-gray-400">
                                    {"No expenses found. Add your first expense to get started."}
                                </div>
                            },
                        }
                    }
                </div>
            </div>

            if *total_pages > 1 {
                <div class="flex items-center justify-between">
                    <div class="text-sm text-gray-700 dark:text-gray-300">
                        { format!("Showing {} to {} of {} results", first_shown, last_shown, *total) }
                    </div>
                    <div class="flex space-x-2">
                        <button
                            onclick={go_previous}
                            disabled={*page == 1}
                            class="btn btn-secondary btn-sm disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {"Previous"}
                        </button>
                        <span class="px-3 py-1 text-sm text-gray-700 dark:text-gray-300">
                            { format!("Page {} of {}", *page, *total_pages) }
                        </span>
                        <button
                            onclick={go_next}
                            disabled={*page == *total_pages}
                            class="btn btn-secondary btn-sm disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {"Next"}
                        </button>
                    </div>
                </div>
            }

            if *show_form {
                <ExpenseForm expense={None} on_submit={on_create} on_cancel={close_form} />
            }

            if let Some(expense) = (*editing).clone() {
                <ExpenseForm expense={Some(expense)} on_submit={on_update} on_cancel={close_editor} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_result_window_tracks_the_page() {
        assert_eq!(result_window(1, 35), (1, 10));
        assert_eq!(result_window(2, 35), (11, 20));
        assert_eq!(result_window(4, 35), (31, 35));
    }

    #[test]
    fn a_short_final_page_clamps_to_the_total() {
        assert_eq!(result_window(1, 3), (1, 3));
    }
}
