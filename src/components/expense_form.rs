use yew::prelude::*;

use crate::components::icons::icon_x;
use crate::format::{date_only, today};
use crate::models::{Expense, ExpensePayload, CATEGORIES, PAYMENT_METHODS};

// shared modal validation: both record forms surface the same message for
// missing mandatory fields
pub fn build_expense_payload(
    category: &str,
    amount: &str,
    description: &str,
    date: &str,
    payment_method: &str,
) -> Result<ExpensePayload, String> {
    if category.is_empty() || amount.is_empty() {
        return Err("Please fill in all required fields".to_string());
    }
    let amount: f64 = amount
        .parse()
        .map_err(|_| "Amount must be a positive number".to_string())?;
    if amount <= 0.0 {
        return Err("Amount must be a positive number".to_string());
    }
    Ok(ExpensePayload {
        category: category.to_string(),
        amount,
        description: description.to_string(),
        date: date.to_string(),
        payment_method: payment_method.to_string(),
    })
}

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub expense: Option<Expense>,
    pub on_submit: Callback<ExpensePayload>,
    pub on_cancel: Callback<()>,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let category = use_state(String::new);
    let amount = use_state(String::new);
    let description = use_state(String::new);
    let date = use_state(today);
    let payment_method = use_state(|| "Cash".to_string());
    let form_error = use_state(|| None::<String>);

    // refill the fields whenever a different record is opened for editing
    {
        let category = category.clone();
        let amount = amount.clone();
        let description = description.clone();
        let date = date.clone();
        let payment_method = payment_method.clone();
        let form_error = form_error.clone();
        use_effect_with_deps(
            move |expense: &Option<Expense>| {
                match expense {
                    Some(expense) => {
                        category.set(expense.category.clone());
                        amount.set(expense.amount.to_string());
                        description.set(expense.description.clone());
                        date.set(date_only(&expense.date).to_string());
                        payment_method.set(expense.payment_method.clone());
                    }
                    None => {
                        category.set(String::new());
                        amount.set(String::new());
                        description.set(String::new());
                        date.set(today());
                        payment_method.set("Cash".to_string());
                    }
                }
                form_error.set(None);
                || ()
            },
            props.expense.clone(),
        );
    }

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };
    let on_amount_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };
    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            description.set(area.value());
        })
    };
    let on_date_change = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };
    let on_payment_change = {
        let payment_method = payment_method.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            payment_method.set(select.value());
        })
    };

    let on_submit = {
        let category = category.clone();
        let amount = amount.clone();
        let description = description.clone();
        let date = date.clone();
        let payment_method = payment_method.clone();
        let form_error = form_error.clone();
        let emit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match build_expense_payload(&category, &amount, &description, &date, &payment_method) {
                Ok(payload) => {
                    form_error.set(None);
                    emit.emit(payload);
                }
                Err(message) => form_error.set(Some(message)),
            }
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let editing = props.expense.is_some();

    html! {
        <div class="fixed inset-0 z-50 overflow-y-auto">
            <div class="flex items-center justify-center min-h-screen pt-4 px-4 pb-20 text-center sm:block sm:p-0">
                <div class="fixed inset-0 bg-gray-500 bg-opacity-75 transition-opacity" onclick={on_cancel.clone()}></div>

                <div class="inline-block align-bottom bg-white dark:bg-gray-800 rounded-lg text-left overflow-hidden shadow-xl transform transition-all sm:my-8 sm:align-middle sm:max-w-lg sm:w-full">
                    <div class="bg-white dark:bg-gray-800 px-4 pt-5 pb-4 sm:p-6 sm:pb-4">
                        <div class="flex items-center justify-between mb-4">
                            <h3 class="text-lg font-medium text-gray-900 dark:text-white">
                                { if editing { "Edit Expense" } else { "Add New Expense" } }
                            </h3>
                            <button onclick={on_cancel.clone()} class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-300">
                                { icon_x() }
                            </button>
                        </div>

                        <form onsubmit={on_submit} class="space-y-4">
                            if let Some(message) = (*form_error).clone() {
                                <div class="text-sm text-danger-600 dark:text-danger-400">{ message }</div>
                            }

                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                                        {"Category *"}
                                    </label>
                                    <select class="input" onchange={on_category_change}>
                                        <option value="" selected={category.is_empty()}>{"Select Category"}</option>
                                        { for CATEGORIES.iter().map(|option| html! {
                                            <option value={*option} selected={*category == *option}>{ *option }</option>
                                        }) }
                                    </select>
                                </div>

                                <div>
                                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                                        {"Amount *"}
                                    </label>
                                    <input
                                        type="number"
                                        step="0.01"
                                        min="0"
                                        class="input"
                                        placeholder="0.00"
                                        value={(*amount).clone()}
                                        oninput={on_amount_input}
                                    />
                                </div>
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                                    {"Description"}
                                </label>
                                <textarea
                                    rows="3"
                                    class="input"
                                    placeholder="Optional description..."
                                    value={(*description).clone()}
                                    oninput={on_description_input}
                                />
                            </div>

                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                                        {"Date"}
                                    </label>
                                    <input
                                        type="date"
                                        class="input"
                                        value={(*date).clone()}
                                        onchange={on_date_change}
                                    />
                                </div>

                                <div>
                                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                                        {"Payment Method"}
                                    </label>
                                    <select class="input" onchange={on_payment_change}>
                                        { for PAYMENT_METHODS.iter().map(|option| html! {
                                            <option value={*option} selected={*payment_method == *option}>{ *option }</option>
                                        }) }
                                    </select>
                                </div>
                            </div>

                            <div class="flex justify-end space-x-3 pt-4">
                                <button type="button" onclick={on_cancel} class="btn btn-secondary btn-md">
                                    {"Cancel"}
                                </button>
                                <button type="submit" class="btn btn-primary btn-md">
                                    { if editing { "Update Expense" } else { "Add Expense" } }
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_mandatory_fields_are_rejected() {
        let err = build_expense_payload("", "250", "", "2024-06-01", "Cash");
        assert_eq!(err, Err("Please fill in all required fields".to_string()));
        let err = build_expense_payload("Lunch", "", "", "2024-06-01", "Cash");
        assert_eq!(err, Err("Please fill in all required fields".to_string()));
    }

    #[test]
    fn amounts_must_parse_to_a_positive_number() {
        let err = build_expense_payload("Lunch", "abc", "", "2024-06-01", "Cash");
        assert_eq!(err, Err("Amount must be a positive number".to_string()));
        let err = build_expense_payload("Lunch", "-5", "", "2024-06-01", "Cash");
        assert_eq!(err, Err("Amount must be a positive number".to_string()));
    }

    #[test]
    fn a_complete_form_builds_the_payload() {
        let payload = build_expense_payload("Lunch", "250.5", "team lunch", "2024-06-01", "UPI");
        assert_eq!(
            payload,
            Ok(ExpensePayload {
                category: "Lunch".to_string(),
                amount: 250.5,
                description: "team lunch".to_string(),
                date: "2024-06-01".to_string(),
                payment_method: "UPI".to_string(),
            })
        );
    }
}
