use yew::prelude::*;

use crate::components::icons::icon_x;
use crate::format::{date_only, today};
use crate::models::{UdhariKind, UdhariPayload, UdhariRecord};

pub fn build_udhari_payload(
    person_name: &str,
    amount: &str,
    kind: UdhariKind,
    description: &str,
    date: &str,
    notes: &str,
) -> Result<UdhariPayload, String> {
    if person_name.is_empty() || amount.is_empty() {
        return Err("Please fill in all required fields".to_string());
    }
    let amount: f64 = amount
        .parse()
        .map_err(|_| "Amount must be a positive number".to_string())?;
    if amount <= 0.0 {
        return Err("Amount must be a positive number".to_string());
    }
    Ok(UdhariPayload {
        person_name: person_name.to_string(),
        amount,
        kind,
        description: description.to_string(),
        date: date.to_string(),
        notes: notes.to_string(),
    })
}

#[derive(Properties, PartialEq)]
pub struct UdhariFormProps {
    pub record: Option<UdhariRecord>,
    pub on_submit: Callback<UdhariPayload>,
    pub on_cancel: Callback<()>,
}

#[function_component(UdhariForm)]
pub fn udhari_form(props: &UdhariFormProps) -> Html {
    let person_name = use_state(String::new);
    let amount = use_state(String::new);
    let kind = use_state(|| UdhariKind::Borrow);
    let description = use_state(String::new);
    let date = use_state(today);
    let notes = use_state(String::new);
    let form_error = use_state(|| None::<String>);

    {
        let person_name = person_name.clone();
        let amount = amount.clone();
        let kind = kind.clone();
        let description = description.clone();
        let date = date.clone();
        let notes = notes.clone();
        let form_error = form_error.clone();
        use_effect_with_deps(
            move |record: &Option<UdhariRecord>| {
                match record {
                    Some(record) => {
                        person_name.set(record.person_name.clone());
                        amount.set(record.amount.to_string());
                        kind.set(record.kind);
                        description.set(record.description.clone());
                        date.set(date_only(&record.date).to_string());
                        notes.set(record.notes.clone());
                    }
                    None => {
                        person_name.set(String::new());
                        amount.set(String::new());
                        kind.set(UdhariKind::Borrow);
                        description.set(String::new());
                        date.set(today());
                        notes.set(String::new());
                    }
                }
                form_error.set(None);
                || ()
            },
            props.record.clone(),
        );
    }

    let on_person_input = {
        let person_name = person_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            person_name.set(input.value());
        })
    };
    let on_amount_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };
    let pick_borrow = {
        let kind = kind.clone();
        Callback::from(move |_: Event| kind.set(UdhariKind::Borrow))
    };
    let pick_lend = {
        let kind = kind.clone();
        Callback::from(move |_: Event| kind.set(UdhariKind::Lend))
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
    let on_notes_input = {
        let notes = notes.clone();
        Callback::from(move |e: InputEvent| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            notes.set(area.value());
        })
    };

    let on_submit = {
        let person_name = person_name.clone();
        let amount = amount.clone();
        let kind = kind.clone();
        let description = description.clone();
        let date = date.clone();
        let notes = notes.clone();
        let form_error = form_error.clone();
        let emit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match build_udhari_payload(&person_name, &amount, *kind, &description, &date, &notes) {
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

    let editing = props.record.is_some();

    html! {
        <div class="fixed inset-0 z-50 overflow-y-auto">
            <div class="flex items-center justify-center min-h-screen pt-4 px-4 pb-20 text-center sm:block sm:p-0">
                <div class="fixed inset-0 bg-gray-500 bg-opacity-75 transition-opacity" onclick={on_cancel.clone()}></div>

                <div class="inline-block align-bottom bg-white dark:bg-gray-800 rounded-lg text-left overflow-hidden shadow-xl transform transition-all sm:my-8 sm:align-middle sm:max-w-lg sm:w-full">
                    <div class="bg-white dark:bg-gray-800 px-4 pt-5 pb-4 sm:p-6 sm:pb-4">
                        <div class="flex items-center justify-between mb-4">
                            <h3 class="text-lg font-medium text-gray-900 dark:text-white">
                                { if editing { "Edit Udhari Record" } else { "Add New Udhari Record" } }
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
                                        {"Person Name *"}
                                    </label>
                                    <input
                                        type="text"
                                        class="input"
                                        placeholder="Enter person's name"
                                        value={(*person_name).clone()}
                                        oninput={on_person_input}
                                    />
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
                                    {"Type *"}
                                </label>
                                <div class="grid grid-cols-2 gap-4">
                                    <label class="flex items-center space-x-2 cursor-pointer">
                                        <input
                                            type="radio"
                                            name="type"
                                            checked={*kind == UdhariKind::Borrow}
                                            onchange={pick_borrow}
                                            class="text-warning-600 focus:ring-warning-500"
                                        />
                                        <span class="text-sm text-gray-700 dark:text-gray-300">{"I Borrowed"}</span>
                                    </label>
                                    <label class="flex items-center space-x-2 cursor-pointer">
                                        <input
                                            type="radio"
                                            name="type"
                                            checked={*kind == UdhariKind::Lend}
                                            onchange={pick_lend}
                                            class="text-success-600 focus:ring-success-500"
                                        />
                                        <span class="text-sm text-gray-700 dark:text-gray-300">{"I Lent"}</span>
                                    </label>
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
                                    {"Notes"}
                                </label>
                                <textarea
                                    rows="3"
                                    class="input"
                                    placeholder="Additional notes..."
                                    value={(*notes).clone()}
                                    oninput={on_notes_input}
                                />
                            </div>

                            <div class="flex justify-end space-x-3 pt-4">
                                <button type="button" onclick={on_cancel} class="btn btn-secondary btn-md">
                                    {"Cancel"}
                                </button>
                                <button type="submit" class="btn btn-primary btn-md">
                                    { if editing { "Update Record" } else { "Add Record" } }
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
    fn person_and_amount_are_mandatory() {
        let err = build_udhari_payload("", "100", UdhariKind::Borrow, "", "2024-06-01", "");
        assert_eq!(err, Err("Please fill in all required fields".to_string()));
        let err = build_udhari_payload("Ravi", "", UdhariKind::Borrow, "", "2024-06-01", "");
        assert_eq!(err, Err("Please fill in all required fields".to_string()));
    }

    #[test]
    fn a_complete_form_builds_the_payload() {
        let payload = build_udhari_payload(
            "Ravi",
            "500",
            UdhariKind::Lend,
            "emergency",
            "2024-06-01",
            "repay by July",
        );
        assert_eq!(
            payload,
            Ok(UdhariPayload {
                person_name: "Ravi".to_string(),
                amount: 500.0,
                kind: UdhariKind::Lend,
                description: "emergency".to_string(),
                date: "2024-06-01".to_string(),
                notes: "repay by July".to_string(),
            })
        );
    }

    #[test]
    fn zero_amounts_are_rejected() {
        let err = build_udhari_payload("Ravi", "0", UdhariKind::Borrow, "", "2024-06-01", "");
        assert_eq!(err, Err("Amount must be a positive number".to_string()));
    }
}
