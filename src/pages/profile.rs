use yew::prelude::*;

use crate::components::icons::{icon_moon, icon_sun};
use crate::components::layout::avatar_initial;
use crate::format::{currency_symbol_for, format_date};
use crate::models::{Preferences, ProfilePayload, User};
use crate::session::Session;
use crate::theme::{apply_theme, Theme};

const CURRENCIES: [(&str, &str); 7] = [
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "British Pound"),
    ("INR", "Indian Rupee"),
    ("JPY", "Japanese Yen"),
    ("CAD", "Canadian Dollar"),
    ("AUD", "Australian Dollar"),
];

fn currency_label(code: &str, name: &str) -> String {
    format!("{} {} ({})", currency_symbol_for(code), name, code)
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let session = use_context::<Session>();
    let theme = use_context::<UseStateHandle<Theme>>();

    let name = use_state(String::new);
    let currency = use_state(|| "INR".to_string());
    let theme_pref = use_state(|| "light".to_string());
    let saving = use_state(|| false);

    let user = session.as_ref().and_then(|session| session.user().cloned());

    // re-sync the form whenever the profile itself changes, e.g. after a save
    {
        let name = name.clone();
        let currency = currency.clone();
        let theme_pref = theme_pref.clone();
        use_effect_with_deps(
            move |user: &Option<User>| {
                if let Some(user) = user {
                    name.set(user.name.clone());
                    currency.set(user.preferences.currency.clone());
                    theme_pref.set(user.preferences.theme.clone());
                }
                || ()
            },
            user.clone(),
        );
    }

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_currency_change = {
        let currency = currency.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            currency.set(select.value());
        })
    };
    let pick_light = {
        let theme_pref = theme_pref.clone();
        Callback::from(move |_: Event| theme_pref.set("light".to_string()))
    };
    let pick_dark = {
        let theme_pref = theme_pref.clone();
        Callback::from(move |_: Event| theme_pref.set("dark".to_string()))
    };

    let on_submit = {
        let session = session.clone();
        let user = user.clone();
        let name = name.clone();
        let currency = currency.clone();
        let theme_pref = theme_pref.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let (Some(session), Some(user)) = (&session, &user) {
                saving.set(true);
                let payload = ProfilePayload {
                    name: (*name).clone(),
                    email: user.email.clone(),
                    preferences: Preferences {
                        currency: (*currency).clone(),
                        theme: (*theme_pref).clone(),
                    },
                };
                let done = {
                    let saving = saving.clone();
                    Callback::from(move |_| saving.set(false))
                };
                session.update_profile(payload, done);
            }
        })
    };

    // the quick action flips the live theme store; the saved preference above is
    // only applied on the next sign-in
    let current_theme = theme.as_ref().map(|theme| **theme).unwrap_or(Theme::Light);
    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(theme) = &theme {
                let next = theme.toggled();
                apply_theme(next);
                theme.set(next);
            }
        })
    };

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{"Profile Settings"}</h1>
                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                    {"Manage your account settings and preferences"}
                </p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2">
                    <div class="card">
                        <div class="card-header">
                            <h3 class="text-lg font-medium text-gray-900 dark:text-white">{"Profile Information"}</h3>
                        </div>
                        <div class="card-content">
                            <form onsubmit={on_submit} class="space-y-6">
                                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                                            {"Full Name"}
                                        </label>
                                        <input
                                            type="text"
                                            class="input"
                                            value={(*name).clone()}
                                            oninput={on_name_input}
                                        />
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                                            {"Email Address"}
                                        </label>
                                        <input
                                            type="email"
                                            disabled={true}
                                            class="input bg-gray-50 dark:bg-gray-700 cursor-not-allowed"
                                            value={user.as_ref().map(|user| user.email.clone()).unwrap_or_default()}
                                        />
                                        <p class="text-xs text-gray-500 dark:text-gray-400 mt-1">
                                            {"Email cannot be changed"}
                                        </p>
                                    </div>
                                </div>

                                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                                            {"Currency"}
                                        </label>
                                        <select class="input" onchange={on_currency_change}>
                                            { for CURRENCIES.iter().map(|(code, label)| html! {
                                                <option value={*code} selected={*currency == *code}>
                                                    { currency_label(code, label) }
                                                </option>
                                            }) }
                                        </select>
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                                            {"Theme"}
                                        </label>
                                        <div class="flex items-center space-x-4">
                                            <label class="flex items-center space-x-2 cursor-pointer">
                                                <input
                                                    type="radio"
                                                    name="theme"
                                                    value="light"
                                                    checked={*theme_pref == "light"}
                                                    onchange={pick_light}
                                                    class="text-primary-600 focus:ring-primary-500"
                                                />
                                                <span class="text-gray-400">{ icon_sun() }</span>
                                                <span class="text-sm text-gray-700 dark:text-gray-300">{"Light"}</span>
                                            </label>
                                            <label class="flex items-center space-x-2 cursor-pointer">
                                                <input
                                                    type="radio"
                                                    name="theme"
                                                    value="dark"
                                                    checked={*theme_pref == "dark"}
                                                    onchange={pick_dark}
                                                    class="text-primary-600 focus:ring-primary-500"
                                                />
                                                <span class="text-gray-400">{ icon_moon() }</span>
                                                <span class="text-sm text-gray-700 dark:text-gray-300">{"Dark"}</span>
                                            </label>
                                        </div>
                                    </div>
                                </div>

                                <div class="flex justify-end">
                                    <button type="submit" disabled={*saving} class="btn btn-primary btn-md flex items-center">
                                        if *saving {
                                            <div class="animate-spin rounded-full h-4 w-4 border-b-2 border-white mr-2"></div>
                                            {"Saving..."}
                                        } else {
                                            {"Save Changes"}
                                        }
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                </div>

                <div class="space-y-6">
                    <div class="card">
                        <div class="card-header">
                            <h3 class="text-lg font-medium text-gray-900 dark:text-white">{"Account Summary"}</h3>
                        </div>
                        <div class="card-content">
                            if let Some(user) = &user {
                                <div class="space-y-4">
                                    <div class="flex items-center space-x-3">
                                        <div class="flex-shrink-0">
                                            <div class="h-10 w-10 rounded-full bg-primary-600 flex items-center justify-center">
                                                <span class="text-sm font-medium text-white">{ avatar_initial(user) }</span>
                                            </div>
                                        </div>
                                        <div class="flex-1 min-w-0">
                                            <p class="text-sm font-medium text-gray-900 dark:text-white truncate">{ user.name.clone() }</p>
                                            <p class="text-xs text-gray-500 dark:text-gray-400 truncate">{ user.email.clone() }</p>
                                        </div>
                                    </div>

                                    <div class="border-t border-gray-200 dark:border-gray-700 pt-4">
                                        <div class="text-sm text-gray-600 dark:text-gray-400">
                                            <div class="flex justify-between">
                                                <span>{"Member since:"}</span>
                                                <span>{ format_date(&user.created_at) }</span>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        </div>
                    </div>

                    <div class="card">
                        <div class="card-header">
                            <h3 class="text-lg font-medium text-gray-900 dark:text-white">{"Quick Actions"}</h3>
                        </div>
                        <div class="card-content">
                            <div class="space-y-3">
                                <button
                                    onclick={toggle_theme}
                                    class="w-full flex items-center justify-between p-3 text-left text-sm text-gray-700 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-700 rounded-md transition-colors"
                                >
                                    <div class="flex items-center">
                                        <span class="mr-3">
                                            { if current_theme == Theme::Dark { icon_sun() } else { icon_moon() } }
                                        </span>
                                        { if current_theme == Theme::Dark { "Switch to Light Mode" } else { "Switch to Dark Mode" } }
                                    </div>
                                </button>
                            </div>
                        </div>
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
    fn currency_labels_pair_symbol_name_and_code() {
        assert_eq!(currency_label("USD", "US Dollar"), "$ US Dollar (USD)");
        assert_eq!(currency_label("INR", "Indian Rupee"), "₹ Indian Rupee (INR)");
        assert_eq!(
            currency_label("CAD", "Canadian Dollar"),
            "C$ Canadian Dollar (CAD)"
        );
    }

    #[test]
    fn every_offered_currency_has_a_distinct_code() {
        let mut codes: Vec<&str> = CURRENCIES.iter().map(|(code, _)| *code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), CURRENCIES.len());
    }
}
