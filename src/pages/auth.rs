use yew::prelude::*;

use crate::session::Session;

// client-side checks mirror the two form shapes; server-side failures arrive
// as toasts from the session store
pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required".to_string());
    }
    Ok(())
}

pub fn validate_register(name: &str, email: &str, password: &str) -> Result<(), String> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    Ok(())
}

#[function_component(AuthScreen)]
pub fn auth_screen() -> Html {
    let is_login = use_state(|| true);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let session = use_context::<Session>();

    let on_submit = {
        let is_login = is_login.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_val = (*name).clone();
            let email_val = (*email).clone();
            let password_val = (*password).clone();

            let check = if *is_login {
                validate_login(&email_val, &password_val)
            } else {
                validate_register(&name_val, &email_val, &password_val)
            };
            if let Err(message) = check {
                error.set(Some(message));
                return;
            }

            error.set(None);
            loading.set(true);
            let done = {
                let loading = loading.clone();
                Callback::from(move |_| loading.set(false))
            };
            if let Some(session) = &session {
                if *is_login {
                    session.login(email_val, password_val, done);
                } else {
                    session.register(name_val, email_val, password_val, done);
                }
            }
        })
    };

    let toggle_mode = {
        let is_login = is_login.clone();
        let error = error.clone();
        Callback::from(move |_| {
            error.set(None);
            is_login.set(!*is_login);
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900 px-4">
            <div class="w-full max-w-md bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                        { if *is_login { "Welcome back" } else { "Create account" } }
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400 mt-2">
                        { if *is_login { "Sign in to continue." } else { "Start tracking your expenses." } }
                    </p>
                </div>

                <form class="space-y-4" onsubmit={on_submit}>
                    if !*is_login {
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-gray-700 dark:text-gray-300">{"Name"}</label>
                            <input
                                type="text"
                                class="input"
                                value={(*name).clone()}
                                oninput={{
                                    let name = name.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        name.set(input.value());
                                    })
                                }}
                            />
                        </div>
                    }
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-gray-700 dark:text-gray-300">{"Email"}</label>
                        <input
                            type="email"
                            class="input"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-gray-700 dark:text-gray-300">{"Password"}</label>
                        <input
                            type="password"
                            class="input"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                    </div>

                    if let Some(message) = &*error {
                        <div class="text-sm text-danger-600 dark:text-danger-400">{ message.clone() }</div>
                    }

                    <button type="submit" class="btn btn-primary btn-md w-full" disabled={*loading}>
                        { if *loading { "Please wait..." } else if *is_login { "Sign in" } else { "Sign up" } }
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-gray-500 dark:text-gray-400">
                    { if *is_login { "No account?" } else { "Already have an account?" } }
                    <button class="ml-2 text-primary-600 dark:text-primary-400 font-semibold" onclick={toggle_mode}>
                        { if *is_login { "Sign up" } else { "Sign in" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_needs_both_email_and_password() {
        assert!(validate_login("a@b.c", "secret").is_ok());
        assert_eq!(
            validate_login("", "secret"),
            Err("Email and password are required".to_string())
        );
        assert_eq!(
            validate_login("a@b.c", ""),
            Err("Email and password are required".to_string())
        );
    }

    #[test]
    fn registration_needs_every_field() {
        assert!(validate_register("Asha", "a@b.c", "secret").is_ok());
        assert_eq!(
            validate_register("", "a@b.c", "secret"),
            Err("Please fill in all fields".to_string())
        );
        assert_eq!(
            validate_register("Asha", "a@b.c", ""),
            Err("Please fill in all fields".to_string())
        );
    }
}
