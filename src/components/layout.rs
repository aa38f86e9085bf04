use yew::prelude::*;

use crate::components::icons::{
    icon_credit_card, icon_dollar_sign, icon_home, icon_log_out, icon_menu, icon_moon, icon_sun,
    icon_user, icon_users, icon_x,
};
use crate::models::User;
use crate::pages::Page;
use crate::session::Session;
use crate::theme::{apply_theme, Theme};

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Dashboard",
            page: Page::Dashboard,
            icon: icon_home,
        },
        NavItem {
            label: "Expenses",
            page: Page::Expenses,
            icon: icon_credit_card,
        },
        NavItem {
            label: "Budget",
            page: Page::Budget,
            icon: icon_dollar_sign,
        },
        NavItem {
            label: "Udhari",
            page: Page::Udhari,
            icon: icon_users,
        },
        NavItem {
            label: "Profile",
            page: Page::Profile,
            icon: icon_user,
        },
    ]
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "w-full flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors bg-primary-100 text-primary-900 dark:bg-primary-900 dark:text-primary-100"
    } else {
        "w-full flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors text-gray-600 hover:bg-gray-50 hover:text-gray-900 dark:text-gray-300 dark:hover:bg-gray-700 dark:hover:text-white"
    }
}

pub fn avatar_initial(user: &User) -> String {
    user.name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

fn avatar(user: &User) -> Html {
    html! {
        <div class="h-8 w-8 rounded-full bg-primary-600 flex items-center justify-center">
            <span class="text-sm font-medium text-white">{ avatar_initial(user) }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SidebarNavProps {
    active_page: Page,
    on_select: Callback<Page>,
}

#[function_component(SidebarNav)]
fn sidebar_nav(props: &SidebarNavProps) -> Html {
    html! {
        <nav class="flex-1 px-4 py-4 space-y-1">
            { for nav_items().iter().map(|item| {
                let on_select = props.on_select.clone();
                let page = item.page;
                html! {
                    <button type="button" class={nav_link_class(page == props.active_page)} onclick={Callback::from(move |_| on_select.emit(page))}>
                        <span class="mr-3">{ (item.icon)() }</span>
                        { item.label }
                    </button>
                }
            }) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct SidebarFooterProps {
    user: Option<User>,
    on_logout: Callback<MouseEvent>,
}

#[function_component(SidebarFooter)]
fn sidebar_footer(props: &SidebarFooterProps) -> Html {
    html! {
        <div class="border-t border-gray-200 dark:border-gray-700 p-4">
            if let Some(user) = &props.user {
                <div class="flex items-center space-x-3">
                    <div class="flex-shrink-0">{ avatar(user) }</div>
                    <div class="flex-1 min-w-0">
                        <p class="text-sm font-medium text-gray-900 dark:text-white truncate">{ &user.name }</p>
                        <p class="text-xs text-gray-500 dark:text-gray-400 truncate">{ &user.email }</p>
                    </div>
                </div>
            }
            <button
                onclick={props.on_logout.clone()}
                class="mt-3 w-full flex items-center px-2 py-2 text-sm text-gray-600 hover:bg-gray-50 hover:text-gray-900 dark:text-gray-300 dark:hover:bg-gray-700 dark:hover:text-white rounded-md transition-colors"
            >
                <span class="mr-3">{ icon_log_out() }</span>
                {"Sign out"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub active_page: Page,
    pub on_select: Callback<Page>,
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let sidebar_open = use_state(|| false);
    let session = use_context::<Session>();
    let theme = use_context::<UseStateHandle<Theme>>();

    let user = session.as_ref().and_then(|s| s.user().cloned());
    let current_theme = theme.as_ref().map(|t| **t).unwrap_or(Theme::Light);

    let open_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| sidebar_open.set(true))
    };
    let close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(false))
    };
    // mobile nav selections also dismiss the drawer
    let select_and_close = {
        let on_select = props.on_select.clone();
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |page: Page| {
            sidebar_open.set(false);
            on_select.emit(page);
        })
    };
    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(session) = &session {
                session.logout();
            }
        })
    };
    let on_toggle_theme = {
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
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            if *sidebar_open {
                <div class="fixed inset-0 z-40 lg:hidden">
                    <div class="fixed inset-0 bg-gray-600 bg-opacity-75" onclick={close_sidebar.clone()}></div>
                    <div class="relative flex w-64 flex-col bg-white dark:bg-gray-800 shadow-xl min-h-screen">
                        <div class="flex h-16 items-center justify-between px-4">
                            <h1 class="text-xl font-bold text-gray-900 dark:text-white">{"Expense Tracker"}</h1>
                            <button class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-300" onclick={close_sidebar}>
                                { icon_x() }
                            </button>
                        </div>
                        <SidebarNav active_page={props.active_page} on_select={select_and_close} />
                        <SidebarFooter user={user.clone()} on_logout={on_logout.clone()} />
                    </div>
                </div>
            }

            <div class="hidden lg:fixed lg:inset-y-0 lg:flex lg:w-64 lg:flex-col">
                <div class="flex flex-col flex-grow bg-white dark:bg-gray-800 border-r border-gray-200 dark:border-gray-700">
                    <div class="flex h-16 items-center px-4">
                        <h1 class="text-xl font-bold text-gray-900 dark:text-white">{"Expense Tracker"}</h1>
                    </div>
                    <SidebarNav active_page={props.active_page} on_select={props.on_select.clone()} />
                    <SidebarFooter user={user.clone()} on_logout={on_logout} />
                </div>
            </div>

            <div class="lg:pl-64">
                <div class="sticky top-0 z-10 flex h-16 shrink-0 items-center gap-x-4 border-b border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 px-4 shadow-sm sm:gap-x-6 sm:px-6 lg:px-8">
                    <button type="button" class="-m-2.5 p-2.5 text-gray-700 dark:text-gray-300 lg:hidden" onclick={open_sidebar}>
                        { icon_menu() }
                    </button>

                    <div class="flex flex-1 gap-x-4 self-stretch lg:gap-x-6">
                        <div class="flex flex-1"></div>
                        <div class="flex items-center gap-x-4 lg:gap-x-6">
                            <button
                                class="p-2 text-gray-400 hover:text-gray-500 dark:text-gray-500 dark:hover:text-gray-400 transition-colors"
                                onclick={on_toggle_theme}
                            >
                                { if current_theme == Theme::Dark { icon_sun() } else { icon_moon() } }
                            </button>

                            if let Some(user) = &user {
                                <div class="flex items-center space-x-3">
                                    <div class="flex-shrink-0">{ avatar(user) }</div>
                                    <div class="hidden lg:block">
                                        <p class="text-sm font-medium text-gray-900 dark:text-white">{ &user.name }</p>
                                    </div>
                                </div>
                            }
                        </div>
                    </div>
                </div>

                <main class="py-6">
                    <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                        { for props.children.iter() }
                    </div>
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Preferences;

    #[test]
    fn avatar_initial_uppercases_the_first_letter() {
        let user = User {
            name: "asha".to_string(),
            email: "asha@example.com".to_string(),
            preferences: Preferences::default(),
            created_at: String::new(),
        };
        assert_eq!(avatar_initial(&user), "A");
    }

    #[test]
    fn avatar_initial_handles_an_empty_name() {
        let user = User {
            name: String::new(),
            email: String::new(),
            preferences: Preferences::default(),
            created_at: String::new(),
        };
        assert_eq!(avatar_initial(&user), "");
    }
}
