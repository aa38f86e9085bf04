mod api;
mod components;
mod format;
mod models;
mod pages;
mod session;
mod storage;
mod theme;
mod toast;

use yew::prelude::*;

use crate::components::Layout;
use crate::pages::{
    AuthScreen, BudgetPage, DashboardPage, ExpensesPage, Page, ProfilePage, UdhariPage,
};
use crate::session::{Session, SessionPhase, SessionState};
use crate::theme::{apply_theme, load_theme, Theme};
use crate::toast::{ToastAction, ToastHost, ToastList, Toaster};

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(load_theme);
    let toasts = use_reducer(ToastList::default);
    let session_state = use_reducer(|| SessionState::initial(storage::read(storage::TOKEN_KEY)));
    let active_page = use_state(|| Page::Dashboard);

    let toaster = Toaster::new(toasts.clone());
    let session = Session::new(session_state, toaster.clone());

    // apply the persisted theme before first paint and resolve any stored
    // credential back into an identity
    {
        let theme = theme.clone();
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                apply_theme(*theme);
                if session.phase() == SessionPhase::Resolving {
                    session.resolve();
                }
                || ()
            },
            (),
        );
    }

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };
    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let content = match session.phase() {
        SessionPhase::Resolving => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900 text-gray-500 dark:text-gray-400">
                {"Checking session..."}
            </div>
        },
        SessionPhase::SignedOut => html! { <AuthScreen /> },
        SessionPhase::SignedIn => {
            let page = match *active_page {
                Page::Dashboard => html! { <DashboardPage /> },
                Page::Expenses => html! { <ExpensesPage /> },
                Page::Budget => html! { <BudgetPage /> },
                Page::Udhari => html! { <UdhariPage /> },
                Page::Profile => html! { <ProfilePage /> },
            };
            html! {
                <Layout active_page={*active_page} on_select={on_select}>
                    { page }
                </Layout>
            }
        }
    };

    html! {
        <ContextProvider<Session> context={session}>
            <ContextProvider<Toaster> context={toaster}>
                <ContextProvider<UseStateHandle<Theme>> context={theme}>
                    { content }
                    <ToastHost toasts={toasts.toasts.clone()} on_dismiss={on_dismiss} />
                </ContextProvider<UseStateHandle<Theme>>>
            </ContextProvider<Toaster>>
        </ContextProvider<Session>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
