use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

pub const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push { message: String, kind: ToastKind },
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { message, kind } => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    message,
                    kind,
                });
                next.next_id = next.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => {
                next.toasts.retain(|toast| toast.id != id);
            }
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct Toaster {
    handle: UseReducerHandle<ToastList>,
}

impl Toaster {
    pub fn new(handle: UseReducerHandle<ToastList>) -> Toaster {
        Toaster { handle }
    }

    pub fn success(&self, message: &str) {
        self.handle.dispatch(ToastAction::Push {
            message: message.to_string(),
            kind: ToastKind::Success,
        });
    }

    pub fn error(&self, message: &str) {
        self.handle.dispatch(ToastAction::Push {
            message: message.to_string(),
            kind: ToastKind::Error,
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2 w-80">
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // each toast dismisses itself after a fixed delay
    {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        use_effect_with_deps(
            move |_| {
                Timeout::new(TOAST_DISMISS_MS, move || on_dismiss.emit(id)).forget();
                || ()
            },
            id,
        );
    }

    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_| on_dismiss.emit(id))
    };

    let accent = match props.toast.kind {
        ToastKind::Success => "border-l-4 border-success-500",
        ToastKind::Error => "border-l-4 border-danger-500",
    };

    html! {
        <div class={format!("flex items-center justify-between bg-white dark:bg-gray-800 shadow-lg rounded-lg px-4 py-3 {}", accent)}>
            <p class="text-sm text-gray-900 dark:text-white">{ &props.toast.message }</p>
            <button class="ml-3 text-gray-400 hover:text-gray-600 dark:hover:text-gray-300" onclick={on_click}>
                {"×"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: ToastList, action: ToastAction) -> ToastList {
        (*Reducible::reduce(Rc::new(state), action)).clone()
    }

    #[test]
    fn pushed_toasts_get_increasing_ids() {
        let state = reduce(
            ToastList::default(),
            ToastAction::Push {
                message: "Expense added successfully".to_string(),
                kind: ToastKind::Success,
            },
        );
        let state = reduce(
            state,
            ToastAction::Push {
                message: "Failed to load expenses".to_string(),
                kind: ToastKind::Error,
            },
        );
        assert_eq!(state.toasts.len(), 2);
        assert_eq!(state.toasts[0].id, 0);
        assert_eq!(state.toasts[1].id, 1);
        assert_eq!(state.toasts[1].kind, ToastKind::Error);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let mut state = ToastList::default();
        for message in ["one", "two", "three"] {
            state = reduce(
                state,
                ToastAction::Push {
                    message: message.to_string(),
                    kind: ToastKind::Success,
                },
            );
        }
        let state = reduce(state, ToastAction::Dismiss(1));
        let messages: Vec<&str> = state.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "three"]);
    }

    #[test]
    fn dismissing_an_unknown_id_is_a_no_op() {
        let state = reduce(
            ToastList::default(),
            ToastAction::Push {
                message: "kept".to_string(),
                kind: ToastKind::Success,
            },
        );
        let state = reduce(state, ToastAction::Dismiss(99));
        assert_eq!(state.toasts.len(), 1);
    }
}
