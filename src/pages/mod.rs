pub mod auth;
pub mod budget;
pub mod dashboard;
pub mod expenses;
pub mod profile;
pub mod udhari;

pub use auth::AuthScreen;
pub use budget::BudgetPage;
pub use dashboard::DashboardPage;
pub use expenses::ExpensesPage;
pub use profile::ProfilePage;
pub use udhari::UdhariPage;

use yew::prelude::*;

use crate::models::HasId;

pub fn page_header(title: &'static str, subtitle: &'static str, actions: Html) -> Html {
    html! {
        <div class="flex justify-between items-center">
            <div>
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{ title }</h1>
                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{ subtitle }</p>
            </div>
            { actions }
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Expenses,
    Budget,
    Udhari,
    Profile,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed,
}

impl<T> LoadState<T> {
    pub fn is_fetching(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading)
    }

    // a failed refetch keeps whatever was already on screen
    pub fn failed(self) -> LoadState<T> {
        match self {
            LoadState::Ready(data) => LoadState::Ready(data),
            _ => LoadState::Failed,
        }
    }
}

// mutation responses are merged into list state instead of re-fetching the page

pub fn with_prepended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(item);
    next.extend_from_slice(items);
    next
}

pub fn with_replaced<T: Clone + HasId>(items: &[T], item: T) -> Vec<T> {
    items
        .iter()
        .map(|existing| {
            if existing.id() == item.id() {
                item.clone()
            } else {
                existing.clone()
            }
        })
        .collect()
}

pub fn without<T: Clone + HasId>(items: &[T], id: &str) -> Vec<T> {
    items
        .iter()
        .filter(|existing| existing.id() != id)
        .cloned()
        .collect()
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    fn expense(id: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            category: "Lunch".to_string(),
            amount,
            description: String::new(),
            date: "2024-06-01".to_string(),
            payment_method: "Cash".to_string(),
        }
    }

    #[test]
    fn created_records_land_at_the_front() {
        let list = vec![expense("a", 10.0), expense("b", 20.0)];
        let next = with_prepended(&list, expense("c", 30.0));
        let ids: Vec<&str> = next.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn updates_replace_only_the_matching_record() {
        let list = vec![expense("a", 10.0), expense("b", 20.0)];
        let next = with_replaced(&list, expense("b", 99.0));
        assert_eq!(next[0].amount, 10.0);
        assert_eq!(next[1].amount, 99.0);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn deletes_remove_exactly_one_entry() {
        let list = vec![expense("a", 10.0), expense("b", 20.0), expense("c", 30.0)];
        let next = without(&list, "b");
        let ids: Vec<&str> = next.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn deleting_an_unknown_id_leaves_the_list_untouched() {
        let list = vec![expense("a", 10.0)];
        assert_eq!(without(&list, "zzz").len(), 1);
    }

    #[test]
    fn a_failed_refetch_keeps_prior_data() {
        let state = LoadState::Ready(vec![expense("a", 10.0)]);
        assert_eq!(state.clone().failed(), state);
        let state: LoadState<Vec<Expense>> = LoadState::Loading;
        assert_eq!(state.failed(), LoadState::Failed);
    }

    #[test]
    fn idle_and_loading_both_count_as_fetching() {
        assert!(LoadState::<()>::Idle.is_fetching());
        assert!(LoadState::<()>::Loading.is_fetching());
        assert!(!LoadState::Ready(()).is_fetching());
        assert!(!LoadState::<()>::Failed.is_fetching());
    }
}
