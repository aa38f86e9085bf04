use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    Analytics, AuthResponse, Budget, BudgetPayload, Expense, ExpensePage, ExpensePayload,
    LoginPayload, ProfilePayload, RegisterPayload, UdhariListResponse, UdhariPayload,
    UdhariRecord, UdhariSummary, User,
};
use crate::storage;

const API_BASE_URL: &str = "http://localhost:5000";

pub const PAGE_SIZE: u32 = 10;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Http { status: u16, message: Option<String> },
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
}

impl ApiError {
    // server-supplied message when the body carried one, otherwise the caller's fallback
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn url(path: &str) -> String {
    format!("{}/api{}", API_BASE_URL, path)
}

fn authorize(request: RequestBuilder) -> RequestBuilder {
    match storage::read(storage::TOKEN_KEY) {
        Some(token) if !token.is_empty() => {
            request.header("Authorization", &format!("Bearer {}", token))
        }
        _ => request,
    }
}

async fn error_for(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.message);
    ApiError::Http { status, message }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        Ok(response.json::<T>().await?)
    } else {
        Err(error_for(response).await)
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorize(Request::get(&url(path))).send().await?;
    parse(response).await
}

async fn get_json_with<T: DeserializeOwned>(
    path: &str,
    params: &[(&'static str, String)],
) -> Result<T, ApiError> {
    let request = Request::get(&url(path)).query(params.iter().map(|(k, v)| (*k, v.as_str())));
    let response = authorize(request).send().await?;
    parse(response).await
}

async fn post_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = authorize(Request::post(&url(path))).json(body)?.send().await?;
    parse(response).await
}

async fn put_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = authorize(Request::put(&url(path))).json(body)?.send().await?;
    parse(response).await
}

async fn put_empty(path: &str) -> Result<(), ApiError> {
    let response = authorize(Request::put(&url(path))).send().await?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_for(response).await)
    }
}

async fn delete(path: &str) -> Result<(), ApiError> {
    let response = authorize(Request::delete(&url(path))).send().await?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_for(response).await)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseFilters {
    pub category: String,
    pub start_date: String,
    pub end_date: String,
    pub search: String,
}

impl Default for ExpenseFilters {
    fn default() -> ExpenseFilters {
        ExpenseFilters {
            category: "all".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            search: String::new(),
        }
    }
}

// every key is always sent; the server treats "all" and empty strings as no filter
pub fn expense_params(filters: &ExpenseFilters, page: u32) -> Vec<(&'static str, String)> {
    vec![
        ("page", page.to_string()),
        ("limit", PAGE_SIZE.to_string()),
        ("category", filters.category.clone()),
        ("startDate", filters.start_date.clone()),
        ("endDate", filters.end_date.clone()),
        ("search", filters.search.clone()),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct UdhariFilters {
    pub kind: String,
    pub status: String,
}

impl Default for UdhariFilters {
    fn default() -> UdhariFilters {
        UdhariFilters {
            kind: "all".to_string(),
            status: "all".to_string(),
        }
    }
}

pub fn udhari_params(filters: &UdhariFilters) -> Vec<(&'static str, String)> {
    vec![
        ("type", filters.kind.clone()),
        ("status", filters.status.clone()),
    ]
}

pub struct AuthApi;

impl AuthApi {
    pub async fn login(payload: &LoginPayload) -> Result<AuthResponse, ApiError> {
        post_json("/auth/login", payload).await
    }

    pub async fn register(payload: &RegisterPayload) -> Result<AuthResponse, ApiError> {
        post_json("/auth/register", payload).await
    }

    pub async fn profile() -> Result<User, ApiError> {
        get_json("/auth/profile").await
    }

    pub async fn update_profile(payload: &ProfilePayload) -> Result<User, ApiError> {
        put_json("/auth/profile", payload).await
    }
}

pub struct ExpensesApi;

impl ExpensesApi {
    pub async fn list(filters: &ExpenseFilters, page: u32) -> Result<ExpensePage, ApiError> {
        get_json_with("/expenses", &expense_params(filters, page)).await
    }

    pub async fn analytics() -> Result<Analytics, ApiError> {
        get_json("/expenses/analytics").await
    }

    pub async fn create(payload: &ExpensePayload) -> Result<Expense, ApiError> {
        post_json("/expenses", payload).await
    }

    pub async fn update(id: &str, payload: &ExpensePayload) -> Result<Expense, ApiError> {
        put_json(&format!("/expenses/{}", id), payload).await
    }

    pub async fn remove(id: &str) -> Result<(), ApiError> {
        delete(&format!("/expenses/{}", id)).await
    }
}

pub struct BudgetApi;

impl BudgetApi {
    pub async fn fetch() -> Result<Option<Budget>, ApiError> {
        get_json("/budget").await
    }

    pub async fn save(payload: &BudgetPayload) -> Result<(), ApiError> {
        let response = authorize(Request::post(&url("/budget"))).json(payload)?.send().await?;
        if response.ok() {
            Ok(())
        } else {
            Err(error_for(response).await)
        }
    }
}

pub struct UdhariApi;

impl UdhariApi {
    pub async fn list(filters: &UdhariFilters) -> Result<Vec<UdhariRecord>, ApiError> {
        let response: UdhariListResponse = get_json_with("/udhari", &udhari_params(filters)).await?;
        Ok(response.records)
    }

    pub async fn summary() -> Result<UdhariSummary, ApiError> {
        get_json("/udhari/summary").await
    }

    pub async fn create(payload: &UdhariPayload) -> Result<UdhariRecord, ApiError> {
        post_json("/udhari", payload).await
    }

    pub async fn update(id: &str, payload: &UdhariPayload) -> Result<UdhariRecord, ApiError> {
        put_json(&format!("/udhari/{}", id), payload).await
    }

    pub async fn remove(id: &str) -> Result<(), ApiError> {
        delete(&format!("/udhari/{}", id)).await
    }

    pub async fn settle(id: &str) -> Result<(), ApiError> {
        put_empty(&format!("/udhari/{}/settle", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_params_always_carry_every_key() {
        let params = expense_params(&ExpenseFilters::default(), 1);
        assert_eq!(
            params,
            vec![
                ("page", "1".to_string()),
                ("limit", "10".to_string()),
                ("category", "all".to_string()),
                ("startDate", "".to_string()),
                ("endDate", "".to_string()),
                ("search", "".to_string()),
            ]
        );
    }

    #[test]
    fn expense_params_reflect_active_filters() {
        let filters = ExpenseFilters {
            category: "Lunch".to_string(),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-30".to_string(),
            search: "tea".to_string(),
        };
        let params = expense_params(&filters, 3);
        assert_eq!(params[0], ("page", "3".to_string()));
        assert_eq!(params[2], ("category", "Lunch".to_string()));
        assert_eq!(params[3], ("startDate", "2024-06-01".to_string()));
        assert_eq!(params[4], ("endDate", "2024-06-30".to_string()));
        assert_eq!(params[5], ("search", "tea".to_string()));
    }

    #[test]
    fn udhari_params_send_type_and_status() {
        assert_eq!(
            udhari_params(&UdhariFilters::default()),
            vec![("type", "all".to_string()), ("status", "all".to_string())]
        );
        let filters = UdhariFilters {
            kind: "lend".to_string(),
            status: "pending".to_string(),
        };
        assert_eq!(
            udhari_params(&filters),
            vec![("type", "lend".to_string()), ("status", "pending".to_string())]
        );
    }

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Http {
            status: 400,
            message: Some("Budget must be positive".to_string()),
        };
        assert_eq!(err.user_message("Failed to update budget"), "Budget must be positive");
    }

    #[test]
    fn user_message_falls_back_when_body_was_unreadable() {
        let err = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Failed to load expenses"), "Failed to load expenses");

        let blank = ApiError::Http {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(blank.user_message("Failed to load expenses"), "Failed to load expenses");
    }
}
