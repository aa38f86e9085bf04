use serde::{Deserialize, Serialize};

pub const CATEGORIES: [&str; 11] = [
    "Breakfast",
    "Lunch",
    "Dinner",
    "Shopping",
    "Travel",
    "Entertainment",
    "Healthcare",
    "Education",
    "Utilities",
    "Transportation",
    "Other",
];

pub const PAYMENT_METHODS: [&str; 5] = ["Cash", "Card", "UPI", "Net Banking", "Other"];

pub trait HasId {
    fn id(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(rename = "_id")]
    pub id: String,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    pub date: String,
    pub payment_method: String,
}

impl HasId for Expense {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePage {
    pub expenses: Vec<Expense>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UdhariKind {
    Borrow,
    Lend,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UdhariStatus {
    Pending,
    Settled,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UdhariRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub person_name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: UdhariKind,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub notes: String,
    pub status: UdhariStatus,
    #[serde(default)]
    pub settled_date: Option<String>,
}

impl HasId for UdhariRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UdhariListResponse {
    pub records: Vec<UdhariRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UdhariSummary {
    pub lend_total: f64,
    pub lend_count: u32,
    pub borrow_total: f64,
    pub borrow_count: u32,
    pub net_balance: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBudget {
    pub category: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub monthly_budget: f64,
    #[serde(default)]
    pub total_spent: f64,
    #[serde(default)]
    pub savings: f64,
    #[serde(default)]
    pub budget_utilization: f64,
    #[serde(default)]
    pub category_budgets: Vec<CategoryBudget>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryTotal {
    #[serde(rename = "_id")]
    pub category: String,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrendMonth {
    pub year: i32,
    pub month: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrendPoint {
    #[serde(rename = "_id")]
    pub month: TrendMonth,
    #[serde(default)]
    pub total: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Analytics {
    pub total_spent: f64,
    pub highest_category: Option<CategoryTotal>,
    pub category_breakdown: Vec<CategoryTotal>,
    pub monthly_trend: Vec<TrendPoint>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Preferences {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for Preferences {
    fn default() -> Preferences {
        Preferences {
            currency: default_currency(),
            theme: default_theme(),
        }
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub name: String,
    pub email: String,
    pub preferences: Preferences,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePayload {
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub date: String,
    pub payment_method: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UdhariPayload {
    pub person_name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: UdhariKind,
    pub description: String,
    pub date: String,
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPayload {
    pub monthly_budget: f64,
    pub category_budgets: Vec<CategoryBudget>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_reads_mongo_id_and_camel_case_fields() {
        let json = r#"{
            "_id": "a1",
            "category": "Lunch",
            "amount": 250.5,
            "description": "",
            "date": "2024-06-01T00:00:00.000Z",
            "paymentMethod": "Cash"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id, "a1");
        assert_eq!(expense.category, "Lunch");
        assert_eq!(expense.amount, 250.5);
        assert_eq!(expense.payment_method, "Cash");
    }

    #[test]
    fn expense_payload_serializes_with_wire_field_names() {
        let payload = ExpensePayload {
            category: "Lunch".to_string(),
            amount: 250.5,
            description: String::new(),
            date: "2024-06-01".to_string(),
            payment_method: "Cash".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["category"], "Lunch");
        assert_eq!(value["amount"], 250.5);
        assert_eq!(value["paymentMethod"], "Cash");
        assert!(value.get("payment_method").is_none());
    }

    #[test]
    fn udhari_record_maps_type_and_status_enums() {
        let json = r#"{
            "_id": "u1",
            "personName": "Ravi",
            "amount": 500.0,
            "type": "lend",
            "date": "2024-06-01",
            "status": "pending"
        }"#;
        let record: UdhariRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.person_name, "Ravi");
        assert_eq!(record.kind, UdhariKind::Lend);
        assert_eq!(record.status, UdhariStatus::Pending);
        assert_eq!(record.settled_date, None);
        assert_eq!(record.notes, "");
    }

    #[test]
    fn udhari_payload_uses_type_key_for_kind() {
        let payload = UdhariPayload {
            person_name: "Ravi".to_string(),
            amount: 500.0,
            kind: UdhariKind::Borrow,
            description: String::new(),
            date: "2024-06-01".to_string(),
            notes: String::new(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "borrow");
        assert_eq!(value["personName"], "Ravi");
    }

    #[test]
    fn budget_endpoint_may_return_null() {
        let none: Option<Budget> = serde_json::from_str("null").unwrap();
        assert!(none.is_none());

        let some: Option<Budget> = serde_json::from_str(
            r#"{"monthlyBudget": 10000.0, "totalSpent": 2500.0, "savings": 7500.0,
                "budgetUtilization": 25.0, "categoryBudgets": [{"category": "Lunch", "amount": 3000.0}]}"#,
        )
        .unwrap();
        let budget = some.unwrap();
        assert_eq!(budget.monthly_budget, 10000.0);
        assert_eq!(budget.category_budgets.len(), 1);
    }

    #[test]
    fn analytics_trend_carries_year_month_ids() {
        let analytics: Analytics = serde_json::from_str(
            r#"{"totalSpent": 1200.0,
                "highestCategory": {"_id": "Lunch", "total": 800.0},
                "categoryBreakdown": [{"_id": "Lunch", "total": 800.0}, {"_id": "Travel", "total": 400.0}],
                "monthlyTrend": [{"_id": {"year": 2024, "month": 6}, "total": 1200.0}]}"#,
        )
        .unwrap();
        assert_eq!(analytics.highest_category.unwrap().category, "Lunch");
        assert_eq!(analytics.monthly_trend[0].month.year, 2024);
        assert_eq!(analytics.monthly_trend[0].month.month, 6);
    }

    #[test]
    fn analytics_defaults_cover_missing_sections() {
        let analytics: Analytics = serde_json::from_str(r#"{"totalSpent": 0}"#).unwrap();
        assert!(analytics.highest_category.is_none());
        assert!(analytics.category_breakdown.is_empty());
        assert!(analytics.monthly_trend.is_empty());
    }

    #[test]
    fn auth_response_flattens_user_beside_token() {
        let auth: AuthResponse = serde_json::from_str(
            r#"{"name": "Asha", "email": "asha@example.com",
                "preferences": {"currency": "INR", "theme": "dark"},
                "createdAt": "2024-01-15T10:00:00.000Z", "token": "jwt-token"}"#,
        )
        .unwrap();
        assert_eq!(auth.token, "jwt-token");
        assert_eq!(auth.user.name, "Asha");
        assert_eq!(auth.user.preferences.theme, "dark");
    }

    #[test]
    fn user_preferences_default_when_absent() {
        let user: User = serde_json::from_str(r#"{"name": "Asha", "email": "a@b.c"}"#).unwrap();
        assert_eq!(user.preferences.currency, "INR");
        assert_eq!(user.preferences.theme, "light");
    }

    #[test]
    fn kind_round_trips_through_its_wire_strings() {
        let lend: UdhariKind = serde_json::from_str("\"lend\"").unwrap();
        assert_eq!(lend, UdhariKind::Lend);
        assert_eq!(serde_json::to_string(&UdhariKind::Borrow).unwrap(), "\"borrow\"");
    }
}
