pub mod charts;
pub mod expense_form;
pub mod expense_list;
pub mod icons;
pub mod layout;
pub mod udhari_form;
pub mod udhari_list;

pub use charts::{CategoryDonut, TrendChart};
pub use expense_form::ExpenseForm;
pub use expense_list::ExpenseList;
pub use layout::Layout;
pub use udhari_form::UdhariForm;
pub use udhari_list::UdhariList;
