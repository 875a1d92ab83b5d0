mod client;
mod errors;
mod query;
mod resources;
pub mod types;
pub use self::client::{Client, Session};
pub use self::errors::Error;
pub use self::query::{
    CashbackQuery, CategoryQuery, CommissionHistoryQuery, ListQuery, PaymentQuery, Query,
};
