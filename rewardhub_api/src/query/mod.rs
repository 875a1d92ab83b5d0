mod common;
pub use self::common::{ListQuery, Query};

mod category;
pub use self::category::CategoryQuery;

mod commission;
pub use self::commission::CommissionHistoryQuery;

mod payment;
pub use self::payment::PaymentQuery;

mod cashback;
pub use self::cashback::CashbackQuery;
