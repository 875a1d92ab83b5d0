/// Unique identifier for a user account (opaque UUID string).
pub type UserId = String;
/// Unique identifier for a company (opaque UUID string).
pub type CompanyId = String;

mod meta;
pub use self::meta::{Page, SearchPage};

mod address;
pub use self::address::{Address, AddressCreate, AddressId, AddressUpdate};

mod transfer_method;
pub use self::transfer_method::{
    TransferMethod, TransferMethodCreate, TransferMethodId, TransferMethodKind,
    TransferMethodUpdate,
};

mod commission;
pub use self::commission::{
    CommissionBalance, CommissionEntry, CommissionStatus, Withdrawal, WithdrawalCreate,
    WithdrawalId, WithdrawalStatus,
};

mod payment;
pub use self::payment::{Payment, PaymentId, PaymentStatus};

mod points;
pub use self::points::{PointsRule, PointsRuleId, PointsRuleKind};

mod cashback;
pub use self::cashback::{
    Cashback, CashbackProgram, CashbackProgramCreate, CashbackProgramId, CashbackProgramUpdate,
};

mod category;
pub use self::category::{Category, CategoryIcon, CategoryId};

mod leaderboard;
pub use self::leaderboard::LeaderboardEntry;

mod selection;
pub use self::selection::{Selection, SelectionCreate, SelectionId};
