pub mod addresses;
pub mod cashback;
pub mod categories;
pub mod commissions;
pub mod leaderboard;
pub mod payments;
pub mod points;
pub mod selections;
pub mod transfer_methods;
