//! One module per backend resource. Each operation is a thin mapping from a
//! typed request shape to one HTTP verb + path; errors propagate unchanged.

mod addresses;
mod cashback;
mod categories;
mod commissions;
mod leaderboard;
mod payments;
mod points;
mod selections;
mod transfer_methods;
