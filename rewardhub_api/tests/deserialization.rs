use rewardhub_api::types::{
    Address, CashbackProgram, Category, CategoryIcon, CommissionEntry, CommissionStatus,
    LeaderboardEntry, Page, Payment, PaymentStatus, PointsRule, PointsRuleKind, SearchPage,
    TransferMethodKind, Withdrawal, WithdrawalStatus,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_addresses_page() {
    let json = load_fixture("addresses.json");
    let page: Page<Address> = serde_json::from_str(&json).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 2);
    assert_eq!(page.skip, 0);
    assert_eq!(page.limit, 10);

    let first = &page.items[0];
    assert_eq!(first.street, "Rua das Flores");
    assert_eq!(first.complement.as_deref(), Some("Apto 41"));
    assert!(first.is_selected);

    let second = &page.items[1];
    assert!(second.complement.is_none());
    assert!(!second.is_selected);
}

#[test]
fn deserialize_commission_history() {
    let json = load_fixture("commission_history.json");
    let page: Page<CommissionEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total, 25);
    assert!(page.items.len() as i64 <= page.limit);
    assert!(page.total >= page.items.len() as i64);

    assert_eq!(page.items[0].status, CommissionStatus::Available);
    assert_eq!(page.items[1].status, CommissionStatus::Pending);
    assert_eq!(page.items[2].status, CommissionStatus::Withdrawn);
    // reversals come through as negative amounts
    assert_eq!(page.items[4].amount, -300);
    assert!(page.items[2].description.is_none());
}

#[test]
fn deserialize_withdrawal_with_embedded_transfer_method() {
    let json = load_fixture("withdrawal_pending.json");
    let withdrawal: Withdrawal = serde_json::from_str(&json).unwrap();
    assert_eq!(withdrawal.amount, 5000);
    assert_eq!(withdrawal.status, WithdrawalStatus::Pending);
    assert_eq!(withdrawal.transfer_method.key_type, TransferMethodKind::Email);
    assert_eq!(withdrawal.transfer_method.key_value, "maria@example.com");
    assert!(withdrawal.transfer_method.is_default);
}

#[test]
fn deserialize_payments_uppercase_statuses() {
    let json = load_fixture("payments.json");
    let page: Page<Payment> = serde_json::from_str(&json).unwrap();
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items[0].status, PaymentStatus::Paid);
    assert_eq!(page.items[1].status, PaymentStatus::Pending);
    assert_eq!(page.items[2].status, PaymentStatus::Cancelled);
    assert_eq!(page.items[0].method.as_deref(), Some("pix"));
    assert!(page.items[2].method.is_none());
}

#[test]
fn deserialize_points_rules() {
    let json = load_fixture("points_rules.json");
    let rules: Vec<PointsRule> = serde_json::from_str(&json).unwrap();
    assert_eq!(rules.len(), 3);
    assert_eq!(rules[0].rule_type, PointsRuleKind::ValueSpent);
    assert_eq!(rules[1].rule_type, PointsRuleKind::FirstPurchase);
    assert_eq!(rules[2].rule_type, PointsRuleKind::Geolocation);
    assert!(!rules[2].is_active);
}

#[test]
fn deserialize_categories_with_icon_fallback() {
    let json = load_fixture("categories.json");
    let page: SearchPage<Category> = serde_json::from_str(&json).unwrap();
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.total, 12);
    assert_eq!(page.page, 1);
    assert_eq!(page.size, 5);

    assert_eq!(page.items[0].icon, CategoryIcon::Utensils);
    assert_eq!(page.items[2].icon, CategoryIcon::PawPrint);
    // "sparkles" is not a recognized icon name and falls back to Box
    assert_eq!(page.items[3].icon, CategoryIcon::Box);
}

#[test]
fn deserialize_leaderboard() {
    let json = load_fixture("leaderboard.json");
    let entries: Vec<LeaderboardEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].position, 1);
    assert_eq!(entries[0].username, "maria.santos");
    assert!(entries[0].points > entries[1].points);
}

#[test]
fn deserialize_cashback_programs() {
    let json = load_fixture("cashback_programs.json");
    let programs: Vec<CashbackProgram> = serde_json::from_str(&json).unwrap();
    assert_eq!(programs.len(), 2);
    assert_eq!(programs[0].percent, 5.0);
    assert!(programs[0].valid_from.is_some());
    assert!(programs[1].valid_from.is_none());
}
