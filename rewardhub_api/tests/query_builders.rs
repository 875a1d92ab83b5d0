use rewardhub_api::types::{CommissionStatus, PaymentStatus};
use rewardhub_api::{CashbackQuery, CategoryQuery, CommissionHistoryQuery, ListQuery, PaymentQuery, Query};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/resource").unwrap()
}

#[test]
fn list_query_defaults() {
    let url = ListQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), Some("skip=0&limit=10"));
}

#[test]
fn list_query_custom_offsets() {
    let url = ListQuery::default()
        .with_skip(40)
        .with_limit(20)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("skip=40&limit=20"));
}

#[test]
fn commission_history_query_with_status() {
    let url = CommissionHistoryQuery::default()
        .with_status(CommissionStatus::Available)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("skip=0"));
    assert!(query.contains("limit=10"));
    assert!(query.contains("status=available"));
}

#[test]
fn omitted_filters_are_absent_not_null() {
    let url = CommissionHistoryQuery::default().add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(!query.contains("status"));
    assert!(!query.contains("null"));
    assert!(!query.contains("undefined"));

    let url = PaymentQuery::default().add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(!query.contains("status"));

    let url = CashbackQuery::default().add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(!query.contains("program_id"));
}

#[test]
fn payment_query_with_status() {
    let url = PaymentQuery::default()
        .with_skip(10)
        .with_status(PaymentStatus::Paid)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("skip=10"));
    assert!(query.contains("status=PAID"));
}

#[test]
fn cashback_query_with_program_filter() {
    let url = CashbackQuery::default()
        .with_program_id("50000000-aaaa-4bbb-8ccc-000000000001")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("program_id=50000000-aaaa-4bbb-8ccc-000000000001"));
}

#[test]
fn category_query_defaults() {
    let url = CategoryQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), Some("page=1"));
}

#[test]
fn category_query_with_search_and_size() {
    let url = CategoryQuery::default()
        .with_page(2)
        .with_size(25)
        .with_search("pet shops")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=2"));
    assert!(query.contains("size=25"));
    assert!(query.contains("q=pet+shops"));
}
