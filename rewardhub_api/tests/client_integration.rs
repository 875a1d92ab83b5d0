use rewardhub_api::types::{
    AddressCreate, SelectionCreate, TransferMethodCreate, TransferMethodKind, WithdrawalStatus,
};
use rewardhub_api::{Client, CommissionHistoryQuery, Error, ListQuery, Session};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    Client::new(&server.uri(), Session::anonymous()).unwrap()
}

#[tokio::test]
async fn list_addresses_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("addresses.json");

    Mock::given(method("GET"))
        .and(path("/addresses"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.list_addresses(&ListQuery::default()).await.unwrap();

    assert!(page.items.len() as i64 <= page.limit);
    assert!(page.total >= page.items.len() as i64);
    assert_eq!(page.items[0].street, "Rua das Flores");
}

#[tokio::test]
async fn bearer_token_is_attached() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("addresses.json");

    Mock::given(method("GET"))
        .and(path("/addresses"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Session::bearer("test-token")).unwrap();
    let result = client.list_addresses(&ListQuery::default()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn commission_history_pagination_scenario() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("commission_history.json");

    Mock::given(method("GET"))
        .and(path("/commissions/history"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .commission_history(&CommissionHistoryQuery::default())
        .await
        .unwrap();

    assert_eq!(page.total, 25);
    assert_eq!(page.skip, 0);
    assert_eq!(page.limit, 10);
    assert_eq!(page.items.len(), 10);
}

#[tokio::test]
async fn create_then_get_address_round_trip() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("address_created.json");

    let payload = AddressCreate {
        street: "Rua Augusta".to_string(),
        number: "1500".to_string(),
        complement: None,
        district: "Consolacao".to_string(),
        city: "Sao Paulo".to_string(),
        state: "SP".to_string(),
        zip_code: "01304-001".to_string(),
        country: "BR".to_string(),
        is_selected: None,
    };

    // omitted optional fields must not appear in the request body
    Mock::given(method("POST"))
        .and(path("/addresses"))
        .and(body_json(json!({
            "street": "Rua Augusta",
            "number": "1500",
            "district": "Consolacao",
            "city": "Sao Paulo",
            "state": "SP",
            "zip_code": "01304-001",
            "country": "BR"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string(&body))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/addresses/a0b1c2d3-e4f5-6789-abcd-ef0123456789"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let created = client.create_address(&payload).await.unwrap();
    assert_eq!(created.street, payload.street);
    // server-applied default when is_selected is omitted
    assert!(!created.is_selected);

    let fetched = client.get_address(&created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.street, created.street);
}

#[tokio::test]
async fn get_address_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/addresses/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"detail": "Address not found"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_address("missing").await.unwrap_err();
    match err {
        Error::NotFound { message } => assert_eq!(message, "Address not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn approve_withdrawal_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("withdrawal_approved.json");

    Mock::given(method("PATCH"))
        .and(path(
            "/admin/commissions/d2f4a6b8-0c1e-4f3a-9b5d-7e8f9a0b1c2d/approve",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let withdrawal = client
        .approve_withdrawal("d2f4a6b8-0c1e-4f3a-9b5d-7e8f9a0b1c2d")
        .await
        .unwrap();
    assert_eq!(withdrawal.status, WithdrawalStatus::Approved);
}

#[tokio::test]
async fn approve_withdrawal_already_approved_conflicts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/admin/commissions/abc-123/approve"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_string(r#"{"detail": "Withdrawal is not pending"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.approve_withdrawal("abc-123").await.unwrap_err();
    match err {
        Error::Conflict { message } => assert_eq!(message, "Withdrawal is not pending"),
        other => panic!("expected Conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn unauthenticated_request_surfaces_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commissions/balance"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"detail": "Not authenticated"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.commission_balance().await.unwrap_err();
    match err {
        Error::Auth { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Not authenticated");
        }
        other => panic!("expected Auth, got {:?}", other),
    }
}

#[tokio::test]
async fn validation_error_carries_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/commissions/withdrawals"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_string(r#"{"detail": "amount exceeds available balance"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let payload = rewardhub_api::types::WithdrawalCreate {
        amount: 1_000_000,
        transfer_method_id: "f0e1d2c3-b4a5-4968-8776-655443322110".to_string(),
    };
    let err = client.request_withdrawal(&payload).await.unwrap_err();
    match err {
        Error::Validation { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "amount exceeds available balance");
        }
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[tokio::test]
async fn server_error_with_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .list_payments(&rewardhub_api::PaymentQuery::default())
        .await
        .unwrap_err();
    match err {
        Error::Server { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Server, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/addresses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .list_addresses(&ListQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn oversized_multibyte_error_body_is_truncated() {
    let mock_server = MockServer::start().await;

    // a char straddles the 2000-byte truncation mark
    let body = format!("{}ééééé", "x".repeat(1999));
    Mock::given(method("GET"))
        .and(path("/addresses"))
        .respond_with(ResponseTemplate::new(500).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .list_addresses(&ListQuery::default())
        .await
        .unwrap_err();
    match err {
        Error::Server { status, message } => {
            assert_eq!(status, 500);
            assert!(message.ends_with("...[truncated]"));
        }
        other => panic!("expected Server, got {:?}", other),
    }
}

#[tokio::test]
async fn client_from_env_reads_base_url() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("addresses.json");

    Mock::given(method("GET"))
        .and(path("/addresses"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    std::env::set_var("REWARDHUB_API_URL", mock_server.uri());
    std::env::remove_var("REWARDHUB_API_TOKEN");
    let client = Client::from_env().unwrap();
    let page = client.list_addresses(&ListQuery::default()).await.unwrap();
    assert_eq!(page.total, 2);
}

#[tokio::test]
async fn list_transfer_methods_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("transfer_methods.json");

    Mock::given(method("GET"))
        .and(path("/transfer_methods"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .list_transfer_methods(&ListQuery::default())
        .await
        .unwrap();

    assert!(page.items.len() as i64 <= page.limit);
    assert!(page.total >= page.items.len() as i64);
    assert_eq!(page.items[0].key_type, TransferMethodKind::Email);
    assert!(page.items[0].is_default);
    assert_eq!(page.items[1].key_type, TransferMethodKind::Random);
}

#[tokio::test]
async fn create_transfer_method_success() {
    let mock_server = MockServer::start().await;

    // is_default omitted from the payload must not appear in the body
    Mock::given(method("POST"))
        .and(path("/transfer_methods"))
        .and(body_json(json!({
            "key_type": "phone",
            "key_value": "+5511999990000"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "f0e1d2c3-b4a5-4968-8776-655443322112",
            "user_id": "b1a7d2c4-8e3f-4b5a-a6d7-0c9e8f7a6b5c",
            "key_type": "phone",
            "key_value": "+5511999990000",
            "is_default": false,
            "created_at": "2024-06-15T12:00:00Z"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let payload = TransferMethodCreate {
        key_type: TransferMethodKind::Phone,
        key_value: "+5511999990000".to_string(),
        is_default: None,
    };
    let method_created = client.create_transfer_method(&payload).await.unwrap();
    assert_eq!(method_created.key_type, TransferMethodKind::Phone);
    // server-applied default when is_default is omitted
    assert!(!method_created.is_default);
}

#[tokio::test]
async fn list_selections_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("selections.json");

    Mock::given(method("GET"))
        .and(path("/selections"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.list_selections(&ListQuery::default()).await.unwrap();

    assert!(page.items.len() as i64 <= page.limit);
    assert!(page.total >= page.items.len() as i64);
    assert_eq!(page.items[0].product_id, "prod-8c1d2e3f-0001");
}

#[tokio::test]
async fn create_selection_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/selections"))
        .and(body_json(json!({ "product_id": "prod-8c1d2e3f-0003" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "60000000-aaaa-4bbb-8ccc-000000000003",
            "user_id": "b1a7d2c4-8e3f-4b5a-a6d7-0c9e8f7a6b5c",
            "product_id": "prod-8c1d2e3f-0003",
            "created_at": "2024-06-16T09:00:00Z"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let payload = SelectionCreate {
        product_id: "prod-8c1d2e3f-0003".to_string(),
    };
    let selection = client.create_selection(&payload).await.unwrap();
    assert_eq!(selection.product_id, "prod-8c1d2e3f-0003");
}

#[tokio::test]
async fn delete_address_ignores_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/addresses/a0b1c2d3-e4f5-6789-abcd-ef0123456789"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .delete_address("a0b1c2d3-e4f5-6789-abcd-ef0123456789")
        .await;
    assert!(result.is_ok());
}
