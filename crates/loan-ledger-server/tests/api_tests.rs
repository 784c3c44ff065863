use axum_test::TestServer;
use loan_ledger_server::create_app;
use loan_ledger_store::SqliteStore;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;

async fn server() -> TestServer {
    let store = SqliteStore::in_memory().await.unwrap();
    TestServer::new(create_app(Arc::new(store))).unwrap()
}

async fn create_user(server: &TestServer, name: &str) -> i64 {
    let response = server.post("/users").json(&json!({ "name": name })).await;
    response.assert_status_ok();
    response.json::<Value>()["id"].as_i64().unwrap()
}

async fn create_mortgage(server: &TestServer, user_id: i64) -> i64 {
    let response = server
        .post("/loans")
        .json(&json!({
            "user_id": user_id,
            "amount": 500_000,
            "annual_interest_rate": 0.06,
            "monthly_payments": 360
        }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = server().await;
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

// ===========================================================================
// Full reference scenario
// ===========================================================================

#[tokio::test]
async fn test_reference_scenario() {
    let server = server().await;

    let user_id = create_user(&server, "testuser").await;
    create_mortgage(&server, user_id).await;

    let loans = server.get(&format!("/loans/{user_id}")).await;
    loans.assert_status_ok();
    let loans: Value = loans.json();
    assert_eq!(loans.as_array().unwrap().len(), 1);
    assert_eq!(loans[0]["amount"], json!(500000.0));
    assert_eq!(loans[0]["annual_interest_rate"], json!(0.06));
    let loan_id = loans[0]["id"].as_i64().unwrap();

    let schedule = server.get(&format!("/loan_schedule/{loan_id}")).await;
    schedule.assert_status_ok();
    let schedule: Vec<Value> = schedule.json();
    assert_eq!(schedule.len(), 360);
    assert_eq!(
        schedule[359],
        json!({
            "month": 360,
            "interest_payment": 14.91,
            "principal_payment": 2982.84,
            "remaining_balance": 0.0
        })
    );

    let summary = server.get(&format!("/loan_summary/{loan_id}/360")).await;
    summary.assert_status_ok();
    summary.assert_json(&json!({
        "principal_payment": 2982.84,
        "total_principal_payment": 499999.93,
        "total_interest_payment": 579190.97
    }));

    let user2_id = create_user(&server, "testuser2").await;
    let shared = server
        .post("/loan_share")
        .json(&json!({
            "source_user_id": user_id,
            "target_user_id": user2_id,
            "loan_id": loan_id
        }))
        .await;
    shared.assert_status_ok();
    assert_eq!(shared.json::<Value>()["user_id"], json!(user2_id));
}

// ===========================================================================
// Users
// ===========================================================================

#[tokio::test]
async fn test_list_users() {
    let server = server().await;
    create_user(&server, "alice").await;
    create_user(&server, "bob").await;

    let users: Value = server.get("/users").await.json();
    let names: Vec<&str> = users
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alice", "bob"]);
}

// ===========================================================================
// Loans
// ===========================================================================

#[tokio::test]
async fn test_create_loan_rejects_bad_terms() {
    let server = server().await;
    let user_id = create_user(&server, "owner").await;

    for body in [
        json!({ "user_id": user_id, "amount": 1000, "annual_interest_rate": 0.05, "monthly_payments": 0 }),
        json!({ "user_id": user_id, "amount": 0, "annual_interest_rate": 0.05, "monthly_payments": 12 }),
        json!({ "user_id": user_id, "amount": 1000, "annual_interest_rate": -0.05, "monthly_payments": 12 }),
    ] {
        let response = server.post("/loans").json(&body).expect_failure().await;
        response.assert_status_bad_request();
    }

    let loans: Value = server.get(&format!("/loans/{user_id}")).await.json();
    assert!(loans.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_loan_for_unknown_user() {
    let server = server().await;
    let response = server
        .post("/loans")
        .json(&json!({ "user_id": 404, "amount": 1000, "annual_interest_rate": 0.05, "monthly_payments": 12 }))
        .expect_failure()
        .await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_zero_rate_loan_schedule() {
    let server = server().await;
    let user_id = create_user(&server, "owner").await;
    let response = server
        .post("/loans")
        .json(&json!({ "user_id": user_id, "amount": 1200, "annual_interest_rate": 0, "monthly_payments": 12 }))
        .await;
    response.assert_status_ok();
    let loan_id = response.json::<Value>()["id"].as_i64().unwrap();

    let schedule: Vec<Value> = server.get(&format!("/loan_schedule/{loan_id}")).await.json();
    assert_eq!(schedule.len(), 12);
    for entry in &schedule {
        assert_eq!(entry["interest_payment"], json!(0.0));
        assert_eq!(entry["principal_payment"], json!(100.0));
    }
    assert_eq!(schedule[11]["remaining_balance"], json!(0.0));
}

#[tokio::test]
async fn test_long_term_loan_is_accepted() {
    let server = server().await;
    let user_id = create_user(&server, "owner").await;
    let response = server
        .post("/loans")
        .json(&json!({ "user_id": user_id, "amount": 100_000, "annual_interest_rate": 0.03, "monthly_payments": 1500 }))
        .await;
    response.assert_status_ok();
    let loan_id = response.json::<Value>()["id"].as_i64().unwrap();

    let schedule: Vec<Value> = server.get(&format!("/loan_schedule/{loan_id}")).await.json();
    assert_eq!(schedule.len(), 1500);
    assert_eq!(schedule[1499]["remaining_balance"], json!(0.0));
}

#[tokio::test]
async fn test_schedule_for_missing_loan() {
    let server = server().await;
    let response = server.get("/loan_schedule/12345").expect_failure().await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["detail"], json!("Loan 12345 not found"));
}

#[tokio::test]
async fn test_summary_out_of_range_months() {
    let server = server().await;
    let user_id = create_user(&server, "owner").await;
    let loan_id = create_mortgage(&server, user_id).await;

    server
        .get(&format!("/loan_summary/{loan_id}/0"))
        .await
        .assert_json(&json!({
            "principal_payment": 0.0,
            "total_principal_payment": 0.0,
            "total_interest_payment": 0.0
        }));

    server
        .get(&format!("/loan_summary/{loan_id}/400"))
        .await
        .assert_json(&json!({
            "principal_payment": 0.0,
            "total_principal_payment": 499999.93,
            "total_interest_payment": 579190.97
        }));
}

// ===========================================================================
// Loan sharing
// ===========================================================================

#[tokio::test]
async fn test_share_with_wrong_source_keeps_owner() {
    let server = server().await;
    let owner = create_user(&server, "owner").await;
    let other = create_user(&server, "other").await;
    let loan_id = create_mortgage(&server, owner).await;

    let response = server
        .post("/loan_share")
        .json(&json!({ "source_user_id": other, "target_user_id": other, "loan_id": loan_id }))
        .expect_failure()
        .await;
    response.assert_status_not_found();

    let owned: Value = server.get(&format!("/loans/{owner}")).await.json();
    assert_eq!(owned.as_array().unwrap().len(), 1);
    let stolen: Value = server.get(&format!("/loans/{other}")).await.json();
    assert!(stolen.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_share_chain() {
    let server = server().await;
    let first = create_user(&server, "first").await;
    let second = create_user(&server, "second").await;
    let third = create_user(&server, "third").await;
    let loan_id = create_mortgage(&server, first).await;

    for (source, target) in [(first, second), (second, third)] {
        let response = server
            .post("/loan_share")
            .json(&json!({ "source_user_id": source, "target_user_id": target, "loan_id": loan_id }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["user_id"], json!(target));
    }

    let loans: Value = server.get(&format!("/loans/{third}")).await.json();
    assert_eq!(loans[0]["id"], json!(loan_id));
}

#[tokio::test]
async fn test_share_to_unknown_user() {
    let server = server().await;
    let owner = create_user(&server, "owner").await;
    let loan_id = create_mortgage(&server, owner).await;

    server
        .post("/loan_share")
        .json(&json!({ "source_user_id": owner, "target_user_id": 999, "loan_id": loan_id }))
        .expect_failure()
        .await
        .assert_status_not_found();

    let loans: Value = server.get(&format!("/loans/{owner}")).await.json();
    assert_eq!(loans.as_array().unwrap().len(), 1);
}
