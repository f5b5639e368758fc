//! End-to-end API tests
//!
//! Exercises the full HTTP surface against in-memory stores, including the
//! degraded paths (fixture feed, local fallback cheers, failed checkouts) and
//! the live folding path from a confirmed write to a session projection.

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use fund_common::AppConfig;
use fund_core::entities::Cheer;
use fund_core::events::InsertRecord;
use fund_core::projection::{CheerFeed, FundingSession, FundingSnapshot};
use fund_core::value_objects::{PledgeId, AVATAR_PALETTE};
use fund_service::{LiveCheerFeed, LiveFunding};
use integration_tests::{assert_json, assert_status, test_config, TestServer};

/// Test config with a goal small enough for readable percentages
fn goal_config(goal_amount: i64) -> AppConfig {
    let mut config = test_config();
    config.campaign.goal_amount = goal_amount;
    config
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn health_check_returns_healthy() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server.get("/health").await?;
    let body: Value = assert_json(response, StatusCode::OK).await?;
    assert_eq!(body["status"], "healthy");

    Ok(())
}

#[tokio::test]
async fn readiness_reports_ready_without_external_stores() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server.get("/health/ready").await?;
    let body: Value = assert_json(response, StatusCode::OK).await?;
    assert_eq!(body["status"], "ready");

    Ok(())
}

// ============================================================================
// Funding gauge
// ============================================================================

#[tokio::test]
async fn funding_starts_at_zero_with_no_cursor() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server.get("/api/v1/funding").await?;
    let body: Value = assert_json(response, StatusCode::OK).await?;

    assert_eq!(body["total"], 0);
    assert_eq!(body["percent"], 0);
    assert_eq!(body["gauge_ratio"], 0);
    assert!(body.get("cursor").is_none());

    Ok(())
}

#[tokio::test]
async fn funding_sums_seeded_pledges() -> Result<()> {
    let server = TestServer::start_with_config(goal_config(1_000_000)).await?;
    server.pledges.seed(170_000, "VIP Package");
    server.pledges.seed(300_000, "Angel Investor");

    let response = server.get("/api/v1/funding").await?;
    let body: Value = assert_json(response, StatusCode::OK).await?;

    assert_eq!(body["total"], 470_000);
    assert_eq!(body["goal"], 1_000_000);
    assert_eq!(body["percent"], 47);
    assert_eq!(body["gauge_ratio"], 47);
    assert_eq!(body["cursor"], 2);

    Ok(())
}

#[tokio::test]
async fn funding_serves_zero_baseline_when_store_is_down() -> Result<()> {
    let server = TestServer::start().await?;
    server.pledges.seed(50_000, "Early Bird Ticket");
    server.pledges.set_fail_reads(true);

    let response = server.get("/api/v1/funding").await?;
    let body: Value = assert_json(response, StatusCode::OK).await?;

    assert_eq!(body["total"], 0);
    assert!(body.get("cursor").is_none());

    Ok(())
}

// ============================================================================
// Cheer wall
// ============================================================================

#[tokio::test]
async fn cheers_post_then_read_newest_first() -> Result<()> {
    let server = TestServer::start().await?;

    let first = server
        .post("/api/v1/cheers", &json!({"author": "Hana", "message": "Go team!"}))
        .await?;
    let first: Value = assert_json(first, StatusCode::CREATED).await?;
    assert_eq!(first["author"], "Hana");
    assert_eq!(first["initials"], "HA");
    assert_eq!(first["is_local"], false);
    assert!(first["id"].as_i64().unwrap() > 0);

    let second = server
        .post(
            "/api/v1/cheers",
            &json!({"author": "Minho", "message": "Counting the days"}),
        )
        .await?;
    assert_status(second, StatusCode::CREATED).await?;

    let response = server.get("/api/v1/cheers").await?;
    let feed: Vec<Value> = assert_json(response, StatusCode::OK).await?;
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0]["author"], "Minho");
    assert_eq!(feed[1]["author"], "Hana");

    Ok(())
}

#[tokio::test]
async fn cheer_post_publishes_an_insert_event() -> Result<()> {
    let server = TestServer::start().await?;
    let mut events = server.subscribe_events();

    let response = server
        .post("/api/v1/cheers", &json!({"author": "Hana", "message": "Go!"}))
        .await?;
    assert_status(response, StatusCode::CREATED).await?;

    match events.recv().await? {
        InsertRecord::Cheer(cheer) => assert_eq!(cheer.author, "Hana"),
        other => panic!("unexpected event: {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn cheer_validation_failure_returns_bad_request() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .post("/api/v1/cheers", &json!({"author": "", "message": "hi"}))
        .await?;
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    Ok(())
}

#[tokio::test]
async fn cheer_write_failure_degrades_to_local_record() -> Result<()> {
    let server = TestServer::start().await?;
    server.cheers.set_fail_writes(true);

    let response = server
        .post("/api/v1/cheers", &json!({"author": "Hana", "message": "Go!"}))
        .await?;
    let body: Value = assert_json(response, StatusCode::CREATED).await?;

    assert_eq!(body["is_local"], true);
    assert!(body["id"].as_i64().unwrap() < 0);

    Ok(())
}

#[tokio::test]
async fn cheer_read_failure_serves_fixture_feed() -> Result<()> {
    let server = TestServer::start().await?;
    server.cheers.set_fail_reads(true);

    let response = server.get("/api/v1/cheers").await?;
    let feed: Vec<Value> = assert_json(response, StatusCode::OK).await?;

    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0]["author"], "Ji-Soo Park");
    assert_eq!(feed[0]["initials"], "JS");
    assert_eq!(feed[1]["author"], "Min-Kyung Lee");
    assert!(feed.iter().all(|c| c["is_local"] == true));

    Ok(())
}

// ============================================================================
// Checkout
// ============================================================================

#[tokio::test]
async fn card_pledge_succeeds_and_moves_the_gauge() -> Result<()> {
    let server = TestServer::start_with_config(goal_config(1_000_000)).await?;
    let mut events = server.subscribe_events();

    let response = server
        .post(
            "/api/v1/pledges",
            &json!({"tier_id": 1, "mobile": "01012345678"}),
        )
        .await?;
    let body: Value = assert_json(response, StatusCode::CREATED).await?;

    assert_eq!(body["status"], "succeeded");
    assert_eq!(body["tier_name"], "Early Bird Ticket");
    assert_eq!(body["amount"], 50_000);
    assert!(body["payment_id"].as_str().unwrap().starts_with("card-"));
    assert!(body.get("failure").is_none());

    match events.recv().await? {
        InsertRecord::Pledge(pledge) => assert_eq!(pledge.amount, 50_000),
        other => panic!("unexpected event: {other:?}"),
    }

    let funding = server.get("/api/v1/funding").await?;
    let funding: Value = assert_json(funding, StatusCode::OK).await?;
    assert_eq!(funding["total"], 50_000);

    Ok(())
}

#[tokio::test]
async fn unknown_tier_is_rejected() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .post(
            "/api/v1/pledges",
            &json!({"tier_id": 9, "mobile": "01012345678"}),
        )
        .await?;
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await?;
    assert_eq!(body["error"]["code"], "UNKNOWN_TIER");

    Ok(())
}

#[tokio::test]
async fn short_mobile_number_is_rejected() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .post("/api/v1/pledges", &json!({"tier_id": 1, "mobile": "123"}))
        .await?;
    assert_status(response, StatusCode::BAD_REQUEST).await?;

    Ok(())
}

#[tokio::test]
async fn failed_write_lands_in_explicit_failed_state() -> Result<()> {
    let server = TestServer::start().await?;
    server.pledges.set_fail_writes(true);

    let response = server
        .post(
            "/api/v1/pledges",
            &json!({"tier_id": 3, "mobile": "01012345678"}),
        )
        .await?;
    let body: Value = assert_json(response, StatusCode::CREATED).await?;

    assert_eq!(body["status"], "failed");
    assert!(body["failure"].as_str().is_some());

    // Nothing was recorded
    server.pledges.set_fail_writes(false);
    let funding = server.get("/api/v1/funding").await?;
    let funding: Value = assert_json(funding, StatusCode::OK).await?;
    assert_eq!(funding["total"], 0);

    Ok(())
}

#[tokio::test]
async fn bank_transfer_parks_until_confirmed() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .post(
            "/api/v1/pledges",
            &json!({"tier_id": 2, "mobile": "01012345678", "method": "bank_transfer"}),
        )
        .await?;
    let body: Value = assert_json(response, StatusCode::CREATED).await?;

    assert_eq!(body["status"], "awaiting_bank_confirmation");
    let payment_id = body["payment_id"].as_str().unwrap().to_string();
    assert!(payment_id.starts_with("bank-"));

    // Nothing recorded until the transfer is confirmed
    let funding = server.get("/api/v1/funding").await?;
    let funding: Value = assert_json(funding, StatusCode::OK).await?;
    assert_eq!(funding["total"], 0);

    let confirm = server
        .post(&format!("/api/v1/pledges/{payment_id}/confirm"), &json!({}))
        .await?;
    let confirmed: Value = assert_json(confirm, StatusCode::OK).await?;
    assert_eq!(confirmed["status"], "succeeded");
    assert_eq!(confirmed["amount"], 120_000);

    let funding = server.get("/api/v1/funding").await?;
    let funding: Value = assert_json(funding, StatusCode::OK).await?;
    assert_eq!(funding["total"], 120_000);

    // A transfer can only be confirmed once
    let again = server
        .post(&format!("/api/v1/pledges/{payment_id}/confirm"), &json!({}))
        .await?;
    assert_status(again, StatusCode::NOT_FOUND).await?;

    Ok(())
}

#[tokio::test]
async fn confirming_an_unknown_transfer_is_not_found() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .post("/api/v1/pledges/bank-123456/confirm", &json!({}))
        .await?;
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await?;
    assert_eq!(body["error"]["code"], "UNKNOWN_PLEDGE");

    Ok(())
}

// ============================================================================
// Theme preference
// ============================================================================

#[tokio::test]
async fn theme_defaults_then_persists_updates() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server.get("/api/v1/theme").await?;
    let body: Value = assert_json(response, StatusCode::OK).await?;
    assert_eq!(body["theme"], "light");

    let response = server.put("/api/v1/theme", &json!({"theme": "dark"})).await?;
    let body: Value = assert_json(response, StatusCode::OK).await?;
    assert_eq!(body["theme"], "dark");

    let response = server.get("/api/v1/theme").await?;
    let body: Value = assert_json(response, StatusCode::OK).await?;
    assert_eq!(body["theme"], "dark");

    Ok(())
}

#[tokio::test]
async fn unknown_theme_is_rejected() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .put("/api/v1/theme", &json!({"theme": "sepia"}))
        .await?;
    assert_status(response, StatusCode::BAD_REQUEST).await?;

    Ok(())
}

// ============================================================================
// Live folding
// ============================================================================

#[tokio::test]
async fn live_session_folds_pledges_submitted_over_http() -> Result<()> {
    let server = TestServer::start_with_config(goal_config(1_000_000)).await?;

    // Seed a session from the served baseline, then attach it to the same
    // event stream the server publishes into
    let baseline = server.get("/api/v1/funding").await?;
    let baseline: Value = assert_json(baseline, StatusCode::OK).await?;
    let snapshot = FundingSnapshot {
        total: baseline["total"].as_i64().unwrap(),
        cursor: baseline["cursor"].as_i64().map(PledgeId::new),
    };
    let live = LiveFunding::new(FundingSession::new(snapshot, 1_000_000));

    let events = server.subscribe_events();
    let runner = {
        let live = live.clone();
        tokio::spawn(async move { live.run(events).await })
    };

    let response = server
        .post(
            "/api/v1/pledges",
            &json!({"tier_id": 2, "mobile": "01012345678"}),
        )
        .await?;
    assert_status(response, StatusCode::CREATED).await?;

    let response = server
        .post(
            "/api/v1/pledges",
            &json!({"tier_id": 3, "mobile": "01098765432"}),
        )
        .await?;
    assert_status(response, StatusCode::CREATED).await?;

    // Both inserts reach the session through the broadcast
    tokio::time::timeout(std::time::Duration::from_secs(2), async {
        while live.total().await < 420_000 {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
    })
    .await?;

    assert_eq!(live.total().await, 420_000);
    let snapshot = live.snapshot().await;
    assert_eq!(snapshot.percent, 42);

    runner.abort();
    Ok(())
}

#[tokio::test]
async fn live_feed_suppresses_echo_of_own_cheer_submitted_over_http() -> Result<()> {
    let server = TestServer::start().await?;

    let live = LiveCheerFeed::new(CheerFeed::from_store(Vec::new()));
    let events = server.subscribe_events();
    let runner = {
        let live = live.clone();
        tokio::spawn(async move { live.run(events).await })
    };

    // Optimistic prepend, then submit the same cheer with its correlation id
    let composed = Cheer::compose("Hana".to_string(), "Go team!".to_string(), AVATAR_PALETTE[0]);
    let client_ref = composed.client_ref;
    live.push_local(composed).await;

    let response = server
        .post(
            "/api/v1/cheers",
            &json!({"author": "Hana", "message": "Go team!", "client_ref": client_ref}),
        )
        .await?;
    assert_status(response, StatusCode::CREATED).await?;

    // A second, unrelated cheer must come through
    let response = server
        .post(
            "/api/v1/cheers",
            &json!({"author": "Minho", "message": "Counting the days"}),
        )
        .await?;
    assert_status(response, StatusCode::CREATED).await?;

    tokio::time::timeout(std::time::Duration::from_secs(2), async {
        while live.cheers().await.len() < 2 {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
    })
    .await?;

    // The echo of our own submission was reconciled, not double-prepended
    let feed = live.cheers().await;
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].author, "Minho");
    assert_eq!(feed[1].author, "Hana");
    assert_eq!(feed.iter().filter(|c| c.author == "Hana").count(), 1);

    runner.abort();
    Ok(())
}
