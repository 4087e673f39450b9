/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for increase-client tests

#![allow(dead_code)]

use increase_client::{ClientConfig, IncreaseClient};
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test_sandbox_api_key";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with millisecond backoff
pub fn test_client(server: &MockServer) -> IncreaseClient {
    test_client_with_retries(server, 2)
}

pub fn test_client_with_retries(server: &MockServer, max_retries: u32) -> IncreaseClient {
    let config = ClientConfig {
        max_retries,
        initial_retry_delay: Duration::from_millis(5),
        ..ClientConfig::sandbox()
    };
    IncreaseClient::with_config_and_base_url(TEST_API_KEY, config, &server.uri())
        .expect("client init")
}

/// A complete card settlement transaction as the API returns it
pub fn card_settlement_transaction(id: &str) -> Value {
    json!({
        "id": id,
        "account_id": "account_in71c4amph0vgo2qllky",
        "amount": -1750,
        "created_at": "2020-01-31T23:59:59Z",
        "currency": "USD",
        "description": "Frederick S. Holmes",
        "route_id": "card_oubs0hwk5rn6knuecxg2",
        "route_type": "card",
        "source": {
            "category": "card_settlement",
            "card_settlement": {
                "id": "card_settlement_khv5kfeu0vndj291omg6",
                "amount": 1750,
                "card_authorization": null,
                "card_payment_id": "card_payment_nd3k2kacrqjli8482ave",
                "currency": "USD",
                "interchange": null,
                "merchant_acceptor_id": "5665270011000168",
                "merchant_category_code": "5734",
                "merchant_city": "New York",
                "merchant_country": "US",
                "merchant_name": "AMAZON.COM",
                "merchant_state": "NY",
                "pending_transaction_id": null,
                "presentment_amount": 1750,
                "presentment_currency": "USD",
                "transaction_id": id,
                "type": "card_settlement"
            }
        },
        "type": "transaction"
    })
}

/// A card decline as the API returns it
pub fn card_decline(id: &str, reason: &str) -> Value {
    json!({
        "id": id,
        "account_id": "account_in71c4amph0vgo2qllky",
        "amount": 1750,
        "created_at": "2020-01-31T23:59:59Z",
        "currency": "USD",
        "description": "Frederick S. Holmes",
        "route_id": "card_oubs0hwk5rn6knuecxg2",
        "route_type": "card",
        "source": {
            "category": "card_decline",
            "card_decline": {
                "id": "card_decline_bx3o8zd7glq8yvtwg25v",
                "actioner": "increase",
                "amount": 1750,
                "card_payment_id": "card_payment_nd3k2kacrqjli8482ave",
                "currency": "USD",
                "declined_transaction_id": id,
                "digital_wallet_token_id": null,
                "merchant_acceptor_id": "5665270011000168",
                "merchant_category_code": "5734",
                "merchant_city": "New York",
                "merchant_country": "US",
                "merchant_descriptor": "AMAZON.COM",
                "merchant_state": "NY",
                "physical_card_id": null,
                "presentment_amount": 1750,
                "presentment_currency": "USD",
                "processing_category": "purchase",
                "reason": reason,
                "real_time_decision_id": null
            }
        },
        "type": "declined_transaction"
    })
}

pub fn page(data: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({ "data": data, "next_cursor": next_cursor })
}
