/*
[INPUT]:  Card dispute ids, dispute actions and refund parameters
[OUTPUT]: Card disputes and refund transactions
[POS]:    HTTP layer - card dispute reads and card simulations
[UPDATE]: When adding card endpoints or dispute actions
*/

use super::client::path_segment;
use crate::http::{IncreaseClient, Result};
use crate::types::{CardDispute, SimulateCardDisputeActionParams, SimulateCardRefundParams, Transaction};

impl IncreaseClient {
    /// Retrieve a card dispute
    ///
    /// GET /card_disputes/{card_dispute_id}
    pub async fn retrieve_card_dispute(&self, card_dispute_id: &str) -> Result<CardDispute> {
        let id = path_segment("card_dispute_id", card_dispute_id)?;
        self.get_json(&format!("/card_disputes/{id}"), &[]).await
    }

    /// Move a dispute to `params.status`, as the card network would.
    ///
    /// No client-side transition check happens here; see
    /// [`CardDisputeStatus::can_transition_to`](crate::types::CardDisputeStatus::can_transition_to).
    ///
    /// POST /simulations/card_disputes/{card_dispute_id}/action
    pub async fn simulate_card_dispute_action(
        &self,
        card_dispute_id: &str,
        params: &SimulateCardDisputeActionParams,
    ) -> Result<CardDispute> {
        let id = path_segment("card_dispute_id", card_dispute_id)?;
        self.post_json(&format!("/simulations/card_disputes/{id}/action"), Some(params))
            .await
    }

    /// Simulate refunding a settled card transaction
    ///
    /// POST /simulations/card_refunds
    pub async fn simulate_card_refund(&self, params: &SimulateCardRefundParams) -> Result<Transaction> {
        self.post_json("/simulations/card_refunds", Some(params)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, IncreaseClient};
    use crate::types::{
        CardDisputeActionStatus, CardDisputeStatus, SimulateCardDisputeActionParams,
        SimulateCardRefundParams, TransactionSource,
    };
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> IncreaseClient {
        IncreaseClient::with_config_and_base_url("test_api_key", ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    fn dispute(status: &str, rejection: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "card_dispute_h9sc95nbl1cgltpp7men",
            "acceptance": null,
            "amount": null,
            "created_at": "2020-01-31T23:59:59Z",
            "disputed_transaction_id": "transaction_uyrp7fld2ium70oa7oi",
            "explanation": "Unauthorized recurring purchase",
            "idempotency_key": null,
            "loss": null,
            "rejection": rejection,
            "status": status,
            "win": null,
            "type": "card_dispute"
        })
    }

    #[tokio::test]
    async fn test_retrieve_card_dispute() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/card_disputes/card_dispute_h9sc95nbl1cgltpp7men"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(dispute("pending_reviewing", json!(null))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let dispute = client(&server)
            .retrieve_card_dispute("card_dispute_h9sc95nbl1cgltpp7men")
            .await
            .expect("retrieve_card_dispute failed");

        assert_eq!(dispute.status, CardDisputeStatus::PendingReviewing);
        assert!(!dispute.is_resolved());
        assert!(dispute.status.can_transition_to(&CardDisputeActionStatus::Rejected));
    }

    #[tokio::test]
    async fn test_simulate_card_dispute_action() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/simulations/card_disputes/card_dispute_h9sc95nbl1cgltpp7men/action"))
            .and(body_json(json!({
                "status": "rejected",
                "explanation": "This was a valid recurring transaction"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(dispute(
                "rejected",
                json!({
                    "card_dispute_id": "card_dispute_h9sc95nbl1cgltpp7men",
                    "explanation": "This was a valid recurring transaction",
                    "rejected_at": "2020-01-31T23:59:59Z"
                }),
            )))
            .expect(1)
            .mount(&server)
            .await;

        let params = SimulateCardDisputeActionParams {
            status: CardDisputeActionStatus::Rejected,
            explanation: Some("This was a valid recurring transaction".to_string()),
        };
        let dispute = client(&server)
            .simulate_card_dispute_action("card_dispute_h9sc95nbl1cgltpp7men", &params)
            .await
            .expect("simulate_card_dispute_action failed");

        assert_eq!(dispute.status, CardDisputeStatus::from(params.status.clone()));
        assert!(dispute.is_resolved());
        assert_eq!(
            dispute.rejection.map(|rejection| rejection.explanation).as_deref(),
            Some("This was a valid recurring transaction")
        );
    }

    #[tokio::test]
    async fn test_simulate_card_refund() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/simulations/card_refunds"))
            .and(body_json(json!({ "transaction_id": "transaction_uyrp7fld2ium70oa7oi" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "transaction_refund0001",
                "account_id": "account_in71c4amph0vgo2qllky",
                "amount": 100,
                "created_at": "2020-01-31T23:59:59Z",
                "currency": "USD",
                "description": "Frederick S. Holmes",
                "route_id": "card_oubs0hwk5rn6knuecxg2",
                "route_type": "card",
                "source": {
                    "category": "card_refund",
                    "card_refund": {
                        "id": "card_refund_imgc2xwplh6t4r3gn16e",
                        "amount": 100,
                        "card_payment_id": "card_payment_nd3k2kacrqjli8482ave",
                        "currency": "USD",
                        "merchant_acceptor_id": "5665270011000168",
                        "merchant_category_code": "5734",
                        "merchant_city": "New York",
                        "merchant_country": "US",
                        "merchant_name": "AMAZON.COM",
                        "merchant_state": "NY",
                        "presentment_amount": 100,
                        "presentment_currency": "USD",
                        "transaction_id": "transaction_uyrp7fld2ium70oa7oi",
                        "type": "card_refund"
                    }
                },
                "type": "transaction"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let transaction = client(&server)
            .simulate_card_refund(&SimulateCardRefundParams {
                transaction_id: "transaction_uyrp7fld2ium70oa7oi".to_string(),
            })
            .await
            .expect("simulate_card_refund failed");

        let TransactionSource::CardRefund(refund, _) = &transaction.source else {
            panic!("expected a card refund source");
        };
        assert_eq!(refund.merchant_name.as_deref(), Some("AMAZON.COM"));
        assert!(transaction.is_credit());
    }
}
