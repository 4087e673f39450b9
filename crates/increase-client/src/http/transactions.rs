/*
[INPUT]:  Transaction ids and list filters
[OUTPUT]: Transactions, declined transactions, pages and item streams
[POS]:    HTTP layer - ledger read endpoints plus interest payment simulation
[UPDATE]: When adding ledger endpoints or list filters
*/

use futures_util::stream::BoxStream;

use super::client::path_segment;
use super::pagination::paginate;
use crate::http::{IncreaseClient, Result};
use crate::types::{
    DeclinedTransaction, ListDeclinedTransactionsParams, ListTransactionsParams, Page,
    SimulateInterestPaymentParams, Transaction,
};

impl IncreaseClient {
    /// Retrieve a transaction
    ///
    /// GET /transactions/{transaction_id}
    pub async fn retrieve_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        let id = path_segment("transaction_id", transaction_id)?;
        self.get_json(&format!("/transactions/{id}"), &[]).await
    }

    /// List one page of transactions
    ///
    /// GET /transactions
    pub async fn list_transactions(&self, params: &ListTransactionsParams) -> Result<Page<Transaction>> {
        self.get_json("/transactions", &params.to_query()).await
    }

    /// Every transaction matching `params`, across pages
    pub fn transactions_stream(&self, params: ListTransactionsParams) -> BoxStream<'_, Result<Transaction>> {
        paginate(params, move |page| async move { self.list_transactions(&page).await })
    }

    /// Retrieve a declined transaction
    ///
    /// GET /declined_transactions/{declined_transaction_id}
    pub async fn retrieve_declined_transaction(
        &self,
        declined_transaction_id: &str,
    ) -> Result<DeclinedTransaction> {
        let id = path_segment("declined_transaction_id", declined_transaction_id)?;
        self.get_json(&format!("/declined_transactions/{id}"), &[]).await
    }

    /// List one page of declined transactions
    ///
    /// GET /declined_transactions
    pub async fn list_declined_transactions(
        &self,
        params: &ListDeclinedTransactionsParams,
    ) -> Result<Page<DeclinedTransaction>> {
        self.get_json("/declined_transactions", &params.to_query()).await
    }

    pub fn declined_transactions_stream(
        &self,
        params: ListDeclinedTransactionsParams,
    ) -> BoxStream<'_, Result<DeclinedTransaction>> {
        paginate(params, move |page| async move {
            self.list_declined_transactions(&page).await
        })
    }

    /// Simulate an interest payment to an account
    ///
    /// POST /simulations/interest_payments
    pub async fn simulate_interest_payment(
        &self,
        params: &SimulateInterestPaymentParams,
    ) -> Result<Transaction> {
        self.post_json("/simulations/interest_payments", Some(params)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, IncreaseClient, IncreaseError};
    use crate::types::{
        DeclinedTransactionSource, Extensible, ListTransactionsParams, SimulateInterestPaymentParams,
        TransactionSource, TransactionSourceCategory,
    };
    use futures_util::TryStreamExt;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> IncreaseClient {
        IncreaseClient::with_config_and_base_url("test_api_key", ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    fn transaction(id: &str, amount: i64) -> serde_json::Value {
        json!({
            "id": id,
            "account_id": "account_in71c4amph0vgo2qllky",
            "amount": amount,
            "created_at": "2020-01-31T23:59:59Z",
            "currency": "USD",
            "description": "INVOICE 2468",
            "route_id": "account_number_v18nkfqm6afpsrvy82b2",
            "route_type": "account_number",
            "source": {
                "category": "interest_payment",
                "interest_payment": {
                    "accrued_on_account_id": "account_in71c4amph0vgo2qllky",
                    "amount": amount,
                    "currency": "USD",
                    "period_end": "2020-01-31T23:59:59Z",
                    "period_start": "2020-01-31T23:59:59Z"
                }
            },
            "type": "transaction"
        })
    }

    #[tokio::test]
    async fn test_retrieve_transaction() {
        let server = MockServer::start().await;
        let mut body = transaction("transaction_uyrp7fld2ium70oa7oi", 1750);
        body["pending_transaction_id"] = json!("pending_transaction_k1sfetcau2qbvjbzgju4");

        Mock::given(method("GET"))
            .and(path("/transactions/transaction_uyrp7fld2ium70oa7oi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let transaction = client(&server)
            .retrieve_transaction("transaction_uyrp7fld2ium70oa7oi")
            .await
            .expect("retrieve_transaction failed");

        assert_eq!(transaction.amount, 1750);
        assert_eq!(transaction.category(), TransactionSourceCategory::InterestPayment);
        assert!(matches!(transaction.source, TransactionSource::InterestPayment(..)));
        assert_eq!(
            transaction
                .extra_field::<String>("pending_transaction_id")
                .and_then(|value| value.ok())
                .as_deref(),
            Some("pending_transaction_k1sfetcau2qbvjbzgju4")
        );
    }

    #[tokio::test]
    async fn test_retrieve_transaction_rejects_bad_id() {
        let server = MockServer::start().await;
        let err = client(&server)
            .retrieve_transaction("../accounts")
            .await
            .expect_err("path traversal must be rejected");

        assert!(matches!(err, IncreaseError::Config(_)));
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_list_transactions_sends_filters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/transactions"))
            .and(query_param("account_id", "account_in71c4amph0vgo2qllky"))
            .and(query_param("category.in", "interest_payment"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [transaction("transaction_1", 10)],
                "next_cursor": "v57w5d"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = ListTransactionsParams {
            category_in: vec![TransactionSourceCategory::InterestPayment],
            limit: Some(1),
            ..ListTransactionsParams::for_account("account_in71c4amph0vgo2qllky")
        };
        let page = client(&server).list_transactions(&params).await.expect("list failed");

        assert_eq!(page.data.len(), 1);
        assert!(page.has_next_page());
        assert_eq!(page.next_cursor.as_deref(), Some("v57w5d"));
    }

    #[tokio::test]
    async fn test_transactions_stream_walks_pages() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/transactions"))
            .and(query_param("cursor", "page_2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [transaction("transaction_3", 30)],
                "next_cursor": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/transactions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [transaction("transaction_1", 10), transaction("transaction_2", 20)],
                "next_cursor": "page_2"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);
        let ids: Vec<String> = client
            .transactions_stream(ListTransactionsParams::default())
            .map_ok(|transaction| transaction.id)
            .try_collect()
            .await
            .expect("stream failed");

        assert_eq!(ids, vec!["transaction_1", "transaction_2", "transaction_3"]);
    }

    #[tokio::test]
    async fn test_retrieve_declined_transaction() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/declined_transactions/declined_transaction_17jbn0yyhvkt4v4ooym8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "declined_transaction_17jbn0yyhvkt4v4ooym8",
                "account_id": "account_in71c4amph0vgo2qllky",
                "amount": 1750,
                "created_at": "2020-01-31T23:59:59Z",
                "currency": "USD",
                "description": "INVOICE 2468",
                "route_id": "account_number_v18nkfqm6afpsrvy82b2",
                "route_type": "account_number",
                "source": {
                    "category": "brand_new_decline",
                    "brand_new_decline": { "code": "X1" }
                },
                "type": "declined_transaction"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let declined = client(&server)
            .retrieve_declined_transaction("declined_transaction_17jbn0yyhvkt4v4ooym8")
            .await
            .expect("retrieve_declined_transaction failed");

        let DeclinedTransactionSource::Unrecognized { category, raw } = &declined.source else {
            panic!("expected an unrecognized source, got {:?}", declined.source);
        };
        assert_eq!(category, "brand_new_decline");
        assert_eq!(raw["brand_new_decline"]["code"], json!("X1"));
    }

    #[tokio::test]
    async fn test_simulate_interest_payment() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/simulations/interest_payments"))
            .and(body_json(json!({
                "account_id": "account_in71c4amph0vgo2qllky",
                "amount": 1000
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(transaction("transaction_interest", 1000)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let params = SimulateInterestPaymentParams {
            account_id: "account_in71c4amph0vgo2qllky".to_string(),
            amount: 1000,
            ..Default::default()
        };
        let transaction = client(&server)
            .simulate_interest_payment(&params)
            .await
            .expect("simulate_interest_payment failed");

        assert!(transaction.is_credit());
    }
}
