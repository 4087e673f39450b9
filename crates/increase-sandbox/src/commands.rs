/*
[INPUT]:  Parsed subcommand and a configured client
[OUTPUT]: JSON value of the API object each subcommand produced
[POS]:    Command layer - maps CLI subcommands onto client calls
[UPDATE]: When adding simulation subcommands
*/

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use futures_util::TryStreamExt;
use increase_client::{
    AchReturnReason, CardDisputeActionStatus, CheckDepositReturnReason,
    DeclinedTransactionSourceCategory, IncreaseClient, ListParams, RtpRejectReason,
    SimulateAchTransferReturnParams, SimulateCardDisputeActionParams, SimulateCardRefundParams,
    SimulateCheckDepositReturnParams, SimulateDocumentParams, SimulateInboundAchTransferParams,
    SimulateInboundRealTimePaymentsTransferParams, SimulateInboundWireTransferParams,
    SimulateInterestPaymentParams, SimulateRealTimePaymentsTransferCompletionParams,
    TransactionSourceCategory,
};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate configuration without touching the network
    CheckConfig,
    /// Simulate an inbound ACH transfer (negative amount for a debit)
    InboundAch {
        account_number_id: String,
        #[arg(allow_hyphen_values = true)]
        amount: i64,
        #[arg(long)]
        company_name: Option<String>,
        #[arg(long)]
        company_entry_description: Option<String>,
        #[arg(long)]
        receiver_name: Option<String>,
    },
    /// Return an ACH transfer as the receiving bank
    AchReturn {
        ach_transfer_id: String,
        #[arg(long)]
        reason: Option<AchReturnReason>,
    },
    /// Submit a pending ACH transfer to the Federal Reserve
    AchSubmit { ach_transfer_id: String },
    /// Complete a pending account transfer
    AccountTransferComplete { account_transfer_id: String },
    /// Mail a check transfer
    CheckMail { check_transfer_id: String },
    /// Reject a check deposit
    CheckDepositReject { check_deposit_id: String },
    /// Return a check deposit
    CheckDepositReturn {
        check_deposit_id: String,
        #[arg(long)]
        reason: Option<CheckDepositReturnReason>,
    },
    /// Submit a check deposit to the Federal Reserve
    CheckDepositSubmit { check_deposit_id: String },
    /// Simulate an inbound wire transfer
    InboundWire {
        account_number_id: String,
        amount: i64,
        #[arg(long)]
        originator_name: Option<String>,
        #[arg(long)]
        beneficiary_reference: Option<String>,
    },
    /// Simulate an inbound real-time payments transfer
    InboundRtp {
        account_number_id: String,
        amount: i64,
        #[arg(long)]
        debtor_name: Option<String>,
        #[arg(long)]
        remittance_information: Option<String>,
    },
    /// Complete a submitted real-time payments transfer
    RtpComplete {
        real_time_payments_transfer_id: String,
        /// Reject with this reason instead of completing
        #[arg(long)]
        reject_reason: Option<RtpRejectReason>,
    },
    /// Move a card dispute to a new status
    DisputeAction {
        card_dispute_id: String,
        status: CardDisputeActionStatus,
        #[arg(long)]
        explanation: Option<String>,
    },
    /// Refund a settled card transaction
    CardRefund { transaction_id: String },
    /// Generate an account verification letter
    Document { account_id: String },
    /// Pay interest into an account
    InterestPayment {
        account_id: String,
        amount: i64,
        #[arg(long)]
        period_start: Option<DateTime<Utc>>,
        #[arg(long)]
        period_end: Option<DateTime<Utc>>,
    },
    /// List transactions
    Transactions(ListArgs),
    /// List declined transactions
    Declined(ListArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[arg(long)]
    pub account_id: Option<String>,
    /// Comma separated source categories
    #[arg(long, value_delimiter = ',')]
    pub category: Vec<String>,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub cursor: Option<String>,
    /// Follow cursors and print every matching row
    #[arg(long)]
    pub all: bool,
}

impl ListArgs {
    /// Categories are parsed strictly so typos fail before any request.
    fn params<C>(&self) -> Result<ListParams<C>>
    where
        C: FromStr,
        C::Err: std::error::Error + Send + Sync + 'static,
    {
        let category_in = self
            .category
            .iter()
            .map(|raw| raw.trim().parse::<C>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("invalid --category")?;

        Ok(ListParams {
            account_id: self.account_id.clone(),
            category_in,
            limit: self.limit,
            cursor: self.cursor.clone(),
            ..ListParams::default()
        })
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("encode response")
}

/// Run one API subcommand. `CheckConfig` is handled by the caller.
pub async fn execute(client: &IncreaseClient, command: Command) -> Result<Value> {
    match command {
        Command::CheckConfig => bail!("check-config does not call the API"),
        Command::InboundAch {
            account_number_id,
            amount,
            company_name,
            company_entry_description,
            receiver_name,
        } => {
            let params = SimulateInboundAchTransferParams {
                company_name,
                company_entry_description,
                receiver_name,
                ..SimulateInboundAchTransferParams::new(account_number_id, amount)
            };
            let result = client
                .simulate_inbound_ach_transfer(&params)
                .await
                .context("simulate inbound ACH transfer")?;
            if result.is_declined() {
                warn!("inbound ACH transfer was declined");
            }
            to_json(&result)
        }
        Command::AchReturn { ach_transfer_id, reason } => {
            let transfer = client
                .simulate_ach_transfer_return(&ach_transfer_id, &SimulateAchTransferReturnParams { reason })
                .await
                .context("simulate ACH transfer return")?;
            to_json(&transfer)
        }
        Command::AchSubmit { ach_transfer_id } => {
            let transfer = client
                .simulate_ach_transfer_submission(&ach_transfer_id)
                .await
                .context("simulate ACH transfer submission")?;
            to_json(&transfer)
        }
        Command::AccountTransferComplete { account_transfer_id } => {
            let transfer = client
                .simulate_account_transfer_completion(&account_transfer_id)
                .await
                .context("simulate account transfer completion")?;
            to_json(&transfer)
        }
        Command::CheckMail { check_transfer_id } => {
            let transfer = client
                .simulate_check_transfer_mailing(&check_transfer_id)
                .await
                .context("simulate check transfer mailing")?;
            to_json(&transfer)
        }
        Command::CheckDepositReject { check_deposit_id } => {
            let deposit = client
                .simulate_check_deposit_rejection(&check_deposit_id)
                .await
                .context("simulate check deposit rejection")?;
            to_json(&deposit)
        }
        Command::CheckDepositReturn { check_deposit_id, reason } => {
            let deposit = client
                .simulate_check_deposit_return(&check_deposit_id, &SimulateCheckDepositReturnParams { reason })
                .await
                .context("simulate check deposit return")?;
            to_json(&deposit)
        }
        Command::CheckDepositSubmit { check_deposit_id } => {
            let deposit = client
                .simulate_check_deposit_submission(&check_deposit_id)
                .await
                .context("simulate check deposit submission")?;
            to_json(&deposit)
        }
        Command::InboundWire {
            account_number_id,
            amount,
            originator_name,
            beneficiary_reference,
        } => {
            let params = SimulateInboundWireTransferParams {
                originator_name,
                beneficiary_reference,
                ..SimulateInboundWireTransferParams::new(account_number_id, amount)
            };
            let result = client
                .simulate_inbound_wire_transfer(&params)
                .await
                .context("simulate inbound wire transfer")?;
            to_json(&result)
        }
        Command::InboundRtp {
            account_number_id,
            amount,
            debtor_name,
            remittance_information,
        } => {
            let params = SimulateInboundRealTimePaymentsTransferParams {
                debtor_name,
                remittance_information,
                ..SimulateInboundRealTimePaymentsTransferParams::new(account_number_id, amount)
            };
            let result = client
                .simulate_inbound_real_time_payments_transfer(&params)
                .await
                .context("simulate inbound real-time payments transfer")?;
            to_json(&result)
        }
        Command::RtpComplete {
            real_time_payments_transfer_id,
            reject_reason,
        } => {
            let params = match reject_reason {
                Some(reason) => SimulateRealTimePaymentsTransferCompletionParams::rejected(reason),
                None => SimulateRealTimePaymentsTransferCompletionParams::default(),
            };
            let transfer = client
                .simulate_real_time_payments_transfer_completion(&real_time_payments_transfer_id, &params)
                .await
                .context("simulate real-time payments transfer completion")?;
            to_json(&transfer)
        }
        Command::DisputeAction {
            card_dispute_id,
            status,
            explanation,
        } => dispute_action(client, &card_dispute_id, status, explanation).await,
        Command::CardRefund { transaction_id } => {
            let transaction = client
                .simulate_card_refund(&SimulateCardRefundParams { transaction_id })
                .await
                .context("simulate card refund")?;
            to_json(&transaction)
        }
        Command::Document { account_id } => {
            let document = client
                .simulate_document(&SimulateDocumentParams { account_id })
                .await
                .context("simulate document")?;
            to_json(&document)
        }
        Command::InterestPayment {
            account_id,
            amount,
            period_start,
            period_end,
        } => {
            let params = SimulateInterestPaymentParams {
                account_id,
                amount,
                period_start,
                period_end,
            };
            let transaction = client
                .simulate_interest_payment(&params)
                .await
                .context("simulate interest payment")?;
            to_json(&transaction)
        }
        Command::Transactions(args) => {
            let params = args.params::<TransactionSourceCategory>()?;
            if args.all {
                let rows: Vec<_> = client
                    .transactions_stream(params)
                    .try_collect()
                    .await
                    .context("list transactions")?;
                info!(count = rows.len(), "listed transactions");
                to_json(&rows)
            } else {
                let page = client.list_transactions(&params).await.context("list transactions")?;
                to_json(&page)
            }
        }
        Command::Declined(args) => {
            let params = args.params::<DeclinedTransactionSourceCategory>()?;
            if args.all {
                let rows: Vec<_> = client
                    .declined_transactions_stream(params)
                    .try_collect()
                    .await
                    .context("list declined transactions")?;
                info!(count = rows.len(), "listed declined transactions");
                to_json(&rows)
            } else {
                let page = client
                    .list_declined_transactions(&params)
                    .await
                    .context("list declined transactions")?;
                to_json(&page)
            }
        }
    }
}

/// Check the dispute's current status locally before asking the API to move it.
async fn dispute_action(
    client: &IncreaseClient,
    card_dispute_id: &str,
    status: CardDisputeActionStatus,
    explanation: Option<String>,
) -> Result<Value> {
    let dispute = client
        .retrieve_card_dispute(card_dispute_id)
        .await
        .context("retrieve card dispute")?;

    if !dispute.status.can_transition_to(&status) {
        bail!(
            "card dispute {} cannot move from {} to {}",
            dispute.id,
            dispute.status,
            status
        );
    }

    info!(
        card_dispute_id,
        from = %dispute.status,
        to = %status,
        "simulating card dispute action"
    );
    let params = SimulateCardDisputeActionParams { status, explanation };
    let dispute = client
        .simulate_card_dispute_action(card_dispute_id, &params)
        .await
        .context("simulate card dispute action")?;
    to_json(&dispute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use increase_client::ClientConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> IncreaseClient {
        IncreaseClient::with_config_and_base_url("test_api_key", ClientConfig::sandbox(), &server.uri())
            .expect("client init")
    }

    fn dispute(status: &str) -> Value {
        json!({
            "id": "card_dispute_h9sc95nbl1cgltpp7men",
            "acceptance": null,
            "amount": null,
            "created_at": "2020-01-31T23:59:59Z",
            "disputed_transaction_id": "transaction_uyrp7fld2ium70oa7oi",
            "explanation": "Unauthorized recurring purchase",
            "idempotency_key": null,
            "loss": null,
            "rejection": null,
            "status": status,
            "win": null,
            "type": "card_dispute"
        })
    }

    #[tokio::test]
    async fn test_dispute_action_refuses_invalid_transition() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/card_disputes/card_dispute_h9sc95nbl1cgltpp7men"))
            .respond_with(ResponseTemplate::new(200).set_body_json(dispute("won")))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let command = Command::DisputeAction {
            card_dispute_id: "card_dispute_h9sc95nbl1cgltpp7men".to_string(),
            status: CardDisputeActionStatus::Accepted,
            explanation: None,
        };
        let err = execute(&client(&server), command).await.unwrap_err();
        assert!(err.to_string().contains("cannot move from won to accepted"));
    }

    #[tokio::test]
    async fn test_dispute_action_posts_valid_transition() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/card_disputes/card_dispute_h9sc95nbl1cgltpp7men"))
            .respond_with(ResponseTemplate::new(200).set_body_json(dispute("accepted")))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/simulations/card_disputes/card_dispute_h9sc95nbl1cgltpp7men/action"))
            .respond_with(ResponseTemplate::new(200).set_body_json(dispute("won")))
            .expect(1)
            .mount(&server)
            .await;

        let command = Command::DisputeAction {
            card_dispute_id: "card_dispute_h9sc95nbl1cgltpp7men".to_string(),
            status: CardDisputeActionStatus::Won,
            explanation: None,
        };
        let output = execute(&client(&server), command).await.unwrap();
        assert_eq!(output["status"], json!("won"));
    }

    #[tokio::test]
    async fn test_transactions_page_output() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/transactions"))
            .and(query_param("category.in", "fee_payment,interest_payment"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [],
                "next_cursor": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let command = Command::Transactions(ListArgs {
            category: vec!["fee_payment".to_string(), "interest_payment".to_string()],
            ..ListArgs::default()
        });
        let output = execute(&client(&server), command).await.unwrap();
        assert_eq!(output, json!({ "data": [], "next_cursor": null }));
    }

    #[tokio::test]
    async fn test_unknown_category_fails_before_io() {
        let server = MockServer::start().await;

        let command = Command::Declined(ListArgs {
            category: vec!["card_decline".to_string(), "card_declin".to_string()],
            ..ListArgs::default()
        });
        let err = execute(&client(&server), command).await.unwrap_err();
        assert!(format!("{err:#}").contains("card_declin"));
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_check_config_is_not_an_api_call() {
        let server = MockServer::start().await;
        assert!(execute(&client(&server), Command::CheckConfig).await.is_err());
    }
}
