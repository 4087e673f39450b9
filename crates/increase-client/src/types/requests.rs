/*
[INPUT]:  Caller-supplied simulation and list parameters
[OUTPUT]: Request bodies and query pairs in Increase wire format
[POS]:    Data layer - type definitions for API requests
[UPDATE]: When an endpoint gains parameters
*/

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::card_dispute::CardDisputeActionStatus;
use super::declined_transaction::DeclinedTransactionSourceCategory;
use super::transaction::TransactionSourceCategory;
use super::transfers::{AchReturnReason, CheckDepositReturnReason, RtpRejectReason};

// ### Simulations

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulateInboundAchTransferParams {
    pub account_number_id: String,
    /// Positive for credits, negative for debits
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_descriptive_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_discretionary_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_entry_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_id_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_at: Option<DateTime<Utc>>,
}

impl SimulateInboundAchTransferParams {
    pub fn new(account_number_id: impl Into<String>, amount: i64) -> Self {
        Self {
            account_number_id: account_number_id.into(),
            amount,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulateAchTransferReturnParams {
    /// Server default is `no_account`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<AchReturnReason>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulateInboundWireTransferParams {
    pub account_number_id: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originator_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originator_routing_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originator_to_beneficiary_information_line1: Option<String>,
}

impl SimulateInboundWireTransferParams {
    pub fn new(account_number_id: impl Into<String>, amount: i64) -> Self {
        Self {
            account_number_id: account_number_id.into(),
            amount,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulateInboundRealTimePaymentsTransferParams {
    pub account_number_id: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_routing_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remittance_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_for_payment_id: Option<String>,
}

impl SimulateInboundRealTimePaymentsTransferParams {
    pub fn new(account_number_id: impl Into<String>, amount: i64) -> Self {
        Self {
            account_number_id: account_number_id.into(),
            amount,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealTimePaymentsCompletionRejection {
    pub reject_reason_code: RtpRejectReason,
}

/// Completes a pending RTP transfer; with `rejection` set it is rejected instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulateRealTimePaymentsTransferCompletionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<RealTimePaymentsCompletionRejection>,
}

impl SimulateRealTimePaymentsTransferCompletionParams {
    pub fn rejected(reason: RtpRejectReason) -> Self {
        Self {
            rejection: Some(RealTimePaymentsCompletionRejection {
                reject_reason_code: reason,
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulateCheckDepositReturnParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CheckDepositReturnReason>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateCardDisputeActionParams {
    pub status: CardDisputeActionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateCardRefundParams {
    /// Settled card transaction to refund
    pub transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateDocumentParams {
    pub account_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulateInterestPaymentParams {
    pub account_id: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_start: Option<DateTime<Utc>>,
}

// ### Lists

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatedAtFilter {
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
    pub on_or_after: Option<DateTime<Utc>>,
    pub on_or_before: Option<DateTime<Utc>>,
}

/// Filters shared by the list endpoints, generic over the category enum.
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams<C> {
    pub account_id: Option<String>,
    pub route_id: Option<String>,
    pub category_in: Vec<C>,
    pub created_at: CreatedAtFilter,
    pub cursor: Option<String>,
    /// Page size, 1..=100 server side
    pub limit: Option<u32>,
}

pub type ListTransactionsParams = ListParams<TransactionSourceCategory>;
pub type ListDeclinedTransactionsParams = ListParams<DeclinedTransactionSourceCategory>;

impl<C> Default for ListParams<C> {
    fn default() -> Self {
        Self {
            account_id: None,
            route_id: None,
            category_in: Vec::new(),
            created_at: CreatedAtFilter::default(),
            cursor: None,
            limit: None,
        }
    }
}

impl<C: fmt::Display> ListParams<C> {
    pub fn for_account(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            ..Default::default()
        }
    }

    /// Query pairs with Increase's dotted keys; arrays are comma joined.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(account_id) = &self.account_id {
            query.push(("account_id".to_string(), account_id.clone()));
        }
        if let Some(route_id) = &self.route_id {
            query.push(("route_id".to_string(), route_id.clone()));
        }
        if !self.category_in.is_empty() {
            let categories: Vec<String> = self.category_in.iter().map(ToString::to_string).collect();
            query.push(("category.in".to_string(), categories.join(",")));
        }

        let bounds = [
            ("created_at.after", &self.created_at.after),
            ("created_at.before", &self.created_at.before),
            ("created_at.on_or_after", &self.created_at.on_or_after),
            ("created_at.on_or_before", &self.created_at.on_or_before),
        ];
        for (key, bound) in bounds {
            if let Some(at) = bound {
                query.push((key.to_string(), at.to_rfc3339_opts(SecondsFormat::Secs, true)));
            }
        }

        if let Some(cursor) = &self.cursor {
            query.push(("cursor".to_string(), cursor.clone()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        query
    }
}

impl<C: Clone> ListParams<C> {
    /// Same filters, positioned at `cursor`
    pub fn with_cursor(&self, cursor: impl Into<String>) -> Self {
        Self {
            cursor: Some(cursor.into()),
            ..self.clone()
        }
    }
}
