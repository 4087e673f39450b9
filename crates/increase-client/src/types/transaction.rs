/*
[INPUT]:  Transaction objects returned by the Increase API
[OUTPUT]: Transaction entity and its category-tagged source union
[POS]:    Data layer - ledger entries that moved money
[UPDATE]: When Increase adds a transaction source category or field
*/

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::card_dispute::{CardDisputeAcceptance, CardDisputeLoss};
use super::transfers::{AchTransferReturn, CheckDepositAcceptance, CheckDepositReturn};
use super::wire::{Currency, Extras, ObjectType, RouteType};

/// A posted movement of money on an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    /// Minor units; negative for debits.
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub currency: Currency,
    pub description: String,
    pub route_id: Option<String>,
    pub route_type: Option<RouteType>,
    pub source: TransactionSource,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    #[serde(flatten)]
    pub extra: Extras,
}

impl Transaction {
    pub fn category(&self) -> TransactionSourceCategory {
        self.source.category()
    }

    pub fn is_credit(&self) -> bool {
        self.amount > 0
    }
}

tagged_source! {
    /// What caused a [`Transaction`].
    pub enum TransactionSource: TransactionSourceCategory {
        AccountTransferIntention(AccountTransferIntention) = account_transfer_intention,
        AchTransferIntention(AchTransferIntention) = ach_transfer_intention,
        AchTransferRejection(AchTransferRejection) = ach_transfer_rejection,
        AchTransferReturn(AchTransferReturn) = ach_transfer_return,
        CardDisputeAcceptance(CardDisputeAcceptance) = card_dispute_acceptance,
        CardDisputeLoss(CardDisputeLoss) = card_dispute_loss,
        CardRefund(CardRefund) = card_refund,
        CardRevenuePayment(CardRevenuePayment) = card_revenue_payment,
        CardSettlement(CardSettlement) = card_settlement,
        CheckDepositAcceptance(CheckDepositAcceptance) = check_deposit_acceptance,
        CheckDepositReturn(CheckDepositReturn) = check_deposit_return,
        CheckTransferDeposit(CheckTransferDeposit) = check_transfer_deposit,
        FeePayment(FeePayment) = fee_payment,
        InboundAchTransfer(InboundAchTransfer) = inbound_ach_transfer,
        InboundRealTimePaymentsTransferConfirmation(InboundRealTimePaymentsTransferConfirmation) =
            inbound_real_time_payments_transfer_confirmation,
        InboundWireReversal(InboundWireReversal) = inbound_wire_reversal,
        InboundWireTransfer(InboundWireTransfer) = inbound_wire_transfer,
        InterestPayment(InterestPayment) = interest_payment,
        InternalSource(InternalSource) = internal_source,
        RealTimePaymentsTransferAcknowledgement(RealTimePaymentsTransferAcknowledgement) =
            real_time_payments_transfer_acknowledgement,
        SampleFunds(SampleFunds) = sample_funds,
        WireTransferIntention(WireTransferIntention) = wire_transfer_intention,
        WireTransferRejection(WireTransferRejection) = wire_transfer_rejection,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountTransferIntention {
    pub amount: i64,
    pub currency: Currency,
    pub description: String,
    pub destination_account_id: String,
    pub source_account_id: String,
    pub transfer_id: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchTransferIntention {
    pub account_number: String,
    pub amount: i64,
    pub routing_number: String,
    pub statement_descriptor: String,
    pub transfer_id: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchTransferRejection {
    pub transfer_id: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRefund {
    pub id: String,
    pub amount: i64,
    pub card_payment_id: Option<String>,
    pub currency: Currency,
    pub merchant_acceptor_id: Option<String>,
    pub merchant_category_code: Option<String>,
    pub merchant_city: Option<String>,
    pub merchant_country: String,
    pub merchant_name: Option<String>,
    pub merchant_state: Option<String>,
    pub presentment_amount: i64,
    pub presentment_currency: String,
    pub transaction_id: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRevenuePayment {
    pub amount: i64,
    pub currency: Currency,
    pub period_end: DateTime<Utc>,
    pub period_start: DateTime<Utc>,
    pub transacted_on_account_id: Option<String>,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSettlement {
    pub id: String,
    pub amount: i64,
    pub card_authorization: Option<String>,
    pub card_payment_id: Option<String>,
    pub currency: Currency,
    pub merchant_acceptor_id: Option<String>,
    pub merchant_category_code: Option<String>,
    pub merchant_city: Option<String>,
    pub merchant_country: String,
    pub merchant_name: Option<String>,
    pub merchant_state: Option<String>,
    pub pending_transaction_id: Option<String>,
    pub presentment_amount: i64,
    pub presentment_currency: String,
    pub transaction_id: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckTransferDeposit {
    pub back_image_file_id: Option<String>,
    pub bank_of_first_deposit_routing_number: Option<String>,
    pub deposited_at: DateTime<Utc>,
    pub front_image_file_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeePayment {
    pub amount: i64,
    pub currency: Currency,
    pub fee_period_start: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundAchTransfer {
    pub amount: i64,
    pub originator_company_descriptive_date: Option<String>,
    pub originator_company_discretionary_data: Option<String>,
    pub originator_company_entry_description: String,
    pub originator_company_id: String,
    pub originator_company_name: String,
    pub receiver_id_number: Option<String>,
    pub receiver_name: Option<String>,
    pub trace_number: String,
    pub transfer_id: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundRealTimePaymentsTransferConfirmation {
    pub amount: i64,
    pub creditor_name: String,
    pub currency: Currency,
    pub debtor_account_number: String,
    pub debtor_name: String,
    pub debtor_routing_number: String,
    pub remittance_information: Option<String>,
    pub transaction_identification: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundWireReversal {
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub financial_institution_to_financial_institution_information: Option<String>,
    pub input_cycle_date: NaiveDate,
    pub input_message_accountability_data: String,
    pub originator_routing_number: Option<String>,
    pub previous_message_input_message_accountability_data: String,
    pub transaction_id: String,
    pub wire_transfer_id: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundWireTransfer {
    pub amount: i64,
    pub beneficiary_name: Option<String>,
    pub beneficiary_reference: Option<String>,
    pub description: String,
    pub input_message_accountability_data: Option<String>,
    pub originator_address_line1: Option<String>,
    pub originator_name: Option<String>,
    pub originator_routing_number: Option<String>,
    pub originator_to_beneficiary_information: Option<String>,
    pub transfer_id: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestPayment {
    pub accrued_on_account_id: String,
    pub amount: i64,
    pub currency: Currency,
    pub period_end: DateTime<Utc>,
    pub period_start: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Extras,
}

wire_enum! {
    pub enum InternalSourceReason {
        AccountClosure = "account_closure",
        BankMigration = "bank_migration",
        Cashback = "cashback",
        CheckAdjustment = "check_adjustment",
        CollectionPayment = "collection_payment",
        CollectionReceivable = "collection_receivable",
        EmpyrealAdjustment = "empyreal_adjustment",
        Error = "error",
        ErrorCorrection = "error_correction",
        Fees = "fees",
        Interest = "interest",
        NegativeBalanceForgiveness = "negative_balance_forgiveness",
        SampleFunds = "sample_funds",
        SampleFundsReturn = "sample_funds_return",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalSource {
    pub amount: i64,
    pub currency: Currency,
    pub reason: InternalSourceReason,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealTimePaymentsTransferAcknowledgement {
    pub amount: i64,
    pub destination_account_number: String,
    pub destination_routing_number: String,
    pub remittance_information: String,
    pub transfer_id: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleFunds {
    pub originator: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireTransferIntention {
    pub account_number: String,
    pub amount: i64,
    pub message_to_recipient: String,
    pub routing_number: String,
    pub transfer_id: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireTransferRejection {
    pub transfer_id: String,
    #[serde(flatten)]
    pub extra: Extras,
}

impl_extensible!(
    Transaction,
    AccountTransferIntention,
    AchTransferIntention,
    AchTransferRejection,
    CardRefund,
    CardRevenuePayment,
    CardSettlement,
    CheckTransferDeposit,
    FeePayment,
    InboundAchTransfer,
    InboundRealTimePaymentsTransferConfirmation,
    InboundWireReversal,
    InboundWireTransfer,
    InterestPayment,
    InternalSource,
    RealTimePaymentsTransferAcknowledgement,
    SampleFunds,
    WireTransferIntention,
    WireTransferRejection,
);
