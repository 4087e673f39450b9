/*
[INPUT]:  Declined transaction objects returned by the Increase API
[OUTPUT]: DeclinedTransaction entity, its source union and decline reasons
[POS]:    Data layer - attempted movements that were refused
[UPDATE]: When decline categories or reason codes change
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::transfers::CheckDepositRejection;
use super::wire::{Currency, Extras, ObjectType, RouteType};

/// An attempted movement of money that Increase refused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclinedTransaction {
    pub id: String,
    pub account_id: String,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub currency: Currency,
    pub description: String,
    pub route_id: Option<String>,
    pub route_type: Option<RouteType>,
    pub source: DeclinedTransactionSource,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    #[serde(flatten)]
    pub extra: Extras,
}

impl DeclinedTransaction {
    pub fn category(&self) -> DeclinedTransactionSourceCategory {
        self.source.category()
    }
}

tagged_source! {
    /// Why a [`DeclinedTransaction`] was refused, by network.
    pub enum DeclinedTransactionSource: DeclinedTransactionSourceCategory {
        AchDecline(AchDecline) = ach_decline,
        CardDecline(CardDecline) = card_decline,
        CheckDecline(CheckDecline) = check_decline,
        CheckDepositRejection(CheckDepositRejection) = check_deposit_rejection,
        InboundRealTimePaymentsTransferDecline(InboundRealTimePaymentsTransferDecline) =
            inbound_real_time_payments_transfer_decline,
        InternationalAchDecline(InternationalAchDecline) = international_ach_decline,
        WireDecline(WireDecline) = wire_decline,
    }
}

// ### ACH

wire_enum! {
    pub enum AchDeclineReason {
        AchRouteCanceled = "ach_route_canceled",
        AchRouteDisabled = "ach_route_disabled",
        BreachesLimit = "breaches_limit",
        CreditEntryRefusedByReceiver = "credit_entry_refused_by_receiver",
        DuplicateReturn = "duplicate_return",
        EntityNotActive = "entity_not_active",
        FieldError = "field_error",
        GroupLocked = "group_locked",
        InsufficientFunds = "insufficient_funds",
        MisroutedReturn = "misrouted_return",
        ReturnOfErroneousOrReversingDebit = "return_of_erroneous_or_reversing_debit",
        NoAchRoute = "no_ach_route",
        OriginatorRequest = "originator_request",
        TransactionNotAllowed = "transaction_not_allowed",
        UserInitiated = "user_initiated",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchDecline {
    pub id: String,
    pub amount: i64,
    pub inbound_ach_transfer_id: String,
    pub originator_company_descriptive_date: Option<String>,
    pub originator_company_discretionary_data: Option<String>,
    pub originator_company_id: String,
    pub originator_company_name: String,
    pub reason: AchDeclineReason,
    pub receiver_id_number: Option<String>,
    pub receiver_name: Option<String>,
    pub trace_number: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    #[serde(flatten)]
    pub extra: Extras,
}

// ### Card

wire_enum! {
    pub enum CardDeclineReason {
        CardNotActive = "card_not_active",
        PhysicalCardNotActive = "physical_card_not_active",
        EntityNotActive = "entity_not_active",
        GroupLocked = "group_locked",
        InsufficientFunds = "insufficient_funds",
        Cvv2Mismatch = "cvv2_mismatch",
        CardExpirationMismatch = "card_expiration_mismatch",
        TransactionNotAllowed = "transaction_not_allowed",
        BreachesLimit = "breaches_limit",
        WebhookDeclined = "webhook_declined",
        WebhookTimedOut = "webhook_timed_out",
        DeclinedByStandInProcessing = "declined_by_stand_in_processing",
        InvalidPhysicalCard = "invalid_physical_card",
        MissingOriginalAuthorization = "missing_original_authorization",
        SuspectedFraud = "suspected_fraud",
    }
}

wire_enum! {
    /// Who made the decision to decline a card authorization.
    pub enum CardDeclineActioner {
        User = "user",
        Increase = "increase",
        Network = "network",
    }
}

wire_enum! {
    pub enum CardProcessingCategory {
        AccountFunding = "account_funding",
        AutomaticFuelDispenser = "automatic_fuel_dispenser",
        BillPayment = "bill_payment",
        Purchase = "purchase",
        QuasiCash = "quasi_cash",
        Refund = "refund",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDecline {
    pub id: String,
    pub actioner: CardDeclineActioner,
    pub amount: i64,
    pub card_payment_id: Option<String>,
    pub currency: Currency,
    pub declined_transaction_id: String,
    pub digital_wallet_token_id: Option<String>,
    pub merchant_acceptor_id: String,
    pub merchant_category_code: String,
    pub merchant_city: Option<String>,
    pub merchant_country: String,
    pub merchant_descriptor: String,
    pub merchant_postal_code: Option<String>,
    pub merchant_state: Option<String>,
    pub physical_card_id: Option<String>,
    pub presentment_amount: i64,
    pub presentment_currency: String,
    pub processing_category: CardProcessingCategory,
    pub real_time_decision_id: Option<String>,
    pub reason: CardDeclineReason,
    #[serde(flatten)]
    pub extra: Extras,
}

// ### Check

wire_enum! {
    pub enum CheckDeclineReason {
        AchRouteDisabled = "ach_route_disabled",
        AchRouteCanceled = "ach_route_canceled",
        AlteredOrFictitious = "altered_or_fictitious",
        BreachesLimit = "breaches_limit",
        EntityNotActive = "entity_not_active",
        GroupLocked = "group_locked",
        InsufficientFunds = "insufficient_funds",
        StopPaymentRequested = "stop_payment_requested",
        DuplicatePresentment = "duplicate_presentment",
        NotAuthorized = "not_authorized",
        AmountMismatch = "amount_mismatch",
        NotOurItem = "not_our_item",
        NoAccountNumberFound = "no_account_number_found",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckDecline {
    pub amount: i64,
    pub auxiliary_on_us: Option<String>,
    pub back_image_file_id: Option<String>,
    pub check_transfer_id: Option<String>,
    pub front_image_file_id: Option<String>,
    pub inbound_check_deposit_id: Option<String>,
    pub reason: CheckDeclineReason,
    #[serde(flatten)]
    pub extra: Extras,
}

// ### Real-time payments

wire_enum! {
    pub enum RealTimePaymentsDeclineReason {
        AccountNumberCanceled = "account_number_canceled",
        AccountNumberDisabled = "account_number_disabled",
        AccountRestricted = "account_restricted",
        GroupLocked = "group_locked",
        EntityNotActive = "entity_not_active",
        RealTimePaymentsNotEnabled = "real_time_payments_not_enabled",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundRealTimePaymentsTransferDecline {
    pub amount: i64,
    pub creditor_name: String,
    pub currency: Currency,
    pub debtor_account_number: String,
    pub debtor_name: String,
    pub debtor_routing_number: String,
    pub reason: RealTimePaymentsDeclineReason,
    pub remittance_information: Option<String>,
    pub transaction_identification: String,
    #[serde(flatten)]
    pub extra: Extras,
}

// ### International ACH

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternationalAchDecline {
    pub amount: i64,
    pub destination_country_code: String,
    pub destination_currency_code: String,
    pub foreign_exchange_indicator: String,
    pub originating_currency_code: String,
    pub originator_name: String,
    pub receiving_company_or_individual_name: String,
    pub trace_number: String,
    #[serde(flatten)]
    pub extra: Extras,
}

// ### Wire

wire_enum! {
    pub enum WireDeclineReason {
        AccountNumberCanceled = "account_number_canceled",
        AccountNumberDisabled = "account_number_disabled",
        EntityNotActive = "entity_not_active",
        GroupLocked = "group_locked",
        NoAccountNumber = "no_account_number",
        TransactionNotAllowed = "transaction_not_allowed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireDecline {
    pub inbound_wire_transfer_id: String,
    pub reason: WireDeclineReason,
    #[serde(flatten)]
    pub extra: Extras,
}

impl_extensible!(
    DeclinedTransaction,
    AchDecline,
    CardDecline,
    CheckDecline,
    InboundRealTimePaymentsTransferDecline,
    InternationalAchDecline,
    WireDecline,
);
