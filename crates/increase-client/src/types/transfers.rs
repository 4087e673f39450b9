/*
[INPUT]:  Transfer and deposit objects returned by the Increase API
[OUTPUT]: ACH, account, check, check deposit and real-time payments entities
[POS]:    Data layer - money movement objects driven by simulations
[UPDATE]: When a transfer object gains fields or lifecycle states
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wire::{Currency, Extras, ObjectType};

// ### ACH

wire_enum! {
    pub enum AchTransferStatus {
        PendingApproval = "pending_approval",
        Canceled = "canceled",
        PendingReviewing = "pending_reviewing",
        PendingSubmission = "pending_submission",
        Submitted = "submitted",
        Returned = "returned",
        RequiresAttention = "requires_attention",
        Rejected = "rejected",
    }
}

wire_enum! {
    pub enum AchFunding {
        Checking = "checking",
        Savings = "savings",
    }
}

wire_enum! {
    /// Why the receiving bank sent an ACH transfer back (NACHA R-codes).
    pub enum AchReturnReason {
        InsufficientFund = "insufficient_fund",
        NoAccount = "no_account",
        AccountClosed = "account_closed",
        InvalidAccountNumberStructure = "invalid_account_number_structure",
        AccountFrozenEntryReturnedPerOfacInstruction =
            "account_frozen_entry_returned_per_ofac_instruction",
        CreditEntryRefusedByReceiver = "credit_entry_refused_by_receiver",
        UnauthorizedDebitToConsumerAccountUsingCorporateSecCode =
            "unauthorized_debit_to_consumer_account_using_corporate_sec_code",
        CorporateCustomerAdvisedNotAuthorized = "corporate_customer_advised_not_authorized",
        PaymentStopped = "payment_stopped",
        NonTransactionAccount = "non_transaction_account",
        UncollectedFunds = "uncollected_funds",
        RoutingNumberCheckDigitError = "routing_number_check_digit_error",
        CustomerAdvisedUnauthorizedImproperIneligibleOrIncomplete =
            "customer_advised_unauthorized_improper_ineligible_or_incomplete",
        AmountFieldError = "amount_field_error",
        AuthorizationRevokedByCustomer = "authorization_revoked_by_customer",
        InvalidAchRoutingNumber = "invalid_ach_routing_number",
        FileRecordEditCriteria = "file_record_edit_criteria",
        EnrInvalidIndividualName = "enr_invalid_individual_name",
        ReturnedPerOdfiRequest = "returned_per_odfi_request",
        LimitedParticipationDfi = "limited_participation_dfi",
        IncorrectlyCodedOutboundInternationalPayment =
            "incorrectly_coded_outbound_international_payment",
        AccountSoldToAnotherDfi = "account_sold_to_another_dfi",
        AddendaError = "addenda_error",
        BeneficiaryOrAccountHolderDeceased = "beneficiary_or_account_holder_deceased",
        CustomerAdvisedNotWithinAuthorizationTerms =
            "customer_advised_not_within_authorization_terms",
        CorrectedReturn = "corrected_return",
        DuplicateEntry = "duplicate_entry",
        DuplicateReturn = "duplicate_return",
        EntryNotProcessedByGateway = "entry_not_processed_by_gateway",
        FieldError = "field_error",
        ImproperEffectiveEntryDate = "improper_effective_entry_date",
        InvalidCompanyId = "invalid_company_id",
        InvalidIndividualIdNumber = "invalid_individual_id_number",
        MisroutedReturn = "misrouted_return",
        PermissibleReturnEntryNotAccepted = "permissible_return_entry_not_accepted",
        ReturnNotADuplicate = "return_not_a_duplicate",
        ReturnOfErroneousOrReversingDebit = "return_of_erroneous_or_reversing_debit",
        UntimelyReturn = "untimely_return",
    }
}

/// Return details of an ACH transfer; also a transaction source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchTransferReturn {
    pub created_at: DateTime<Utc>,
    pub raw_return_reason_code: String,
    pub return_reason_code: AchReturnReason,
    pub trace_number: Option<String>,
    pub transaction_id: String,
    pub transfer_id: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchTransferSubmission {
    pub expected_funds_settlement_at: Option<DateTime<Utc>>,
    pub submitted_at: DateTime<Utc>,
    pub trace_number: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchTransfer {
    pub id: String,
    pub account_id: String,
    pub account_number: String,
    pub amount: i64,
    pub company_descriptive_date: Option<String>,
    pub company_discretionary_data: Option<String>,
    pub company_entry_description: Option<String>,
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub currency: Currency,
    pub external_account_id: Option<String>,
    pub funding: AchFunding,
    pub idempotency_key: Option<String>,
    pub individual_id: Option<String>,
    pub individual_name: Option<String>,
    pub pending_transaction_id: Option<String>,
    #[serde(rename = "return")]
    pub return_details: Option<AchTransferReturn>,
    pub routing_number: String,
    pub statement_descriptor: String,
    pub status: AchTransferStatus,
    pub submission: Option<AchTransferSubmission>,
    pub transaction_id: Option<String>,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    #[serde(flatten)]
    pub extra: Extras,
}

// ### Account transfers

wire_enum! {
    pub enum AccountTransferStatus {
        PendingApproval = "pending_approval",
        Canceled = "canceled",
        Complete = "complete",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountTransfer {
    pub id: String,
    pub account_id: String,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub currency: Currency,
    pub description: String,
    pub destination_account_id: String,
    pub destination_transaction_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub pending_transaction_id: Option<String>,
    pub status: AccountTransferStatus,
    pub transaction_id: Option<String>,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    #[serde(flatten)]
    pub extra: Extras,
}

// ### Check transfers

wire_enum! {
    pub enum CheckTransferStatus {
        PendingApproval = "pending_approval",
        Canceled = "canceled",
        PendingSubmission = "pending_submission",
        RequiresAttention = "requires_attention",
        Rejected = "rejected",
        PendingMailing = "pending_mailing",
        Mailed = "mailed",
        Deposited = "deposited",
        Stopped = "stopped",
        Returned = "returned",
    }
}

wire_enum! {
    pub enum CheckFulfillmentMethod {
        PhysicalCheck = "physical_check",
        ThirdParty = "third_party",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckTransferMailing {
    pub image_id: Option<String>,
    pub mailed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckTransfer {
    pub id: String,
    pub account_id: String,
    pub account_number: String,
    pub amount: i64,
    pub check_number: String,
    pub created_at: DateTime<Utc>,
    pub currency: Currency,
    pub fulfillment_method: CheckFulfillmentMethod,
    pub idempotency_key: Option<String>,
    pub mailing: Option<CheckTransferMailing>,
    pub pending_transaction_id: Option<String>,
    pub routing_number: String,
    pub source_account_number_id: Option<String>,
    pub status: CheckTransferStatus,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    #[serde(flatten)]
    pub extra: Extras,
}

// ### Check deposits

wire_enum! {
    pub enum CheckDepositStatus {
        Pending = "pending",
        Submitted = "submitted",
        Rejected = "rejected",
        Returned = "returned",
    }
}

wire_enum! {
    pub enum CheckDepositRejectionReason {
        IncompleteImage = "incomplete_image",
        Duplicate = "duplicate",
        PoorImageQuality = "poor_image_quality",
        IncorrectAmount = "incorrect_amount",
        IncorrectRecipient = "incorrect_recipient",
        NotEligibleForMobileDeposit = "not_eligible_for_mobile_deposit",
        MissingRequiredDataElements = "missing_required_data_elements",
        SuspectedFraud = "suspected_fraud",
        DepositWindowExpired = "deposit_window_expired",
        Unknown = "unknown",
    }
}

wire_enum! {
    pub enum CheckDepositReturnReason {
        AchConversionNotSupported = "ach_conversion_not_supported",
        ClosedAccount = "closed_account",
        DuplicateSubmission = "duplicate_submission",
        InsufficientFunds = "insufficient_funds",
        NoAccount = "no_account",
        NotAuthorized = "not_authorized",
        StaleDated = "stale_dated",
        StopPayment = "stop_payment",
        UnknownReason = "unknown_reason",
        UnmatchedDetails = "unmatched_details",
        UnreadableImage = "unreadable_image",
        EndorsementIrregular = "endorsement_irregular",
        AlteredOrFictitiousItem = "altered_or_fictitious_item",
        FrozenOrBlockedAccount = "frozen_or_blocked_account",
        PostDated = "post_dated",
        EndorsementMissing = "endorsement_missing",
        SignatureMissing = "signature_missing",
        StopPaymentSuspect = "stop_payment_suspect",
        UnusableImage = "unusable_image",
        ImageFailsSecurityCheck = "image_fails_security_check",
        CannotDetermineAmount = "cannot_determine_amount",
        SignatureIrregular = "signature_irregular",
        NonCashItem = "non_cash_item",
        UnableToProcess = "unable_to_process",
        ItemExceedsDollarLimit = "item_exceeds_dollar_limit",
        BranchOrAccountSold = "branch_or_account_sold",
    }
}

/// Acceptance details of a check deposit; also a transaction source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckDepositAcceptance {
    pub account_number: String,
    pub amount: i64,
    pub auxiliary_on_us: Option<String>,
    pub check_deposit_id: String,
    pub currency: Currency,
    pub routing_number: String,
    pub serial_number: Option<String>,
    #[serde(flatten)]
    pub extra: Extras,
}

/// Rejection details of a check deposit; also a declined transaction source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckDepositRejection {
    pub amount: i64,
    pub check_deposit_id: String,
    pub currency: Currency,
    pub declined_transaction_id: Option<String>,
    pub reason: CheckDepositRejectionReason,
    pub rejected_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Extras,
}

/// Return details of a check deposit; also a transaction source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckDepositReturn {
    pub amount: i64,
    pub check_deposit_id: String,
    pub currency: Currency,
    pub return_reason: CheckDepositReturnReason,
    pub returned_at: DateTime<Utc>,
    pub transaction_id: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckDeposit {
    pub id: String,
    pub account_id: String,
    pub amount: i64,
    pub back_image_file_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub currency: Currency,
    pub deposit_acceptance: Option<CheckDepositAcceptance>,
    pub deposit_rejection: Option<CheckDepositRejection>,
    pub deposit_return: Option<CheckDepositReturn>,
    pub description: Option<String>,
    pub front_image_file_id: String,
    pub idempotency_key: Option<String>,
    pub status: CheckDepositStatus,
    pub transaction_id: Option<String>,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    #[serde(flatten)]
    pub extra: Extras,
}

// ### Real-time payments

wire_enum! {
    pub enum RealTimePaymentsTransferStatus {
        PendingApproval = "pending_approval",
        Canceled = "canceled",
        PendingReviewing = "pending_reviewing",
        RequiresAttention = "requires_attention",
        Rejected = "rejected",
        PendingSubmission = "pending_submission",
        Submitted = "submitted",
        Complete = "complete",
    }
}

wire_enum! {
    /// Reason code a receiving bank gives when rejecting an RTP transfer.
    pub enum RtpRejectReason {
        AccountClosed = "account_closed",
        AccountBlocked = "account_blocked",
        InvalidCreditorAccountType = "invalid_creditor_account_type",
        InvalidCreditorAccountNumber = "invalid_creditor_account_number",
        InvalidCreditorFinancialInstitutionIdentifier =
            "invalid_creditor_financial_institution_identifier",
        EndCustomerDeceased = "end_customer_deceased",
        Narrative = "narrative",
        TransactionForbidden = "transaction_forbidden",
        TransactionTypeNotSupported = "transaction_type_not_supported",
        UnexpectedAmount = "unexpected_amount",
        AmountExceedsBankLimits = "amount_exceeds_bank_limits",
        InvalidCreditorAddress = "invalid_creditor_address",
        UnknownEndCustomer = "unknown_end_customer",
        InvalidDebtorAddress = "invalid_debtor_address",
        Timeout = "timeout",
        UnsupportedMessageForRecipient = "unsupported_message_for_recipient",
        RecipientConnectionNotAvailable = "recipient_connection_not_available",
        RealTimePaymentsSuspended = "real_time_payments_suspended",
        InstructedAgentSignedOff = "instructed_agent_signed_off",
        ProcessingError = "processing_error",
        Other = "other",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealTimePaymentsTransferSubmission {
    pub submitted_at: Option<DateTime<Utc>>,
    pub transaction_identification: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealTimePaymentsTransferRejection {
    pub reject_reason_additional_information: Option<String>,
    pub reject_reason_code: RtpRejectReason,
    pub rejected_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealTimePaymentsTransfer {
    pub id: String,
    pub account_id: String,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub creditor_name: String,
    pub currency: Currency,
    pub destination_account_number: String,
    pub destination_routing_number: String,
    pub external_account_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub pending_transaction_id: Option<String>,
    pub rejection: Option<RealTimePaymentsTransferRejection>,
    pub remittance_information: String,
    pub source_account_number_id: String,
    pub status: RealTimePaymentsTransferStatus,
    pub submission: Option<RealTimePaymentsTransferSubmission>,
    pub transaction_id: Option<String>,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    #[serde(flatten)]
    pub extra: Extras,
}

impl_extensible!(
    AchTransferReturn,
    AchTransferSubmission,
    AchTransfer,
    AccountTransfer,
    CheckTransferMailing,
    CheckTransfer,
    CheckDepositAcceptance,
    CheckDepositRejection,
    CheckDepositReturn,
    CheckDeposit,
    RealTimePaymentsTransferSubmission,
    RealTimePaymentsTransferRejection,
    RealTimePaymentsTransfer,
);
