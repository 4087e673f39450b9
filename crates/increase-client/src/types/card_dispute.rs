/*
[INPUT]:  Card dispute objects returned by the Increase API
[OUTPUT]: Card dispute entity, lifecycle states and transition rules
[POS]:    Data layer - dispute state carried across sandbox actions
[UPDATE]: When dispute states or outcome objects change
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wire::{Extras, ObjectType};

wire_enum! {
    pub enum CardDisputeStatus {
        PendingReviewing = "pending_reviewing",
        PendingUserInformation = "pending_user_information",
        Accepted = "accepted",
        Rejected = "rejected",
        Lost = "lost",
        Won = "won",
    }
}

impl CardDisputeStatus {
    /// No further action can move a dispute out of this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Lost | Self::Won)
    }

    /// Whether a sandbox action may move a dispute from `self` to `target`.
    ///
    /// Unrecognized states are let through so the server stays the authority
    /// on states this client does not know.
    pub fn can_transition_to(&self, target: &CardDisputeActionStatus) -> bool {
        use CardDisputeActionStatus as Target;

        match (self, target) {
            (Self::Unrecognized(_), _) | (_, Target::Unrecognized(_)) => true,
            (
                Self::PendingReviewing,
                Target::PendingUserInformation | Target::Accepted | Target::Rejected,
            ) => true,
            (Self::PendingUserInformation, Target::Accepted | Target::Rejected) => true,
            (Self::Accepted, Target::Lost | Target::Won) => true,
            _ => false,
        }
    }
}

wire_enum! {
    /// Target state of a simulated dispute action.
    pub enum CardDisputeActionStatus {
        PendingUserInformation = "pending_user_information",
        Accepted = "accepted",
        Rejected = "rejected",
        Lost = "lost",
        Won = "won",
    }
}

impl From<CardDisputeActionStatus> for CardDisputeStatus {
    fn from(status: CardDisputeActionStatus) -> Self {
        Self::from_wire(status.as_str())
    }
}

/// Acceptance of a dispute; also a transaction source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDisputeAcceptance {
    pub accepted_at: DateTime<Utc>,
    pub card_dispute_id: String,
    pub transaction_id: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDisputeRejection {
    pub card_dispute_id: String,
    pub explanation: String,
    pub rejected_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Extras,
}

/// Loss of a dispute; also a transaction source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDisputeLoss {
    pub card_dispute_id: String,
    pub explanation: String,
    pub lost_at: DateTime<Utc>,
    pub transaction_id: String,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDisputeWin {
    pub card_dispute_id: String,
    pub won_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Extras,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDispute {
    pub id: String,
    pub acceptance: Option<CardDisputeAcceptance>,
    pub amount: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub disputed_transaction_id: String,
    pub explanation: String,
    pub idempotency_key: Option<String>,
    pub loss: Option<CardDisputeLoss>,
    pub rejection: Option<CardDisputeRejection>,
    pub status: CardDisputeStatus,
    pub win: Option<CardDisputeWin>,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    #[serde(flatten)]
    pub extra: Extras,
}

impl CardDispute {
    pub fn is_resolved(&self) -> bool {
        self.status.is_terminal()
    }
}

impl_extensible!(
    CardDispute,
    CardDisputeAcceptance,
    CardDisputeRejection,
    CardDisputeLoss,
    CardDisputeWin,
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(CardDisputeStatus::PendingReviewing, CardDisputeActionStatus::Accepted, true)]
    #[case(CardDisputeStatus::PendingReviewing, CardDisputeActionStatus::Rejected, true)]
    #[case(CardDisputeStatus::PendingReviewing, CardDisputeActionStatus::PendingUserInformation, true)]
    #[case(CardDisputeStatus::PendingReviewing, CardDisputeActionStatus::Won, false)]
    #[case(CardDisputeStatus::PendingUserInformation, CardDisputeActionStatus::Accepted, true)]
    #[case(CardDisputeStatus::PendingUserInformation, CardDisputeActionStatus::Lost, false)]
    #[case(CardDisputeStatus::Accepted, CardDisputeActionStatus::Won, true)]
    #[case(CardDisputeStatus::Accepted, CardDisputeActionStatus::Lost, true)]
    #[case(CardDisputeStatus::Accepted, CardDisputeActionStatus::Rejected, false)]
    #[case(CardDisputeStatus::Rejected, CardDisputeActionStatus::Accepted, false)]
    #[case(CardDisputeStatus::Won, CardDisputeActionStatus::Lost, false)]
    #[case(CardDisputeStatus::Lost, CardDisputeActionStatus::Won, false)]
    fn dispute_transitions(
        #[case] from: CardDisputeStatus,
        #[case] to: CardDisputeActionStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(&to), allowed);
    }

    #[test]
    fn unknown_states_defer_to_server() {
        let from = CardDisputeStatus::Unrecognized("pending_response".to_string());
        assert!(from.can_transition_to(&CardDisputeActionStatus::Won));
        assert!(!from.is_terminal());
    }

    #[test]
    fn action_status_converts_to_status() {
        let status: CardDisputeStatus = CardDisputeActionStatus::Won.into();
        assert_eq!(status, CardDisputeStatus::Won);
        assert!(status.is_terminal());
    }

    #[test]
    fn accepted_dispute_decodes() {
        let dispute: CardDispute = serde_json::from_value(json!({
            "id": "card_dispute_h9sc95nbl1cgltpp7men",
            "acceptance": {
                "accepted_at": "2020-01-31T23:59:59Z",
                "card_dispute_id": "card_dispute_h9sc95nbl1cgltpp7men",
                "transaction_id": "transaction_uyrp7fld2ium70oa7oi"
            },
            "amount": null,
            "created_at": "2020-01-31T23:59:59Z",
            "disputed_transaction_id": "transaction_uyrp7fld2ium70oa7oi",
            "explanation": "Unauthorized recurring purchase",
            "idempotency_key": null,
            "loss": null,
            "rejection": null,
            "status": "accepted",
            "win": null,
            "type": "card_dispute"
        }))
        .unwrap();

        assert_eq!(dispute.status, CardDisputeStatus::Accepted);
        assert!(!dispute.is_resolved());
        assert!(dispute.acceptance.is_some());
    }
}
