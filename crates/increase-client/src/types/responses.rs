/*
[INPUT]:  Simulation responses from the Increase sandbox
[OUTPUT]: Inbound transfer simulation results and their outcome view
[POS]:    Data layer - type definitions for API responses
[UPDATE]: When a simulation returns a new result object
*/

use serde::{Deserialize, Serialize};

use super::declined_transaction::DeclinedTransaction;
use super::transaction::Transaction;
use super::wire::{Extras, ObjectType};

/// Result of simulating an inbound ACH, wire or RTP transfer.
///
/// Exactly one of `transaction` and `declined_transaction` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundTransferSimulationResult {
    pub declined_transaction: Option<DeclinedTransaction>,
    pub transaction: Option<Transaction>,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    #[serde(flatten)]
    pub extra: Extras,
}

pub type InboundAchTransferSimulationResult = InboundTransferSimulationResult;
pub type InboundWireTransferSimulationResult = InboundTransferSimulationResult;
pub type InboundRealTimePaymentsTransferSimulationResult = InboundTransferSimulationResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationOutcome<'a> {
    Accepted(&'a Transaction),
    Declined(&'a DeclinedTransaction),
}

impl InboundTransferSimulationResult {
    /// `None` only when the server returned neither side.
    pub fn outcome(&self) -> Option<SimulationOutcome<'_>> {
        match (&self.transaction, &self.declined_transaction) {
            (Some(transaction), _) => Some(SimulationOutcome::Accepted(transaction)),
            (None, Some(declined)) => Some(SimulationOutcome::Declined(declined)),
            (None, None) => None,
        }
    }

    pub fn is_declined(&self) -> bool {
        matches!(self.outcome(), Some(SimulationOutcome::Declined(_)))
    }
}

impl_extensible!(InboundTransferSimulationResult);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::declined_transaction::{DeclinedTransactionSource, WireDeclineReason};
    use serde_json::json;

    #[test]
    fn declined_inbound_wire() {
        let result: InboundWireTransferSimulationResult = serde_json::from_value(json!({
            "declined_transaction": {
                "id": "declined_transaction_17jbn0yyhvkt4v4ooym8",
                "account_id": "account_in71c4amph0vgo2qllky",
                "amount": 1000,
                "created_at": "2020-01-31T23:59:59Z",
                "currency": "USD",
                "description": "Inbound wire",
                "route_id": "account_number_v18nkfqm6afpsrvy82b2",
                "route_type": "account_number",
                "source": {
                    "category": "wire_decline",
                    "wire_decline": {
                        "inbound_wire_transfer_id": "inbound_wire_transfer_f228m6bmhtcxjco9pwp0",
                        "reason": "account_number_disabled"
                    }
                },
                "type": "declined_transaction"
            },
            "transaction": null,
            "type": "inbound_wire_transfer_simulation_result"
        }))
        .unwrap();

        assert!(result.is_declined());
        let Some(SimulationOutcome::Declined(declined)) = result.outcome() else {
            panic!("expected a declined outcome");
        };
        let DeclinedTransactionSource::WireDecline(decline, _) = &declined.source else {
            panic!("expected wire decline");
        };
        assert_eq!(decline.reason, WireDeclineReason::AccountNumberDisabled);
        assert_eq!(result.object_type, ObjectType::InboundWireTransferSimulationResult);
    }

    #[test]
    fn empty_result_has_no_outcome() {
        let result: InboundAchTransferSimulationResult = serde_json::from_value(json!({
            "declined_transaction": null,
            "transaction": null,
            "type": "inbound_ach_transfer_simulation_result"
        }))
        .unwrap();

        assert!(result.outcome().is_none());
        assert!(!result.is_declined());
    }
}
