/*
[INPUT]:  Transfer ids and simulation parameters
[OUTPUT]: Simulated transfer state changes and inbound transfer results
[POS]:    HTTP layer - sandbox transfer simulation endpoints
[UPDATE]: When adding transfer rails or simulation actions
*/

use super::client::path_segment;
use crate::http::{IncreaseClient, Result};
use crate::types::{
    AccountTransfer, AchTransfer, CheckDeposit, CheckTransfer, InboundAchTransferSimulationResult,
    InboundRealTimePaymentsTransferSimulationResult, InboundWireTransferSimulationResult,
    RealTimePaymentsTransfer, SimulateAchTransferReturnParams, SimulateCheckDepositReturnParams,
    SimulateInboundAchTransferParams, SimulateInboundRealTimePaymentsTransferParams,
    SimulateInboundWireTransferParams, SimulateRealTimePaymentsTransferCompletionParams,
};

const NO_BODY: Option<&()> = None;

impl IncreaseClient {
    // ### ACH

    /// Simulate an inbound ACH transfer to one of your account numbers
    ///
    /// POST /simulations/ach_transfers/inbound
    pub async fn simulate_inbound_ach_transfer(
        &self,
        params: &SimulateInboundAchTransferParams,
    ) -> Result<InboundAchTransferSimulationResult> {
        self.post_json("/simulations/ach_transfers/inbound", Some(params)).await
    }

    /// Simulate the receiving bank returning an ACH transfer
    ///
    /// POST /simulations/ach_transfers/{ach_transfer_id}/return
    pub async fn simulate_ach_transfer_return(
        &self,
        ach_transfer_id: &str,
        params: &SimulateAchTransferReturnParams,
    ) -> Result<AchTransfer> {
        let id = path_segment("ach_transfer_id", ach_transfer_id)?;
        self.post_json(&format!("/simulations/ach_transfers/{id}/return"), Some(params))
            .await
    }

    /// Simulate submitting a pending ACH transfer to the Federal Reserve
    ///
    /// POST /simulations/ach_transfers/{ach_transfer_id}/submit
    pub async fn simulate_ach_transfer_submission(&self, ach_transfer_id: &str) -> Result<AchTransfer> {
        let id = path_segment("ach_transfer_id", ach_transfer_id)?;
        self.post_json(&format!("/simulations/ach_transfers/{id}/submit"), NO_BODY)
            .await
    }

    // ### Account transfers

    /// POST /simulations/account_transfers/{account_transfer_id}/complete
    pub async fn simulate_account_transfer_completion(
        &self,
        account_transfer_id: &str,
    ) -> Result<AccountTransfer> {
        let id = path_segment("account_transfer_id", account_transfer_id)?;
        self.post_json(&format!("/simulations/account_transfers/{id}/complete"), NO_BODY)
            .await
    }

    // ### Checks

    /// Simulate mailing a check transfer
    ///
    /// POST /simulations/check_transfers/{check_transfer_id}/mail
    pub async fn simulate_check_transfer_mailing(&self, check_transfer_id: &str) -> Result<CheckTransfer> {
        let id = path_segment("check_transfer_id", check_transfer_id)?;
        self.post_json(&format!("/simulations/check_transfers/{id}/mail"), NO_BODY)
            .await
    }

    /// POST /simulations/check_deposits/{check_deposit_id}/reject
    pub async fn simulate_check_deposit_rejection(&self, check_deposit_id: &str) -> Result<CheckDeposit> {
        let id = path_segment("check_deposit_id", check_deposit_id)?;
        self.post_json(&format!("/simulations/check_deposits/{id}/reject"), NO_BODY)
            .await
    }

    /// POST /simulations/check_deposits/{check_deposit_id}/return
    pub async fn simulate_check_deposit_return(
        &self,
        check_deposit_id: &str,
        params: &SimulateCheckDepositReturnParams,
    ) -> Result<CheckDeposit> {
        let id = path_segment("check_deposit_id", check_deposit_id)?;
        self.post_json(&format!("/simulations/check_deposits/{id}/return"), Some(params))
            .await
    }

    /// POST /simulations/check_deposits/{check_deposit_id}/submit
    pub async fn simulate_check_deposit_submission(&self, check_deposit_id: &str) -> Result<CheckDeposit> {
        let id = path_segment("check_deposit_id", check_deposit_id)?;
        self.post_json(&format!("/simulations/check_deposits/{id}/submit"), NO_BODY)
            .await
    }

    // ### Wires

    /// Simulate an inbound wire transfer
    ///
    /// POST /simulations/inbound_wire_transfers
    pub async fn simulate_inbound_wire_transfer(
        &self,
        params: &SimulateInboundWireTransferParams,
    ) -> Result<InboundWireTransferSimulationResult> {
        self.post_json("/simulations/inbound_wire_transfers", Some(params)).await
    }

    // ### Real-time payments

    /// Simulate an inbound RTP transfer
    ///
    /// POST /simulations/inbound_real_time_payments_transfers
    pub async fn simulate_inbound_real_time_payments_transfer(
        &self,
        params: &SimulateInboundRealTimePaymentsTransferParams,
    ) -> Result<InboundRealTimePaymentsTransferSimulationResult> {
        self.post_json("/simulations/inbound_real_time_payments_transfers", Some(params))
            .await
    }

    /// Complete a submitted RTP transfer, or reject it when `params.rejection` is set
    ///
    /// POST /simulations/real_time_payments_transfers/{real_time_payments_transfer_id}/complete
    pub async fn simulate_real_time_payments_transfer_completion(
        &self,
        real_time_payments_transfer_id: &str,
        params: &SimulateRealTimePaymentsTransferCompletionParams,
    ) -> Result<RealTimePaymentsTransfer> {
        let id = path_segment("real_time_payments_transfer_id", real_time_payments_transfer_id)?;
        self.post_json(
            &format!("/simulations/real_time_payments_transfers/{id}/complete"),
            Some(params),
        )
        .await
    }
}
