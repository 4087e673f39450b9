/*
[INPUT]:  INCREASE_API_KEY and an account number id (first CLI argument)
[OUTPUT]: Simulated inbound ACH transfer and the resulting ledger rows
[POS]:    Examples - sandbox simulations
[UPDATE]: When adding new simulation endpoints
*/

use futures_util::TryStreamExt;
use increase_client::*;

/// Example: push an inbound ACH credit through the sandbox and list it back.
#[tokio::main]
async fn main() {
    println!("=== Increase Sandbox Simulation Example ===\n");

    let Some(account_number_id) = std::env::args().nth(1) else {
        eprintln!("usage: sandbox_simulation_example <account_number_id>");
        return;
    };

    let client = match IncreaseClient::from_env_with_config(ClientConfig::sandbox()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for {}\n", client.base_url());

    println!("Simulating inbound ACH credit of $10.00...");
    let params = SimulateInboundAchTransferParams {
        company_name: Some("BIG BANK".to_string()),
        ..SimulateInboundAchTransferParams::new(&account_number_id, 1000)
    };
    let account_id = match client.simulate_inbound_ach_transfer(&params).await {
        Ok(result) => match result.outcome() {
            Some(SimulationOutcome::Accepted(transaction)) => {
                println!("✓ Posted {} ({})", transaction.id, transaction.category());
                transaction.account_id.clone()
            }
            Some(SimulationOutcome::Declined(declined)) => {
                println!("✗ Declined {} ({})", declined.id, declined.category());
                declined.account_id.clone()
            }
            None => {
                println!("✗ Simulation returned no transaction");
                return;
            }
        },
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    println!("\nListing recent inbound ACH transactions...");
    let list = ListTransactionsParams {
        category_in: vec![TransactionSourceCategory::InboundAchTransfer],
        limit: Some(10),
        ..ListTransactionsParams::for_account(account_id)
    };
    match client.transactions_stream(list).try_collect::<Vec<_>>().await {
        Ok(transactions) => {
            for transaction in transactions {
                println!("  {} {:>8} {}", transaction.id, transaction.amount, transaction.description);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Sandbox simulation example complete");
}
