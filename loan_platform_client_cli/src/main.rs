//! The "Loan Platform Web CLI Client" app's entry point.

use loan_platform_client_cli::config::Endpoints;
use loan_platform_client_cli::logic::{demo_script, run_script, ScriptClient};
use std::env;
use std::error::Error;
use std::io;

/// The "Loan Platform Web CLI Client" app's entry point.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "loan_platform=info");
    }
    pretty_env_logger::init();

    let endpoints = Endpoints::from_env()?;
    log::info!(
        "Bank accounts: {}, loan approval: {}, approvals: {}",
        endpoints.bank_accounts,
        endpoints.loan_approval,
        endpoints.approvals
    );

    let client = ScriptClient::new(endpoints)?;

    let mut stdout = io::stdout().lock();
    run_script(&client, &demo_script(), &mut stdout).await?;

    Ok(())
}
