use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod models;
mod services;

use api::firebase::{credentials, ApiError, FirebaseClient};

/// Base URL of the cashflow Realtime Database instance (europe-west1).
const DATABASE_URL: &str =
    "https://cashflow-e8354-default-rtdb.europe-west1.firebasedatabase.app";

/// Node under which transaction records are stored.
const TRANSACTIONS_PATH: &str = "transactions";

/// How many of the most recent transactions to report.
const TRANSACTION_LIMIT: u32 = 10;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    dotenv::dotenv().ok();

    // Logs go to stderr; stdout carries only the report itself
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("cashflow_report=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let account = match credentials::resolve() {
        Ok(account) => account,
        Err(e) => {
            error!("Failed to resolve service account credentials: {}", e);
            print_credentials_guidance();
            std::process::exit(1);
        }
    };

    let client = match FirebaseClient::new(DATABASE_URL.to_string(), &account).await {
        Ok(client) => {
            info!("Authenticated against {}", DATABASE_URL);
            client
        }
        Err(e) => {
            error!("Failed to authenticate with the service account: {}", e);
            print_credentials_guidance();
            std::process::exit(1);
        }
    };

    // Any failure past this point propagates out of main unrecovered
    let result = client
        .latest_transactions(TRANSACTIONS_PATH, TRANSACTION_LIMIT)
        .await?;

    let report = services::report_service::build_transaction_report(result);
    if report.is_empty {
        debug!("No records at '{}'", TRANSACTIONS_PATH);
    }

    print!("{}", report.formatted_message);

    Ok(())
}

/// Remediation guidance for the one handled error class: missing or
/// unusable service account credentials.
fn print_credentials_guidance() {
    println!(
        "Error initializing the Firebase client. Please make sure you have set the {} environment variable.",
        credentials::CREDENTIALS_ENV_VAR
    );
    println!(
        "For example: export {}='/path/to/your/serviceAccountKey.json'",
        credentials::CREDENTIALS_ENV_VAR
    );
}
