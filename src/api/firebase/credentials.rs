use std::env;

use gcp_auth::CustomServiceAccount;
use thiserror::Error;

/// Conventional variable pointing at the service account key file.
pub const CREDENTIALS_ENV_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("{0} is not set")]
    MissingEnvVar(&'static str),
    #[error("service account key could not be loaded: {0}")]
    InvalidKey(#[from] gcp_auth::Error),
}

/// Locate and load the service account key named by the environment.
///
/// Reads only the process environment and the key file; no network
/// traffic happens until a token is minted from the returned account.
pub fn resolve() -> Result<CustomServiceAccount, CredentialsError> {
    let path = env::var(CREDENTIALS_ENV_VAR)
        .map_err(|_| CredentialsError::MissingEnvVar(CREDENTIALS_ENV_VAR))?;

    let account = CustomServiceAccount::from_file(path)?;
    Ok(account)
}
