use thiserror::Error;

/// Failure talking to the service registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to build registry HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Registry unreachable at {address}: {source}")]
    Unreachable {
        address: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Registry rejected request: status={status} body={body}")]
    Rejected { status: u16, body: String },

    #[error("Malformed registry response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Registration outcome error. Always absorbed at the spawn boundary.
pub type RegistrationError = RegistryError;
