use thiserror::Error;

#[derive(Error, Debug)]
pub enum OwnerError {
    #[error("Not authenticated. Set GH_TOKEN or add a token to the config file.")]
    NotAuthenticated,

    #[error("Could not resolve the authenticated user: {0}")]
    AuthResolution(String),

    #[error("GitHub API error: {0}")]
    Fetch(String),

    #[error("Could not read configuration: {0}")]
    ConfigRead(String),

    #[error("Could not write configuration: {0}")]
    ConfigWrite(String),

    #[error("{0}")]
    ArgumentConflict(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),
}

pub type Result<T> = std::result::Result<T, OwnerError>;
