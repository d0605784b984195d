use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SetupError {
    #[error("missing required configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("schema provisioning rejected: {0}")]
    Provision(PostgrestError),

    #[error("credential verification failed with status {status}: {message}")]
    Verify { status: StatusCode, message: String },

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Upstream error with status: {0}")]
    UpstreamStatus(StatusCode),
}

/// Failures of the target-file patch step.
#[derive(Debug, ThisError)]
pub enum PatchError {
    #[error("target directory does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O failure while patching: {0}")]
    Io(#[from] std::io::Error),

    #[error("template has unresolved placeholder: {0}")]
    TemplateInvalid(String),
}

/// PostgREST error response structure
#[derive(Deserialize, Debug)]
pub struct PostgrestError {
    pub code: String,
    pub message: String,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl std::fmt::Display for PostgrestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
