use crate::error::{PostgrestError, SetupError};
use serde_json::json;
use tracing::debug;
use url::Url;

/// Thin wrapper over the Supabase REST surface used during bootstrap.
/// Holds the shared HTTP client, project base URL and the elevated key.
#[derive(Debug)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base: Url,
    service_key: String,
}

impl SupabaseClient {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        service_key: impl Into<String>,
    ) -> Result<Self, SetupError> {
        Ok(Self {
            http,
            base: Url::parse(base_url)?,
            service_key: service_key.into(),
        })
    }

    /// Execute one schema statement body via the SQL-execution RPC.
    ///
    /// The statement is sent as a single logical unit; PostgREST runs the
    /// whole body in one transaction, so partial application is not
    /// observable. Rejections are surfaced with the backend's structured
    /// error body when one is returned.
    pub async fn execute_sql(&self, statement: &str) -> Result<(), SetupError> {
        let endpoint = self.sql_endpoint()?;
        let resp = self
            .http
            .post(endpoint)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .json(&json!({ "query": statement }))
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            debug!(%status, "schema statement accepted");
            return Ok(());
        }

        let body = resp.bytes().await?;
        match serde_json::from_slice::<PostgrestError>(&body) {
            Ok(err) => Err(SetupError::Provision(err)),
            Err(_) => Err(SetupError::UpstreamStatus(status)),
        }
    }

    fn sql_endpoint(&self) -> Result<Url, SetupError> {
        Ok(self.base.join("rest/v1/rpc/exec_sql")?)
    }
}
