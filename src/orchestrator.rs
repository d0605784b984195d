//! Sequences the bootstrap steps and isolates their failures.
//!
//! The three steps touch unrelated systems, so one failing never aborts the
//! others; each records its own outcome and the summary decides the exit
//! status at the end.

use crate::config::Config;
use crate::error::SetupError;
use crate::patcher::FilePatcher;
use crate::patcher::template::{CLIENT_TEMPLATE_VARS, SUPABASE_CLIENT_TEMPLATE};
use crate::report::{RunSummary, Step};
use crate::supabase::SchemaProvisioner;
use crate::twilio::TwilioVerifier;
use std::time::Duration;
use tracing::{error, info};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct Orchestrator<'a> {
    config: &'a Config,
    http: reqwest::Client,
}

impl<'a> Orchestrator<'a> {
    /// Build the shared HTTP client with explicit timeouts so a stalled
    /// backend bounds the worst-case run time.
    pub fn new(config: &'a Config) -> Result<Self, SetupError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("groundwork/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { config, http })
    }

    /// Run provision -> verify -> patch in fixed order and report per step.
    pub async fn run(&self) -> RunSummary {
        let mut summary = RunSummary::default();

        let provisioned = self.provision_schema().await;
        Self::record(&mut summary, Step::Schema, provisioned);

        let verified = self.verify_messaging().await;
        Self::record(&mut summary, Step::Messaging, verified);

        let patched = self.patch_target();
        Self::record(&mut summary, Step::Patch, patched);

        summary
    }

    async fn provision_schema(&self) -> Result<String, SetupError> {
        let provisioner = SchemaProvisioner::from_config(self.http.clone(), self.config)?;
        provisioner.provision().await?;
        Ok("schema initialized".to_string())
    }

    async fn verify_messaging(&self) -> Result<String, SetupError> {
        let verifier = TwilioVerifier::from_config(self.http.clone(), self.config)?;
        verifier.verify().await?;
        Ok("connectivity verified".to_string())
    }

    fn patch_target(&self) -> Result<String, SetupError> {
        let patcher = FilePatcher::new(&self.config.patch_target);
        let outcome = patcher.patch(SUPABASE_CLIENT_TEMPLATE, &CLIENT_TEMPLATE_VARS)?;
        Ok(format!("file {outcome}"))
    }

    fn record(summary: &mut RunSummary, step: Step, outcome: Result<String, SetupError>) {
        match &outcome {
            Ok(line) => info!(step = step.as_str(), "{line}"),
            Err(e) => error!(step = step.as_str(), error = %e, "step failed"),
        }
        summary.record(step, outcome);
    }
}
