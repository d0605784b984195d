use crate::config::Config;
use crate::error::SetupError;
use tracing::info;
use url::Url;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01/";

/// Minimal authenticated probe against the Twilio REST API.
/// Fetching the account resource exercises the full auth path without
/// sending anything.
#[derive(Debug)]
pub struct TwilioVerifier {
    http: reqwest::Client,
    base: Url,
    account_sid: String,
    auth_token: String,
}

impl TwilioVerifier {
    /// Build from config; fails fast when either credential is absent,
    /// before any network I/O.
    pub fn from_config(http: reqwest::Client, config: &Config) -> Result<Self, SetupError> {
        if config.twilio_account_sid.is_empty() {
            return Err(SetupError::ConfigMissing("TWILIO_ACCOUNT_SID"));
        }
        if config.twilio_auth_token.is_empty() {
            return Err(SetupError::ConfigMissing("TWILIO_AUTH_TOKEN"));
        }
        Ok(Self {
            http,
            base: Url::parse(TWILIO_API_BASE)?,
            account_sid: config.twilio_account_sid.clone(),
            auth_token: config.twilio_auth_token.clone(),
        })
    }

    /// Fetch the account resource with basic auth. Any non-success status
    /// means the credential pair is not usable.
    pub async fn verify(&self) -> Result<(), SetupError> {
        let endpoint = self.account_endpoint()?;
        let resp = self
            .http
            .get(endpoint)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SetupError::Verify { status, message });
        }
        info!(account_sid = %self.account_sid, "messaging credentials accepted");
        Ok(())
    }

    fn account_endpoint(&self) -> Result<Url, SetupError> {
        Ok(self.base.join(&format!("Accounts/{}.json", self.account_sid))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sid_fails_fast() {
        let config = Config {
            twilio_auth_token: "token".to_string(),
            ..Config::default()
        };
        let err = TwilioVerifier::from_config(reqwest::Client::new(), &config).unwrap_err();
        assert!(matches!(err, SetupError::ConfigMissing("TWILIO_ACCOUNT_SID")));
    }

    #[test]
    fn empty_token_fails_fast() {
        let config = Config {
            twilio_account_sid: "AC0123456789abcdef".to_string(),
            ..Config::default()
        };
        let err = TwilioVerifier::from_config(reqwest::Client::new(), &config).unwrap_err();
        assert!(matches!(err, SetupError::ConfigMissing("TWILIO_AUTH_TOKEN")));
    }

    #[test]
    fn account_endpoint_targets_the_account_resource() {
        let config = Config {
            twilio_account_sid: "AC0123456789abcdef".to_string(),
            twilio_auth_token: "token".to_string(),
            ..Config::default()
        };
        let verifier = TwilioVerifier::from_config(reqwest::Client::new(), &config).unwrap();
        let endpoint = verifier.account_endpoint().unwrap();
        assert_eq!(
            endpoint.as_str(),
            "https://api.twilio.com/2010-04-01/Accounts/AC0123456789abcdef.json"
        );
    }
}
