use crate::config::Config;
use crate::error::SetupError;
use crate::supabase::client::SupabaseClient;
use crate::supabase::schema::PROFILES_INIT;
use tracing::info;

/// Applies the fixed roles/profiles schema using the elevated service key.
#[derive(Debug)]
pub struct SchemaProvisioner {
    client: SupabaseClient,
}

impl SchemaProvisioner {
    /// Build from config; fails fast when the backend URL or the elevated
    /// credential is absent, before any network I/O.
    pub fn from_config(http: reqwest::Client, config: &Config) -> Result<Self, SetupError> {
        if config.supabase_url.is_empty() {
            return Err(SetupError::ConfigMissing("SUPABASE_URL"));
        }
        if config.supabase_service_role_key.is_empty() {
            return Err(SetupError::ConfigMissing("SUPABASE_SERVICE_ROLE_KEY"));
        }
        let client = SupabaseClient::new(
            http,
            &config.supabase_url,
            &config.supabase_service_role_key,
        )?;
        Ok(Self { client })
    }

    /// Apply the create-if-absent table plus the row-level-security toggle
    /// as one logical unit. Safe to run repeatedly; the backend treats the
    /// already-existing table as a no-op.
    pub async fn provision(&self) -> Result<(), SetupError> {
        self.client.execute_sql(PROFILES_INIT).await?;
        info!("profiles schema applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_fails_fast() {
        let config = Config {
            supabase_service_role_key: "service-key".to_string(),
            ..Config::default()
        };
        let err = SchemaProvisioner::from_config(reqwest::Client::new(), &config).unwrap_err();
        assert!(matches!(err, SetupError::ConfigMissing("SUPABASE_URL")));
    }

    #[test]
    fn empty_service_key_fails_fast() {
        let config = Config {
            supabase_url: "https://demo.supabase.co".to_string(),
            ..Config::default()
        };
        let err = SchemaProvisioner::from_config(reqwest::Client::new(), &config).unwrap_err();
        assert!(matches!(
            err,
            SetupError::ConfigMissing("SUPABASE_SERVICE_ROLE_KEY")
        ));
    }

    #[test]
    fn valid_config_builds_a_provisioner() {
        let config = Config {
            supabase_url: "https://demo.supabase.co".to_string(),
            supabase_service_role_key: "service-key".to_string(),
            ..Config::default()
        };
        assert!(SchemaProvisioner::from_config(reqwest::Client::new(), &config).is_ok());
    }
}
