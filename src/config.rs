//! Process configuration, built once at startup and passed by reference.
//!
//! All credential fields default to the empty string when the corresponding
//! environment variable is unset; emptiness is detected at the call site so
//! each step can fail with a precise `ConfigMissing` before any network I/O.

use figment::{Figment, providers::Env};
use serde::Deserialize;
use std::path::PathBuf;

fn default_loglevel() -> String {
    "info".to_string()
}

fn default_patch_target() -> PathBuf {
    PathBuf::from("./src/dbManagement/index.ts")
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the Supabase project, e.g. `https://xyz.supabase.co`.
    #[serde(default)]
    pub supabase_url: String,

    /// Public (anon) key; referenced by name inside the injected client block.
    #[serde(default)]
    pub supabase_anon_key: String,

    /// Elevated key used for schema provisioning; bypasses row-level security.
    #[serde(default)]
    pub supabase_service_role_key: String,

    #[serde(default)]
    pub twilio_account_sid: String,

    #[serde(default)]
    pub twilio_auth_token: String,

    /// Source file that receives the generated client-initialization block.
    #[serde(default = "default_patch_target")]
    pub patch_target: PathBuf,

    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Config, figment::Error> {
        Figment::new().merge(Env::raw()).extract()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            supabase_service_role_key: String::new(),
            twilio_account_sid: String::new(),
            twilio_auth_token: String::new(),
            patch_target: default_patch_target(),
            loglevel: default_loglevel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_environment_yields_empty_credentials_and_defaults() {
        let cfg: Config = Figment::new().extract().expect("empty figment should extract");
        assert_eq!(cfg.supabase_url, "");
        assert_eq!(cfg.supabase_anon_key, "");
        assert_eq!(cfg.supabase_service_role_key, "");
        assert_eq!(cfg.twilio_account_sid, "");
        assert_eq!(cfg.twilio_auth_token, "");
        assert_eq!(cfg.patch_target, PathBuf::from("./src/dbManagement/index.ts"));
        assert_eq!(cfg.loglevel, "info");
    }

    #[test]
    fn reads_credentials_from_environment() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SUPABASE_URL", "https://demo.supabase.co");
            jail.set_env("SUPABASE_SERVICE_ROLE_KEY", "service-key");
            jail.set_env("PATCH_TARGET", "web/src/db/index.ts");
            let cfg = Config::from_env().expect("config should extract from env");
            assert_eq!(cfg.supabase_url, "https://demo.supabase.co");
            assert_eq!(cfg.supabase_service_role_key, "service-key");
            assert_eq!(cfg.patch_target, PathBuf::from("web/src/db/index.ts"));
            Ok(())
        });
    }
}
