//! Server configuration
//!
//! Read once at startup from the process environment (after `.env` is loaded).

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use commerce::VerificationMode;
use platform::tron::{DEFAULT_TRON_API_URL, TronConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const TRON_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub tron: TronConfig,
    /// TRC-721 contract used for ownership lookups
    pub nft_contract_address: Option<String>,
    pub verification: VerificationMode,
    pub password_pepper: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(database_url) = var("DATABASE_URL") else {
            bail!("DATABASE_URL must be set in environment");
        };

        let max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:8000")?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        let verification = match var("TRANSACTION_VERIFICATION") {
            Some(raw) => raw.parse().map_err(anyhow::Error::msg)?,
            None => VerificationMode::default(),
        };

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            frontend_origins,
            tron: TronConfig {
                base_url: var("TRON_API_URL").unwrap_or_else(|| DEFAULT_TRON_API_URL.to_string()),
                api_key: var("TRON_API_KEY"),
                timeout: TRON_TIMEOUT,
            },
            nft_contract_address: var("NFT_CONTRACT_ADDRESS"),
            verification,
            password_pepper: var("PASSWORD_PEPPER"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/market")]).unwrap();

        assert_eq!(config.max_connections, 5);
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.frontend_origins.len(), 2);
        assert_eq!(config.tron.base_url, DEFAULT_TRON_API_URL);
        assert!(config.tron.api_key.is_none());
        assert!(config.nft_contract_address.is_none());
        assert_eq!(config.verification, VerificationMode::Automated);
        assert!(config.password_pepper.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/market"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("FRONTEND_ORIGINS", "https://a.example, ,https://b.example"),
            ("TRANSACTION_VERIFICATION", "tron"),
            ("NFT_CONTRACT_ADDRESS", "TXYZ"),
            ("PASSWORD_PEPPER", "pepper"),
        ])
        .unwrap();

        assert_eq!(config.max_connections, 12);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(
            config.frontend_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.verification, VerificationMode::Tron);
        assert_eq!(config.nft_contract_address.as_deref(), Some("TXYZ"));
        assert_eq!(config.password_pepper.as_deref(), Some("pepper"));
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(load(&[]).is_err());
        assert!(load(&[("DATABASE_URL", "x"), ("BIND_ADDR", "nowhere")]).is_err());
        assert!(load(&[("DATABASE_URL", "x"), ("TRANSACTION_VERIFICATION", "manual")]).is_err());
        assert!(load(&[("DATABASE_URL", "x"), ("DATABASE_MAX_CONNECTIONS", "many")]).is_err());
    }
}
