//! Application Configuration
//!
//! Configuration for the Account application layer.

/// Account application configuration
#[derive(Debug, Clone, Default)]
pub struct AccountConfig {
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AccountConfig {
    /// Build from the raw `PASSWORD_PEPPER` value; blank means no pepper
    pub fn with_pepper(pepper: Option<&str>) -> Self {
        Self {
            password_pepper: pepper
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(|p| p.as_bytes().to_vec()),
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_pepper_is_none() {
        assert!(AccountConfig::with_pepper(None).pepper().is_none());
        assert!(AccountConfig::with_pepper(Some("  ")).pepper().is_none());
        assert_eq!(
            AccountConfig::with_pepper(Some("s3cret")).pepper(),
            Some(&b"s3cret"[..])
        );
    }
}
