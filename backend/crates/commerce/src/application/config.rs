//! Application Configuration
//!
//! Identity strings written into verified purchases.

/// Commerce application configuration
#[derive(Debug, Clone)]
pub struct CommerceConfig {
    /// `verification_status` of every recorded purchase
    pub verification_status: String,
    /// `verification_method` recorded and returned
    pub verification_method: String,
    /// `verified_by` persisted in the audit record
    pub recorded_verifier: String,
    /// `verified_by` returned to the client
    pub reported_verifier: String,
}

impl Default for CommerceConfig {
    fn default() -> Self {
        Self {
            verification_status: "Verified".to_string(),
            verification_method: "Automated".to_string(),
            recorded_verifier: "Automated-Verifier".to_string(),
            reported_verifier: "System".to_string(),
        }
    }
}
