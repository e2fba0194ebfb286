use std::env;

/// Dispatch configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Conventional wrapper field under which list-style operation
    /// results nest their payload (e.g. `{ "success": true, "data": [...] }`)
    pub envelope_key: String,
    /// Title used when a declaration carries none
    pub default_title: String,
}

impl DispatchConfig {
    /// Load dispatch configuration from environment variables
    ///
    /// Every field has a default, so loading never fails.
    pub fn from_env() -> Self {
        Self {
            envelope_key: env::var("NOTIFY_ENVELOPE_KEY").unwrap_or_else(|_| "data".to_string()),
            default_title: env::var("NOTIFY_DEFAULT_TITLE")
                .unwrap_or_else(|_| "Notification".to_string()),
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            envelope_key: "data".to_string(),
            default_title: "Notification".to_string(),
        }
    }
}
