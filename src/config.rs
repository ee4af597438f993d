use serde::{Deserialize, Serialize};

/// Official RestAPI v2 entry point; every endpoint path starts with the
/// application id appended to this.
pub const API_URL: &str = "https://restapi.getui.com/v2/";

/// Per-application Getui credentials plus the API base URL.
///
/// Only `app_id` feeds URL construction in this crate; the remaining
/// credentials are carried so one config value serves the auth flow that
/// produces the token passed to each call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeTuiConfig {
    pub app_id: String,
    pub app_key: String,
    pub app_secret: String,
    pub master_secret: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    API_URL.to_string()
}

impl GeTuiConfig {
    /// Config pointing at the official API endpoint.
    pub fn new(
        app_id: impl Into<String>,
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
        master_secret: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            master_secret: master_secret.into(),
            base_url: default_base_url(),
        }
    }

    /// Redirects all calls to a different base URL (proxies, tests).
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = base.into();
        self
    }
}
