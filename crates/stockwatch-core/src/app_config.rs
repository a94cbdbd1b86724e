/// Product page checked when no URL is configured.
pub const DEFAULT_TARGET_URL: &str =
    "https://xn--51-6kcd9bfu4aij.xn--p1ai/tolstovka-teriberka-kit-severnoe-siyanie/";

/// Browser identity sent when no user agent is configured.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub target_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}
