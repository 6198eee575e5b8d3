use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub practice_api_url: String,
    pub practice_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            practice_api_url: env::var("PRACTICE_API_URL")
                .unwrap_or_else(|_| {
                    warn!("PRACTICE_API_URL not set, using empty value");
                    String::new()
                }),
            practice_api_key: env::var("PRACTICE_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("PRACTICE_API_KEY not set, using empty value");
                    String::new()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.practice_api_url.is_empty() && !self.practice_api_key.is_empty()
    }
}
