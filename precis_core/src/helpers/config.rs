use std::{env, str::FromStr, time::Duration};

pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/sshleifer/distilbart-cnn-12-6";
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 50;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for talking to the hosted summarization model.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub api_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
    pub wait_for_model: bool,
    pub min_text_length: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            wait_for_model: false,
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
        }
    }
}

impl InferenceConfig {
    pub fn from_env() -> Self {
        let api_token = env::var("HUGGING_FACE_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        if api_token.is_none() {
            log::warn!("HUGGING_FACE_API_TOKEN is not set, /summarize will answer 500");
        }

        Self {
            api_url: env::var("SUMMARIZER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_token,
            timeout: Duration::from_secs(env_or("SUMMARIZER_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
            wait_for_model: env_flag("SUMMARIZER_WAIT_FOR_MODEL"),
            min_text_length: env_or("SUMMARY_MIN_LENGTH", DEFAULT_MIN_TEXT_LENGTH),
        }
    }
}

/// Read `key` and parse it, falling back to `default` when unset or invalid.
pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

pub fn env_flag(key: &str) -> bool {
    env::var(key).map(|raw| is_truthy(&raw)).unwrap_or(false)
}

fn parse_or<T: FromStr>(key: &str, raw: &str, default: T) -> T {
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            log::warn!("Ignoring invalid value {:?} for {}, using default", raw, key);
            default
        }
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
