use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct LabelLensConfig {
    pub llm: LlmConfig,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub groq_api_key: String,
    pub groq_model: String,
    pub max_retries: u32,
    pub retry_delay_secs: u64,
}

pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

impl LlmConfig {
    pub fn new(groq_api_key: String, groq_model: String) -> Self {
        Self {
            groq_api_key,
            groq_model,
            max_retries: 3,
            retry_delay_secs: 1,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
