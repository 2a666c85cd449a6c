use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TOSS_API_BASE: &str = "https://api.tosspayments.com";

pub struct Config {
    pub bind_addr: String,
    pub database_url: String,

    pub llm_base_url: String,
    pub llm_api_key: String,
    pub llm_model: String,

    pub toss_api_base: String,
    pub toss_secret_key: String,

    /// Firestore mirror settings. The mirror is disabled when either is
    /// missing from the environment.
    pub firestore_project_id: Option<String>,
    pub firestore_api_token: Option<String>,

    /// Bootstrap admin credentials, used once when the admin table is empty.
    pub bootstrap_admin_username: Option<String>,
    pub bootstrap_admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            llm_base_url: std::env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_LLM_BASE_URL.to_string()),
            llm_api_key: std::env::var("LLM_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("LLM_API_KEY".to_string()))?,
            llm_model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            toss_api_base: std::env::var("TOSS_API_BASE")
                .unwrap_or_else(|_| DEFAULT_TOSS_API_BASE.to_string()),
            toss_secret_key: std::env::var("TOSS_SECRET_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("TOSS_SECRET_KEY".to_string()))?,
            firestore_project_id: std::env::var("FIRESTORE_PROJECT_ID").ok(),
            firestore_api_token: std::env::var("FIRESTORE_API_TOKEN").ok(),
            bootstrap_admin_username: std::env::var("BOOTSTRAP_ADMIN_USERNAME").ok(),
            bootstrap_admin_password: std::env::var("BOOTSTRAP_ADMIN_PASSWORD").ok(),
        })
    }
}
