use service_core::config as core_config;
use service_core::config::get_env;
use service_core::error::AppError;

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub common: core_config::Config,
    pub google: GoogleConfig,
    /// Model used for text generation (e.g. gemini-2.5-flash).
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: String,
}

impl ChatConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = core_config::is_prod();

        Ok(ChatConfig {
            common,
            google: GoogleConfig {
                api_key: get_env("GOOGLE_API_KEY", None, is_prod)?,
            },
            model: get_env("CHAT_TEXT_MODEL", Some("gemini-2.5-flash"), is_prod)?,
        })
    }
}
