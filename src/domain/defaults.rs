//! 기본 설정 집합.
//! 최초 실행과 `reset` 시 그대로 기록되는 값이다.

use std::collections::BTreeMap;

use crate::domain::settings::{
    AuthKind, InferenceBaseConfig, LanguageConfig, ModelConfig, ProviderConfig, ProviderKind,
    Settings,
};

pub const DEFAULT_PROVIDER_ID: &str = "ollama";
pub const DEFAULT_TIMEOUT_SECONDS: u32 = 60;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_MODEL_NAME: &str = "llama3.2";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_INPUT_LANGUAGE: &str = "English";
pub const DEFAULT_OUTPUT_LANGUAGE: &str = "Ukrainian";

pub const DEFAULT_LANGUAGES: [&str; 15] = [
    "English",
    "Ukrainian",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Polish",
    "Czech",
    "Dutch",
    "Swedish",
    "Turkish",
    "Japanese",
    "Korean",
    "Chinese",
];

impl Default for Settings {
    fn default() -> Self {
        let providers = default_providers();
        let current = providers
            .iter()
            .find(|p| p.id == DEFAULT_PROVIDER_ID)
            .cloned()
            .unwrap_or_else(ollama);

        Self {
            available_providers: providers,
            current_provider: current,
            inference: InferenceBaseConfig::default(),
            model: ModelConfig::default(),
            language: LanguageConfig::default(),
        }
    }
}

impl Default for InferenceBaseConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            max_retries: DEFAULT_MAX_RETRIES,
            use_markdown_output: false,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL_NAME.to_string(),
            use_temperature: false,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            default_input_language: DEFAULT_INPUT_LANGUAGE.to_string(),
            default_output_language: DEFAULT_OUTPUT_LANGUAGE.to_string(),
        }
    }
}

/// 내장 provider 프로필 5종.
pub fn default_providers() -> Vec<ProviderConfig> {
    vec![
        ollama(),
        local_openai("lm-studio", "LM Studio", 1234),
        local_openai("llama-cpp", "llama.cpp", 8080),
        remote_openai(
            "openai",
            "OpenAI",
            "https://api.openai.com/",
            "v1/",
            AuthKind::Bearer,
            "OPENAI_API_KEY",
        ),
        remote_openai(
            "openrouter",
            "OpenRouter",
            "https://openrouter.ai/",
            "api/v1/",
            AuthKind::ApiKey,
            "OPENROUTER_API_KEY",
        ),
    ]
}

fn ollama() -> ProviderConfig {
    ProviderConfig {
        id: DEFAULT_PROVIDER_ID.to_string(),
        name: "Ollama".to_string(),
        provider_kind: ProviderKind::Ollama,
        base_url: "http://127.0.0.1:11434/".to_string(),
        models_endpoint: "api/tags".to_string(),
        completion_endpoint: "api/chat".to_string(),
        auth_kind: AuthKind::None,
        auth_token: String::new(),
        load_auth_token_from_env: false,
        env_var_name: String::new(),
        use_custom_headers: false,
        headers: BTreeMap::new(),
        use_custom_model_list: false,
        custom_models: Vec::new(),
    }
}

fn local_openai(id: &str, name: &str, port: u16) -> ProviderConfig {
    ProviderConfig {
        id: id.to_string(),
        name: name.to_string(),
        provider_kind: ProviderKind::OpenaiCompatible,
        base_url: format!("http://127.0.0.1:{port}/"),
        models_endpoint: "v1/models".to_string(),
        completion_endpoint: "v1/chat/completions".to_string(),
        auth_kind: AuthKind::None,
        auth_token: String::new(),
        load_auth_token_from_env: false,
        env_var_name: String::new(),
        use_custom_headers: false,
        headers: BTreeMap::new(),
        use_custom_model_list: false,
        custom_models: Vec::new(),
    }
}

fn remote_openai(
    id: &str,
    name: &str,
    base_url: &str,
    api_prefix: &str,
    auth_kind: AuthKind,
    env_var_name: &str,
) -> ProviderConfig {
    ProviderConfig {
        id: id.to_string(),
        name: name.to_string(),
        provider_kind: ProviderKind::OpenaiCompatible,
        base_url: base_url.to_string(),
        models_endpoint: format!("{api_prefix}models"),
        completion_endpoint: format!("{api_prefix}chat/completions"),
        auth_kind,
        auth_token: String::new(),
        load_auth_token_from_env: true,
        env_var_name: env_var_name.to_string(),
        use_custom_headers: false,
        headers: BTreeMap::new(),
        use_custom_model_list: false,
        custom_models: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::validate_settings;

    #[test]
    fn default_settings_are_valid() {
        validate_settings(&Settings::default()).unwrap();
    }

    #[test]
    fn default_settings_shape() {
        let settings = Settings::default();
        assert_eq!(settings.available_providers.len(), 5);
        assert_eq!(settings.current_provider.name, "Ollama");
        assert_eq!(settings.language.languages.len(), 15);
        assert!(settings.language.contains(DEFAULT_INPUT_LANGUAGE));
        assert!(settings.language.contains(DEFAULT_OUTPUT_LANGUAGE));
    }

    #[test]
    fn default_provider_ids_are_unique() {
        let providers = default_providers();
        for (i, p) in providers.iter().enumerate() {
            assert!(providers[i + 1..].iter().all(|other| other.id != p.id));
        }
    }
}
