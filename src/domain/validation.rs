//! 설정 유효성 검사(순수 함수).
//! 각 검사는 첫 번째로 위반된 규칙 하나만 보고한다.

use thiserror::Error;
use url::Url;

use crate::domain::settings::{
    InferenceBaseConfig, LanguageConfig, ModelConfig, ProviderConfig, Settings,
};

pub const MIN_TIMEOUT_SECONDS: u32 = 1;
pub const MAX_TIMEOUT_SECONDS: u32 = 600;
pub const MAX_RETRIES: u32 = 10;
pub const MIN_TEMPERATURE: f64 = 0.0;
pub const MAX_TEMPERATURE: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("base URL cannot be empty")]
    EmptyBaseUrl,
    #[error("base URL '{url}' is not an absolute URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("base URL scheme must be http or https, got '{0}'")]
    UnsupportedScheme(String),
    #[error("base URL '{0}' must end with '/'")]
    MissingTrailingSlash(String),
    #[error("{field} '{path}' must not start with '/'")]
    LeadingSlash { field: &'static str, path: String },
    #[error("provider name cannot be empty")]
    EmptyProviderName,
    #[error("models endpoint is required unless a custom model list is used")]
    MissingModelsEndpoint,
    #[error("completion endpoint cannot be empty")]
    MissingCompletionEndpoint,
    #[error("environment variable name is required when loading the auth token from env")]
    MissingEnvVarName,
    #[error("auth token is required for auth kind '{0}'")]
    MissingAuthToken(String),
    #[error("custom model list cannot be empty when enabled")]
    EmptyCustomModels,
    #[error("custom model names cannot be blank")]
    BlankCustomModel,
    #[error("custom header names cannot be blank")]
    BlankHeaderName,
    #[error("provider '{name}' is invalid: {source}")]
    InvalidProvider {
        name: String,
        #[source]
        source: Box<ValidationError>,
    },
    #[error("provider name '{0}' is used more than once")]
    DuplicateProviderName(String),
    #[error("current provider name cannot be empty")]
    EmptyCurrentProvider,
    #[error("current provider '{0}' is not among available providers")]
    CurrentProviderMissing(String),
    #[error("timeout_seconds must be between 1 and 600, got {0}")]
    TimeoutOutOfRange(u32),
    #[error("max_retries must be between 0 and 10, got {0}")]
    RetriesOutOfRange(u32),
    #[error("model name cannot be empty")]
    EmptyModelName,
    #[error("temperature must be a finite number, got {0}")]
    NonFiniteTemperature(f64),
    #[error("temperature must be between 0 and 2, got {0}")]
    TemperatureOutOfRange(f64),
    #[error("language list cannot be empty")]
    EmptyLanguageList,
    #[error("default input language '{0}' is not in supported languages")]
    DefaultInputLanguageMissing(String),
    #[error("default output language '{0}' is not in supported languages")]
    DefaultOutputLanguageMissing(String),
}

pub type ValidationResult = Result<(), ValidationError>;

/// 기본 URL: 절대 http(s) URL이고 `/`로 끝나야 한다.
pub fn validate_base_url(url: &str) -> ValidationResult {
    if url.trim().is_empty() {
        return Err(ValidationError::EmptyBaseUrl);
    }

    let parsed = Url::parse(url).map_err(|err| ValidationError::InvalidBaseUrl {
        url: url.to_string(),
        reason: err.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(ValidationError::UnsupportedScheme(other.to_string())),
    }

    if !url.ends_with('/') {
        return Err(ValidationError::MissingTrailingSlash(url.to_string()));
    }
    Ok(())
}

/// 상대 엔드포인트: 빈 값은 허용(기본 URL 그대로 사용), `/` 시작은 금지.
pub fn validate_relative_endpoint(field: &'static str, path: &str) -> ValidationResult {
    if path.starts_with('/') {
        return Err(ValidationError::LeadingSlash {
            field,
            path: path.to_string(),
        });
    }
    Ok(())
}

pub fn validate_provider_config(cfg: &ProviderConfig) -> ValidationResult {
    if cfg.name.trim().is_empty() {
        return Err(ValidationError::EmptyProviderName);
    }

    validate_base_url(&cfg.base_url)?;

    if !cfg.use_custom_model_list && cfg.models_endpoint.trim().is_empty() {
        return Err(ValidationError::MissingModelsEndpoint);
    }
    validate_relative_endpoint("models endpoint", &cfg.models_endpoint)?;

    if cfg.completion_endpoint.trim().is_empty() {
        return Err(ValidationError::MissingCompletionEndpoint);
    }
    validate_relative_endpoint("completion endpoint", &cfg.completion_endpoint)?;

    // env 로딩이 켜져 있으면 직접 토큰은 검사하지 않는다.
    if cfg.load_auth_token_from_env {
        if cfg.env_var_name.trim().is_empty() {
            return Err(ValidationError::MissingEnvVarName);
        }
    } else if cfg.auth_kind.requires_token() && cfg.auth_token.trim().is_empty() {
        return Err(ValidationError::MissingAuthToken(cfg.auth_kind.to_string()));
    }

    if cfg.use_custom_model_list {
        if cfg.custom_models.is_empty() {
            return Err(ValidationError::EmptyCustomModels);
        }
        if cfg.custom_models.iter().any(|m| m.trim().is_empty()) {
            return Err(ValidationError::BlankCustomModel);
        }
    }

    if cfg.use_custom_headers && cfg.headers.keys().any(|k| k.trim().is_empty()) {
        return Err(ValidationError::BlankHeaderName);
    }

    Ok(())
}

pub fn validate_inference_config(cfg: &InferenceBaseConfig) -> ValidationResult {
    if !(MIN_TIMEOUT_SECONDS..=MAX_TIMEOUT_SECONDS).contains(&cfg.timeout_seconds) {
        return Err(ValidationError::TimeoutOutOfRange(cfg.timeout_seconds));
    }
    if cfg.max_retries > MAX_RETRIES {
        return Err(ValidationError::RetriesOutOfRange(cfg.max_retries));
    }
    Ok(())
}

pub fn validate_model_config(cfg: &ModelConfig) -> ValidationResult {
    if cfg.name.trim().is_empty() {
        return Err(ValidationError::EmptyModelName);
    }
    // 비활성 상태여도 JSON에 기록되므로 유한값이어야 한다.
    if !cfg.temperature.is_finite() {
        return Err(ValidationError::NonFiniteTemperature(cfg.temperature));
    }
    if cfg.use_temperature && !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&cfg.temperature) {
        return Err(ValidationError::TemperatureOutOfRange(cfg.temperature));
    }
    Ok(())
}

pub fn validate_language_config(cfg: &LanguageConfig) -> ValidationResult {
    if cfg.languages.is_empty() {
        return Err(ValidationError::EmptyLanguageList);
    }
    if !cfg.contains(&cfg.default_input_language) {
        return Err(ValidationError::DefaultInputLanguageMissing(
            cfg.default_input_language.clone(),
        ));
    }
    if !cfg.contains(&cfg.default_output_language) {
        return Err(ValidationError::DefaultOutputLanguageMissing(
            cfg.default_output_language.clone(),
        ));
    }
    Ok(())
}

/// 설정 집합 전체의 일관성을 검사한다.
pub fn validate_settings(settings: &Settings) -> ValidationResult {
    for (idx, provider) in settings.available_providers.iter().enumerate() {
        validate_provider_config(provider).map_err(|err| ValidationError::InvalidProvider {
            name: provider.name.clone(),
            source: Box::new(err),
        })?;

        let duplicated = settings.available_providers[..idx]
            .iter()
            .any(|earlier| earlier.name == provider.name);
        if duplicated {
            return Err(ValidationError::DuplicateProviderName(provider.name.clone()));
        }
    }

    let current = &settings.current_provider;
    if current.name.trim().is_empty() {
        return Err(ValidationError::EmptyCurrentProvider);
    }
    if settings.provider_by_name(&current.name).is_none() {
        return Err(ValidationError::CurrentProviderMissing(current.name.clone()));
    }
    validate_provider_config(current).map_err(|err| ValidationError::InvalidProvider {
        name: current.name.clone(),
        source: Box::new(err),
    })?;

    validate_inference_config(&settings.inference)?;
    validate_model_config(&settings.model)?;
    validate_language_config(&settings.language)
}
