//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::resolve::{auth_header, resolve_auth_token};
use crate::domain::settings::{
    AuthKind, InferenceBaseConfig, LanguageConfig, ModelConfig, ProviderConfig, ProviderKind,
    Settings,
};
use crate::domain::validation::validate_settings;

#[derive(Debug, Clone, Serialize)]
pub struct SettingsInspection {
    pub settings_file: String,
    pub valid: bool,
    pub validation_error: Option<String>,
    pub current_provider: String,
    pub providers: Vec<ProviderInspection>,
    pub inference: InferenceBaseConfig,
    pub model: ModelConfig,
    pub language: LanguageConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderInspection {
    pub id: String,
    pub name: String,
    pub current: bool,
    pub provider_kind: ProviderKind,
    pub completion_url: Option<String>,
    pub models_url: Option<String>,
    pub custom_models: Vec<String>,
    pub header_names: Vec<String>,
    pub auth_kind: AuthKind,
    pub token_source: Option<String>,
    pub token_resolved: bool,
    /// 토큰이 해석됐을 때 요청에 붙을 인증 헤더 이름.
    pub auth_header: Option<String>,
}

impl SettingsInspection {
    pub fn from_settings(settings: &Settings, settings_file: &str) -> Self {
        let validation_error = validate_settings(settings).err().map(|e| e.to_string());

        Self {
            settings_file: settings_file.to_string(),
            valid: validation_error.is_none(),
            validation_error,
            current_provider: settings.current_provider.name.clone(),
            providers: settings
                .available_providers
                .iter()
                .map(|p| ProviderInspection::from_config(p, &settings.current_provider.id))
                .collect(),
            inference: settings.inference.clone(),
            model: settings.model.clone(),
            language: settings.language.clone(),
        }
    }
}

impl ProviderInspection {
    fn from_config(cfg: &ProviderConfig, current_id: &str) -> Self {
        let token = resolve_auth_token(cfg);
        let custom_models = if cfg.use_custom_model_list {
            cfg.custom_models.clone()
        } else {
            Vec::new()
        };

        Self {
            id: cfg.id.clone(),
            name: cfg.name.clone(),
            current: cfg.id == current_id,
            provider_kind: cfg.provider_kind,
            completion_url: cfg.completion_url().ok().map(|u| u.to_string()),
            models_url: cfg.models_url().ok().flatten().map(|u| u.to_string()),
            custom_models,
            header_names: cfg.effective_headers().into_keys().collect(),
            auth_kind: cfg.auth_kind,
            auth_header: auth_header(cfg).map(|(name, _)| name),
            token_resolved: token.token.is_some(),
            token_source: token.source,
        }
    }
}
