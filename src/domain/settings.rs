//! 설정 집합(aggregate) 엔티티/값 객체.
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// LLM 엔드포인트 프로토콜 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// `/v1/chat/completions` 호환 API
    OpenaiCompatible,
    /// Ollama 네이티브 API
    Ollama,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::OpenaiCompatible, ProviderKind::Ollama];

    pub fn code(self) -> &'static str {
        match self {
            Self::OpenaiCompatible => "openai-compatible",
            Self::Ollama => "ollama",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 요청 인증 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthKind {
    None,
    ApiKey,
    Bearer,
}

impl AuthKind {
    pub const ALL: [AuthKind; 3] = [AuthKind::None, AuthKind::ApiKey, AuthKind::Bearer];

    pub fn code(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ApiKey => "api-key",
            Self::Bearer => "bearer",
        }
    }

    pub fn requires_token(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for AuthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// LLM 엔드포인트 하나에 대한 접속 프로필.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// 서비스가 생성하는 식별자(생성 후 불변)
    #[serde(default)]
    pub id: String,
    /// 사용자에게 보이는 이름(집합 내 유일)
    pub name: String,
    pub provider_kind: ProviderKind,
    /// `/`로 끝나는 절대 http(s) URL
    pub base_url: String,
    /// 모델 목록 상대 경로(커스텀 모델 목록 사용 시 생략 가능)
    #[serde(default)]
    pub models_endpoint: String,
    /// 생성(completion) 상대 경로
    pub completion_endpoint: String,
    pub auth_kind: AuthKind,
    /// 인증 토큰 직접값
    #[serde(default)]
    pub auth_token: String,
    #[serde(default)]
    pub load_auth_token_from_env: bool,
    /// 토큰을 읽을 환경변수 이름
    #[serde(default)]
    pub env_var_name: String,
    #[serde(default)]
    pub use_custom_headers: bool,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub use_custom_model_list: bool,
    #[serde(default)]
    pub custom_models: Vec<String>,
}

impl ProviderConfig {
    /// 기본 URL 기준으로 상대 엔드포인트를 절대 URL로 합친다.
    /// 빈 경로는 기본 URL 그대로를 의미한다.
    pub fn endpoint_url(&self, relative: &str) -> Result<Url, url::ParseError> {
        let base = Url::parse(&self.base_url)?;
        if relative.is_empty() {
            return Ok(base);
        }
        base.join(relative)
    }

    pub fn completion_url(&self) -> Result<Url, url::ParseError> {
        self.endpoint_url(&self.completion_endpoint)
    }

    /// 커스텀 모델 목록을 쓰는 프로필은 모델 목록 URL이 없다.
    pub fn models_url(&self) -> Result<Option<Url>, url::ParseError> {
        if self.use_custom_model_list {
            return Ok(None);
        }
        self.endpoint_url(&self.models_endpoint).map(Some)
    }

    /// 적용 중인 커스텀 헤더. 비활성화 시 비어 있다.
    pub fn effective_headers(&self) -> BTreeMap<String, String> {
        if self.use_custom_headers {
            self.headers.clone()
        } else {
            BTreeMap::new()
        }
    }
}

/// provider 공통 요청 튜닝 값.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InferenceBaseConfig {
    pub timeout_seconds: u32,
    pub max_retries: u32,
    #[serde(default)]
    pub use_markdown_output: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelConfig {
    /// 모델 식별자
    pub name: String,
    #[serde(default)]
    pub use_temperature: bool,
    #[serde(default)]
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguageConfig {
    /// 지원 언어 표시명(순서 무관)
    pub languages: Vec<String>,
    pub default_input_language: String,
    pub default_output_language: String,
}

impl LanguageConfig {
    /// 대소문자 무시로 목록에서 일치하는 항목을 찾는다.
    pub fn find(&self, lang: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|l| same_language(l, lang))
            .map(String::as_str)
    }

    pub fn contains(&self, lang: &str) -> bool {
        self.find(lang).is_some()
    }
}

/// 언어 표시명 비교(대소문자 무시, 유니코드 포함).
pub fn same_language(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// 저장 단위가 되는 설정 집합 루트.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub available_providers: Vec<ProviderConfig>,
    pub current_provider: ProviderConfig,
    pub inference: InferenceBaseConfig,
    pub model: ModelConfig,
    pub language: LanguageConfig,
}

impl Settings {
    pub fn provider_by_id(&self, id: &str) -> Option<&ProviderConfig> {
        self.available_providers.iter().find(|p| p.id == id)
    }

    pub fn provider_by_name(&self, name: &str) -> Option<&ProviderConfig> {
        self.available_providers.iter().find(|p| p.name == name)
    }
}

/// UI 선택지 구성을 위한 읽기 전용 메타데이터(저장하지 않음).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppSettingsMetadata {
    pub auth_kinds: Vec<AuthKind>,
    pub provider_kinds: Vec<ProviderKind>,
    pub settings_folder: String,
    pub settings_file: String,
}
