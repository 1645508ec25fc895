//! provider 설정 값(token/env)을 실제 런타임 값으로 해석하는 유틸리티.
//!
//! - 환경변수 접근은 인프라 계층에서만 수행한다.
//! - 해석된 토큰 자체는 진단 출력에 포함하지 않는다.

use std::env;

use crate::domain::settings::{AuthKind, ProviderConfig};

/// provider 인증 토큰 해석 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResolution {
    pub token: Option<String>,
    pub source: Option<String>,
}

/// 인증 토큰을 해석한다. env 로딩이 켜져 있으면 직접값은 무시한다.
pub fn resolve_auth_token(cfg: &ProviderConfig) -> TokenResolution {
    if cfg.auth_kind == AuthKind::None {
        return TokenResolution {
            token: None,
            source: None,
        };
    }

    if cfg.load_auth_token_from_env {
        let env_name = cfg.env_var_name.trim();
        return match env::var(env_name).ok().map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => TokenResolution {
                token: Some(v),
                source: Some(format!("env:{env_name}")),
            },
            _ => TokenResolution {
                token: None,
                source: Some(format!("env:{env_name} (missing)")),
            },
        };
    }

    match cfg.auth_token.trim() {
        "" => TokenResolution {
            token: None,
            source: None,
        },
        token => TokenResolution {
            token: Some(token.to_string()),
            source: Some("inline".to_string()),
        },
    }
}

/// 요청에 붙일 인증 헤더(이름, 값). 토큰이 없으면 None.
pub fn auth_header(cfg: &ProviderConfig) -> Option<(String, String)> {
    let token = resolve_auth_token(cfg).token?;
    match cfg.auth_kind {
        AuthKind::None => None,
        AuthKind::Bearer => Some(("Authorization".to_string(), format!("Bearer {token}"))),
        AuthKind::ApiKey => Some(("X-API-Key".to_string(), token)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::defaults::default_providers;

    fn openai() -> ProviderConfig {
        default_providers()
            .into_iter()
            .find(|p| p.id == "openai")
            .unwrap()
    }

    #[test]
    fn no_auth_resolves_nothing() {
        let ollama = default_providers().remove(0);
        assert_eq!(resolve_auth_token(&ollama).source, None);
        assert_eq!(auth_header(&ollama), None);
    }

    #[test]
    fn inline_token_is_used_when_env_disabled() {
        let mut cfg = openai();
        cfg.load_auth_token_from_env = false;
        cfg.auth_token = " sk-inline ".to_string();

        let resolved = resolve_auth_token(&cfg);
        assert_eq!(resolved.token.as_deref(), Some("sk-inline"));
        assert_eq!(resolved.source.as_deref(), Some("inline"));
        assert_eq!(
            auth_header(&cfg),
            Some(("Authorization".to_string(), "Bearer sk-inline".to_string()))
        );
    }

    #[test]
    fn env_token_takes_precedence_over_inline() {
        // 테스트 하네스가 항상 설정하는 변수를 토큰 출처로 사용한다.
        let path = env::var("PATH").unwrap();
        let mut cfg = openai();
        cfg.env_var_name = "PATH".to_string();
        cfg.auth_token = "ignored".to_string();

        let resolved = resolve_auth_token(&cfg);
        assert_eq!(resolved.token.as_deref(), Some(path.trim()));
        assert_eq!(resolved.source.as_deref(), Some("env:PATH"));
    }

    #[test]
    fn missing_env_is_labelled() {
        let mut cfg = openai();
        cfg.auth_kind = AuthKind::ApiKey;
        cfg.env_var_name = "TEXTPILOT_TEST_RESOLVE_TOKEN_UNSET".to_string();

        let resolved = resolve_auth_token(&cfg);
        assert_eq!(resolved.token, None);
        assert_eq!(
            resolved.source.as_deref(),
            Some("env:TEXTPILOT_TEST_RESOLVE_TOKEN_UNSET (missing)")
        );
        assert_eq!(auth_header(&cfg), None);
    }
}
