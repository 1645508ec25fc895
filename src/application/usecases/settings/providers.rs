//! provider 프로필 CRUD와 현재 provider 포인터 관리.

use tracing::{info, warn};
use uuid::Uuid;

use super::{SettingsResult, SettingsService};
use crate::application::error::SettingsError;
use crate::domain::settings::ProviderConfig;
use crate::domain::validation::validate_provider_config;

impl SettingsService<'_> {
    pub fn get_all_providers(&self) -> SettingsResult<Vec<ProviderConfig>> {
        Ok(self.repo.get_settings()?.available_providers)
    }

    pub fn get_provider_by_id(&self, id: &str) -> SettingsResult<ProviderConfig> {
        require_id(id)?;
        self.repo
            .get_settings()?
            .provider_by_id(id)
            .cloned()
            .ok_or_else(|| SettingsError::ProviderNotFound(id.to_string()))
    }

    pub fn get_current_provider(&self) -> SettingsResult<ProviderConfig> {
        Ok(self.repo.get_settings()?.current_provider)
    }

    /// 새 provider를 추가한다. id는 항상 새로 발급된다.
    pub fn create_provider(&self, mut cfg: ProviderConfig) -> SettingsResult<ProviderConfig> {
        validate_provider_config(&cfg)?;

        let mut next = self.repo.get_settings()?;
        if next.provider_by_name(&cfg.name).is_some() {
            warn!(name = %cfg.name, "provider name already exists");
            return Err(SettingsError::DuplicateProviderName(cfg.name));
        }

        cfg.id = Uuid::new_v4().to_string();
        next.available_providers.push(cfg.clone());
        self.commit(next)?;

        info!(id = %cfg.id, name = %cfg.name, "provider created");
        Ok(cfg)
    }

    /// id로 찾은 provider를 교체한다. 현재 provider면 포인터도 함께 갱신한다.
    pub fn update_provider(&self, cfg: ProviderConfig) -> SettingsResult<ProviderConfig> {
        require_id(&cfg.id)?;
        validate_provider_config(&cfg)?;

        let mut next = self.repo.get_settings()?;
        let idx = next
            .available_providers
            .iter()
            .position(|p| p.id == cfg.id)
            .ok_or_else(|| SettingsError::ProviderNotFound(cfg.id.clone()))?;

        let name_taken = next
            .available_providers
            .iter()
            .any(|p| p.id != cfg.id && p.name == cfg.name);
        if name_taken {
            return Err(SettingsError::DuplicateProviderName(cfg.name));
        }

        next.available_providers[idx] = cfg.clone();
        if next.current_provider.id == cfg.id {
            next.current_provider = cfg.clone();
        }
        self.commit(next)?;

        info!(id = %cfg.id, name = %cfg.name, "provider updated");
        Ok(cfg)
    }

    /// 현재 provider는 삭제할 수 없다.
    pub fn delete_provider(&self, id: &str) -> SettingsResult<()> {
        require_id(id)?;

        let mut next = self.repo.get_settings()?;
        if next.current_provider.id == id {
            return Err(SettingsError::DeleteCurrentProvider(
                next.current_provider.name.clone(),
            ));
        }

        let before = next.available_providers.len();
        next.available_providers.retain(|p| p.id != id);
        if next.available_providers.len() == before {
            return Err(SettingsError::ProviderNotFound(id.to_string()));
        }
        self.commit(next)?;

        info!(id, "provider deleted");
        Ok(())
    }

    pub fn set_current_provider(&self, id: &str) -> SettingsResult<ProviderConfig> {
        require_id(id)?;

        let mut next = self.repo.get_settings()?;
        let selected = next
            .provider_by_id(id)
            .cloned()
            .ok_or_else(|| SettingsError::ProviderNotFound(id.to_string()))?;

        next.current_provider = selected.clone();
        self.commit(next)?;

        info!(id, name = %selected.name, "current provider changed");
        Ok(selected)
    }
}

fn require_id(id: &str) -> SettingsResult<()> {
    if id.trim().is_empty() {
        return Err(SettingsError::EmptyId);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::super::test_support::{MemoryRepository, paths};
    use super::*;
    use crate::domain::settings::{AuthKind, ProviderKind, Settings};
    use crate::domain::validation::ValidationError;

    fn custom(name: &str) -> ProviderConfig {
        ProviderConfig {
            id: String::new(),
            name: name.to_string(),
            provider_kind: ProviderKind::OpenaiCompatible,
            base_url: "https://llm.internal.example/".to_string(),
            models_endpoint: "v1/models".to_string(),
            completion_endpoint: "v1/chat/completions".to_string(),
            auth_kind: AuthKind::Bearer,
            auth_token: "secret".to_string(),
            load_auth_token_from_env: false,
            env_var_name: String::new(),
            use_custom_headers: true,
            headers: BTreeMap::from([("X-Team".to_string(), "docs".to_string())]),
            use_custom_model_list: false,
            custom_models: Vec::new(),
        }
    }

    #[test]
    fn create_assigns_fresh_id_and_appends() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        let mut input = custom("P");
        input.id = "caller-chosen".to_string();
        let created = service.create_provider(input).unwrap();

        assert!(!created.id.is_empty());
        assert_ne!(created.id, "caller-chosen");
        assert_eq!(service.get_provider_by_id(&created.id).unwrap(), created);
        assert_eq!(service.get_all_providers().unwrap().len(), 6);
    }

    #[test]
    fn create_twice_with_same_name_fails() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        service.create_provider(custom("P")).unwrap();
        let err = service.create_provider(custom("P")).unwrap_err();

        assert!(matches!(err, SettingsError::DuplicateProviderName(ref n) if n == "P"));
        assert!(err.to_string().contains("already exists"));
        let count = service
            .get_all_providers()
            .unwrap()
            .iter()
            .filter(|p| p.name == "P")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn create_rejects_invalid_config_without_saving() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        let mut bad = custom("P");
        bad.base_url = "https://llm.internal.example".to_string();
        let err = service.create_provider(bad).unwrap_err();

        assert!(matches!(
            err,
            SettingsError::Validation(ValidationError::MissingTrailingSlash(_))
        ));
        assert_eq!(repo.save_count(), 0);
    }

    #[test]
    fn update_current_provider_keeps_pointer_in_sync() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        let mut ollama = service.get_current_provider().unwrap();
        ollama.base_url = "http://10.0.0.5:11434/".to_string();
        service.update_provider(ollama.clone()).unwrap();

        assert_eq!(service.get_current_provider().unwrap(), ollama);
        assert_eq!(service.get_provider_by_id("ollama").unwrap(), ollama);
    }

    #[test]
    fn update_rejects_name_of_another_provider() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        let mut lm = service.get_provider_by_id("lm-studio").unwrap();
        lm.name = "Ollama".to_string();
        assert!(matches!(
            service.update_provider(lm).unwrap_err(),
            SettingsError::DuplicateProviderName(_)
        ));

        // 자기 이름 유지는 허용된다.
        let lm = service.get_provider_by_id("lm-studio").unwrap();
        service.update_provider(lm).unwrap();
    }

    #[test]
    fn update_requires_known_id() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        let mut cfg = custom("Ghost");
        assert!(matches!(
            service.update_provider(cfg.clone()).unwrap_err(),
            SettingsError::EmptyId
        ));
        cfg.id = "missing".to_string();
        assert!(matches!(
            service.update_provider(cfg).unwrap_err(),
            SettingsError::ProviderNotFound(_)
        ));
    }

    #[test]
    fn deleting_current_provider_is_blocked() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        let current = service.get_current_provider().unwrap();
        let err = service.delete_provider(&current.id).unwrap_err();
        assert!(matches!(err, SettingsError::DeleteCurrentProvider(_)));
        assert_eq!(service.get_all_providers().unwrap().len(), 5);

        service.delete_provider("lm-studio").unwrap();
        assert_eq!(service.get_all_providers().unwrap().len(), 4);
        assert!(matches!(
            service.delete_provider("lm-studio").unwrap_err(),
            SettingsError::ProviderNotFound(_)
        ));
        assert!(matches!(
            service.delete_provider("").unwrap_err(),
            SettingsError::EmptyId
        ));
    }

    #[test]
    fn set_current_provider_switches_pointer() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        let selected = service.set_current_provider("openai").unwrap();
        assert_eq!(selected.name, "OpenAI");
        assert_eq!(service.get_current_provider().unwrap().id, "openai");

        // 이전 현재 provider는 이제 삭제 가능하다.
        service.delete_provider("ollama").unwrap();
        assert!(matches!(
            service.set_current_provider("ollama").unwrap_err(),
            SettingsError::ProviderNotFound(_)
        ));
        assert_ne!(service.get_settings().unwrap(), Settings::default());
    }
}
