//! 지원 언어 목록과 기본 입력/출력 언어 관리.
//! 언어 비교는 모두 대소문자를 무시한다.

use tracing::{debug, info};

use super::{SettingsResult, SettingsService};
use crate::application::error::SettingsError;
use crate::domain::settings::{LanguageConfig, same_language};

/// 기본 언어 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefaultSlot {
    Input,
    Output,
}

impl SettingsService<'_> {
    pub fn get_language_config(&self) -> SettingsResult<LanguageConfig> {
        Ok(self.repo.get_settings()?.language)
    }

    pub fn get_languages(&self) -> SettingsResult<Vec<String>> {
        Ok(self.repo.get_settings()?.language.languages)
    }

    pub fn set_default_input_language(&self, lang: &str) -> SettingsResult<LanguageConfig> {
        self.set_default_language(DefaultSlot::Input, lang)
    }

    pub fn set_default_output_language(&self, lang: &str) -> SettingsResult<LanguageConfig> {
        self.set_default_language(DefaultSlot::Output, lang)
    }

    /// 이미 있는 언어(대소문자 무시)는 저장 없이 현재 목록을 반환한다.
    pub fn add_language(&self, lang: &str) -> SettingsResult<Vec<String>> {
        let lang = require_language(lang)?;

        let mut next = self.repo.get_settings()?;
        if next.language.contains(lang) {
            debug!(lang, "language already present");
            return Ok(next.language.languages);
        }

        next.language.languages.push(lang.to_string());
        let saved = self.commit(next)?;

        info!(lang, "language added");
        Ok(saved.language.languages)
    }

    /// 기본 입력/출력 언어는 제거할 수 없다. 없는 언어는 저장 없이 현재 목록을 반환한다.
    pub fn remove_language(&self, lang: &str) -> SettingsResult<Vec<String>> {
        let lang = require_language(lang)?;

        let mut next = self.repo.get_settings()?;
        if same_language(&next.language.default_input_language, lang) {
            return Err(SettingsError::RemoveDefaultInputLanguage(lang.to_string()));
        }
        if same_language(&next.language.default_output_language, lang) {
            return Err(SettingsError::RemoveDefaultOutputLanguage(lang.to_string()));
        }
        if !next.language.contains(lang) {
            debug!(lang, "language not present");
            return Ok(next.language.languages);
        }

        next.language.languages.retain(|l| !same_language(l, lang));
        let saved = self.commit(next)?;

        info!(lang, "language removed");
        Ok(saved.language.languages)
    }

    fn set_default_language(&self, slot: DefaultSlot, lang: &str) -> SettingsResult<LanguageConfig> {
        let lang = require_language(lang)?;

        let mut next = self.repo.get_settings()?;
        // 목록에 저장된 표기를 그대로 사용한다.
        let matched = next
            .language
            .find(lang)
            .map(str::to_string)
            .ok_or_else(|| SettingsError::LanguageNotSupported(lang.to_string()))?;

        match slot {
            DefaultSlot::Input => next.language.default_input_language = matched,
            DefaultSlot::Output => next.language.default_output_language = matched,
        }
        let saved = self.commit(next)?;

        info!(?slot, lang, "default language changed");
        Ok(saved.language)
    }
}

fn require_language(lang: &str) -> SettingsResult<&str> {
    let trimmed = lang.trim();
    if trimmed.is_empty() {
        return Err(SettingsError::EmptyLanguage);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{MemoryRepository, paths};
    use super::*;

    #[test]
    fn default_languages_cannot_be_removed() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        assert!(matches!(
            service.remove_language("English").unwrap_err(),
            SettingsError::RemoveDefaultInputLanguage(_)
        ));
        assert!(matches!(
            service.remove_language("ukrainian").unwrap_err(),
            SettingsError::RemoveDefaultOutputLanguage(_)
        ));
        assert_eq!(repo.save_count(), 0);
    }

    #[test]
    fn remove_drops_exactly_the_matching_entry() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        let before = service.get_languages().unwrap();
        let after = service.remove_language("SPANISH").unwrap();

        assert_eq!(after.len(), before.len() - 1);
        assert!(!after.iter().any(|l| l == "Spanish"));
        assert_eq!(service.get_languages().unwrap(), after);
    }

    #[test]
    fn removing_unknown_language_is_a_no_op() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        let before = service.get_languages().unwrap();
        assert_eq!(service.remove_language("Klingon").unwrap(), before);
        assert_eq!(repo.save_count(), 0);
    }

    #[test]
    fn add_is_case_insensitive_and_idempotent() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        let before = service.get_languages().unwrap();
        assert_eq!(service.add_language("english").unwrap(), before);
        assert_eq!(repo.save_count(), 0);

        let after = service.add_language("  Esperanto ").unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().map(String::as_str), Some("Esperanto"));
        assert!(matches!(
            service.add_language("   ").unwrap_err(),
            SettingsError::EmptyLanguage
        ));
    }

    #[test]
    fn default_language_must_be_supported() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        let err = service.set_default_output_language("Klingon").unwrap_err();
        assert!(matches!(err, SettingsError::LanguageNotSupported(_)));
        assert!(err.to_string().contains("not in supported languages"));

        let cfg = service.set_default_input_language("german").unwrap();
        assert_eq!(cfg.default_input_language, "German");

        // 기본 입력 언어가 바뀌었으므로 English는 이제 제거 가능하다.
        service.remove_language("English").unwrap();
        assert!(!service.get_language_config().unwrap().contains("English"));
    }
}
