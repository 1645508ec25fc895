//! 설정 저장소/서비스 오류 분류.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::validation::ValidationError;

/// 파일 경로/입출력/직렬화 실패. 재시도하지 않는다.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to resolve settings path: {0}")]
    PathResolution(String),
    #[error("failed to read settings at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings JSON in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize settings")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write settings at {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to restrict permissions of {path}")]
    Permissions {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 설정 서비스 오류.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Validation(#[from] ValidationError),
    #[error("provider id cannot be empty")]
    EmptyId,
    #[error("language cannot be empty")]
    EmptyLanguage,
    #[error("provider with id '{0}' not found")]
    ProviderNotFound(String),
    #[error("provider with name '{0}' already exists")]
    DuplicateProviderName(String),
    #[error("cannot delete current provider '{0}'")]
    DeleteCurrentProvider(String),
    #[error("language '{0}' is not in supported languages")]
    LanguageNotSupported(String),
    #[error("cannot remove '{0}': it is the default input language")]
    RemoveDefaultInputLanguage(String),
    #[error("cannot remove '{0}': it is the default output language")]
    RemoveDefaultOutputLanguage(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SettingsError {
    /// 입력/참조 무결성 오류(사용자 수정 가능) 여부.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
