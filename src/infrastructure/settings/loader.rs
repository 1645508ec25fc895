//! 설정 파일 경로 결정 및 읽기/쓰기.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::application::error::StorageError;
use crate::domain::settings::Settings;

pub const SETTINGS_PATH_ENV: &str = "TEXTPILOT_SETTINGS";
pub const SETTINGS_DIR_NAME: &str = "textpilot";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// 명시 경로(`TEXTPILOT_SETTINGS`) 우선, 없으면 OS 사용자 설정 폴더를 사용한다.
pub fn default_settings_path() -> Result<PathBuf, StorageError> {
    if let Ok(path) = env::var(SETTINGS_PATH_ENV)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    let base = dirs::config_dir().ok_or_else(|| {
        StorageError::PathResolution("could not determine the user config directory".to_string())
    })?;
    Ok(base.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// 파일이 없을 때만 기본 설정을 기록한다. 기존 파일은 내용과 무관하게 건드리지 않는다.
/// 반환값은 새로 기록했는지 여부.
pub fn bootstrap_defaults(path: &Path) -> Result<bool, StorageError> {
    if path.exists() {
        return Ok(false);
    }

    write_settings(path, &Settings::default())?;
    info!(path = %path.display(), "default settings written");
    Ok(true)
}

pub fn read_settings(path: &Path) -> Result<Settings, StorageError> {
    let raw = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = serde_json::from_str(&raw).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "settings loaded");
    Ok(parsed)
}

/// 전체 문서를 덮어쓴다(부분 병합 없음).
/// 형제 임시 파일에 먼저 기록한 뒤 rename 하므로 실패해도 기존 파일은 그대로 남는다.
pub fn write_settings(path: &Path, settings: &Settings) -> Result<(), StorageError> {
    let rendered = serde_json::to_string_pretty(settings).map_err(StorageError::Serialize)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_private_dirs(parent)?;
    }

    let tmp_path = temp_path_for(path);
    // 이전 실행이 남긴 임시 파일은 모드가 다를 수 있다.
    let _ = fs::remove_file(&tmp_path);
    if let Err(err) = write_private_file(&tmp_path, format!("{rendered}\n").as_bytes()) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StorageError::Write {
            path: tmp_path,
            source: err,
        });
    }

    fs::rename(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        StorageError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| SETTINGS_FILE_NAME.into());
    name.push(".tmp");
    path.with_file_name(name)
}

// 토큰 직접값이 들어갈 수 있으므로 처음부터 소유자 전용 모드로 만든다.
fn write_private_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// 없는 상위 폴더를 위에서부터 하나씩 만들고 각각 0700으로 제한한다.
fn create_private_dirs(dir: &Path) -> Result<(), StorageError> {
    let missing: Vec<&Path> = dir
        .ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .take_while(|p| !p.exists())
        .collect();

    for created in missing.into_iter().rev() {
        match fs::create_dir(created) {
            Ok(()) => restrict_permissions(created, 0o700)?,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(source) => {
                return Err(StorageError::Write {
                    path: created.to_path_buf(),
                    source,
                });
            }
        }
    }
    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path, mode: u32) -> Result<(), StorageError> {
    use std::os::unix::fs::PermissionsExt;

    let map_err = |source: std::io::Error| StorageError::Permissions {
        path: path.to_path_buf(),
        source,
    };
    let mut perms = fs::metadata(path).map_err(map_err)?.permissions();
    perms.set_mode(mode);
    fs::set_permissions(path, perms).map_err(map_err)
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path, _mode: u32) -> Result<(), StorageError> {
    Ok(())
}
