//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod path_resolver;
mod settings_inspector;
mod settings_repository;

pub use path_resolver::{ConfigDirPathResolver, FixedPathResolver};
pub use settings_inspector::JsonSettingsInspector;
pub use settings_repository::JsonSettingsRepository;
