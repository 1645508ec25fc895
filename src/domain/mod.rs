//! Domain layer
//! 설정 엔티티/기본값/유효성 규칙을 외부 의존성(파일/환경변수) 없이 표현한다.

pub mod defaults;
pub mod settings;
pub mod validation;
