//! textpilot library root.
//! LLM provider 프로필/추론/모델/언어 설정 저장소를 Clean Architecture 계층으로 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;
