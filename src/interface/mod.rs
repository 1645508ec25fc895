//! Interface layer
//! 외부 호출자(CLI)와 애플리케이션 서비스를 연결한다.

pub mod cli;
