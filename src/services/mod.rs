//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 [`AppContext`](crate::core::context::AppContext)가 시작 시 한 번 생성하며,
//! 핸들러는 `web::Data`로 주입받아 사용합니다.

pub mod auth;
pub mod users;
