//! 사용자 관리 서비스 모듈
//!
//! 인증된 사용자의 프로필 조회를 담당합니다.

pub mod user_service;

pub use user_service::*;
