//! # Domain Entities
//!
//! 데이터베이스 테이블에 그대로 대응하는 영속 엔티티들입니다.
//!
//! - [`users`] - 사용자 (역할, 상태 포함)
//! - [`accounts`] - 사용자별 로그인 수단 (EMAIL, GOOGLE, NAVER, KAKAO)
//! - [`sessions`] - 리프레시 토큰 기반 로그인 세션

pub mod users;
pub mod accounts;
pub mod sessions;

pub use users::*;
pub use accounts::*;
pub use sessions::*;
