//! # Domain Models Module
//!
//! 테이블에 저장되지 않는 값 객체들입니다.
//!
//! - [`token`] - JWT 클레임과 발급 결과
//! - [`auth`] - 요청 신원, 라우트 정책, 클라이언트 정보

pub mod auth;
pub mod token;
