//! 요청 단위 인증 모델
//!
//! - [`authenticated_user`] - 게이트가 요청마다 붙이는 신원 값과 핸들러용 추출자
//! - [`authentication_request`] - 라우트별 접근 정책 테이블
//! - [`client_info`] - 세션에 기록할 클라이언트 IP / User-Agent

pub mod authenticated_user;
pub mod authentication_request;
pub mod client_info;

pub use authenticated_user::*;
pub use authentication_request::*;
pub use client_info::*;
