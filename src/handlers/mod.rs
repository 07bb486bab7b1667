//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   AuthMiddleware - 신원 확인 / 라우트 정책         ← Gate
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 서비스를 `web::Data`로 주입받고, 실패는 `AppError`로 반환해
//! `ResponseError` 구현이 JSON 에러 응답으로 변환하게 합니다.
//!
//! - [`auth`] - 이메일 회원가입 / 로그인
//! - [`users`] - 사용자 프로필 조회

pub mod auth;
pub mod users;
