//! 스토어프론트 인증 서비스
//!
//! 온라인 클래스 스토어프론트의 이메일/비밀번호 회원가입, 로그인,
//! 그리고 세션 발급을 담당하는 백엔드입니다.
//!
//! # Features
//!
//! - **회원가입/로그인**: bcrypt 해싱, 계정 열거 방지 에러 통합
//! - **JWT 인증**: 서로 다른 시크릿을 쓰는 액세스/리프레시 토큰
//! - **세션 기록**: 리프레시 토큰과 클라이언트 정보를 SQLite에 저장
//! - **인증 게이트**: 라우트 정책 테이블 기반 401 / 403 처리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← 신원 확인 + 라우트 정책
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     SQLite      │ ← 저장소 (sqlx)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use storefront_auth::config::AppConfig;
//! use storefront_auth::core::context::AppContext;
//! use storefront_auth::db::Database;
//!
//! let config = AppConfig::from_env()?;
//! let database = Database::connect(&config.database).await?;
//! database.migrate().await?;
//!
//! let ctx = AppContext::build(config, database)?;
//! let tokens = ctx.credentials.sign_in(request, client).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
mod test_support;
