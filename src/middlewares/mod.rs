//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 인증 게이트 (AuthMiddleware)
//! - Bearer 액세스 토큰 추출 및 검증
//! - 모든 요청에 `RequestIdentity`(`Authenticated` 또는 `Anonymous`) 저장
//! - 라우트 정책 테이블에 따라 401 / 403 응답
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::AuthMiddleware;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(AuthMiddleware::new(ctx.policies.clone(), ctx.tokens.clone()))
//!         .configure(|cfg| configure_all_routes(cfg, &ctx))
//! })
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
