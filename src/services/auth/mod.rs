//! 인증 및 보안 서비스 모듈
//!
//! 이메일/비밀번호 기반 회원가입과 로그인, 그리고 이를 위한
//! 비밀번호 해싱과 JWT 토큰 발급을 담당합니다.
//!
//! # Features
//!
//! - bcrypt 비밀번호 해싱 ([`PasswordService`])
//! - HS256 액세스/리프레시 토큰 발급과 검증 ([`TokenService`])
//! - 회원가입/로그인 흐름과 세션 기록 ([`CredentialService`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::CredentialService;
//!
//! let tokens = ctx.credentials.sign_in(request, client).await?;
//! ```

pub mod credential_service;
pub mod password_service;
pub mod token_service;

pub use credential_service::*;
pub use password_service::*;
pub use token_service::*;
