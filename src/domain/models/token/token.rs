//! JWT 인증 토큰 구조체
//!
//! 토큰에 담기는 신원 정보, 서명된 클레임, 발급 결과를 정의합니다.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::{UserRole, UserStatus};

/// 토큰 종류
///
/// 종류마다 서로 다른 시크릿과 만료 시간이 적용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

/// 토큰에 담기는 신원 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtPayload {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 사용자 이메일
    pub email: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 신원 정보에 RFC 7519 표준의 `jti`, `iat`, `exp`를 더한 형태입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(flatten)]
    pub payload: JwtPayload,
    /// 토큰 고유 ID, 같은 초에 발급된 토큰끼리도 값이 달라집니다
    pub jti: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// 서명된 토큰과 만료 시각
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// 액세스/리프레시 토큰 쌍
#[derive(Debug, Clone)]
pub struct IssuedTokenPair {
    pub access: IssuedToken,
    pub refresh: IssuedToken,
}
