use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::domain::entities::users::user::{UserRole, UserStatus};
use crate::domain::models::token::token::TokenClaims;
use crate::errors::{AppError, AUTHENTICATION_REQUIRED_MESSAGE};

/// 인증 게이트가 요청마다 결정하는 신원 상태
///
/// 게이트를 통과한 모든 요청은 둘 중 하나의 값을 가집니다.
/// 토큰 만료, 서명 불일치, 형식 오류는 모두 `Anonymous`로 합쳐집니다.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestIdentity {
    Authenticated(TokenClaims),
    Anonymous,
}

impl RequestIdentity {
    pub fn claims(&self) -> Option<&TokenClaims> {
        match self {
            RequestIdentity::Authenticated(claims) => Some(claims),
            RequestIdentity::Anonymous => None,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.claims().map(|claims| claims.payload.role)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, RequestIdentity::Authenticated(_))
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 게이트가 설치되지 않은 경로에서는 `Anonymous`로 취급합니다.
impl FromRequest for RequestIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let identity = req
            .extensions()
            .get::<RequestIdentity>()
            .cloned()
            .unwrap_or(RequestIdentity::Anonymous);

        ready(Ok(identity))
    }
}

/// 검증된 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,
    pub email: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
}

impl From<&TokenClaims> for AuthenticatedUser {
    fn from(claims: &TokenClaims) -> Self {
        Self {
            user_id: claims.payload.sub.clone(),
            email: claims.payload.email.clone(),
            role: claims.payload.role,
            status: claims.payload.status,
        }
    }
}

/// 인증된 요청에서만 성공하는 추출자
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = match req.extensions().get::<RequestIdentity>() {
            Some(RequestIdentity::Authenticated(claims)) => Ok(AuthenticatedUser::from(claims)),
            _ => Err(AppError::AuthenticationError(
                AUTHENTICATION_REQUIRED_MESSAGE.to_string(),
            )),
        };

        ready(user)
    }
}
