//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256으로 서명된 액세스/리프레시 토큰의 발급과 검증을 담당합니다.
//! 두 토큰은 서로 다른 시크릿과 만료 시간을 사용합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::debug;
use uuid::Uuid;

use crate::config::{JwtConfig, TokenSettings};
use crate::domain::models::token::token::{IssuedToken, IssuedTokenPair, JwtPayload, TokenClaims, TokenKind};
use crate::errors::{AppError, AppResult};

const BEARER_PREFIX: &str = "Bearer ";

/// JWT 토큰 관리 서비스
#[derive(Debug, Clone)]
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    fn settings(&self, kind: TokenKind) -> &TokenSettings {
        match kind {
            TokenKind::Access => &self.config.access,
            TokenKind::Refresh => &self.config.refresh,
        }
    }

    /// 토큰 발급
    ///
    /// 만료 시각은 발급 시점의 현재 시각에 설정된 유효 시간을 더해 계산하며,
    /// 같은 값이 `exp` 클레임과 반환값의 `expires_at`에 들어갑니다.
    ///
    /// # Arguments
    ///
    /// * `payload` - 토큰에 담을 신원 정보
    /// * `kind` - 액세스 / 리프레시
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    pub fn issue(&self, payload: &JwtPayload, kind: TokenKind) -> AppResult<IssuedToken> {
        let settings = self.settings(kind);
        let now = Utc::now();
        let expires_at = now + Duration::seconds(settings.expires_in_secs);

        let claims = TokenClaims {
            payload: payload.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(settings.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("{} 토큰 생성 실패: {}", kind.as_str(), e)))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// 액세스 + 리프레시 토큰 쌍 발급
    pub fn issue_pair(&self, payload: &JwtPayload) -> AppResult<IssuedTokenPair> {
        Ok(IssuedTokenPair {
            access: self.issue(payload, TokenKind::Access)?,
            refresh: self.issue(payload, TokenKind::Refresh)?,
        })
    }

    /// 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 서명 불일치, 형식 오류, 만료 (원인은 구분하지 않음)
    pub fn verify(&self, token: &str, kind: TokenKind) -> AppResult<TokenClaims> {
        let settings = self.settings(kind);
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(settings.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            debug!("{} 토큰 검증 실패: {:?}", kind.as_str(), e.kind());
            AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
        })
    }

    /// 서명을 확인하지 않고 클레임만 읽습니다.
    ///
    /// 조회/디버깅 전용이며, 결과를 신뢰 판단에 사용해서는 안 됩니다.
    pub fn decode(&self, token: &str) -> Option<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .ok()
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰 부분을 추출합니다.
    ///
    /// 접두사가 없거나 토큰이 비어 있으면 `None`을 반환합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(TokenService::extract_bearer_token("Bearer abc"), Some("abc"));
    /// assert_eq!(TokenService::extract_bearer_token("Basic abc"), None);
    /// ```
    pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
        auth_header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
