//! Account Entity Implementation
//!
//! 사용자 한 명은 로그인 수단(프로바이더)마다 하나의 계정을 가질 수 있습니다.
//! 비밀번호 해시는 `EMAIL` 프로바이더 계정만 가집니다.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 계정의 인증 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum AccountProvider {
    Email,
    Google,
    Naver,
    Kakao,
}

impl AccountProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountProvider::Email => "EMAIL",
            AccountProvider::Google => "GOOGLE",
            AccountProvider::Naver => "NAVER",
            AccountProvider::Kakao => "KAKAO",
        }
    }
}

/// bcrypt 해시 문자열
///
/// 평문 비밀번호와 타입 수준에서 구분하기 위한 래퍼입니다.
/// `Debug` 출력에서는 해시 값을 가립니다.
#[derive(Clone, PartialEq, Eq, sqlx::Type)]
#[sqlx(transparent)]
pub struct BcryptHash(String);

impl BcryptHash {
    /// 이미 계산된 해시 문자열을 감쌉니다.
    pub fn from_hashed(hashed: String) -> Self {
        Self(hashed)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BcryptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BcryptHash([REDACTED])")
    }
}

/// 계정 엔티티
///
/// `accounts` 테이블의 한 행입니다.
/// `(user_id, provider_id)`와 `(provider_id, account_id)`가 각각 유니크합니다.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    pub id: String,
    /// 프로바이더 내 식별자 (EMAIL 계정은 이메일 주소)
    pub account_id: String,
    pub provider_id: AccountProvider,
    pub email: Option<String>,
    pub user_id: String,
    /// OAuth 액세스 토큰
    pub access_token: Option<String>,
    /// OAuth 리프레시 토큰
    pub refresh_token: Option<String>,
    pub access_token_expires_at: Option<DateTime<Utc>>,
    pub refresh_token_expires_at: Option<DateTime<Utc>>,
    pub scope: Option<String>,
    /// 비밀번호 해시 (EMAIL 계정 전용)
    pub password: Option<BcryptHash>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// 이메일/비밀번호 계정 생성
    pub fn new_email(user_id: String, email: String, password: BcryptHash) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            account_id: email.clone(),
            provider_id: AccountProvider::Email,
            email: Some(email),
            user_id,
            access_token: None,
            refresh_token: None,
            access_token_expires_at: None,
            refresh_token_expires_at: None,
            scope: None,
            password: Some(password),
            created_at: now,
            updated_at: now,
        }
    }
}
