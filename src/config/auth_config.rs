//! # Authentication Configuration Module
//!
//! JWT 액세스/리프레시 토큰 서명 설정을 관리합니다.
//! 두 토큰은 서로 다른 시크릿과 만료 시간을 사용하므로,
//! 한쪽 시크릿으로 서명된 토큰은 다른 쪽 검증을 통과할 수 없습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="access-token-secret"
//! export JWT_EXPIRES_IN="900"                  # 15분
//! export REFRESH_TOKEN_SECRET="refresh-token-secret"
//! export REFRESH_TOKEN_EXPIRES_IN="604800"     # 7일
//! ```

use std::fmt;

/// 토큰 한 종류의 서명 설정
#[derive(Clone)]
pub struct TokenSettings {
    /// HMAC-SHA256 시크릿
    pub secret: String,
    /// 발급 시점부터 만료까지의 시간 (초)
    pub expires_in_secs: i64,
}

// 시크릿이 로그에 찍히지 않도록 Debug를 직접 구현
impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"[REDACTED]")
            .field("expires_in_secs", &self.expires_in_secs)
            .finish()
    }
}

/// JWT 토큰 설정
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub access: TokenSettings,
    pub refresh: TokenSettings,
}

impl JwtConfig {
    /// 액세스 토큰 기본 만료 시간 (15분)
    pub const DEFAULT_ACCESS_EXPIRES_IN: i64 = 900;
    /// 리프레시 토큰 기본 만료 시간 (7일)
    pub const DEFAULT_REFRESH_EXPIRES_IN: i64 = 604_800;
    /// 허용하는 최대 만료 시간 (365일)
    pub const MAX_EXPIRES_IN: i64 = 31_536_000;

    /// 만료 시간이 1초 이상, [`Self::MAX_EXPIRES_IN`] 이하인지 확인
    pub fn is_valid_expires_in(secs: i64) -> bool {
        (1..=Self::MAX_EXPIRES_IN).contains(&secs)
    }
}
