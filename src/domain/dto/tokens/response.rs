use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::token::token::IssuedTokenPair;

/// 가입/로그인 성공 응답
///
/// `expiresAt`은 액세스 토큰의 만료 시각입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokensResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<IssuedTokenPair> for AuthTokensResponse {
    fn from(pair: IssuedTokenPair) -> Self {
        Self {
            access_token: pair.access.token,
            refresh_token: pair.refresh.token,
            expires_at: pair.access.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::token::token::IssuedToken;
    use chrono::Duration;

    #[test]
    fn test_expiry_comes_from_access_token() {
        let now = Utc::now();
        let pair = IssuedTokenPair {
            access: IssuedToken { token: "access".to_string(), expires_at: now + Duration::minutes(15) },
            refresh: IssuedToken { token: "refresh".to_string(), expires_at: now + Duration::days(7) },
        };

        let response = AuthTokensResponse::from(pair);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(response.expires_at, now + Duration::minutes(15));
        assert_eq!(json["accessToken"], "access");
        assert_eq!(json["refreshToken"], "refresh");
        assert!(json.get("expiresAt").is_some());
    }
}
