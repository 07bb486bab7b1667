//! Session Entity Implementation

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::models::auth::client_info::ClientInfo;
use crate::domain::models::token::token::IssuedToken;

/// 로그인 세션 엔티티
///
/// 발급된 리프레시 토큰 하나와 그 토큰을 받은 클라이언트 정보를 묶습니다.
/// 가입/로그인 성공 시마다 새 행이 추가되며, 이전 세션은 그대로 남습니다.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    pub id: String,
    /// 리프레시 토큰 (unique)
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub user_id: String,
    pub account_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: String, account_id: String, refresh: &IssuedToken, client: &ClientInfo) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            token: refresh.token.clone(),
            expires_at: refresh.expires_at,
            ip_address: client.ip.clone(),
            user_agent: client.user_agent.clone(),
            user_id,
            account_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_session_copies_refresh_token_and_client() {
        let refresh = IssuedToken {
            token: "refresh.jwt.value".to_string(),
            expires_at: Utc::now() + Duration::days(7),
        };
        let client = ClientInfo {
            ip: Some("10.0.0.1".to_string()),
            user_agent: Some("curl/8.0".to_string()),
        };

        let session = Session::new("user-1".to_string(), "account-1".to_string(), &refresh, &client);

        assert_eq!(session.token, "refresh.jwt.value");
        assert_eq!(session.expires_at, refresh.expires_at);
        assert_eq!(session.ip_address.as_deref(), Some("10.0.0.1"));
        assert_eq!(session.user_agent.as_deref(), Some("curl/8.0"));
        assert!(session.expires_at > session.created_at);
    }
}
