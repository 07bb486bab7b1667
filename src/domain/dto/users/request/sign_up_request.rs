//! 이메일 회원가입 요청 DTO
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::services::auth::password_service::MAX_PASSWORD_BYTES;
use crate::utils::string_utils::deserialize_trimmed_string;

/// `POST /auth/sign-up/email-password` 요청 본문
///
/// 비밀번호 평문이 로그에 남지 않도록 `Debug`를 구현하지 않습니다.
#[derive(Deserialize, Validate)]
pub struct EmailPasswordSignUpRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (8자 이상, UTF-8 기준 71바이트 이하)
    #[validate(length(min = 8, message = "비밀번호는 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_bytes"))]
    pub password: String,

    /// 표시 이름 (앞뒤 공백 제거 후 1-50자)
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    /// 사용자명 (3-30자, 영문/숫자/언더스코어만 허용)
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 3, max = 30, message = "사용자명은 3-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,
}

/// bcrypt 입력 한도 검증
///
/// bcrypt는 NUL 종료 문자를 포함해 72바이트 이후를 무시하므로
/// 글자 수가 아니라 바이트 수로 제한합니다.
fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long")
            .with_message(format!("비밀번호는 {}바이트를 넘을 수 없습니다", MAX_PASSWORD_BYTES).into()));
    }
    Ok(())
}

/// 사용자명 형식 검증 (영문, 숫자, 언더스코어만 허용)
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str, name: &str, username: &str) -> EmailPasswordSignUpRequest {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "name": name,
            "username": username,
        });
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let req = request("a@x.com", "secret123", " A ", "auser");

        assert!(req.validate().is_ok());
        assert_eq!(req.name, "A");
    }

    #[test]
    fn test_invalid_email_rejected() {
        assert!(request("not-an-email", "secret123", "A", "auser").validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        assert!(request("a@x.com", "short", "A", "auser").validate().is_err());
    }

    #[test]
    fn test_password_limit_counts_bytes() {
        // 3바이트 문자 23개 + 2바이트 = 71바이트
        let at_limit = format!("{}ab", "가".repeat(23));
        let multibyte = format!("{}{}", "가".repeat(30), "A".repeat(30));

        assert!(request("a@x.com", &at_limit, "A", "auser").validate().is_ok());
        assert!(request("a@x.com", &format!("{}a", at_limit), "A", "auser").validate().is_err());
        assert!(request("a@x.com", &multibyte, "A", "auser").validate().is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(request("a@x.com", "secret123", "   ", "auser").validate().is_err());
    }

    #[test]
    fn test_username_charset() {
        assert!(request("a@x.com", "secret123", "A", "a_user_1").validate().is_ok());
        assert!(request("a@x.com", "secret123", "A", "a user").validate().is_err());
        assert!(request("a@x.com", "secret123", "A", "사용자명").validate().is_err());
    }

    #[test]
    fn test_missing_field_fails_deserialization() {
        let body = serde_json::json!({ "email": "a@x.com", "password": "secret123" });
        assert!(serde_json::from_value::<EmailPasswordSignUpRequest>(body).is_err());
    }
}
