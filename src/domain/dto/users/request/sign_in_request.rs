//! 이메일 로그인 요청 DTO
use serde::Deserialize;
use validator::Validate;

/// `POST /auth/sign-in/email-password` 요청 본문
#[derive(Deserialize, Validate)]
pub struct EmailPasswordSignInRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_validation() {
        let ok = EmailPasswordSignInRequest {
            email: "a@x.com".to_string(),
            password: "wrong".to_string(),
        };
        let empty_password = EmailPasswordSignInRequest {
            email: "a@x.com".to_string(),
            password: String::new(),
        };

        assert!(ok.validate().is_ok());
        assert!(empty_password.validate().is_err());
    }
}
