//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 실패를
//! `{"error": 메시지, "code": 코드}` 형태의 JSON 응답으로 변환합니다.
//!
//! 5xx 계열 에러는 상세 원인을 로그에만 남기고 클라이언트에게는
//! 고정된 메시지만 전달합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! async fn sign_in(request: EmailPasswordSignInRequest) -> AppResult<AuthTokensResponse> {
//!     let credential = accounts.find_email_credential(&request.email).await?
//!         .ok_or(AppError::UserNotFound)?;
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 로그인 실패 시 공통 메시지
///
/// 존재하지 않는 이메일, 잘못된 비밀번호, 손상된 해시 모두 같은 메시지를 사용합니다.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "이메일 또는 비밀번호가 올바르지 않습니다";

/// 인증 게이트에서 401 응답 시 공통 메시지
pub const AUTHENTICATION_REQUIRED_MESSAGE: &str = "유효한 인증 토큰이 필요합니다";

const INTERNAL_ERROR_MESSAGE: &str = "서버 내부 오류가 발생했습니다";

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 이메일 계정 중복 (409 Conflict)
    #[error("이미 가입된 이메일입니다")]
    DuplicateEmail,

    /// 사용자명 중복 (409 Conflict)
    #[error("이미 사용 중인 사용자명입니다")]
    DuplicateUsername,

    /// 로그인 실패 (422 Unprocessable Entity)
    ///
    /// 계정 열거 공격을 막기 위해 원인과 무관하게 같은 메시지를 사용합니다.
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    UserNotFound,

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출되는 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ConflictError(_) => "CONFLICT",
            AppError::DuplicateEmail => "DUPLICATE_EMAIL",
            AppError::DuplicateUsername => "DUPLICATE_USERNAME",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::AuthenticationError(_) => "UNAUTHORIZED",
            AppError::AuthorizationError(_) => "FORBIDDEN",
            AppError::DatabaseError(_) | AppError::InternalError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// 클라이언트에게 노출되는 메시지
    ///
    /// 서버 에러는 쿼리 문자열이나 원인 체인이 새지 않도록 고정 메시지로 대체합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_)
            | AppError::DuplicateEmail
            | AppError::DuplicateUsername => StatusCode::CONFLICT,
            AppError::UserNotFound => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ {}", self);
        }

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.client_message(),
            "code": self.code(),
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
