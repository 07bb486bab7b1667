//! API 라우트 설정 모듈
//!
//! 엔드포인트 등록과 인증 게이트가 사용하는 라우트 정책 테이블을 함께 정의합니다.
//! 새 라우트를 추가할 때는 [`route_policies`]에도 정책을 등록해야 하며,
//! 등록하지 않은 라우트는 인증 필수로 취급됩니다.
//!
//! | Method | Path | Policy |
//! |---|---|---|
//! | GET | `/health` | public |
//! | POST | `/auth/sign-up/email-password` | public |
//! | POST | `/auth/sign-in/email-password` | public |
//! | GET | `/users/me` | 인증 필요 |
//! | GET | `/users/{user_id}` | ADMIN |

use actix_web::http::Method;
use actix_web::{error::JsonPayloadError, web, HttpRequest};
use serde_json::json;

use crate::core::context::AppContext;
use crate::domain::entities::users::user::UserRole;
use crate::domain::models::auth::authentication_request::{RoutePolicy, RoutePolicyTable};
use crate::errors::AppError;
use crate::handlers;

/// 모든 라우트와 공유 상태를 등록합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let app = App::new().configure(|cfg| configure_all_routes(cfg, &ctx));
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, ctx: &AppContext) {
    cfg.app_data(web::Data::from(ctx.credentials.clone()))
        .app_data(web::Data::from(ctx.users.clone()))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler));

    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
}

/// 인증 게이트의 라우트 정책 테이블
pub fn route_policies() -> RoutePolicyTable {
    RoutePolicyTable::new()
        .public(Method::GET, "/health")
        .public(Method::POST, "/auth/sign-up/email-password")
        .public(Method::POST, "/auth/sign-in/email-password")
        .route(Method::GET, "/users/me", RoutePolicy::authenticated())
        .route(Method::GET, "/users/{user_id}", RoutePolicy::roles(&[UserRole::Admin]))
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::sign_up_email_password)
            .service(handlers::auth::sign_in_email_password),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            // `/me`가 `/{user_id}`보다 먼저 매칭되어야 함
            .service(handlers::users::get_me)
            .service(handlers::users::get_user),
    );
}

/// JSON 본문 파싱 실패를 400 `VALIDATION_ERROR`로 변환합니다.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
}

/// 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "storefront_auth",
///   "version": "0.1.0",
///   "timestamp": "2024-09-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
