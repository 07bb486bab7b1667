//! JWT 인증 미들웨어
//!
//! 모든 요청에 대해 Bearer 토큰을 검증해 [`RequestIdentity`]를 확정하고,
//! 라우트 정책 테이블에 따라 요청을 통과시키거나 401/403으로 종료합니다.
//!
//! [`RequestIdentity`]: crate::domain::models::auth::RequestIdentity

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::authentication_request::RoutePolicyTable;
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    policies: Arc<RoutePolicyTable>,
    tokens: Arc<TokenService>,
}

impl AuthMiddleware {
    pub fn new(policies: Arc<RoutePolicyTable>, tokens: Arc<TokenService>) -> Self {
        Self { policies, tokens }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            policies: self.policies.clone(),
            tokens: self.tokens.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{Method, StatusCode};
    use actix_governor::{Governor, GovernorConfigBuilder};
    use actix_web::{test, web, App, HttpResponse};
    use std::net::SocketAddr;

    use crate::config::{JwtConfig, TokenSettings};
    use crate::domain::entities::users::user::{UserRole, UserStatus};
    use crate::domain::models::auth::authenticated_user::RequestIdentity;
    use crate::domain::models::auth::authentication_request::RoutePolicy;
    use crate::domain::models::token::token::{JwtPayload, TokenKind};

    fn tokens(access_expires_in: i64) -> Arc<TokenService> {
        Arc::new(TokenService::new(JwtConfig {
            access: TokenSettings {
                secret: "access-secret".to_string(),
                expires_in_secs: access_expires_in,
            },
            refresh: TokenSettings {
                secret: "refresh-secret".to_string(),
                expires_in_secs: 3600,
            },
        }))
    }

    fn policies() -> Arc<RoutePolicyTable> {
        Arc::new(
            RoutePolicyTable::new()
                .public(Method::GET, "/open")
                .route(Method::GET, "/admin", RoutePolicy::roles(&[UserRole::Admin])),
        )
    }

    fn bearer(tokens: &TokenService, role: UserRole, kind: TokenKind) -> String {
        let payload = JwtPayload {
            sub: "user-1".to_string(),
            email: None,
            role,
            status: UserStatus::Completed,
        };
        format!("Bearer {}", tokens.issue(&payload, kind).unwrap().token)
    }

    async fn describe(identity: RequestIdentity) -> HttpResponse {
        match identity {
            RequestIdentity::Authenticated(claims) => HttpResponse::Ok().body(claims.payload.sub),
            RequestIdentity::Anonymous => HttpResponse::Ok().body("anonymous"),
        }
    }

    macro_rules! gated_app {
        ($tokens:expr) => {
            test::init_service(
                App::new()
                    .wrap(AuthMiddleware::new(policies(), $tokens))
                    .route("/open", web::get().to(describe))
                    .route("/private", web::get().to(describe))
                    .route("/admin", web::get().to(describe)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_public_route_without_token_is_anonymous() {
        let app = gated_app!(tokens(900));

        let req = test::TestRequest::get().uri("/open").to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "anonymous");
    }

    #[actix_web::test]
    async fn test_private_route_without_token_is_unauthorized() {
        let app = gated_app!(tokens(900));

        let req = test::TestRequest::get().uri("/private").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "UNAUTHORIZED");
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let tokens = tokens(900);
        let header = bearer(&tokens, UserRole::User, TokenKind::Access);
        let app = gated_app!(tokens);

        let req = test::TestRequest::get()
            .uri("/private")
            .insert_header(("Authorization", header))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "user-1");
    }

    #[actix_web::test]
    async fn test_public_route_still_attaches_identity() {
        let tokens = tokens(900);
        let header = bearer(&tokens, UserRole::User, TokenKind::Access);
        let app = gated_app!(tokens);

        let req = test::TestRequest::get()
            .uri("/open")
            .insert_header(("Authorization", header))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "user-1");
    }

    #[actix_web::test]
    async fn test_expired_and_refresh_tokens_are_unauthorized() {
        let expired = tokens(-3600);
        let expired_header = bearer(&expired, UserRole::User, TokenKind::Access);
        let refresh_header = bearer(&expired, UserRole::User, TokenKind::Refresh);
        let app = gated_app!(expired);

        for header in [expired_header, refresh_header, "Token abc".to_string()] {
            let req = test::TestRequest::get()
                .uri("/private")
                .insert_header(("Authorization", header))
                .to_request();
            let res = test::call_service(&app, req).await;

            assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[actix_web::test]
    async fn test_role_mismatch_is_forbidden() {
        let tokens = tokens(900);
        let user_header = bearer(&tokens, UserRole::User, TokenKind::Access);
        let admin_header = bearer(&tokens, UserRole::Admin, TokenKind::Access);
        let app = gated_app!(tokens);

        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(("Authorization", user_header))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(("Authorization", admin_header))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_gate_wraps_rate_limiter_with_headers() {
        let governor_conf = GovernorConfigBuilder::default()
            .requests_per_second(10)
            .burst_size(5)
            .use_headers()
            .finish()
            .unwrap();
        let app = test::init_service(
            App::new()
                .wrap(Governor::new(&governor_conf))
                .wrap(AuthMiddleware::new(policies(), tokens(900)))
                .route("/open", web::get().to(describe))
                .route("/private", web::get().to(describe)),
        )
        .await;
        let peer: SocketAddr = "127.0.0.1:40000".parse().unwrap();

        let req = test::TestRequest::get().uri("/open").peer_addr(peer).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key("x-ratelimit-remaining"));

        let req = test::TestRequest::get().uri("/private").peer_addr(peer).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
