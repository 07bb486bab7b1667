//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::authenticated_user::RequestIdentity;
use crate::domain::models::auth::authentication_request::{AccessDecision, RoutePolicyTable};
use crate::domain::models::token::token::TokenKind;
use crate::errors::{AppError, AUTHENTICATION_REQUIRED_MESSAGE};
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub policies: Arc<RoutePolicyTable>,
    pub tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let identity = resolve_identity(&req, &self.tokens);
        let decision = self
            .policies
            .resolve(req.method(), req.path())
            .evaluate(&identity);

        Box::pin(async move {
            let rejection = match decision {
                AccessDecision::Allow => None,
                AccessDecision::Unauthorized => {
                    log::debug!("인증 필요: {} {}", req.method(), req.path());
                    Some(AppError::AuthenticationError(
                        AUTHENTICATION_REQUIRED_MESSAGE.to_string(),
                    ))
                }
                AccessDecision::Forbidden => {
                    log::warn!(
                        "권한 부족: {} {} (role: {:?})",
                        req.method(),
                        req.path(),
                        identity.role()
                    );
                    Some(AppError::AuthorizationError("접근 권한이 부족합니다".to_string()))
                }
            };

            if let Some(error) = rejection {
                let response = error.error_response();
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            }

            // 신원 상태를 Request Extensions에 저장
            req.extensions_mut().insert(identity);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// `Authorization` 헤더의 액세스 토큰으로 신원 상태를 결정합니다.
///
/// 헤더 없음, 형식 오류, 검증 실패는 모두 `Anonymous`입니다.
fn resolve_identity(req: &ServiceRequest, tokens: &TokenService) -> RequestIdentity {
    let Some(token) = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(TokenService::extract_bearer_token)
    else {
        return RequestIdentity::Anonymous;
    };

    match tokens.verify(token, TokenKind::Access) {
        Ok(claims) => RequestIdentity::Authenticated(claims),
        Err(_) => RequestIdentity::Anonymous,
    }
}
