use std::convert::Infallible;
use std::future::{ready, Ready};

use actix_web::http::header::{self, HeaderMap};
use actix_web::{FromRequest, HttpRequest};

/// 세션에 기록하는 클라이언트 정보
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientInfo {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl ClientInfo {
    /// 요청에서 클라이언트 IP와 User-Agent를 읽습니다.
    ///
    /// IP 우선순위: `CF-Connecting-IP` → `X-Real-IP` → `Forwarded` / `X-Forwarded-For` → 소켓 주소
    pub fn from_http_request(req: &HttpRequest) -> Self {
        let headers = req.headers();

        let ip = header_value(headers, "cf-connecting-ip")
            .or_else(|| header_value(headers, "x-real-ip"))
            .or_else(|| {
                req.connection_info()
                    .realip_remote_addr()
                    .map(str::to_string)
            });

        Self {
            ip,
            user_agent: header_value(headers, header::USER_AGENT.as_str()),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl FromRequest for ClientInfo {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(ClientInfo::from_http_request(req)))
    }
}
