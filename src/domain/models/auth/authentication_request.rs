use actix_web::http::Method;

use crate::domain::entities::users::user::UserRole;
use crate::domain::models::auth::authenticated_user::RequestIdentity;

/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 신원 상태와 무관하게 통과
    Public,
}

/// 요구되는 역할 정보
#[derive(Debug, Clone)]
pub enum RequiredRole {
    /// 특정 단일 역할이 필요
    Single(UserRole),
    /// 여러 역할 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<UserRole>),
}

impl RequiredRole {
    /// 사용자 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, role: UserRole) -> bool {
        match self {
            RequiredRole::Single(required) => *required == role,
            RequiredRole::Any(allowed) => allowed.contains(&role),
        }
    }
}

/// 정책 평가 결과
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccessDecision {
    Allow,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
}

/// 라우트 하나에 적용되는 접근 정책
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

impl RoutePolicy {
    pub fn public() -> Self {
        Self {
            mode: AuthMode::Public,
            required_role: None,
        }
    }

    pub fn authenticated() -> Self {
        Self {
            mode: AuthMode::Required,
            required_role: None,
        }
    }

    /// 나열된 역할 중 하나를 요구하는 정책
    pub fn roles(roles: &[UserRole]) -> Self {
        let required_role = match roles {
            [single] => RequiredRole::Single(*single),
            _ => RequiredRole::Any(roles.to_vec()),
        };

        Self {
            mode: AuthMode::Required,
            required_role: Some(required_role),
        }
    }

    /// 요청 신원에 정책을 적용합니다.
    ///
    /// 인증 요구를 먼저 확인하고, 역할 요구는 그 다음에 별도로 확인합니다.
    pub fn evaluate(&self, identity: &RequestIdentity) -> AccessDecision {
        if self.mode == AuthMode::Required && !identity.is_authenticated() {
            return AccessDecision::Unauthorized;
        }

        match (&self.required_role, identity.role()) {
            (None, _) => AccessDecision::Allow,
            (Some(required), Some(role)) if required.is_satisfied(role) => AccessDecision::Allow,
            (Some(_), _) => AccessDecision::Forbidden,
        }
    }
}

/// `{param}` 세그먼트를 지원하는 경로 패턴
#[derive(Debug, Clone)]
struct PathPattern {
    segments: Vec<String>,
}

impl PathPattern {
    fn parse(pattern: &str) -> Self {
        Self {
            segments: split_path(pattern).map(str::to_string).collect(),
        }
    }

    fn matches(&self, path: &str) -> bool {
        let mut actual = split_path(path);

        for expected in &self.segments {
            match actual.next() {
                Some(segment) if is_param(expected) || segment == expected => {}
                _ => return false,
            }
        }

        actual.next().is_none()
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn is_param(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

#[derive(Debug, Clone)]
struct PolicyEntry {
    method: Method,
    pattern: PathPattern,
    policy: RoutePolicy,
}

/// 라우트 → 접근 정책 매핑 테이블
///
/// 등록 순서대로 비교하여 처음 일치하는 정책을 사용합니다.
/// 일치하는 항목이 없으면 기본 정책(인증 필요, 역할 무관)이 적용됩니다.
///
/// ```rust,ignore
/// let policies = RoutePolicyTable::new()
///     .public(Method::POST, "/auth/sign-in/email-password")
///     .route(Method::GET, "/users/{user_id}", RoutePolicy::roles(&[UserRole::Admin]));
/// ```
#[derive(Debug, Clone)]
pub struct RoutePolicyTable {
    entries: Vec<PolicyEntry>,
    fallback: RoutePolicy,
}

impl RoutePolicyTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            fallback: RoutePolicy::authenticated(),
        }
    }

    pub fn route(mut self, method: Method, pattern: &str, policy: RoutePolicy) -> Self {
        self.entries.push(PolicyEntry {
            method,
            pattern: PathPattern::parse(pattern),
            policy,
        });
        self
    }

    pub fn public(self, method: Method, pattern: &str) -> Self {
        self.route(method, pattern, RoutePolicy::public())
    }

    pub fn resolve(&self, method: &Method, path: &str) -> &RoutePolicy {
        self.entries
            .iter()
            .find(|entry| entry.method == *method && entry.pattern.matches(path))
            .map(|entry| &entry.policy)
            .unwrap_or(&self.fallback)
    }
}

impl Default for RoutePolicyTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::UserStatus;
    use crate::domain::models::token::token::{JwtPayload, TokenClaims};

    fn identity(role: UserRole) -> RequestIdentity {
        RequestIdentity::Authenticated(TokenClaims {
            payload: JwtPayload {
                sub: "user-1".to_string(),
                email: None,
                role,
                status: UserStatus::Processing,
            },
            jti: "token-1".to_string(),
            iat: 0,
            exp: 60,
        })
    }

    #[test]
    fn test_required_role_single() {
        let required = RequiredRole::Single(UserRole::Admin);

        assert!(required.is_satisfied(UserRole::Admin));
        assert!(!required.is_satisfied(UserRole::User));
    }

    #[test]
    fn test_required_role_any() {
        let required = RequiredRole::Any(vec![UserRole::Admin, UserRole::Tutor]);

        assert!(required.is_satisfied(UserRole::Admin));
        assert!(required.is_satisfied(UserRole::Tutor));
        assert!(!required.is_satisfied(UserRole::User));
    }

    #[test]
    fn test_public_policy_allows_anyone() {
        let policy = RoutePolicy::public();

        assert_eq!(policy.evaluate(&RequestIdentity::Anonymous), AccessDecision::Allow);
        assert_eq!(policy.evaluate(&identity(UserRole::User)), AccessDecision::Allow);
    }

    #[test]
    fn test_authenticated_policy() {
        let policy = RoutePolicy::authenticated();

        assert_eq!(policy.evaluate(&RequestIdentity::Anonymous), AccessDecision::Unauthorized);
        assert_eq!(policy.evaluate(&identity(UserRole::User)), AccessDecision::Allow);
    }

    #[test]
    fn test_role_policy_distinguishes_unauthorized_and_forbidden() {
        let policy = RoutePolicy::roles(&[UserRole::Admin]);

        assert_eq!(policy.evaluate(&RequestIdentity::Anonymous), AccessDecision::Unauthorized);
        assert_eq!(policy.evaluate(&identity(UserRole::User)), AccessDecision::Forbidden);
        assert_eq!(policy.evaluate(&identity(UserRole::Admin)), AccessDecision::Allow);
    }

    #[test]
    fn test_table_resolution_order_and_fallback() {
        let table = RoutePolicyTable::new()
            .public(Method::POST, "/auth/sign-in/email-password")
            .route(Method::GET, "/users/me", RoutePolicy::authenticated())
            .route(Method::GET, "/users/{user_id}", RoutePolicy::roles(&[UserRole::Admin]));

        assert_eq!(
            table.resolve(&Method::POST, "/auth/sign-in/email-password").mode,
            AuthMode::Public
        );
        assert!(table.resolve(&Method::GET, "/users/me").required_role.is_none());
        assert!(table.resolve(&Method::GET, "/users/abc-123").required_role.is_some());

        // 메서드가 다르면 기본 정책
        let fallback = table.resolve(&Method::GET, "/auth/sign-in/email-password");
        assert_eq!(fallback.mode, AuthMode::Required);
        assert!(table.resolve(&Method::GET, "/users/abc/extra").required_role.is_none());
    }

    #[test]
    fn test_path_pattern_matching() {
        let pattern = PathPattern::parse("/users/{user_id}");

        assert!(pattern.matches("/users/42"));
        assert!(pattern.matches("/users/42/"));
        assert!(!pattern.matches("/users"));
        assert!(!pattern.matches("/accounts/42"));
    }
}
