//! # Core Module
//!
//! 애플리케이션 조립을 담당합니다.
//!
//! ### [`context`] - 애플리케이션 컨텍스트
//! - 설정과 데이터베이스로부터 모든 서비스를 한 번 생성
//! - 서비스는 `Arc`로 공유되며 요청 간 가변 상태가 없음
//! - 인증 게이트가 사용할 라우트 정책 테이블 보관

pub mod context;

pub use context::*;
