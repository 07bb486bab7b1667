//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository)는 `users` 테이블을 다룹니다.

pub mod user_repo;

pub use user_repo::*;
