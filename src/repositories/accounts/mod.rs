//! 로그인 수단(계정) 데이터 액세스 계층

pub mod account_repo;

pub use account_repo::*;
