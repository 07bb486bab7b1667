//! # Data Transfer Objects
//!
//! API 경계의 요청/응답 형식입니다.
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/   - 이메일 가입/로그인 요청
//! │   └── response/  - 사용자 프로필 응답
//! └── tokens/        - 토큰 발급 응답
//! ```

pub mod users;
pub mod tokens;

pub use users::*;
pub use tokens::*;
