//! # User Data Transfer Objects Module
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── sign_up_request.rs   # POST /auth/sign-up/email-password
//! │   └── sign_in_request.rs   # POST /auth/sign-in/email-password
//! └── response/
//!     └── user_response.rs     # GET /users/me, GET /users/{user_id}
//! ```
//!
//! 요청 DTO는 `validator`로 검증되며, 검증 실패는 부수 효과 없이
//! `AppError::ValidationError`(400)로 반환됩니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
