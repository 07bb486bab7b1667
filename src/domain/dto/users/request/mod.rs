pub mod sign_up_request;
pub mod sign_in_request;

pub use sign_up_request::EmailPasswordSignUpRequest;
pub use sign_in_request::EmailPasswordSignInRequest;
