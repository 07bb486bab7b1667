pub mod response;

pub use response::AuthTokensResponse;
