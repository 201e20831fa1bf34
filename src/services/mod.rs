pub mod demo_user_data;
pub mod jwks;
pub mod partner_jwt;
pub mod token_service;

pub use demo_user_data::*;
pub use jwks::*;
pub use partner_jwt::*;
pub use token_service::*;
