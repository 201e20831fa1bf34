pub mod auth_method;
pub mod claims;
pub mod credential;
pub mod providers;
pub mod user_data;

pub use auth_method::*;
pub use claims::*;
pub use credential::*;
pub use providers::*;
pub use user_data::*;
