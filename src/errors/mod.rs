mod flow;
mod jwks;
mod user_data;

pub use flow::*;
pub use jwks::*;
pub use user_data::*;
