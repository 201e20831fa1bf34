pub(crate) mod jwks;
pub(crate) mod user_data;

// re-export items from sub-modules
pub use jwks::*;
pub use user_data::*;
