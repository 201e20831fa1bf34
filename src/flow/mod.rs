pub mod controller;
pub mod step;

pub use controller::*;
pub use step::*;
