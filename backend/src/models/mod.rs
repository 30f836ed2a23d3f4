pub mod place;
pub mod request;

pub use place::*;
pub use request::*;
