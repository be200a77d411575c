pub mod constants;
mod status;

pub use status::*;
