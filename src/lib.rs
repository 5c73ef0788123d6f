pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod path_data;
pub mod tessellation;

pub use error::{CurvemorphError, Result};
