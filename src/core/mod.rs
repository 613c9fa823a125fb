pub mod arithmetic;
pub mod reader;

pub use crate::utils::error::Result;
