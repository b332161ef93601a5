pub mod codec;
pub mod engine;

pub use crate::domain::model::{BatchReport, Serial, SerialReport};
pub use crate::utils::error::Result;
