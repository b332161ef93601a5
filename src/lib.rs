pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::codec::{checksum, generate, generate_with, validate};
pub use crate::core::engine::SerialEngine;
pub use crate::domain::model::{BatchReport, Serial, SerialReport};
pub use crate::utils::error::{Result, SerialError};
