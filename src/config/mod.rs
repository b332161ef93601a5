use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "gsim-serial")]
#[command(about = "Serial number generator and validator for the gsim kneeboard server")]
pub struct CliConfig {
    #[arg(default_value_t = 1, help = "Number of serials to generate")]
    pub count: usize,

    #[arg(
        long,
        value_name = "SERIAL",
        help = "Validate an existing serial instead of generating"
    )]
    pub check: Option<String>,

    #[arg(long, help = "Emit results as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("count", self.count, 1, 100_000)?;
        Ok(())
    }
}
