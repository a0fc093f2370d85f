pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "kotacari")]
#[command(about = "Letter-scramble city puzzle solver")]
pub struct CliConfig {
    #[arg(long, default_value = "data/cities.ts")]
    pub cities_file: String,

    #[arg(long, help = "Load solver settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Print a practice scramble for the given city name and exit")]
    pub scramble: Option<String>,

    #[arg(long, help = "Leave out the decoy vowels when generating a scramble")]
    pub hard: bool,

    #[arg(long, help = "Cap the number of matches printed per scramble")]
    pub max_results: Option<usize>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn cities_path(&self) -> &str {
        &self.cities_file
    }

    fn max_results(&self) -> Option<usize> {
        self.max_results
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("cities_file", &self.cities_file)?;
        if let Some(max_results) = self.max_results {
            validate_positive_number("max_results", max_results, 1)?;
        }
        Ok(())
    }
}
