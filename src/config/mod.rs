pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, DocumentSchema};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "agenda-export")]
#[command(about = "Convert an XML agenda export into a text report grouped by place")]
pub struct CliConfig {
    /// Agenda export to convert (XML)
    #[arg(short, long, required_unless_present = "config")]
    pub input: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "agenda.txt")]
    pub output_file: String,

    /// TOML configuration file; replaces the other options
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the report instead of writing it
    #[arg(long)]
    pub stdout: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(skip)]
    #[serde(default)]
    pub schema: DocumentSchema,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn schema(&self) -> &DocumentSchema {
        &self.schema
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", self.input_path())?;
        validate_file_extension("input", self.input_path(), &["xml"])?;
        validate_path("output_path", &self.output_path)?;
        validate_path("output_file", &self.output_file)?;
        Ok(())
    }
}
