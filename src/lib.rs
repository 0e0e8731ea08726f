pub mod config;
pub mod core;
pub mod domain;
pub mod rules;
pub mod utils;

pub use config::cli::LocalStorage;
pub use config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    etl::EtlEngine, pipeline::AgendaPipeline, transform, transform_with_schema,
};
pub use domain::model::{AgendaReport, DocumentSchema, EventRecord, PlaceGroup};
pub use rules::normalize_text;
pub use utils::error::{AgendaError, Result};
