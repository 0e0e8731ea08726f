pub mod etl;
pub mod grouping;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod transform;

pub use crate::domain::model::{AgendaReport, DocumentSchema, EventRecord, PlaceGroup};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
pub use transform::{build_report, transform, transform_with_schema};
