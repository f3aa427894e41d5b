//! Config structs for each resource kind and their wire conversions
//!
//! Each config struct reads from and writes to the attribute map of a
//! resource (`from_attributes` / `to_attributes`) and converts to and from
//! the client's wire model (`to_wire` / `from_wire`). `refresh` folds a
//! remote record into the last known config.

mod input_datagen;
mod output_s3;
mod pipeline;
mod system;

pub use input_datagen::{InputDatagenConfig, SampleConfig};
pub use output_s3::OutputS3Config;
pub use pipeline::{PipelineConfig, PipelineSummary};
pub use system::BuildConfig;
