pub mod batch;
pub mod config;
pub mod error;
pub mod label;
pub mod pipeline;
pub mod record;
pub mod stage;

pub use batch::{demo_records, parse_argument, parse_records, BatchReport, Classified};
pub use config::{Config, OutputConfig, OutputFormat, PipelineConfig};
pub use error::{Result, StageclassError};
pub use label::Label;
pub use pipeline::{classify, Pipeline, Step, Trace};
pub use record::{wrap_value, Input, Integer, Payload, Record, VALUE_FIELD};
pub use stage::Stage;
