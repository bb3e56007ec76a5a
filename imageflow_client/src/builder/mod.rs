//! Pipeline builders and option/preset constructors.

pub mod decode_options;
pub mod graph;
pub mod linear;
pub mod presets;
pub mod shortcuts;

pub use decode_options::DecodeOptions;
pub use graph::{CanvasRect, ExecuteResult, GraphPipeline, WatermarkOptions};
pub use linear::{LinearPipeline, PipelineResult};
pub use shortcuts::OutputShortcuts;
