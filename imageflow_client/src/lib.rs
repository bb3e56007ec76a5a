//! Client-side pipeline builder and job runner for a JSON-driven image
//! processing engine.
//!
//! Workflows are assembled as chains of operations, either in the
//! straight-line `steps` form ([`LinearPipeline`]) or the explicit
//! vertex/edge `graph` form ([`GraphPipeline`], which supports branching
//! and multi-input composition). Executing a pipeline serializes it to the
//! engine's wire format, moves input and output bytes through numbered
//! I/O slots, and normalizes the response envelope.
//!
//! The engine itself sits behind the [`Engine`]/[`EngineJob`] traits, so
//! the same pipelines run against an in-process engine or a remote one.
//!
//! ```no_run
//! use imageflow_client::{BufferSource, GraphPipeline, OutputShortcuts};
//! use imageflow_client::builder::presets;
//!
//! # async fn demo<E: imageflow_client::Engine>(engine: &E, bytes: Vec<u8>)
//! #     -> imageflow_client::Result<()> {
//! let mut pipeline = GraphPipeline::with_source(BufferSource::new(bytes), None)?;
//! pipeline
//!     .constrain_within(Some(400), Some(400))?
//!     .to_buffer(presets::mozjpeg(Some(85), None, None), "thumb")?;
//! let result = pipeline.execute(engine).await?;
//! let jpeg = &result.buffers["thumb"];
//! # let _ = jpeg;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod client;
pub mod errors;
mod graph;
pub mod io;
pub mod job;

pub use imageflow_client_types as types;

pub use builder::{
    CanvasRect, DecodeOptions, ExecuteResult, GraphPipeline, LinearPipeline, OutputShortcuts,
    PipelineResult, WatermarkOptions,
};
pub use client::{get_image_info, get_version_info};
pub use errors::{ClientError, Result};
pub use io::{
    BufferDestination, BufferSource, FileIo, IoDestination, IoSource, ReaderSource, UrlIo,
    WriterDestination,
};
pub use job::{Engine, EngineJob, JobExecutor};
