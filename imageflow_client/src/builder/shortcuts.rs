//! Destination shortcuts layered on [`GraphPipeline::encode`].

use crate::builder::graph::GraphPipeline;
use crate::errors::Result;
use crate::io::{BufferDestination, FileIo, WriterDestination};
use imageflow_client_types as s;
use std::path::Path;
use tokio::io::AsyncWrite;

/// Encode-to-destination conveniences. A blanket impl covers
/// [`GraphPipeline`]; the trait exists so callers can layer their own
/// destination kinds without touching the pipeline itself.
pub trait OutputShortcuts {
    fn encode_with(
        &mut self,
        dest: crate::io::BoxedDestination,
        preset: s::EncoderPreset,
    ) -> Result<&mut Self>;

    /// Encode into a file on disk.
    fn to_file(
        &mut self,
        preset: s::EncoderPreset,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.encode_with(Box::new(FileIo::new(path)), preset)
    }

    /// Encode into an in-memory buffer surfaced under `key` in the
    /// execute result.
    fn to_buffer(&mut self, preset: s::EncoderPreset, key: &str) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.encode_with(Box::new(BufferDestination::named(key)), preset)
    }

    /// Encode into any async writer.
    fn to_writer(
        &mut self,
        preset: s::EncoderPreset,
        writer: impl AsyncWrite + Send + Unpin + 'static,
    ) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.encode_with(Box::new(WriterDestination::new(writer)), preset)
    }
}

impl OutputShortcuts for GraphPipeline {
    fn encode_with(
        &mut self,
        dest: crate::io::BoxedDestination,
        preset: s::EncoderPreset,
    ) -> Result<&mut Self> {
        self.encode(dest, preset)
    }
}
