//! Byte source/destination contract for pipeline inputs and outputs.
//!
//! A pipeline input only needs to produce bytes; an output only needs to
//! consume them (optionally exposing a key so the executor can collect the
//! bytes into the named-buffer map). Adapters cover in-memory buffers,
//! files, async readers/writers, and URLs fetched/POSTed over HTTP.

use crate::errors::{ClientError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Produces the input bytes for one decode slot.
#[async_trait]
pub trait IoSource: Send {
    async fn fetch_bytes(&mut self) -> Result<Vec<u8>>;
}

/// Consumes the encoded bytes of one output slot.
#[async_trait]
pub trait IoDestination: Send {
    /// Key under which the executor should expose these bytes in the
    /// result's named-buffer map, if any.
    fn result_key(&self) -> Option<&str> {
        None
    }

    async fn deliver_bytes(&mut self, bytes: &[u8]) -> Result<()>;
}

pub type BoxedSource = Box<dyn IoSource>;
pub type BoxedDestination = Box<dyn IoDestination>;

#[async_trait]
impl IoSource for BoxedSource {
    async fn fetch_bytes(&mut self) -> Result<Vec<u8>> {
        (**self).fetch_bytes().await
    }
}

#[async_trait]
impl IoDestination for BoxedDestination {
    fn result_key(&self) -> Option<&str> {
        (**self).result_key()
    }

    async fn deliver_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).deliver_bytes(bytes).await
    }
}

/// A source or destination bound to its engine slot. Direction is implied
/// by which pipeline list holds it.
pub(crate) struct Bound<T: ?Sized> {
    pub io_id: i32,
    pub io: Box<T>,
}

impl<T: ?Sized> Bound<T> {
    pub fn new(io_id: i32, io: Box<T>) -> Bound<T> {
        Bound { io_id, io }
    }
}

/// In-memory input bytes.
pub struct BufferSource {
    bytes: Vec<u8>,
}

impl BufferSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> BufferSource {
        BufferSource {
            bytes: bytes.into(),
        }
    }
}

#[async_trait]
impl IoSource for BufferSource {
    async fn fetch_bytes(&mut self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// Collects output bytes into the result's named-buffer map. An unnamed
/// destination accepts and discards its bytes.
pub struct BufferDestination {
    key: Option<String>,
}

impl BufferDestination {
    pub fn named(key: impl Into<String>) -> BufferDestination {
        BufferDestination {
            key: Some(key.into()),
        }
    }

    pub fn discard() -> BufferDestination {
        BufferDestination { key: None }
    }
}

#[async_trait]
impl IoDestination for BufferDestination {
    fn result_key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    async fn deliver_bytes(&mut self, _bytes: &[u8]) -> Result<()> {
        Ok(())
    }
}

/// Reads from or writes to a file path.
pub struct FileIo {
    path: PathBuf,
}

impl FileIo {
    pub fn new(path: impl AsRef<Path>) -> FileIo {
        FileIo {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl IoSource for FileIo {
    async fn fetch_bytes(&mut self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}

#[async_trait]
impl IoDestination for FileIo {
    async fn deliver_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

/// Drains an async reader into the input slot.
pub struct ReaderSource {
    reader: Box<dyn AsyncRead + Send + Unpin>,
}

impl ReaderSource {
    pub fn new(reader: impl AsyncRead + Send + Unpin + 'static) -> ReaderSource {
        ReaderSource {
            reader: Box::new(reader),
        }
    }
}

#[async_trait]
impl IoSource for ReaderSource {
    async fn fetch_bytes(&mut self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes).await?;
        Ok(bytes)
    }
}

/// Writes the output slot to an async writer, then shuts it down.
pub struct WriterDestination {
    writer: Box<dyn AsyncWrite + Send + Unpin>,
}

impl WriterDestination {
    pub fn new(writer: impl AsyncWrite + Send + Unpin + 'static) -> WriterDestination {
        WriterDestination {
            writer: Box::new(writer),
        }
    }
}

#[async_trait]
impl IoDestination for WriterDestination {
    async fn deliver_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes).await?;
        self.writer.shutdown().await?;
        Ok(())
    }
}

/// Fetches input bytes with GET, or POSTs output bytes back.
pub struct UrlIo {
    url: String,
    client: reqwest::Client,
}

impl UrlIo {
    pub fn new(url: impl Into<String>) -> UrlIo {
        UrlIo {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl IoSource for UrlIo {
    async fn fetch_bytes(&mut self) -> Result<Vec<u8>> {
        log::debug!("fetching input bytes from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::UpstreamStatus {
                status: response.status().as_u16(),
                url: self.url.clone(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl IoDestination for UrlIo {
    async fn deliver_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        log::debug!("posting {} output bytes to {}", bytes.len(), self.url);
        let response = self
            .client
            .post(&self.url)
            .body(bytes.to_vec())
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::UpstreamStatus {
                status: response.status().as_u16(),
                url: self.url.clone(),
            });
        }
        Ok(())
    }
}
