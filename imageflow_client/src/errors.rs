//! Error taxonomy for the client.
//!
//! Builder misuse surfaces synchronously at the call site; engine-reported
//! failures surface from `execute`/`get_image_info` after the response
//! envelope is parsed. No retries happen at this layer.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// A vertex id was registered twice in the graph builder.
    #[error("vertex {id} is already present")]
    DuplicateVertex { id: i32 },

    /// An edge referenced a vertex that was never registered.
    #[error("vertex {id} not found in graph")]
    UnknownVertex { id: i32 },

    /// An operation was requested before any decode node existed.
    #[error("decode must be the first node in the graph")]
    MissingDecode,

    /// The linear pipeline was executed without an encoder preset.
    #[error("no encoder preset specified; call encode_to() or pass one to execute()")]
    MissingPreset,

    /// A decode-options setter was invoked twice for the same option kind.
    #[error("duplicate decoder option: {option}")]
    DuplicateOption { option: &'static str },

    /// The job handle already has a call in flight.
    #[error("job is already running a call")]
    Busy,

    /// The engine reported `success: false`; code and message verbatim.
    #[error("engine error {code}: {message}")]
    Engine { code: i64, message: String },

    /// The engine answered successfully but with an unexpected payload tag.
    #[error("unexpected response payload, expected {expected}")]
    UnexpectedPayload { expected: &'static str },

    #[error("invalid response json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Upstream answered a byte fetch/store with a non-success status.
    #[error("upstream returned status {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    /// Transport-level engine failure reported by the handle itself.
    #[error("engine transport failure: {0}")]
    Transport(String),
}

impl ClientError {
    /// Maps a non-success response envelope to an error; `None` on success.
    pub fn from_response(response: &imageflow_client_types::Response001) -> Option<ClientError> {
        if response.success {
            return None;
        }
        Some(ClientError::Engine {
            code: response.code,
            message: response
                .message
                .clone()
                .unwrap_or_else(|| "unknown error".to_owned()),
        })
    }
}
