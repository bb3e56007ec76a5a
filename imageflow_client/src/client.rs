//! One-shot engine queries that do not build a frame graph.

use crate::errors::{ClientError, Result};
use crate::io::IoSource;
use crate::job::{endpoints, Engine, JobExecutor};
use imageflow_client_types as s;

/// Decodes just enough of `source` to report its dimensions, pixel
/// format, and preferred encoding.
pub async fn get_image_info<E: Engine>(
    engine: &E,
    mut source: impl IoSource + 'static,
) -> Result<s::ImageInfo> {
    let executor = JobExecutor::for_engine(engine)?;
    let run = async {
        let bytes = source.fetch_bytes().await?;
        executor.add_input_bytes(0, &bytes)?;
        let task = s::GetImageInfo001 { io_id: 0 };
        executor.send_task_sync(endpoints::GET_IMAGE_INFO, &task)
    };
    let response = executor.finish(run.await)?;

    match response.data {
        s::ResponsePayload::ImageInfo(info) => Ok(info),
        _ => Err(ClientError::UnexpectedPayload {
            expected: "image_info",
        }),
    }
}

/// Reports the engine's build and version metadata.
pub fn get_version_info<E: Engine>(engine: &E) -> Result<s::VersionInfo> {
    let executor = JobExecutor::for_engine(engine)?;
    let result = executor.send_task_sync(endpoints::GET_VERSION_INFO, &serde_json::json!({}));
    let response = executor.finish(result)?;

    match response.data {
        s::ResponsePayload::VersionInfo(info) => Ok(info),
        _ => Err(ClientError::UnexpectedPayload {
            expected: "version_info",
        }),
    }
}
