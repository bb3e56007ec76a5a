//! Single-flight wrapper around the opaque engine job handle.
//!
//! The engine is reached only through the narrow [`EngineJob`] surface:
//! feed bytes by slot, register output slots, send a JSON command message,
//! read output bytes back, release resources. A [`JobExecutor`] guards one
//! handle with an in-use flag acting as a non-reentrant mutex: a second
//! call while one is outstanding fails with `Busy` instead of queueing,
//! and the flag is released on every exit path.

use crate::errors::{ClientError, Result};
use async_trait::async_trait;
use imageflow_client_types as s;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

/// JSON API endpoints understood by the engine.
pub mod endpoints {
    pub const EXECUTE: &str = "v1/execute";
    pub const GET_IMAGE_INFO: &str = "v1/get_image_info";
    pub const GET_VERSION_INFO: &str = "v1/get_version_info";
}

/// The opaque per-job engine handle.
#[async_trait]
pub trait EngineJob: Send + Sync {
    fn add_input_bytes(&self, io_id: i32, bytes: &[u8]) -> Result<()>;
    fn add_output_buffer(&self, io_id: i32) -> Result<()>;
    fn get_output_buffer_bytes(&self, io_id: i32) -> Result<Vec<u8>>;
    /// Sends a JSON command envelope and awaits the raw response bytes.
    async fn message(&self, endpoint: &str, body: &[u8]) -> Result<Vec<u8>>;
    fn message_sync(&self, endpoint: &str, body: &[u8]) -> Result<Vec<u8>>;
    /// Releases engine-held resources. Safe to call once after use.
    fn clean(&self) -> Result<()>;
}

/// Creates fresh job handles. One handle is created per pipeline
/// execution and exclusively owned by that call.
pub trait Engine {
    type Job: EngineJob;
    fn create_job(&self) -> Result<Self::Job>;
}

/// Clears the in-use flag on every exit path, including panics and errors.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct JobExecutor<J: EngineJob> {
    job: J,
    in_use: AtomicBool,
}

impl<J: EngineJob> JobExecutor<J> {
    pub fn new(job: J) -> JobExecutor<J> {
        JobExecutor {
            job,
            in_use: AtomicBool::new(false),
        }
    }

    pub fn for_engine<E: Engine<Job = J>>(engine: &E) -> Result<JobExecutor<J>> {
        Ok(JobExecutor::new(engine.create_job()?))
    }

    fn acquire(&self) -> Result<InFlight<'_>> {
        if self.in_use.swap(true, Ordering::SeqCst) {
            return Err(ClientError::Busy);
        }
        Ok(InFlight(&self.in_use))
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.in_use.load(Ordering::SeqCst) {
            return Err(ClientError::Busy);
        }
        Ok(())
    }

    pub fn add_input_bytes(&self, io_id: i32, bytes: &[u8]) -> Result<()> {
        self.ensure_idle()?;
        self.job.add_input_bytes(io_id, bytes)
    }

    pub fn add_output_buffer(&self, io_id: i32) -> Result<()> {
        self.ensure_idle()?;
        self.job.add_output_buffer(io_id)
    }

    pub fn get_output_buffer_bytes(&self, io_id: i32) -> Result<Vec<u8>> {
        self.ensure_idle()?;
        self.job.get_output_buffer_bytes(io_id)
    }

    pub async fn message(&self, endpoint: &str, body: &[u8]) -> Result<Vec<u8>> {
        let _guard = self.acquire()?;
        log::debug!("engine call {} ({} request bytes)", endpoint, body.len());
        self.job.message(endpoint, body).await
    }

    pub fn message_sync(&self, endpoint: &str, body: &[u8]) -> Result<Vec<u8>> {
        let _guard = self.acquire()?;
        log::debug!("engine call {} ({} request bytes, sync)", endpoint, body.len());
        self.job.message_sync(endpoint, body)
    }

    /// Serializes `task`, issues the call, parses the response envelope and
    /// maps `success: false` to [`ClientError::Engine`].
    pub async fn send_task<T: Serialize>(
        &self,
        endpoint: &str,
        task: &T,
    ) -> Result<s::Response001> {
        let body = serde_json::to_vec(task)?;
        let raw = self.message(endpoint, &body).await?;
        let response: s::Response001 = serde_json::from_slice(&raw)?;
        match ClientError::from_response(&response) {
            Some(err) => Err(err),
            None => Ok(response),
        }
    }

    pub fn send_task_sync<T: Serialize>(&self, endpoint: &str, task: &T) -> Result<s::Response001> {
        let body = serde_json::to_vec(task)?;
        let raw = self.message_sync(endpoint, &body)?;
        let response: s::Response001 = serde_json::from_slice(&raw)?;
        match ClientError::from_response(&response) {
            Some(err) => Err(err),
            None => Ok(response),
        }
    }

    pub fn clean(&self) -> Result<()> {
        self.ensure_idle()?;
        self.job.clean()
    }

    /// Releases the handle after a call sequence regardless of how it
    /// ended. A cleanup failure only surfaces when `result` succeeded;
    /// otherwise the primary error wins.
    pub fn finish<T>(&self, result: Result<T>) -> Result<T> {
        match self.clean() {
            Ok(()) => result,
            Err(cleanup) => result.and(Err(cleanup)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::Notify;

    /// Job whose `message` blocks until released, so tests can observe the
    /// in-flight window deterministically.
    struct GatedJob {
        started: Arc<Notify>,
        release: Arc<Notify>,
        fail: bool,
    }

    #[async_trait]
    impl EngineJob for GatedJob {
        fn add_input_bytes(&self, _io_id: i32, _bytes: &[u8]) -> Result<()> {
            Ok(())
        }
        fn add_output_buffer(&self, _io_id: i32) -> Result<()> {
            Ok(())
        }
        fn get_output_buffer_bytes(&self, _io_id: i32) -> Result<Vec<u8>> {
            Ok(vec![])
        }
        async fn message(&self, _endpoint: &str, _body: &[u8]) -> Result<Vec<u8>> {
            self.started.notify_one();
            self.release.notified().await;
            if self.fail {
                return Err(ClientError::Transport("boom".to_owned()));
            }
            Ok(br#"{"code":200,"success":true,"data":{"none":null}}"#.to_vec())
        }
        fn message_sync(&self, endpoint: &str, _body: &[u8]) -> Result<Vec<u8>> {
            let _ = endpoint;
            Ok(br#"{"code":200,"success":true,"data":{"none":null}}"#.to_vec())
        }
        fn clean(&self) -> Result<()> {
            Ok(())
        }
    }

    fn gated(fail: bool) -> (Arc<JobExecutor<GatedJob>>, Arc<Notify>, Arc<Notify>) {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let exec = Arc::new(JobExecutor::new(GatedJob {
            started: started.clone(),
            release: release.clone(),
            fail,
        }));
        (exec, started, release)
    }

    #[tokio::test]
    async fn second_message_fails_busy_without_disturbing_the_first() {
        let (exec, started, release) = gated(false);

        let first = {
            let exec = exec.clone();
            tokio::spawn(async move { exec.message(endpoints::EXECUTE, b"{}").await })
        };
        started.notified().await;

        assert!(matches!(
            exec.message(endpoints::EXECUTE, b"{}").await,
            Err(ClientError::Busy)
        ));
        assert!(matches!(
            exec.add_input_bytes(0, b"x"),
            Err(ClientError::Busy)
        ));
        assert!(matches!(
            exec.get_output_buffer_bytes(1),
            Err(ClientError::Busy)
        ));

        release.notify_one();
        assert!(first.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn flag_clears_after_a_failed_call() {
        let (exec, started, release) = gated(true);

        let first = {
            let exec = exec.clone();
            tokio::spawn(async move { exec.message(endpoints::EXECUTE, b"{}").await })
        };
        started.notified().await;
        release.notify_one();
        assert!(first.await.unwrap().is_err());

        // Handle is idle again; slot operations succeed.
        exec.add_input_bytes(0, b"x").unwrap();
        exec.clean().unwrap();
    }

    #[tokio::test]
    async fn send_task_maps_engine_failure() {
        struct FailingJob;
        #[async_trait]
        impl EngineJob for FailingJob {
            fn add_input_bytes(&self, _: i32, _: &[u8]) -> Result<()> {
                Ok(())
            }
            fn add_output_buffer(&self, _: i32) -> Result<()> {
                Ok(())
            }
            fn get_output_buffer_bytes(&self, _: i32) -> Result<Vec<u8>> {
                Ok(vec![])
            }
            async fn message(&self, _: &str, _: &[u8]) -> Result<Vec<u8>> {
                Ok(
                    br#"{"code":500,"success":false,"message":"bad input","data":{"none":null}}"#
                        .to_vec(),
                )
            }
            fn message_sync(&self, _: &str, _: &[u8]) -> Result<Vec<u8>> {
                Ok(
                    br#"{"code":500,"success":false,"message":"bad input","data":{"none":null}}"#
                        .to_vec(),
                )
            }
            fn clean(&self) -> Result<()> {
                Ok(())
            }
        }

        let exec = JobExecutor::new(FailingJob);
        let err = exec
            .send_task(endpoints::EXECUTE, &serde_json::json!({}))
            .await
            .unwrap_err();
        match err {
            ClientError::Engine { code, message } => {
                assert_eq!(code, 500);
                assert_eq!(message, "bad input");
            }
            other => panic!("expected engine error, got {other:?}"),
        }
    }

    #[test]
    fn finish_prefers_the_primary_error() {
        struct StickyJob;
        #[async_trait]
        impl EngineJob for StickyJob {
            fn add_input_bytes(&self, _: i32, _: &[u8]) -> Result<()> {
                Ok(())
            }
            fn add_output_buffer(&self, _: i32) -> Result<()> {
                Ok(())
            }
            fn get_output_buffer_bytes(&self, _: i32) -> Result<Vec<u8>> {
                Ok(vec![])
            }
            async fn message(&self, _: &str, _: &[u8]) -> Result<Vec<u8>> {
                Ok(vec![])
            }
            fn message_sync(&self, _: &str, _: &[u8]) -> Result<Vec<u8>> {
                Ok(vec![])
            }
            fn clean(&self) -> Result<()> {
                Err(ClientError::Transport("release failed".to_owned()))
            }
        }

        let exec = JobExecutor::new(StickyJob);
        assert!(matches!(
            exec.finish(Ok(1)),
            Err(ClientError::Transport(_))
        ));
        assert!(matches!(
            exec.finish::<i32>(Err(ClientError::Busy)),
            Err(ClientError::Busy)
        ));
    }
}
