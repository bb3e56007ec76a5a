//! In-process fake engine for exercising pipelines end to end.
//!
//! The fake understands just enough of the task format to behave like the
//! real thing: it tracks input/output slots, walks the submitted framewise
//! for encode nodes, fills each output buffer with format-correct magic
//! bytes, and reports encode dimensions clamped by the last constrain it
//! saw. Every request body is captured for wire-level assertions.

use imageflow_client::errors::{ClientError, Result};
use imageflow_client::job::{endpoints, Engine, EngineJob};
use imageflow_client::types as s;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct MockEngine {
    requests: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
}

impl MockEngine {
    pub fn new() -> MockEngine {
        // Surfaces the client's log lines under RUST_LOG during test runs.
        let _ = env_logger::builder().is_test(true).try_init();
        MockEngine::default()
    }

    /// Bodies of every engine call made so far, as (endpoint, task) pairs.
    pub fn requests(&self) -> Vec<(String, serde_json::Value)> {
        self.requests.lock().unwrap().clone()
    }

    /// The single captured task body, asserting exactly one call was made.
    pub fn only_request(&self, endpoint: &str) -> serde_json::Value {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one engine call");
        assert_eq!(requests[0].0, endpoint);
        requests[0].1.clone()
    }
}

impl Engine for MockEngine {
    type Job = MockJob;

    fn create_job(&self) -> Result<MockJob> {
        Ok(MockJob {
            state: Mutex::new(JobState::default()),
            requests: Arc::clone(&self.requests),
        })
    }
}

#[derive(Default)]
struct JobState {
    inputs: HashMap<i32, Vec<u8>>,
    outputs: HashMap<i32, Vec<u8>>,
}

pub struct MockJob {
    state: Mutex<JobState>,
    requests: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
}

fn magic_bytes(preset: Option<&s::EncoderPreset>) -> (Vec<u8>, &'static str, &'static str) {
    match preset {
        Some(s::EncoderPreset::Mozjpeg { .. }) | Some(s::EncoderPreset::LibjpegTurbo { .. }) => (
            vec![0xFF, 0xD8, 0xFF, 0xE0],
            "image/jpeg",
            "jpg",
        ),
        Some(s::EncoderPreset::Lodepng { .. })
        | Some(s::EncoderPreset::Libpng { .. })
        | Some(s::EncoderPreset::Pngquant { .. }) => (
            vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
            "image/png",
            "png",
        ),
        Some(s::EncoderPreset::WebpLossy { .. }) | Some(s::EncoderPreset::WebpLossless) => (
            b"RIFF\0\0\0\0WEBP".to_vec(),
            "image/webp",
            "webp",
        ),
        Some(s::EncoderPreset::Gif) => (b"GIF89a".to_vec(), "image/gif", "gif"),
        _ => (b"DATA".to_vec(), "application/octet-stream", "bin"),
    }
}

// Source images are treated as 1600x1200; constrain clamps reported
// encode dimensions the way a real fit-within would.
const SOURCE_W: i64 = 1600;
const SOURCE_H: i64 = 1200;

fn constrained_dims(nodes: &[&s::Node]) -> (i32, i32) {
    let (mut w, mut h) = (SOURCE_W, SOURCE_H);
    for node in nodes {
        if let s::Node::Constrain(c) = node {
            let target_w = c.w.map(i64::from).unwrap_or(w);
            let target_h = c.h.map(i64::from).unwrap_or(h);
            let scale = f64::min(target_w as f64 / w as f64, target_h as f64 / h as f64);
            if scale < 1.0 {
                w = ((w as f64) * scale).round() as i64;
                h = ((h as f64) * scale).round() as i64;
            }
        }
        if let s::Node::Resample2D { w: rw, h: rh, .. } = node {
            w = *rw as i64;
            h = *rh as i64;
        }
    }
    (w as i32, h as i32)
}

impl MockJob {
    fn run_execute(&self, task: s::Execute001) -> Result<s::Response001> {
        let nodes: Vec<&s::Node> = match &task.framewise {
            s::Framewise::Graph(g) => g.nodes.values().collect(),
            s::Framewise::Steps(steps) => steps.iter().collect(),
        };

        let mut state = self.state.lock().unwrap();
        for node in &nodes {
            if let s::Node::Decode { io_id, .. } = node {
                if !state.inputs.contains_key(io_id) {
                    return Err(ClientError::Engine {
                        code: 400,
                        message: format!("no input bound for io_id {}", io_id),
                    });
                }
            }
        }

        let (w, h) = constrained_dims(&nodes);
        let mut encodes = Vec::new();
        for node in &nodes {
            match node {
                s::Node::Encode { io_id, preset } => {
                    let (bytes, mime, ext) = magic_bytes(preset.as_ref());
                    state.outputs.insert(*io_id, bytes);
                    encodes.push(s::EncodeResult {
                        preferred_mime_type: mime.to_owned(),
                        preferred_extension: ext.to_owned(),
                        io_id: *io_id,
                        w,
                        h,
                        bytes: s::ResultBytes::Elsewhere,
                    });
                }
                s::Node::CommandString {
                    encode: Some(io_id),
                    ..
                } => {
                    state.outputs.insert(
                        *io_id,
                        vec![0xFF, 0xD8, 0xFF, 0xE0],
                    );
                    encodes.push(s::EncodeResult {
                        preferred_mime_type: "image/jpeg".to_owned(),
                        preferred_extension: "jpg".to_owned(),
                        io_id: *io_id,
                        w,
                        h,
                        bytes: s::ResultBytes::Elsewhere,
                    });
                }
                _ => {}
            }
        }

        Ok(s::Response001 {
            code: 200,
            success: true,
            message: None,
            data: s::ResponsePayload::JobResult(s::JobResult {
                encodes,
                decodes: None,
            }),
        })
    }

    fn handle(&self, endpoint: &str, body: &[u8]) -> Result<Vec<u8>> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        self.requests
            .lock()
            .unwrap()
            .push((endpoint.to_owned(), value.clone()));

        let response = match endpoint {
            endpoints::EXECUTE => {
                let task: s::Execute001 = serde_json::from_value(value)?;
                self.run_execute(task)?
            }
            endpoints::GET_IMAGE_INFO => s::Response001 {
                code: 200,
                success: true,
                message: None,
                data: s::ResponsePayload::ImageInfo(s::ImageInfo {
                    image_width: SOURCE_W as i32,
                    image_height: SOURCE_H as i32,
                    preferred_mime_type: "image/png".to_owned(),
                    preferred_extension: "png".to_owned(),
                    frame_decodes_into: Some(s::PixelFormat::Bgra32),
                    frame_count: Some(1),
                    current_frame_index: Some(0),
                }),
            },
            endpoints::GET_VERSION_INFO => s::Response001 {
                code: 200,
                success: true,
                message: None,
                data: s::ResponsePayload::VersionInfo(s::VersionInfo {
                    long_version_string: "mock-engine 0.0".to_owned(),
                    last_git_commit: "0000000".to_owned(),
                    dirty_working_tree: false,
                    build_date: "2026-01-01".to_owned(),
                }),
            },
            other => {
                return Err(ClientError::Engine {
                    code: 404,
                    message: format!("unknown endpoint {}", other),
                })
            }
        };
        Ok(serde_json::to_vec(&response)?)
    }
}

#[async_trait::async_trait]
impl EngineJob for MockJob {
    fn add_input_bytes(&self, io_id: i32, bytes: &[u8]) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .inputs
            .insert(io_id, bytes.to_vec());
        Ok(())
    }

    fn add_output_buffer(&self, io_id: i32) -> Result<()> {
        self.state.lock().unwrap().outputs.insert(io_id, Vec::new());
        Ok(())
    }

    fn get_output_buffer_bytes(&self, io_id: i32) -> Result<Vec<u8>> {
        self.state
            .lock()
            .unwrap()
            .outputs
            .get(&io_id)
            .cloned()
            .ok_or(ClientError::Engine {
                code: 404,
                message: format!("no output buffer for io_id {}", io_id),
            })
    }

    async fn message(&self, endpoint: &str, body: &[u8]) -> Result<Vec<u8>> {
        self.handle(endpoint, body)
    }

    fn message_sync(&self, endpoint: &str, body: &[u8]) -> Result<Vec<u8>> {
        self.handle(endpoint, body)
    }

    fn clean(&self) -> Result<()> {
        Ok(())
    }
}
