//! Chainable pipeline builder over the explicit vertex/edge wire form.
//!
//! Every operation appends a node, wires it to the cursor (the most
//! recently appended node) with an `input` edge, and advances the cursor.
//! `branch` grows independent tails from one node by saving and restoring
//! the cursor around a closure; the dual-input composition operations wire
//! a `canvas` edge from the pre-branch cursor and an `input` edge from the
//! sub-graph's tail.

use crate::builder::decode_options::DecodeOptions;
use crate::builder::presets;
use crate::errors::{ClientError, Result};
use crate::graph::GraphBuilder;
use crate::io::{Bound, IoDestination, IoSource};
use crate::job::{endpoints, Engine, JobExecutor};
use imageflow_client_types as s;
use std::collections::{BTreeMap, HashMap};

/// Placement rectangle for the dual-input composition operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CanvasRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Default, Clone, Debug)]
pub struct WatermarkOptions {
    pub gravity: Option<s::ConstraintGravity>,
    pub fit_mode: Option<s::FitMode>,
    pub fit_box: Option<s::WatermarkConstraintBox>,
    pub opacity: Option<f32>,
    pub hints: Option<s::ResampleHints>,
}

/// What `execute` hands back: the raw response envelope, the normalized
/// job result, and the named output buffers.
#[derive(Debug)]
pub struct ExecuteResult {
    pub response: s::Response001,
    pub job_result: s::JobResult,
    pub buffers: HashMap<String, Vec<u8>>,
}

pub struct GraphPipeline {
    graph: GraphBuilder,
    nodes: Vec<s::Node>,
    next_io_id: i32,
    inputs: Vec<Bound<dyn IoSource>>,
    outputs: Vec<Bound<dyn IoDestination>>,
    last: i32,
    has_decoded: bool,
}

impl Default for GraphPipeline {
    fn default() -> GraphPipeline {
        GraphPipeline::new()
    }
}

impl GraphPipeline {
    /// An empty pipeline; call [`decode`](Self::decode) to add the first
    /// input.
    pub fn new() -> GraphPipeline {
        GraphPipeline {
            graph: GraphBuilder::new(),
            nodes: Vec::new(),
            next_io_id: 0,
            inputs: Vec::new(),
            outputs: Vec::new(),
            last: 0,
            has_decoded: false,
        }
    }

    /// A pipeline whose first node decodes `source`.
    pub fn with_source(
        source: impl IoSource + 'static,
        options: Option<DecodeOptions>,
    ) -> Result<GraphPipeline> {
        let mut pipeline = GraphPipeline::new();
        pipeline.decode(source, options)?;
        Ok(pipeline)
    }

    fn require_decode(&self) -> Result<()> {
        if !self.has_decoded {
            return Err(ClientError::MissingDecode);
        }
        Ok(())
    }

    fn alloc_vertex(&mut self, node: s::Node) -> Result<i32> {
        let idx = self.nodes.len() as i32;
        self.nodes.push(node);
        self.graph.add_vertex(idx)?;
        Ok(idx)
    }

    /// Appends a single-predecessor operation at the cursor.
    fn append(&mut self, node: s::Node) -> Result<&mut Self> {
        self.require_decode()?;
        let idx = self.alloc_vertex(node)?;
        self.graph.add_edge(self.last, idx, s::EdgeKind::Input)?;
        self.last = idx;
        Ok(self)
    }

    fn alloc_io_id(&mut self) -> i32 {
        let id = self.next_io_id;
        self.next_io_id += 1;
        id
    }

    // ---- inputs ----

    /// Adds a decode node for an additional source; used by multi-input
    /// composition. The new node becomes the cursor.
    pub fn decode(
        &mut self,
        source: impl IoSource + 'static,
        options: Option<DecodeOptions>,
    ) -> Result<&mut Self> {
        let io_id = self.alloc_io_id();
        self.inputs.push(Bound::new(io_id, Box::new(source)));
        let commands = options.map(DecodeOptions::into_commands);
        let idx = self.alloc_vertex(s::Node::Decode { io_id, commands })?;
        self.last = idx;
        self.has_decoded = true;
        Ok(self)
    }

    // ---- outputs ----

    /// Encodes the current image state into `dest` using `preset`.
    pub fn encode(
        &mut self,
        dest: impl IoDestination + 'static,
        preset: s::EncoderPreset,
    ) -> Result<&mut Self> {
        self.require_decode()?;
        let io_id = self.alloc_io_id();
        self.outputs.push(Bound::new(io_id, Box::new(dest)));
        let node = s::Node::Encode {
            io_id,
            preset: Some(preset),
        };
        let idx = self.alloc_vertex(node)?;
        self.graph.add_edge(self.last, idx, s::EdgeKind::Input)?;
        self.last = idx;
        Ok(self)
    }

    pub fn to_jpeg(
        &mut self,
        dest: impl IoDestination + 'static,
        quality: Option<i32>,
    ) -> Result<&mut Self> {
        self.encode(
            dest,
            presets::mozjpeg(Some(quality.unwrap_or(90)), None, None),
        )
    }

    pub fn to_png(
        &mut self,
        dest: impl IoDestination + 'static,
        maximum_deflate: Option<bool>,
    ) -> Result<&mut Self> {
        self.encode(dest, presets::lodepng(maximum_deflate))
    }

    pub fn to_webp(&mut self, dest: impl IoDestination + 'static) -> Result<&mut Self> {
        self.encode(dest, presets::webp_lossless())
    }

    // ---- transforms ----

    pub fn constrain(&mut self, constraint: s::Constraint) -> Result<&mut Self> {
        self.append(s::Node::Constrain(constraint))
    }

    /// Fit within `w`×`h`, preserving aspect ratio.
    pub fn constrain_within(&mut self, w: Option<u32>, h: Option<u32>) -> Result<&mut Self> {
        self.constrain(s::Constraint::within(w, h))
    }

    /// Resize to exact dimensions, ignoring aspect ratio.
    pub fn distort(
        &mut self,
        w: usize,
        h: usize,
        hints: Option<s::ResampleHints>,
    ) -> Result<&mut Self> {
        self.append(s::Node::Resample2D { w, h, hints })
    }

    pub fn rotate_90(&mut self) -> Result<&mut Self> {
        self.append(s::Node::Rotate90)
    }

    pub fn rotate_180(&mut self) -> Result<&mut Self> {
        self.append(s::Node::Rotate180)
    }

    pub fn rotate_270(&mut self) -> Result<&mut Self> {
        self.append(s::Node::Rotate270)
    }

    pub fn flip_vertical(&mut self) -> Result<&mut Self> {
        self.append(s::Node::FlipV)
    }

    pub fn flip_horizontal(&mut self) -> Result<&mut Self> {
        self.append(s::Node::FlipH)
    }

    pub fn transpose(&mut self) -> Result<&mut Self> {
        self.append(s::Node::Transpose)
    }

    /// Applies an EXIF orientation flag.
    pub fn apply_orientation(&mut self, flag: i32) -> Result<&mut Self> {
        self.append(s::Node::ApplyOrientation { flag })
    }

    // ---- crop / region ----

    pub fn crop(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) -> Result<&mut Self> {
        self.append(s::Node::Crop { x1, y1, x2, y2 })
    }

    /// Extracts a region; out-of-bounds areas are filled with
    /// `background_color`.
    pub fn region(
        &mut self,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        background_color: s::Color,
    ) -> Result<&mut Self> {
        self.append(s::Node::Region {
            x1,
            y1,
            x2,
            y2,
            background_color,
        })
    }

    pub fn region_percent(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        background_color: s::Color,
    ) -> Result<&mut Self> {
        self.append(s::Node::RegionPercent {
            x1,
            y1,
            x2,
            y2,
            background_color,
        })
    }

    pub fn crop_whitespace(&mut self, threshold: u32, percent_padding: f32) -> Result<&mut Self> {
        self.append(s::Node::CropWhitespace {
            threshold,
            percent_padding,
        })
    }

    // ---- canvas ----

    pub fn fill_rect(
        &mut self,
        x1: u32,
        y1: u32,
        x2: u32,
        y2: u32,
        color: s::Color,
    ) -> Result<&mut Self> {
        self.append(s::Node::FillRect {
            x1,
            y1,
            x2,
            y2,
            color,
        })
    }

    pub fn expand_canvas(
        &mut self,
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
        color: s::Color,
    ) -> Result<&mut Self> {
        self.append(s::Node::ExpandCanvas {
            left,
            top,
            right,
            bottom,
            color,
        })
    }

    pub fn create_canvas(
        &mut self,
        w: usize,
        h: usize,
        format: s::PixelFormat,
        color: s::Color,
    ) -> Result<&mut Self> {
        self.append(s::Node::CreateCanvas {
            w,
            h,
            format,
            color,
        })
    }

    pub fn round_image_corners(
        &mut self,
        radius: u32,
        background_color: Option<s::Color>,
    ) -> Result<&mut Self> {
        self.append(s::Node::RoundImageCorners {
            radius,
            background_color,
        })
    }

    // ---- watermark ----

    /// Overlays another source. The overlay bytes reach the engine through
    /// their own input slot referenced inside the node, not through a
    /// graph edge.
    pub fn watermark(
        &mut self,
        source: impl IoSource + 'static,
        options: WatermarkOptions,
    ) -> Result<&mut Self> {
        self.require_decode()?;
        let io_id = self.alloc_io_id();
        self.inputs.push(Bound::new(io_id, Box::new(source)));
        self.append(s::Node::Watermark(s::Watermark {
            io_id,
            gravity: options.gravity,
            fit_mode: options.fit_mode,
            fit_box: options.fit_box,
            opacity: options.opacity,
            hints: options.hints,
        }))
    }

    pub fn watermark_red_dot(&mut self) -> Result<&mut Self> {
        self.append(s::Node::WatermarkRedDot)
    }

    // ---- color ----

    pub fn color_filter(&mut self, filter: s::ColorFilterSrgb) -> Result<&mut Self> {
        self.append(s::Node::ColorFilterSrgb(filter))
    }

    pub fn grayscale_ry(&mut self) -> Result<&mut Self> {
        self.color_filter(s::ColorFilterSrgb::GrayscaleRy)
    }

    pub fn invert(&mut self) -> Result<&mut Self> {
        self.color_filter(s::ColorFilterSrgb::Invert)
    }

    pub fn sepia(&mut self) -> Result<&mut Self> {
        self.color_filter(s::ColorFilterSrgb::Sepia)
    }

    pub fn color_matrix_srgb(&mut self, matrix: Vec<Vec<f32>>) -> Result<&mut Self> {
        self.append(s::Node::ColorMatrixSrgb { matrix })
    }

    // ---- misc ----

    pub fn white_balance(&mut self, threshold: Option<f32>) -> Result<&mut Self> {
        self.append(s::Node::WhiteBalanceHistogramAreaThresholdSrgb { threshold })
    }

    /// Appends an IR4 command string as a regular graph node.
    pub fn command(&mut self, value: &str) -> Result<&mut Self> {
        self.append(s::Node::CommandString {
            kind: s::CommandStringKind::Ir4,
            value: value.to_owned(),
            decode: None,
            encode: None,
        })
    }

    // ---- branching ----

    /// Runs `f` against this pipeline, then restores the cursor to where
    /// it was, so several independent tails can grow from one node.
    /// Nested branches save/restore like a stack.
    pub fn branch(&mut self, f: impl FnOnce(&mut Self) -> Result<()>) -> Result<&mut Self> {
        let saved = self.last;
        f(self)?;
        self.last = saved;
        Ok(self)
    }

    /// Grows a sub-graph with `f`, then composites its result onto the
    /// pre-branch image at exact coordinates. The pre-branch cursor feeds
    /// the composition via a `canvas` edge (the surface drawn upon); the
    /// sub-graph tail feeds it via an `input` edge (the thing drawn).
    pub fn draw_image_exact_to(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<()>,
        rect: CanvasRect,
        blend: Option<s::CompositingMode>,
        hints: Option<s::ResampleHints>,
    ) -> Result<&mut Self> {
        let node = s::Node::DrawImageExact {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            blend,
            hints,
        };
        self.compose(f, node)
    }

    /// Like [`draw_image_exact_to`](Self::draw_image_exact_to), copying a
    /// pixel rectangle instead of compositing.
    pub fn copy_rect_to_canvas(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<()>,
        rect: CanvasRect,
        from_x: u32,
        from_y: u32,
    ) -> Result<&mut Self> {
        let node = s::Node::CopyRectToCanvas {
            from_x,
            from_y,
            w: rect.w,
            h: rect.h,
            x: rect.x,
            y: rect.y,
        };
        self.compose(f, node)
    }

    fn compose(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<()>,
        node: s::Node,
    ) -> Result<&mut Self> {
        let saved = self.last;
        f(self)?;
        self.require_decode()?;
        let idx = self.alloc_vertex(node)?;
        self.graph.add_edge(saved, idx, s::EdgeKind::Canvas)?;
        self.graph.add_edge(self.last, idx, s::EdgeKind::Input)?;
        self.last = idx;
        Ok(self)
    }

    // ---- execution ----

    /// The wire form this pipeline will submit.
    pub fn to_framewise(&self) -> s::Framewise {
        let mut table = BTreeMap::new();
        for (index, node) in self.nodes.iter().enumerate() {
            table.insert(index.to_string(), node.clone());
        }
        s::Framewise::Graph(s::Graph {
            nodes: table,
            edges: self.graph.to_edges(),
        })
    }

    /// Binds all inputs (fetched concurrently), invokes the engine, then
    /// distributes every output and collects named buffers. Any input
    /// failure aborts before the engine is called.
    pub async fn execute<E: Engine>(&mut self, engine: &E) -> Result<ExecuteResult> {
        self.require_decode()?;
        let executor = JobExecutor::for_engine(engine)?;

        let run = async {
            let fetches = self.inputs.iter_mut().map(|bound| {
                let io_id = bound.io_id;
                async move { bound.io.fetch_bytes().await.map(|bytes| (io_id, bytes)) }
            });
            let payloads = futures::future::try_join_all(fetches).await?;
            for (io_id, bytes) in &payloads {
                executor.add_input_bytes(*io_id, bytes)?;
            }
            for output in &self.outputs {
                executor.add_output_buffer(output.io_id)?;
            }

            let task = s::Execute001 {
                framewise: self.to_framewise(),
                security: None,
            };
            let response = executor.send_task(endpoints::EXECUTE, &task).await?;

            let mut collected = Vec::with_capacity(self.outputs.len());
            for output in &self.outputs {
                let bytes = executor.get_output_buffer_bytes(output.io_id)?;
                let key = output.io.result_key().map(str::to_owned);
                collected.push((key, bytes));
            }
            let deliveries = self
                .outputs
                .iter_mut()
                .zip(collected.iter())
                .map(|(output, (_, bytes))| output.io.deliver_bytes(bytes));
            futures::future::try_join_all(deliveries).await?;

            let mut buffers = HashMap::new();
            for (key, bytes) in collected {
                if let Some(key) = key {
                    buffers.insert(key, bytes);
                }
            }

            let job_result = response.data.clone().into_job_result();
            Ok(ExecuteResult {
                response,
                job_result,
                buffers,
            })
        };
        // Release engine-held buffers whether or not the run succeeded.
        executor.finish(run.await)
    }

    /// Bypass path for trivial single-op workflows: one command-string
    /// node in `steps` form, with slot 0 fixed as input and slot 1 as
    /// output.
    pub async fn execute_command<E: Engine>(
        engine: &E,
        command: &str,
        mut input: impl IoSource + 'static,
        mut output: impl IoDestination + 'static,
    ) -> Result<ExecuteResult> {
        let executor = JobExecutor::for_engine(engine)?;
        let run = async {
            let bytes = input.fetch_bytes().await?;
            executor.add_input_bytes(0, &bytes)?;
            executor.add_output_buffer(1)?;

            let task = s::Execute001 {
                framewise: s::Framewise::Steps(vec![s::Node::CommandString {
                    kind: s::CommandStringKind::Ir4,
                    value: command.to_owned(),
                    decode: Some(0),
                    encode: Some(1),
                }]),
                security: None,
            };
            let response = executor.send_task(endpoints::EXECUTE, &task).await?;

            let out_bytes = executor.get_output_buffer_bytes(1)?;
            output.deliver_bytes(&out_bytes).await?;
            let mut buffers = HashMap::new();
            if let Some(key) = output.result_key() {
                buffers.insert(key.to_owned(), out_bytes);
            }

            let job_result = response.data.clone().into_job_result();
            Ok(ExecuteResult {
                response,
                job_result,
                buffers,
            })
        };
        executor.finish(run.await)
    }
}
