//! Straight-line pipeline over the `steps` wire form.
//!
//! One source in, one encoded result out, slots fixed at 0 and 1. Because
//! steps run strictly in order there is nothing to validate per call, so
//! every operation returns `&mut Self` directly.

use crate::builder::decode_options::DecodeOptions;
use crate::errors::{ClientError, Result};
use crate::io::IoSource;
use crate::job::{endpoints, Engine, JobExecutor};
use imageflow_client_types as s;

const INPUT_IO_ID: i32 = 0;
const OUTPUT_IO_ID: i32 = 1;

#[derive(Debug)]
pub struct PipelineResult {
    pub response: s::Response001,
    pub job_result: s::JobResult,
    pub output: Vec<u8>,
}

pub struct LinearPipeline {
    steps: Vec<s::Node>,
    source: Box<dyn IoSource>,
    preset: Option<s::EncoderPreset>,
}

impl LinearPipeline {
    pub fn new(source: impl IoSource + 'static, options: Option<DecodeOptions>) -> LinearPipeline {
        let commands = options.map(DecodeOptions::into_commands);
        LinearPipeline {
            steps: vec![s::Node::Decode {
                io_id: INPUT_IO_ID,
                commands,
            }],
            source: Box::new(source),
            preset: None,
        }
    }

    fn push(&mut self, node: s::Node) -> &mut Self {
        self.steps.push(node);
        self
    }

    // ---- transforms ----

    pub fn constrain(&mut self, constraint: s::Constraint) -> &mut Self {
        self.push(s::Node::Constrain(constraint))
    }

    pub fn constrain_within(&mut self, w: Option<u32>, h: Option<u32>) -> &mut Self {
        self.constrain(s::Constraint::within(w, h))
    }

    pub fn distort(&mut self, w: usize, h: usize, hints: Option<s::ResampleHints>) -> &mut Self {
        self.push(s::Node::Resample2D { w, h, hints })
    }

    pub fn rotate_90(&mut self) -> &mut Self {
        self.push(s::Node::Rotate90)
    }

    pub fn rotate_180(&mut self) -> &mut Self {
        self.push(s::Node::Rotate180)
    }

    pub fn rotate_270(&mut self) -> &mut Self {
        self.push(s::Node::Rotate270)
    }

    pub fn flip_vertical(&mut self) -> &mut Self {
        self.push(s::Node::FlipV)
    }

    pub fn flip_horizontal(&mut self) -> &mut Self {
        self.push(s::Node::FlipH)
    }

    pub fn transpose(&mut self) -> &mut Self {
        self.push(s::Node::Transpose)
    }

    pub fn apply_orientation(&mut self, flag: i32) -> &mut Self {
        self.push(s::Node::ApplyOrientation { flag })
    }

    // ---- crop / canvas ----

    pub fn crop(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) -> &mut Self {
        self.push(s::Node::Crop { x1, y1, x2, y2 })
    }

    pub fn crop_whitespace(&mut self, threshold: u32, percent_padding: f32) -> &mut Self {
        self.push(s::Node::CropWhitespace {
            threshold,
            percent_padding,
        })
    }

    pub fn region(
        &mut self,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        background_color: s::Color,
    ) -> &mut Self {
        self.push(s::Node::Region {
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
    ) -> &mut Self {
        self.push(s::Node::RegionPercent {
            x1,
            y1,
            x2,
            y2,
            background_color,
        })
    }

    pub fn fill_rect(&mut self, x1: u32, y1: u32, x2: u32, y2: u32, color: s::Color) -> &mut Self {
        self.push(s::Node::FillRect {
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
    ) -> &mut Self {
        self.push(s::Node::ExpandCanvas {
            left,
            top,
            right,
            bottom,
            color,
        })
    }

    pub fn round_image_corners(
        &mut self,
        radius: u32,
        background_color: Option<s::Color>,
    ) -> &mut Self {
        self.push(s::Node::RoundImageCorners {
            radius,
            background_color,
        })
    }

    // ---- color / misc ----

    pub fn color_filter(&mut self, filter: s::ColorFilterSrgb) -> &mut Self {
        self.push(s::Node::ColorFilterSrgb(filter))
    }

    pub fn color_matrix_srgb(&mut self, matrix: Vec<Vec<f32>>) -> &mut Self {
        self.push(s::Node::ColorMatrixSrgb { matrix })
    }

    pub fn white_balance(&mut self, threshold: Option<f32>) -> &mut Self {
        self.push(s::Node::WhiteBalanceHistogramAreaThresholdSrgb { threshold })
    }

    pub fn watermark_red_dot(&mut self) -> &mut Self {
        self.push(s::Node::WatermarkRedDot)
    }

    pub fn command(&mut self, value: &str) -> &mut Self {
        self.push(s::Node::CommandString {
            kind: s::CommandStringKind::Ir4,
            value: value.to_owned(),
            decode: None,
            encode: None,
        })
    }

    // ---- execution ----

    /// Chooses the encoder for [`execute`](Self::execute); an explicit
    /// preset passed to `execute` takes precedence.
    pub fn encode_to(&mut self, preset: s::EncoderPreset) -> &mut Self {
        self.preset = Some(preset);
        self
    }

    /// The `steps` form this pipeline submits, terminated with `preset`.
    fn to_framewise(&self, preset: s::EncoderPreset) -> s::Framewise {
        let mut steps = self.steps.clone();
        steps.push(s::Node::Encode {
            io_id: OUTPUT_IO_ID,
            preset: Some(preset),
        });
        s::Framewise::Steps(steps)
    }

    /// Runs the pipeline against `engine` and returns the encoded bytes.
    /// Fails with [`ClientError::MissingPreset`] when neither `preset`
    /// nor [`encode_to`](Self::encode_to) supplied an encoder.
    pub async fn execute<E: Engine>(
        &mut self,
        engine: &E,
        preset: Option<s::EncoderPreset>,
    ) -> Result<PipelineResult> {
        let preset = preset
            .or_else(|| self.preset.clone())
            .ok_or(ClientError::MissingPreset)?;

        let executor = JobExecutor::for_engine(engine)?;
        let run = async {
            let bytes = self.source.fetch_bytes().await?;
            executor.add_input_bytes(INPUT_IO_ID, &bytes)?;
            executor.add_output_buffer(OUTPUT_IO_ID)?;

            let task = s::Execute001 {
                framewise: self.to_framewise(preset),
                security: None,
            };
            let response = executor.send_task(endpoints::EXECUTE, &task).await?;
            let output = executor.get_output_buffer_bytes(OUTPUT_IO_ID)?;

            let job_result = response.data.clone().into_job_result();
            Ok(PipelineResult {
                response,
                job_result,
                output,
            })
        };
        executor.finish(run.await)
    }
}
