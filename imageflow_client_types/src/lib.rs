//! # imageflow_client_types
//!
//! Schema of the engine's JSON API: every node variant, encoder preset,
//! decoder command, color/constraint/watermark value, the `framewise`
//! request envelope and the response payload.
//!
//! These types are a fixed external contract. Key names are snake_case on
//! the wire, so every variant carries an explicit `#[serde(rename)]`.
//! Optional fields must serialize as *absent* when unset (never `null`),
//! so the engine applies its own defaults; hence `skip_serializing_if`
//! on every `Option` field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum PixelFormat {
    #[serde(rename = "bgra_32")]
    Bgra32,
    #[serde(rename = "bgr_32")]
    Bgr32,
    #[serde(rename = "bgr_24")]
    Bgr24,
    #[serde(rename = "gray_8")]
    Gray8,
}

#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Filter {
    #[serde(rename = "robidoux_fast")]
    RobidouxFast,
    #[serde(rename = "robidoux")]
    Robidoux,
    #[serde(rename = "robidoux_sharp")]
    RobidouxSharp,
    #[serde(rename = "ginseng")]
    Ginseng,
    #[serde(rename = "ginseng_sharp")]
    GinsengSharp,
    #[serde(rename = "lanczos")]
    Lanczos,
    #[serde(rename = "lanczos_sharp")]
    LanczosSharp,
    #[serde(rename = "lanczos_2")]
    Lanczos2,
    #[serde(rename = "lanczos_2_sharp")]
    Lanczos2Sharp,
    #[serde(rename = "cubic")]
    Cubic,
    #[serde(rename = "cubic_sharp")]
    CubicSharp,
    #[serde(rename = "catmull_rom")]
    CatmullRom,
    #[serde(rename = "mitchell")]
    Mitchell,
    #[serde(rename = "cubic_b_spline")]
    CubicBSpline,
    #[serde(rename = "hermite")]
    Hermite,
    #[serde(rename = "jinc")]
    Jinc,
    #[serde(rename = "triangle")]
    Triangle,
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "box")]
    Box,
    #[serde(rename = "fastest")]
    Fastest,
    #[serde(rename = "n_cubic")]
    NCubic,
    #[serde(rename = "n_cubic_sharp")]
    NCubicSharp,
}

#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum ResampleWhen {
    #[serde(rename = "size_differs")]
    SizeDiffers,
    #[serde(rename = "size_differs_or_sharpening_requested")]
    SizeDiffersOrSharpeningRequested,
    #[serde(rename = "always")]
    Always,
}

#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum SharpenWhen {
    #[serde(rename = "downscaling")]
    Downscaling,
    #[serde(rename = "upscaling")]
    Upscaling,
    #[serde(rename = "size_differs")]
    SizeDiffers,
    #[serde(rename = "always")]
    Always,
}

#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum ScalingFloatspace {
    #[serde(rename = "srgb")]
    Srgb,
    #[serde(rename = "linear")]
    Linear,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum ColorSrgb {
    /// Hex in RRGGBBAA (css) form or a variant thereof
    #[serde(rename = "hex")]
    Hex(String),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum Color {
    #[serde(rename = "transparent")]
    Transparent,
    #[serde(rename = "black")]
    Black,
    #[serde(rename = "srgb")]
    Srgb(ColorSrgb),
}

impl Color {
    pub fn hex(value: &str) -> Color {
        Color::Srgb(ColorSrgb::Hex(value.to_owned()))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
pub struct ResampleHints {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sharpen_percent: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub down_filter: Option<Filter>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub up_filter: Option<Filter>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scaling_colorspace: Option<ScalingFloatspace>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub resample_when: Option<ResampleWhen>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sharpen_when: Option<SharpenWhen>,
}

impl ResampleHints {
    pub fn with(filter: Option<Filter>, sharpen_percent: Option<f32>) -> ResampleHints {
        ResampleHints {
            sharpen_percent,
            down_filter: filter,
            up_filter: filter,
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub enum ConstraintGravity {
    #[serde(rename = "percentage")]
    Percentage { x: f32, y: f32 },
}

#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum ConstraintMode {
    #[serde(rename = "distort")]
    Distort,
    #[serde(rename = "within")]
    Within,
    #[serde(rename = "fit")]
    Fit,
    #[serde(rename = "larger_than")]
    LargerThan,
    #[serde(rename = "within_crop")]
    WithinCrop,
    #[serde(rename = "fit_crop")]
    FitCrop,
    #[serde(rename = "aspect_crop")]
    AspectCrop,
    #[serde(rename = "within_pad")]
    WithinPad,
    #[serde(rename = "fit_pad")]
    FitPad,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Constraint {
    pub mode: ConstraintMode,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub h: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hints: Option<ResampleHints>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gravity: Option<ConstraintGravity>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub canvas_color: Option<Color>,
}

impl Constraint {
    pub fn within(w: Option<u32>, h: Option<u32>) -> Constraint {
        Constraint {
            mode: ConstraintMode::Within,
            w,
            h,
            hints: None,
            gravity: None,
            canvas_color: None,
        }
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum CompositingMode {
    #[serde(rename = "compose")]
    Compose,
    #[serde(rename = "overwrite")]
    Overwrite,
}

#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum FitMode {
    #[serde(rename = "distort")]
    Distort,
    #[serde(rename = "within")]
    Within,
    #[serde(rename = "fit")]
    Fit,
    #[serde(rename = "within_crop")]
    WithinCrop,
    #[serde(rename = "fit_crop")]
    FitCrop,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub enum WatermarkConstraintBox {
    #[serde(rename = "image_percentage")]
    ImagePercentage { x1: f32, y1: f32, x2: f32, y2: f32 },
    #[serde(rename = "image_margins")]
    ImageMargins {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
    },
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Watermark {
    pub io_id: i32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gravity: Option<ConstraintGravity>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fit_mode: Option<FitMode>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fit_box: Option<WatermarkConstraintBox>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hints: Option<ResampleHints>,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PngBitDepth {
    #[serde(rename = "png_32")]
    Png32,
    #[serde(rename = "png_24")]
    Png24,
}

#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum QualityProfile {
    #[serde(rename = "fast")]
    Fast,
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "slow")]
    Slow,
    #[serde(rename = "slowest")]
    Slowest,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum EncoderPreset {
    #[serde(rename = "gif")]
    Gif,
    #[serde(rename = "mozjpeg")]
    Mozjpeg {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        quality: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        progressive: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        matte: Option<Color>,
    },
    #[serde(rename = "webplossy")]
    WebpLossy {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        quality: Option<f32>,
    },
    #[serde(rename = "webplossless")]
    WebpLossless,
    #[serde(rename = "lodepng")]
    Lodepng {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        maximum_deflate: Option<bool>,
    },
    #[serde(rename = "pngquant")]
    Pngquant {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        quality: Option<u8>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        minimum_quality: Option<u8>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        speed: Option<u8>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        maximum_deflate: Option<bool>,
    },
    #[serde(rename = "libjpeg_turbo")]
    LibjpegTurbo {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        quality: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        progressive: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        optimize_huffman_coding: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        matte: Option<Color>,
    },
    #[serde(rename = "libpng")]
    Libpng {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        depth: Option<PngBitDepth>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        matte: Option<Color>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        zlib_compression: Option<i32>,
    },
    #[serde(rename = "auto")]
    Auto {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        quality_profile: Option<QualityProfile>,
    },
    #[serde(rename = "format")]
    Format {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        format: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        quality_profile: Option<QualityProfile>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        encoder_hints: Option<Box<EncoderPreset>>,
    },
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct JpegDownscaleHints {
    pub width: i64,
    pub height: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scale_luma_spatially: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gamma_correct_for_srgb_during_spatial_luma_scaling: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct WebpDecoderHints {
    pub width: i32,
    pub height: i32,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum DecoderCommand {
    #[serde(rename = "jpeg_downscale_hints")]
    JpegDownscaleHints(JpegDownscaleHints),
    #[serde(rename = "webp_decoder_hints")]
    WebpDecoderHints(WebpDecoderHints),
    #[serde(rename = "discard_color_profile")]
    DiscardColorProfile,
    #[serde(rename = "ignore_color_profile_errors")]
    IgnoreColorProfileErrors,
    #[serde(rename = "select_frame")]
    SelectFrame { index: i32 },
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub enum ColorFilterSrgb {
    #[serde(rename = "grayscale_ntsc")]
    GrayscaleNtsc,
    #[serde(rename = "grayscale_flat")]
    GrayscaleFlat,
    #[serde(rename = "grayscale_bt709")]
    GrayscaleBt709,
    #[serde(rename = "grayscale_ry")]
    GrayscaleRy,
    #[serde(rename = "invert")]
    Invert,
    #[serde(rename = "sepia")]
    Sepia,
    #[serde(rename = "alpha")]
    Alpha(f32),
    #[serde(rename = "contrast")]
    Contrast(f32),
    #[serde(rename = "brightness")]
    Brightness(f32),
    #[serde(rename = "saturation")]
    Saturation(f32),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum CommandStringKind {
    #[serde(rename = "ir4")]
    Ir4,
}

/// One operation in the processing graph. Serializes to the engine's
/// externally tagged form: unit variants as bare strings
/// (`"flip_v"`), payload variants as single-key objects
/// (`{"decode": {...}}`).
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum Node {
    #[serde(rename = "decode")]
    Decode {
        io_id: i32,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        commands: Option<Vec<DecoderCommand>>,
    },
    #[serde(rename = "encode")]
    Encode {
        io_id: i32,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        preset: Option<EncoderPreset>,
    },
    #[serde(rename = "constrain")]
    Constrain(Constraint),
    #[serde(rename = "flip_v")]
    FlipV,
    #[serde(rename = "flip_h")]
    FlipH,
    #[serde(rename = "rotate_90")]
    Rotate90,
    #[serde(rename = "rotate_180")]
    Rotate180,
    #[serde(rename = "rotate_270")]
    Rotate270,
    #[serde(rename = "transpose")]
    Transpose,
    #[serde(rename = "apply_orientation")]
    ApplyOrientation { flag: i32 },
    #[serde(rename = "crop")]
    Crop { x1: u32, y1: u32, x2: u32, y2: u32 },
    #[serde(rename = "region")]
    Region {
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        background_color: Color,
    },
    #[serde(rename = "region_percent")]
    RegionPercent {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        background_color: Color,
    },
    #[serde(rename = "crop_whitespace")]
    CropWhitespace { threshold: u32, percent_padding: f32 },
    #[serde(rename = "fill_rect")]
    FillRect {
        x1: u32,
        y1: u32,
        x2: u32,
        y2: u32,
        color: Color,
    },
    #[serde(rename = "expand_canvas")]
    ExpandCanvas {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
        color: Color,
    },
    #[serde(rename = "create_canvas")]
    CreateCanvas {
        w: usize,
        h: usize,
        format: PixelFormat,
        color: Color,
    },
    #[serde(rename = "round_image_corners")]
    RoundImageCorners {
        radius: u32,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        background_color: Option<Color>,
    },
    #[serde(rename = "watermark")]
    Watermark(Watermark),
    #[serde(rename = "watermark_red_dot")]
    WatermarkRedDot,
    #[serde(rename = "color_filter_srgb")]
    ColorFilterSrgb(ColorFilterSrgb),
    #[serde(rename = "color_matrix_srgb")]
    ColorMatrixSrgb { matrix: Vec<Vec<f32>> },
    #[serde(rename = "draw_image_exact")]
    DrawImageExact {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        blend: Option<CompositingMode>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        hints: Option<ResampleHints>,
    },
    #[serde(rename = "copy_rect_to_canvas")]
    CopyRectToCanvas {
        from_x: u32,
        from_y: u32,
        w: u32,
        h: u32,
        x: u32,
        y: u32,
    },
    #[serde(rename = "command_string")]
    CommandString {
        kind: CommandStringKind,
        value: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        decode: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        encode: Option<i32>,
    },
    #[serde(rename = "resample_2d")]
    Resample2D {
        w: usize,
        h: usize,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        hints: Option<ResampleHints>,
    },
    #[serde(rename = "white_balance_histogram_area_threshold_srgb")]
    WhiteBalanceHistogramAreaThresholdSrgb {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        threshold: Option<f32>,
    },
}

#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum EdgeKind {
    #[serde(rename = "input")]
    Input,
    #[serde(rename = "canvas")]
    Canvas,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Edge {
    pub from: i32,
    pub to: i32,
    pub kind: EdgeKind,
}

/// Explicit vertex/edge form. Node keys are decimal indices into the
/// node table; a BTreeMap keeps serialization order deterministic.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Graph {
    pub nodes: BTreeMap<String, Node>,
    pub edges: Vec<Edge>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum Framewise {
    #[serde(rename = "graph")]
    Graph(Graph),
    #[serde(rename = "steps")]
    Steps(Vec<Node>),
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrameSizeLimit {
    pub w: u32,
    pub h: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ExecutionSecurity {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_decode_size: Option<FrameSizeLimit>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_frame_size: Option<FrameSizeLimit>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_encode_size: Option<FrameSizeLimit>,
}

/// The `v1/execute` request envelope.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Execute001 {
    pub framewise: Framewise,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub security: Option<ExecutionSecurity>,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum IoDirection {
    #[serde(rename = "in")]
    In,
    #[serde(rename = "out")]
    Out,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum IoEnum {
    #[serde(rename = "placeholder")]
    Placeholder,
    #[serde(rename = "file")]
    Filename(String),
    #[serde(rename = "output_buffer")]
    OutputBuffer,
    #[serde(rename = "copy_output_to_buffer")]
    CopyOutputToBuffer(i32),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct IoObject {
    pub io_id: i32,
    pub direction: IoDirection,
    pub io: IoEnum,
}

/// Standalone build request form (framewise plus inline I/O bindings).
/// The client drives jobs through slot calls instead, but the schema
/// is part of the engine contract.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Build001 {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub builder_config: Option<serde_json::Value>,
    pub io: Vec<IoObject>,
    pub framewise: Framewise,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub security: Option<ExecutionSecurity>,
}

/// The `v1/get_image_info` request body.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct GetImageInfo001 {
    pub io_id: i32,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ImageInfo {
    pub image_width: i32,
    pub image_height: i32,
    pub preferred_mime_type: String,
    pub preferred_extension: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub frame_decodes_into: Option<PixelFormat>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub frame_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub current_frame_index: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum ResultBytes {
    #[serde(rename = "base_64")]
    Base64(String),
    #[serde(rename = "byte_array")]
    ByteArray(Vec<u8>),
    #[serde(rename = "physical_file")]
    PhysicalFile(String),
    #[serde(rename = "elsewhere")]
    Elsewhere,
}

impl ResultBytes {
    /// Inline bytes, if the engine returned any (base64 or raw array).
    pub fn decoded(&self) -> Option<Vec<u8>> {
        use base64::Engine as _;
        match self {
            ResultBytes::Base64(s) => base64::engine::general_purpose::STANDARD.decode(s).ok(),
            ResultBytes::ByteArray(v) => Some(v.clone()),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct EncodeResult {
    pub preferred_mime_type: String,
    pub preferred_extension: String,
    pub io_id: i32,
    pub w: i32,
    pub h: i32,
    pub bytes: ResultBytes,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct DecodeResult {
    pub io_id: i32,
    pub w: i32,
    pub h: i32,
    pub preferred_mime_type: String,
    pub preferred_extension: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct JobResult {
    pub encodes: Vec<EncodeResult>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub decodes: Option<Vec<DecodeResult>>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct VersionInfo {
    pub long_version_string: String,
    pub last_git_commit: String,
    pub dirty_working_tree: bool,
    pub build_date: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum ResponsePayload {
    #[serde(rename = "image_info")]
    ImageInfo(ImageInfo),
    #[serde(rename = "job_result")]
    JobResult(JobResult),
    #[serde(rename = "build_result")]
    BuildResult(JobResult),
    #[serde(rename = "version_info")]
    VersionInfo(VersionInfo),
    #[serde(rename = "none")]
    None,
}

impl ResponsePayload {
    /// The engine tags structurally identical job payloads either
    /// `job_result` or `build_result` depending on the endpoint; both
    /// collapse to one shape here. Other payloads normalize to an
    /// empty encode list.
    pub fn into_job_result(self) -> JobResult {
        match self {
            ResponsePayload::JobResult(r) | ResponsePayload::BuildResult(r) => r,
            _ => JobResult::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Response001 {
    pub code: i64,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    pub data: ResponsePayload,
}
