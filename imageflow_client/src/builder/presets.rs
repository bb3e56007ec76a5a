//! Pure factory functions for encoder presets.
//!
//! Each factory maps its arguments straight into the wire value; unset
//! options stay `None` so they serialize as absent and the engine applies
//! its own defaults.

use imageflow_client_types as s;

pub fn gif() -> s::EncoderPreset {
    s::EncoderPreset::Gif
}

pub fn mozjpeg(
    quality: Option<i32>,
    progressive: Option<bool>,
    matte: Option<s::Color>,
) -> s::EncoderPreset {
    s::EncoderPreset::Mozjpeg {
        quality,
        progressive,
        matte,
    }
}

pub fn webp_lossy(quality: Option<f32>) -> s::EncoderPreset {
    s::EncoderPreset::WebpLossy { quality }
}

pub fn webp_lossless() -> s::EncoderPreset {
    s::EncoderPreset::WebpLossless
}

pub fn lodepng(maximum_deflate: Option<bool>) -> s::EncoderPreset {
    s::EncoderPreset::Lodepng { maximum_deflate }
}

/// Lossy PNG with palette quantization. `speed` ranges 1-10.
pub fn pngquant(
    quality: u8,
    minimum_quality: u8,
    speed: Option<u8>,
    maximum_deflate: Option<bool>,
) -> s::EncoderPreset {
    s::EncoderPreset::Pngquant {
        quality: Some(quality),
        minimum_quality: Some(minimum_quality),
        speed,
        maximum_deflate,
    }
}

pub fn libjpeg_turbo(
    quality: Option<i32>,
    progressive: Option<bool>,
    optimize_huffman_coding: Option<bool>,
    matte: Option<s::Color>,
) -> s::EncoderPreset {
    s::EncoderPreset::LibjpegTurbo {
        quality,
        progressive,
        optimize_huffman_coding,
        matte,
    }
}

pub fn libpng(
    depth: Option<s::PngBitDepth>,
    matte: Option<s::Color>,
    zlib_compression: Option<i32>,
) -> s::EncoderPreset {
    s::EncoderPreset::Libpng {
        depth,
        matte,
        zlib_compression,
    }
}

/// Let the engine pick the output format.
pub fn auto(quality_profile: Option<s::QualityProfile>) -> s::EncoderPreset {
    s::EncoderPreset::Auto { quality_profile }
}

/// Target a concrete format name with optional per-encoder hints.
pub fn format(
    format: Option<&str>,
    quality_profile: Option<s::QualityProfile>,
    encoder_hints: Option<s::EncoderPreset>,
) -> s::EncoderPreset {
    s::EncoderPreset::Format {
        format: format.map(str::to_owned),
        quality_profile,
        encoder_hints: encoder_hints.map(Box::new),
    }
}
