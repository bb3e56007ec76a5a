//! Accumulates decoder commands for a decode node.
//!
//! Every setter is guarded so the same option kind can only be applied
//! once; letting two values through would merge unpredictably inside the
//! engine. Commands are kept in call order.

use crate::errors::{ClientError, Result};
use imageflow_client_types as s;

#[derive(Default, Debug, Clone)]
pub struct DecodeOptions {
    commands: Vec<s::DecoderCommand>,
    jpeg_downscale_used: bool,
    discard_profile_used: bool,
    ignore_profile_error_used: bool,
    webp_hints_used: bool,
    select_frame_used: bool,
}

fn used_once(flag: &mut bool, option: &'static str) -> Result<()> {
    if *flag {
        return Err(ClientError::DuplicateOption { option });
    }
    *flag = true;
    Ok(())
}

impl DecodeOptions {
    pub fn new() -> DecodeOptions {
        DecodeOptions::default()
    }

    pub fn into_commands(self) -> Vec<s::DecoderCommand> {
        self.commands
    }

    /// Hint the JPEG decoder to downscale during decode; faster than a
    /// post-decode resample.
    pub fn jpeg_downscale_hint(
        mut self,
        width: i64,
        height: i64,
        scale_luma_spatially: Option<bool>,
        gamma_correct_for_srgb_during_spatial_luma_scaling: Option<bool>,
    ) -> Result<DecodeOptions> {
        used_once(&mut self.jpeg_downscale_used, "jpeg_downscale_hints")?;
        self.commands
            .push(s::DecoderCommand::JpegDownscaleHints(s::JpegDownscaleHints {
                width,
                height,
                scale_luma_spatially,
                gamma_correct_for_srgb_during_spatial_luma_scaling,
            }));
        Ok(self)
    }

    pub fn discard_color_profile(mut self) -> Result<DecodeOptions> {
        used_once(&mut self.discard_profile_used, "discard_color_profile")?;
        self.commands.push(s::DecoderCommand::DiscardColorProfile);
        Ok(self)
    }

    /// Tolerate invalid embedded color profiles instead of failing decode.
    pub fn ignore_color_profile_errors(mut self) -> Result<DecodeOptions> {
        used_once(
            &mut self.ignore_profile_error_used,
            "ignore_color_profile_errors",
        )?;
        self.commands.push(s::DecoderCommand::IgnoreColorProfileErrors);
        Ok(self)
    }

    pub fn webp_decoder_hints(mut self, width: i32, height: i32) -> Result<DecodeOptions> {
        used_once(&mut self.webp_hints_used, "webp_decoder_hints")?;
        self.commands
            .push(s::DecoderCommand::WebpDecoderHints(s::WebpDecoderHints {
                width,
                height,
            }));
        Ok(self)
    }

    /// Select one frame of a multi-frame image (e.g. an animated GIF).
    pub fn select_frame(mut self, index: i32) -> Result<DecodeOptions> {
        used_once(&mut self.select_frame_used, "select_frame")?;
        self.commands.push(s::DecoderCommand::SelectFrame { index });
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_setter_always_fails() {
        let err = DecodeOptions::new()
            .discard_color_profile()
            .unwrap()
            .discard_color_profile()
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::DuplicateOption {
                option: "discard_color_profile"
            }
        ));

        let err = DecodeOptions::new()
            .select_frame(0)
            .unwrap()
            .select_frame(1)
            .unwrap_err();
        assert!(matches!(err, ClientError::DuplicateOption { .. }));
    }

    #[test]
    fn five_distinct_setters_accumulate_in_call_order() {
        let commands = DecodeOptions::new()
            .jpeg_downscale_hint(800, 600, None, None)
            .unwrap()
            .discard_color_profile()
            .unwrap()
            .ignore_color_profile_errors()
            .unwrap()
            .webp_decoder_hints(200, 200)
            .unwrap()
            .select_frame(3)
            .unwrap()
            .into_commands();

        assert_eq!(commands.len(), 5);
        assert!(matches!(
            commands[0],
            s::DecoderCommand::JpegDownscaleHints(_)
        ));
        assert_eq!(commands[1], s::DecoderCommand::DiscardColorProfile);
        assert_eq!(commands[2], s::DecoderCommand::IgnoreColorProfileErrors);
        assert!(matches!(commands[3], s::DecoderCommand::WebpDecoderHints(_)));
        assert_eq!(commands[4], s::DecoderCommand::SelectFrame { index: 3 });
    }

    #[test]
    fn hints_serialize_without_null_fields() {
        let commands = DecodeOptions::new()
            .jpeg_downscale_hint(100, 100, None, None)
            .unwrap()
            .into_commands();
        assert_eq!(
            serde_json::to_value(&commands[0]).unwrap(),
            serde_json::json!({"jpeg_downscale_hints": {"width": 100, "height": 100}})
        );
    }
}
