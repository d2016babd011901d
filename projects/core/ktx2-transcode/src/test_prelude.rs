//! Common test imports and utilities for the transcode tests.
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Crate API used across test modules
pub use crate::*;

/// One recorded call to [`RecordingDecoder::decode_sub_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeCall {
    pub level: u32,
    pub layer: u32,
    pub face: u32,
    pub len: usize,
    pub quantity: u32,
    pub format: TargetFormat,
    /// Byte the decoder filled the destination with; never zero.
    pub fill: u8,
}

/// Error returned by a [`RecordingDecoder`] set up to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeFailure;

/// A decoder that records every call and fills each destination with a
/// distinct non-zero byte.
#[derive(Debug, Default)]
pub struct RecordingDecoder {
    pub started: bool,
    pub calls: Vec<DecodeCall>,
    fail_at: Option<(u32, u32, u32)>,
}

impl RecordingDecoder {
    /// Creates a decoder that fails on the given image (after recording the call).
    pub fn failing_at(level: u32, layer: u32, face: u32) -> Self {
        Self {
            fail_at: Some((level, layer, face)),
            ..Self::default()
        }
    }
}

impl SubImageDecoder for RecordingDecoder {
    type Error = DecodeFailure;

    fn start(&mut self) -> Result<(), DecodeFailure> {
        self.started = true;
        Ok(())
    }

    fn decode_sub_image(
        &mut self,
        level: u32,
        layer: u32,
        face: u32,
        output: &mut [u8],
        quantity: u32,
        format: TargetFormat,
    ) -> Result<(), DecodeFailure> {
        let fill = (self.calls.len() % 255) as u8 + 1;
        output.fill(fill);
        self.calls.push(DecodeCall {
            level,
            layer,
            face,
            len: output.len(),
            quantity,
            format,
            fill,
        });

        if self.fail_at == Some((level, layer, face)) {
            return Err(DecodeFailure);
        }
        Ok(())
    }
}
