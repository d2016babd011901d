//! Test prelude for the transcode API tests.
//!
//! This module provides common test utilities and structures used across
//! multiple test modules to reduce code duplication.
#![allow(unused_imports)]

pub use alloc::{vec, vec::Vec};
pub use core::convert::Infallible;
pub use rstest::rstest;

pub use crate::*;
pub use ktx2_transcode::{ChannelId, InMemoryContainer, TransferFunction};

/// Runs an empty bootstrap, once per test process.
pub fn ensure_bootstrapped() {
    bootstrap(|| {});
}

/// A decoder that fills each image with a byte derived from its position.
///
/// It doesn't decode anything but makes every image's bytes identifiable.
#[derive(Debug, Default)]
pub struct FillDecoder {
    pub started: bool,
    pub fail_start: bool,
    pub calls: usize,
}

impl FillDecoder {
    /// The byte written for an image; never zero.
    pub fn fill_for(level: u32, layer: u32, face: u32) -> u8 {
        ((level * 36 + layer * 6 + face) % 250) as u8 + 1
    }
}

impl SubImageDecoder for FillDecoder {
    type Error = &'static str;

    fn start(&mut self) -> Result<(), Self::Error> {
        if self.fail_start {
            return Err("start failed");
        }
        self.started = true;
        Ok(())
    }

    fn decode_sub_image(
        &mut self,
        level: u32,
        layer: u32,
        face: u32,
        output: &mut [u8],
        _quantity: u32,
        _format: TargetFormat,
    ) -> Result<(), Self::Error> {
        self.calls += 1;
        output.fill(Self::fill_for(level, layer, face));
        Ok(())
    }
}
