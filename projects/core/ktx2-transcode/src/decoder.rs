//! The opaque sub-image decoder.
//!
//! The block transcode math lives outside this crate (typically a Basis
//! Universal transcoder binding). The orchestrator drives it through
//! [`SubImageDecoder`], one (level, layer, face) image at a time.

use crate::format::TargetFormat;
use alloc::boxed::Box;
use core::fmt::Debug;

/// Decodes individual images of a texture into a target format.
pub trait SubImageDecoder {
    /// The error type returned by the decoder.
    type Error: Debug;

    /// Prepares the decoder for a texture (for example, decoding global
    /// codebooks). Called once by the high level API before any
    /// [`decode_sub_image`](Self::decode_sub_image); the orchestrator never calls it.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Decodes one image into `output`.
    ///
    /// # Parameters
    ///
    /// - `level`, `layer`, `face`: the image to decode
    /// - `output`: destination, exactly the size of the image in `format`
    /// - `quantity`: number of blocks (or pixels, for uncompressed formats) to write
    /// - `format`: the target format for the whole texture
    fn decode_sub_image(
        &mut self,
        level: u32,
        layer: u32,
        face: u32,
        output: &mut [u8],
        quantity: u32,
        format: TargetFormat,
    ) -> Result<(), Self::Error>;
}

impl<T: SubImageDecoder + ?Sized> SubImageDecoder for Box<T> {
    type Error = T::Error;

    fn start(&mut self) -> Result<(), Self::Error> {
        (**self).start()
    }

    fn decode_sub_image(
        &mut self,
        level: u32,
        layer: u32,
        face: u32,
        output: &mut [u8],
        quantity: u32,
        format: TargetFormat,
    ) -> Result<(), Self::Error> {
        (**self).decode_sub_image(level, layer, face, output, quantity, format)
    }
}

impl<T: SubImageDecoder + ?Sized> SubImageDecoder for &mut T {
    type Error = T::Error;

    fn start(&mut self) -> Result<(), Self::Error> {
        (**self).start()
    }

    fn decode_sub_image(
        &mut self,
        level: u32,
        layer: u32,
        face: u32,
        output: &mut [u8],
        quantity: u32,
        format: TargetFormat,
    ) -> Result<(), Self::Error> {
        (**self).decode_sub_image(level, layer, face, output, quantity, format)
    }
}
