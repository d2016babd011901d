use crate::allocate::AllocateError;
use crate::format::SourceEncoding;
use core::convert::Infallible;
use core::fmt::Debug;
use thiserror::Error;

/// Result type for selection and transcoding, generic over the decoder error.
pub type TranscodeResult<T, E = Infallible> = Result<T, TranscodeError<E>>;

/// An error that occurred while selecting a target format or transcoding a texture.
///
/// `E` is the error type of the [`SubImageDecoder`](crate::SubImageDecoder) in use;
/// operations that never decode use [`Infallible`].
///
/// Every variant is fatal to the call that returned it. No partial output is
/// returned.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TranscodeError<E = Infallible>
where
    E: Debug,
{
    /// No target format can be chosen for this source encoding.
    #[error("Unsupported source format: {0}")]
    UnsupportedSourceFormat(SourceEncoding),

    /// The container has no image for a (level, layer, face) the walk visits.
    #[error("No image info for level {level}, layer {layer}, face {face}")]
    LevelInfoNotFound {
        /// Mip level.
        level: u32,
        /// Array layer.
        layer: u32,
        /// Cubemap face.
        face: u32,
    },

    /// The decoder failed on one image.
    #[error("Failed to decode level {level}, layer {layer}, face {face}: {reason:?}")]
    DecodeFailed {
        /// Mip level.
        level: u32,
        /// Array layer.
        layer: u32,
        /// Cubemap face.
        face: u32,
        /// The decoder's error.
        reason: E,
    },

    /// The decoder could not be prepared for the texture.
    #[error("Failed to start decoder: {0:?}")]
    DecoderStartFailed(E),

    /// Memory for the output could not be allocated.
    #[error(transparent)]
    AllocationFailed(#[from] AllocateError),

    /// The output buffer is smaller than the transcoded texture.
    #[error("Output buffer too small. Needed {needed} bytes, got {actual} bytes")]
    OutputBufferTooSmall {
        /// Bytes required.
        needed: usize,
        /// Bytes provided.
        actual: usize,
    },

    /// A size computation overflowed.
    #[error("Texture size overflows the address space")]
    SizeOverflow,

    /// The container declares a face count other than 1 or 6.
    #[error("Invalid face count: {0}. Expected 1 or 6")]
    InvalidFaceCount(u32),

    /// The texture has no image data to transcode.
    #[error("Texture has no image data")]
    EmptyTexture,

    /// The process wide decoder bootstrap has not run.
    #[error("Decoder bootstrap has not been run")]
    NotBootstrapped,
}

impl TranscodeError<Infallible> {
    /// Converts an error from an operation that never decodes into one with
    /// an arbitrary decoder error type.
    pub fn widen<E: Debug>(self) -> TranscodeError<E> {
        match self {
            Self::UnsupportedSourceFormat(source) => TranscodeError::UnsupportedSourceFormat(source),
            Self::LevelInfoNotFound { level, layer, face } => {
                TranscodeError::LevelInfoNotFound { level, layer, face }
            }
            Self::DecodeFailed { reason, .. } => match reason {},
            Self::DecoderStartFailed(reason) => match reason {},
            Self::AllocationFailed(error) => TranscodeError::AllocationFailed(error),
            Self::OutputBufferTooSmall { needed, actual } => {
                TranscodeError::OutputBufferTooSmall { needed, actual }
            }
            Self::SizeOverflow => TranscodeError::SizeOverflow,
            Self::InvalidFaceCount(faces) => TranscodeError::InvalidFaceCount(faces),
            Self::EmptyTexture => TranscodeError::EmptyTexture,
            Self::NotBootstrapped => TranscodeError::NotBootstrapped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    #[test]
    fn widen_preserves_variant_fields() {
        let error: TranscodeError = TranscodeError::LevelInfoNotFound {
            level: 1,
            layer: 2,
            face: 3,
        };
        let widened: TranscodeError<String> = error.widen();
        assert_eq!(
            widened,
            TranscodeError::LevelInfoNotFound {
                level: 1,
                layer: 2,
                face: 3
            }
        );
    }

    #[test]
    fn decode_failure_message_names_the_image() {
        let error: TranscodeError<&str> = TranscodeError::DecodeFailed {
            level: 2,
            layer: 0,
            face: 4,
            reason: "bad block",
        };
        let message = error.to_string();
        assert!(message.contains("level 2"));
        assert!(message.contains("face 4"));
        assert!(message.contains("bad block"));
    }
}
