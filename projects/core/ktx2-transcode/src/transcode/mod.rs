//! Walks every (level, layer, face) image of a texture in output order.
//!
//! The output of a transcode is one tightly packed buffer: level outermost,
//! then layer, then face innermost. Sizing ([`measure`]), layout
//! ([`sub_image_layout`]) and decoding ([`transcode`]) all run through
//! [`walk_sub_images`] with a different [`SubImageVisitor`], so they share one
//! traversal and one size formula and always agree on offsets.

mod decode;
mod layout;
mod sizing;

pub use decode::*;
pub use layout::*;
pub use sizing::*;

use crate::container::{ImageLevelInfo, TextureContainer};
use crate::error::TranscodeError;
use crate::format::TargetFormat;
use core::fmt::Debug;

/// One image of the texture, as placed in the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubImage {
    /// Mip level.
    pub level: u32,
    /// Array layer.
    pub layer: u32,
    /// Cubemap face.
    pub face: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Number of blocks, or pixels for uncompressed formats.
    pub quantity: u32,
    /// Byte offset of the image in the output buffer.
    pub offset: usize,
    /// Size of the image in bytes.
    pub size: usize,
}

impl SubImage {
    /// The byte range of this image in the output buffer.
    pub fn range(&self) -> core::ops::Range<usize> {
        self.offset..self.offset + self.size
    }
}

/// State of one walk over a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeSession {
    /// Number of mip levels walked.
    pub level_count: u32,
    /// Number of layers walked per level; at least 1.
    pub layer_count: u32,
    /// Number of faces walked per layer; 1 or 6.
    pub face_count: u32,
    /// Number of images visited so far.
    pub image_count: u32,
    /// Output cursor: bytes occupied by the images visited so far.
    pub total_size: usize,
}

impl DecodeSession {
    fn begin<C: TextureContainer + ?Sized, E: Debug>(
        container: &C,
    ) -> Result<Self, TranscodeError<E>> {
        let face_count = container.face_count();
        if face_count != 1 && face_count != 6 {
            return Err(TranscodeError::InvalidFaceCount(face_count));
        }

        Ok(Self {
            level_count: container.level_count(),
            layer_count: container.layer_count().max(1),
            face_count,
            image_count: 0,
            total_size: 0,
        })
    }

    fn place<E: Debug>(
        &self,
        level: u32,
        layer: u32,
        face: u32,
        info: ImageLevelInfo,
        format: TargetFormat,
    ) -> Result<SubImage, TranscodeError<E>> {
        let quantity = format
            .block_count(info.orig_width, info.orig_height)
            .ok_or(TranscodeError::SizeOverflow)?;
        let size = format
            .image_size_in_bytes(info.orig_width, info.orig_height)
            .ok_or(TranscodeError::SizeOverflow)?;
        if self.total_size.checked_add(size).is_none() {
            return Err(TranscodeError::SizeOverflow);
        }

        Ok(SubImage {
            level,
            layer,
            face,
            width: info.orig_width,
            height: info.orig_height,
            quantity,
            offset: self.total_size,
            size,
        })
    }

    fn advance(&mut self, image: &SubImage) {
        // `place` already checked this addition.
        self.total_size += image.size;
        self.image_count += 1;
    }
}

/// Receives every image of a texture during [`walk_sub_images`].
pub trait SubImageVisitor {
    /// The decoder error type this visitor can report.
    type Error: Debug;

    /// Handles one image. An error stops the walk and is returned unchanged.
    fn visit(
        &mut self,
        image: &SubImage,
        format: TargetFormat,
    ) -> Result<(), TranscodeError<Self::Error>>;
}

impl<T: SubImageVisitor + ?Sized> SubImageVisitor for &mut T {
    type Error = T::Error;

    fn visit(
        &mut self,
        image: &SubImage,
        format: TargetFormat,
    ) -> Result<(), TranscodeError<Self::Error>> {
        (**self).visit(image, format)
    }
}

/// Walks every image of `container` in output order, computing the placement
/// of each in `format` and handing it to `visitor`.
///
/// The declared layer count is floored at 1.
///
/// # Errors
///
/// - [`TranscodeError::InvalidFaceCount`] if the face count is not 1 or 6
/// - [`TranscodeError::LevelInfoNotFound`] if the container has no image for a visited triple
/// - [`TranscodeError::SizeOverflow`] if a size does not fit in a [`usize`]
/// - whatever `visitor` returns
///
/// The walk stops at the first error; later images are not visited.
pub fn walk_sub_images<C, V>(
    container: &C,
    format: TargetFormat,
    visitor: &mut V,
) -> Result<DecodeSession, TranscodeError<V::Error>>
where
    C: TextureContainer + ?Sized,
    V: SubImageVisitor + ?Sized,
{
    let mut session = DecodeSession::begin(container)?;

    for level in 0..session.level_count {
        for layer in 0..session.layer_count {
            for face in 0..session.face_count {
                let Some(info) = container.level_info(level, layer, face) else {
                    tracing::warn!(level, layer, face, "image info missing, aborting walk");
                    return Err(TranscodeError::LevelInfoNotFound { level, layer, face });
                };

                let image = session.place(level, layer, face, info, format)?;
                tracing::trace!(
                    level,
                    layer,
                    face,
                    offset = image.offset,
                    size = image.size,
                    "visiting image"
                );

                if let Err(error) = visitor.visit(&image, format) {
                    tracing::warn!(level, layer, face, ?error, "image visit failed, aborting walk");
                    return Err(error);
                }
                session.advance(&image);
            }
        }
    }

    tracing::debug!(
        %format,
        images = session.image_count,
        total_size = session.total_size,
        "walked texture"
    );
    Ok(session)
}
