use super::{walk_sub_images, SubImage, SubImageVisitor};
use crate::container::TextureContainer;
use crate::error::{TranscodeError, TranscodeResult};
use crate::format::TargetFormat;
use core::convert::Infallible;

struct MeasureVisitor;

impl SubImageVisitor for MeasureVisitor {
    type Error = Infallible;

    fn visit(&mut self, _image: &SubImage, _format: TargetFormat) -> Result<(), TranscodeError> {
        Ok(())
    }
}

/// Computes the number of bytes `container` occupies once transcoded to `format`.
///
/// Touches no buffer and calls no decoder. [`transcode`](super::transcode) into a
/// buffer of exactly this size fills it completely.
///
/// # Errors
///
/// See [`walk_sub_images`].
///
/// # Examples
///
/// ```
/// use ktx2_transcode::*;
///
/// let cubemap = InMemoryContainer::new(SourceEncoding::Uastc4x4, 4, 4)
///     .with_levels(2)
///     .with_faces(6);
/// assert_eq!(measure(&cubemap, TargetFormat::Rgba32)?, 6 * 64 + 6 * 16);
/// # Ok::<(), TranscodeError>(())
/// ```
pub fn measure<C: TextureContainer + ?Sized>(
    container: &C,
    format: TargetFormat,
) -> TranscodeResult<usize> {
    let session = walk_sub_images(container, format, &mut MeasureVisitor)?;
    Ok(session.total_size)
}
