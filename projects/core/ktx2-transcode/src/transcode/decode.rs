use super::{measure, walk_sub_images, SubImage, SubImageVisitor};
use crate::container::TextureContainer;
use crate::decoder::SubImageDecoder;
use crate::error::TranscodeError;
use crate::format::TargetFormat;

struct DecodeVisitor<'a, D: SubImageDecoder + ?Sized> {
    decoder: &'a mut D,
    output: &'a mut [u8],
}

impl<D: SubImageDecoder + ?Sized> SubImageVisitor for DecodeVisitor<'_, D> {
    type Error = D::Error;

    fn visit(
        &mut self,
        image: &SubImage,
        format: TargetFormat,
    ) -> Result<(), TranscodeError<D::Error>> {
        let actual = self.output.len();
        let destination =
            self.output
                .get_mut(image.range())
                .ok_or(TranscodeError::OutputBufferTooSmall {
                    needed: image.offset + image.size,
                    actual,
                })?;

        self.decoder
            .decode_sub_image(
                image.level,
                image.layer,
                image.face,
                destination,
                image.quantity,
                format,
            )
            .map_err(|reason| TranscodeError::DecodeFailed {
                level: image.level,
                layer: image.layer,
                face: image.face,
                reason,
            })
    }
}

/// Transcodes every image of `container` into `output`, packed in output order.
///
/// The decoder must already be started (see [`SubImageDecoder::start`]).
/// `output` must be at least [`measure`] bytes long; only that prefix is
/// written. Each image is decoded exactly once, and a failure stops the
/// transcode immediately with no retry.
///
/// # Returns
///
/// The number of bytes written.
///
/// # Errors
///
/// - [`TranscodeError::OutputBufferTooSmall`] if `output` is shorter than the
///   measured size, before anything is decoded
/// - [`TranscodeError::DecodeFailed`] if the decoder fails on an image
/// - anything [`walk_sub_images`] reports
pub fn transcode<C, D>(
    container: &C,
    decoder: &mut D,
    format: TargetFormat,
    output: &mut [u8],
) -> Result<usize, TranscodeError<D::Error>>
where
    C: TextureContainer + ?Sized,
    D: SubImageDecoder + ?Sized,
{
    let needed = measure(container, format).map_err(TranscodeError::widen)?;
    if output.len() < needed {
        tracing::warn!(needed, actual = output.len(), "output buffer too small");
        return Err(TranscodeError::OutputBufferTooSmall {
            needed,
            actual: output.len(),
        });
    }

    let mut visitor = DecodeVisitor { decoder, output };
    let session = walk_sub_images(container, format, &mut visitor)?;
    Ok(session.total_size)
}
