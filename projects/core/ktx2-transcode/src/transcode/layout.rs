use super::{walk_sub_images, SubImage, SubImageVisitor};
use crate::container::TextureContainer;
use crate::error::{TranscodeError, TranscodeResult};
use crate::format::TargetFormat;
use alloc::vec::Vec;
use core::convert::Infallible;

struct LayoutVisitor {
    images: Vec<SubImage>,
}

impl SubImageVisitor for LayoutVisitor {
    type Error = Infallible;

    fn visit(&mut self, image: &SubImage, _format: TargetFormat) -> Result<(), TranscodeError> {
        self.images.push(*image);
        Ok(())
    }
}

/// Lists where every image of `container` lands in the output buffer when
/// transcoded to `format`, in output order.
///
/// # Errors
///
/// See [`walk_sub_images`].
pub fn sub_image_layout<C: TextureContainer + ?Sized>(
    container: &C,
    format: TargetFormat,
) -> TranscodeResult<Vec<SubImage>> {
    let mut visitor = LayoutVisitor { images: Vec::new() };
    walk_sub_images(container, format, &mut visitor)?;
    Ok(visitor.images)
}
