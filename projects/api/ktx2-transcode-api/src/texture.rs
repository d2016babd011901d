//! Owned transcoded texture data.

use core::{fmt, slice};
use ktx2_transcode::allocate::{allocate_zeroed_output, AllocateError};
use ktx2_transcode::{SubImage, TargetFormat};
use safe_allocator_api::RawAlloc;

use crate::plan::{Extent3d, TranscodePlan, ViewDimension};

/// A zeroed, 64 byte aligned byte buffer holding transcoded texture data.
///
/// Dropping it frees the memory.
pub struct TextureData {
    allocation: RawAlloc,
    len: usize,
}

impl TextureData {
    /// Allocates `len` zeroed bytes.
    ///
    /// # Errors
    ///
    /// [`AllocateError`] if the memory could not be allocated.
    pub fn allocate(len: usize) -> Result<Self, AllocateError> {
        Ok(Self {
            allocation: allocate_zeroed_output(len)?,
            len,
        })
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The data as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: the allocation holds `len` bytes, all initialized at allocation.
        unsafe { slice::from_raw_parts(self.allocation.as_ptr(), self.len) }
    }

    /// The data as a mutable byte slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: the allocation holds `len` bytes, all initialized at allocation,
        // and `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.allocation.as_mut_ptr(), self.len) }
    }

    /// Gives up the wrapper, returning the underlying allocation.
    pub fn into_raw_alloc(self) -> RawAlloc {
        self.allocation
    }
}

impl fmt::Debug for TextureData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureData")
            .field("ptr", &self.allocation.as_ptr())
            .field("len", &self.len)
            .finish()
    }
}

/// A texture transcoded into its target format, ready for upload.
#[derive(Debug)]
pub struct TranscodedTexture {
    pub(crate) data: TextureData,
    pub(crate) plan: TranscodePlan,
}

impl TranscodedTexture {
    /// The format every image is stored in.
    pub fn format(&self) -> TargetFormat {
        self.plan.format
    }

    /// Whether the texture should be sampled with sRGB decoding.
    pub fn is_srgb(&self) -> bool {
        self.plan.is_srgb
    }

    /// Base level size with layers and faces folded into depth.
    pub fn extent(&self) -> Extent3d {
        self.plan.extent()
    }

    /// How the texture is viewed.
    pub fn view_dimension(&self) -> ViewDimension {
        self.plan.view_dimension
    }

    /// Number of mip levels.
    pub fn level_count(&self) -> u32 {
        self.plan.level_count
    }

    /// The plan the texture was transcoded with.
    pub fn plan(&self) -> &TranscodePlan {
        &self.plan
    }

    /// Every image in output order, with its offset and size.
    pub fn layout(&self) -> &[SubImage] {
        &self.plan.layout
    }

    /// All transcoded bytes, packed in output order.
    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// The bytes of one image.
    pub fn sub_image_data(&self, level: u32, layer: u32, face: u32) -> Option<&[u8]> {
        let image = self.plan.sub_image(level, layer, face)?;
        self.data.as_slice().get(image.range())
    }

    /// Splits the texture into its plan and data.
    pub fn into_parts(self) -> (TranscodePlan, TextureData) {
        (self.plan, self.data)
    }
}
