//! A read-only view of a parsed KTX2 container.
//!
//! Parsing the container itself happens elsewhere; this crate only needs the
//! level directory and a handful of header and DFD fields, which it reads
//! through [`TextureContainer`].

use crate::format::{ChannelId, SourceEncoding, TransferFunction};
use alloc::collections::BTreeSet;

/// Dimensions of one stored (level, layer, face) image, before any block padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageLevelInfo {
    /// Width of the image in pixels.
    pub orig_width: u32,
    /// Height of the image in pixels.
    pub orig_height: u32,
}

/// The header, level directory and DFD fields of a texture container.
pub trait TextureContainer {
    /// Width of the base level in pixels.
    fn width(&self) -> u32;

    /// Height of the base level in pixels.
    fn height(&self) -> u32;

    /// Number of mip levels.
    fn level_count(&self) -> u32;

    /// Number of array layers as declared by the container. `0` means the
    /// texture is not an array.
    fn layer_count(&self) -> u32;

    /// Number of faces, `1` or `6` for a valid container.
    fn face_count(&self) -> u32;

    /// Looks up the dimensions of one stored image, or [`None`] if the
    /// container has no such image.
    fn level_info(&self, level: u32, layer: u32, face: u32) -> Option<ImageLevelInfo>;

    /// The encoding of the Basis Universal payload.
    fn base_encoding(&self) -> SourceEncoding;

    /// Channel identifier of the first DFD sample.
    fn channel_id0(&self) -> ChannelId;

    /// Channel identifier of the second DFD sample.
    fn channel_id1(&self) -> ChannelId;

    /// DFD transfer function.
    fn transfer_function(&self) -> TransferFunction;
}

impl<T: TextureContainer + ?Sized> TextureContainer for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn level_count(&self) -> u32 {
        (**self).level_count()
    }

    fn layer_count(&self) -> u32 {
        (**self).layer_count()
    }

    fn face_count(&self) -> u32 {
        (**self).face_count()
    }

    fn level_info(&self, level: u32, layer: u32, face: u32) -> Option<ImageLevelInfo> {
        (**self).level_info(level, layer, face)
    }

    fn base_encoding(&self) -> SourceEncoding {
        (**self).base_encoding()
    }

    fn channel_id0(&self) -> ChannelId {
        (**self).channel_id0()
    }

    fn channel_id1(&self) -> ChannelId {
        (**self).channel_id1()
    }

    fn transfer_function(&self) -> TransferFunction {
        (**self).transfer_function()
    }
}

/// A container described entirely by its header fields.
///
/// Every level of the mip chain halves the base dimensions (never below 1),
/// and every layer and face of a level shares that level's dimensions. Used
/// for planning buffer layouts without a real file, and as a test double.
///
/// ```
/// use ktx2_transcode::{InMemoryContainer, SourceEncoding, TextureContainer};
///
/// let container = InMemoryContainer::new(SourceEncoding::Uastc4x4, 64, 32).with_levels(3);
/// let info = container.level_info(2, 0, 0).unwrap();
/// assert_eq!((info.orig_width, info.orig_height), (16, 8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryContainer {
    encoding: SourceEncoding,
    width: u32,
    height: u32,
    levels: u32,
    layers: u32,
    faces: u32,
    channel_ids: (ChannelId, ChannelId),
    transfer_function: TransferFunction,
    missing: BTreeSet<(u32, u32, u32)>,
}

impl InMemoryContainer {
    /// Creates a single level, non-array, single face container.
    pub fn new(encoding: SourceEncoding, width: u32, height: u32) -> Self {
        Self {
            encoding,
            width,
            height,
            levels: 1,
            layers: 0,
            faces: 1,
            channel_ids: (ChannelId::default(), ChannelId::default()),
            transfer_function: TransferFunction::LINEAR,
            missing: BTreeSet::new(),
        }
    }

    /// Sets the number of mip levels.
    pub fn with_levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }

    /// Sets the declared array layer count (`0` for a non-array texture).
    pub fn with_layers(mut self, layers: u32) -> Self {
        self.layers = layers;
        self
    }

    /// Sets the face count.
    pub fn with_faces(mut self, faces: u32) -> Self {
        self.faces = faces;
        self
    }

    /// Sets the two DFD channel identifiers.
    pub fn with_channel_ids(mut self, channel_id_0: ChannelId, channel_id_1: ChannelId) -> Self {
        self.channel_ids = (channel_id_0, channel_id_1);
        self
    }

    /// Sets the DFD transfer function.
    pub fn with_transfer_function(mut self, transfer_function: TransferFunction) -> Self {
        self.transfer_function = transfer_function;
        self
    }

    /// Removes one image from the level directory, so that looking it up fails.
    pub fn without_image(mut self, level: u32, layer: u32, face: u32) -> Self {
        self.missing.insert((level, layer, face));
        self
    }

    fn contains_image(&self, level: u32, layer: u32, face: u32) -> bool {
        level < self.levels
            && layer < self.layers.max(1)
            && face < self.faces
            && !self.missing.contains(&(level, layer, face))
    }
}

impl TextureContainer for InMemoryContainer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn level_count(&self) -> u32 {
        self.levels
    }

    fn layer_count(&self) -> u32 {
        self.layers
    }

    fn face_count(&self) -> u32 {
        self.faces
    }

    fn level_info(&self, level: u32, layer: u32, face: u32) -> Option<ImageLevelInfo> {
        if !self.contains_image(level, layer, face) {
            return None;
        }

        Some(ImageLevelInfo {
            orig_width: self.width.checked_shr(level).unwrap_or(0).max(1),
            orig_height: self.height.checked_shr(level).unwrap_or(0).max(1),
        })
    }

    fn base_encoding(&self) -> SourceEncoding {
        self.encoding
    }

    fn channel_id0(&self) -> ChannelId {
        self.channel_ids.0
    }

    fn channel_id1(&self) -> ChannelId {
        self.channel_ids.1
    }

    fn transfer_function(&self) -> TransferFunction {
        self.transfer_function
    }
}
