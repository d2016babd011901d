//! Everything known about a texture's transcoded form before any decoding happens.

use alloc::vec::Vec;
use core::fmt::Debug;
use ktx2_transcode::{
    select_for_container, sub_image_layout, ChannelLayout, SubImage, TargetFormat,
    TextureContainer, TranscodeError,
};

use crate::options::TranscodeOptions;

/// How the transcoded texture is viewed by the GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewDimension {
    /// A single 2D image per level.
    D2,
    /// An array of 2D images per level.
    D2Array,
    /// Six faces per level.
    Cube,
    /// An array of six-face cubes per level.
    CubeArray,
}

impl ViewDimension {
    /// Derives the view dimension from the container's declared layer and face counts.
    ///
    /// A declared layer count of `0` means the texture is not an array.
    ///
    /// # Errors
    ///
    /// [`TranscodeError::InvalidFaceCount`] if `faces` is not 1 or 6.
    pub fn from_layers_and_faces<E: Debug>(
        layers: u32,
        faces: u32,
    ) -> Result<Self, TranscodeError<E>> {
        match (layers, faces) {
            (0, 1) => Ok(Self::D2),
            (0, 6) => Ok(Self::Cube),
            (_, 1) => Ok(Self::D2Array),
            (_, 6) => Ok(Self::CubeArray),
            (_, faces) => Err(TranscodeError::InvalidFaceCount(faces)),
        }
    }
}

/// Size of the base level, with array layers and faces folded into depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent3d {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `max(layers, 1) * faces`.
    pub depth_or_array_layers: u32,
}

/// The chosen format and packed layout of a texture, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodePlan {
    /// Target format for every image.
    pub format: TargetFormat,
    /// Classified channel layout of the source.
    pub channels: ChannelLayout,
    /// Whether the texture should be sampled with sRGB decoding.
    pub is_srgb: bool,
    /// Width of the base level in pixels.
    pub width: u32,
    /// Height of the base level in pixels.
    pub height: u32,
    /// Number of mip levels.
    pub level_count: u32,
    /// Declared layer count; `0` for non-array textures.
    pub layer_count: u32,
    /// Number of faces, 1 or 6.
    pub face_count: u32,
    /// How the texture is viewed.
    pub view_dimension: ViewDimension,
    /// Every image in output order, with its offset and size.
    pub layout: Vec<SubImage>,
    /// Total size of the transcoded texture in bytes.
    pub total_size: usize,
}

impl TranscodePlan {
    /// Base level size with layers and faces folded into depth.
    pub fn extent(&self) -> Extent3d {
        Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: self.layer_count.max(1).saturating_mul(self.face_count),
        }
    }

    /// Finds the placement of one image.
    pub fn sub_image(&self, level: u32, layer: u32, face: u32) -> Option<&SubImage> {
        self.layout
            .iter()
            .find(|image| image.level == level && image.layer == layer && image.face == face)
    }
}

/// Picks the target format for `container` and lays out its transcoded images.
///
/// Needs neither a decoder nor a bootstrap.
///
/// # Errors
///
/// - [`TranscodeError::UnsupportedSourceFormat`] if no format can be chosen
/// - [`TranscodeError::InvalidFaceCount`] if the face count is not 1 or 6
/// - [`TranscodeError::LevelInfoNotFound`] or [`TranscodeError::SizeOverflow`] from the layout walk
/// - [`TranscodeError::EmptyTexture`] if the texture has no image data
pub fn plan_texture<C: TextureContainer + ?Sized>(
    container: &C,
    options: &TranscodeOptions,
) -> Result<TranscodePlan, TranscodeError> {
    let selection = select_for_container(container, options.capabilities(), options.policy())?;
    let view_dimension =
        ViewDimension::from_layers_and_faces(container.layer_count(), container.face_count())?;

    let (width, height) = (container.width(), container.height());
    if !selection.format.is_block_multiple(width, height) {
        tracing::warn!(
            width,
            height,
            format = %selection.format,
            "dimensions are not a multiple of the block size, mip sizes may not be derivable"
        );
    }

    let layout = sub_image_layout(container, selection.format)?;
    let total_size = layout.last().map_or(0, |image| image.offset + image.size);
    if total_size == 0 {
        return Err(TranscodeError::EmptyTexture);
    }

    Ok(TranscodePlan {
        format: selection.format,
        channels: selection.channels,
        is_srgb: selection.is_srgb,
        width,
        height,
        level_count: container.level_count(),
        layer_count: container.layer_count(),
        face_count: container.face_count(),
        view_dimension,
        layout,
        total_size,
    })
}
