//! Conversions between this crate's types and `wgpu`.
//!
//! Capabilities are read from the device's enabled features, and the chosen
//! target format, view dimension and extent map onto the types a
//! `wgpu::TextureDescriptor` needs.

use ktx2_transcode::{HardwareCapabilities, TargetFormat};
use wgpu::{AstcBlock, AstcChannel, Features, TextureFormat, TextureViewDimension};

use crate::plan::{Extent3d, ViewDimension};

/// Reads the compressed texture families enabled in `features`.
///
/// # Examples
///
/// ```
/// use ktx2_transcode_api::wgpu::capabilities_from_features;
/// use ktx2_transcode_api::HardwareCapabilities;
///
/// let caps = capabilities_from_features(wgpu::Features::TEXTURE_COMPRESSION_BC);
/// assert_eq!(caps, HardwareCapabilities::BC);
/// ```
pub fn capabilities_from_features(features: Features) -> HardwareCapabilities {
    let mut caps = HardwareCapabilities::NONE;
    if features.contains(Features::TEXTURE_COMPRESSION_ASTC) {
        caps |= HardwareCapabilities::ASTC_LDR;
    }
    if features.contains(Features::TEXTURE_COMPRESSION_ASTC_HDR) {
        caps |= HardwareCapabilities::ASTC_HDR;
    }
    if features.contains(Features::TEXTURE_COMPRESSION_BC) {
        caps |= HardwareCapabilities::BC;
    }
    if features.contains(Features::TEXTURE_COMPRESSION_ETC2) {
        caps |= HardwareCapabilities::ETC2;
    }
    caps
}

/// The features a device must enable to sample every family in `caps`.
pub fn features_for_capabilities(caps: HardwareCapabilities) -> Features {
    let mut features = Features::empty();
    if caps.contains(HardwareCapabilities::ASTC_LDR) {
        features |= Features::TEXTURE_COMPRESSION_ASTC;
    }
    if caps.contains(HardwareCapabilities::ASTC_HDR) {
        features |= Features::TEXTURE_COMPRESSION_ASTC_HDR;
    }
    if caps.contains(HardwareCapabilities::BC) {
        features |= Features::TEXTURE_COMPRESSION_BC;
    }
    if caps.contains(HardwareCapabilities::ETC2) {
        features |= Features::TEXTURE_COMPRESSION_ETC2;
    }
    features
}

/// Maps a target format to a `wgpu` texture format.
///
/// `is_srgb` selects the sRGB variant where one exists; formats without one
/// (single and two channel, HDR) ignore it.
///
/// Returns [`None`] for formats `wgpu` has no equivalent of
/// ([`TargetFormat::Rgb565`], [`TargetFormat::Rgba4444`], [`TargetFormat::RgbHalf`]).
pub fn to_wgpu_format(format: TargetFormat, is_srgb: bool) -> Option<TextureFormat> {
    let srgb = |linear: TextureFormat, srgb: TextureFormat| if is_srgb { srgb } else { linear };
    let astc_ldr = if is_srgb {
        AstcChannel::UnormSrgb
    } else {
        AstcChannel::Unorm
    };

    Some(match format {
        // ETC1 is a subset of ETC2 RGB8.
        TargetFormat::Etc1Rgb => srgb(
            TextureFormat::Etc2Rgb8Unorm,
            TextureFormat::Etc2Rgb8UnormSrgb,
        ),
        TargetFormat::Etc2Rgba => srgb(
            TextureFormat::Etc2Rgba8Unorm,
            TextureFormat::Etc2Rgba8UnormSrgb,
        ),
        TargetFormat::Bc1Rgb => srgb(
            TextureFormat::Bc1RgbaUnorm,
            TextureFormat::Bc1RgbaUnormSrgb,
        ),
        TargetFormat::Bc3Rgba => srgb(
            TextureFormat::Bc3RgbaUnorm,
            TextureFormat::Bc3RgbaUnormSrgb,
        ),
        TargetFormat::Bc7Rgba => srgb(
            TextureFormat::Bc7RgbaUnorm,
            TextureFormat::Bc7RgbaUnormSrgb,
        ),
        TargetFormat::Rgba32 => srgb(TextureFormat::Rgba8Unorm, TextureFormat::Rgba8UnormSrgb),
        TargetFormat::Bc4R => TextureFormat::Bc4RUnorm,
        TargetFormat::Bc5Rg => TextureFormat::Bc5RgUnorm,
        TargetFormat::Etc2EacR11 => TextureFormat::EacR11Unorm,
        TargetFormat::Etc2EacRg11 => TextureFormat::EacRg11Unorm,
        TargetFormat::Astc4x4Rgba => TextureFormat::Astc {
            block: AstcBlock::B4x4,
            channel: astc_ldr,
        },
        TargetFormat::AstcHdr4x4Rgba => TextureFormat::Astc {
            block: AstcBlock::B4x4,
            channel: AstcChannel::Hdr,
        },
        TargetFormat::AstcHdr6x6Rgba => TextureFormat::Astc {
            block: AstcBlock::B6x6,
            channel: AstcChannel::Hdr,
        },
        TargetFormat::Bc6h => TextureFormat::Bc6hRgbUfloat,
        TargetFormat::RgbaHalf => TextureFormat::Rgba16Float,
        TargetFormat::Rgb9e5 => TextureFormat::Rgb9e5Ufloat,
        TargetFormat::Rgb565 | TargetFormat::Rgba4444 | TargetFormat::RgbHalf => return None,
    })
}

impl From<ViewDimension> for TextureViewDimension {
    fn from(value: ViewDimension) -> Self {
        match value {
            ViewDimension::D2 => TextureViewDimension::D2,
            ViewDimension::D2Array => TextureViewDimension::D2Array,
            ViewDimension::Cube => TextureViewDimension::Cube,
            ViewDimension::CubeArray => TextureViewDimension::CubeArray,
        }
    }
}

impl From<Extent3d> for wgpu::Extent3d {
    fn from(value: Extent3d) -> Self {
        wgpu::Extent3d {
            width: value.width,
            height: value.height,
            depth_or_array_layers: value.depth_or_array_layers,
        }
    }
}
