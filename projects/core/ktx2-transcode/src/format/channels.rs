use crate::container::TextureContainer;
use derive_enum_all_values::AllValues;

/// A raw channel identifier from the KTX2 data format descriptor (DFD).
///
/// The same numeric value means different things depending on the source
/// encoding, so the constants are grouped by scheme: `ETC1S_*` for the
/// supercompressed scheme and `UASTC_*` for the universal block scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChannelId(pub u8);

impl ChannelId {
    /// ETC1S colour slice (RGB triplet).
    pub const ETC1S_RGB: Self = Self(0);
    /// ETC1S slice holding a replicated red channel.
    pub const ETC1S_RRR: Self = Self(3);
    /// ETC1S slice holding a replicated green channel.
    pub const ETC1S_GGG: Self = Self(4);
    /// ETC1S slice holding a replicated alpha channel.
    pub const ETC1S_AAA: Self = Self(15);

    /// UASTC RGB.
    pub const UASTC_RGB: Self = Self(0);
    /// UASTC RGBA.
    pub const UASTC_RGBA: Self = Self(3);
    /// UASTC single channel replicated to RGB.
    pub const UASTC_RRR: Self = Self(4);
    /// UASTC single channel replicated to RGB, second channel in alpha.
    pub const UASTC_RRRG: Self = Self(5);
    /// UASTC two channel.
    pub const UASTC_RG: Self = Self(6);
}

/// The channels a texture actually carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum ChannelLayout {
    /// Colour without alpha.
    Rgb,
    /// Colour with alpha.
    Rgba,
    /// Single channel.
    R,
    /// Two channels.
    Rg,
}

impl ChannelLayout {
    /// Short lowercase name, as accepted by the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::R => "r",
            Self::Rg => "rg",
        }
    }

    /// Classifies the channels of `container`. Same as [`classify_container`].
    pub fn from_container<C: TextureContainer + ?Sized>(container: &C) -> Self {
        classify_container(container)
    }

    /// Looks up a layout by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|layout| layout.name().eq_ignore_ascii_case(name))
    }
}

/// Determines the channel layout of a texture from its two DFD channel identifiers.
///
/// For the universal block scheme only `channel_id_0` is inspected. For the
/// supercompressed scheme the pair decides whether a second slice adds alpha
/// or a green channel.
///
/// Unrecognized identifiers classify as [`ChannelLayout::Rgba`]; RGBA never
/// under-allocates relative to a narrower layout.
///
/// # Parameters
///
/// - `is_universal_block_scheme`: `true` for UASTC sources, `false` for ETC1S
/// - `channel_id_0`: channel identifier of the first DFD sample
/// - `channel_id_1`: channel identifier of the second DFD sample
pub fn classify_channels(
    is_universal_block_scheme: bool,
    channel_id_0: ChannelId,
    channel_id_1: ChannelId,
) -> ChannelLayout {
    if is_universal_block_scheme {
        return match channel_id_0 {
            ChannelId::UASTC_RGB => ChannelLayout::Rgb,
            ChannelId::UASTC_RGBA => ChannelLayout::Rgba,
            ChannelId::UASTC_RRR => ChannelLayout::R,
            ChannelId::UASTC_RRRG | ChannelId::UASTC_RG => ChannelLayout::Rg,
            _ => ChannelLayout::Rgba,
        };
    }

    match (channel_id_0, channel_id_1) {
        (ChannelId::ETC1S_RGB, ChannelId::ETC1S_AAA) => ChannelLayout::Rgba,
        (ChannelId::ETC1S_RGB, _) => ChannelLayout::Rgb,
        (ChannelId::ETC1S_RRR, ChannelId::ETC1S_GGG) => ChannelLayout::Rg,
        (ChannelId::ETC1S_RRR, _) => ChannelLayout::R,
        _ => ChannelLayout::Rgba,
    }
}

/// Classifies the channels of a container using its base encoding and DFD channel identifiers.
pub fn classify_container<C: TextureContainer + ?Sized>(container: &C) -> ChannelLayout {
    classify_channels(
        container.base_encoding().is_universal_block_scheme(),
        container.channel_id0(),
        container.channel_id1(),
    )
}
