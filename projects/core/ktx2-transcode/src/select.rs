//! Picks the GPU format a texture is transcoded to.
//!
//! Each source encoding has an ordered list of candidates. The first
//! candidate whose required capability the hardware has wins; the final
//! uncompressed fallback requires nothing, so selection only fails for
//! encodings without a list.
//!
//! ## Preference order
//!
//! | Source                      | 1st                   | 2nd            | 3rd             | Fallback  |
//! |-----------------------------|-----------------------|----------------|-----------------|-----------|
//! | UASTC HDR 4x4               | ASTC HDR 4x4          | BC6H           |                 | RGBA half |
//! | ASTC HDR 6x6 (+intermediate)| ASTC HDR 6x6          | BC6H           |                 | RGBA half |
//! | UASTC 4x4                   | ASTC 4x4              | BC7            | ETC by channels | RGBA32    |
//! | ETC1S, BC first             | BC by channels        | ETC by channels|                 | RGBA32    |
//! | ETC1S, ETC first            | ETC by channels       | BC by channels |                 | RGBA32    |
//!
//! ETC by channels: RGB → ETC1, RGBA → ETC2, R → EAC R11, RG → EAC RG11.
//! BC by channels: RGB → BC7, RGBA → BC7, R → BC4, RG → BC5.

use crate::container::TextureContainer;
use crate::error::{TranscodeError, TranscodeResult};
use crate::format::{ChannelLayout, HardwareCapabilities, SourceEncoding, TargetFormat};
use core::fmt;
use derive_enum_all_values::AllValues;

/// Which block family is tried first for ETC1S sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum SupercompressedOrder {
    /// Try BC formats before ETC formats.
    ///
    /// ETC decode throughput is poor on common desktop GPUs, which usually
    /// expose both families.
    #[default]
    BcFirst,
    /// Try ETC formats before BC formats.
    EtcFirst,
}

impl SupercompressedOrder {
    /// Short lowercase name, as accepted by the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::BcFirst => "bc-first",
            Self::EtcFirst => "etc-first",
        }
    }

    /// Looks up an order by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|order| order.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SupercompressedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tunable parts of format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelectionPolicy {
    /// Family order for ETC1S sources.
    pub supercompressed_order: SupercompressedOrder,
}

/// A format decision for a whole container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetSelection {
    /// The chosen target format.
    pub format: TargetFormat,
    /// The classified channel layout the decision was based on.
    pub channels: ChannelLayout,
    /// Whether the texture should be sampled with sRGB decoding.
    pub is_srgb: bool,
}

/// One entry of a preference list. An entry applies when the hardware has
/// the capability its format requires.
#[derive(Debug, Clone, Copy)]
enum Candidate {
    Fixed(TargetFormat),
    BcByChannels,
    EtcByChannels,
}

impl Candidate {
    fn resolve(self, channels: ChannelLayout, caps: HardwareCapabilities) -> Option<TargetFormat> {
        let format = match self {
            Self::Fixed(format) => format,
            Self::BcByChannels => bc_by_channels(channels),
            Self::EtcByChannels => etc_by_channels(channels),
        };
        caps.contains(format.required_capabilities()).then_some(format)
    }
}

const UASTC_HDR_4X4: &[Candidate] = &[
    Candidate::Fixed(TargetFormat::AstcHdr4x4Rgba),
    Candidate::Fixed(TargetFormat::Bc6h),
    Candidate::Fixed(TargetFormat::RgbaHalf),
];

const ASTC_HDR_6X6: &[Candidate] = &[
    Candidate::Fixed(TargetFormat::AstcHdr6x6Rgba),
    Candidate::Fixed(TargetFormat::Bc6h),
    Candidate::Fixed(TargetFormat::RgbaHalf),
];

const UASTC_4X4: &[Candidate] = &[
    Candidate::Fixed(TargetFormat::Astc4x4Rgba),
    Candidate::Fixed(TargetFormat::Bc7Rgba),
    Candidate::EtcByChannels,
    Candidate::Fixed(TargetFormat::Rgba32),
];

const ETC1S_BC_FIRST: &[Candidate] = &[
    Candidate::BcByChannels,
    Candidate::EtcByChannels,
    Candidate::Fixed(TargetFormat::Rgba32),
];

const ETC1S_ETC_FIRST: &[Candidate] = &[
    Candidate::EtcByChannels,
    Candidate::BcByChannels,
    Candidate::Fixed(TargetFormat::Rgba32),
];

fn bc_by_channels(channels: ChannelLayout) -> TargetFormat {
    match channels {
        ChannelLayout::Rgb | ChannelLayout::Rgba => TargetFormat::Bc7Rgba,
        ChannelLayout::R => TargetFormat::Bc4R,
        ChannelLayout::Rg => TargetFormat::Bc5Rg,
    }
}

fn etc_by_channels(channels: ChannelLayout) -> TargetFormat {
    match channels {
        ChannelLayout::Rgb => TargetFormat::Etc1Rgb,
        ChannelLayout::Rgba => TargetFormat::Etc2Rgba,
        ChannelLayout::R => TargetFormat::Etc2EacR11,
        ChannelLayout::Rg => TargetFormat::Etc2EacRg11,
    }
}

fn preference_list(
    source: SourceEncoding,
    policy: SelectionPolicy,
) -> Option<&'static [Candidate]> {
    match source {
        SourceEncoding::UastcHdr4x4 => Some(UASTC_HDR_4X4),
        SourceEncoding::AstcHdr6x6 | SourceEncoding::AstcHdr6x6Intermediate => Some(ASTC_HDR_6X6),
        SourceEncoding::Uastc4x4 => Some(UASTC_4X4),
        SourceEncoding::Etc1s => Some(match policy.supercompressed_order {
            SupercompressedOrder::BcFirst => ETC1S_BC_FIRST,
            SupercompressedOrder::EtcFirst => ETC1S_ETC_FIRST,
        }),
        SourceEncoding::Unknown => None,
    }
}

/// Picks the target format for a texture.
///
/// Pure: the same inputs always give the same format.
///
/// # Parameters
///
/// - `source`: encoding of the Basis Universal payload
/// - `channels`: classified channel layout of the texture
/// - `caps`: compressed formats the hardware can sample
/// - `policy`: selection tunables
///
/// # Errors
///
/// [`TranscodeError::UnsupportedSourceFormat`] if `source` has no preference list.
///
/// # Examples
///
/// ```
/// use ktx2_transcode::*;
///
/// let format = select_target_format(
///     SourceEncoding::Etc1s,
///     ChannelLayout::R,
///     HardwareCapabilities::ETC2,
///     SelectionPolicy::default(),
/// )?;
/// assert_eq!(format, TargetFormat::Etc2EacR11);
/// # Ok::<(), TranscodeError>(())
/// ```
pub fn select_target_format(
    source: SourceEncoding,
    channels: ChannelLayout,
    caps: HardwareCapabilities,
    policy: SelectionPolicy,
) -> TranscodeResult<TargetFormat> {
    let Some(candidates) = preference_list(source, policy) else {
        tracing::debug!(%source, "no target format for source encoding");
        return Err(TranscodeError::UnsupportedSourceFormat(source));
    };

    let format = candidates
        .iter()
        .find_map(|candidate| candidate.resolve(channels, caps))
        .ok_or(TranscodeError::UnsupportedSourceFormat(source))?;

    tracing::debug!(
        %source,
        channels = channels.name(),
        %caps,
        %format,
        "selected target format"
    );
    Ok(format)
}

/// Classifies `container` and picks its target format and sRGB flag.
pub fn select_for_container<C: TextureContainer + ?Sized>(
    container: &C,
    caps: HardwareCapabilities,
    policy: SelectionPolicy,
) -> TranscodeResult<TargetSelection> {
    let channels = ChannelLayout::from_container(container);
    let format = select_target_format(container.base_encoding(), channels, caps, policy)?;
    Ok(TargetSelection {
        format,
        channels,
        is_srgb: container.transfer_function().is_srgb(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{ChannelId, TransferFunction};
    use crate::test_prelude::*;

    const BC: HardwareCapabilities = HardwareCapabilities::BC;
    const ETC2: HardwareCapabilities = HardwareCapabilities::ETC2;
    const ASTC: HardwareCapabilities = HardwareCapabilities::ASTC_LDR;
    const ASTC_HDR: HardwareCapabilities = HardwareCapabilities::ASTC_HDR;
    const NONE: HardwareCapabilities = HardwareCapabilities::NONE;

    fn select(
        source: SourceEncoding,
        channels: ChannelLayout,
        caps: HardwareCapabilities,
    ) -> TargetFormat {
        select_target_format(source, channels, caps, SelectionPolicy::default()).unwrap()
    }

    #[rstest]
    #[case(ChannelLayout::Rgba, ASTC, TargetFormat::Astc4x4Rgba)]
    #[case(ChannelLayout::Rgba, ASTC.union(BC).union(ETC2), TargetFormat::Astc4x4Rgba)]
    #[case(ChannelLayout::R, BC.union(ETC2), TargetFormat::Bc7Rgba)]
    #[case(ChannelLayout::Rgb, ETC2, TargetFormat::Etc1Rgb)]
    #[case(ChannelLayout::Rgba, ETC2, TargetFormat::Etc2Rgba)]
    #[case(ChannelLayout::R, ETC2, TargetFormat::Etc2EacR11)]
    #[case(ChannelLayout::Rg, ETC2, TargetFormat::Etc2EacRg11)]
    #[case(ChannelLayout::Rgb, NONE, TargetFormat::Rgba32)]
    #[case(ChannelLayout::Rgb, ASTC_HDR, TargetFormat::Rgba32)]
    fn uastc_preferences(
        #[case] channels: ChannelLayout,
        #[case] caps: HardwareCapabilities,
        #[case] expected: TargetFormat,
    ) {
        assert_eq!(select(SourceEncoding::Uastc4x4, channels, caps), expected);
    }

    #[rstest]
    #[case(ChannelLayout::Rgb, BC, TargetFormat::Bc7Rgba)]
    #[case(ChannelLayout::Rgba, BC, TargetFormat::Bc7Rgba)]
    #[case(ChannelLayout::R, BC, TargetFormat::Bc4R)]
    #[case(ChannelLayout::Rg, BC, TargetFormat::Bc5Rg)]
    #[case(ChannelLayout::R, BC.union(ETC2), TargetFormat::Bc4R)]
    #[case(ChannelLayout::R, ETC2, TargetFormat::Etc2EacR11)]
    #[case(ChannelLayout::Rgb, ETC2, TargetFormat::Etc1Rgb)]
    #[case(ChannelLayout::Rgba, ASTC, TargetFormat::Rgba32)]
    #[case(ChannelLayout::Rg, NONE, TargetFormat::Rgba32)]
    fn etc1s_prefers_bc_by_default(
        #[case] channels: ChannelLayout,
        #[case] caps: HardwareCapabilities,
        #[case] expected: TargetFormat,
    ) {
        assert_eq!(select(SourceEncoding::Etc1s, channels, caps), expected);
    }

    #[rstest]
    #[case(ChannelLayout::Rgb, BC.union(ETC2), TargetFormat::Etc1Rgb)]
    #[case(ChannelLayout::Rgba, BC.union(ETC2), TargetFormat::Etc2Rgba)]
    #[case(ChannelLayout::Rg, BC.union(ETC2), TargetFormat::Etc2EacRg11)]
    #[case(ChannelLayout::Rg, BC, TargetFormat::Bc5Rg)]
    #[case(ChannelLayout::R, BC, TargetFormat::Bc4R)]
    #[case(ChannelLayout::Rgba, NONE, TargetFormat::Rgba32)]
    fn etc1s_etc_first_policy(
        #[case] channels: ChannelLayout,
        #[case] caps: HardwareCapabilities,
        #[case] expected: TargetFormat,
    ) {
        let policy = SelectionPolicy {
            supercompressed_order: SupercompressedOrder::EtcFirst,
        };
        assert_eq!(
            select_target_format(SourceEncoding::Etc1s, channels, caps, policy),
            Ok(expected)
        );
    }

    #[rstest]
    #[case(SourceEncoding::UastcHdr4x4, ASTC_HDR.union(BC), TargetFormat::AstcHdr4x4Rgba)]
    #[case(SourceEncoding::UastcHdr4x4, BC, TargetFormat::Bc6h)]
    #[case(SourceEncoding::UastcHdr4x4, ASTC.union(ETC2), TargetFormat::RgbaHalf)]
    #[case(SourceEncoding::AstcHdr6x6, ASTC_HDR, TargetFormat::AstcHdr6x6Rgba)]
    #[case(SourceEncoding::AstcHdr6x6Intermediate, ASTC_HDR, TargetFormat::AstcHdr6x6Rgba)]
    #[case(SourceEncoding::AstcHdr6x6, BC, TargetFormat::Bc6h)]
    #[case(SourceEncoding::AstcHdr6x6Intermediate, NONE, TargetFormat::RgbaHalf)]
    fn hdr_preferences(
        #[case] source: SourceEncoding,
        #[case] caps: HardwareCapabilities,
        #[case] expected: TargetFormat,
    ) {
        // HDR choices ignore the channel layout.
        for &channels in ChannelLayout::all_values() {
            assert_eq!(select(source, channels, caps), expected);
        }
    }

    #[test]
    fn unknown_source_is_unsupported() {
        assert_eq!(
            select_target_format(
                SourceEncoding::Unknown,
                ChannelLayout::Rgba,
                HardwareCapabilities::all(),
                SelectionPolicy::default()
            ),
            Err(TranscodeError::UnsupportedSourceFormat(SourceEncoding::Unknown))
        );
    }

    #[test]
    fn every_known_input_selects_a_format() {
        for &source in SourceEncoding::all_values() {
            for &channels in ChannelLayout::all_values() {
                for bits in 0..=HardwareCapabilities::all().bits() {
                    let caps = HardwareCapabilities::from_bits_truncate(bits);
                    for &order in SupercompressedOrder::all_values() {
                        let policy = SelectionPolicy {
                            supercompressed_order: order,
                        };
                        let first = select_target_format(source, channels, caps, policy);
                        let second = select_target_format(source, channels, caps, policy);
                        assert_eq!(first, second);
                        assert_eq!(first.is_err(), source == SourceEncoding::Unknown);
                    }
                }
            }
        }
    }

    #[test]
    fn selected_format_is_supported_by_caps() {
        for &source in SourceEncoding::all_values() {
            for &channels in ChannelLayout::all_values() {
                for bits in 0..=HardwareCapabilities::all().bits() {
                    let caps = HardwareCapabilities::from_bits_truncate(bits);
                    for &order in SupercompressedOrder::all_values() {
                        let policy = SelectionPolicy {
                            supercompressed_order: order,
                        };
                        let selected = select_target_format(source, channels, caps, policy);
                        let Ok(format) = selected else {
                            continue;
                        };
                        assert!(
                            caps.contains(format.required_capabilities()),
                            "{source} {} {caps} {order} -> {format}",
                            channels.name()
                        );
                        if caps.is_empty() {
                            assert!(format.is_uncompressed());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn container_selection_scenarios() {
        let uastc_rgba = InMemoryContainer::new(SourceEncoding::Uastc4x4, 16, 16)
            .with_channel_ids(ChannelId::UASTC_RGBA, ChannelId::default());
        let selection =
            select_for_container(&uastc_rgba, ASTC, SelectionPolicy::default()).unwrap();
        assert_eq!(selection.format, TargetFormat::Astc4x4Rgba);
        assert_eq!(selection.channels, ChannelLayout::Rgba);
        assert!(!selection.is_srgb);

        let etc1s_rgb = InMemoryContainer::new(SourceEncoding::Etc1s, 16, 16)
            .with_channel_ids(ChannelId::ETC1S_RGB, ChannelId::ETC1S_RGB)
            .with_transfer_function(TransferFunction::SRGB);
        let selection = select_for_container(&etc1s_rgb, BC, SelectionPolicy::default()).unwrap();
        assert_eq!(selection.format, TargetFormat::Bc7Rgba);
        assert!(selection.is_srgb);

        let etc1s_r = InMemoryContainer::new(SourceEncoding::Etc1s, 16, 16)
            .with_channel_ids(ChannelId::ETC1S_RRR, ChannelId::ETC1S_RGB);
        let selection = select_for_container(&etc1s_r, ETC2, SelectionPolicy::default()).unwrap();
        assert_eq!(selection.format, TargetFormat::Etc2EacR11);
    }
}
