use super::HardwareCapabilities;
use core::fmt;
use derive_enum_all_values::AllValues;

/// A GPU format a texture can be transcoded to.
///
/// The discriminants are the raw transcoder texture format identifiers, so a
/// [`TargetFormat`] can be handed straight to a Basis Universal decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u32)]
pub enum TargetFormat {
    /// ETC1 RGB, 4x4 blocks, 8 bytes.
    Etc1Rgb = 0,
    /// ETC2 RGBA, 4x4 blocks, 16 bytes.
    Etc2Rgba = 1,
    /// BC1 RGB, 4x4 blocks, 8 bytes.
    Bc1Rgb = 2,
    /// BC3 RGBA, 4x4 blocks, 16 bytes.
    Bc3Rgba = 3,
    /// BC4 R, 4x4 blocks, 8 bytes.
    Bc4R = 4,
    /// BC5 RG, 4x4 blocks, 16 bytes.
    Bc5Rg = 5,
    /// BC7 RGBA, 4x4 blocks, 16 bytes.
    Bc7Rgba = 6,
    /// ASTC LDR 4x4, 16 bytes.
    Astc4x4Rgba = 10,
    /// Uncompressed 8 bit RGBA.
    Rgba32 = 13,
    /// Uncompressed 16 bit RGB 5:6:5.
    Rgb565 = 14,
    /// Uncompressed 16 bit RGBA 4:4:4:4.
    Rgba4444 = 16,
    /// EAC R11, 4x4 blocks, 8 bytes.
    Etc2EacR11 = 20,
    /// EAC RG11, 4x4 blocks, 16 bytes.
    Etc2EacRg11 = 21,
    /// BC6H unsigned float RGB, 4x4 blocks, 16 bytes.
    Bc6h = 22,
    /// ASTC HDR 4x4, 16 bytes.
    AstcHdr4x4Rgba = 23,
    /// Uncompressed half float RGB.
    RgbHalf = 24,
    /// Uncompressed half float RGBA.
    RgbaHalf = 25,
    /// Uncompressed shared exponent RGB 9:9:9:5.
    Rgb9e5 = 26,
    /// ASTC HDR 6x6, 16 bytes.
    AstcHdr6x6Rgba = 27,
}

impl TargetFormat {
    /// Converts a raw transcoder texture format identifier.
    pub fn from_raw(value: u32) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|format| format.basis_id() == value)
    }

    /// The raw transcoder texture format identifier.
    pub const fn basis_id(self) -> u32 {
        self as u32
    }

    /// Whether the format stores plain pixels rather than blocks.
    pub const fn is_uncompressed(self) -> bool {
        matches!(
            self,
            Self::Rgba32
                | Self::Rgb565
                | Self::Rgba4444
                | Self::RgbHalf
                | Self::RgbaHalf
                | Self::Rgb9e5
        )
    }

    /// The hardware capability needed to sample this format.
    ///
    /// Uncompressed formats need none.
    pub const fn required_capabilities(self) -> HardwareCapabilities {
        match self {
            Self::Astc4x4Rgba => HardwareCapabilities::ASTC_LDR,
            Self::AstcHdr4x4Rgba | Self::AstcHdr6x6Rgba => HardwareCapabilities::ASTC_HDR,
            Self::Bc1Rgb | Self::Bc3Rgba | Self::Bc4R | Self::Bc5Rg | Self::Bc6h | Self::Bc7Rgba => {
                HardwareCapabilities::BC
            }
            Self::Etc1Rgb | Self::Etc2Rgba | Self::Etc2EacR11 | Self::Etc2EacRg11 => {
                HardwareCapabilities::ETC2
            }
            Self::Rgba32
            | Self::Rgb565
            | Self::Rgba4444
            | Self::RgbHalf
            | Self::RgbaHalf
            | Self::Rgb9e5 => HardwareCapabilities::NONE,
        }
    }

    /// Width of one block in pixels; 1 for uncompressed formats.
    pub const fn block_width(self) -> u32 {
        match self {
            Self::AstcHdr6x6Rgba => 6,
            _ if self.is_uncompressed() => 1,
            _ => 4,
        }
    }

    /// Height of one block in pixels; 1 for uncompressed formats.
    pub const fn block_height(self) -> u32 {
        self.block_width()
    }

    /// Bytes per block, or bytes per pixel for uncompressed formats.
    pub const fn bytes_per_block(self) -> u32 {
        match self {
            Self::Etc1Rgb | Self::Bc1Rgb | Self::Bc4R | Self::Etc2EacR11 => 8,
            Self::Etc2Rgba
            | Self::Bc3Rgba
            | Self::Bc5Rg
            | Self::Bc7Rgba
            | Self::Astc4x4Rgba
            | Self::Etc2EacRg11
            | Self::Bc6h
            | Self::AstcHdr4x4Rgba
            | Self::AstcHdr6x6Rgba => 16,
            Self::Rgba32 | Self::Rgb9e5 => 4,
            Self::Rgb565 | Self::Rgba4444 => 2,
            Self::RgbHalf => 6,
            Self::RgbaHalf => 8,
        }
    }

    /// Number of blocks (or pixels, for uncompressed formats) needed to hold
    /// an image of the given dimensions.
    ///
    /// Partial blocks at the right and bottom edges count as whole blocks.
    /// Returns [`None`] if the count does not fit in a [`u32`].
    ///
    /// ```
    /// use ktx2_transcode::TargetFormat;
    ///
    /// assert_eq!(TargetFormat::Bc7Rgba.block_count(5, 4), Some(2));
    /// assert_eq!(TargetFormat::Rgba32.block_count(5, 4), Some(20));
    /// ```
    pub const fn block_count(self, width: u32, height: u32) -> Option<u32> {
        let blocks_x = width.div_ceil(self.block_width());
        let blocks_y = height.div_ceil(self.block_height());
        blocks_x.checked_mul(blocks_y)
    }

    /// Size in bytes of an image of the given dimensions in this format.
    ///
    /// Returns [`None`] on arithmetic overflow.
    pub fn image_size_in_bytes(self, width: u32, height: u32) -> Option<usize> {
        let quantity = self.block_count(width, height)?;
        (quantity as usize).checked_mul(self.bytes_per_block() as usize)
    }

    /// Whether both dimensions are whole multiples of the block size.
    ///
    /// Some graphics APIs cannot derive mip sizes for block compressed
    /// textures whose base dimensions are not.
    pub const fn is_block_multiple(self, width: u32, height: u32) -> bool {
        width % self.block_width() == 0 && height % self.block_height() == 0
    }

    /// Short lowercase name, as accepted by the CLI.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Etc1Rgb => "etc1-rgb",
            Self::Etc2Rgba => "etc2-rgba",
            Self::Bc1Rgb => "bc1-rgb",
            Self::Bc3Rgba => "bc3-rgba",
            Self::Bc4R => "bc4-r",
            Self::Bc5Rg => "bc5-rg",
            Self::Bc7Rgba => "bc7-rgba",
            Self::Astc4x4Rgba => "astc-4x4-rgba",
            Self::Rgba32 => "rgba32",
            Self::Rgb565 => "rgb565",
            Self::Rgba4444 => "rgba4444",
            Self::Etc2EacR11 => "eac-r11",
            Self::Etc2EacRg11 => "eac-rg11",
            Self::Bc6h => "bc6h",
            Self::AstcHdr4x4Rgba => "astc-hdr-4x4-rgba",
            Self::RgbHalf => "rgb-half",
            Self::RgbaHalf => "rgba-half",
            Self::Rgb9e5 => "rgb9e5",
            Self::AstcHdr6x6Rgba => "astc-hdr-6x6-rgba",
        }
    }

    /// Looks up a format by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn raw_ids_round_trip() {
        for &format in TargetFormat::all_values() {
            assert_eq!(TargetFormat::from_raw(format.basis_id()), Some(format));
        }
        assert_eq!(TargetFormat::from_raw(7), None);
        assert_eq!(TargetFormat::from_raw(u32::MAX), None);
    }

    #[test]
    fn names_are_unique() {
        for &format in TargetFormat::all_values() {
            assert_eq!(TargetFormat::from_name(format.name()), Some(format));
        }
    }

    #[rstest]
    #[case(TargetFormat::Etc1Rgb, 8)]
    #[case(TargetFormat::Bc1Rgb, 8)]
    #[case(TargetFormat::Bc4R, 8)]
    #[case(TargetFormat::Etc2EacR11, 8)]
    #[case(TargetFormat::Bc7Rgba, 16)]
    #[case(TargetFormat::Etc2EacRg11, 16)]
    #[case(TargetFormat::AstcHdr6x6Rgba, 16)]
    #[case(TargetFormat::Rgba32, 4)]
    #[case(TargetFormat::Rgb565, 2)]
    #[case(TargetFormat::RgbHalf, 6)]
    #[case(TargetFormat::RgbaHalf, 8)]
    fn bytes_per_block_matches_format(#[case] format: TargetFormat, #[case] expected: u32) {
        assert_eq!(format.bytes_per_block(), expected);
    }

    #[rstest]
    #[case(TargetFormat::Bc7Rgba, 4, 4, 1)]
    #[case(TargetFormat::Bc7Rgba, 1, 1, 1)]
    #[case(TargetFormat::Bc7Rgba, 5, 5, 4)]
    #[case(TargetFormat::Bc7Rgba, 64, 32, 128)]
    #[case(TargetFormat::AstcHdr6x6Rgba, 12, 7, 4)]
    #[case(TargetFormat::Rgba32, 3, 5, 15)]
    #[case(TargetFormat::RgbaHalf, 1, 1, 1)]
    fn block_count_rounds_partial_blocks_up(
        #[case] format: TargetFormat,
        #[case] width: u32,
        #[case] height: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(format.block_count(width, height), Some(expected));
    }

    #[test]
    fn block_count_reports_overflow() {
        assert_eq!(TargetFormat::Rgba32.block_count(u32::MAX, 2), None);
        assert_eq!(TargetFormat::Bc7Rgba.block_count(u32::MAX, u32::MAX), None);
    }

    #[rstest]
    #[case(TargetFormat::Astc4x4Rgba, HardwareCapabilities::ASTC_LDR)]
    #[case(TargetFormat::AstcHdr4x4Rgba, HardwareCapabilities::ASTC_HDR)]
    #[case(TargetFormat::AstcHdr6x6Rgba, HardwareCapabilities::ASTC_HDR)]
    #[case(TargetFormat::Bc6h, HardwareCapabilities::BC)]
    #[case(TargetFormat::Bc4R, HardwareCapabilities::BC)]
    #[case(TargetFormat::Etc1Rgb, HardwareCapabilities::ETC2)]
    #[case(TargetFormat::Etc2EacRg11, HardwareCapabilities::ETC2)]
    #[case(TargetFormat::RgbaHalf, HardwareCapabilities::NONE)]
    fn required_capabilities_by_family(
        #[case] format: TargetFormat,
        #[case] expected: HardwareCapabilities,
    ) {
        assert_eq!(format.required_capabilities(), expected);
    }

    #[test]
    fn only_uncompressed_formats_need_no_capability() {
        for &format in TargetFormat::all_values() {
            assert_eq!(
                format.required_capabilities().is_empty(),
                format.is_uncompressed(),
                "{format}"
            );
        }
    }

    #[test]
    fn image_size_uses_bytes_per_block() {
        assert_eq!(TargetFormat::Rgba32.image_size_in_bytes(4, 4), Some(64));
        assert_eq!(TargetFormat::Rgba32.image_size_in_bytes(2, 2), Some(16));
        assert_eq!(TargetFormat::Bc1Rgb.image_size_in_bytes(8, 8), Some(32));
        assert_eq!(TargetFormat::Etc2EacRg11.image_size_in_bytes(2, 2), Some(16));
    }

    #[rstest]
    #[case(TargetFormat::Bc7Rgba, 64, 64, true)]
    #[case(TargetFormat::Bc7Rgba, 66, 64, false)]
    #[case(TargetFormat::AstcHdr6x6Rgba, 12, 18, true)]
    #[case(TargetFormat::AstcHdr6x6Rgba, 16, 16, false)]
    #[case(TargetFormat::Rgba32, 3, 7, true)]
    fn block_multiple_check(
        #[case] format: TargetFormat,
        #[case] width: u32,
        #[case] height: u32,
        #[case] expected: bool,
    ) {
        assert_eq!(format.is_block_multiple(width, height), expected);
    }
}
