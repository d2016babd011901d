use core::fmt;
use derive_enum_all_values::AllValues;

/// The internal compression scheme of the Basis Universal payload inside a KTX2 container.
///
/// The discriminants match the raw `basis_tex_format` values stored by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u32)]
pub enum SourceEncoding {
    /// ETC1S with BasisLZ supercompression.
    Etc1s = 0,
    /// UASTC LDR 4x4, the universal block scheme.
    Uastc4x4 = 1,
    /// UASTC HDR 4x4.
    UastcHdr4x4 = 2,
    /// ASTC HDR 6x6.
    AstcHdr6x6 = 3,
    /// ASTC HDR 6x6, intermediate (supercompressed) representation.
    AstcHdr6x6Intermediate = 4,
    /// Any encoding this crate does not know how to pick a target for.
    Unknown = u32::MAX,
}

impl SourceEncoding {
    /// Converts a raw `basis_tex_format` value.
    ///
    /// Values outside the known set become [`SourceEncoding::Unknown`] rather than
    /// failing here; format selection is the place that rejects them.
    pub fn from_raw(value: u32) -> Self {
        match value {
            0 => Self::Etc1s,
            1 => Self::Uastc4x4,
            2 => Self::UastcHdr4x4,
            3 => Self::AstcHdr6x6,
            4 => Self::AstcHdr6x6Intermediate,
            _ => Self::Unknown,
        }
    }

    /// Whether this is the UASTC LDR 4x4 block scheme, whose channel identifiers
    /// use the UASTC numbering.
    ///
    /// HDR encodings are not included; their channel identifiers are read with
    /// the ETC1S numbering, and their target choice ignores channels anyway.
    pub fn is_universal_block_scheme(self) -> bool {
        self == Self::Uastc4x4
    }

    /// Whether this is the ETC1S/BasisLZ supercompressed scheme.
    pub fn is_supercompressed(self) -> bool {
        self == Self::Etc1s
    }

    /// Short lowercase name, as accepted by the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::Etc1s => "etc1s",
            Self::Uastc4x4 => "uastc",
            Self::UastcHdr4x4 => "uastc-hdr-4x4",
            Self::AstcHdr6x6 => "astc-hdr-6x6",
            Self::AstcHdr6x6Intermediate => "astc-hdr-6x6-intermediate",
            Self::Unknown => "unknown",
        }
    }

    /// Looks up an encoding by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|encoding| encoding.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
