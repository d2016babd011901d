use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

/// The set of compressed texture families the running GPU can sample.
///
/// Supplied by the caller for every selection; never mutated by this crate.
///
/// ```
/// use ktx2_transcode::HardwareCapabilities;
///
/// let caps = HardwareCapabilities::BC | HardwareCapabilities::ETC2;
/// assert!(caps.contains(HardwareCapabilities::BC));
/// assert!(!caps.contains(HardwareCapabilities::ASTC_LDR));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HardwareCapabilities(u8);

impl HardwareCapabilities {
    /// No compressed formats; only uncompressed fallbacks are available.
    pub const NONE: Self = Self(0);
    /// ASTC LDR block formats.
    pub const ASTC_LDR: Self = Self(1 << 0);
    /// ASTC HDR block formats.
    pub const ASTC_HDR: Self = Self(1 << 1);
    /// BC1-BC7 block formats.
    pub const BC: Self = Self(1 << 2);
    /// ETC2 and EAC block formats.
    pub const ETC2: Self = Self(1 << 3);

    const NAMED: [(Self, &'static str); 4] = [
        (Self::ASTC_LDR, "astc"),
        (Self::ASTC_HDR, "astc-hdr"),
        (Self::BC, "bc"),
        (Self::ETC2, "etc2"),
    ];

    /// Every capability this crate knows about.
    pub const fn all() -> Self {
        Self(Self::ASTC_LDR.0 | Self::ASTC_HDR.0 | Self::BC.0 | Self::ETC2.0)
    }

    /// Raw bit representation.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds a set from raw bits, discarding unknown bits.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::all().0)
    }

    /// Whether every capability in `other` is present in `self`.
    ///
    /// [`HardwareCapabilities::NONE`] is contained in every set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no capability is present.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `self` with `other` added.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Looks up a single capability by name (`astc`, `astc-hdr`, `bc`, `etc2`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMED
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(caps, _)| *caps)
    }

    /// Iterates over the names of the capabilities present in this set.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .into_iter()
            .filter(move |(caps, _)| !caps.is_empty() && self.contains(*caps))
            .map(|(_, name)| name)
    }
}

impl BitOr for HardwareCapabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for HardwareCapabilities {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for HardwareCapabilities {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for HardwareCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }

        let mut first = true;
        for name in self.names() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}
