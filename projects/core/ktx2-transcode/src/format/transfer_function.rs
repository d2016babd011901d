/// Raw KTX2 DFD transfer function.
///
/// Orthogonal to format selection: it only decides whether the chosen format
/// is sampled with sRGB decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TransferFunction(pub u8);

impl TransferFunction {
    /// Linear transfer.
    pub const LINEAR: Self = Self(1);
    /// sRGB transfer.
    pub const SRGB: Self = Self(2);

    /// `true` only for [`TransferFunction::SRGB`].
    pub const fn is_srgb(self) -> bool {
        self.0 == Self::SRGB.0
    }
}
