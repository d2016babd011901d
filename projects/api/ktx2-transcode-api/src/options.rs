//! Runtime configuration for transcoding.

use ktx2_transcode::{HardwareCapabilities, SelectionPolicy, SupercompressedOrder};

/// Configuration for a transcode.
///
/// Build with [`TranscodeOptions::builder`]. The default has no hardware
/// capabilities (uncompressed output only) and the default selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranscodeOptions {
    capabilities: HardwareCapabilities,
    policy: SelectionPolicy,
}

impl TranscodeOptions {
    /// Starts a builder.
    pub fn builder() -> TranscodeOptionsBuilder {
        TranscodeOptionsBuilder::new()
    }

    /// Compressed formats the hardware can sample.
    pub fn capabilities(&self) -> HardwareCapabilities {
        self.capabilities
    }

    /// Format selection tunables.
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }
}

/// Builder for [`TranscodeOptions`].
///
/// # Examples
///
/// ```
/// use ktx2_transcode_api::{HardwareCapabilities, SupercompressedOrder, TranscodeOptions};
///
/// let options = TranscodeOptions::builder()
///     .capabilities(HardwareCapabilities::BC)
///     .add_capabilities(HardwareCapabilities::ETC2)
///     .supercompressed_order(SupercompressedOrder::EtcFirst)
///     .build();
///
/// assert!(options.capabilities().contains(HardwareCapabilities::ETC2));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscodeOptionsBuilder {
    capabilities: Option<HardwareCapabilities>,
    supercompressed_order: Option<SupercompressedOrder>,
}

impl TranscodeOptionsBuilder {
    /// Create a new builder with nothing set.
    pub fn new() -> Self {
        Self {
            capabilities: None,
            supercompressed_order: None,
        }
    }

    /// Set the hardware capabilities, replacing any set before.
    pub fn capabilities(mut self, capabilities: HardwareCapabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// Add hardware capabilities to those already set.
    pub fn add_capabilities(mut self, capabilities: HardwareCapabilities) -> Self {
        self.capabilities = Some(self.capabilities.unwrap_or_default() | capabilities);
        self
    }

    /// Set which block family is tried first for ETC1S sources.
    ///
    /// Defaults to [`SupercompressedOrder::BcFirst`].
    pub fn supercompressed_order(mut self, order: SupercompressedOrder) -> Self {
        self.supercompressed_order = Some(order);
        self
    }

    /// Build the options, filling unset values with defaults.
    pub fn build(self) -> TranscodeOptions {
        TranscodeOptions {
            capabilities: self.capabilities.unwrap_or_default(),
            policy: SelectionPolicy {
                supercompressed_order: self.supercompressed_order.unwrap_or_default(),
            },
        }
    }
}
