#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Output buffer allocation.
pub mod allocate;

/// Read-only view of a parsed texture container.
pub mod container;

/// The opaque sub-image decoder seam.
pub mod decoder;

/// Error types shared by selection and transcoding.
pub mod error;

/// Source encodings, channel layouts, hardware capabilities and target formats.
pub mod format;

/// Target format selection policy.
pub mod select;

/// Level/layer/face traversal, sizing and decoding.
pub mod transcode;

#[cfg(test)]
pub mod test_prelude;

pub use container::{ImageLevelInfo, InMemoryContainer, TextureContainer};
pub use decoder::SubImageDecoder;
pub use error::{TranscodeError, TranscodeResult};
pub use format::{
    classify_channels, classify_container, ChannelId, ChannelLayout, HardwareCapabilities,
    SourceEncoding, TargetFormat, TransferFunction,
};
pub use select::{
    select_for_container, select_target_format, SelectionPolicy, SupercompressedOrder,
    TargetSelection,
};
pub use transcode::{
    measure, sub_image_layout, transcode, walk_sub_images, DecodeSession, SubImage,
    SubImageVisitor,
};
