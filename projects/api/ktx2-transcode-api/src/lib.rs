#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod bootstrap;
pub mod options;
pub mod plan;
pub mod texture;
pub mod transcode;

#[cfg(feature = "wgpu")]
pub mod wgpu;

#[cfg(test)]
pub mod test_prelude;

pub use bootstrap::{bootstrap, is_bootstrapped, try_bootstrap};
pub use options::{TranscodeOptions, TranscodeOptionsBuilder};
pub use plan::{plan_texture, Extent3d, TranscodePlan, ViewDimension};
pub use texture::{TextureData, TranscodedTexture};
pub use transcode::{transcode_texture, transcode_texture_into};

// Types callers need to describe inputs and read results.
pub use ktx2_transcode::{
    ChannelLayout, HardwareCapabilities, SelectionPolicy, SourceEncoding, SubImage,
    SubImageDecoder, SupercompressedOrder, TargetFormat, TextureContainer, TranscodeError,
};
