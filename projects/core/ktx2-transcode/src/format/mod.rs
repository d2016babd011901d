//! Descriptions of what a texture is stored as, what the GPU can sample, and
//! the formats a texture can be transcoded to.

mod capabilities;
mod channels;
mod source_encoding;
mod target_format;
mod transfer_function;

pub use capabilities::*;
pub use channels::*;
pub use source_encoding::*;
pub use target_format::*;
pub use transfer_function::*;
