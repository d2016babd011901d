#![cfg(not(tarpaulin_include))]

use crate::error::CliError;
use ktx2_transcode::{
    ChannelId, ChannelLayout, HardwareCapabilities, SourceEncoding, SupercompressedOrder,
    TargetFormat,
};

fn names<T: Copy>(values: &[T], name: impl Fn(T) -> &'static str) -> String {
    values
        .iter()
        .map(|&value| name(value))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn parse_source(value: &str) -> Result<SourceEncoding, String> {
    SourceEncoding::from_name(value)
        .filter(|source| *source != SourceEncoding::Unknown)
        .ok_or_else(|| {
            let known: Vec<_> = SourceEncoding::all_values()
                .iter()
                .copied()
                .filter(|source| *source != SourceEncoding::Unknown)
                .collect();
            format!(
                "Invalid source: {value}. Valid sources are: {}",
                names(&known, SourceEncoding::name)
            )
        })
}

pub fn parse_channels(value: &str) -> Result<ChannelLayout, String> {
    ChannelLayout::from_name(value).ok_or_else(|| {
        format!(
            "Invalid channels: {value}. Valid channels are: {}",
            names(ChannelLayout::all_values(), ChannelLayout::name)
        )
    })
}

pub fn parse_order(value: &str) -> Result<SupercompressedOrder, String> {
    SupercompressedOrder::from_name(value).ok_or_else(|| {
        format!(
            "Invalid order: {value}. Valid orders are: {}",
            names(SupercompressedOrder::all_values(), SupercompressedOrder::name)
        )
    })
}

pub fn parse_format(value: &str) -> Result<TargetFormat, String> {
    TargetFormat::from_name(value).ok_or_else(|| {
        format!(
            "Invalid format: {value}. Valid formats are: {}",
            names(TargetFormat::all_values(), TargetFormat::name)
        )
    })
}

/// Parses a comma separated capability list, e.g. `bc,etc2`. Accepts `none` and `all`.
pub fn parse_capabilities(value: &str) -> Result<HardwareCapabilities, String> {
    let mut caps = HardwareCapabilities::NONE;
    for name in value.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        caps |= match name.to_lowercase().as_str() {
            "none" => HardwareCapabilities::NONE,
            "all" => HardwareCapabilities::all(),
            other => HardwareCapabilities::from_name(other).ok_or_else(|| {
                format!(
                    "Invalid capability: {other}. Valid capabilities are: astc, astc-hdr, bc, etc2, all, none"
                )
            })?,
        };
    }
    Ok(caps)
}

/// Parses a pair of raw DFD channel identifiers, e.g. `3,4`.
pub fn parse_channel_ids(value: &str) -> Result<(ChannelId, ChannelId), String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<u8>()
            .map(ChannelId)
            .map_err(|e| format!("Invalid channel id: {part}. {e}"))
    };

    match value.split_once(',') {
        Some((first, second)) => Ok((parse(first)?, parse(second)?)),
        None => Ok((parse(value)?, ChannelId::default())),
    }
}

/// DFD channel identifiers that classify as `layout` for `source`.
pub fn channel_ids_for(source: SourceEncoding, layout: ChannelLayout) -> (ChannelId, ChannelId) {
    if source.is_universal_block_scheme() {
        let id = match layout {
            ChannelLayout::Rgb => ChannelId::UASTC_RGB,
            ChannelLayout::Rgba => ChannelId::UASTC_RGBA,
            ChannelLayout::R => ChannelId::UASTC_RRR,
            ChannelLayout::Rg => ChannelId::UASTC_RG,
        };
        return (id, ChannelId::default());
    }

    match layout {
        ChannelLayout::Rgb => (ChannelId::ETC1S_RGB, ChannelId::ETC1S_RGB),
        ChannelLayout::Rgba => (ChannelId::ETC1S_RGB, ChannelId::ETC1S_AAA),
        ChannelLayout::R => (ChannelId::ETC1S_RRR, ChannelId::ETC1S_RRR),
        ChannelLayout::Rg => (ChannelId::ETC1S_RRR, ChannelId::ETC1S_GGG),
    }
}

/// Resolves the `--channels`/`--channel-ids` pair of options into raw identifiers.
pub fn resolve_channel_ids(
    source: SourceEncoding,
    channels: Option<ChannelLayout>,
    channel_ids: Option<(ChannelId, ChannelId)>,
) -> Result<(ChannelId, ChannelId), CliError> {
    match (channels, channel_ids) {
        (Some(_), Some(_)) => Err(CliError::ConflictingChannels),
        (Some(layout), None) => Ok(channel_ids_for(source, layout)),
        (None, Some(ids)) => Ok(ids),
        (None, None) => Err(CliError::MissingChannels),
    }
}
