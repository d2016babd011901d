use crate::error::CliError;
use crate::util::{
    parse_capabilities, parse_channel_ids, parse_channels, parse_order, parse_source,
    resolve_channel_ids,
};
use argh::FromArgs;
use ktx2_transcode::{
    classify_channels, select_target_format, ChannelId, ChannelLayout, HardwareCapabilities,
    SelectionPolicy, SourceEncoding, SupercompressedOrder,
};

#[derive(FromArgs, Debug)]
/// Print the target format chosen for a source encoding, channel layout and hardware
#[argh(subcommand, name = "select")]
pub struct SelectCmd {
    /// source encoding: etc1s, uastc, uastc-hdr-4x4, astc-hdr-6x6, astc-hdr-6x6-intermediate
    #[argh(option, from_str_fn(parse_source))]
    pub source: SourceEncoding,

    /// channel layout: rgb, rgba, r, rg
    #[argh(option, from_str_fn(parse_channels))]
    pub channels: Option<ChannelLayout>,

    /// raw DFD channel ids, e.g. `3,4`; classified the way the container would be
    #[argh(option, from_str_fn(parse_channel_ids))]
    pub channel_ids: Option<(ChannelId, ChannelId)>,

    /// comma separated hardware capabilities: astc, astc-hdr, bc, etc2, all, none [default: none]
    #[argh(option, from_str_fn(parse_capabilities), default = "HardwareCapabilities::NONE")]
    pub caps: HardwareCapabilities,

    /// family order for etc1s sources: bc-first, etc-first [default: bc-first]
    #[argh(option, from_str_fn(parse_order), default = "SupercompressedOrder::BcFirst")]
    pub order: SupercompressedOrder,

    /// also print the decision for every capability combination
    #[argh(switch)]
    pub all_caps: bool,
}

pub fn handle_select_command(cmd: SelectCmd) -> Result<(), CliError> {
    let (first, second) = resolve_channel_ids(cmd.source, cmd.channels, cmd.channel_ids)?;
    let channels = classify_channels(cmd.source.is_universal_block_scheme(), first, second);
    let policy = SelectionPolicy {
        supercompressed_order: cmd.order,
    };

    let format = select_target_format(cmd.source, channels, cmd.caps, policy)?;
    println!("Source: {}", cmd.source);
    println!("Channels: {}", channels.name());
    println!("Capabilities: {}", cmd.caps);
    println!("Order: {}", cmd.order);
    println!("Format: {format}");
    print_wgpu_format(format);

    if cmd.all_caps {
        println!("\n{:<24} Format", "Capabilities");
        for bits in 0..=HardwareCapabilities::all().bits() {
            let caps = HardwareCapabilities::from_bits_truncate(bits);
            let format = select_target_format(cmd.source, channels, caps, policy)?;
            println!("{:<24} {format}", caps.to_string());
        }
    }

    Ok(())
}

#[cfg(feature = "wgpu")]
fn print_wgpu_format(format: ktx2_transcode::TargetFormat) {
    use ktx2_transcode_api::wgpu::to_wgpu_format;
    match (to_wgpu_format(format, false), to_wgpu_format(format, true)) {
        (Some(linear), Some(srgb)) => println!("wgpu: {linear:?} / {srgb:?}"),
        _ => println!("wgpu: no equivalent"),
    }
}

#[cfg(not(feature = "wgpu"))]
fn print_wgpu_format(_format: ktx2_transcode::TargetFormat) {}
