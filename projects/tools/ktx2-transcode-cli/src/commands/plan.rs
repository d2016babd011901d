use crate::error::CliError;
use crate::util::{
    parse_capabilities, parse_channel_ids, parse_channels, parse_format, parse_order, parse_source,
    resolve_channel_ids,
};
use argh::FromArgs;
use bytesize::ByteSize;
use ktx2_transcode::{
    sub_image_layout, ChannelId, ChannelLayout, HardwareCapabilities, InMemoryContainer,
    SourceEncoding, SubImage, SupercompressedOrder, TargetFormat, TransferFunction,
};
use ktx2_transcode_api::{plan_texture, TranscodeOptions};

#[derive(FromArgs, Debug)]
/// Print the packed output layout of a synthetic mip chain
#[argh(subcommand, name = "plan")]
pub struct PlanCmd {
    /// source encoding: etc1s, uastc, uastc-hdr-4x4, astc-hdr-6x6, astc-hdr-6x6-intermediate
    #[argh(option, from_str_fn(parse_source))]
    pub source: SourceEncoding,

    /// base level width in pixels
    #[argh(option)]
    pub width: u32,

    /// base level height in pixels
    #[argh(option)]
    pub height: u32,

    /// number of mip levels [default: 1]
    #[argh(option, default = "1")]
    pub levels: u32,

    /// declared array layer count, 0 for a non-array texture [default: 0]
    #[argh(option, default = "0")]
    pub layers: u32,

    /// number of faces, 1 or 6 [default: 1]
    #[argh(option, default = "1")]
    pub faces: u32,

    /// channel layout: rgb, rgba, r, rg
    #[argh(option, from_str_fn(parse_channels))]
    pub channels: Option<ChannelLayout>,

    /// raw DFD channel ids, e.g. `3,4`
    #[argh(option, from_str_fn(parse_channel_ids))]
    pub channel_ids: Option<(ChannelId, ChannelId)>,

    /// comma separated hardware capabilities: astc, astc-hdr, bc, etc2, all, none [default: none]
    #[argh(option, from_str_fn(parse_capabilities), default = "HardwareCapabilities::NONE")]
    pub caps: HardwareCapabilities,

    /// family order for etc1s sources: bc-first, etc-first [default: bc-first]
    #[argh(option, from_str_fn(parse_order), default = "SupercompressedOrder::BcFirst")]
    pub order: SupercompressedOrder,

    /// lay out in this format instead of the selected one
    #[argh(option, from_str_fn(parse_format))]
    pub format: Option<TargetFormat>,

    /// mark the texture as sRGB
    #[argh(switch)]
    pub srgb: bool,
}

pub fn handle_plan_command(cmd: PlanCmd) -> Result<(), CliError> {
    let (first, second) = resolve_channel_ids(cmd.source, cmd.channels, cmd.channel_ids)?;
    let transfer_function = if cmd.srgb {
        TransferFunction::SRGB
    } else {
        TransferFunction::LINEAR
    };
    let container = InMemoryContainer::new(cmd.source, cmd.width, cmd.height)
        .with_levels(cmd.levels)
        .with_layers(cmd.layers)
        .with_faces(cmd.faces)
        .with_channel_ids(first, second)
        .with_transfer_function(transfer_function);

    let options = TranscodeOptions::builder()
        .capabilities(cmd.caps)
        .supercompressed_order(cmd.order)
        .build();
    let plan = plan_texture(&container, &options)?;

    let (format, layout) = match cmd.format {
        Some(format) => (format, sub_image_layout(&container, format)?),
        None => (plan.format, plan.layout.clone()),
    };
    let total_size = layout.last().map_or(0, |image| image.offset + image.size);

    println!("Format: {format} (selected: {})", plan.format);
    println!("Channels: {}", plan.channels.name());
    println!("sRGB: {}", plan.is_srgb);
    println!("View: {:?}", plan.view_dimension);
    let extent = plan.extent();
    println!(
        "Extent: {}x{}x{}",
        extent.width, extent.height, extent.depth_or_array_layers
    );
    if !format.is_block_multiple(cmd.width, cmd.height) {
        println!(
            "Warning: {}x{} is not a multiple of the {}x{} block size",
            cmd.width,
            cmd.height,
            format.block_width(),
            format.block_height()
        );
    }
    println!();

    print_layout(&layout);
    println!("\nTotal: {} ({total_size} bytes)", ByteSize(total_size as u64));
    Ok(())
}

fn print_layout(layout: &[SubImage]) {
    println!(
        "{:>5} {:>5} {:>4} {:>11} {:>9} {:>12} {:>12}",
        "level", "layer", "face", "size", "blocks", "offset", "bytes"
    );
    for image in layout {
        println!(
            "{:>5} {:>5} {:>4} {:>11} {:>9} {:>12} {:>12}",
            image.level,
            image.layer,
            image.face,
            format!("{}x{}", image.width, image.height),
            image.quantity,
            image.offset,
            image.size
        );
    }
}
