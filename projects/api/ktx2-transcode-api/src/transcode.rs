//! Bootstrap-checked, decoder-starting transcodes.

use ktx2_transcode::{transcode, SubImageDecoder, TextureContainer, TranscodeError};

use crate::bootstrap::is_bootstrapped;
use crate::options::TranscodeOptions;
use crate::plan::{plan_texture, TranscodePlan};
use crate::texture::{TextureData, TranscodedTexture};

/// Transcodes `container` into a newly allocated buffer.
///
/// Checks the bootstrap, starts `decoder`, plans the texture (format choice and
/// layout), allocates a zeroed 64 byte aligned buffer and decodes every image
/// into it.
///
/// # Errors
///
/// - [`TranscodeError::NotBootstrapped`] if [`bootstrap`](crate::bootstrap()) has not run
/// - [`TranscodeError::DecoderStartFailed`] if `decoder.start()` fails
/// - any planning error from [`plan_texture`]
/// - [`TranscodeError::AllocationFailed`] if the output cannot be allocated
/// - [`TranscodeError::DecodeFailed`] if the decoder fails on an image
///
/// Nothing is returned on failure; the partially written buffer is freed.
pub fn transcode_texture<C, D>(
    container: &C,
    decoder: &mut D,
    options: &TranscodeOptions,
) -> Result<TranscodedTexture, TranscodeError<D::Error>>
where
    C: TextureContainer + ?Sized,
    D: SubImageDecoder + ?Sized,
{
    let plan = start_and_plan(container, decoder, options)?;
    let mut data = TextureData::allocate(plan.total_size)?;
    decode_planned(container, decoder, &plan, data.as_mut_slice())?;
    Ok(TranscodedTexture { data, plan })
}

/// Transcodes `container` into a buffer owned by the caller.
///
/// Same as [`transcode_texture`], but writes into `output` instead of
/// allocating. `output` must be at least [`TranscodePlan::total_size`] bytes;
/// use [`plan_texture`] to find out beforehand.
///
/// # Errors
///
/// As [`transcode_texture`], plus [`TranscodeError::OutputBufferTooSmall`].
pub fn transcode_texture_into<C, D>(
    container: &C,
    decoder: &mut D,
    options: &TranscodeOptions,
    output: &mut [u8],
) -> Result<TranscodePlan, TranscodeError<D::Error>>
where
    C: TextureContainer + ?Sized,
    D: SubImageDecoder + ?Sized,
{
    let plan = start_and_plan(container, decoder, options)?;
    decode_planned(container, decoder, &plan, output)?;
    Ok(plan)
}

fn start_and_plan<C, D>(
    container: &C,
    decoder: &mut D,
    options: &TranscodeOptions,
) -> Result<TranscodePlan, TranscodeError<D::Error>>
where
    C: TextureContainer + ?Sized,
    D: SubImageDecoder + ?Sized,
{
    if !is_bootstrapped() {
        return Err(TranscodeError::NotBootstrapped);
    }

    decoder.start().map_err(TranscodeError::DecoderStartFailed)?;
    plan_texture(container, options).map_err(TranscodeError::widen)
}

fn decode_planned<C, D>(
    container: &C,
    decoder: &mut D,
    plan: &TranscodePlan,
    output: &mut [u8],
) -> Result<(), TranscodeError<D::Error>>
where
    C: TextureContainer + ?Sized,
    D: SubImageDecoder + ?Sized,
{
    let written = transcode(container, decoder, plan.format, output)?;
    tracing::debug!(
        format = %plan.format,
        is_srgb = plan.is_srgb,
        written,
        "transcoded texture"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn options(caps: HardwareCapabilities) -> TranscodeOptions {
        TranscodeOptions::builder().capabilities(caps).build()
    }

    #[test]
    fn transcodes_uastc_cubemap_to_astc() {
        ensure_bootstrapped();
        let container = InMemoryContainer::new(SourceEncoding::Uastc4x4, 8, 8)
            .with_levels(2)
            .with_faces(6)
            .with_channel_ids(ChannelId::UASTC_RGBA, ChannelId::default());
        let mut decoder = FillDecoder::default();

        let texture = transcode_texture(
            &container,
            &mut decoder,
            &options(HardwareCapabilities::ASTC_LDR),
        )
        .unwrap();

        assert!(decoder.started);
        assert_eq!(texture.format(), TargetFormat::Astc4x4Rgba);
        assert_eq!(texture.view_dimension(), ViewDimension::Cube);
        assert_eq!(texture.extent().depth_or_array_layers, 6);
        // Level 0: 4 blocks per face, level 1: 1 block per face.
        assert_eq!(texture.as_slice().len(), 6 * 4 * 16 + 6 * 16);
        assert_eq!(texture.layout().len(), 12);

        let face = texture.sub_image_data(1, 0, 5).unwrap();
        assert_eq!(face.len(), 16);
        assert!(face.iter().all(|&byte| byte == FillDecoder::fill_for(1, 0, 5)));
    }

    #[test]
    fn transcode_into_caller_buffer() {
        ensure_bootstrapped();
        let container = InMemoryContainer::new(SourceEncoding::Etc1s, 4, 4)
            .with_channel_ids(ChannelId::ETC1S_RGB, ChannelId::ETC1S_RGB);
        let mut decoder = FillDecoder::default();
        let mut output = vec![0u8; 64];

        let plan = transcode_texture_into(
            &container,
            &mut decoder,
            &options(HardwareCapabilities::NONE),
            &mut output,
        )
        .unwrap();

        assert_eq!(plan.format, TargetFormat::Rgba32);
        assert_eq!(plan.total_size, 64);
        assert!(output.iter().all(|&byte| byte == FillDecoder::fill_for(0, 0, 0)));
    }

    #[test]
    fn caller_buffer_too_small_is_reported() {
        ensure_bootstrapped();
        let container = InMemoryContainer::new(SourceEncoding::Etc1s, 4, 4);
        let mut decoder = FillDecoder::default();
        let mut output = vec![0u8; 63];

        assert!(matches!(
            transcode_texture_into(
                &container,
                &mut decoder,
                &options(HardwareCapabilities::NONE),
                &mut output,
            ),
            Err(TranscodeError::OutputBufferTooSmall {
                needed: 64,
                actual: 63
            })
        ));
    }

    #[test]
    fn decoder_start_failure_is_reported() {
        ensure_bootstrapped();
        let container = InMemoryContainer::new(SourceEncoding::Uastc4x4, 4, 4);
        let mut decoder = FillDecoder {
            fail_start: true,
            ..FillDecoder::default()
        };

        assert!(matches!(
            transcode_texture(&container, &mut decoder, &TranscodeOptions::default()),
            Err(TranscodeError::DecoderStartFailed("start failed"))
        ));
    }

    #[test]
    fn unknown_source_is_reported_after_start() {
        ensure_bootstrapped();
        let container = InMemoryContainer::new(SourceEncoding::Unknown, 4, 4);
        let mut decoder = FillDecoder::default();

        assert!(matches!(
            transcode_texture(&container, &mut decoder, &TranscodeOptions::default()),
            Err(TranscodeError::UnsupportedSourceFormat(SourceEncoding::Unknown))
        ));
        assert!(decoder.calls == 0);
    }
}
