use ktx2_transcode::TranscodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Transcode(#[from] TranscodeError),
    #[error("Either --channels or --channel-ids is required")]
    MissingChannels,
    #[error("--channels and --channel-ids cannot be used together")]
    ConflictingChannels,
}
