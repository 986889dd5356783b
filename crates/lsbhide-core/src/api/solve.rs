use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::media::image::{FormatHint, LsbCodec, SignatureStatus};
use crate::media::{ImageMedia, LsbCodecOptions};
use crate::progress::{NoProgress, ProgressObserver};
use crate::LsbError;

pub fn prepare() -> SolveApi {
    SolveApi::default()
}

#[derive(Default, Debug)]
pub struct SolveApi {
    secret_image: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    format_hint: FormatHint,
    options: LsbCodecOptions,
}

/// What [`SolveApi::execute`] wrote.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SolveOutcome {
    pub bytes_written: usize,
    pub signature: SignatureStatus,
}

impl SolveApi {
    /// Use the same options the payload was hidden with
    pub fn with_options(mut self, options: LsbCodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the stego image that contains the payload
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file the recovered payload is written to
    pub fn into_payload_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// The format of the hidden payload, used to cut off trailing carrier bits
    pub fn with_format_hint(mut self, format_hint: FormatHint) -> Self {
        self.format_hint = format_hint;
        self
    }

    pub fn execute(self) -> Result<SolveOutcome, LsbError> {
        self.execute_with_progress(&mut NoProgress)
    }

    /// Execute the solve process and blocks until it is finished
    pub fn execute_with_progress(
        self,
        progress: &mut dyn ProgressObserver,
    ) -> Result<SolveOutcome, LsbError> {
        let Some(secret_image) = self.secret_image else {
            return Err(LsbError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(LsbError::TargetNotSet);
        };

        let media = ImageMedia::from_file(&secret_image)?;
        let extraction =
            LsbCodec::extract_with_progress(media.image(), &self.options, self.format_hint, progress);

        let mut destination = File::create(&destination_file)
            .map_err(|source| LsbError::WriteError { source })?;
        destination
            .write_all(&extraction.data)
            .map_err(|source| LsbError::WriteError { source })?;
        info!(
            "Recovered {} bytes into {destination_file:?}",
            extraction.data.len()
        );

        Ok(SolveOutcome {
            bytes_written: extraction.data.len(),
            signature: extraction.signature,
        })
    }
}
