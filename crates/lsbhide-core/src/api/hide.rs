use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::media::image::{EmbedReport, LsbCodec};
use crate::media::{ImageMedia, LsbCodecOptions, Persist};
use crate::progress::{NoProgress, ProgressObserver};
use crate::LsbError;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    payload: Option<Vec<u8>>,
    payload_file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: LsbCodecOptions,
}

/// What [`HideApi::execute`] did.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HideOutcome {
    /// the stego image that was written
    pub output: PathBuf,
    pub report: EmbedReport,
}

impl HideApi {
    pub fn with_options(mut self, options: LsbCodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Hide these bytes, takes precedence over [`HideApi::with_payload_file`].
    pub fn with_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn with_payload_file<A: AsRef<Path>>(mut self, payload_file: A) -> Self {
        self.payload_file = Some(payload_file.as_ref().to_path_buf());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Where the stego image goes, by default next to the carrier as `<name>.png`
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the output
    /// If `None` is passed, the default output next to the carrier is used
    pub fn use_output<A: AsRef<Path>>(mut self, output: Option<A>) -> Self {
        self.output = output.map(|o| o.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<HideOutcome, LsbError> {
        self.execute_with_progress(&mut NoProgress)
    }

    /// Hides the payload and saves the stego image, even when the payload did
    /// not fit completely. Nothing is written when the capacity check fails.
    pub fn execute_with_progress(
        self,
        progress: &mut dyn ProgressObserver,
    ) -> Result<HideOutcome, LsbError> {
        let Some(image) = self.image else {
            return Err(LsbError::CarrierNotSet);
        };
        let payload = match (self.payload, self.payload_file) {
            (Some(payload), _) => payload,
            (None, Some(file)) => fs::read(&file).map_err(|source| LsbError::ReadError { source })?,
            (None, None) => return Err(LsbError::PayloadNotSet),
        };
        let output = self
            .output
            .unwrap_or_else(|| super::default_output_path(&image));

        let mut media = ImageMedia::from_file(&image)?;
        let report =
            LsbCodec::embed_with_progress(media.image_mut(), &payload, &self.options, progress)?;
        media.save_as(&output)?;

        if report.fully_embedded {
            info!("Payload of {} bytes hidden in {output:?}", payload.len());
        } else {
            info!(
                "Only {} of {} payload bits hidden in {output:?}",
                report.consumed_bits, report.total_bits
            );
        }

        Ok(HideOutcome { output, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_noise_image;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.bmp");
        prepare_noise_image(32, 32)
            .save(&carrier)
            .expect("Failed to write carrier");

        let outcome = crate::api::hide::prepare()
            .with_payload(b"Hello, World!".to_vec())
            .with_image(&carrier)
            .with_options(LsbCodecOptions::default().with_nlsb(2).unwrap())
            .execute()
            .expect("Failed to hide payload in image");

        assert_eq!(outcome.output, temp_dir.path().join("carrier.png"));
        assert!(outcome.report.fully_embedded);
        assert!(outcome.output.exists());
    }

    #[test]
    fn should_require_carrier_and_payload() {
        assert!(matches!(
            prepare().with_payload(vec![1]).execute(),
            Err(LsbError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().with_image("carrier.png").execute(),
            Err(LsbError::PayloadNotSet)
        ));
    }

    #[test]
    fn should_not_write_anything_when_the_payload_is_too_big() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("tiny.png");
        let output = temp_dir.path().join("out.png");
        prepare_noise_image(2, 2)
            .save(&carrier)
            .expect("Failed to write carrier");

        let result = prepare()
            .with_payload(vec![0; 16])
            .with_image(&carrier)
            .with_output(&output)
            .execute();

        assert!(matches!(result, Err(LsbError::CapacityExceeded { .. })));
        assert!(!output.exists());
    }
}
