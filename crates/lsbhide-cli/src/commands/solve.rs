use std::path::PathBuf;

use clap::Args;
use lsbhide_core::media::image::{FormatHint, SignatureStatus};

use crate::cli::CodecArgs;
use crate::progress_bar::ProgressBar;
use crate::CliResult;

/// Solves a payload out of the least significant bits of an image
#[derive(Args, Debug)]
pub struct SolveArgs {
    #[command(flatten)]
    pub codec: CodecArgs,

    /// Stego image that contains the payload
    #[arg(
        short = 'o',
        long = "original",
        value_name = "stego image file",
        required = true
    )]
    pub stego: PathBuf,

    /// Recovered payload will be stored in this file
    #[arg(short, long, value_name = "output payload file", default_value = "payload")]
    pub payload: PathBuf,

    /// File extension of the payload (png, jpg, jpeg or pdf), trims trailing data
    #[arg(short = 'e', long = "extension", value_name = "extension")]
    pub format_hint: Option<FormatHint>,
}

impl SolveArgs {
    pub fn run(self) -> CliResult<()> {
        let format_hint = self.format_hint.unwrap_or_default();
        let mut progress = ProgressBar::default();
        let outcome = lsbhide_core::api::solve::prepare()
            .with_options(self.codec.options()?)
            .from_secret_file(&self.stego)
            .into_payload_file(&self.payload)
            .with_format_hint(format_hint)
            .execute_with_progress(&mut progress)?;
        progress.finish();

        if outcome.signature == SignatureStatus::NotFound {
            eprintln!(
                "No {} end signature found, the payload is most likely not in this image with these options",
                format_hint
            );
        }
        println!(
            "Done! Wrote {} to {}",
            lsbhide_core::readable_size(outcome.bytes_written as u64),
            self.payload.display()
        );

        Ok(())
    }
}
