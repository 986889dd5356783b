use std::path::PathBuf;

use clap::Args;

use crate::cli::CodecArgs;
use crate::progress_bar::ProgressBar;
use crate::CliResult;

/// Hides a payload file in the least significant bits of an image
#[derive(Args, Debug)]
pub struct HideArgs {
    #[command(flatten)]
    pub codec: CodecArgs,

    /// Original image, used readonly.
    #[arg(
        short = 'o',
        long = "original",
        value_name = "image file",
        required = true
    )]
    pub original: PathBuf,

    /// File to hide in the image
    #[arg(short, long, value_name = "payload file", default_value = "payload")]
    pub payload: PathBuf,

    /// Final image will be stored as PNG file, by default next to the original
    #[arg(long = "out", value_name = "output image file")]
    pub write_to_file: Option<PathBuf>,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let mut progress = ProgressBar::default();
        let outcome = lsbhide_core::api::hide::prepare()
            .with_options(self.codec.options()?)
            .with_image(&self.original)
            .with_payload_file(&self.payload)
            .use_output(self.write_to_file)
            .execute_with_progress(&mut progress)?;
        progress.finish();

        if outcome.report.fully_embedded {
            println!(
                "Done! Successfully encoded payload in image! See {}",
                outcome.output.display()
            );
        } else {
            println!(
                "Unable to encode full payload in image, saving what we can in {}",
                outcome.output.display()
            );
        }

        Ok(())
    }
}
