use std::path::PathBuf;

use clap::Args;
use lsbhide_core::readable_size;

use crate::cli::CodecArgs;
use crate::CliResult;

/// Shows how many bytes fit into an image
#[derive(Args, Debug)]
pub struct CapacityArgs {
    #[command(flatten)]
    pub codec: CodecArgs,

    /// Image to inspect
    #[arg(
        short = 'o',
        long = "original",
        value_name = "image file",
        required = true
    )]
    pub original: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let has_ignore_list = self
            .codec
            .ignore_list
            .as_ref()
            .is_some_and(|list| !list.is_empty());
        let bits = lsbhide_core::api::image_capacity(&self.original, &self.codec.options()?)?;

        println!("{bits} bits ({})", readable_size(bits / 8));
        if has_ignore_list {
            println!("Pixels with ignored colors are not subtracted, the usable capacity is lower.");
        }

        Ok(())
    }
}
