use clap::{Args, Parser, Subcommand};
use lsbhide_core::media::image::{ColorMode, Direction, IgnoreList};
use lsbhide_core::LsbCodecOptions;

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Solve(solve::SolveArgs),
    Capacity(capacity::CapacityArgs),
}

/// Options that have to be identical for hiding and solving
#[derive(Args, Debug)]
pub struct CodecArgs {
    /// Pixel order: horizontal, vertical, diagonal-up or diagonal-down
    #[arg(short, long, value_name = "direction", default_value = "horizontal")]
    pub direction: Direction,

    /// Color channels to use, in order, for example `r`, `gb` or `bgr`
    #[arg(short = 'c', long = "colormode", value_name = "color mode", required = true)]
    pub color_mode: ColorMode,

    /// Number of least significant bits to use per channel
    #[arg(
        short,
        long,
        value_name = "bits",
        required = true,
        value_parser = clap::value_parser!(u8).range(1..=8)
    )]
    pub nlsb: u8,

    /// Colors to ignore in CSV format: HEX;HEX;...
    #[arg(short, long = "ignore", value_name = "colors")]
    pub ignore_list: Option<IgnoreList>,
}

impl CodecArgs {
    pub fn options(self) -> CliResult<LsbCodecOptions> {
        LsbCodecOptions::new(
            self.direction,
            self.color_mode,
            self.nlsb,
            self.ignore_list.unwrap_or_default(),
        )
    }
}
