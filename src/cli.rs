use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prepare-ffmpeg-flags")]
#[command(
    author,
    version,
    about = "Derives FFmpeg configure codec flags from a decoder allow-list"
)]
pub struct Cli {
    /// Decoder allow-list file
    #[arg(long, default_value = "enabled-decoders.txt", global = true)]
    pub decoders_file: String,

    /// mplayer source tree containing the ffmpeg checkout
    #[arg(long, default_value = "mplayer-trunk", global = true)]
    pub source_dir: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify the allow-list and source tree layout without running configure
    Check,
}
