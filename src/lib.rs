//! # prepare-ffmpeg-flags
//!
//! Derives the codec enable/disable flags for FFmpeg's `configure` step
//! inside an mplayer source tree.
//!
//! The flags come from two inputs:
//! - a user-curated allow-list of decoder names (`enabled-decoders.txt`)
//! - FFmpeg's own enumeration of buildable codecs
//!   (`configure --list-decoders` / `configure --list-encoders`)
//!
//! Every available decoder outside the allow-list gets a
//! `--disable-decoder` flag, every allow-listed decoder gets an
//! `--enable-decoder` flag, and every available encoder gets a
//! `--disable-encoder` flag unconditionally.
//!
//! ## Example
//!
//! ```no_run
//! use prepare_ffmpeg_flags::{
//!     disable_codec_flags, AllowList, CodecKind, CodecSource, ConfigureScript,
//! };
//!
//! let allowlist = AllowList::load("enabled-decoders.txt")?;
//! let configure = ConfigureScript::new("mplayer-trunk");
//! let decoders = configure.list(CodecKind::Decoder)?;
//! println!("{}", disable_codec_flags(CodecKind::Decoder, &decoders, &allowlist));
//! # Ok::<(), prepare_ffmpeg_flags::Error>(())
//! ```

pub mod allowlist;
pub mod configure;
mod error;
pub mod flags;

// Re-exports
pub use allowlist::AllowList;
pub use configure::{CodecKind, CodecSource, ConfigureScript};
pub use error::{Error, Result};
pub use flags::{disable_codec_flags, enable_decoder_flags};
