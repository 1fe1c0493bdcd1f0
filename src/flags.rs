//! Derivation of the enable/disable flag strings.

use crate::allowlist::AllowList;
use crate::configure::CodecKind;

/// One `--enable-decoder=<name>` token per allow-listed decoder, space-joined.
///
/// Token order follows the set's iteration order, which is unspecified; each
/// flag is independent, so ordering does not change configure's behavior.
pub fn enable_decoder_flags(allowlist: &AllowList) -> String {
    let flags: Vec<String> = allowlist
        .iter()
        .map(|decoder| format!("--enable-decoder={decoder}"))
        .collect();
    flags.join(" ")
}

/// `--disable-decoder=` / `--disable-encoder=` tokens for the available
/// codecs, space-joined in the enumeration's order.
///
/// Allow-listed decoders are skipped so they remain enabled. Encoders are
/// disabled unconditionally; the allow-list only covers decoders.
pub fn disable_codec_flags(kind: CodecKind, available: &[String], allowlist: &AllowList) -> String {
    let subject = kind.subject();
    let flags: Vec<String> = available
        .iter()
        .map(|codec| codec.trim())
        .filter(|codec| !codec.is_empty())
        .filter(|codec| kind == CodecKind::Encoder || !allowlist.contains(codec))
        .map(|codec| format!("--disable-{subject}={codec}"))
        .collect();
    flags.join(" ")
}
