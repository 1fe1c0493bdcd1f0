mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use prepare_ffmpeg_flags::{
    disable_codec_flags, enable_decoder_flags, AllowList, CodecKind, CodecSource, ConfigureScript,
};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise derive the level from --verbose.
    // Diagnostics go to stderr; stdout carries only the flag assignments.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "prepare_ffmpeg_flags=debug".to_string()
        } else {
            "prepare_ffmpeg_flags=warn".to_string()
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let decoders_file = expand_path(&cli.decoders_file);
    let source_dir = expand_path(&cli.source_dir);

    match cli.command {
        Some(Commands::Check) => check(&decoders_file, &source_dir),
        None => prepare_flags(&decoders_file, &source_dir),
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Print the three flag assignment lines, each as soon as it is computed.
/// A failure partway through leaves the earlier lines on stdout.
fn prepare_flags(decoders_file: &Path, source_dir: &Path) -> Result<()> {
    let allowlist = AllowList::load(decoders_file)?;
    tracing::debug!(
        "Loaded {} enabled decoders from {}",
        allowlist.len(),
        decoders_file.display()
    );

    let configure = ConfigureScript::new(source_dir);

    let decoders = configure.list(CodecKind::Decoder)?;
    println!(
        "DISABLED_DECODERS_FLAGS=\"{}\"",
        disable_codec_flags(CodecKind::Decoder, &decoders, &allowlist)
    );

    println!(
        "ENABLED_DECODERS_FLAGS=\"{}\"",
        enable_decoder_flags(&allowlist)
    );

    let encoders = configure.list(CodecKind::Encoder)?;
    println!(
        "DISABLED_ENCODERS_FLAGS=\"{}\"",
        disable_codec_flags(CodecKind::Encoder, &encoders, &allowlist)
    );

    Ok(())
}

/// Report whether the inputs the flag derivation needs are in place.
fn check(decoders_file: &Path, source_dir: &Path) -> Result<()> {
    let mut ok = true;

    match AllowList::load(decoders_file) {
        Ok(allowlist) => {
            println!(
                "{}: ok ({} decoders)",
                decoders_file.display(),
                allowlist.len()
            );
        }
        Err(e) => {
            ok = false;
            println!("{}: {}", decoders_file.display(), e);
        }
    }

    let configure = ConfigureScript::new(source_dir);
    let script = configure.ffmpeg_dir().join("configure");
    if script.is_file() {
        println!("{}: ok", script.display());
    } else {
        ok = false;
        println!("{}: not found", script.display());
    }

    if !ok {
        anyhow::bail!("environment is not ready");
    }
    Ok(())
}
