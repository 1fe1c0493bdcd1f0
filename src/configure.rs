//! Enumeration of the codecs FFmpeg's configure script can build.

use crate::{Error, Result};
use std::path::PathBuf;
use std::process::Command;

/// Which codec listing to ask configure for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecKind {
    Decoder,
    Encoder,
}

impl CodecKind {
    /// The listing argument passed to configure.
    pub fn list_arg(self) -> &'static str {
        match self {
            CodecKind::Decoder => "--list-decoders",
            CodecKind::Encoder => "--list-encoders",
        }
    }

    /// The subject used in `--disable-<subject>=` flags.
    pub fn subject(self) -> &'static str {
        match self {
            CodecKind::Decoder => "decoder",
            CodecKind::Encoder => "encoder",
        }
    }

    /// Plural subject, used in diagnostics.
    pub fn subjects(self) -> &'static str {
        match self {
            CodecKind::Decoder => "decoders",
            CodecKind::Encoder => "encoders",
        }
    }
}

/// A source of available codec names.
///
/// Production code runs FFmpeg's configure script; tests substitute a fake.
pub trait CodecSource {
    /// List the codec names configure can build, in configure's output order.
    fn list(&self, kind: CodecKind) -> Result<Vec<String>>;
}

/// Enumerates codecs by running `sh configure --list-...` inside the FFmpeg
/// checkout of an mplayer source tree.
#[derive(Debug, Clone)]
pub struct ConfigureScript {
    source_dir: PathBuf,
}

impl ConfigureScript {
    /// Default mplayer source tree, relative to the working directory.
    pub const DEFAULT_SOURCE_DIR: &'static str = "mplayer-trunk";

    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    /// The FFmpeg checkout inside the source tree. Also the working directory
    /// for the configure subprocess.
    pub fn ffmpeg_dir(&self) -> PathBuf {
        self.source_dir.join("ffmpeg")
    }

    /// Check that the source tree and its FFmpeg checkout exist.
    fn ensure_layout(&self) -> Result<PathBuf> {
        if !self.source_dir.is_dir() {
            return Err(Error::missing_directory(&self.source_dir));
        }
        let ffmpeg_dir = self.ffmpeg_dir();
        if !ffmpeg_dir.is_dir() {
            return Err(Error::missing_directory(ffmpeg_dir));
        }
        Ok(ffmpeg_dir)
    }
}

impl CodecSource for ConfigureScript {
    fn list(&self, kind: CodecKind) -> Result<Vec<String>> {
        let ffmpeg_dir = self.ensure_layout()?;

        tracing::debug!(
            "Running configure {} in {}",
            kind.list_arg(),
            ffmpeg_dir.display()
        );

        let output = Command::new("sh")
            .arg("configure")
            .arg(kind.list_arg())
            .current_dir(&ffmpeg_dir)
            .output()
            .map_err(|e| {
                Error::configure_failed(kind.subjects(), format!("failed to run configure: {e}"))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::configure_failed(
                kind.subjects(),
                format!("exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let codecs: Vec<String> = stdout.split_whitespace().map(str::to_string).collect();

        tracing::debug!("configure listed {} {}", codecs.len(), kind.subjects());
        Ok(codecs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_configure(ffmpeg_dir: &std::path::Path, body: &str) {
        fs::create_dir_all(ffmpeg_dir).unwrap();
        fs::write(ffmpeg_dir.join("configure"), body).unwrap();
    }

    #[test]
    fn test_missing_source_dir() {
        let temp = tempdir().unwrap();
        let configure = ConfigureScript::new(temp.path().join("mplayer-trunk"));

        let err = configure.list(CodecKind::Decoder).unwrap_err();
        assert!(matches!(err, Error::MissingDirectory { .. }));
        assert!(err.to_string().contains("mplayer-trunk"));
    }

    #[test]
    fn test_missing_ffmpeg_dir() {
        let temp = tempdir().unwrap();
        let source_dir = temp.path().join("mplayer-trunk");
        fs::create_dir_all(&source_dir).unwrap();

        let configure = ConfigureScript::new(&source_dir);
        let err = configure.list(CodecKind::Decoder).unwrap_err();
        assert!(matches!(err, Error::MissingDirectory { .. }));
        assert!(err.to_string().contains("ffmpeg"));
    }

    #[test]
    fn test_list_decoders() {
        let temp = tempdir().unwrap();
        let source_dir = temp.path().join("mplayer-trunk");
        write_configure(
            &source_dir.join("ffmpeg"),
            "#!/bin/sh\necho \"h264 vp8\nvp9\"\n",
        );

        let configure = ConfigureScript::new(&source_dir);
        let codecs = configure.list(CodecKind::Decoder).unwrap();
        assert_eq!(codecs, vec!["h264", "vp8", "vp9"]);
    }

    #[test]
    fn test_list_arg_reaches_script() {
        let temp = tempdir().unwrap();
        let source_dir = temp.path().join("mplayer-trunk");
        write_configure(&source_dir.join("ffmpeg"), "#!/bin/sh\necho \"$1\"\n");

        let configure = ConfigureScript::new(&source_dir);
        assert_eq!(
            configure.list(CodecKind::Decoder).unwrap(),
            vec!["--list-decoders"]
        );
        assert_eq!(
            configure.list(CodecKind::Encoder).unwrap(),
            vec!["--list-encoders"]
        );
    }

    #[test]
    fn test_nonzero_exit_is_fatal() {
        let temp = tempdir().unwrap();
        let source_dir = temp.path().join("mplayer-trunk");
        write_configure(
            &source_dir.join("ffmpeg"),
            "#!/bin/sh\necho \"broken tree\" >&2\nexit 3\n",
        );

        let configure = ConfigureScript::new(&source_dir);
        let err = configure.list(CodecKind::Encoder).unwrap_err();
        assert!(matches!(err, Error::ConfigureFailed { .. }));
        assert!(err.to_string().contains("encoders"));
        assert!(err.to_string().contains("broken tree"));
    }
}
