use crate::buffer::PixelBuffer;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

#[derive(Debug)]
pub enum CodecError {
    Unavailable(String),
    Io(String),
    Failed(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "PNG encoder unavailable: {msg}"),
            Self::Io(msg) => write!(f, "PNG encoder I/O error: {msg}"),
            Self::Failed(msg) => write!(f, "PNG encoder failed: {msg}"),
        }
    }
}

impl std::error::Error for CodecError {}

pub fn ensure_encoder_available() -> Result<(), CodecError> {
    match Command::new("ffmpeg")
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(CodecError::Unavailable(
            "ffmpeg not found in PATH (install ffmpeg or drop --png)".to_string(),
        )),
        Err(err) => Err(CodecError::Io(err.to_string())),
    }
}

/// Convert the buffer to PNG by feeding raw RGB24 to ffmpeg over stdin.
pub fn write_png(img: &PixelBuffer, path: &Path) -> Result<(), CodecError> {
    ensure_encoder_available()?;

    let mut child = Command::new("ffmpeg")
        .args(["-hide_banner", "-loglevel", "error", "-y"])
        .args(["-f", "rawvideo", "-pixel_format", "rgb24", "-video_size"])
        .arg(format!("{}x{}", img.width(), img.height()))
        .args(["-i", "-", "-frames:v", "1"])
        .arg(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| CodecError::Io(e.to_string()))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| CodecError::Io("failed to open encoder stdin".to_string()))?;
    stdin
        .write_all(&img.interleaved_rgb())
        .map_err(|e| CodecError::Io(e.to_string()))?;
    drop(stdin);

    let status = child.wait().map_err(|e| CodecError::Io(e.to_string()))?;
    if !status.success() {
        return Err(CodecError::Failed(format!("ffmpeg exited with status {status}")));
    }
    Ok(())
}
