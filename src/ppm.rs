use crate::buffer::PixelBuffer;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PpmError {
    BadMagic,
    Header(String),
    Truncated { expected: usize, got: usize },
}

impl fmt::Display for PpmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMagic => write!(f, "not a binary PPM (missing P6 magic)"),
            Self::Header(msg) => write!(f, "malformed PPM header: {msg}"),
            Self::Truncated { expected, got } => {
                write!(f, "truncated PPM payload: expected {expected} bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for PpmError {}

/// Interleaved RGB24 image with the fixed-header binary PPM serialization:
/// `P6 <w> <h> 255\n` followed by `w*h*3` raw bytes, row-major.
#[derive(Debug)]
pub struct Ppm {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Ppm {
    pub fn from_buffer(img: &PixelBuffer) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            pixels: img.interleaved_rgb(),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let header = format!("P6 {} {} 255\n", self.width, self.height);
        let mut out = Vec::with_capacity(header.len() + self.pixels.len());
        out.extend_from_slice(header.as_bytes());
        out.extend_from_slice(&self.pixels);
        out
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, PpmError> {
        if !bytes.starts_with(b"P6") {
            return Err(PpmError::BadMagic);
        }

        // Three whitespace-separated decimal fields after the magic; the
        // payload starts right after the whitespace byte closing the third.
        let mut fields = [0u32; 3];
        let mut field = 0usize;
        let mut cur: Option<u64> = None;
        let mut pos = 2usize;
        while pos < bytes.len() && field < 3 {
            let b = bytes[pos];
            match b {
                b'0'..=b'9' => {
                    let v = cur.unwrap_or(0) * 10 + (b - b'0') as u64;
                    if v > u32::MAX as u64 {
                        return Err(PpmError::Header("field overflow".to_string()));
                    }
                    cur = Some(v);
                }
                b' ' | b'\t' | b'\r' | b'\n' => {
                    if let Some(v) = cur.take() {
                        fields[field] = v as u32;
                        field += 1;
                    }
                }
                _ => return Err(PpmError::Header(format!("unexpected byte 0x{b:02x}"))),
            }
            pos += 1;
        }
        if field < 3 {
            return Err(PpmError::Header("incomplete header".to_string()));
        }

        let [width, height, maxval] = fields;
        if maxval != 255 {
            return Err(PpmError::Header(format!("unsupported maxval {maxval}")));
        }
        if width == 0 || height == 0 {
            return Err(PpmError::Header("zero dimension".to_string()));
        }

        let expected = width as usize * height as usize * 3;
        let payload = &bytes[pos..];
        if payload.len() < expected {
            return Err(PpmError::Truncated {
                expected,
                got: payload.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: payload[..expected].to_vec(),
        })
    }
}
