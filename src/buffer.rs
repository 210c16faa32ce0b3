use std::fmt;

pub const DEFAULT_GAMMA: f32 = 1.8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    InvalidDimension { width: u32, height: u32 },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "image dimensions must be positive (got {width}x{height})")
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// Linear-light accumulation target shared by both engines. Channels are
/// clamped to [0, 1] on every write; index mapping is `y * width + x`.
#[derive(Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    r: Vec<f32>,
    g: Vec<f32>,
    b: Vec<f32>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, background: [f32; 3]) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimension { width, height });
        }
        let n = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            r: vec![background[0]; n],
            g: vec![background[1]; n],
            b: vec![background[2]; n],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn idx(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }

    /// Additive deposit, clamped to 1.0 per channel. Out-of-bounds writes
    /// are silently dropped.
    pub fn deposit(&mut self, x: i32, y: i32, color: [f32; 3], weight: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = self.idx(x as u32, y as u32);
        self.r[i] = (self.r[i] + color[0] * weight).min(1.0);
        self.g[i] = (self.g[i] + color[1] * weight).min(1.0);
        self.b[i] = (self.b[i] + color[2] * weight).min(1.0);
    }

    pub fn pixel(&self, x: u32, y: u32) -> [f32; 3] {
        let i = self.idx(x, y);
        [self.r[i], self.g[i], self.b[i]]
    }

    /// Soft roll-off for highlights plus gamma to lift midtones.
    pub fn tone_map(&self, gamma: f32) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        let map = |&c: &f32| -> u8 {
            let c = c / (1.0 + c);
            let c = c.clamp(0.0, 1.0).powf(1.0 / gamma);
            (c * 255.0).round() as u8
        };
        (
            self.r.iter().map(map).collect(),
            self.g.iter().map(map).collect(),
            self.b.iter().map(map).collect(),
        )
    }

    /// Tone-mapped bytes interleaved R,G,B per pixel, row-major top-to-bottom.
    pub fn interleaved_rgb(&self) -> Vec<u8> {
        let (r, g, b) = self.tone_map(DEFAULT_GAMMA);
        let mut out = Vec::with_capacity(r.len() * 3);
        for i in 0..r.len() {
            out.push(r[i]);
            out.push(g[i]);
            out.push(b[i]);
        }
        out
    }
}
