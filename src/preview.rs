use crate::buffer::PixelBuffer;
use std::io::Write;

// Sparse -> dense glyph ramp.
const RAMP: &[u8] = b" .:-=+*#%@";
const RAMP_GAIN: f32 = 1.2;

/// Downsample the buffer to a `cols` x `rows` character grid, one glyph per
/// cell by mean relative luminance of the linear channels.
pub fn ascii_preview(
    img: &PixelBuffer,
    cols: usize,
    rows: usize,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    if cols == 0 || rows == 0 {
        return Ok(());
    }
    let w = img.width() as usize;
    let h = img.height() as usize;
    let sx = w as f32 / cols as f32;
    let sy = h as f32 / rows as f32;

    let mut line = Vec::with_capacity(cols + 1);
    for j in 0..rows {
        let y0 = (j as f32 * sy) as usize;
        let y1 = (((j + 1) as f32) * sy) as usize;
        let y1 = y1.min(h);
        line.clear();
        for i in 0..cols {
            let x0 = (i as f32 * sx) as usize;
            let x1 = ((((i + 1) as f32) * sx) as usize).min(w);
            let mut sum = 0.0f32;
            let mut count = 0u32;
            for yy in y0..y1 {
                for xx in x0..x1 {
                    let [r, g, b] = img.pixel(xx as u32, yy as u32);
                    sum += 0.2126 * r + 0.7152 * g + 0.0722 * b;
                    count += 1;
                }
            }
            let avg = sum / count.max(1) as f32;
            let idx = (avg / (avg + 1.0) * (RAMP.len() - 1) as f32 * RAMP_GAIN) as usize;
            line.push(RAMP[idx.min(RAMP.len() - 1)]);
        }
        line.push(b'\n');
        out.write_all(&line)?;
    }
    Ok(())
}
