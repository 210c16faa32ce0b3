use crate::buffer::PixelBuffer;
use crate::codec::{self, CodecError};
use crate::config::{Config, Mode};
use crate::ppm::Ppm;
use crate::{flow, orbit, preview};
use anyhow::Context;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

const PREVIEW_MAX_COLS: u16 = 180;
const PREVIEW_MIN_ROWS: usize = 16;
// Terminal cells are roughly twice as tall as wide.
const PREVIEW_ASPECT: f32 = 0.35;

pub fn run(cfg: Config) -> anyhow::Result<()> {
    let img = match cfg.mode {
        Mode::Flow => flow::render(
            cfg.width,
            cfg.height,
            cfg.steps,
            cfg.particles,
            cfg.seed,
            cfg.strength,
        )?,
        Mode::Orbit => orbit::render(cfg.width, cfg.height, cfg.iters, cfg.seed)?,
    };

    if cfg.ascii {
        let (cols, rows) = preview_grid(&img, cfg.ascii_width);
        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        preview::ascii_preview(&img, cols, rows, &mut out).context("write ASCII preview")?;
        out.flush().context("flush ASCII preview")?;
    }

    if let Some(path) = cfg.out.as_deref() {
        ensure_parent_dir(path)?;
        fs::write(path, Ppm::from_buffer(&img).to_bytes())
            .with_context(|| format!("write {}", path.display()))?;
        println!("wrote {}", path.display());
    }

    if let Some(path) = cfg.png.as_deref() {
        ensure_parent_dir(path)?;
        match codec::write_png(&img, path) {
            Ok(()) => println!("wrote {}", path.display()),
            Err(err @ CodecError::Unavailable(_)) if !cfg.require_png => {
                eprintln!("{err}");
            }
            Err(err) => {
                return Err(err).with_context(|| format!("write {}", path.display()));
            }
        }
    }

    Ok(())
}

fn preview_grid(img: &PixelBuffer, requested_cols: Option<u16>) -> (usize, usize) {
    let term_cols = crossterm::terminal::size()
        .map(|(c, _)| c)
        .unwrap_or(PREVIEW_MAX_COLS);
    let cap = requested_cols.unwrap_or_else(|| PREVIEW_MAX_COLS.min(term_cols));
    let cols = (img.width() as usize).min(cap.max(1) as usize);
    let rows =
        ((cols as f32 * img.height() as f32 / img.width() as f32) * PREVIEW_ASPECT) as usize;
    (cols, rows.max(PREVIEW_MIN_ROWS))
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("create output directory {}", parent.display()))
}
