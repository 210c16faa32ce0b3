use crate::buffer::{BufferError, PixelBuffer};

const VIEW_SCALE: f32 = 3.0;
const VIEW_CENTER: (f32, f32) = (-0.6, 0.0);
const BAILOUT: f32 = 4.0;

/// Circle trap in the complex plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trap {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

/// Iterate `z^2 + c` from the origin, tracking the orbit's closest approach
/// to the trap circle's boundary. Returns (min distance, escape iteration);
/// an orbit that never escapes returns `max_iter`.
pub fn trace_orbit(cr: f32, ci: f32, max_iter: u32, trap: &Trap) -> (f32, u32) {
    let mut zr = 0.0f32;
    let mut zi = 0.0f32;
    let mut mind = 1e9f32;
    for n in 0..max_iter {
        let zr2 = zr * zr - zi * zi + cr;
        zi = 2.0 * zr * zi + ci;
        zr = zr2;

        let dx = zr - trap.cx;
        let dy = zi - trap.cy;
        let d = ((dx * dx + dy * dy).sqrt() - trap.radius).abs();
        mind = mind.min(d);

        if zr * zr + zi * zi > BAILOUT {
            return (mind, n);
        }
    }
    (mind, max_iter)
}

fn colorize(mind: f32, n: u32, iters: u32) -> [f32; 3] {
    // Proximity boost saturates as the orbit grazes the trap; green peaks at
    // mid-range escape times.
    let u = (-4.0 * mind).exp();
    let v = n as f32 / iters.max(1) as f32;
    [
        0.2 + 0.8 * u,
        0.2 + 0.8 * (1.0 - (0.5 - v).abs() * 2.0),
        0.25 + 0.75 * (1.0 - u) * (0.4 + 0.6 * v),
    ]
}

pub fn render(width: u32, height: u32, iters: u32, seed: u64) -> Result<PixelBuffer, BufferError> {
    let mut img = PixelBuffer::new(width, height, [0.0; 3])?;
    let mut rng = fastrand::Rng::with_seed(seed);

    let trap = Trap {
        radius: 0.15 + 0.10 * rng.f32(),
        cx: (rng.f32() - 0.5) * 0.1,
        cy: (rng.f32() - 0.5) * 0.1,
    };
    log::info!(
        "orbit render {width}x{height}: {iters} iterations, seed {seed}, trap r={:.3} at ({:.3}, {:.3})",
        trap.radius,
        trap.cx,
        trap.cy
    );

    for y in 0..height {
        let im = (y as f32 / height as f32 - 0.5) * VIEW_SCALE + VIEW_CENTER.1;
        for x in 0..width {
            let re = (x as f32 / width as f32 - 0.5) * VIEW_SCALE + VIEW_CENTER.0;
            let (mind, n) = trace_orbit(re, im, iters, &trap);
            img.deposit(x as i32, y as i32, colorize(mind, n, iters), 1.0);
        }
    }
    Ok(img)
}
