use crate::buffer::{BufferError, PixelBuffer};
use crate::noise::ValueNoise;
use std::f32::consts::PI;

const NOISE_SEED_SALT: u64 = 0xBEEF;
const NOISE_PERIOD: usize = 1024;
const FIELD_SCALE: f32 = 350.0;
const FIELD_OCTAVES: u32 = 3;
const VELOCITY_DAMPING: f32 = 0.98;
const BOUNCE_DAMPING: f32 = -0.6;
const TRAIL_WEIGHT: f32 = 0.015;
const SPREAD_WEIGHT: f32 = 0.007;

struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
}

/// Fractal value noise mapped to a direction in [-pi, pi]. Octave `i`
/// samples at frequency `2^i / scale` with amplitude `0.5^i`.
pub fn flow_angle(noise: &ValueNoise, x: f32, y: f32, scale: f32, octaves: u32) -> f32 {
    let mut amp = 1.0f32;
    let mut val = 0.0f32;
    let mut norm = 0.0f32;
    for i in 0..octaves {
        let freq = 2f32.powi(i as i32) / scale;
        val += amp * noise.sample(x, y, freq);
        norm += amp;
        amp *= 0.5;
    }
    val /= norm.max(1e-6);
    (val * 2.0 - 1.0) * PI
}

// Three-stop gradient: midnight blue -> cyan -> warm amber.
fn palette(t: f32) -> [f32; 3] {
    const C1: [f32; 3] = [0.06, 0.10, 0.30];
    const C2: [f32; 3] = [0.00, 0.75, 0.75];
    const C3: [f32; 3] = [0.95, 0.70, 0.20];
    let (a, b, u) = if t < 0.5 {
        (C1, C2, t * 2.0)
    } else {
        (C2, C3, (t - 0.5) * 2.0)
    };
    [
        a[0] + u * (b[0] - a[0]),
        a[1] + u * (b[1] - a[1]),
        a[2] + u * (b[2] - a[2]),
    ]
}

pub fn render(
    width: u32,
    height: u32,
    steps: u32,
    n_particles: u32,
    seed: u64,
    strength: f32,
) -> Result<PixelBuffer, BufferError> {
    let mut img = PixelBuffer::new(width, height, [0.0; 3])?;
    let noise = ValueNoise::new(seed ^ NOISE_SEED_SALT, NOISE_PERIOD);
    let mut rng = fastrand::Rng::with_seed(seed);

    log::info!("flow render {width}x{height}: {n_particles} particles, {steps} steps, seed {seed}");

    // Seed particles on a loose ring so trails cover the frame evenly.
    let cx = width as f32 * 0.5;
    let cy = height as f32 * 0.5;
    let rad = width.min(height) as f32 * 0.35;
    let mut particles = Vec::with_capacity(n_particles as usize);
    for _ in 0..n_particles {
        let ang = rng.f32() * 2.0 * PI;
        let r = rad * (0.65 + 0.35 * rng.f32());
        particles.push(Particle {
            x: cx + r * ang.cos(),
            y: cy + r * ang.sin(),
            vx: 0.0,
            vy: 0.0,
        });
    }

    let w = width as f32;
    let h = height as f32;
    for s in 0..steps {
        let t = s as f32 / steps.saturating_sub(1).max(1) as f32;
        let col = palette(t);
        for p in &mut particles {
            let ang = flow_angle(&noise, p.x, p.y, FIELD_SCALE, FIELD_OCTAVES);
            p.vx = (p.vx + ang.cos() * strength) * VELOCITY_DAMPING;
            p.vy = (p.vy + ang.sin() * strength) * VELOCITY_DAMPING;
            p.x += p.vx;
            p.y += p.vy;

            // Soft bounce at the rim: flip and damp velocity only. Position
            // stays where it is; off-image deposits fall out in the bounds
            // check.
            if p.x < 1.0 || p.x >= w - 1.0 {
                p.vx *= BOUNCE_DAMPING;
            }
            if p.y < 1.0 || p.y >= h - 1.0 {
                p.vy *= BOUNCE_DAMPING;
            }

            // Smear each sample over three pixels to soften aliasing.
            let ix = p.x as i32;
            let iy = p.y as i32;
            img.deposit(ix, iy, col, TRAIL_WEIGHT);
            img.deposit(ix + 1, iy, col, SPREAD_WEIGHT);
            img.deposit(ix, iy + 1, col, SPREAD_WEIGHT);
        }
    }
    Ok(img)
}
