/// Seeded value noise on a wrapping lattice of uniform samples in [0, 1).
pub struct ValueNoise {
    period: i64,
    grid: Vec<f32>,
}

impl ValueNoise {
    pub fn new(seed: u64, period: usize) -> Self {
        let period = period.max(1);
        let mut rng = fastrand::Rng::with_seed(seed);
        let grid = (0..period * period).map(|_| rng.f32()).collect();
        Self {
            period: period as i64,
            grid,
        }
    }

    pub fn period(&self) -> usize {
        self.period as usize
    }

    fn lattice(&self, ix: i64, iy: i64) -> f32 {
        let ix = ix.rem_euclid(self.period) as usize;
        let iy = iy.rem_euclid(self.period) as usize;
        self.grid[iy * self.period as usize + ix]
    }

    /// Bilinear sample with smoothstep easing. Lookups wrap modulo the
    /// period on both axes, so the field tiles and accepts any coordinate,
    /// negative included.
    pub fn sample(&self, x: f32, y: f32, freq: f32) -> f32 {
        let x = x * freq;
        let y = y * freq;
        let ix0 = x.floor() as i64;
        let iy0 = y.floor() as i64;
        let sx = smoothstep(x - ix0 as f32);
        let sy = smoothstep(y - iy0 as f32);

        let v00 = self.lattice(ix0, iy0);
        let v10 = self.lattice(ix0 + 1, iy0);
        let v01 = self.lattice(ix0, iy0 + 1);
        let v11 = self.lattice(ix0 + 1, iy0 + 1);

        let top = v00 + sx * (v10 - v00);
        let bottom = v01 + sx * (v11 - v01);
        top + sy * (bottom - top)
    }
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
