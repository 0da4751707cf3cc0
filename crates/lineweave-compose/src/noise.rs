//! Seeded 2D coherent noise and the line-field sampler built on it.
//!
//! The noise is 2D simplex noise after Stefan Gustavson's reference
//! implementation, seeded through [`DeterministicRng`]. [`LineField`]
//! layers three octaves of it into the smooth-but-irregular per-line
//! length and opacity offsets the composition uses.

use crate::draw::shuffle;
use crate::rng::DeterministicRng;

/// A seeded 2D coherent-noise function.
pub trait Noise2D {
    /// Sample the noise at the given coordinates, roughly in [-1, 1].
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// 2D simplex noise generator.
#[derive(Clone)]
pub struct SimplexNoise {
    /// Permutation table, doubled so corner lookups never wrap.
    perm: [u8; 512],
}

impl SimplexNoise {
    /// Skewing factor for 2D: (sqrt(3) - 1) / 2.
    const F2: f64 = 0.3660254037844386;
    /// Unskewing factor for 2D: (3 - sqrt(3)) / 6.
    const G2: f64 = 0.21132486540518713;

    const GRAD2: [[f64; 2]; 12] = [
        [1.0, 1.0],
        [-1.0, 1.0],
        [1.0, -1.0],
        [-1.0, -1.0],
        [1.0, 0.0],
        [-1.0, 0.0],
        [1.0, 0.0],
        [-1.0, 0.0],
        [0.0, 1.0],
        [0.0, -1.0],
        [0.0, 1.0],
        [0.0, -1.0],
    ];

    /// Create a new simplex noise generator with the given seed.
    pub fn new(seed: u32) -> Self {
        let mut rng = DeterministicRng::new(seed);
        let mut source: [u8; 256] = std::array::from_fn(|i| i as u8);
        shuffle(&mut rng, &mut source);

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&source);
        perm[256..].copy_from_slice(&source);
        Self { perm }
    }

    #[inline]
    fn grad(&self, hash: usize, x: f64, y: f64) -> f64 {
        let g = &Self::GRAD2[hash % 12];
        g[0] * x + g[1] * y
    }

    /// Attenuated gradient contribution from one simplex corner.
    #[inline]
    fn corner(&self, gi: usize, x: f64, y: f64) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            0.0
        } else {
            let t2 = t * t;
            t2 * t2 * self.grad(gi, x, y)
        }
    }

    #[inline]
    fn fast_floor(x: f64) -> i32 {
        if x >= 0.0 {
            x as i32
        } else {
            x as i32 - 1
        }
    }
}

impl Noise2D for SimplexNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew into simplex cell space to find the containing cell.
        let s = (x + y) * Self::F2;
        let i = Self::fast_floor(x + s);
        let j = Self::fast_floor(y + s);

        // Unskew the cell origin and take distances from it.
        let t = (i + j) as f64 * Self::G2;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);

        // Lower or upper triangle of the cell.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + Self::G2;
        let y1 = y0 - j1 as f64 + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;

        let gi0 = self.perm[ii + self.perm[jj] as usize] as usize;
        let gi1 = self.perm[ii + i1 + self.perm[jj + j1] as usize] as usize;
        let gi2 = self.perm[ii + 1 + self.perm[jj + 1] as usize] as usize;

        let n = self.corner(gi0, x0, y0) + self.corner(gi1, x1, y1) + self.corner(gi2, x2, y2);

        // Scale into roughly [-1, 1].
        70.0 * n
    }
}

/// (weight, divisor) octave pairs for per-line length offsets.
const LENGTH_OCTAVES: [(f64, f64); 3] = [(3.0, 20.0), (0.2, 10.0), (0.1, 8.0)];

/// (weight, divisor) octave pairs for per-line opacity.
const OPACITY_OCTAVES: [(f64, f64); 3] = [(0.9091, 20.0), (0.0606, 10.0), (0.0303, 8.0)];

/// Per-line length/opacity field for one side of the composition.
#[derive(Clone)]
pub struct LineField {
    noise: SimplexNoise,
}

impl LineField {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: SimplexNoise::new(seed),
        }
    }

    /// Index 0 is remapped to 0.5: the noise is zero at the origin and a
    /// flat first line reads as a rendering glitch.
    #[inline]
    fn coord(index: u32) -> f64 {
        if index == 0 {
            0.5
        } else {
            f64::from(index)
        }
    }

    fn layered(&self, index: u32, octaves: &[(f64, f64)]) -> f64 {
        let x = Self::coord(index);
        octaves
            .iter()
            .map(|(weight, divisor)| weight * self.noise.sample(x / divisor, 0.0))
            .sum()
    }

    /// Noise-perturbed length for the line at `index`.
    pub fn length(&self, index: u32, base_length: f64) -> f64 {
        base_length + self.layered(index, &LENGTH_OCTAVES)
    }

    /// Opacity for the line at `index`, in [0, 1].
    pub fn opacity(&self, index: u32) -> f64 {
        self.layered(index, &OPACITY_OCTAVES).abs().min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplex_deterministic_across_instances() {
        let noise1 = SimplexNoise::new(42);
        let noise2 = SimplexNoise::new(42);

        for i in 0..100 {
            let x = i as f64 * 0.1;
            let y = i as f64 * 0.13;
            assert_eq!(noise1.sample(x, y), noise2.sample(x, y));
        }
    }

    #[test]
    fn test_simplex_range() {
        let noise = SimplexNoise::new(42);
        for i in 0..10_000 {
            let v = noise.sample(i as f64 * 0.01, i as f64 * 0.007);
            assert!((-1.5..=1.5).contains(&v));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let noise1 = SimplexNoise::new(42);
        let noise2 = SimplexNoise::new(43);

        let mut different = false;
        for i in 0..10 {
            let x = i as f64 * 0.1;
            if noise1.sample(x, 0.3) != noise2.sample(x, 0.3) {
                different = true;
                break;
            }
        }
        assert!(different);
    }

    #[test]
    fn test_line_field_index_zero_remap() {
        // Index 0 samples the noise at 0.5, not at the origin singularity.
        let field = LineField::new(7);
        let expected = 2.0
            + 3.0 * field.noise.sample(0.5 / 20.0, 0.0)
            + 0.2 * field.noise.sample(0.5 / 10.0, 0.0)
            + 0.1 * field.noise.sample(0.5 / 8.0, 0.0);
        assert!((field.length(0, 2.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_line_field_opacity_in_unit_interval() {
        let field = LineField::new(99);
        for i in 0..200 {
            let o = field.opacity(i);
            assert!((0.0..=1.0).contains(&o), "opacity {o} out of range");
        }
    }

    #[test]
    fn test_line_field_smoothness() {
        // Adjacent lines sample nearby noise coordinates; the field should
        // vary but not jump wildly between neighbors.
        let field = LineField::new(3);
        for i in 1..100 {
            let delta = (field.length(i, 2.0) - field.length(i + 1, 2.0)).abs();
            assert!(delta < 2.0, "length jumped by {delta} at index {i}");
        }
    }
}
