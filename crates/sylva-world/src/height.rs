use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};
use sylva_geom::Vec2;

use crate::grid::TileGrid;
use crate::seed::WorldSeed;
use crate::worldgen::WorldGenParams;

// Peak slope of the quintic fade 6t^5 - 15t^4 + 10t^3; bounds the hermite fade too.
const FADE_PEAK_SLOPE: f32 = 1.875;

/// Deterministic surface height per tile column, in screen pixels (y down).
pub struct HeightField {
    noise: FastNoiseLite,
    grid: TileGrid,
    baseline: f32,
    amplitude: f32,
    min_y: f32,
    max_y: f32,
    frequency: f32,
    octaves: i32,
    gain: f32,
    lacunarity: f32,
    clearance: f32,
}

impl HeightField {
    pub fn new(seed: WorldSeed, params: &WorldGenParams, viewport_height: f32) -> Self {
        let grid = TileGrid::new(params.tile_size);
        let tile = grid.tile() as f32;

        let mut noise = FastNoiseLite::with_seed(seed.noise_seed());
        noise.set_noise_type(Some(NoiseType::Value));
        noise.set_frequency(Some(params.height_frequency));
        noise.set_fractal_type(Some(FractalType::FBm));
        noise.set_fractal_octaves(Some(params.height_octaves.max(1)));
        noise.set_fractal_gain(Some(params.height_gain));
        noise.set_fractal_lacunarity(Some(params.height_lacunarity));

        let min_y = (viewport_height * params.min_y_ratio / tile).ceil() * tile;
        // Keep at least the top block of every column on screen.
        let lowest_visible = (viewport_height / tile).floor() * tile - tile;
        let mut max_y = ((viewport_height * params.max_y_ratio / tile).floor() * tile)
            .min(lowest_visible);
        if max_y < min_y {
            max_y = min_y;
        }

        Self {
            noise,
            grid,
            baseline: viewport_height * params.baseline_ratio,
            amplitude: params.amplitude_tiles * tile,
            min_y,
            max_y,
            frequency: params.height_frequency,
            octaves: params.height_octaves.max(1),
            gain: params.height_gain,
            lacunarity: params.height_lacunarity,
            clearance: params.avatar_clearance,
        }
    }

    #[inline]
    pub fn grid(&self) -> TileGrid {
        self.grid
    }

    #[inline]
    pub fn bounds(&self) -> (f32, f32) {
        (self.min_y, self.max_y)
    }

    /// Surface height for the column containing `x`. A multiple of the tile size.
    pub fn height_at(&self, x: f32) -> f32 {
        let col = self.grid.index_of(x);
        let n = self.noise.get_noise_2d(col as f32, 0.0);
        let tile = self.grid.tile() as f32;
        let raw = self.baseline + self.amplitude * n;
        let snapped = (raw / tile).floor() * tile;
        snapped.clamp(self.min_y, self.max_y)
    }

    /// Upper bound on `|height(c + tile) - height(c)|` for adjacent columns.
    pub fn max_step(&self) -> f32 {
        let mut amp = 1.0f32;
        let mut freq = 1.0f32;
        let mut sum_amp = 0.0f32;
        let mut sum_slope = 0.0f32;
        for _ in 0..self.octaves {
            sum_amp += amp;
            sum_slope += amp * freq;
            amp *= self.gain;
            freq *= self.lacunarity;
        }
        let noise_slope = 2.0 * FADE_PEAK_SLOPE * self.frequency * sum_slope / sum_amp.max(f32::EPSILON);
        self.amplitude * noise_slope + self.grid.tile() as f32
    }

    /// Where an avatar standing over `x` would be placed.
    pub fn spawn_point(&self, x: f32) -> Vec2 {
        Vec2::new(x, self.height_at(x) - self.clearance)
    }
}

impl std::fmt::Debug for HeightField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeightField")
            .field("tile", &self.grid.tile())
            .field("baseline", &self.baseline)
            .field("amplitude", &self.amplitude)
            .field("min_y", &self.min_y)
            .field("max_y", &self.max_y)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(seed: i32, tile: i32, h: f32) -> HeightField {
        let params = WorldGenParams {
            tile_size: tile,
            ..WorldGenParams::default()
        };
        HeightField::new(WorldSeed(seed), &params, h)
    }

    #[test]
    fn heights_are_tile_multiples_within_bounds() {
        let hf = field(42, 30, 600.0);
        let (lo, hi) = hf.bounds();
        for c in -200..200 {
            let y = hf.height_at((c * 30) as f32);
            assert_eq!(y % 30.0, 0.0, "column {c} height {y}");
            assert!(y >= lo && y <= hi);
            assert!(y >= 0.0 && y < 600.0);
        }
    }

    #[test]
    fn constant_across_a_column() {
        let hf = field(7, 50, 600.0);
        for c in [-3, 0, 11] {
            let left = (c * 50) as f32;
            let h = hf.height_at(left);
            assert_eq!(hf.height_at(left + 0.5), h);
            assert_eq!(hf.height_at(left + 49.9), h);
        }
    }

    #[test]
    fn same_seed_same_surface() {
        let a = field(1234, 30, 600.0);
        let b = field(1234, 30, 600.0);
        for x in (-3000..3000).step_by(17) {
            assert_eq!(a.height_at(x as f32), b.height_at(x as f32));
        }
    }

    #[test]
    fn different_seeds_differ_somewhere() {
        let a = field(1, 30, 600.0);
        let b = field(2, 30, 600.0);
        let differs = (0..400).any(|c| a.height_at((c * 30) as f32) != b.height_at((c * 30) as f32));
        assert!(differs);
    }

    #[test]
    fn tiny_viewport_collapses_band() {
        let hf = field(3, 50, 60.0);
        let (lo, hi) = hf.bounds();
        assert!(lo <= hi);
        let y = hf.height_at(0.0);
        assert!(y >= lo && y <= hi);
    }

    #[test]
    fn spawn_point_hovers_above_ground() {
        let hf = field(42, 30, 600.0);
        let p = hf.spawn_point(512.0);
        assert_eq!(p.x, 512.0);
        assert_eq!(p.y, hf.height_at(512.0) - 100.0);
    }
}
