//! Colour collaborator: one colour per created pill.
//!
//! Split parts inherit their parent's colour, so a source is only consulted
//! on creation.

use crate::model::PillColor;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait ColorSource {
    fn next_color(&mut self) -> PillColor;
}

/// Bright pastel palette: hue uniform over whole degrees in `[0, 360)`.
pub struct PastelPalette {
    rng: ChaCha8Rng,
}

impl PastelPalette {
    /// Deterministic palette; the same seed yields the same colour sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Palette seeded from the platform entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl ColorSource for PastelPalette {
    fn next_color(&mut self) -> PillColor {
        PillColor::from_hue(self.rng.gen_range(0..360))
    }
}

/// Always hands out the same colour.
#[derive(Debug, Clone, Copy)]
pub struct FixedColor(pub PillColor);

impl ColorSource for FixedColor {
    fn next_color(&mut self) -> PillColor {
        self.0
    }
}
