//! Colour scale for per-line bundle counts.
//!
//! Lines in a single bundle sit at the green end, lines shipped by the most
//! bundles at the red end. Lines in no bundle are grey.

pub type Rgb = (u8, u8, u8);

pub const UNBUNDLED: Rgb = (128, 128, 128);
pub const FEWEST: Rgb = (46, 204, 113);
pub const MOST: Rgb = (231, 76, 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale {
    max: usize,
}

impl ColorScale {
    pub fn new(max: usize) -> Self {
        ColorScale { max }
    }

    /// Scale spanning the largest count in `counts`.
    pub fn for_counts(counts: impl IntoIterator<Item = usize>) -> Self {
        ColorScale::new(counts.into_iter().max().unwrap_or(0))
    }

    pub fn color(&self, count: usize) -> Rgb {
        if count == 0 {
            return UNBUNDLED;
        }
        if self.max <= 1 {
            return FEWEST;
        }
        let t = (count.min(self.max) - 1) as f64 / (self.max - 1) as f64;
        (lerp(FEWEST.0, MOST.0, t), lerp(FEWEST.1, MOST.1, t), lerp(FEWEST.2, MOST.2, t))
    }
}

fn lerp(from: u8, to: u8, t: f64) -> u8 {
    (from as f64 + (to as f64 - from as f64) * t).round() as u8
}
