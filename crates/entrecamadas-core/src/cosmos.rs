//! Cosmos scene: starfield, concentric rings and a pulsing central glow.
//!
//! The scene is described in virtual pixels so the geometry does not depend
//! on the drawing surface. [`Cosmos::paint`] rasterizes one frame onto a grid
//! of terminal cells, each cell covering `CELL_WIDTH_PX x CELL_HEIGHT_PX`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{RING_COUNT, STAR_COUNT};

pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

const BG_CENTER: Rgb = Rgb::new(11, 14, 22);
const BG_EDGE: Rgb = Rgb::new(5, 7, 12);
const RING_COLOR: Rgb = Rgb::new(122, 167, 255);
const GLOW_COLOR: Rgb = Rgb::new(247, 166, 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation towards `other`, `t` clamped to 0..=1
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Paint `over` on top of `self` with the given opacity
    pub fn blend(self, over: Rgb, alpha: f64) -> Rgb {
        self.lerp(over, alpha)
    }
}

/// `h` in degrees, `s` and `l` in 0..=1
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(to_u8(r1), to_u8(g1), to_u8(b1))
}

/// A point light. `x`/`y` are fractions of the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
    pub hue: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub radius: f64,
    pub width: f64,
    pub alpha: f64,
}

/// One rasterized terminal cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPaint {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

#[derive(Debug, Clone)]
pub struct Cosmos {
    stars: Vec<Star>,
    rings: Vec<Ring>,
    frame: u64,
}

impl Cosmos {
    /// Lay out stars and rings. Layout is fixed for the lifetime of the scene.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.random::<f64>(),
                y: rng.random::<f64>(),
                radius: rng.random::<f64>() * 2.0 + 0.2,
                alpha: rng.random::<f64>() * 0.8 + 0.2,
                hue: 220.0 + rng.random::<f64>() * 50.0,
            })
            .collect();

        let rings = (0..RING_COUNT)
            .map(|i| {
                let i = i as f64;
                Ring {
                    radius: 60.0 + i * 50.0,
                    width: 0.6 + i * 0.15,
                    alpha: 0.3 + i * 0.06,
                }
            })
            .collect();

        Self {
            stars,
            rings,
            frame: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(&mut StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(&mut rand::rng())
    }

    /// Advance the global frame counter by one
    pub fn advance(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    fn t(&self) -> f64 {
        self.frame as f64
    }

    /// Alpha multiplier in 0.2..=1.0
    pub fn twinkle(&self, star: &Star) -> f64 {
        (self.t() * 0.02 + star.x * 10.0 + star.y * 7.0).sin() * 0.4 + 0.6
    }

    /// HSL lightness in percent, 60..=90
    pub fn star_lightness(&self, star: &Star) -> f64 {
        75.0 + (self.t() * 0.03 + star.x * 8.0).sin() * 15.0
    }

    pub fn ring_radius(&self, ring: &Ring) -> f64 {
        ring.radius + (self.t() * 0.008 + ring.radius).sin() * 3.0
    }

    pub fn glow_radius(&self, pulse: f64) -> f64 {
        25.0 + (self.t() * 0.06).sin() * 5.0 + pulse * 15.0
    }

    /// Rasterize the current frame onto `cols x rows` cells, row-major.
    pub fn paint(&self, cols: u16, rows: u16, pulse: f64) -> Vec<CellPaint> {
        let (cols_n, rows_n) = (cols as usize, rows as usize);
        if cols_n == 0 || rows_n == 0 {
            return Vec::new();
        }

        let w = cols as f64 * CELL_WIDTH_PX;
        let h = rows as f64 * CELL_HEIGHT_PX;
        let (cx, cy) = (w / 2.0, h / 2.0);
        let bg_extent = w.max(h) / 1.5;

        let glow_r = self.glow_radius(pulse);
        let glow_fill = glow_r * 3.0;
        let glow_extent = glow_r * 3.5;

        let ring_radii: Vec<(f64, f64)> = self
            .rings
            .iter()
            .map(|ring| (self.ring_radius(ring), ring.alpha))
            .collect();

        let mut cells = Vec::with_capacity(cols_n * rows_n);
        for row in 0..rows_n {
            for col in 0..cols_n {
                let dx = (col as f64 + 0.5) * CELL_WIDTH_PX - cx;
                let dy = (row as f64 + 0.5) * CELL_HEIGHT_PX - cy;
                let d = dx.hypot(dy);

                let mut bg = BG_CENTER.lerp(BG_EDGE, d / bg_extent);
                if d < glow_fill {
                    bg = bg.blend(GLOW_COLOR, glow_alpha(d / glow_extent));
                }

                let mut cell = CellPaint { glyph: ' ', fg: bg, bg };

                // A ring passes through a cell when it is within half a cell of its centre
                let half_cell = if d > 0.0 {
                    0.5 * ((dx / d) * CELL_WIDTH_PX).hypot((dy / d) * CELL_HEIGHT_PX)
                } else {
                    CELL_WIDTH_PX / 2.0
                };
                if let Some(&(_, alpha)) = ring_radii
                    .iter()
                    .find(|(radius, _)| (d - radius).abs() <= half_cell)
                {
                    cell.glyph = '·';
                    cell.fg = bg.blend(RING_COLOR, alpha);
                }

                cells.push(cell);
            }
        }

        // Brightest star wins when several land in one cell
        let mut strength = vec![0.0_f64; cells.len()];
        for star in &self.stars {
            let col = ((star.x * cols as f64) as usize).min(cols_n - 1);
            let row = ((star.y * rows as f64) as usize).min(rows_n - 1);
            let idx = row * cols_n + col;
            let intensity = star.alpha * self.twinkle(star);
            if intensity <= strength[idx] {
                continue;
            }
            strength[idx] = intensity;

            let color = hsl_to_rgb(star.hue, 0.75, self.star_lightness(star) / 100.0);
            let cell = &mut cells[idx];
            cell.glyph = star_glyph(star.radius, intensity);
            cell.fg = cell.bg.blend(color, intensity);
        }

        cells
    }
}

/// Opacity of the amber glow at `p` = distance / (3.5 * radius)
fn glow_alpha(p: f64) -> f64 {
    if p <= 0.7 {
        0.8 - 0.6 * (p / 0.7)
    } else {
        (0.2 * (1.0 - (p - 0.7) / 0.3)).max(0.0)
    }
}

fn star_glyph(radius: f64, intensity: f64) -> char {
    if intensity < 0.15 {
        '·'
    } else if radius > 1.6 {
        '✦'
    } else if radius > 0.9 {
        '•'
    } else {
        '·'
    }
}
