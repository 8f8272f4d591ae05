use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{ImageBuffer, Rgb, RgbImage};

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;
const PICTURES: usize = 8;

/// SplitMix64: enough randomness for placing storm cells and grain.
struct SplitMix64(u64);

impl SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

/// A storm cell: bright core fading out over `radius` pixels.
struct Cell {
    x: f32,
    y: f32,
    radius: f32,
    intensity: f32,
}

/// Dark sky gradient with a few bright storm cells and grain.
fn storm_picture(rng: &mut SplitMix64) -> RgbImage {
    let cells: Vec<Cell> = (0..3 + (rng.next_u64() % 4) as usize)
        .map(|_| Cell {
            x: rng.next_f32() * WIDTH as f32,
            y: rng.next_f32() * HEIGHT as f32,
            radius: 60.0 + rng.next_f32() * 220.0,
            intensity: 0.4 + rng.next_f32() * 0.6,
        })
        .collect();

    let mut img: RgbImage = ImageBuffer::new(WIDTH, HEIGHT);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let sky = y as f32 / HEIGHT as f32;
        let glow: f32 = cells
            .iter()
            .map(|c| {
                let d = ((x as f32 - c.x).powi(2) + (y as f32 - c.y).powi(2)).sqrt();
                c.intensity * (-(d / c.radius).powi(2)).exp()
            })
            .sum::<f32>()
            .min(1.0);
        let grain = rng.next_f32() * 0.05;

        let r = 20.0 + 40.0 * sky + 200.0 * glow;
        let g = 25.0 + 50.0 * sky + 180.0 * glow;
        let b = 45.0 + 70.0 * sky + 120.0 * glow;
        *pixel = Rgb([
            ((r / 255.0 + grain).min(1.0) * 255.0) as u8,
            ((g / 255.0 + grain).min(1.0) * 255.0) as u8,
            ((b / 255.0 + grain).min(1.0) * 255.0) as u8,
        ]);
    }
    img
}

fn write_samples(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = SplitMix64(42);
    for i in 1..=PICTURES {
        let path = dir.join(format!("nssl{i:04}.jpg"));
        storm_picture(&mut rng)
            .save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    // Not a picture: must not show up in the viewer's list.
    let readme = dir.join("readme.txt");
    fs::write(&readme, "Synthetic storm pictures for storm-viewer.\n")
        .with_context(|| format!("writing {}", readme.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("resources"));
    write_samples(&dir)?;
    println!("Run: storm-viewer --dir {}", dir.display());
    Ok(())
}
