//! Generate a deterministic sample launch-records CSV for trying the
//! dashboard without the real dataset:
//!
//! ```sh
//! cargo run --bin generate_sample -- sample_launches.csv
//! cargo run -- sample_launches.csv
//! ```

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform float in [0, 1).
    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

const SITES: &[&str] = &["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

/// Booster generations with a rough success rate per category.
const BOOSTERS: &[(&str, f64)] = &[
    ("v1.0", 0.4),
    ("v1.1", 0.55),
    ("FT", 0.8),
    ("B4", 0.85),
    ("B5", 0.95),
];

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_launches.csv".to_string());

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {path}"))?;

    writer.write_record([
        "Flight Number",
        "Launch Site",
        "Payload Mass (kg)",
        "class",
        "Booster Version Category",
    ])?;

    let mut flight = 1;
    for (booster, success_rate) in BOOSTERS {
        // A dozen flights per booster generation, spread across sites.
        for _ in 0..12 {
            let site = SITES[(rng.next_u64() % SITES.len() as u64) as usize];
            let payload = (rng.uniform() * 9600.0 * 10.0).round() / 10.0;
            let class = u8::from(rng.uniform() < *success_rate);

            writer.write_record([
                flight.to_string(),
                site.to_string(),
                format!("{payload:.1}"),
                class.to_string(),
                (*booster).to_string(),
            ])?;
            flight += 1;
        }
    }

    writer.flush().context("writing CSV")?;
    println!("Wrote {} launches to {path}", flight - 1);
    Ok(())
}
