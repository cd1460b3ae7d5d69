//! Writes a synthetic `dashboard/main_data.csv` with the Guanyuan column
//! layout so the dashboard can be exercised without the real dataset.

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Winter-peaking seasonal factor: 1 at New Year, 0 at midsummer.
fn winter_factor(month: u32) -> f64 {
    let phase = (month as f64 - 1.0) / 12.0 * std::f64::consts::TAU;
    0.5 + 0.5 * phase.cos()
}

fn cell(rng: &mut SimpleRng, mean: f64, std_dev: f64, floor: f64) -> String {
    // ~2% of cells go missing, like the gaps in the real station feed.
    if rng.next_f64() < 0.02 {
        return String::new();
    }
    format!("{:.1}", rng.gauss(mean, std_dev).max(floor))
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "dashboard/main_data.csv";
    std::fs::create_dir_all("dashboard").context("creating dashboard directory")?;
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record([
        "year", "month", "day", "hour", "PM2.5", "PM10", "SO2", "NO2", "CO", "O3", "TEMP",
        "PRES", "DEWP", "RAIN", "WSPM",
    ])?;

    let mut rows = 0u32;
    for year in 2013..=2016 {
        for month in 1..=12u32 {
            let w = winter_factor(month);
            for day in 1..=DAYS_IN_MONTH[(month - 1) as usize] {
                for hour in [0u32, 6, 12, 18] {
                    // Pollutants climb in winter (heating season); ozone and
                    // temperature peak in summer.
                    let record = [
                        year.to_string(),
                        month.to_string(),
                        day.to_string(),
                        hour.to_string(),
                        cell(&mut rng, 40.0 + 80.0 * w, 25.0, 1.0),
                        cell(&mut rng, 60.0 + 90.0 * w, 30.0, 1.0),
                        cell(&mut rng, 8.0 + 25.0 * w, 8.0, 0.5),
                        cell(&mut rng, 30.0 + 40.0 * w, 15.0, 1.0),
                        cell(&mut rng, 600.0 + 1200.0 * w, 300.0, 100.0),
                        cell(&mut rng, 20.0 + 90.0 * (1.0 - w), 20.0, 1.0),
                        cell(&mut rng, -4.0 + 32.0 * (1.0 - w), 4.0, -20.0),
                        cell(&mut rng, 1012.0 + 14.0 * w, 5.0, 980.0),
                        cell(&mut rng, -15.0 + 35.0 * (1.0 - w), 5.0, -35.0),
                        cell(&mut rng, 0.4 * (1.0 - w), 0.8, 0.0),
                        cell(&mut rng, 2.0, 1.0, 0.0),
                    ];
                    writer.write_record(&record)?;
                    rows += 1;
                }
            }
        }
    }

    writer.flush()?;
    println!("Wrote {rows} observations to {output_path}");
    Ok(())
}
