use std::f64::consts::PI;
use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

const SAMPLE_RATE: f64 = 48_000.0;
const NUM_SAMPLES: usize = 4096;
const TONE_HZ: f64 = 3_000.0;
const NOISE_LEVEL: f64 = 0.05;

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
    fn gauss(&mut self, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        std_dev * (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }
}

/// Unit-amplitude complex tone plus Gaussian noise on both rails,
/// flattened to I,Q,I,Q,…
fn generate_interleaved(rng: &mut SimpleRng) -> Vec<f64> {
    (0..NUM_SAMPLES)
        .flat_map(|n| {
            let phase = 2.0 * PI * TONE_HZ * n as f64 / SAMPLE_RATE;
            [phase.cos(), phase.sin()]
        })
        .map(|v| (0.8 * v + rng.gauss(NOISE_LEVEL)).clamp(-1.0, 1.0))
        .collect()
}

fn write_binary(path: &str, bytes: impl Iterator<Item = u8>) -> Result<()> {
    let mut out = BufWriter::new(File::create(path).with_context(|| format!("creating {path}"))?);
    for b in bytes {
        out.write_all(&[b])?;
    }
    out.flush()?;
    println!("Wrote {path}");
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let iq = generate_interleaved(&mut rng);

    write_binary(
        "sample_iq_int8.bin",
        iq.iter()
            .flat_map(|&v| ((v * f64::from(i8::MAX)).round() as i8).to_ne_bytes()),
    )?;
    write_binary(
        "sample_iq_int16.bin",
        iq.iter()
            .flat_map(|&v| ((v * f64::from(i16::MAX)).round() as i16).to_ne_bytes()),
    )?;
    write_binary(
        "sample_iq_int32.bin",
        iq.iter()
            .flat_map(|&v| ((v * f64::from(i32::MAX)).round() as i32).to_ne_bytes()),
    )?;

    let path = "sample_iq.txt";
    let mut out = BufWriter::new(File::create(path).with_context(|| format!("creating {path}"))?);
    for &v in &iq {
        writeln!(out, "{}", (v * f64::from(i16::MAX)).round() as i16)?;
    }
    out.flush()?;
    println!("Wrote {path}");

    println!(
        "{NUM_SAMPLES} IQ samples, tone at {TONE_HZ} Hz; view with e.g. \
         `iq-plot sample_iq_int16.bin {SAMPLE_RATE} -t int16`"
    );
    Ok(())
}
