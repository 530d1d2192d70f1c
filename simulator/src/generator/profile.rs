use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sonarcore::{Beam, SonarPing};

pub const SAMPLE_TIMESTAMP: i64 = 1_716_345_600;
pub const SAMPLE_HEADING_DEG: f64 = 90.5;

/// The four beams used by both demonstrations, in transmission order.
pub fn sample_beams() -> Vec<Beam> {
    vec![
        Beam::new(1, -45.0, 100.5, -20.0),
        Beam::new(2, 0.0, 98.2, -15.5),
        Beam::new(3, 45.0, 100.8, -21.0),
        Beam::new(4, 60.0, 105.0, -22.5),
    ]
}

pub fn sample_ping() -> SonarPing {
    SonarPing::with_beams(SAMPLE_TIMESTAMP, SAMPLE_HEADING_DEG, sample_beams())
}

/// Configuration for generating synthetic multibeam pings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub beam_count: usize,
    pub swath_deg: f64,
    pub seafloor_depth_m: f64,
    pub depth_noise_m: f64,
    pub intensity_noise_db: f64,
    pub seed: u64,
    pub timestamp: i64,
    pub heading_deg: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            beam_count: 64,
            swath_deg: 120.0,
            seafloor_depth_m: 80.0,
            depth_noise_m: 0.5,
            intensity_noise_db: 1.0,
            seed: 0,
            timestamp: SAMPLE_TIMESTAMP,
            heading_deg: SAMPLE_HEADING_DEG,
        }
    }
}

/// Builds a ping over a flat seafloor: slant depth grows with beam angle.
pub fn build_synthetic_ping(config: &GeneratorConfig) -> anyhow::Result<SonarPing> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut ping = SonarPing::new(config.timestamp, config.heading_deg);
    let step = if config.beam_count > 1 {
        config.swath_deg / (config.beam_count - 1) as f64
    } else {
        0.0
    };
    let start = if config.beam_count > 1 {
        -config.swath_deg / 2.0
    } else {
        0.0
    };

    for index in 0..config.beam_count {
        let id = i32::try_from(index + 1).context("beam id overflows i32")?;
        let angle_deg = start + step * index as f64;
        let slant = config.seafloor_depth_m / angle_deg.to_radians().cos().abs().max(0.05);
        let depth_m = slant + jitter(&mut rng, config.depth_noise_m);
        let intensity_db =
            -15.0 - angle_deg.abs() / 10.0 + jitter(&mut rng, config.intensity_noise_db);
        ping.push_beam(Beam::new(id, angle_deg, depth_m, intensity_db));
    }

    Ok(ping)
}

pub fn build_synthetic_from_args(beam_count: usize, seed: u64) -> anyhow::Result<SonarPing> {
    let config = GeneratorConfig {
        beam_count,
        seed,
        ..Default::default()
    };
    build_synthetic_ping(&config)
}

fn jitter(rng: &mut StdRng, amplitude: f64) -> f64 {
    if amplitude > 0.0 {
        rng.gen_range(-amplitude..amplitude)
    } else {
        0.0
    }
}
