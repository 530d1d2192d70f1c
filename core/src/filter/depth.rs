use crate::record::{Beam, SonarPing};

pub const DEFAULT_MIN_DEPTH_M: f64 = 100.0;

/// Selects beams strictly deeper than a threshold, preserving order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthFilter {
    min_depth_m: f64,
}

impl DepthFilter {
    pub fn new(min_depth_m: f64) -> Self {
        Self { min_depth_m }
    }

    pub fn min_depth_m(&self) -> f64 {
        self.min_depth_m
    }

    pub fn accepts(&self, beam: &Beam) -> bool {
        beam.depth_m > self.min_depth_m
    }

    pub fn select<'a>(&self, ping: &'a SonarPing) -> Vec<&'a Beam> {
        ping.beams.iter().filter(|beam| self.accepts(beam)).collect()
    }
}

impl Default for DepthFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DEPTH_M)
    }
}
