use crate::record::beam::Beam;
use serde::{Deserialize, Serialize};

/// One transmit/receive cycle. Beam order is transmission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SonarPing {
    /// Epoch seconds.
    pub timestamp: i64,
    pub ship_heading_deg: f64,
    pub beams: Vec<Beam>,
}

impl SonarPing {
    pub fn new(timestamp: i64, ship_heading_deg: f64) -> Self {
        Self {
            timestamp,
            ship_heading_deg,
            beams: Vec::new(),
        }
    }

    pub fn with_beams(timestamp: i64, ship_heading_deg: f64, beams: Vec<Beam>) -> Self {
        Self {
            timestamp,
            ship_heading_deg,
            beams,
        }
    }

    pub fn push_beam(&mut self, beam: Beam) {
        self.beams.push(beam);
    }

    pub fn beam_count(&self) -> usize {
        self.beams.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_beam_keeps_transmission_order() {
        let mut ping = SonarPing::new(1716345600, 90.5);
        ping.push_beam(Beam::new(2, 0.0, 98.2, -15.5));
        ping.push_beam(Beam::new(1, -45.0, 100.5, -20.0));

        let ids: Vec<i32> = ping.beams.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(ping.beam_count(), 2);
    }
}
