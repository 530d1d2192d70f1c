use serde::{Deserialize, Serialize};

/// One angular sample within a ping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    pub id: i32,
    pub angle_deg: f64,
    pub depth_m: f64,
    pub intensity_db: f64,
}

impl Beam {
    pub fn new(id: i32, angle_deg: f64, depth_m: f64, intensity_db: f64) -> Self {
        Self {
            id,
            angle_deg,
            depth_m,
            intensity_db,
        }
    }
}
