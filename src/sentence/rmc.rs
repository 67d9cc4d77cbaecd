use crate::{position::Position, sentence::UtcTime};

use super::decimal;

/// RMC: recommended minimum specific GNSS data
#[derive(Debug, Clone, PartialEq)]
pub struct Rmc {
    pub utc: UtcTime,
    /// 'A': data valid
    pub status: char,
    pub position: Position,
    /// Speed over ground (knots)
    pub speed_knots: f64,
    /// Course made good (degrees)
    pub course_deg: f64,
    /// Magnetic variation, empty when unknown
    pub magnetic_variation: String,
    /// Magnetic variation direction, empty when unknown
    pub magnetic_variation_direction: String,
    /// 'A': autonomous (NMEA 2.3+)
    pub faa_mode: char,
}

impl Rmc {
    pub const ID: &'static str = "GPRMC";

    pub fn body(&self) -> String {
        format!(
            "{},{}.000,{},{},{},{},{},{:.3},{},{},{},{},{}",
            Self::ID,
            self.utc.time,
            self.status,
            self.position.latitude,
            self.position.latitude_direction,
            self.position.longitude,
            self.position.longitude_direction,
            self.speed_knots,
            decimal(self.course_deg),
            self.utc.date,
            self.magnetic_variation,
            self.magnetic_variation_direction,
            self.faa_mode,
        )
    }
}
