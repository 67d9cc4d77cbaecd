use crate::{position::Position, sentence::UtcTime};

use super::decimal;

/// GGA: global positioning system fix data
#[derive(Debug, Clone, PartialEq)]
pub struct Gga {
    pub utc: UtcTime,
    pub position: Position,
    /// Fix quality indicator
    pub fix_quality: u8,
    /// Number of satellites used in fix
    pub satellites: usize,
    pub hdop: f64,
    /// Altitude above mean sea level (m)
    pub altitude_m: f64,
    /// Antenna height above mean sea level (m)
    pub antenna_altitude_m: f64,
    /// Age of differential corrections (s), empty when not used
    pub dgps_age: String,
    /// Differential reference station, empty when not used
    pub dgps_station: String,
}

impl Gga {
    pub const ID: &'static str = "GPGGA";

    pub fn body(&self) -> String {
        format!(
            "{},{}.00,{},{},{},{},{},{:02},{},{},M,{},M,{},{}",
            Self::ID,
            self.utc.time,
            self.position.latitude,
            self.position.latitude_direction,
            self.position.longitude,
            self.position.longitude_direction,
            self.fix_quality,
            self.satellites,
            decimal(self.hdop),
            decimal(self.altitude_m),
            decimal(self.antenna_altitude_m),
            self.dgps_age,
            self.dgps_station,
        )
    }
}
