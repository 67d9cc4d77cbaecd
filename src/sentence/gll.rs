use crate::{position::Position, sentence::UtcTime};

/// GLL: geographic position, latitude and longitude
#[derive(Debug, Clone, PartialEq)]
pub struct Gll {
    pub position: Position,
    pub utc: UtcTime,
    /// 'A': data valid
    pub status: char,
    /// 'A': autonomous (NMEA 2.3+)
    pub faa_mode: char,
}

impl Gll {
    pub const ID: &'static str = "GPGLL";

    pub fn body(&self) -> String {
        format!(
            "{},{},{},{},{},{}.000,{},{}",
            Self::ID,
            self.position.latitude,
            self.position.latitude_direction,
            self.position.longitude,
            self.position.longitude_direction,
            self.utc.time,
            self.status,
            self.faa_mode,
        )
    }
}
