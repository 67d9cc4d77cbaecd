//! Position in NMEA degrees and decimal minutes representation
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        LATITUDE_DEGREES_WIDTH, LONGITUDE_DEGREES_WIDTH, MINUTES_PER_DEGREE, MINUTES_PRECISION,
    },
    error::Error,
};

/// Latitude hemisphere
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LatitudeDirection {
    #[default]
    North,
    South,
}

/// Longitude hemisphere
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LongitudeDirection {
    #[default]
    East,
    West,
}

impl LatitudeDirection {
    fn from_signed(value: f64) -> Self {
        if value >= 0.0 {
            Self::North
        } else {
            Self::South
        }
    }
}

impl LongitudeDirection {
    fn from_signed(value: f64) -> Self {
        if value >= 0.0 {
            Self::East
        } else {
            Self::West
        }
    }
}

impl fmt::Display for LatitudeDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::North => write!(f, "N"),
            Self::South => write!(f, "S"),
        }
    }
}

impl fmt::Display for LongitudeDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::East => write!(f, "E"),
            Self::West => write!(f, "W"),
        }
    }
}

/// [Position] is stored the way it is transmitted: degrees and decimal
/// minutes strings (`DDMM.mmm` and `DDDMM.mmm`) with their hemisphere.
/// Decimal degrees only exist transiently, while moving the vessel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Latitude as `DDMM.mmm`
    pub latitude: String,
    pub latitude_direction: LatitudeDirection,
    /// Longitude as `DDDMM.mmm`
    pub longitude: String,
    pub longitude_direction: LongitudeDirection,
}

impl Default for Position {
    /// Baltic Sea
    fn default() -> Self {
        Self {
            latitude: "5430.000".to_string(),
            latitude_direction: LatitudeDirection::North,
            longitude: "01920.000".to_string(),
            longitude_direction: LongitudeDirection::East,
        }
    }
}

impl Position {
    /// Builds a new [Position] from raw NMEA fields. Values are trusted as is.
    pub fn new(
        latitude: &str,
        latitude_direction: LatitudeDirection,
        longitude: &str,
        longitude_direction: LongitudeDirection,
    ) -> Self {
        Self {
            latitude: latitude.to_string(),
            latitude_direction,
            longitude: longitude.to_string(),
            longitude_direction,
        }
    }

    /// Builds a new [Position] from integer degrees and decimal minutes.
    pub fn from_degrees_minutes(
        latitude: (u32, f64),
        latitude_direction: LatitudeDirection,
        longitude: (u32, f64),
        longitude_direction: LongitudeDirection,
    ) -> Self {
        Self {
            latitude: format_degrees_minutes(latitude.0, latitude.1, LATITUDE_DEGREES_WIDTH),
            latitude_direction,
            longitude: format_degrees_minutes(longitude.0, longitude.1, LONGITUDE_DEGREES_WIDTH),
            longitude_direction,
        }
    }

    /// Builds a new [Position] from signed decimal degrees.
    /// Hemispheres are deduced from the signs, minutes are rounded
    /// to 3 decimals and a 60.000' result carries into the next degree.
    pub fn from_decimal_degrees(latitude_ddeg: f64, longitude_ddeg: f64) -> Self {
        Self::from_degrees_minutes(
            degrees_minutes(latitude_ddeg.abs()),
            LatitudeDirection::from_signed(latitude_ddeg),
            degrees_minutes(longitude_ddeg.abs()),
            LongitudeDirection::from_signed(longitude_ddeg),
        )
    }

    /// Returns (latitude, longitude) in signed decimal degrees.
    pub fn to_decimal_degrees(&self) -> Result<(f64, f64), Error> {
        let mut lat = parse_degrees_minutes(&self.latitude, LATITUDE_DEGREES_WIDTH)?;
        let mut lon = parse_degrees_minutes(&self.longitude, LONGITUDE_DEGREES_WIDTH)?;

        if self.latitude_direction == LatitudeDirection::South {
            lat = -lat;
        }
        if self.longitude_direction == LongitudeDirection::West {
            lon = -lon;
        }

        Ok((lat, lon))
    }
}

fn round_minutes(minutes: f64) -> f64 {
    let scale = 10.0_f64.powi(MINUTES_PRECISION as i32);
    (minutes * scale).round() / scale
}

/// Splits positive decimal degrees into integer degrees and rounded minutes.
fn degrees_minutes(ddeg: f64) -> (u32, f64) {
    let mut degrees = ddeg.trunc() as u32;

    let mut minutes = if degrees == 0 {
        round_minutes(ddeg * MINUTES_PER_DEGREE)
    } else {
        round_minutes((ddeg % degrees as f64) * MINUTES_PER_DEGREE)
    };

    if minutes == MINUTES_PER_DEGREE {
        degrees += 1;
        minutes = 0.0;
    }

    (degrees, minutes)
}

fn format_degrees_minutes(degrees: u32, minutes: f64, width: usize) -> String {
    format!(
        "{:0width$}{:0mwidth$.prec$}",
        degrees,
        minutes,
        width = width,
        mwidth = MINUTES_PRECISION + 3,
        prec = MINUTES_PRECISION
    )
}

fn parse_degrees_minutes(value: &str, width: usize) -> Result<f64, Error> {
    let invalid = || Error::InvalidCoordinate(value.to_string());

    let degrees = value.get(..width).ok_or_else(invalid)?;
    let minutes = value.get(width..).ok_or_else(invalid)?;

    let degrees = degrees.parse::<f64>().map_err(|_| invalid())?;
    let minutes = minutes.parse::<f64>().map_err(|_| invalid())?;

    Ok(degrees + minutes / MINUTES_PER_DEGREE)
}
