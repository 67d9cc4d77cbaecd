//! NMEA 0183 sentences
use std::fmt;

use hifitime::Epoch;

mod gga;
mod gll;
mod gsa;
mod gsv;
mod hdt;
mod rmc;
mod vtg;
mod zda;

pub use gga::Gga;
pub use gll::Gll;
pub use gsa::Gsa;
pub use gsv::{Gsv, SatelliteView};
pub use hdt::Hdt;
pub use rmc::Rmc;
pub use vtg::Vtg;
pub use zda::Zda;

use crate::checksum::frame;

/// UTC time and date fields, derived once per tick from the tick [Epoch].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UtcTime {
    /// `HHMMSS`
    pub time: String,
    /// `DDMMYY`
    pub date: String,
    pub day: u8,
    pub month: u8,
    pub year: i32,
}

impl UtcTime {
    pub fn from_epoch(t: Epoch) -> Self {
        let (year, month, day, hours, minutes, seconds, _) = t.to_gregorian_utc();
        Self {
            time: format!("{:02}{:02}{:02}", hours, minutes, seconds),
            date: format!("{:02}{:02}{:02}", day, month, year.rem_euclid(100)),
            day,
            month,
            year,
        }
    }
}

/// Formats a decimal value the way NMEA listeners expect free-format
/// numbers: shortest representation, always with a fractional part.
pub(crate) fn decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// All supported [Sentence]s
#[derive(Debug, Clone, PartialEq)]
pub enum Sentence {
    /// Position fix
    Gga(Gga),
    /// DOP and active satellites
    Gsa(Gsa),
    /// Satellites in view
    Gsv(Gsv),
    /// Position and status
    Gll(Gll),
    /// Recommended minimum navigation data
    Rmc(Rmc),
    /// True heading
    Hdt(Hdt),
    /// Track made good and ground speed
    Vtg(Vtg),
    /// Time and date
    Zda(Zda),
}

impl Sentence {
    /// Talker + sentence identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Gga(_) => Gga::ID,
            Self::Gsa(_) => Gsa::ID,
            Self::Gsv(_) => Gsv::ID,
            Self::Gll(_) => Gll::ID,
            Self::Rmc(_) => Rmc::ID,
            Self::Hdt(_) => Hdt::ID,
            Self::Vtg(_) => Vtg::ID,
            Self::Zda(_) => Zda::ID,
        }
    }

    /// Sentence payload, between `$` and `*`
    pub fn body(&self) -> String {
        match self {
            Self::Gga(s) => s.body(),
            Self::Gsa(s) => s.body(),
            Self::Gsv(s) => s.body(),
            Self::Gll(s) => s.body(),
            Self::Rmc(s) => s.body(),
            Self::Hdt(s) => s.body(),
            Self::Vtg(s) => s.body(),
            Self::Zda(s) => s.body(),
        }
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&frame(&self.body()))
    }
}

macro_rules! framed_sentence {
    ($($sentence:ident),+) => {
        $(
            impl fmt::Display for $sentence {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str(&frame(&self.body()))
                }
            }

            impl From<$sentence> for Sentence {
                fn from(s: $sentence) -> Self {
                    Self::$sentence(s)
                }
            }
        )+
    };
}

framed_sentence!(Gga, Gsa, Gsv, Gll, Rmc, Hdt, Vtg, Zda);
