use crate::constants::KNOTS_TO_KM_H;

use super::decimal;

/// VTG: track made good and ground speed
#[derive(Debug, Clone, PartialEq)]
pub struct Vtg {
    /// True track (degrees)
    pub heading_true_deg: f64,
    /// Magnetic track (degrees), empty field when unknown
    pub heading_magnetic_deg: Option<f64>,
    /// Ground speed (knots)
    pub speed_knots: f64,
}

impl Vtg {
    pub const ID: &'static str = "GPVTG";

    /// Ground speed in km/h, rounded to 1 decimal
    pub fn speed_km_h(&self) -> f64 {
        (self.speed_knots * KNOTS_TO_KM_H * 10.0).round() / 10.0
    }

    pub fn body(&self) -> String {
        let magnetic = match self.heading_magnetic_deg {
            Some(deg) => decimal(deg),
            None => String::new(),
        };
        format!(
            "{},{},T,{},M,{},N,{},K",
            Self::ID,
            decimal(self.heading_true_deg),
            magnetic,
            decimal(self.speed_knots),
            decimal(self.speed_km_h()),
        )
    }
}
