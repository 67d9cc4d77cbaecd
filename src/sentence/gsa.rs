use itertools::Itertools;

use crate::{constants::GSA_SATELLITE_SLOTS, prelude::SV};

use super::decimal;

/// GSA: DOP and active satellites
#[derive(Debug, Clone, PartialEq)]
pub struct Gsa {
    /// 'A': automatic 2D/3D selection
    pub selection_mode: char,
    /// 3: 3D fix
    pub fix_mode: u8,
    /// Satellites used in fix (at most 12 are reported)
    pub satellites: Vec<SV>,
    pub pdop: f64,
    pub hdop: f64,
    pub vdop: f64,
}

impl Gsa {
    pub const ID: &'static str = "GPGSA";

    pub fn body(&self) -> String {
        // always 12 slots, blank padded
        let slots = (0..GSA_SATELLITE_SLOTS)
            .map(|i| match self.satellites.get(i) {
                Some(sv) => format!("{:02}", sv.prn),
                None => String::new(),
            })
            .join(",");

        format!(
            "{},{},{},{},{},{},{}",
            Self::ID,
            self.selection_mode,
            self.fix_mode,
            slots,
            decimal(self.pdop),
            decimal(self.hdop),
            decimal(self.vdop),
        )
    }
}
