use crate::{
    constants::{MAX_AZIMUTH_DEG, MAX_ELEVATION_DEG, MAX_SNR_DB},
    prelude::{Randomizer, SV},
};

/// Satellite description, within a [Gsv] sentence
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SatelliteView {
    pub sv: SV,
    /// Elevation (degrees)
    pub elevation: u32,
    /// Azimuth (degrees)
    pub azimuth: u32,
    /// Signal to noise ratio (dB-Hz)
    pub snr: u32,
}

/// GSV: satellites in view. A group of GSV sentences describes
/// the complete constellation, 4 satellites per sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Gsv {
    /// Number of GSV sentences in the group
    pub group_size: usize,
    /// 1-based index of this sentence within the group
    pub index: usize,
    /// Total number of satellites in view
    pub satellites_total: usize,
    pub views: Vec<SatelliteView>,
}

impl Gsv {
    pub const ID: &'static str = "GPGSV";

    /// Builds a [Gsv] for these satellites. Elevation, azimuth and SNR
    /// are only drawn on [Gsv::refresh].
    pub fn new(group_size: usize, index: usize, satellites_total: usize, satellites: &[SV]) -> Self {
        Self {
            group_size,
            index,
            satellites_total,
            views: satellites
                .iter()
                .map(|sv| SatelliteView {
                    sv: *sv,
                    elevation: 0,
                    azimuth: 0,
                    snr: 0,
                })
                .collect(),
        }
    }

    /// Draws new elevation, azimuth and SNR for every satellite.
    pub fn refresh(&mut self, rng: &mut dyn Randomizer) {
        for view in self.views.iter_mut() {
            view.elevation = rng.range(0, MAX_ELEVATION_DEG);
            view.azimuth = rng.range(0, MAX_AZIMUTH_DEG);
            view.snr = rng.range(0, MAX_SNR_DB);
        }
    }

    pub fn body(&self) -> String {
        let mut body = format!(
            "{},{},{},{}",
            Self::ID,
            self.group_size,
            self.index,
            self.satellites_total
        );
        for view in self.views.iter() {
            body.push_str(&format!(
                ",{:02},{:02},{:03},{:02}",
                view.sv.prn, view.elevation, view.azimuth, view.snr
            ));
        }
        body
    }
}
