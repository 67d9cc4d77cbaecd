#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::time::Duration;

fn default_satellites_total() -> usize {
    15
}

fn default_hdop() -> f64 {
    0.92
}

fn default_pdop() -> f64 {
    1.56
}

fn default_vdop() -> f64 {
    1.25
}

fn default_antenna_altitude() -> f64 {
    32.5
}

fn default_fix_quality() -> u8 {
    1
}

fn default_fix_mode() -> u8 {
    3
}

fn default_heading_increment() -> f64 {
    3.0
}

fn default_speed_increment() -> f64 {
    3.0
}

fn default_min_satellites_in_fix() -> usize {
    4
}

fn default_max_satellites_in_fix() -> usize {
    12
}

fn default_tick_period_ms() -> u64 {
    1000
}

fn default_sentence_delay_ms() -> u64 {
    50
}

fn default_max_tcp_connections() -> usize {
    10
}

/// [Emulator](crate::prelude::Emulator) and sinks parametrization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Total number of satellites in view. Values below 4
    /// are clamped to 4 when the satellite group is built.
    #[cfg_attr(feature = "serde", serde(default = "default_satellites_total"))]
    pub satellites_total: usize,

    /// Horizontal dilution of precision, reported in GGA and GSA
    #[cfg_attr(feature = "serde", serde(default = "default_hdop"))]
    pub hdop: f64,

    /// Position dilution of precision, reported in GSA
    #[cfg_attr(feature = "serde", serde(default = "default_pdop"))]
    pub pdop: f64,

    /// Vertical dilution of precision, reported in GSA
    #[cfg_attr(feature = "serde", serde(default = "default_vdop"))]
    pub vdop: f64,

    /// Antenna height above mean sea level (meters), reported in GGA
    #[cfg_attr(feature = "serde", serde(default = "default_antenna_altitude"))]
    pub antenna_altitude_m: f64,

    /// GGA fix quality indicator (1: autonomous GPS fix)
    #[cfg_attr(feature = "serde", serde(default = "default_fix_quality"))]
    pub fix_quality: u8,

    /// GSA fix mode (3: 3D fix)
    #[cfg_attr(feature = "serde", serde(default = "default_fix_mode"))]
    pub fix_mode: u8,

    /// Maximal heading variation per tick (degrees)
    #[cfg_attr(feature = "serde", serde(default = "default_heading_increment"))]
    pub heading_increment_deg: f64,

    /// Maximal speed variation per tick (knots)
    #[cfg_attr(feature = "serde", serde(default = "default_speed_increment"))]
    pub speed_increment_knots: f64,

    /// Minimal number of satellites used in the fix
    #[cfg_attr(feature = "serde", serde(default = "default_min_satellites_in_fix"))]
    pub min_satellites_in_fix: usize,

    /// Maximal number of satellites used in the fix
    #[cfg_attr(feature = "serde", serde(default = "default_max_satellites_in_fix"))]
    pub max_satellites_in_fix: usize,

    /// Sentence generation period (milliseconds)
    #[cfg_attr(feature = "serde", serde(default = "default_tick_period_ms"))]
    pub tick_period_ms: u64,

    /// Pause between two sentences written to a sink (milliseconds)
    #[cfg_attr(feature = "serde", serde(default = "default_sentence_delay_ms"))]
    pub sentence_delay_ms: u64,

    /// Maximal number of simultaneous TCP clients
    #[cfg_attr(feature = "serde", serde(default = "default_max_tcp_connections"))]
    pub max_tcp_connections: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            satellites_total: default_satellites_total(),
            hdop: default_hdop(),
            pdop: default_pdop(),
            vdop: default_vdop(),
            antenna_altitude_m: default_antenna_altitude(),
            fix_quality: default_fix_quality(),
            fix_mode: default_fix_mode(),
            heading_increment_deg: default_heading_increment(),
            speed_increment_knots: default_speed_increment(),
            min_satellites_in_fix: default_min_satellites_in_fix(),
            max_satellites_in_fix: default_max_satellites_in_fix(),
            tick_period_ms: default_tick_period_ms(),
            sentence_delay_ms: default_sentence_delay_ms(),
            max_tcp_connections: default_max_tcp_connections(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with desired number of satellites in view
    pub fn with_satellites(&self, total: usize) -> Self {
        let mut s = self.clone();
        s.satellites_total = total;
        s
    }

    /// Copies and returns [Config] with desired tick period,
    /// saturating at `u64::MAX` milliseconds
    pub fn with_tick_period(&self, period: Duration) -> Self {
        let mut s = self.clone();
        s.tick_period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX);
        s
    }

    /// Copies and returns [Config] with desired inter sentence delay
    pub fn with_sentence_delay(&self, delay: Duration) -> Self {
        let mut s = self.clone();
        s.sentence_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        s
    }

    /// Copies and returns [Config] with desired TCP client limit
    pub fn with_max_tcp_connections(&self, max: usize) -> Self {
        let mut s = self.clone();
        s.max_tcp_connections = max;
        s
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn sentence_delay(&self) -> Duration {
        Duration::from_millis(self.sentence_delay_ms)
    }
}
