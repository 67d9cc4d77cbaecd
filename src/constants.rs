/// WGS84 Earth Frame Ellipsoid semi-major axis (meters)
pub const EARTH_SEMI_MAJOR_AXIS_WGS84: f64 = 6378137.0_f64;

/// WGS84 Earth Frame Ellipsoid flattening
pub const EARTH_FLATTENING_WGS84: f64 = 1.0 / 298.257223563;

/// WGS84 Earth Frame Ellipsoid semi-minor axis (meters)
pub const EARTH_SEMI_MINOR_AXIS_WGS84: f64 =
    EARTH_SEMI_MAJOR_AXIS_WGS84 * (1.0 - EARTH_FLATTENING_WGS84);

/// Knots to m.s⁻¹
pub const KNOTS_TO_M_S: f64 = 0.514444;

/// Knots to km.h⁻¹
pub const KNOTS_TO_KM_H: f64 = 1.852;

pub const MINUTES_PER_DEGREE: f64 = 60.0;

/// Number of integer digits of a latitude value (DDMM.mmm)
pub const LATITUDE_DEGREES_WIDTH: usize = 2;

/// Number of integer digits of a longitude value (DDDMM.mmm)
pub const LONGITUDE_DEGREES_WIDTH: usize = 3;

/// Decimal minutes precision
pub const MINUTES_PRECISION: usize = 3;

pub const FULL_CIRCLE_DEG: f64 = 360.0;

pub const HALF_CIRCLE_DEG: f64 = 180.0;

/// Highest GPS PRN a satellite may be assigned
pub const MAX_SATELLITE_PRN: u8 = 32;

/// A GSV sentence describes at most 4 satellites
pub const SATELLITES_PER_GSV: usize = 4;

/// Number of satellite slots in a GSA sentence
pub const GSA_SATELLITE_SLOTS: usize = 12;

/// Minimal number of satellites to form a fix
pub const MIN_SATELLITES: usize = 4;

pub const MAX_ELEVATION_DEG: u32 = 90;

pub const MAX_AZIMUTH_DEG: u32 = 359;

pub const MAX_SNR_DB: u32 = 99;

/// Serial line speed (bps) of most NMEA 0183 listeners
pub const DEFAULT_SERIAL_BAUDRATE: u32 = 9600;

/// Serial line speeds (bps) a sink may be opened with
pub const SUPPORTED_BAUDRATES: [u32; 12] = [
    300, 600, 1200, 2400, 4800, 9600, 14400, 19200, 38400, 57600, 115200, 128000,
];
