//! Ellipsoidal forward projection (direct geodesic problem) on WGS84
use crate::{
    constants::{
        EARTH_FLATTENING_WGS84 as F, EARTH_SEMI_MAJOR_AXIS_WGS84 as A,
        EARTH_SEMI_MINOR_AXIS_WGS84 as B, FULL_CIRCLE_DEG, HALF_CIRCLE_DEG,
    },
    error::Error,
};

const MAX_ITERATIONS: usize = 200;

const CONVERGENCE_THRESHOLD: f64 = 1.0E-12;

/// Destination of a forward projection
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Destination {
    /// Latitude (decimal degrees)
    pub latitude_ddeg: f64,
    /// Longitude (decimal degrees), normalized to [-180, 180]
    pub longitude_ddeg: f64,
    /// Azimuth from destination back to start (decimal degrees, [0, 360[)
    pub back_azimuth_deg: f64,
}

/// Wraps longitude into [-180, 180]
fn normalize_longitude(lon_deg: f64) -> f64 {
    let lon = (lon_deg + HALF_CIRCLE_DEG).rem_euclid(FULL_CIRCLE_DEG) - HALF_CIRCLE_DEG;
    if lon == -HALF_CIRCLE_DEG && lon_deg > 0.0 {
        HALF_CIRCLE_DEG
    } else {
        lon
    }
}

/// Solves the direct geodesic problem on the WGS84 ellipsoid (Vincenty):
/// starting at (`latitude_ddeg`, `longitude_ddeg`), travel `distance_m`
/// meters along initial bearing `azimuth_deg` (clockwise from true north).
pub fn forward(
    latitude_ddeg: f64,
    longitude_ddeg: f64,
    azimuth_deg: f64,
    distance_m: f64,
) -> Result<Destination, Error> {
    let alpha1 = azimuth_deg.to_radians();
    let (sin_alpha1, cos_alpha1) = alpha1.sin_cos();

    let tan_u1 = (1.0 - F) * latitude_ddeg.to_radians().tan();
    let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
    let sin_u1 = tan_u1 * cos_u1;

    let sigma1 = tan_u1.atan2(cos_alpha1);
    let sin_alpha = cos_u1 * sin_alpha1;
    let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

    let u_sq = cos_sq_alpha * (A * A - B * B) / (B * B);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let sigma0 = distance_m / (B * big_a);
    let mut sigma = sigma0;

    let (mut sin_sigma, mut cos_sigma, mut cos_2sigma_m);
    let mut iterations = 0;

    loop {
        cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
        sin_sigma = sigma.sin();
        cos_sigma = sigma.cos();

        let delta_sigma = big_b
            * sin_sigma
            * (cos_2sigma_m
                + big_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                        - big_b / 6.0
                            * cos_2sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

        let prev = sigma;
        sigma = sigma0 + delta_sigma;

        if (sigma - prev).abs() < CONVERGENCE_THRESHOLD {
            break;
        }

        iterations += 1;
        if iterations > MAX_ITERATIONS {
            return Err(Error::Geodesy);
        }
    }

    // refresh with converged sigma
    cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
    sin_sigma = sigma.sin();
    cos_sigma = sigma.cos();

    let x = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;

    let lat2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
        .atan2((1.0 - F) * (sin_alpha * sin_alpha + x * x).sqrt());

    let lambda =
        (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);

    let c = F / 16.0 * cos_sq_alpha * (4.0 + F * (4.0 - 3.0 * cos_sq_alpha));

    let l = lambda
        - (1.0 - c)
            * F
            * sin_alpha
            * (sigma
                + c * sin_sigma
                    * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

    let alpha2 = sin_alpha.atan2(-x).to_degrees();

    Ok(Destination {
        latitude_ddeg: lat2.to_degrees(),
        longitude_ddeg: normalize_longitude(longitude_ddeg + l.to_degrees()),
        back_azimuth_deg: (alpha2 + HALF_CIRCLE_DEG).rem_euclid(FULL_CIRCLE_DEG),
    })
}
