use log::debug;

use crate::{
    cfg::Config,
    constants::KNOTS_TO_M_S,
    error::Error,
    geodesy,
    navigation::{convergence, InitialConditions},
    position::Position,
    prelude::{Epoch, Randomizer},
    satellites::SatelliteGroup,
    sentence::UtcTime,
};

/// [NavigationState] is the vessel state. Current heading and speed
/// only move on [NavigationState::advance], targets may be retargeted
/// at any time and are reached gradually.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    /// Time of last update
    pub(crate) t: Epoch,
    /// UTC fields of `t`
    pub(crate) utc: UtcTime,
    pub(crate) position: Position,
    pub(crate) heading_deg: f64,
    pub(crate) heading_target_deg: f64,
    pub(crate) speed_knots: f64,
    pub(crate) speed_target_knots: f64,
    pub(crate) altitude_m: f64,
    pub(crate) satellites: SatelliteGroup,
}

impl std::fmt::Display for NavigationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}{} {}{} hdg={}° (->{}°) sog={}kn (->{}kn)",
            self.t,
            self.position.latitude,
            self.position.latitude_direction,
            self.position.longitude,
            self.position.longitude_direction,
            self.heading_deg,
            self.heading_target_deg,
            self.speed_knots,
            self.speed_target_knots,
        )
    }
}

impl NavigationState {
    /// Creates a new [NavigationState] at `t`, targets equal to
    /// the initial heading and speed.
    pub(crate) fn new(
        t: Epoch,
        initial: InitialConditions,
        cfg: &Config,
        rng: &mut dyn Randomizer,
    ) -> Self {
        let mut satellites = SatelliteGroup::new(cfg.satellites_total, rng);
        satellites.resample_used(cfg.min_satellites_in_fix, cfg.max_satellites_in_fix, rng);

        Self {
            t,
            utc: UtcTime::from_epoch(t),
            position: initial.position,
            heading_deg: initial.heading_deg,
            heading_target_deg: initial.heading_deg,
            speed_knots: initial.speed_knots,
            speed_target_knots: initial.speed_knots,
            altitude_m: initial.altitude_m,
            satellites,
        }
    }

    /// Advances the state to `t`: moves the vessel along its current
    /// heading and speed for the elapsed time, then steps heading and
    /// speed towards their targets, and samples a new fix subset.
    pub(crate) fn advance(
        &mut self,
        t: Epoch,
        cfg: &Config,
        rng: &mut dyn Randomizer,
    ) -> Result<(), Error> {
        // a failed projection leaves the whole state untouched
        let position = if self.speed_knots > 0.0 {
            let dt_s = (t - self.t).to_seconds();
            Some(self.projected_position(dt_s)?)
        } else {
            None
        };

        self.t = t;
        self.utc = UtcTime::from_epoch(t);

        if let Some(position) = position {
            self.position = position;
        }

        if self.heading_deg != self.heading_target_deg {
            self.heading_deg = convergence::heading(
                self.heading_deg,
                self.heading_target_deg,
                cfg.heading_increment_deg,
            );
        }

        if self.speed_knots != self.speed_target_knots {
            self.speed_knots = convergence::speed(
                self.speed_knots,
                self.speed_target_knots,
                cfg.speed_increment_knots,
            );
        }

        self.satellites
            .resample_used(cfg.min_satellites_in_fix, cfg.max_satellites_in_fix, rng);

        debug!("{}", self);
        Ok(())
    }

    /// Position reached after `dt_s` seconds at current heading and speed.
    fn projected_position(&self, dt_s: f64) -> Result<Position, Error> {
        let distance_m = self.speed_knots * KNOTS_TO_M_S * dt_s;
        let (lat_ddeg, long_ddeg) = self.position.to_decimal_degrees()?;

        let destination = geodesy::forward(lat_ddeg, long_ddeg, self.heading_deg, distance_m)?;

        Ok(Position::from_decimal_degrees(
            destination.latitude_ddeg,
            destination.longitude_ddeg,
        ))
    }

    /// Time of last update
    pub fn epoch(&self) -> Epoch {
        self.t
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Current heading (degrees)
    pub fn heading(&self) -> f64 {
        self.heading_deg
    }

    /// Heading being steered to (degrees)
    pub fn heading_target(&self) -> f64 {
        self.heading_target_deg
    }

    /// Current speed over ground (knots)
    pub fn speed(&self) -> f64 {
        self.speed_knots
    }

    /// Speed being reached (knots)
    pub fn speed_target(&self) -> f64 {
        self.speed_target_knots
    }

    /// Altitude above mean sea level (m)
    pub fn altitude(&self) -> f64 {
        self.altitude_m
    }

    pub fn satellites(&self) -> &SatelliteGroup {
        &self.satellites
    }
}
