//! Vessel navigation: state, movement and heading/speed convergence
mod convergence;
mod state;

pub use state::NavigationState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::Position;

/// [InitialConditions] of an emulation session. Values are trusted:
/// heading in [0, 360[ degrees, speed in [0, 999] knots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InitialConditions {
    pub position: Position,
    /// Altitude above mean sea level (m)
    pub altitude_m: f64,
    /// Speed over ground (knots)
    pub speed_knots: f64,
    /// True heading (degrees)
    pub heading_deg: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            position: Position::default(),
            altitude_m: 15.2,
            speed_knots: 10.5,
            heading_deg: 90.0,
        }
    }
}

impl InitialConditions {
    /// Copies and returns [InitialConditions] with desired [Position]
    pub fn with_position(&self, position: Position) -> Self {
        let mut s = self.clone();
        s.position = position;
        s
    }

    /// Copies and returns [InitialConditions] with desired speed (knots)
    pub fn with_speed(&self, speed_knots: f64) -> Self {
        let mut s = self.clone();
        s.speed_knots = speed_knots;
        s
    }

    /// Copies and returns [InitialConditions] with desired heading (degrees)
    pub fn with_heading(&self, heading_deg: f64) -> Self {
        let mut s = self.clone();
        s.heading_deg = heading_deg;
        s
    }

    /// Copies and returns [InitialConditions] with desired altitude (m)
    pub fn with_altitude(&self, altitude_m: f64) -> Self {
        let mut s = self.clone();
        s.altitude_m = altitude_m;
        s
    }
}
