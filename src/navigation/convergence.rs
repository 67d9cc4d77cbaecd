//! Bounded rate of change of heading and speed
use crate::constants::{FULL_CIRCLE_DEG, HALF_CIRCLE_DEG};

fn round_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10.0_f64.powi(decimals);
    (value * scale).round() / scale
}

/// Moves `current` heading towards `target` by at most `increment` degrees,
/// along the shorter arc. Result lies in [0, 360[, rounded to 1 decimal.
pub fn heading(current: f64, target: f64, increment: f64) -> f64 {
    let delta = target - current;

    let mut heading = if delta.abs() <= increment {
        target
    } else {
        // shorter path wraps through 0/360: turn the other way
        let step = if delta.abs() > HALF_CIRCLE_DEG {
            -increment.copysign(delta)
        } else {
            increment.copysign(delta)
        };
        current + step
    };

    if heading == FULL_CIRCLE_DEG {
        heading = 0.0;
    } else if heading > FULL_CIRCLE_DEG {
        heading -= FULL_CIRCLE_DEG;
    } else if heading < 0.0 {
        heading += FULL_CIRCLE_DEG;
    }

    round_decimals(heading, 1)
}

/// Moves `current` speed towards `target` by at most `increment` knots.
/// Result is rounded to 3 decimals.
pub fn speed(current: f64, target: f64, increment: f64) -> f64 {
    let diff = target - current;

    let speed = if diff.abs() <= increment {
        target
    } else {
        current + increment.copysign(diff)
    };

    round_decimals(speed, 3)
}

#[cfg(test)]
mod test {
    use super::{heading, speed};
    use rstest::*;

    #[rstest]
    #[case(89.0, 90.0, 90.0)]
    #[case(90.0, 90.0, 90.0)]
    #[case(2.0, 358.0, 359.0)]
    #[case(358.0, 2.0, 1.0)]
    #[case(359.0, 1.0, 2.0)]
    #[case(10.0, 100.0, 13.0)]
    #[case(100.0, 10.0, 97.0)]
    #[case(1.0, 200.0, 358.0)]
    #[case(357.0, 0.0, 0.0)]
    #[case(123.1, 200.0, 126.1)]
    fn test_heading_step(#[case] current: f64, #[case] target: f64, #[case] expected: f64) {
        assert_eq!(heading(current, target, 3.0), expected);
    }

    #[test]
    fn test_heading_converges() {
        let (mut current, target) = (350.0, 20.0);
        let mut steps = 0;
        while current != target {
            current = heading(current, target, 3.0);
            assert!((0.0..360.0).contains(&current));
            steps += 1;
            assert!(steps < 20, "did not converge");
        }
        // 30° shorter arc through north
        assert_eq!(steps, 10);
    }

    #[rstest]
    #[case(10.0, 20.0, 13.0)]
    #[case(19.0, 20.0, 20.0)]
    #[case(20.0, 10.0, 17.0)]
    #[case(11.0, 10.0, 10.0)]
    #[case(0.0, 999.0, 3.0)]
    fn test_speed_step(#[case] current: f64, #[case] target: f64, #[case] expected: f64) {
        assert_eq!(speed(current, target, 3.0), expected);
    }

    #[test]
    fn test_speed_sequence() {
        let mut current = 10.0;
        let mut sequence = Vec::new();
        while current != 20.0 {
            current = speed(current, 20.0, 3.0);
            sequence.push(current);
        }
        assert_eq!(sequence, vec![13.0, 16.0, 19.0, 20.0]);
    }
}
