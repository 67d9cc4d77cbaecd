mod emulator;
mod sink;

use log::LevelFilter;
use std::sync::Once;

use crate::prelude::{
    Config, Constellation, Emulator, Epoch, InitialConditions, LatitudeDirection,
    LongitudeDirection, Position, Randomizer, SV,
};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Satellite pool used by [ScriptedRandomizer]
pub const SCRIPTED_PRNS: [u8; 15] = [20, 30, 10, 21, 3, 2, 19, 8, 12, 26, 24, 22, 9, 1, 25];

/// [ScriptedRandomizer] is a deterministic [Randomizer]:
/// - ranges resolve to `max - 10` (bounded by `min`)
/// - sampling returns the scripted satellites that belong
///   to the population, in scripted order
pub struct ScriptedRandomizer {
    script: Vec<SV>,
}

impl Default for ScriptedRandomizer {
    fn default() -> Self {
        Self {
            script: SCRIPTED_PRNS
                .iter()
                .map(|prn| SV::new(Constellation::GPS, *prn))
                .collect(),
        }
    }
}

impl Randomizer for ScriptedRandomizer {
    fn range(&mut self, min: u32, max: u32) -> u32 {
        max.saturating_sub(10).max(min)
    }

    fn sample(&mut self, population: &[SV], amount: usize) -> Vec<SV> {
        self.script
            .iter()
            .filter(|sv| population.contains(sv))
            .take(amount)
            .copied()
            .collect()
    }
}

/// 2021-03-09T12:09:44.855497 UTC
pub fn reference_epoch() -> Epoch {
    Epoch::from_gregorian_utc(2021, 3, 9, 12, 9, 44, 855_497_000)
}

pub fn reference_position() -> Position {
    Position::new(
        "5425.123",
        LatitudeDirection::North,
        "01832.664",
        LongitudeDirection::East,
    )
}

pub fn reference_conditions() -> InitialConditions {
    InitialConditions {
        position: reference_position(),
        altitude_m: 15.2,
        speed_knots: 12.3,
        heading_deg: 123.1,
    }
}

/// Deterministic [Emulator] starting at [reference_epoch]
pub fn scripted_emulator(cfg: Config, initial: InitialConditions) -> Emulator {
    Emulator::with_randomizer(
        cfg,
        initial,
        reference_epoch(),
        Box::new(ScriptedRandomizer::default()),
    )
}

/// Verifies framing and checksum of a rendered sentence
pub fn assert_valid_sentence(sentence: &str) {
    assert!(sentence.starts_with('$'), "missing '$': {}", sentence);
    assert!(sentence.ends_with("\r\n"), "missing CRLF: {}", sentence);

    let star = sentence
        .rfind('*')
        .unwrap_or_else(|| panic!("missing '*': {}", sentence));

    let body = &sentence[1..star];
    let checksum = &sentence[star + 1..sentence.len() - 2];
    assert_eq!(crate::prelude::checksum(body), checksum, "{}", sentence);
}
