use rstest::*;

use crate::{
    prelude::{
        Config, Emulator, Epoch, InitialConditions, LatitudeDirection, LongitudeDirection,
        Position, ThreadRandomizer, Unit,
    },
    tests::{
        assert_valid_sentence, init_logger, reference_conditions, reference_epoch,
        scripted_emulator,
    },
};

fn seeded_emulator(initial: InitialConditions, seed: u64) -> Emulator {
    Emulator::with_randomizer(
        Config::default(),
        initial,
        reference_epoch(),
        Box::new(ThreadRandomizer::from_seed(seed)),
    )
}

fn find<'a>(sentences: &'a [String], id: &str) -> &'a str {
    sentences
        .iter()
        .find(|s| s[1..].starts_with(id))
        .unwrap_or_else(|| panic!("{} not found", id))
}

#[test]
fn end_to_end_rmc() {
    init_logger();
    let mut emulator = scripted_emulator(Config::default(), reference_conditions());

    let expected = "$GPRMC,120944.000,A,5425.123,N,01832.664,E,12.300,123.1,090321,,,A*56\r\n";
    assert_eq!(find(emulator.render(), "GPRMC"), expected);

    // no time elapsed: nothing moves
    let t = reference_epoch();
    let sentences = emulator.advance_tick_at(t).unwrap();
    assert_eq!(find(sentences, "GPRMC"), expected);
}

#[test]
fn sentence_order() {
    let mut emulator = seeded_emulator(reference_conditions(), 0);
    let t0 = reference_epoch();

    for i in 1..5 {
        let sentences = emulator.advance_tick_at(t0 + (i as f64) * Unit::Second).unwrap();
        assert_eq!(sentences.len(), 3 + 4 + 4);

        let ids = sentences.iter().map(|s| &s[1..6]).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                "GPGGA", "GPGSA", "GPGSV", "GPGSV", "GPGSV", "GPGSV", "GPGLL", "GPRMC", "GPHDT",
                "GPVTG", "GPZDA"
            ]
        );

        for sentence in sentences {
            assert_valid_sentence(sentence);
        }
    }
}

#[test]
fn satellites_in_view_are_persistent() {
    let mut emulator = seeded_emulator(reference_conditions(), 1);
    let pool = emulator.state().satellites().satellites().to_vec();
    let t0 = reference_epoch();

    for i in 1..10 {
        emulator.advance_tick_at(t0 + (i as f64) * Unit::Second).unwrap();
        let state = emulator.state();
        assert_eq!(state.satellites().satellites(), pool.as_slice());

        let used = state.satellites().used().len();
        assert!((4..=12).contains(&used));

        // GGA count follows the GSA subset
        let gga = find(emulator.render(), "GPGGA");
        let fields = gga.split(',').collect::<Vec<_>>();
        assert_eq!(fields[7], format!("{:02}", used));

        let gsa = find(emulator.render(), "GPGSA");
        let populated = gsa.split(',').skip(3).take(12).filter(|f| !f.is_empty());
        assert_eq!(populated.count(), used);
    }
}

#[test]
fn satellites_in_view_group() {
    let emulator = scripted_emulator(Config::default(), reference_conditions());
    let group = emulator.satellites_in_view();

    let lines = group.split_inclusive("\r\n").collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);

    for (i, line) in lines.iter().enumerate() {
        assert!(line.starts_with(&format!("$GPGSV,4,{},15,", i + 1)));
        assert_valid_sentence(line);
    }

    let rendered = emulator
        .render()
        .iter()
        .filter(|s| s.starts_with("$GPGSV"))
        .map(|s| s.as_str())
        .collect::<String>();
    assert_eq!(group, rendered);
}

#[rstest]
#[case(3, 4)]
#[case(15, 15)]
#[case(16, 16)]
fn satellites_total(#[case] total: usize, #[case] expected: usize) {
    let mut emulator = Emulator::with_randomizer(
        Config::default().with_satellites(total),
        reference_conditions(),
        reference_epoch(),
        Box::new(ThreadRandomizer::from_seed(2)),
    );

    let sentences = emulator.advance_tick_at(reference_epoch()).unwrap();
    let gsv = sentences
        .iter()
        .filter(|s| s.starts_with("$GPGSV"))
        .collect::<Vec<_>>();

    assert_eq!(gsv.len(), expected.div_ceil(4));

    for (i, sentence) in gsv.iter().enumerate() {
        let fields = sentence.split(['*', ',']).collect::<Vec<_>>();
        assert_eq!(fields[1], gsv.len().to_string());
        assert_eq!(fields[2], (i + 1).to_string());
        assert_eq!(fields[3], expected.to_string());
    }
}

#[test]
fn heading_idempotence() {
    let mut emulator = seeded_emulator(reference_conditions(), 3);
    let t = reference_epoch();

    for _ in 0..5 {
        emulator.advance_tick_at(t).unwrap();
        assert_eq!(emulator.state().heading(), 123.1);
        assert_eq!(find(emulator.render(), "GPHDT"), "$GPHDT,123.1,T*34\r\n");
    }
}

#[rstest]
#[case(2.0, 358.0, 359.0)]
#[case(89.0, 90.0, 90.0)]
#[case(358.0, 2.0, 1.0)]
#[case(0.0, 90.0, 3.0)]
fn heading_single_tick(#[case] initial: f64, #[case] target: f64, #[case] expected: f64) {
    let initial = reference_conditions().with_heading(initial).with_speed(0.0);
    let mut emulator = seeded_emulator(initial, 4);

    emulator.set_target_heading(target);
    emulator.advance_tick_at(reference_epoch()).unwrap();

    assert_eq!(emulator.state().heading(), expected);
    assert_eq!(emulator.state().heading_target(), target);
}

#[test]
fn speed_convergence() {
    let initial = reference_conditions().with_speed(10.0);
    let mut emulator = seeded_emulator(initial, 5);
    emulator.set_target_speed(20.0);

    let t0 = reference_epoch();
    let mut speeds = Vec::new();

    for i in 1..=5 {
        emulator.advance_tick_at(t0 + (i as f64) * Unit::Second).unwrap();
        speeds.push(emulator.state().speed());
    }

    assert_eq!(speeds, vec![13.0, 16.0, 19.0, 20.0, 20.0]);
    assert!(find(emulator.render(), "GPRMC").contains(",20.000,"));
}

#[test]
fn stationary_vessel() {
    let initial = reference_conditions().with_speed(0.0);
    let mut emulator = seeded_emulator(initial, 6);
    let t0 = reference_epoch();

    emulator.advance_tick_at(t0 + 3600.0 * Unit::Second).unwrap();
    emulator.advance_tick_at(t0 + 7200.0 * Unit::Second).unwrap();

    let position = emulator.state().position();
    assert_eq!(position.latitude, "5425.123");
    assert_eq!(position.longitude, "01832.664");
}

#[test]
fn equator_crossing() {
    let initial = InitialConditions {
        position: Position::new(
            "0000.500",
            LatitudeDirection::North,
            "01920.000",
            LongitudeDirection::East,
        ),
        altitude_m: 0.0,
        speed_knots: 10.0,
        heading_deg: 180.0,
    };

    let mut emulator = seeded_emulator(initial, 7);

    // 10 kn for 200 s: 1029 m, further than 0.5' (~921 m)
    emulator
        .advance_tick_at(reference_epoch() + 200.0 * Unit::Second)
        .unwrap();

    let position = emulator.state().position();
    assert_eq!(position.latitude_direction, LatitudeDirection::South);
    assert!(position.latitude.starts_with("0000.0"), "{:?}", position);
    assert_eq!(position.longitude, "01920.000");
    assert_eq!(position.longitude_direction, LongitudeDirection::East);

    let gll = find(emulator.render(), "GPGLL");
    assert!(gll.contains(",S,01920.000,E,"), "{}", gll);
}

#[test]
fn prime_meridian_crossing() {
    let initial = InitialConditions {
        position: Position::new(
            "0000.000",
            LatitudeDirection::North,
            "00000.100",
            LongitudeDirection::East,
        ),
        altitude_m: 0.0,
        speed_knots: 10.0,
        heading_deg: 270.0,
    };

    let mut emulator = seeded_emulator(initial, 8);

    // 10 kn for 60 s: 309 m, further than 0.1' (~186 m)
    emulator
        .advance_tick_at(reference_epoch() + 60.0 * Unit::Second)
        .unwrap();

    let position = emulator.state().position();
    assert_eq!(position.longitude_direction, LongitudeDirection::West);
    assert_eq!(position.latitude, "0000.000");
}

#[test]
fn northbound_displacement() {
    let initial = reference_conditions().with_heading(0.0).with_speed(60.0);
    let mut emulator = seeded_emulator(initial, 9);

    let (lat0, lon0) = emulator.state().position().to_decimal_degrees().unwrap();

    // 60 kn for 60 s = 1 NM, about one minute of latitude
    emulator
        .advance_tick_at(reference_epoch() + 60.0 * Unit::Second)
        .unwrap();

    let (lat1, lon1) = emulator.state().position().to_decimal_degrees().unwrap();
    let dlat_min = (lat1 - lat0) * 60.0;

    assert!((dlat_min - 1.0).abs() < 0.01, "moved {}'", dlat_min);
    assert!((lon1 - lon0).abs() < 1.0E-6);
}

#[test]
fn position_uses_heading_before_convergence() {
    // due east at 0°, steering north: first tick still moves east
    let initial = InitialConditions {
        position: Position::new(
            "0000.000",
            LatitudeDirection::North,
            "00000.000",
            LongitudeDirection::East,
        ),
        altitude_m: 0.0,
        speed_knots: 20.0,
        heading_deg: 90.0,
    };
    let mut emulator = seeded_emulator(initial, 10);
    emulator.set_target_heading(0.0);

    emulator
        .advance_tick_at(reference_epoch() + 60.0 * Unit::Second)
        .unwrap();

    let state = emulator.state();
    assert_eq!(state.position().latitude, "0000.000");
    assert_ne!(state.position().longitude, "00000.000");
    assert_eq!(state.heading(), 87.0);
}

#[test]
fn wall_clock() {
    init_logger();
    let mut emulator = Emulator::new(Config::default(), InitialConditions::default()).unwrap();
    let t0 = emulator.state().epoch();

    let sentences = emulator.advance_tick().unwrap().to_vec();
    assert!(emulator.state().epoch() >= t0);

    for sentence in sentences.iter() {
        assert_valid_sentence(sentence);
    }
    assert_eq!(emulator.to_string(), sentences.concat());
}

#[test]
fn inverted_fix_range() {
    let mut cfg = Config::default();
    cfg.min_satellites_in_fix = 13;
    cfg.max_satellites_in_fix = 12;

    let mut emulator = Emulator::with_randomizer(
        cfg,
        reference_conditions(),
        reference_epoch(),
        Box::new(ThreadRandomizer::from_seed(12)),
    );
    assert_eq!(emulator.state().satellites().used().len(), 13);

    let t = reference_epoch() + 1.0 * Unit::Second;
    let sentences = emulator.advance_tick_at(t).unwrap();
    let gga = find(sentences, "GPGGA");
    assert_eq!(gga.split(',').nth(7), Some("13"));
}

#[test]
fn invalid_position() {
    let initial = reference_conditions().with_position(Position::new(
        "ab",
        LatitudeDirection::North,
        "01832.664",
        LongitudeDirection::East,
    ));
    let mut emulator = seeded_emulator(initial, 11);
    let before = emulator.render().to_vec();

    let t: Epoch = reference_epoch() + 1.0 * Unit::Second;
    assert!(emulator.advance_tick_at(t).is_err());

    // failed tick leaves the state untouched
    let state = emulator.state();
    assert_eq!(state.epoch(), reference_epoch());
    assert_eq!(state.position().latitude, "ab");
    assert_eq!(state.heading(), 123.1);
    assert_eq!(state.speed(), 12.3);
    assert_eq!(emulator.render(), before.as_slice());
}
