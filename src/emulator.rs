//! NMEA sentence generation engine
use log::debug;

use crate::{
    cfg::Config,
    error::Error,
    navigation::{InitialConditions, NavigationState},
    prelude::{Epoch, Randomizer, ThreadRandomizer},
    sentence::{Gga, Gll, Gsa, Gsv, Hdt, Rmc, Sentence, Vtg, Zda},
};

/// [Emulator] owns the [NavigationState] and the fixed set of [Sentence]s
/// describing it. Each tick advances the state then renders all sentences,
/// in this order: GGA, GSA, GSV (xN), GLL, RMC, HDT, VTG, ZDA.
pub struct Emulator {
    /// [Config] preset
    pub cfg: Config,
    /// [NavigationState]
    state: NavigationState,
    /// Sentences, in emission order
    sentences: Vec<Sentence>,
    /// Last rendering
    rendered: Vec<String>,
    /// [Randomizer]
    rng: Box<dyn Randomizer>,
}

impl Emulator {
    /// Creates a new [Emulator], starting now.
    pub fn new(cfg: Config, initial: InitialConditions) -> Result<Self, Error> {
        let t = Epoch::now()?;
        Ok(Self::with_randomizer(
            cfg,
            initial,
            t,
            Box::new(ThreadRandomizer::default()),
        ))
    }

    /// Creates a new [Emulator] starting at `t`, using a custom [Randomizer].
    pub fn with_randomizer(
        cfg: Config,
        initial: InitialConditions,
        t: Epoch,
        mut rng: Box<dyn Randomizer>,
    ) -> Self {
        let state = NavigationState::new(t, initial, &cfg, rng.as_mut());
        let sentences = Self::build_sentences(&cfg, &state);

        let mut s = Self {
            cfg,
            state,
            sentences,
            rendered: Vec::new(),
            rng,
        };

        s.update_sentences();
        s
    }

    fn build_sentences(cfg: &Config, state: &NavigationState) -> Vec<Sentence> {
        let satellites = state.satellites();
        let (group_size, total) = (satellites.num_sentences(), satellites.total());

        let mut sentences = Vec::with_capacity(7 + group_size);

        sentences.push(Sentence::Gga(Gga {
            utc: state.utc.clone(),
            position: state.position.clone(),
            fix_quality: cfg.fix_quality,
            satellites: satellites.used().len(),
            hdop: cfg.hdop,
            altitude_m: state.altitude_m,
            antenna_altitude_m: cfg.antenna_altitude_m,
            dgps_age: String::new(),
            dgps_station: String::new(),
        }));

        sentences.push(Sentence::Gsa(Gsa {
            selection_mode: 'A',
            fix_mode: cfg.fix_mode,
            satellites: satellites.used().to_vec(),
            pdop: cfg.pdop,
            hdop: cfg.hdop,
            vdop: cfg.vdop,
        }));

        for (i, chunk) in satellites.chunks().enumerate() {
            sentences.push(Sentence::Gsv(Gsv::new(group_size, i + 1, total, chunk)));
        }

        sentences.push(Sentence::Gll(Gll {
            position: state.position.clone(),
            utc: state.utc.clone(),
            status: 'A',
            faa_mode: 'A',
        }));

        sentences.push(Sentence::Rmc(Rmc {
            utc: state.utc.clone(),
            status: 'A',
            position: state.position.clone(),
            speed_knots: state.speed_knots,
            course_deg: state.heading_deg,
            magnetic_variation: String::new(),
            magnetic_variation_direction: String::new(),
            faa_mode: 'A',
        }));

        sentences.push(Sentence::Hdt(Hdt {
            heading_deg: state.heading_deg,
        }));

        sentences.push(Sentence::Vtg(Vtg {
            heading_true_deg: state.heading_deg,
            heading_magnetic_deg: None,
            speed_knots: state.speed_knots,
        }));

        sentences.push(Sentence::Zda(Zda {
            utc: state.utc.clone(),
        }));

        sentences
    }

    /// Pushes the per tick fields into every sentence, draws
    /// new satellite views, and renders all sentences.
    fn update_sentences(&mut self) {
        let state = &self.state;

        for sentence in self.sentences.iter_mut() {
            match sentence {
                Sentence::Gga(gga) => {
                    gga.utc = state.utc.clone();
                    gga.position = state.position.clone();
                    gga.satellites = state.satellites.used().len();
                },
                Sentence::Gsa(gsa) => {
                    gsa.satellites = state.satellites.used().to_vec();
                },
                Sentence::Gsv(gsv) => {
                    gsv.refresh(self.rng.as_mut());
                },
                Sentence::Gll(gll) => {
                    gll.utc = state.utc.clone();
                    gll.position = state.position.clone();
                },
                Sentence::Rmc(rmc) => {
                    rmc.utc = state.utc.clone();
                    rmc.position = state.position.clone();
                    rmc.speed_knots = state.speed_knots;
                    rmc.course_deg = state.heading_deg;
                },
                Sentence::Hdt(hdt) => {
                    hdt.heading_deg = state.heading_deg;
                },
                Sentence::Vtg(vtg) => {
                    vtg.heading_true_deg = state.heading_deg;
                    vtg.speed_knots = state.speed_knots;
                },
                Sentence::Zda(zda) => {
                    zda.utc = state.utc.clone();
                },
            }
        }

        self.rendered = self.sentences.iter().map(|s| s.to_string()).collect();
    }

    /// Advances to the next tick (now) and returns the new sentences.
    pub fn advance_tick(&mut self) -> Result<&[String], Error> {
        let t = Epoch::now()?;
        self.advance_tick_at(t)
    }

    /// Advances to the next tick, at `t`, and returns the new sentences.
    pub fn advance_tick_at(&mut self, t: Epoch) -> Result<&[String], Error> {
        self.state.advance(t, &self.cfg, self.rng.as_mut())?;
        self.update_sentences();
        debug!("{} - rendered {} sentences", t, self.rendered.len());
        Ok(&self.rendered)
    }

    /// Returns the last rendered sentences, without advancing.
    pub fn render(&self) -> &[String] {
        &self.rendered
    }

    /// Returns the GSV group of last tick: all satellites in view,
    /// one framed sentence per 4 satellites, concatenated.
    pub fn satellites_in_view(&self) -> String {
        self.sentences
            .iter()
            .zip(self.rendered.iter())
            .filter(|(sentence, _)| matches!(sentence, Sentence::Gsv(_)))
            .map(|(_, rendered)| rendered.as_str())
            .collect()
    }

    /// Returns the [Sentence]s as of last tick
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Returns a read-only view of the [NavigationState]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Defines the heading (degrees) to steer to. Trusted to lie in [0, 360[.
    pub fn set_target_heading(&mut self, heading_deg: f64) {
        self.state.heading_target_deg = heading_deg;
    }

    /// Defines the speed (knots) to reach. Trusted to lie in [0, 999].
    pub fn set_target_speed(&mut self, speed_knots: f64) {
        self.state.speed_target_knots = speed_knots;
    }
}

impl std::fmt::Display for Emulator {
    /// All sentences of the last tick, concatenated
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for sentence in self.rendered.iter() {
            f.write_str(sentence)?;
        }
        Ok(())
    }
}
