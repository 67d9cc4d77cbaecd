//! Tick distribution between concurrent sinks
use std::{
    collections::BTreeSet,
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use log::{debug, info};

use crate::{
    emulator::Emulator,
    error::Error,
    navigation::NavigationState,
    prelude::Epoch,
};

/// Identifies a sink registered to a [Coordinator].
/// Ordering is lexicographic and designates the tick driver.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SinkId(String);

impl fmt::Display for SinkId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

struct Shared {
    emulator: Emulator,
    /// Active sinks
    sinks: BTreeSet<SinkId>,
    /// Registration counter
    registered: u64,
}

/// [Coordinator] shares one [Emulator] between any number of sinks.
/// Exactly one active sink (the lowest [SinkId]) drives the emulator,
/// once per request; other sinks read the driver's last rendering, so all
/// sinks emit the same sentences for a given tick.
/// Target heading and speed may be updated at any time, with or without
/// active sinks: they apply on the next tick.
#[derive(Clone)]
pub struct Coordinator {
    shared: Arc<Mutex<Shared>>,
}

impl Coordinator {
    pub fn new(emulator: Emulator) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                emulator,
                sinks: BTreeSet::new(),
                registered: 0,
            })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Shared>, Error> {
        self.shared.lock().map_err(|_| Error::PoisonedState)
    }

    /// Registers a new sink. The sink is deregistered when
    /// the returned [SinkHandle] is dropped.
    pub fn register(&self, name: &str) -> Result<SinkHandle, Error> {
        let mut shared = self.lock()?;

        let id = SinkId(format!("{}-{:06}", name, shared.registered));
        shared.registered += 1;
        shared.sinks.insert(id.clone());

        info!("{} - registered ({} active)", id, shared.sinks.len());

        Ok(SinkHandle {
            id,
            coordinator: self.clone(),
        })
    }

    fn deregister(&self, id: &SinkId) {
        if let Ok(mut shared) = self.shared.lock() {
            shared.sinks.remove(id);
            info!("{} - deregistered ({} active)", id, shared.sinks.len());
        }
    }

    /// Obtains the sentences of this tick for sink `id`: the driver
    /// advances the emulator to `t`, followers read the last rendering.
    fn tick(&self, id: &SinkId, t: Option<Epoch>) -> Result<Vec<String>, Error> {
        let mut shared = self.lock()?;

        let is_driver = shared.sinks.first().map_or(true, |first| first == id);

        if !is_driver {
            debug!("{} - following", id);
            return Ok(shared.emulator.render().to_vec());
        }

        let rendered = match t {
            Some(t) => shared.emulator.advance_tick_at(t)?,
            None => shared.emulator.advance_tick()?,
        };

        Ok(rendered.to_vec())
    }

    /// Currently active sinks, driver first
    pub fn active_sinks(&self) -> Result<Vec<SinkId>, Error> {
        let shared = self.lock()?;
        Ok(shared.sinks.iter().cloned().collect())
    }

    /// Current tick driver, if any sink is active
    pub fn driver(&self) -> Result<Option<SinkId>, Error> {
        let shared = self.lock()?;
        Ok(shared.sinks.first().cloned())
    }

    /// Defines the heading (degrees) to steer to
    pub fn set_target_heading(&self, heading_deg: f64) -> Result<(), Error> {
        let mut shared = self.lock()?;
        shared.emulator.set_target_heading(heading_deg);
        Ok(())
    }

    /// Defines the speed (knots) to reach
    pub fn set_target_speed(&self, speed_knots: f64) -> Result<(), Error> {
        let mut shared = self.lock()?;
        shared.emulator.set_target_speed(speed_knots);
        Ok(())
    }

    /// Snapshot of the [NavigationState]
    pub fn state(&self) -> Result<NavigationState, Error> {
        let shared = self.lock()?;
        Ok(shared.emulator.state().clone())
    }

    /// Last rendered sentences, without advancing
    pub fn render(&self) -> Result<Vec<String>, Error> {
        let shared = self.lock()?;
        Ok(shared.emulator.render().to_vec())
    }
}

/// [SinkHandle] is a sink registration to a [Coordinator].
pub struct SinkHandle {
    id: SinkId,
    coordinator: Coordinator,
}

impl SinkHandle {
    pub fn id(&self) -> &SinkId {
        &self.id
    }

    /// True if this sink currently drives the emulator
    pub fn is_driver(&self) -> Result<bool, Error> {
        Ok(self.coordinator.driver()?.as_ref() == Some(&self.id))
    }

    /// Sentences of the current tick
    pub fn next_tick(&self) -> Result<Vec<String>, Error> {
        self.coordinator.tick(&self.id, None)
    }

    /// Sentences of the tick at `t`
    pub fn next_tick_at(&self, t: Epoch) -> Result<Vec<String>, Error> {
        self.coordinator.tick(&self.id, Some(t))
    }

    /// Defines the heading (degrees) to steer to
    pub fn set_target_heading(&self, heading_deg: f64) -> Result<(), Error> {
        self.coordinator.set_target_heading(heading_deg)
    }

    /// Defines the speed (knots) to reach
    pub fn set_target_speed(&self, speed_knots: f64) -> Result<(), Error> {
        self.coordinator.set_target_speed(speed_knots)
    }
}

impl Drop for SinkHandle {
    fn drop(&mut self) {
        self.coordinator.deregister(&self.id);
    }
}
