//! Output sinks: paced delivery of the sentences of each tick
use std::{
    thread,
    time::{Duration, Instant},
};

use log::{debug, warn};

use crate::{cfg::Config, coordinator::SinkHandle, error::Error};

mod serial;
mod stream;
mod tcp;
mod writer;

pub use serial::{SerialConfig, SerialTransport};
pub use stream::{TcpStreamTransport, UdpStreamTransport};
pub use tcp::TcpServer;
pub use writer::WriterTransport;

/// [Transport] delivers one framed sentence to its consumer.
pub trait Transport: Send {
    fn send(&mut self, sentence: &str) -> std::io::Result<()>;
}

/// Sleeps for what remains of `period` since `start`.
/// Overruns are reported, never fatal: next cycle starts right away.
pub(crate) fn sleep_remaining(period: Duration, start: Instant, name: &str) -> Duration {
    let elapsed = start.elapsed();

    if elapsed > period {
        warn!(
            "{} - cycle took {:?}, exceeding the {:?} period: cannot sustain real time",
            name, elapsed, period
        );
    }

    let remaining = period.saturating_sub(elapsed);
    thread::sleep(remaining);
    remaining
}

/// [Streamer] runs the loop of one sink: once per period, obtain the
/// sentences of the current tick and write them one by one, with a
/// short pause in between so slow listeners are not overrun.
pub struct Streamer<T: Transport> {
    handle: SinkHandle,
    transport: T,
    period: Duration,
    sentence_delay: Duration,
}

impl<T: Transport> Streamer<T> {
    pub fn new(handle: SinkHandle, transport: T, cfg: &Config) -> Self {
        Self {
            handle,
            transport,
            period: cfg.tick_period(),
            sentence_delay: cfg.sentence_delay(),
        }
    }

    /// Runs a single cycle: fetch, write, then sleep until next period.
    pub fn cycle(&mut self) -> Result<(), Error> {
        let start = Instant::now();

        let sentences = self.handle.next_tick()?;

        for sentence in sentences.iter() {
            self.transport.send(sentence)?;
            thread::sleep(self.sentence_delay);
        }

        let id = self.handle.id().to_string();
        let slept = sleep_remaining(self.period, start, &id);
        debug!("{} - {} sentences sent, slept {:?}", id, sentences.len(), slept);
        Ok(())
    }

    /// Runs until the [Transport] fails. Dropping the [Streamer]
    /// deregisters this sink.
    pub fn run(mut self) -> Result<(), Error> {
        loop {
            self.cycle()?;
        }
    }

    /// Consumes this [Streamer], returning its [Transport]
    pub fn into_transport(self) -> T {
        self.transport
    }
}
