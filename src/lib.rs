#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod checksum;
mod constants;
mod coordinator;
mod emulator;
mod error;
mod geodesy;
mod navigation;
mod position;
mod random;
mod satellites;
mod sentence;
mod sink;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::Config;
    pub use crate::checksum::checksum;
    pub use crate::coordinator::{Coordinator, SinkHandle, SinkId};
    pub use crate::emulator::Emulator;
    pub use crate::error::Error;
    pub use crate::geodesy::{forward, Destination};
    pub use crate::navigation::{InitialConditions, NavigationState};
    pub use crate::position::{LatitudeDirection, LongitudeDirection, Position};
    pub use crate::random::{Randomizer, ThreadRandomizer};
    pub use crate::satellites::SatelliteGroup;
    pub use crate::sentence::{
        Gga, Gll, Gsa, Gsv, Hdt, Rmc, SatelliteView, Sentence, UtcTime, Vtg, Zda,
    };
    pub use crate::sink::{
        SerialConfig, SerialTransport, Streamer, TcpServer, TcpStreamTransport, Transport,
        UdpStreamTransport, WriterTransport,
    };
    pub use serialport::{DataBits, Parity, StopBits};
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
}
