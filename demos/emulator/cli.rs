// The Cli selects the sink and the initial conditions of the vessel.
use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};

use nmea_emulator::prelude::{Config, InitialConditions, Position};

/// Selected output
pub enum Output {
    /// TCP server, all clients sharing the same ticks
    Server { address: String },
    /// Outgoing TCP or UDP stream
    Stream { address: String, udp: bool },
    /// Serial port
    Serial { path: String, baud_rate: u32 },
    /// Standard output
    Stdout,
}

pub struct Cli {
    matches: ArgMatches,
}

impl Cli {
    pub fn new() -> Self {
        let address = Arg::new("address")
            .short('a')
            .long("address")
            .action(ArgAction::Set)
            .required(true)
            .help("Socket address, for example 127.0.0.1:10110");

        let cmd = Command::new("emulator")
            .version(env!("CARGO_PKG_VERSION"))
            .about("NMEA 0183 GPS receiver emulator")
            .arg_required_else_help(true)
            .subcommand_required(true)
            .color(ColorChoice::Always)
            .arg(
                Arg::new("heading")
                    .long("heading")
                    .global(true)
                    .value_parser(value_parser!(f64))
                    .help("Initial heading (degrees)"),
            )
            .arg(
                Arg::new("speed")
                    .long("speed")
                    .global(true)
                    .value_parser(value_parser!(f64))
                    .help("Initial speed (knots)"),
            )
            .arg(
                Arg::new("position")
                    .long("position")
                    .global(true)
                    .value_parser(value_parser!(f64))
                    .num_args(2)
                    .allow_negative_numbers(true)
                    .value_names(["LAT", "LONG"])
                    .help("Initial position (signed decimal degrees)"),
            )
            .arg(
                Arg::new("satellites")
                    .short('s')
                    .long("satellites")
                    .global(true)
                    .value_parser(value_parser!(usize))
                    .help("Number of satellites in view"),
            )
            .subcommand(
                Command::new("server")
                    .about("Serve sentences to TCP clients")
                    .arg(address.clone()),
            )
            .subcommand(
                Command::new("stream")
                    .about("Stream sentences to a remote TCP server or UDP listener")
                    .arg(address)
                    .arg(
                        Arg::new("udp")
                            .long("udp")
                            .action(ArgAction::SetTrue)
                            .help("Stream datagrams instead of TCP"),
                    ),
            )
            .subcommand(
                Command::new("serial")
                    .about("Write sentences to a serial device")
                    .arg(
                        Arg::new("path")
                            .action(ArgAction::Set)
                            .required(true)
                            .help("Device node, for example /dev/ttyUSB0"),
                    )
                    .arg(
                        Arg::new("baudrate")
                            .short('b')
                            .long("baudrate")
                            .value_parser(value_parser!(u32))
                            .default_value("9600")
                            .help("Line speed (bps), 8N1 framing"),
                    ),
            )
            .subcommand(Command::new("stdout").about("Print sentences"));

        Self {
            matches: cmd.get_matches(),
        }
    }

    pub fn output(&self) -> Output {
        match self.matches.subcommand() {
            Some(("server", m)) => Output::Server {
                address: m.get_one::<String>("address").unwrap().clone(),
            },
            Some(("stream", m)) => Output::Stream {
                address: m.get_one::<String>("address").unwrap().clone(),
                udp: m.get_flag("udp"),
            },
            Some(("serial", m)) => Output::Serial {
                path: m.get_one::<String>("path").unwrap().clone(),
                baud_rate: *m.get_one::<u32>("baudrate").unwrap(),
            },
            _ => Output::Stdout,
        }
    }

    pub fn config(&self) -> Config {
        let cfg = Config::default();
        match self.matches.get_one::<usize>("satellites") {
            Some(total) => cfg.with_satellites(*total),
            None => cfg,
        }
    }

    pub fn initial_conditions(&self) -> InitialConditions {
        let mut initial = InitialConditions::default();

        if let Some(heading) = self.matches.get_one::<f64>("heading") {
            initial = initial.with_heading(*heading);
        }

        if let Some(speed) = self.matches.get_one::<f64>("speed") {
            initial = initial.with_speed(*speed);
        }

        if let Some(coords) = self.matches.get_many::<f64>("position") {
            let coords = coords.copied().collect::<Vec<_>>();
            initial = initial.with_position(Position::from_decimal_degrees(coords[0], coords[1]));
        }

        initial
    }
}
