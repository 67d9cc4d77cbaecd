// Emulator demo: deploys one sink, while standard input steers the vessel.
// Type "<heading> <speed>" then Enter, for example "270 15.5".

#[macro_use]
extern crate log;

use std::{io::BufRead, thread};

use env_logger::{Builder, Target};

mod cli;
use cli::{Cli, Output};

use nmea_emulator::prelude::{
    Config, Coordinator, Emulator, Error, SerialConfig, SerialTransport, Streamer, TcpServer,
    TcpStreamTransport, Transport, UdpStreamTransport, WriterTransport,
};

/// Reads new targets from standard input, forever.
fn steering(coordinator: Coordinator) {
    let stdin = std::io::stdin();

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };

        let items = line.split_whitespace().collect::<Vec<_>>();

        let (heading, speed) = match items.as_slice() {
            [heading, speed] => match (heading.parse::<f64>(), speed.parse::<f64>()) {
                (Ok(heading), Ok(speed)) => (heading, speed),
                _ => {
                    error!("invalid input \"{}\"", line);
                    continue;
                },
            },
            _ => {
                error!("expecting \"<heading> <speed>\"");
                continue;
            },
        };

        if !(0.0..360.0).contains(&heading) || !(0.0..=999.0).contains(&speed) {
            error!("heading should lie in [0, 360[ and speed in [0, 999]");
            continue;
        }

        if coordinator.set_target_heading(heading).is_err()
            || coordinator.set_target_speed(speed).is_err()
        {
            break;
        }

        info!("new target: {}° {}kn", heading, speed);
    }
}

fn stream<T: Transport>(
    coordinator: &Coordinator,
    name: &str,
    transport: T,
    cfg: &Config,
) -> Result<(), Error> {
    let handle = coordinator.register(name)?;
    Streamer::new(handle, transport, cfg).run()
}

fn run(output: Output, coordinator: Coordinator, cfg: Config) -> Result<(), Error> {
    match output {
        Output::Server { address } => TcpServer::bind(address, coordinator, cfg)?.serve(),
        Output::Stream { address, udp } => {
            if udp {
                let transport = UdpStreamTransport::connect(address)?;
                stream(&coordinator, "udp-stream", transport, &cfg)
            } else {
                let transport = TcpStreamTransport::connect(address)?;
                stream(&coordinator, "tcp-stream", transport, &cfg)
            }
        },
        Output::Serial { path, baud_rate } => {
            let serial_cfg = SerialConfig::default().with_baud_rate(baud_rate);
            let transport = SerialTransport::open(&path, &serial_cfg)?;
            stream(&coordinator, "serial", transport, &cfg)
        },
        Output::Stdout => stream(
            &coordinator,
            "stdout",
            WriterTransport::new(std::io::stdout()),
            &cfg,
        ),
    }
}

pub fn main() {
    // Logs go to stderr: stdout may be the sink
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stderr)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();

    let cfg = cli.config();
    let initial = cli.initial_conditions();
    info!("{:#?}", cfg);

    let emulator = Emulator::new(cfg.clone(), initial).expect("failed to deploy emulator");
    let coordinator = Coordinator::new(emulator);

    let steering_coordinator = coordinator.clone();
    thread::spawn(move || steering(steering_coordinator));

    if let Err(e) = run(cli.output(), coordinator, cfg) {
        error!("emulator terminated: {}", e);
        std::process::exit(1);
    }
}
