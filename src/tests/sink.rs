use std::{
    io::{BufRead, BufReader},
    net::{TcpStream, UdpSocket},
    sync::{Arc, Mutex},
    thread,
    time::Duration,
};

use crate::{
    prelude::{
        Config, Coordinator, Emulator, Error, Streamer, TcpServer, Transport, UdpStreamTransport,
        WriterTransport,
    },
    tests::{assert_valid_sentence, init_logger, reference_conditions},
};

fn fast_config() -> Config {
    Config::default()
        .with_tick_period(Duration::from_millis(20))
        .with_sentence_delay(Duration::ZERO)
}

fn coordinator(cfg: &Config) -> Coordinator {
    // sinks tick on the system clock
    let emulator = Emulator::new(cfg.clone(), reference_conditions()).unwrap();
    Coordinator::new(emulator)
}

/// [Transport] failing after a number of sentences
struct FlakyTransport {
    remaining: usize,
    sent: Arc<Mutex<Vec<String>>>,
}

impl Transport for FlakyTransport {
    fn send(&mut self, sentence: &str) -> std::io::Result<()> {
        if self.remaining == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "broken pipe",
            ));
        }
        self.remaining -= 1;
        self.sent.lock().unwrap().push(sentence.to_string());
        Ok(())
    }
}

#[test]
fn writer_sink() {
    init_logger();
    let cfg = fast_config();
    let coordinator = coordinator(&cfg);

    let handle = coordinator.register("serial").unwrap();
    let mut streamer = Streamer::new(handle, WriterTransport::new(Vec::<u8>::new()), &cfg);

    streamer.cycle().unwrap();
    streamer.cycle().unwrap();

    let bytes = streamer.into_transport().into_inner();
    let text = String::from_utf8(bytes).unwrap();

    let lines = text.split_inclusive("\r\n").collect::<Vec<_>>();
    assert_eq!(lines.len(), 2 * 11);

    for line in lines {
        assert_valid_sentence(line);
    }

    // streamer dropped: sink deregistered
    assert!(coordinator.active_sinks().unwrap().is_empty());
}

#[test]
fn broken_transport_ends_sink_only() {
    init_logger();
    let cfg = fast_config();
    let coordinator = coordinator(&cfg);

    let sent = Arc::new(Mutex::new(Vec::new()));
    let flaky = FlakyTransport {
        remaining: 15,
        sent: Arc::clone(&sent),
    };

    let healthy = coordinator.register("healthy").unwrap();
    let handle = coordinator.register("flaky").unwrap();

    let streamer = Streamer::new(handle, flaky, &cfg);
    match streamer.run() {
        Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
        other => panic!("unexpected result: {:?}", other),
    }

    assert_eq!(sent.lock().unwrap().len(), 15);

    // other sink and shared state are unaffected
    assert_eq!(coordinator.active_sinks().unwrap(), vec![healthy.id().clone()]);
    assert!(healthy.next_tick().is_ok());
}

#[test]
fn tcp_server() {
    init_logger();
    let cfg = fast_config().with_max_tcp_connections(2);
    let coordinator = coordinator(&cfg);

    let server = TcpServer::bind("127.0.0.1:0", coordinator.clone(), cfg).unwrap();
    let addr = server.local_addr().unwrap();

    thread::spawn(move || server.serve());

    let clients = (0..2)
        .map(|_| TcpStream::connect(addr).unwrap())
        .collect::<Vec<_>>();

    for client in clients.iter() {
        client
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();

        let mut reader = BufReader::new(client.try_clone().unwrap());
        for _ in 0..22 {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            assert_valid_sentence(&line);
        }
    }

    assert_eq!(coordinator.active_sinks().unwrap().len(), 2);

    // third client is refused: server closes the connection
    let refused = TcpStream::connect(addr).unwrap();
    refused
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let mut line = String::new();
    let size = BufReader::new(refused).read_line(&mut line).unwrap_or(0);
    assert_eq!(size, 0);

    // disconnections deregister sinks
    drop(clients);
    for _ in 0..100 {
        if coordinator.active_sinks().unwrap().is_empty() {
            break;
        }
        thread::sleep(Duration::from_millis(50));
    }
    assert!(coordinator.active_sinks().unwrap().is_empty());
}

#[test]
fn tcp_server_survives_accept_errors() {
    init_logger();
    let cfg = fast_config();
    let coordinator = coordinator(&cfg);

    let server = TcpServer::bind("127.0.0.1:0", coordinator.clone(), cfg).unwrap();
    let addr = server.local_addr().unwrap();

    let failures = [
        std::io::Error::new(std::io::ErrorKind::ConnectionAborted, "aborted"),
        std::io::Error::from_raw_os_error(24), // EMFILE
    ];

    for failure in failures {
        assert!(server.handle_incoming(Err(failure)).is_ok());
    }

    assert_eq!(server.num_clients(), 0);
    thread::spawn(move || server.serve());

    let client = TcpStream::connect(addr).unwrap();
    client
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();

    let mut line = String::new();
    BufReader::new(client).read_line(&mut line).unwrap();
    assert_valid_sentence(&line);
}

#[test]
fn udp_stream() {
    init_logger();
    let cfg = fast_config();
    let coordinator = coordinator(&cfg);

    let listener = UdpSocket::bind("127.0.0.1:0").unwrap();
    listener
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();

    let transport = UdpStreamTransport::connect(listener.local_addr().unwrap()).unwrap();
    let handle = coordinator.register("udp").unwrap();
    let mut streamer = Streamer::new(handle, transport, &cfg);

    streamer.cycle().unwrap();

    let mut buf = [0u8; 256];
    for _ in 0..11 {
        let (size, _) = listener.recv_from(&mut buf).unwrap();
        let datagram = std::str::from_utf8(&buf[..size]).unwrap();
        assert_valid_sentence(datagram);
    }
}
