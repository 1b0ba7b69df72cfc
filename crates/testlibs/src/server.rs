use std::{
    io::Read,
    net::{TcpListener, TcpStream},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::{Duration, Instant},
};

/// Stands in for the input side of gst-switch-srv, accepting any number of
/// connections on loopback and counting the bytes received
#[derive(Debug)]
pub struct StubServer {
    port: u16,
    connections: Arc<AtomicUsize>,
    received: Arc<AtomicUsize>,
}

impl StubServer {
    /// Binds to a free port chosen by the OS
    pub fn bind() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();

        let connections = Arc::new(AtomicUsize::new(0));
        let received = Arc::new(AtomicUsize::new(0));

        let conns = connections.clone();
        let recv = received.clone();
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                conns.fetch_add(1, Ordering::SeqCst);
                let recv = recv.clone();
                thread::spawn(move || drain(stream, &recv));
            }
        });

        Ok(Self {
            port,
            connections,
            received,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }

    /// Waits until at least `bytes` have arrived, returning whether they did
    /// within the timeout
    pub fn wait_for_bytes(&self, bytes: usize, timeout: Duration) -> bool {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if self.received() >= bytes {
                return true;
            }
            thread::sleep(Duration::from_millis(10));
        }
        self.received() >= bytes
    }
}

fn drain(mut stream: TcpStream, received: &AtomicUsize) {
    let mut buf = [0; 4096];
    while let Ok(n) = stream.read(&mut buf) {
        if n == 0 {
            break;
        }
        received.fetch_add(n, Ordering::SeqCst);
    }
}

/// A port which nothing is listening on, at least at the time of return
pub fn closed_port() -> anyhow::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}
