use std::{
    io,
    net::{TcpListener, TcpStream},
    thread,
};

/// Forwards the first connection made to [Self::source_port] on to the first
/// connection made to [Self::preview_port], in the same way gst-switch-srv
/// passes a source through to a preview port
#[derive(Debug)]
pub struct Relay {
    source_port: u16,
    preview_port: u16,
}

impl Relay {
    pub fn bind() -> anyhow::Result<Self> {
        let source = TcpListener::bind("127.0.0.1:0")?;
        let preview = TcpListener::bind("127.0.0.1:0")?;

        let source_port = source.local_addr()?.port();
        let preview_port = preview.local_addr()?.port();

        thread::spawn(move || {
            if let Err(e) = forward(&source, &preview) {
                eprintln!("Relay stopped: {e}");
            }
        });

        Ok(Self {
            source_port,
            preview_port,
        })
    }

    pub fn source_port(&self) -> u16 {
        self.source_port
    }

    pub fn preview_port(&self) -> u16 {
        self.preview_port
    }
}

fn forward(source: &TcpListener, preview: &TcpListener) -> io::Result<u64> {
    let (mut from, _) = source.accept()?;
    let (mut to, _): (TcpStream, _) = preview.accept()?;
    io::copy(&mut from, &mut to)
}
