use embedded_thermopoll::{Publish, Reading, write_payload};
use std::{
    fmt,
    io::{self, Write},
};

/// Writes every reading of a tick to the diagnostic log.
pub struct LogSink;

impl Publish for LogSink {
    type Error = fmt::Error;

    fn publish(&mut self, readings: &[Reading]) -> Result<(), Self::Error> {
        for reading in readings {
            log::info!("{reading}");
        }
        Ok(())
    }
}

/// Writes the notification payload of a tick as one line.
pub struct NotifySink<W> {
    out: W,
}

impl<W: Write> NotifySink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Publish for NotifySink<W> {
    type Error = io::Error;

    fn publish(&mut self, readings: &[Reading]) -> Result<(), Self::Error> {
        let mut payload = String::new();
        write_payload(&mut payload, readings).map_err(io::Error::other)?;
        writeln!(self.out, "{payload}")?;
        self.out.flush()
    }
}

/// The publication targets selected on the command line.
pub struct Sinks<W> {
    log: LogSink,
    notify: Option<NotifySink<W>>,
}

impl<W: Write> Sinks<W> {
    pub fn new(notify: Option<W>) -> Self {
        Self {
            log: LogSink,
            notify: notify.map(NotifySink::new),
        }
    }
}

impl<W: Write> Publish for Sinks<W> {
    type Error = io::Error;

    fn publish(&mut self, readings: &[Reading]) -> Result<(), Self::Error> {
        self.log.publish(readings).map_err(io::Error::other)?;
        if let Some(notify) = self.notify.as_mut() {
            notify.publish(readings)?;
        }
        Ok(())
    }
}
