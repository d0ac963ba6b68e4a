use crossbeam_channel::Sender;
use tracing::Level;
use tracing_subscriber::prelude::*;

// A writer that sends log lines to the form via a crossbeam channel
pub struct ChannelWriter {
    sender: Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).trim_end().to_string();
        if !msg.is_empty() {
            let _ = self.sender.try_send(msg);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
pub struct ChannelWriterFactory {
    sender: Sender<String>,
}

impl ChannelWriterFactory {
    pub fn new(sender: Sender<String>) -> Self {
        Self { sender }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

/// Installs the global subscriber: stderr always, plus the form's log strip when a sender is given.
pub fn init_logging(ui_sender: Option<Sender<String>>) {
    // stdout carries prediction output
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let ui_layer = ui_sender.map(|sender| {
        tracing_subscriber::fmt::layer()
            .with_writer(ChannelWriterFactory::new(sender))
            .with_ansi(false) // No color codes for UI text
            .with_target(false)
            .without_time()
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .with(ui_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_channel_writer_forwards_lines() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let factory = ChannelWriterFactory::new(tx);

        let mut writer = factory.make_writer();
        writer.write_all(b" INFO Loaded standard_scaler\n").unwrap();
        writer.write_all(b"\n").unwrap();

        assert_eq!(rx.try_recv().unwrap(), " INFO Loaded standard_scaler");
        assert!(rx.try_recv().is_err());
    }
}
