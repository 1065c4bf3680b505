use super::settings::Settings;

const LINE_END: &[u8] = b"\r\n";

/// Byte sink for the text console. The firmware implements this for the
/// RP2040's UART transmitter; tests use an in-memory buffer.
#[allow(async_fn_in_trait)]
pub trait SerialPort {
    type Error;

    async fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

// Line-oriented output on top of a `SerialPort`. Every line is terminated
// with CR-LF so it renders correctly in a plain serial monitor.

pub struct Console<S> {
    port: S,
    lines: u32,
}

impl<S: SerialPort> Console<S> {
    pub fn new(port: S) -> Self {
        Console { port, lines: 0 }
    }

    pub async fn line(&mut self, text: &str) -> Result<(), S::Error> {
        self.port.write(text.as_bytes()).await?;
        self.port.write(LINE_END).await?;
        self.lines = self.lines.wrapping_add(1);
        Ok(())
    }

    /// Written once, right after the hold pin is engaged.
    pub async fn announce_start(&mut self, settings: &Settings) -> Result<(), S::Error> {
        self.line(settings.startup_message).await
    }

    pub async fn heartbeat(&mut self, settings: &Settings) -> Result<(), S::Error> {
        self.line(settings.heartbeat_message).await
    }

    /// Number of complete lines written so far (wraps).
    pub fn lines_written(&self) -> u32 {
        self.lines
    }

    #[cfg(test)]
    pub(crate) fn port(&self) -> &S {
        &self.port
    }
}
