use super::console::SerialPort;
use embassy_rp::{
    peripherals::UART0,
    uart::{Async, Config, Error, UartTx},
};

// TX-only UART0 with DMA. Nothing is ever read from the serial line, so the
// RX half is never created.

pub struct Uart0(UartTx<'static, UART0, Async>);

impl Uart0 {
    pub fn new(tx: UartTx<'static, UART0, Async>) -> Self {
        Uart0(tx)
    }
}

pub fn config(baud_rate: u32) -> Config {
    let mut config = Config::default();

    config.baudrate = baud_rate;
    config
}

impl SerialPort for Uart0 {
    type Error = Error;

    async fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.0.write(bytes).await
    }
}
