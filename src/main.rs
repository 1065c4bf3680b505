#![no_std]
#![no_main]

use bootloader_hold::{heartbeat, serial, BootloaderHold, Console, Settings};
use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_rp::{
    gpio::{Level, Output},
    uart::UartTx,
};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let settings = Settings::DEFAULT;

    info!("settings: {}", settings);

    // Take the FPGA's select line (GPIO10) first. The pin comes up already
    // low, so the FPGA never sees it high. It lives in a static because
    // dropping an `Output` would hand the pad back to its reset function.

    let hold = {
        static HOLD: StaticCell<BootloaderHold<Output<'static>>> = StaticCell::new();

        let pin = Output::new(p.PIN_10, Level::Low);

        HOLD.init(unwrap!(BootloaderHold::engage(pin)))
    };

    info!("GPIO10 held low: {}", unwrap!(hold.is_engaged()));

    let mut console = {
        let tx = UartTx::new(
            p.UART0,
            p.PIN_0,
            p.DMA_CH0,
            serial::config(settings.baud_rate),
        );

        Console::new(serial::Uart0::new(tx))
    };

    if let Err(e) = console.announce_start(&settings).await {
        warn!("startup message failed: {}", e);
    }

    unwrap!(spawner.spawn(heartbeat::task(console, settings)));
}
