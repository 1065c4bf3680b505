#![cfg_attr(not(test), no_std)]

// Board-independent pieces of the firmware. Everything in here is generic
// over the `embedded-hal` traits (or the local `SerialPort` seam) so it can
// be exercised on the host; `main.rs` binds it to the RP2040. The UART
// binding and the heartbeat task only build for the bare-metal target.

pub mod console;
pub mod heartbeat;
pub mod hold;
#[cfg(target_os = "none")]
pub mod serial;
pub mod settings;

pub use console::{Console, SerialPort};
pub use hold::BootloaderHold;
pub use settings::Settings;
