// Board configuration. The values are fixed at build time; there is no
// runtime configuration source.

pub const BAUD_RATE: u32 = 115_200;

/// Time between heartbeat lines, in milliseconds.
pub const HEARTBEAT_PERIOD_MS: u32 = 2_000;

pub const STARTUP_MESSAGE: &str = "Starting";
pub const HEARTBEAT_MESSAGE: &str = "Loop";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Settings {
    pub baud_rate: u32,
    pub heartbeat_period_ms: u32,
    pub startup_message: &'static str,
    pub heartbeat_message: &'static str,
}

impl Settings {
    pub const DEFAULT: Settings = Settings {
        baud_rate: BAUD_RATE,
        heartbeat_period_ms: HEARTBEAT_PERIOD_MS,
        startup_message: STARTUP_MESSAGE,
        heartbeat_message: HEARTBEAT_MESSAGE,
    };
}

impl Default for Settings {
    fn default() -> Self {
        Self::DEFAULT
    }
}
