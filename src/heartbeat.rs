use super::{
    console::{Console, SerialPort},
    settings::Settings,
};
use embedded_hal_async::delay::DelayNs;

// One heartbeat cycle: a single heartbeat line on the console. Nothing here
// touches the hold pin; it stays low because nothing else writes to it.

pub async fn beat<S: SerialPort>(
    console: &mut Console<S>,
    settings: &Settings,
) -> Result<(), S::Error> {
    console.heartbeat(settings).await
}

// The polling loop. Writes a heartbeat, then pauses for
// `heartbeat_period_ms`, forever. A failed write is handed to `on_error`
// along with the number of lines written so far, and the loop carries on
// with the next pause and beat.

pub async fn run<S, D, F>(
    console: &mut Console<S>,
    settings: &Settings,
    delay: &mut D,
    mut on_error: F,
) -> !
where
    S: SerialPort,
    D: DelayNs,
    F: FnMut(S::Error, u32),
{
    loop {
        if let Err(e) = beat(console, settings).await {
            on_error(e, console.lines_written());
        }

        delay.delay_ms(settings.heartbeat_period_ms).await;
    }
}

#[cfg(target_os = "none")]
#[embassy_executor::task]
pub async fn task(mut console: Console<super::serial::Uart0>, settings: Settings) -> ! {
    let mut delay = embassy_time::Delay;

    run(&mut console, &settings, &mut delay, |e, lines| {
        defmt::warn!("heartbeat write failed ({} lines sent): {}", lines, e);
    })
    .await
}
