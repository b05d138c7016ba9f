//! latchd - analog-watchdog latch monitor daemon
//!
//! Arms a hardware latch, watches for the analog watchdog to trip it, and
//! re-arms on operator confirmation, all while keeping the streaming ADC
//! drained so DMA/IRQ activity never stalls.

#![deny(clippy::unwrap_used)]

mod config;

use std::process;

use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("latchd=debug,info")
        .init();

    info!("Starting latchd v{}", env!("CARGO_PKG_VERSION"));

    // Run inside a function so every handle drops before the exit call.
    let code = run();
    process::exit(code);
}

#[cfg(target_os = "linux")]
fn run() -> i32 {
    use std::os::unix::io::AsRawFd;

    use openlatch_latch::prelude::*;
    use openlatch_monitor::prelude::*;
    use openlatch_stream::prelude::*;
    use tracing::{error, warn};

    let source = match AdcStream::open(config::ADC_DEVICE_PATH) {
        Ok(stream) => {
            if let Err(err) = stream.start_acquisition() {
                // The hardware may already be streaming from board bring-up.
                warn!(%err, "acquisition trigger failed; keeping the handle open");
            }
            Some(stream)
        }
        Err(err) => {
            warn!(%err, "proceeding without sample draining");
            None
        }
    };

    let wait = PollWaitPoint::from_stdin(source.as_ref().map(AsRawFd::as_raw_fd));

    // The board glue supplies the real controller on target hardware; the
    // software latch stands in behind the same trait everywhere else.
    let mut driver = LifecycleDriver::new(
        SoftwareLatch::new(),
        source,
        wait,
        config::latch_config(),
        MonitorConfig::default(),
    );

    match driver.run() {
        Ok(()) => 0,
        Err(err) => {
            error!(%err, "monitor failed");
            eprintln!("latchd: {err}");
            1
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn run() -> i32 {
    tracing::error!("latchd requires a Linux poll(2)-capable target");
    1
}
