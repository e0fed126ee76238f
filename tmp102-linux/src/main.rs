mod sinks;

use clap::Parser;
use embedded_hal::delay::DelayNs;
use embedded_thermopoll::{Acquisition, TICK_PERIOD_MS};
use sinks::Sinks;
use std::time::Instant;

/// Largest number of sensors polled at once.
const MAX_SENSORS: usize = 16;

/// Poll TMP102 temperature sensors on a Linux I2C bus
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to I2C bus (e.g., /dev/i2c-1)
    #[arg(short, long)]
    path: String,
    /// Sensor addresses, in polling order (e.g., 0x48,0x49)
    #[arg(
        short,
        long = "address",
        value_parser = parse_address,
        value_delimiter = ',',
        default_values = ["0x4d", "0x48", "0x4f"]
    )]
    addresses: Vec<u8>,
    /// Time between two polls, in milliseconds
    #[arg(short, long, default_value_t = TICK_PERIOD_MS)]
    interval_ms: u32,
    /// Stop after this many polls
    #[arg(short, long)]
    ticks: Option<u32>,
    /// Print the notification payload of every poll on stdout
    #[arg(short, long)]
    notify: bool,
}

/// Parse a 7-bit I2C address written in hexadecimal, with or without `0x`.
fn parse_address(s: &str) -> Result<u8, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    match u8::from_str_radix(digits, 16) {
        Ok(addr) if addr <= 0x7f => Ok(addr),
        Ok(addr) => Err(format!("0x{addr:02x} is not a 7-bit address")),
        Err(e) => Err(format!("invalid address '{s}': {e}")),
    }
}

fn main() {
    // Initialize the logger
    env_logger::init();
    // Parse command line arguments
    let args = Args::parse();
    // Open the I2C bus
    let i2c = linux_embedded_hal::I2cdev::new(&args.path).expect("Failed to open I2C device");
    let mut sensors = tmp102::Tmp102Bus::new(i2c, linux_embedded_hal::Delay);
    let acquisition = Acquisition::<MAX_SENSORS>::new(&args.addresses)
        .expect("Too many sensor addresses");
    // Configure the sensors that are present now
    let report = acquisition.startup(&mut sensors);
    log::info!(
        "Configured {} of {} sensors",
        report.verified(),
        args.addresses.len()
    );
    let mut sinks = Sinks::new(args.notify.then(std::io::stdout));
    let mut delay = linux_embedded_hal::Delay;
    let mut polls = 0;
    loop {
        let start = Instant::now();
        if let Err(e) = acquisition.poll(&mut sensors, &mut sinks) {
            log::warn!("Failed to publish readings: {e}");
        }
        polls += 1;
        if args.ticks.is_some_and(|n| polls >= n) {
            break;
        }
        let elapsed = start.elapsed().as_millis().min(u32::MAX as u128) as u32;
        delay.delay_ms(args.interval_ms.saturating_sub(elapsed));
    }
}
