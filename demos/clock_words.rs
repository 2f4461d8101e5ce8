//! Clock Words - print the shift-register words for one time
//!
//! Prints one line of 16 binary digits per LED row, top row first. With no arguments it
//! shows the build-time default (12:34 unless `DEMO_HOURS`/`DEMO_MINUTES` say otherwise).
//!
//! Run with: `cargo run --example clock_words --features host -- --hours 7 --minutes 5`

use std::process::ExitCode;

use clap::Parser;
use shift_clock::bit_inspector::inspect_word;
use shift_clock::{ClockTime, Frame, Result};

#[derive(Parser)]
#[command(name = "clock_words")]
#[command(about = "Print the shift-register words for a clock time", long_about = None)]
struct Cli {
    /// Hours to show (0-99)
    #[arg(long, default_value = env!("DEMO_HOURS"))]
    hours: u8,
    /// Minutes to show (0-99)
    #[arg(long, default_value = env!("DEMO_MINUTES"))]
    minutes: u8,
    /// Also draw the lit LEDs
    #[arg(long)]
    preview: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match inner_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("clock_words: {err}");
            ExitCode::FAILURE
        }
    }
}

fn inner_main(cli: &Cli) -> Result<()> {
    let clock_time = ClockTime::new(cli.hours, cli.minutes)?;
    let frame = Frame::from_clock_time(clock_time)?;

    for word in frame {
        println!("{}", inspect_word(word));
    }

    if cli.preview {
        let mut preview = String::new();
        frame.write_preview(&mut preview)?;
        println!("\n{clock_time}\n{preview}");
    }
    Ok(())
}
