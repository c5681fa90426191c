//! Ticket Engine CLI
//!
//! Validates and prices a batch of ticket purchases read from CSV and
//! outputs the per-purchase outcomes.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- purchases.csv > outcomes.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use ticket_engine::{
    BatchEngine, LoggingPaymentGateway, LoggingSeatReservation, Result, TicketConfig,
    TicketError, TicketService,
};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(TicketError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let service = TicketService::new(
        TicketConfig::default(),
        Box::new(LoggingPaymentGateway),
        Box::new(LoggingSeatReservation),
    );
    let mut engine = BatchEngine::new(service);
    engine.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    engine.write_output(handle)?;

    Ok(())
}
