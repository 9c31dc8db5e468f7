//! Receipt Points Server
//!
//! HTTP service that scores purchase receipts and serves the points back by id.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --bind 127.0.0.1:3000 --store locked
//! cargo run -- --workers 4 --log-format json --verbose
//! ```
//!
//! # Exit Codes
//!
//! - 0: Clean shutdown after Ctrl-C or SIGTERM
//! - 1: Startup or serving error (address in use, runtime failure, etc.)

use receipt_points::{cli, http, logging};
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    logging::init_logger(args.verbose, args.log_format);

    if let Err(e) = http::run(args.to_server_config()) {
        tracing::error!("Error: {}", e);
        process::exit(1);
    }
}
