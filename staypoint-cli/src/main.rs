//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = staypoint_cli::run() {
        eprintln!("staypoint: {err}");
        std::process::exit(1);
    }
}
