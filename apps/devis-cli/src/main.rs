//! # devis
//!
//! Entry point. Everything happens in [`devis_cli::run`]; failures are
//! printed as JSON on stderr with exit status 1.

fn main() {
    if let Err(err) = devis_cli::run() {
        eprintln!("{}", err.to_json());
        std::process::exit(1);
    }
}
