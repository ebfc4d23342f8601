//! # KeyMaster POS Entry Point
//!
//! Thin binary wrapper; the actual setup lives in the library crate for
//! testability.

fn main() {
    if let Err(e) = keymaster_pos_lib::run() {
        eprintln!("fatal: {}", e);
        std::process::exit(1);
    }
}
