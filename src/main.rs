//! # Safe Location Scenario Runner
//!
//! Loads a scenario file, runs the safe location search on it and prints the result.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --release -- scenarios/flat_floor.json
//! ```

fn main() {
    if let Err(error) = voxel_safe_location::run() {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}
