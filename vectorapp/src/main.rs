//! Demo application for the vectormath workspace
//!
//! Installs the logging sink, invokes each library once, and prints the
//! formatted results. The libraries only talk to the `log` facade; sink
//! choice and filtering live here, at the process boundary.

use env_logger::Env;
use vectormath2d::dot2d;
use vectormath3d::dot3d;

fn main() {
    // Show info-level records unless RUST_LOG says otherwise.
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("{}", dot2d(1, 2, 3, 4));
    println!("{}", dot3d(1, 2, 3, 4, 5, 6));
}
