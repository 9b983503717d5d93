//! Scripted wayfinding session
//!
//! Drives the engine through a short walk: select the cafeteria, let drift
//! run for a few seconds, then scan to relocate. Prints the status-bar view
//! after each clock step.

use wayfinder::{DestinationCatalog, Mode, NavigationEngine};

fn print_status(engine: &NavigationEngine, clock_ms: u64) {
    let snap = engine.snapshot();
    let destination = snap
        .destination
        .as_ref()
        .map(|d| d.name.as_str())
        .unwrap_or("none");
    println!(
        "[{:>6} ms] pos ({:+.2}, {:+.2}, {:+.2})  dest {:<13} {:>6}  waypoints {}",
        clock_ms,
        snap.user_position.x,
        snap.user_position.y,
        snap.user_position.z,
        destination,
        engine.distance_display(),
        snap.path.len(),
    );
}

fn main() {
    let catalog = DestinationCatalog::builtin();
    println!("destinations:");
    for d in catalog.destinations() {
        println!(
            "  {:<12} {:<14} ({:+.1}, {:+.1}, {:+.1})  {}",
            d.id, d.name, d.position.x, d.position.y, d.position.z, d.floor
        );
    }

    let mut engine = NavigationEngine::with_seed(catalog, 2024);
    print_status(&engine, 0);

    engine.select_destination("cafeteria");
    println!("-- selected cafeteria --");
    print_status(&engine, 0);

    for clock in [1000u64, 2000, 3000, 4000] {
        engine.advance(clock);
        print_status(&engine, clock);
    }

    println!("-- scanning --");
    engine.set_mode(Mode::Qr);
    engine.advance(4000 + 1500);
    print_status(&engine, 5500);

    let anchor = engine.user_anchor();
    println!(
        "user marker at screen ({:.0}, {:.0}), depth {:+.0}",
        anchor.left, anchor.top, anchor.depth_offset
    );

    engine.shutdown();
}
