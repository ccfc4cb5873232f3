//! Basic usage example for the tracker API

use tailmatch_api::{contains, scan, Config, Tracker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with convenience functions
    println!("=== Method 1: Convenience Functions ===");
    let stream = b"log line\x1b[31mred text\x1b[0m done".to_vec();
    let report = scan(b"\x1b[", stream.iter().copied());

    println!("Found {} escape introducers:", report.detections.len());
    for (i, detection) in report.detections.iter().enumerate() {
        println!("  Occurrence {}: ends at offset {}", i + 1, detection.offset);
    }
    println!(
        "Consumed {} bytes, contains CSI: {}\n",
        report.items_processed,
        contains(b"\x1b[", stream.iter().copied())
    );

    // Method 2: Edge-triggered detection with a listener
    println!("=== Method 2: Edge-Triggered Listener ===");
    let quit_word = [b'q', b'u', b'i', b't'];
    let mut tracker = Tracker::incremental();
    tracker.configure(&quit_word);
    tracker.observe(|transition| {
        if transition.is_matched() {
            println!("  quit command detected");
        }
    });

    for byte in b"say quit to exit".iter().copied() {
        tracker.process(byte);
    }

    // Method 3: Windowed strategy for self-overlapping targets
    println!("\n=== Method 3: Windowed Strategy ===");
    let knock = [1, 1, 2];
    let mut tracker = Tracker::windowed(8)?;
    tracker.configure(&knock);
    tracker.extend([1, 1, 1, 2]);

    // The incremental cursor would miss this occurrence; the ring does not.
    println!("  knock pattern matched: {}", tracker.is_matched());

    // Method 4: Custom configuration via the builder
    println!("\n=== Method 4: Custom Configuration ===");
    let config = Config::builder().windowed(16).build()?;
    let marker = [0xde, 0xad, 0xbe, 0xef];
    let mut tracker = Tracker::with_config(config)?;
    tracker.configure(&marker);
    tracker.extend([0x00, 0xde, 0xad, 0xbe, 0xef]);

    println!(
        "  {} strategy matched: {}",
        tracker.strategy_name(),
        tracker.is_matched()
    );

    Ok(())
}
