//! # Seed Data Generator
//!
//! Populates a data directory with sample bookings for development.
//!
//! ## Usage
//! ```bash
//! # Generate 25 bookings (default)
//! cargo run -p lodge-store --bin seed
//!
//! # Generate custom amount
//! cargo run -p lodge-store --bin seed -- --count 100
//!
//! # Specify data directory
//! cargo run -p lodge-store --bin seed -- --data ./data
//! ```
//!
//! ## Generated Bookings
//! Deterministic sample data spread across room types and stay lengths,
//! with a share of bookings walked through the lifecycle so every status
//! shows up in the guest list:
//! - Most stay Confirmed
//! - Some checked in, some checked in and out
//! - Some cancelled

use std::env;

use lodge_core::{BookingDraft, BookingStatus, RoomType};
use lodge_store::{BookingStore, LoadOutcome, StoreConfig};

/// Guest names for sample bookings
const GUESTS: &[&str] = &[
    "Jane Doe",
    "John Roe",
    "Asha Patel",
    "Liu Wei",
    "Maria Garcia",
    "Tom Baker",
    "Fatima Khan",
    "Peter Novak",
    "Grace Chen",
    "Sam Okafor",
    "Elena Petrova",
    "Ravi Kumar",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 25;
    let mut data_dir = String::from("./lodge_dev_data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(25);
                    i += 1;
                }
            }
            "--data" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Lodge Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of bookings to generate (default: 25)");
                println!("  -d, --data <PATH>  Data directory (default: ./lodge_dev_data)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Lodge Seed Data Generator");
    println!("============================");
    println!("Data dir: {}", data_dir);
    println!("Bookings: {}", count);
    println!();

    let store = BookingStore::open(StoreConfig::new(&data_dir)).await;

    if let LoadOutcome::Recovered { reason } = store.load_outcome() {
        println!("⚠ Existing slot was unreadable: {}", reason);
        println!("  Starting from an empty store.");
    }

    // Check existing bookings
    let existing = store.len().await;
    if existing > 0 {
        println!("⚠ Store already has {} bookings", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the data directory to regenerate.");
        return Ok(());
    }

    println!("Generating bookings...");

    let mut generated = 0;
    let start = std::time::Instant::now();

    for seed in 0..count {
        let draft = generate_draft(seed);

        let booking = match store.create(draft).await {
            Ok(booking) => booking,
            Err(e) => {
                eprintln!("Failed to create booking {}: {}", seed, e);
                continue;
            }
        };

        // Walk a share of bookings through the lifecycle so every
        // status appears in listings
        match seed % 5 {
            1 => {
                store
                    .transition(&booking.id, BookingStatus::CheckedIn)
                    .await?;
            }
            2 => {
                store
                    .transition(&booking.id, BookingStatus::CheckedIn)
                    .await?;
                store
                    .transition(&booking.id, BookingStatus::CheckedOut)
                    .await?;
            }
            3 => {
                store
                    .transition(&booking.id, BookingStatus::Cancelled)
                    .await?;
            }
            _ => {}
        }

        generated += 1;

        if generated % 10 == 0 {
            println!("  Generated {} bookings...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} bookings in {:?}", generated, elapsed);

    // Quick sanity lookups
    let confirmed = store
        .list(&lodge_store::BookingFilter::any().with_status(BookingStatus::Confirmed))
        .await;
    let cancelled = store
        .list(&lodge_store::BookingFilter::any().with_status(BookingStatus::Cancelled))
        .await;
    println!("  Confirmed: {}", confirmed.len());
    println!("  Cancelled: {}", cancelled.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single booking draft with deterministic sample data.
fn generate_draft(seed: usize) -> BookingDraft {
    let guest = GUESTS[seed % GUESTS.len()];
    let room_type = RoomType::all()[seed % 4];

    // Stays start through the summer season, 1 to 5 nights
    let start_day = 1 + (seed * 3) % 85;
    let nights = 1 + seed % 5;
    let check_in = summer_date(start_day);
    let check_out = summer_date(start_day + nights);

    let email_user = guest.to_lowercase().replace(' ', ".");

    BookingDraft {
        guest_name: guest.to_string(),
        room_type: room_type.as_str().to_string(),
        check_in_date: check_in,
        check_out_date: check_out,
        contact_number: format!("98765{:05}", seed % 100_000),
        email: format!("{}{}@example.com", email_user, seed),
        id_proof: (seed % 3 == 0).then(|| format!("ID-{:04}", seed)),
    }
}

/// Maps a day offset onto June-August 2025 in form date format.
fn summer_date(day_offset: usize) -> String {
    let (month, day) = match day_offset {
        1..=30 => (6, day_offset),
        31..=61 => (7, day_offset - 30),
        _ => (8, day_offset - 61),
    };
    format!("2025-{:02}-{:02}", month, day)
}
