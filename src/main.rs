use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roomly::config::ApiConfig;
use roomly::models::{BookingRequest, DateRange};
use roomly::services::bookings::BookingService;
use roomly::services::rooms::RoomService;
use roomly::transport::http::HttpTransport;

#[derive(Parser)]
#[command(
    name = "roomly",
    version = env!("CARGO_PKG_VERSION"),
    about = "Client for the rental-listing backend: availability checks, bookings, listings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all room listings
    Rooms,

    /// List the amenity catalog
    Amenities,

    /// List the category catalog
    Categories,

    /// Check whether a room is bookable for a date range
    Check {
        room_id: String,

        /// Check-in date (YYYY-MM-DD)
        check_in: String,

        /// Check-out date (YYYY-MM-DD)
        check_out: String,
    },

    /// Book a room for a date range
    Book {
        room_id: String,

        /// Check-in date (YYYY-MM-DD)
        check_in: String,

        /// Check-out date (YYYY-MM-DD)
        check_out: String,

        /// Number of guests
        #[arg(default_value_t = 1)]
        guests: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let config = ApiConfig::from_env();
    let transport = Arc::new(HttpTransport::new(&config)?);

    match cli.command {
        Commands::Rooms => {
            let rooms = RoomService::new(transport).list().await?;
            for room in rooms {
                println!(
                    "#{} {} — {}, {} ({}/night)",
                    room.pk, room.name, room.city, room.country, room.price
                );
            }
        }
        Commands::Amenities => {
            for amenity in RoomService::new(transport).amenities().await? {
                println!("#{} {}", amenity.pk, amenity.name);
            }
        }
        Commands::Categories => {
            for category in RoomService::new(transport).categories().await? {
                println!("#{} {} ({})", category.pk, category.name, category.kind);
            }
        }
        Commands::Check {
            room_id,
            check_in,
            check_out,
        } => {
            let range = parse_range(&check_in, &check_out)?;
            let status = BookingService::new(transport)
                .check_availability(&room_id, range)
                .await;
            println!("room {room_id}: {status:?}");
        }
        Commands::Book {
            room_id,
            check_in,
            check_out,
            guests,
        } => {
            let range = parse_range(&check_in, &check_out)?;
            let request = BookingRequest::new(room_id, range, guests);
            let booking = BookingService::new(transport).submit(&request).await?;
            println!(
                "booked #{}: {} to {}, {} guest(s)",
                booking.pk, booking.check_in, booking.check_out, booking.guests
            );
        }
    }

    Ok(())
}

fn parse_range(check_in: &str, check_out: &str) -> anyhow::Result<DateRange> {
    let check_in = NaiveDate::parse_from_str(check_in, "%Y-%m-%d")
        .with_context(|| format!("invalid check-in date: {check_in}"))?;
    let check_out = NaiveDate::parse_from_str(check_out, "%Y-%m-%d")
        .with_context(|| format!("invalid check-out date: {check_out}"))?;
    Ok(DateRange::new(check_in, check_out)?)
}
