//! Console walk-through of the restaurant client
//!
//! Lists restaurants, optionally filtered and sorted, then shows the details
//! of one restaurant. With booking values it also submits a booking.
//!
//! Run: cargo run --example browse -- [filter] [sort] [restaurant-id]
//!      BOOK="name,email,phone,YYYY-MM-DD,HH:MM,guests" cargo run --example browse -- "" name-asc 1

use table_client::{App, BookingField, ClientConfig, ListOutcome, SortKey, SubmitOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "table_client=info".into()),
        )
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, "Using restaurant API");
    let api = config.build_http_client()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut app = App::new();

    app.list.set_filter(args.first().cloned().unwrap_or_default());
    if let Some(sort) = args.get(1) {
        app.list.set_sort(sort.parse::<SortKey>()?);
    }

    app.refresh(&api).await;
    match app.list.outcome() {
        ListOutcome::Loading => println!("Loading..."),
        ListOutcome::Error(message) => println!("{message}"),
        ListOutcome::NoResults => println!("There are not results. Try to reset the filters"),
        ListOutcome::Restaurants(rows) => {
            println!("Restaurants ({})", app.list.sort().label());
            for r in rows {
                println!("  [{}] {} - {} (Rating: {})", r.id, r.name, r.short_description, r.rating);
            }
        }
    }

    let Some(id) = args.get(2) else {
        return Ok(());
    };
    app.select(id.parse()?);
    app.refresh(&api).await;

    if let Some(error) = app.details.error() {
        println!("{error}");
    } else if let Some(details) = app.details.details() {
        println!("Restaurant Details");
        println!("  Address: {}", details.address);
        println!("  Review Score: {}", details.review_score);
        println!("  Contact: {}", details.contact_email);
        println!(
            "  Hours: weekdays {}, weekends {}",
            details.opening_hours.weekday, details.opening_hours.weekend
        );
    }

    let Ok(values) = std::env::var("BOOK") else {
        return Ok(());
    };
    for (field, value) in BookingField::ALL.into_iter().zip(values.split(',')) {
        app.booking.set_field(field, value.trim());
    }

    match app.booking.submit(&api).await {
        SubmitOutcome::Submitted => println!("Booking successful"),
        SubmitOutcome::Invalid => {
            for (field, message) in app.booking.errors().iter() {
                println!("  {}: {message}", field.label());
            }
        }
        SubmitOutcome::Failed | SubmitOutcome::Busy => {
            println!("{}", app.booking.form_error().unwrap_or("Booking failed"));
        }
    }

    Ok(())
}
