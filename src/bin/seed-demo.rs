//! Demo seed script
//!
//! Seeds the database with a few teachers and announcements covering every
//! display state: active without a start date, active inside a window,
//! scheduled for later, and already expired.
//!
//! Usage:
//!   DATABASE_URL=... ./seed-demo
//!
//! Environment variables:
//!   DATABASE_URL   — PostgreSQL connection string (required)

use anyhow::{Context, Result};
use chrono::{Duration, Local};
use std::env;
use uuid::Uuid;

use announcements_api::db;

const TEACHERS: [(&str, &str); 3] = [
    ("mrodriguez", "Ms. Rodriguez"),
    ("mchen", "Mr. Chen"),
    ("principal", "Principal Martinez"),
];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL required")?;

    println!("=== Seed Demo Announcements ===");

    let pool = db::create_pool(&database_url, 2)
        .await
        .context("Failed to connect to database")?;
    db::run_migrations(&pool).await?;

    for (username, display_name) in TEACHERS {
        sqlx::query(
            "INSERT INTO teachers (username, display_name) VALUES ($1, $2)
             ON CONFLICT (username) DO UPDATE SET display_name = EXCLUDED.display_name",
        )
        .bind(username)
        .bind(display_name)
        .execute(&pool)
        .await?;
        println!("  Teacher: {username}");
    }

    sqlx::query("DELETE FROM announcements").execute(&pool).await?;

    let today = Local::now().date_naive();
    let announcements = [
        ("Activity registration is open until the end of the month.", None, today + Duration::days(20)),
        ("Spring concert rehearsals this week in the auditorium.", Some(today - Duration::days(2)), today + Duration::days(5)),
        ("Summer schedule will be posted soon.", Some(today + Duration::days(10)), today + Duration::days(40)),
        ("Picture day was rescheduled.", None, today - Duration::days(3)),
    ];

    for (message, start_date, expiration_date) in announcements {
        sqlx::query(
            "INSERT INTO announcements (id, message, start_date, expiration_date)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(Uuid::new_v4())
        .bind(message)
        .bind(start_date)
        .bind(expiration_date)
        .execute(&pool)
        .await?;
    }
    println!("  {} announcements inserted", announcements.len());

    println!("=== Done ===");
    Ok(())
}
