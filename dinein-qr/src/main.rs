//! dinein-qr — Table QR generator
//!
//! Offline tool that:
//! - Fetches every table and restaurant from a running DineIn server
//! - Builds the customer deep link for each table
//! - Writes one PNG per table under `OUT_DIR`
//!
//! 环境变量: API_BASE (默认 http://localhost:4000), APP_BASE (默认
//! http://localhost:8080), OUT_DIR (默认 out)。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::Luma;
use qrcode::QrCode;
use tracing::{info, warn};

use dinein_client::session::build_deep_link;
use dinein_client::{ClientConfig, HttpClient, Restaurant, Table};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dinein_qr=info".into()),
        )
        .init();

    let api_base = env_or("API_BASE", "http://localhost:4000");
    let app_base = env_or("APP_BASE", "http://localhost:8080");
    let out_dir = PathBuf::from(env_or("OUT_DIR", "out"));

    let api = HttpClient::new(&ClientConfig::new(&api_base));

    let tables = api.tables(None).await.context("fetching tables")?;
    info!("fetched {} tables from {api_base}/tables", tables.len());

    let restaurants = api.restaurants().await.context("fetching restaurants")?;
    info!(
        "fetched {} restaurants from {api_base}/restaurants",
        restaurants.len()
    );

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut written = 0usize;
    for table in &tables {
        let Some((restaurant_id, restaurant_name)) = restaurant_for(table, &restaurants) else {
            warn!(
                "table {} is not linked to any restaurant and none exist, skipped",
                table.number
            );
            continue;
        };

        let link = build_deep_link(
            &app_base,
            &table.id,
            restaurant_id,
            table.number,
            restaurant_name,
        )?;

        let file_name = format!("table-{}-{}.png", slug(restaurant_name), table.number);
        render_png(&link, &out_dir.join(&file_name))?;

        info!("generated {file_name} -> {link}");
        written += 1;
    }

    info!("done, {written} file(s) in {}", out_dir.display());
    Ok(())
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// The restaurant a table belongs to. A bound table whose restaurant is gone
/// keeps its id with a placeholder name; an unbound table falls back to the
/// first restaurant. `None` only when there is nothing to fall back to.
fn restaurant_for<'a>(table: &'a Table, restaurants: &'a [Restaurant]) -> Option<(&'a str, &'a str)> {
    match &table.restaurant_id {
        Some(id) => {
            let name = restaurants
                .iter()
                .find(|r| &r.id == id)
                .map(|r| r.name.as_str())
                .unwrap_or("Restaurant");
            Some((id.as_str(), name))
        }
        None => restaurants.first().map(|r| (r.id.as_str(), r.name.as_str())),
    }
}

/// Lowercased, whitespace runs collapsed to `-`
fn slug(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

fn render_png(link: &str, path: &Path) -> anyhow::Result<()> {
    let code = QrCode::new(link).context("encoding QR")?;
    let png = code.render::<Luma<u8>>().min_dimensions(512, 512).build();
    png.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
