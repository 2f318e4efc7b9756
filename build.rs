use chrono::NaiveDate;

const DEFAULT_SEASON_START: &str = "2026-02-06";

fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // The countdown target is baked in at build time; reject bad dates here
    // instead of rendering garbage in the browser.
    let season_start =
        std::env::var("SEASON_START").unwrap_or_else(|_| DEFAULT_SEASON_START.to_string());
    if let Err(e) = NaiveDate::parse_from_str(&season_start, "%Y-%m-%d") {
        panic!("SEASON_START must be a YYYY-MM-DD date, got {season_start:?}: {e}");
    }
    println!("cargo:rustc-env=SEASON_START={}", season_start);

    println!("cargo:rerun-if-env-changed=SEASON_START");
    println!("cargo:rerun-if-changed=build.rs");
}
