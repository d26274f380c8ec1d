//! Follow command - replay a route and keep the map image current.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use tracing::{debug, info};

use geofollow::config::ConfigFile;
use geofollow::coord::Coordinate;
use geofollow::cursor::CompassCursor;
use geofollow::follower::MapFollower;
use geofollow::provider::{ReqwestClient, StaticMapProvider};
use geofollow::sensor::ScriptedSensor;

use crate::display::FileDisplay;
use crate::error::CliError;

/// How often the host ticks the compass cursor.
const CURSOR_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Arguments for the follow command.
#[derive(Args)]
pub struct FollowArgs {
    /// Route file: one `lat,lon` fix per line, `#` comments allowed.
    pub route: PathBuf,

    /// Static map API key (overrides the config file).
    #[arg(long)]
    pub api_key: Option<String>,

    /// Path to an INI config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the map endpoint base URL (must end with `?`).
    #[arg(long)]
    pub base_url: Option<String>,

    /// Where to write the fetched map image.
    #[arg(long, default_value = "map.png")]
    pub output: PathBuf,

    /// Fixed compass heading to report, in degrees.
    #[arg(long, default_value_t = 0.0)]
    pub heading: f64,
}

/// Run the follow command.
pub fn run(args: FollowArgs) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };

    // CLI > config file; there is no anonymous tier, so a key is required.
    let api_key = args
        .api_key
        .or_else(|| config.provider.api_key.clone())
        .ok_or_else(|| {
            CliError::Config(
                "no API key: pass --api-key or set api_key in the config file".to_string(),
            )
        })?;

    let fixes = load_route(&args.route)?;
    let sensor = Arc::new(ScriptedSensor::new(fixes));
    sensor.set_heading(args.heading);
    info!(
        route = %args.route.display(),
        fixes = sensor.route_len(),
        "starting follower"
    );

    let http_client = ReqwestClient::with_timeout(config.timeout_secs())?;
    let mut provider = StaticMapProvider::new(http_client, api_key);
    if let Some(base_url) = args.base_url.or_else(|| config.provider.base_url.clone()) {
        provider = provider.with_base_url(base_url);
    }

    let cursor = Arc::new(CompassCursor::new());
    let display = FileDisplay::new(args.output);
    let follower = MapFollower::new(sensor.clone(), provider, display, cursor.clone());

    // The provider blocks inside the follower task by design (the loop is
    // strictly sequential), so only the time driver is needed.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .build()
        .map_err(CliError::Runtime)?;

    runtime.spawn(tick_cursor(cursor, sensor));
    runtime.block_on(follower.run());

    info!("follower stopped");
    Ok(())
}

/// Host-driven cursor tick loop.
async fn tick_cursor(cursor: Arc<CompassCursor>, sensor: Arc<ScriptedSensor>) {
    let mut interval = tokio::time::interval(CURSOR_TICK_INTERVAL);
    loop {
        interval.tick().await;
        cursor.tick(sensor.as_ref());
        if cursor.is_enabled() {
            debug!(rotation = cursor.rotation_degrees(), "cursor rotation");
        }
    }
}

/// Parse a route file into fixes.
///
/// One fix per line as `lat,lon` (whitespace around either part is fine).
/// Blank lines and lines starting with `#` are skipped.
fn load_route(path: &Path) -> Result<Vec<Coordinate>, CliError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CliError::Route(format!("{}: {}", path.display(), e)))?;
    parse_route(&contents).map_err(|e| CliError::Route(format!("{}: {}", path.display(), e)))
}

fn parse_route(contents: &str) -> Result<Vec<Coordinate>, String> {
    let mut fixes = Vec::new();
    for (lineno, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (lat, lon) = line
            .split_once(',')
            .ok_or_else(|| format!("line {}: expected `lat,lon`", lineno + 1))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| format!("line {}: bad latitude `{}`", lineno + 1, lat.trim()))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| format!("line {}: bad longitude `{}`", lineno + 1, lon.trim()))?;
        fixes.push(Coordinate::new(lat, lon));
    }
    Ok(fixes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_basic() {
        let fixes = parse_route("35.0,139.0\n35.0001, 139.0\n").unwrap();
        assert_eq!(
            fixes,
            vec![
                Coordinate::new(35.0, 139.0),
                Coordinate::new(35.0001, 139.0),
            ]
        );
    }

    #[test]
    fn test_parse_route_skips_comments_and_blanks() {
        let fixes = parse_route("# tokyo walk\n\n35.0,139.0\n").unwrap();
        assert_eq!(fixes, vec![Coordinate::new(35.0, 139.0)]);
    }

    #[test]
    fn test_parse_route_rejects_missing_comma() {
        let err = parse_route("35.0 139.0\n").unwrap_err();
        assert!(err.contains("line 1"));
    }

    #[test]
    fn test_parse_route_rejects_non_numeric() {
        let err = parse_route("north,east\n").unwrap_err();
        assert!(err.contains("bad latitude"));
    }

    #[test]
    fn test_parse_route_reports_correct_line_number() {
        let err = parse_route("35.0,139.0\noops\n").unwrap_err();
        assert!(err.contains("line 2"));
    }
}
