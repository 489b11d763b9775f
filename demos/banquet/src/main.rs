//! banquet — run the event flow planner on a request file.
//!
//! ```text
//! banquet [REQUEST.json] [OUTPUT_DIR]
//! ```
//!
//! Without a request file the embedded wedding-reception request is used.
//! With an output directory the agent paths and zone occupancy are written
//! as CSV.  `EF_CONFIG` names an optional JSON `FlowConfig`; `EF_SEED`
//! overrides its seed.  Log verbosity follows `RUST_LOG`.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ef_core::{FlowConfig, SimRng};
use ef_output::{CsvWriter, WalkOutputObserver};
use ef_planner::{EventPlanner, ErrorPayload, parse_request};

// Two buffet lines along the back wall, eight rounds, one door in and one out.
const RECEPTION_REQUEST: &str = r#"{
    "layout": {
        "tables": [
            { "x": 20, "y": 20 }, { "x": 40, "y": 20 }, { "x": 60, "y": 20 }, { "x": 80, "y": 20 },
            { "x": 20, "y": 45 }, { "x": 40, "y": 45 }, { "x": 60, "y": 45 }, { "x": 80, "y": 45 }
        ],
        "buffets": [
            { "x": 35, "y": 75, "lengthFt": 24 },
            { "x": 65, "y": 75 }
        ],
        "entry": { "x": 0,   "y": 0 },
        "exit":  { "x": 100, "y": 0 },
        "venueSqFt": 6400
    },
    "guestCount": 180,
    "duration": 4.5
}"#;

fn load_config() -> Result<FlowConfig> {
    let mut config = match std::env::var("EF_CONFIG") {
        Ok(path) => FlowConfig::from_path(Path::new(&path))
            .with_context(|| format!("loading config from {path}"))?,
        Err(_) => FlowConfig::default(),
    };
    if let Ok(seed) = std::env::var("EF_SEED") {
        config.seed = seed.parse().with_context(|| format!("EF_SEED is not a u64: {seed}"))?;
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let body = match args.next() {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => RECEPTION_REQUEST.to_owned(),
    };
    let output_dir = args.next();

    let config = load_config()?;
    info!(seed = config.seed, sample_cap = config.sample_cap, "configuration loaded");
    let planner = EventPlanner::new(config)?;

    let start = Instant::now();
    let result = match &output_dir {
        None => planner.handle_json(&body),
        Some(dir) => {
            let dir = Path::new(dir);
            std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            let mut observer = WalkOutputObserver::new(CsvWriter::new(dir)?, planner.config().zone_size);
            let mut rng = SimRng::new(planner.config().seed);
            let result = parse_request(&body)
                .and_then(|request| planner.plan_with(&request, &mut rng, &mut observer))
                .map_err(ErrorPayload::from);
            if let Some(e) = observer.take_error() {
                return Err(e).context("writing CSV output");
            }
            info!(dir = %dir.display(), "CSV output written");
            result
        }
    };
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "planning finished");

    match result {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(payload) => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
            bail!("request rejected with status {}", payload.status)
        }
    }
}
