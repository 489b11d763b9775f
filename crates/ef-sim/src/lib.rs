//! `ef-sim` — the event flow simulator.
//!
//! # Run phases
//!
//! ```text
//! simulate(layout, guest_count, duration):
//!   ① Validate  — reject layouts without tables or buffet stations.
//!   ② Queueing  — peak diners, buffet capacity, service/arrival rates,
//!                 average wait (one RNG draw when the line keeps up),
//!                 maximum queue length.
//!   ③ Walk      — min(sample_cap, guest_count) agents each pick a table and
//!                 a buffet station and walk entry → table → buffet → exit,
//!                 tallying transit steps as per-zone runs
//!                 (parallel with the `parallel` feature).
//!   ④ Merge     — per-agent runs folded into the ZoneOccupancyMap in
//!                 ascending AgentId order; observer hooks fire here.
//!                 Sequential runs merge each agent as soon as it finishes.
//! ```
//!
//! [`congestion::analyze`] then turns the occupancy map into ranked hotspots.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the agent walks on Rayon's thread pool.           |
//! | `serde`    | Derives `Serialize` on metrics and congestion zones.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ef_core::{FlowConfig, SimRng};
//! use ef_sim::{FlowSimulator, NoopObserver, congestion};
//!
//! let config = FlowConfig::with_seed(42);
//! let sim = FlowSimulator::new(config)?;
//! let mut rng = SimRng::new(sim.config().seed);
//! let metrics = sim.simulate(&layout, 100, 3.0, &mut rng, &mut NoopObserver)?;
//! let hotspots = congestion::analyze(&metrics.zone_occupancy, metrics.sample_size, sim.config());
//! ```

pub mod congestion;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod queue;
pub mod simulator;
pub mod walk;
pub mod zone;


pub use congestion::CongestionZone;
pub use error::{SimError, SimResult};
pub use metrics::SimulationMetrics;
pub use observer::{NoopObserver, WalkObserver};
pub use simulator::FlowSimulator;
pub use walk::{AgentWalk, Leg};
pub use zone::ZoneOccupancyMap;
