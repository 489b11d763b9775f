//! `ef-agent` — the simulated guest.
//!
//! | Module      | Contents                          |
//! |-------------|-----------------------------------|
//! | [`agent`]   | `Agent`, `AgentState`             |
//!
//! Agents are plain values owned by a single simulation run.  They carry no
//! shared identity: a run creates one per sampled guest at the entry point
//! and drops it once the guest has left through the exit.

pub mod agent;


pub use agent::{Agent, AgentState};
