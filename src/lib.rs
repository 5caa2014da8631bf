//! # HealthSathi
//!
//! Catalog filtering and guided health flows for a rural healthcare
//! front-end, exposed through the `sathi` CLI and a JSON HTTP API.
//!
//! The pure logic (criteria, filter engine, wizards, assessment rule,
//! sample data) lives in [`healthsathi_core`]; this crate adds
//! configuration, catalog loading, logging, and the two outer surfaces.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐
//! │ sathi.toml   │──▶│ Catalog (sample   │
//! │ catalog.json │   │  or JSON file)    │
//! └──────────────┘   └────────┬─────────┘
//!                             │ criteria ──▶ filter()
//!                  ┌──────────┴──────────┐
//!                  ▼                     ▼
//!             ┌──────────┐         ┌──────────┐
//!             │   CLI    │         │   HTTP   │
//!             │ (sathi)  │         │  (axum)  │
//!             └──────────┘         └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! sathi doctors --specialty cardiology
//! sathi articles --language hindi --json
//! sathi assess --age 40 --gender female Fever Cough
//! sathi serve
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`catalog`] | Catalog loading |
//! | [`logging`] | Tracing subscriber setup |
//! | [`search`] | Doctor, article, video, and record listings |
//! | [`symptoms`] | Symptom lookup and assessment |
//! | [`emergency`] | Helplines and nearby hospitals |
//! | [`vitals`] | BMI calculation |
//! | [`stats`] | Catalog overview |
//! | [`server`] | HTTP API |

pub mod catalog;
pub mod config;
pub mod emergency;
pub mod logging;
pub mod search;
pub mod server;
pub mod stats;
pub mod symptoms;
pub mod vitals;
