//! # HealthSathi Core
//!
//! Pure logic for HealthSathi: catalog models, the multi-criteria filter
//! engine, multi-step form wizards, symptom assessment, and vitals.
//!
//! This crate contains no tokio, filesystem, or network dependencies. Every
//! operation is a synchronous function over in-memory values, so the same
//! code backs the `sathi` CLI, the HTTP server, and any embedding host.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Catalog item types and their closed vocabularies |
//! | [`filter`] | Predicate composition and the `filter` entry point |
//! | [`criteria`] | Per-record criteria sets (view state) |
//! | [`catalog`] | Sample collections and JSON loading |
//! | [`wizard`] | Step sequences with validation gates |
//! | [`registration`] | Account registration form |
//! | [`symptom`] | Symptom checker flow and assessment rule |
//! | [`vitals`] | Vital signs and BMI |
//! | [`emergency`] | Emergency contacts and nearby hospitals |

pub mod catalog;
pub mod criteria;
pub mod emergency;
pub mod filter;
pub mod models;
pub mod registration;
pub mod symptom;
pub mod vitals;
pub mod wizard;

pub use catalog::{Catalog, CatalogError};
pub use criteria::{ArticleCriteria, DoctorCriteria, RecordCriteria, VideoCriteria};
pub use filter::{filter, Criteria, Filter, Selection};
