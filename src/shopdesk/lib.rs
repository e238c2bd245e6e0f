//! # Shopdesk Architecture
//!
//! Shopdesk is a **UI-agnostic shop administration library**: customer and
//! order management, per-route search, and profile/company settings over a
//! key-value JSON store. The CLI is one thin client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, handles exit codes     │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One ShopdeskApi per session, owning all state            │
//! │  - Thin dispatch into the command layer                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over collections and settings        │
//! │  - No I/O assumptions; returns plain Rust types             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait over string keys and JSON values    │
//! │  - FileBackend (production), MemoryBackend (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reading vs. Writing
//!
//! Reads never mutate: the table view-model ([`table`]) projects a filtered,
//! sorted page out of a collection without touching it. Writes go through
//! [`collection::Collection`], which validates, mutates in memory, and
//! re-persists the whole list in one step, so the in-memory list and the
//! stored list never disagree.
//!
//! ## The Event Bus
//!
//! Cross-cutting updates (company data, per-route search state) are broadcast
//! synchronously over [`events::EventBus`] so every interested party observes
//! a change in the same pass that made it.
//!
//! ## Module Overview
//!
//! - [`api`] — session facade, the entry point for frontends
//! - [`collection`] — create/update/delete pipeline for record lists
//! - [`commands`] — per-operation business logic
//! - [`error`] — the crate-wide error type
//! - [`events`] — typed synchronous publish/subscribe
//! - [`model`] — customer and order records
//! - [`seed`] — first-run data
//! - [`settings`] — profile, account, security, and company records
//! - [`store`] — key-value persistence with merge-on-load
//! - [`table`] — filter → sort → paginate view-model

pub mod api;
pub mod collection;
pub mod commands;
pub mod error;
pub mod events;
pub mod model;
pub mod seed;
pub mod settings;
pub mod store;
pub mod table;
