//! # barista-orders: Order Store Layer for Barista POS
//!
//! The stateful half of the engine: the authoritative order collection,
//! lifecycle transitions, the adjustment ledger, and the date-scoped
//! queries that feed the dashboards. All pricing math lives upstream in
//! `barista-core`; this crate only commits and reads.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         barista-orders                                  │
//! │                                                                         │
//! │   checkout ──► OrderStore::create_order ──► ORD-### at head            │
//! │   barista  ──► OrderStore::set_status   ──► lifecycle state machine    │
//! │   manager  ──► OrderStore::create_adjustment ──► ADJ-### ledger entry  │
//! │   dashboard ─► OrderStore::stats_in_range ──► query engine (one lock)  │
//! │                                                                         │
//! │   ┌─────────┐   ┌─────────┐   ┌─────────┐   ┌─────────┐               │
//! │   │  store  │   │  query  │   │   ids   │   │  error  │               │
//! │   │ RwLock  │   │ windows │   │ ORD/ADJ │   │ NotFound│               │
//! │   │ ledger  │   │ + stats │   │ counter │   │ etc.    │               │
//! │   └─────────┘   └─────────┘   └─────────┘   └─────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - The `OrderStore`: creation, lifecycle, adjustments
//! - [`query`] - Date-windowed selection, revenue, per-status stats
//! - [`ids`] - Monotonic `ORD-###` / `ADJ-###` allocator
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ids;
pub mod query;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use ids::IdAllocator;
pub use query::{DateFilter, OrderStats};
pub use store::OrderStore;
