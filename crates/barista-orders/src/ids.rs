//! # Identifier Allocator
//!
//! Human-readable, monotonically distinguishable order/adjustment
//! identifiers: `ORD-001`, `ADJ-002`, ...
//!
//! ## Why a Counter, Not Collection Length?
//! Deriving the next number from "current store size + 1" is only safe
//! while nothing is ever deleted. A monotonic counter kept alongside the
//! store survives any future compaction or archiving without ever reusing
//! an identifier, so that is what we persist here. Orders and adjustments
//! draw from the SAME counter, matching the shared numbering of the
//! receipts.

/// Monotonic identifier source for the order store.
///
/// Not thread-safe on its own; lives inside the store's lock.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Creates an allocator starting at 1.
    pub fn new() -> Self {
        IdAllocator { next: 1 }
    }

    /// Resumes an allocator from a persisted counter value.
    pub fn starting_at(next: u64) -> Self {
        IdAllocator { next: next.max(1) }
    }

    /// The counter value the next allocation will use.
    pub fn peek(&self) -> u64 {
        self.next
    }

    fn take(&mut self) -> u64 {
        let n = self.next;
        self.next += 1;
        n
    }

    /// Allocates the next order identifier (`ORD-###`, zero-padded to at
    /// least 3 digits).
    pub fn next_order_id(&mut self) -> String {
        format!("ORD-{:03}", self.take())
    }

    /// Allocates the next adjustment identifier (`ADJ-###`), drawing from
    /// the same counter as orders.
    pub fn next_adjustment_id(&mut self) -> String {
        format!("ADJ-{:03}", self.take())
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
