//! Application layer containing the transaction orchestration.
//!
//! This module defines the `VendingController`, the single owner of the
//! catalog, the in-flight payment session and the profit ledger.

pub mod controller;
