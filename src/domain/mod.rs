//! Domain model of the machine: money, items, the catalog, change making and
//! the payment session state machine. Nothing in here performs I/O.

pub mod catalog;
pub mod change;
pub mod item;
pub mod money;
pub mod session;
