//! Grid push simulation: an agent walks a warehouse and shoves boxes, including
//! two-cell wide boxes, with every move checked in full before it is committed.

pub mod console_interface;
pub mod core;
pub mod error;
pub mod models;
pub mod report;
