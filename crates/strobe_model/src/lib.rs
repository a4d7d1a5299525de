//! Golden model of a synchronous up/down/load counter.
//!
//! This crate holds the exact next-state and output rule of the counter
//! under test: the 2-bit [`ControlCode`] selecting the operating mode, and
//! the [`CounterModel`] state machine that steps through transitions with
//! registered (pre-transition) outputs.

#![warn(missing_docs)]

pub mod control;
pub mod counter;

pub use control::ControlCode;
pub use counter::CounterModel;
