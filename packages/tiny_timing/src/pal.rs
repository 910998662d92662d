//! Platform abstraction layer for clock sampling and thread sleeping.
//!
//! Real code talks to the operating system through `std`; tests substitute a fake platform whose
//! time only moves when a test (or a sleep) advances it, so waiting logic can be verified without
//! actually waiting.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::*;
pub(crate) use facade::*;
#[cfg(test)]
pub(crate) use fake::*;
pub(crate) use real::*;
