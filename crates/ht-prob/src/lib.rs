//! Distribution evaluation core for HypTest.
//!
//! This crate hosts the numeric heart of the explorer:
//! - elementary special-function approximations (Lanczos gamma, A&S erf)
//! - closed-form densities for chi-square, Student's-t, and the standard
//!   normal
//! - fixed-node Simpson cumulatives and bisection quantiles
//! - the [`Family`] facade the presentation layer calls
//!
//! Everything is pure and total: no I/O, no shared state, sentinel returns
//! instead of panics. The per-family modules stay private so that adding or
//! removing a family is local to [`distributions`].

mod chi_squared;
mod math;
mod normal;
mod quantile;
mod simpson;
mod student_t;

pub mod curve;
pub mod distributions;
pub mod tail;

pub use distributions::Family;
pub use tail::Tail;
