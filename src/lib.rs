//! # retry-backoff
//!
//! Exponential backoff with additive jitter for retry loops.
//!
//! A [`Backoff`] value hands out the wait interval to use before the next
//! retry of a failing operation. [`ExponentialBackoff`] starts at an initial
//! interval, multiplies it by a growth factor after every draw, caps it at a
//! ceiling, and mixes in up to a configurable fraction of random extra delay
//! so that many clients recovering from the same outage do not retry in
//! lockstep. Jitter is only ever added, so an interval never shrinks below
//! its computed base.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use retry_backoff::{Backoff, ExponentialBackoff};
//!
//! let mut backoff = ExponentialBackoff::new(
//!     Duration::from_millis(100), // initial
//!     Duration::from_secs(10),    // ceiling
//!     0.0,                        // jitter fraction
//!     2.0,                        // growth factor
//! );
//!
//! assert_eq!(backoff.duration(), Duration::from_millis(100));
//! assert_eq!(backoff.duration(), Duration::from_millis(200));
//!
//! // After a success, start the next failure from the initial interval.
//! backoff.reset();
//! assert_eq!(backoff.duration(), Duration::from_millis(100));
//! ```
//!
//! ## Retry loop
//!
//! The crate never sleeps or retries by itself; the caller owns the loop and
//! waits for whatever [`Backoff::duration`] returns.
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use retry_backoff::{Backoff, ExponentialBackoff};
//!
//! # async fn connect() -> Result<(), std::io::Error> { Ok(()) }
//! #[tokio::main]
//! async fn main() {
//!     let mut backoff = ExponentialBackoff::new(
//!         Duration::from_millis(250),
//!         Duration::from_secs(30),
//!         0.15,
//!         2.0,
//!     );
//!
//!     loop {
//!         match connect().await {
//!             Ok(()) => {
//!                 backoff.reset();
//!                 break;
//!             }
//!             Err(err) => {
//!                 let delay = backoff.duration();
//!                 eprintln!("connect failed ({err}), retrying in {delay:?}");
//!                 tokio::time::sleep(delay).await;
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! Each generator is a private, single-owner value: one per retry loop, with
//! no synchronization needed across loops. Deterministic tests can drive the
//! `_with_rng` variants with a seeded `rand::rngs::StdRng`.

#![deny(rustdoc::broken_intra_doc_links)]

pub mod backoff;
pub mod jitter;

pub use backoff::{Backoff, ConstantBackoff, ExponentialBackoff};
pub use jitter::{add_jitter, add_jitter_with_rng};
