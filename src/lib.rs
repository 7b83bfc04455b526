//! Cobweb - terminal graphical analysis of one-dimensional iterated maps.
//!
//! Cobweb plots a map `f` together with the identity line and, for a chosen
//! starting value `x0`, traces the orbit `x0, f(x0), f(f(x0)), ...` as a
//! stair-step path between the two.
//!
//! # Features
//!
//! - Orbit iteration with convergence, length cap and bound checks
//! - Cobweb path construction
//! - Event-driven controller over an abstract renderer
//! - Mouse and keyboard driven terminal front end
//! - Adjustable parameters for map families
//! - Clipboard export of orbits
//!
//! # Example
//!
//! ```
//! use cobweb::config::OrbitConfig;
//! use cobweb::domain::Domain;
//! use cobweb::map::MapFunction;
//! use cobweb::orbit::{build_path, compute_orbit};
//!
//! let f = MapFunction::family("logistic", 3.7, |x, r| r * x * (1.0 - x));
//! let orbit = compute_orbit(&f, 0.2, &Domain::default(), &OrbitConfig::default())?;
//! let path = build_path(&orbit);
//! assert_eq!(path.len(), 2 * orbit.len() - 1);
//! # Ok::<(), cobweb::CobwebError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod domain;
pub mod error;
pub mod interaction;
pub mod map;
pub mod orbit;
pub mod render;
pub mod ui;

pub use error::{CobwebError, Result};
