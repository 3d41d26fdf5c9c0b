//! Terminal movie finder.
//!
//! One screen, two independent asynchronous flows: a title search against an
//! OMDb-compatible metadata API, and a one-shot position fix (behind an in-app
//! consent prompt) rendered as a marker on a world map. Both flows feed a
//! single declarative presentation layer; see [`ui`].

pub mod config;
pub mod geo;
pub mod logging;
pub mod omdb;
pub mod ui;
