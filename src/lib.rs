//! # Design Patterns in Rust
//!
//! Eight classic object-oriented patterns, each rebuilt from traits and
//! composition instead of class hierarchies.
//!
//! ## Creational Patterns
//! - Builder Pattern (burger restaurants, a director with fixed recipes)
//! - Factory Method Pattern (toy factories returning boxed products)
//! - Singleton Pattern (guarded lazy repository)
//!
//! ## Structural Patterns
//! - Adapter Pattern (one-way and two-way plug adapters)
//! - Bridge Pattern (remotes over radios and TVs)
//! - Decorator Pattern (stacking clothes on a human)
//!
//! ## Behavioral Patterns
//! - Command Pattern (editor commands with an undo/redo history)
//! - Strategy Pattern (swappable data-extraction algorithms)
//!
//! Every pattern module ends with a `demo` function that narrates the
//! pattern through a [`console::Console`]. Run them with:
//! ```bash
//! cargo run --bin patterns -- list
//! cargo run --bin patterns -- run bridge
//! cargo run --bin strategy
//! ```

pub mod config;
pub mod console;
pub mod demo;
pub mod error;
pub mod telemetry;

pub mod adapter;
pub mod bridge;
pub mod builder;
pub mod command;
pub mod decorator;
pub mod factory_method;
pub mod singleton;
pub mod strategy;

pub use config::PatternsConfig;
pub use console::{Console, Stdout, Transcript};
pub use demo::Demo;
pub use error::{PatternError, Result};
