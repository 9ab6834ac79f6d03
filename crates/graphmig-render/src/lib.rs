//! graphmig render
//!
//! Turns catalog items into Cypher DDL for a specific Neo4j version and
//! edition:
//! - [`RenderConfig`]: immutable, chainable rendering intent
//! - [`Renderer`]: the dialect aware statement generator
//!
//! ```rust,ignore
//! use graphmig_core::{Constraint, Target};
//! use graphmig_render::{RenderConfig, Renderer};
//!
//! let item = Constraint::unique(Target::node("Book", ["isbn"])?)?.into();
//! let config = RenderConfig::create().if_not_exists().for_version_and_edition("4.4", "enterprise")?;
//! let statements = Renderer::render(&item, &config)?;
//! ```

pub mod config;
mod constraint;
mod cypher;
mod index;
pub mod renderer;

pub use config::{Operator, RenderConfig};
pub use renderer::{RenderError, Renderer};
