//! Headless page layer for SkyCast.
//!
//! Holds the interaction state machine (`PageModel`), the debounce
//! scheduler, the async service plumbing, and the controller that ties them
//! into a single update loop. Rendering front ends consume `PageModel`
//! accessors; nothing in this crate draws.

pub mod controller;
pub mod debounce;
pub mod error_mapping;
pub mod models;
pub mod services;

pub use controller::PageController;
pub use debounce::Debouncer;
pub use models::page_model::{PageEffect, PageEvent, PageModel, PageState};
