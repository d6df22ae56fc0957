//! Conversions from UI-local service errors into the core `AppError`
//! hierarchy, one module per domain.

pub mod search;
pub mod weather;
