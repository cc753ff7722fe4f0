//! Typed records for the most common Legistar resources.
//!
//! The API serves flat JSON objects with PascalCase keys prefixed by the
//! resource name (`EventId`, `BodyName`, ...). Only the id field is
//! guaranteed; everything else is optional in practice.

mod body;
mod event;
mod matter;

pub use body::Body;
pub use event::Event;
pub use matter::Matter;
