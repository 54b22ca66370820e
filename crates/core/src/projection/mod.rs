//! One-call derivation pipeline and its optional memoization.
//!
//! The pipeline is a pure projection of its inputs. Caching lives at the
//! boundary in [`ProjectionCache`]; the engine functions never consult it.

pub mod cache;
pub mod pipeline;


pub use cache::ProjectionCache;
pub use pipeline::{BookkeepingEngine, Projection, ProjectionInput};
