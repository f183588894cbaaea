//! Entity storage keyed by a stable type tag.
//!
//! Each tag maps to one homogeneous bucket, so systems iterate exactly the
//! entities they care about without runtime type inspection.

mod registry;

pub use registry::{Entity, TypeTag, World};
