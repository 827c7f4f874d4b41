//! Hardware-resource images: slot resolution and copying into the build.

pub mod materialize;
pub mod resolver;

pub use materialize::materialize;
pub use resolver::scan;
