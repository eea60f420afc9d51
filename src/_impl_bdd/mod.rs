/// **(internal)** Implementation of some basic internal utility methods for `Bdd`s.
pub mod _impl_util;

/// **(internal)** Implementation of the naive decision-tree builder.
pub mod _impl_build;

/// **(internal)** Implementation of the bottom-up canonicalization pass.
pub mod _impl_reduce;
