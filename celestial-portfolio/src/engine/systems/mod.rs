//! Per-frame runtime systems.

/// Constant per-frame Euler spin and transform synchronisation.
pub mod spin;
