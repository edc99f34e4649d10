use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting for the optional scene config override to load or fail.
    #[default]
    Loading,
    /// Scene built; spin loop and pointer handlers active.
    Running,
}
