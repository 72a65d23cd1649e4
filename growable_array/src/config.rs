use serde::Deserialize;

pub const DEFAULT_CAPACITY: usize = 10;

/// Whether an array may reallocate its storage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Doubles when full, halves when a quarter full.
    #[default]
    Growable,
    /// Never reallocates; inserting into a full array is an error.
    Fixed,
}

impl ResizePolicy {
    pub fn is_growable(&self) -> bool {
        matches!(self, ResizePolicy::Growable)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    pub initial_capacity: usize,
    pub policy: ResizePolicy,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            policy: ResizePolicy::default(),
        }
    }
}
