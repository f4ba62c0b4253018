use serde::{Deserialize, Serialize};

/// Identifier of a [`Region`].
pub type RegionId = u64;

/// Identifier of a [`Category`].
pub type CategoryId = u64;

/// A region restaurants can be filtered by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Region {
    /// Region identifier.
    pub id: RegionId,
    /// Display name, also used as the list query value.
    pub name: String,
}

/// A food category restaurants can be filtered by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Category {
    /// Category identifier, used as the list query value.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

impl Region {
    /// Create a region.
    #[must_use]
    pub fn new(id: RegionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Category {
    /// Create a category.
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
