//! Core voxel types.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// The physical state of a single voxel.
///
/// Block id 0 is reserved for empty space. `data` is opaque auxiliary state
/// (orientation, variant, etc.) that the store never interprets.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct Block {
    /// The block type
    pub id: u32,
    /// Additional metadata (orientation, state, etc.)
    pub data: u32,
}

impl Block {
    /// Empty space
    pub const EMPTY: Self = Self { id: 0, data: 0 };

    /// Create a new block with the given id
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self { id, data: 0 }
    }

    /// Create a new block with id and auxiliary data
    #[inline]
    pub const fn with_data(id: u32, data: u32) -> Self {
        Self { id, data }
    }

    /// Returns true if this block represents empty space.
    ///
    /// Only the id decides emptiness; a block with id 0 and non-zero data is
    /// still empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.id == 0
    }

    /// Returns true if this block is solid (not empty)
    #[inline]
    pub const fn is_solid(&self) -> bool {
        self.id != 0
    }
}
