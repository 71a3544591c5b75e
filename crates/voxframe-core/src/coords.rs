//! Coordinate systems for a frame's local voxel grid.
//!
//! Voxel coordinates split into a chunk key and an in-chunk offset with floor
//! division and a non-negative remainder on every axis, so `-1` lands in chunk
//! `-1` at offset `CHUNK_SIZE - 1`, directly adjacent to voxel `0` in chunk `0`.

use std::fmt;

use crate::constants::{CHUNK_BITS, CHUNK_SIZE};
use crate::error::{Error, Result};
use bytemuck::{Pod, Zeroable};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Position within a chunk (0 to CHUNK_SIZE-1 per axis).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct LocalPos {
    pub x: u8,
    pub y: u8,
    pub z: u8,
    pub _pad: u8,
}

impl LocalPos {
    /// Create a new local position
    #[inline]
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        debug_assert!((x as usize) < CHUNK_SIZE);
        debug_assert!((y as usize) < CHUNK_SIZE);
        debug_assert!((z as usize) < CHUNK_SIZE);
        Self { x, y, z, _pad: 0 }
    }

    /// Create a local position, rejecting offsets outside the chunk.
    pub fn try_new(x: usize, y: usize, z: usize) -> Result<Self> {
        if x >= CHUNK_SIZE || y >= CHUNK_SIZE || z >= CHUNK_SIZE {
            return Err(Error::OutOfBounds(format!(
                "local position ({x}, {y}, {z}) outside 0..{CHUNK_SIZE}"
            )));
        }
        Ok(Self::new(x as u8, y as u8, z as u8))
    }

    /// Convert to linear index for flat array storage
    #[inline]
    pub const fn to_index(self) -> usize {
        self.x as usize
            + (self.y as usize) * CHUNK_SIZE
            + (self.z as usize) * CHUNK_SIZE * CHUNK_SIZE
    }

    /// Create from linear index
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        let x = (index % CHUNK_SIZE) as u8;
        let y = ((index / CHUNK_SIZE) % CHUNK_SIZE) as u8;
        let z = (index / (CHUNK_SIZE * CHUNK_SIZE)) as u8;
        Self { x, y, z, _pad: 0 }
    }
}

/// Chunk key in chunk coordinates.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct ChunkPos {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl ChunkPos {
    /// Smallest chunk coordinate any `i64` voxel maps to.
    pub const MIN_COORD: i64 = i64::MIN >> CHUNK_BITS;
    /// Largest chunk coordinate any `i64` voxel maps to.
    pub const MAX_COORD: i64 = i64::MAX >> CHUNK_BITS;

    /// Create a new chunk position
    #[inline]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Voxel position of the chunk's minimum corner. The chunk must be
    /// addressable.
    #[inline]
    pub const fn origin(self) -> VoxelPos {
        VoxelPos::new(
            self.x << CHUNK_BITS,
            self.y << CHUNK_BITS,
            self.z << CHUNK_BITS,
        )
    }

    /// Check if every voxel of this chunk has an `i64` voxel position.
    ///
    /// Only addressable chunks can be read through voxel coordinates, and
    /// [`ChunkPos::origin`] is only meaningful for them.
    #[inline]
    pub const fn is_addressable(self) -> bool {
        const fn in_range(v: i64) -> bool {
            v >= ChunkPos::MIN_COORD && v <= ChunkPos::MAX_COORD
        }
        in_range(self.x) && in_range(self.y) && in_range(self.z)
    }
}

impl fmt::Display for ChunkPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Integer voxel position in a frame's local space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl VoxelPos {
    /// Create a new voxel position
    #[inline]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Get the chunk containing this position (floor division)
    #[inline]
    pub const fn chunk_pos(self) -> ChunkPos {
        ChunkPos::new(
            self.x >> CHUNK_BITS,
            self.y >> CHUNK_BITS,
            self.z >> CHUNK_BITS,
        )
    }

    /// Get the offset within the chunk (non-negative remainder)
    #[inline]
    pub const fn local_pos(self) -> LocalPos {
        let mask = (CHUNK_SIZE - 1) as i64;
        LocalPos::new(
            (self.x & mask) as u8,
            (self.y & mask) as u8,
            (self.z & mask) as u8,
        )
    }

    /// Split into chunk and local position
    #[inline]
    pub const fn split(self) -> (ChunkPos, LocalPos) {
        (self.chunk_pos(), self.local_pos())
    }

    /// Create from chunk and local position
    #[inline]
    pub const fn from_chunk_local(chunk: ChunkPos, local: LocalPos) -> Self {
        Self::new(
            (chunk.x << CHUNK_BITS) + local.x as i64,
            (chunk.y << CHUNK_BITS) + local.y as i64,
            (chunk.z << CHUNK_BITS) + local.z as i64,
        )
    }

    /// Convert to floating point, the minimum corner of the voxel
    #[inline]
    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x as f64, self.y as f64, self.z as f64)
    }
}

impl From<DVec3> for VoxelPos {
    /// The voxel containing the point.
    fn from(v: DVec3) -> Self {
        Self::new(v.x.floor() as i64, v.y.floor() as i64, v.z.floor() as i64)
    }
}
