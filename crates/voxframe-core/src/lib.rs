//! Core types, coordinates, and transforms for Voxframe.
//!
//! This crate provides the foundational types shared by the voxel store:
//! - Block values stored per voxel
//! - Coordinate systems (voxel, chunk, local)
//! - The SQT (scale, rotation, translation) reference-frame transform
//! - Common error types

pub mod coords;
pub mod error;
pub mod transform;
pub mod types;

pub use coords::{ChunkPos, LocalPos, VoxelPos};
pub use error::{Error, Result};
pub use transform::Sqt;
pub use types::Block;

/// Storage constants shared by every frame.
pub mod constants {
    /// Size of a chunk in voxels per axis
    pub const CHUNK_SIZE: usize = 16;
    /// Total voxels in a chunk (16^3)
    pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;
    /// Bits needed to represent position within a chunk (4 bits for 0-15)
    pub const CHUNK_BITS: u32 = 4;
}
