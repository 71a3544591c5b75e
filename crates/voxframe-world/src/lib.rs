//! Sparse chunked voxel frames for Voxframe.
//!
//! A [`Frame`] is a local coordinate space: an [`Sqt`] placing it in a parent
//! space plus an unbounded voxel grid stored as 16x16x16 chunks that are
//! allocated on first write and released as soon as they become empty again.

pub mod chunk;
pub mod frame;

pub use chunk::Chunk;
pub use frame::{Frame, FrameConfig};
pub use voxframe_core::{Block, ChunkPos, LocalPos, Sqt, VoxelPos};
