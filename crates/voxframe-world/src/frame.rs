//! Reference frames with sparse chunked voxel storage.

use glam::DVec3;
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use voxframe_core::coords::{ChunkPos, VoxelPos};
use voxframe_core::error::{Error, Result};
use voxframe_core::transform::Sqt;
use voxframe_core::types::Block;

use crate::chunk::Chunk;

/// Frame construction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Initial placement of the frame in its parent space.
    pub transform: Sqt,
    /// Number of chunks to pre-allocate room for.
    pub chunk_capacity: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            transform: Sqt::IDENTITY,
            chunk_capacity: 0,
        }
    }
}

/// A reference frame: an SQT transform placing a local coordinate system in
/// its parent space, and the voxel data addressed in that local system.
///
/// Voxel storage is sparse. A chunk is allocated by the first non-empty write
/// into it and dropped by the write that leaves it entirely empty, so the map
/// never holds an all-empty chunk and a missing chunk reads as empty blocks.
///
/// A frame is plain owned state with no internal locking. Wrap it in a lock
/// to share it between threads.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Placement in the parent space.
    transform: Sqt,
    /// Non-empty chunks indexed by position.
    chunks: HashMap<ChunkPos, Chunk>,
}

impl Frame {
    /// Create a frame with an identity transform and no blocks.
    pub fn new() -> Self {
        Self::with_config(FrameConfig::default())
    }

    /// Create a frame from the given configuration.
    pub fn with_config(config: FrameConfig) -> Self {
        Self {
            transform: config.transform,
            chunks: HashMap::with_capacity(config.chunk_capacity),
        }
    }

    /// The frame's placement transform.
    pub fn transform(&self) -> &Sqt {
        &self.transform
    }

    /// Mutable access to the frame's placement transform.
    pub fn transform_mut(&mut self) -> &mut Sqt {
        &mut self.transform
    }

    /// Get the block at local voxel coordinates (x, y, z).
    #[inline]
    pub fn block(&self, x: i64, y: i64, z: i64) -> Block {
        self.block_at(VoxelPos::new(x, y, z))
    }

    /// Get the block at a local voxel position.
    pub fn block_at(&self, pos: VoxelPos) -> Block {
        let (key, local) = pos.split();
        self.chunks
            .get(&key)
            .map_or(Block::EMPTY, |chunk| chunk.get(local))
    }

    /// Change the block at local voxel coordinates (x, y, z).
    #[inline]
    pub fn set_block(&mut self, x: i64, y: i64, z: i64, block: Block) {
        self.set_block_at(VoxelPos::new(x, y, z), block);
    }

    /// Change the block at a local voxel position.
    ///
    /// Writing a non-empty block into a missing chunk allocates it; writing an
    /// empty block that leaves its chunk entirely empty removes the chunk.
    pub fn set_block_at(&mut self, pos: VoxelPos, block: Block) {
        let (key, local) = pos.split();
        match self.chunks.entry(key) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().set(local, block);
                if block.is_empty() && entry.get().is_empty() {
                    entry.remove();
                    trace!(chunk = %key, "released empty chunk");
                }
            }
            Entry::Vacant(entry) => {
                if block.is_empty() {
                    return;
                }
                let mut chunk = Chunk::new();
                chunk.set(local, block);
                entry.insert(chunk);
                trace!(chunk = %key, "allocated chunk");
            }
        }
    }

    /// Local voxel containing a point given in the parent space.
    ///
    /// The frame's transform must have a non-zero scale.
    pub fn voxel_containing(&self, parent_point: DVec3) -> VoxelPos {
        VoxelPos::from(self.transform.inverse().transform_abs(parent_point))
    }

    /// Get the chunk stored at the given position.
    pub fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }

    /// Check if a chunk is stored at the given position.
    pub fn contains_chunk(&self, pos: ChunkPos) -> bool {
        self.chunks.contains_key(&pos)
    }

    /// Number of stored (non-empty) chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Check if the frame holds no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Iterate over the stored chunks, in no particular order.
    pub fn chunks(&self) -> impl Iterator<Item = (ChunkPos, &Chunk)> {
        self.chunks.iter().map(|(pos, chunk)| (*pos, chunk))
    }

    /// Get all stored chunk positions.
    pub fn chunk_positions(&self) -> Vec<ChunkPos> {
        self.chunks.keys().copied().collect()
    }

    /// Insert or replace a whole chunk, returning the chunk it replaced.
    ///
    /// An empty chunk is not stored; it clears the position instead. Keys
    /// that no `i64` voxel position maps to are rejected.
    pub fn insert_chunk(&mut self, pos: ChunkPos, chunk: Chunk) -> Result<Option<Chunk>> {
        if !pos.is_addressable() {
            return Err(Error::OutOfBounds(format!(
                "chunk {pos} is outside the addressable voxel range"
            )));
        }
        if chunk.is_empty() {
            return Ok(self.remove_chunk(pos));
        }
        debug!(chunk = %pos, solid = chunk.solid_count(), "inserted chunk");
        Ok(self.chunks.insert(pos, chunk))
    }

    /// Remove the chunk at the given position.
    pub fn remove_chunk(&mut self, pos: ChunkPos) -> Option<Chunk> {
        let removed = self.chunks.remove(&pos);
        if removed.is_some() {
            debug!(chunk = %pos, "removed chunk");
        }
        removed
    }

    /// Drop every chunk, leaving the transform untouched.
    pub fn clear(&mut self) {
        debug!(chunks = self.chunks.len(), "cleared frame");
        self.chunks.clear();
    }

    /// Get total memory usage of all chunks.
    pub fn memory_usage(&self) -> usize {
        self.chunks.values().map(Chunk::memory_usage).sum()
    }
}
