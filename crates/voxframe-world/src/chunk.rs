//! Chunk data structure for frame voxel storage.

use voxframe_core::constants::CHUNK_VOLUME;
use voxframe_core::coords::LocalPos;
use voxframe_core::error::{Error, Result};
use voxframe_core::types::Block;

/// A single chunk of block data (16x16x16 voxels).
///
/// Chunks have no identity of their own; the frame owning them keys each one
/// by its [`ChunkPos`](voxframe_core::ChunkPos).
#[derive(Clone, PartialEq, Eq)]
pub struct Chunk {
    blocks: Box<[Block; CHUNK_VOLUME]>,
}

impl Chunk {
    /// Create a chunk filled with empty blocks.
    pub fn new() -> Self {
        Self {
            blocks: Box::new([Block::EMPTY; CHUNK_VOLUME]),
        }
    }

    /// Create a chunk from a flat slice laid out in [`LocalPos::to_index`]
    /// order.
    pub fn from_blocks(blocks: &[Block]) -> Result<Self> {
        let blocks: Box<[Block; CHUNK_VOLUME]> = blocks
            .to_vec()
            .into_boxed_slice()
            .try_into()
            .map_err(|b: Box<[Block]>| {
                Error::InvalidData(format!(
                    "chunk needs {CHUNK_VOLUME} blocks, got {}",
                    b.len()
                ))
            })?;
        Ok(Self { blocks })
    }

    /// Get the block at a local position.
    #[inline]
    pub fn get(&self, pos: LocalPos) -> Block {
        self.blocks[pos.to_index()]
    }

    /// Set the block at a local position, returning the previous block.
    #[inline]
    pub fn set(&mut self, pos: LocalPos, block: Block) -> Block {
        std::mem::replace(&mut self.blocks[pos.to_index()], block)
    }

    /// Check if every block in the chunk is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(Block::is_empty)
    }

    /// Count the non-empty blocks.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }

    /// Flat view of the blocks in [`LocalPos::to_index`] order.
    pub fn blocks(&self) -> &[Block] {
        self.blocks.as_slice()
    }

    /// Iterate over every position in the chunk with its block.
    pub fn iter(&self) -> impl Iterator<Item = (LocalPos, Block)> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .map(|(index, block)| (LocalPos::from_index(index), *block))
    }

    /// Get memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + std::mem::size_of::<[Block; CHUNK_VOLUME]>()
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("solid_count", &self.solid_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chunk_is_empty() {
        let chunk = Chunk::new();
        assert!(chunk.is_empty());
        assert_eq!(chunk.solid_count(), 0);
        assert_eq!(chunk.blocks().len(), CHUNK_VOLUME);
    }

    #[test]
    fn set_and_get() {
        let mut chunk = Chunk::new();
        let pos = LocalPos::new(5, 5, 6);
        let previous = chunk.set(pos, Block::with_data(1, 9));
        assert_eq!(previous, Block::EMPTY);
        assert_eq!(chunk.get(pos), Block::with_data(1, 9));
        assert!(!chunk.is_empty());
        assert_eq!(chunk.solid_count(), 1);

        chunk.set(pos, Block::EMPTY);
        assert!(chunk.is_empty());
    }

    #[test]
    fn empty_id_with_data_is_still_empty() {
        let mut chunk = Chunk::new();
        chunk.set(LocalPos::new(0, 0, 0), Block::with_data(0, 3));
        assert!(chunk.is_empty());
    }

    #[test]
    fn from_blocks_checks_length() {
        assert!(matches!(
            Chunk::from_blocks(&[Block::new(1); 10]),
            Err(Error::InvalidData(_))
        ));

        let mut blocks = vec![Block::EMPTY; CHUNK_VOLUME];
        blocks[LocalPos::new(1, 2, 3).to_index()] = Block::new(4);
        let chunk = Chunk::from_blocks(&blocks).unwrap();
        assert_eq!(chunk.get(LocalPos::new(1, 2, 3)), Block::new(4));
        assert_eq!(chunk.blocks(), blocks.as_slice());
    }

    #[test]
    fn iter_yields_positions_in_index_order() {
        let mut chunk = Chunk::new();
        chunk.set(LocalPos::new(15, 15, 15), Block::new(2));
        let solids: Vec<_> = chunk.iter().filter(|(_, b)| b.is_solid()).collect();
        assert_eq!(solids, vec![(LocalPos::new(15, 15, 15), Block::new(2))]);
        assert_eq!(chunk.iter().count(), CHUNK_VOLUME);
    }
}
