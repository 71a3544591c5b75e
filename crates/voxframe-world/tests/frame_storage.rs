//! Storage behaviour of frames as seen by mesh, physics and streaming code.

use tracing_subscriber::EnvFilter;
use voxframe_world::{Block, Chunk, ChunkPos, Frame, FrameConfig, LocalPos, Sqt, VoxelPos};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn assert_no_empty_chunks(frame: &Frame) {
    for (pos, chunk) in frame.chunks() {
        assert!(!chunk.is_empty(), "empty chunk stored at {pos}");
    }
}

#[test]
fn filling_and_clearing_a_region_leaves_no_chunks() {
    init_tracing();
    let mut frame = Frame::new();

    let range = -20..20;
    for x in range.clone().step_by(3) {
        for y in range.clone().step_by(5) {
            for z in range.clone().step_by(7) {
                frame.set_block(x, y, z, Block::with_data(1, (x + y + z) as u32));
                assert_no_empty_chunks(&frame);
            }
        }
    }
    assert_eq!(frame.chunk_count(), 36);

    for x in range.clone().step_by(3) {
        for y in range.clone().step_by(5) {
            for z in range.clone().step_by(7) {
                assert_eq!(frame.block(x, y, z).id, 1);
                frame.set_block(x, y, z, Block::EMPTY);
                assert_no_empty_chunks(&frame);
            }
        }
    }
    assert!(frame.is_empty());
}

#[test]
fn every_voxel_of_a_chunk_round_trips() {
    init_tracing();
    let mut frame = Frame::new();
    let key = ChunkPos::new(-1, 2, -3);

    for index in 0..4096 {
        let local = LocalPos::from_index(index);
        let pos = VoxelPos::from_chunk_local(key, local);
        frame.set_block_at(pos, Block::new(index as u32 + 1));
    }
    assert_eq!(frame.chunk_positions(), vec![key]);
    assert_eq!(frame.chunk(key).map(Chunk::solid_count), Some(4096));

    for index in (0..4096).rev() {
        let pos = VoxelPos::from_chunk_local(key, LocalPos::from_index(index));
        assert_eq!(frame.block_at(pos), Block::new(index as u32 + 1));
        frame.set_block_at(pos, Block::EMPTY);
        assert_eq!(frame.contains_chunk(key), index != 0);
    }
}

#[test]
fn chunks_stream_into_a_new_frame() {
    init_tracing();
    let mut source = Frame::new();
    source.set_block(-1, -1, -1, Block::with_data(3, 1));
    source.set_block(40, 2, 7, Block::new(5));
    source.transform_mut().set_scale(0.5);

    let saved: Vec<(ChunkPos, Vec<Block>)> = source
        .chunks()
        .map(|(pos, chunk)| (pos, chunk.blocks().to_vec()))
        .collect();
    let bytes = bincode::serialize(&saved).unwrap();
    let loaded: Vec<(ChunkPos, Vec<Block>)> = bincode::deserialize(&bytes).unwrap();

    let mut target = Frame::with_config(FrameConfig {
        transform: *source.transform(),
        chunk_capacity: loaded.len(),
    });
    for (pos, blocks) in loaded {
        target
            .insert_chunk(pos, Chunk::from_blocks(&blocks).unwrap())
            .unwrap();
    }

    assert_eq!(target.chunk_count(), 2);
    assert_eq!(target.block(-1, -1, -1), Block::with_data(3, 1));
    assert_eq!(target.block(40, 2, 7), Block::new(5));
    assert_eq!(target.transform(), source.transform());
}

#[test]
fn frame_config_survives_serialization() {
    let config = FrameConfig {
        transform: Sqt::IDENTITY,
        chunk_capacity: 8,
    };
    let bytes = bincode::serialize(&config).unwrap();
    let decoded: FrameConfig = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, config);
    assert_eq!(FrameConfig::default().transform, Sqt::IDENTITY);
}
