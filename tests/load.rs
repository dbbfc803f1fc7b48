mod common;

use common::*;
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;
use mcsave::{load, load_with, world_info, DecodeOptions, ErrorCategory, NbtError, Locale};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mcsave_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn level_bytes() -> Vec<u8> {
    let mut level = LevelBuilder::new();
    level.string("LevelName", "Loaded");
    level.build()
}

fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

#[test]
fn loads_gzip_level_dat_from_world_dir() {
    let dir = temp_dir("gzip");
    fs::write(dir.join("level.dat"), gzip(&level_bytes())).unwrap();

    let doc = load(&dir).unwrap();
    assert_eq!(world_info(&doc).name, "Loaded");

    let doc = load(dir.join("level.dat")).unwrap();
    assert_eq!(world_info(&doc).name, "Loaded");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn loads_zlib_and_uncompressed() {
    let dir = temp_dir("zlib_raw");

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&level_bytes()).unwrap();
    fs::write(dir.join("zlib.dat"), encoder.finish().unwrap()).unwrap();
    fs::write(dir.join("raw.dat"), level_bytes()).unwrap();

    assert_eq!(world_info(&load(dir.join("zlib.dat")).unwrap()).name, "Loaded");
    assert_eq!(world_info(&load(dir.join("raw.dat")).unwrap()).name, "Loaded");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_file_reports_not_found() {
    let err = load(temp_dir("missing").join("nope").join("level.dat")).unwrap_err();
    assert!(matches!(err, NbtError::Io(_)));
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert_eq!(err.user_message(Locale::En), "save file not found");
}

#[test]
fn truncated_gzip_is_decompression_error() {
    let dir = temp_dir("truncated");
    let mut compressed = gzip(&level_bytes());
    compressed.truncate(compressed.len() / 2);
    fs::write(dir.join("level.dat"), compressed).unwrap();

    let err = load(&dir).unwrap_err();
    assert!(matches!(err, NbtError::Decompression(_)));
    assert_eq!(err.category(), ErrorCategory::Corrupt);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn load_with_respects_options() {
    let dir = temp_dir("options");
    fs::write(dir.join("level.dat"), gzip(&level_bytes())).unwrap();

    let strict = DecodeOptions {
        max_depth: 1,
        ..DecodeOptions::default()
    };
    assert!(matches!(
        load_with(&dir, &strict),
        Err(NbtError::MaxDepthExceeded(1))
    ));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn documents_can_be_shared_across_threads() {
    let doc = mcsave::decode(&level_bytes()).unwrap();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(world_info(&doc).name, "Loaded"));
        }
    });
}
