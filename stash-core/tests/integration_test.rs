//! Integration tests for the complete add → pack → save → load → extract flow

use bytes::Bytes;
use stash_core::{
    extract::{extract, extract_file},
    file::{load, save},
    Archive, BufferConfig, ByteOrder, StashError, TextEncoding,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_full_workflow_clean() {
    let dir = tempdir().unwrap();

    // Step 1: Build an archive from files on disk
    let content = dir.path().join("content");
    fs::create_dir(&content).unwrap();
    fs::write(content.join("a.txt"), b"hello").unwrap();
    fs::write(content.join("b.bin"), [0u8, 1, 2, 255]).unwrap();

    let mut archive = Archive::new("hello_world");
    for name in ["a.txt", "b.bin"] {
        let path = content.join(name);
        let data = fs::read(&path).unwrap();
        archive
            .add_entry(path.to_string_lossy().into_owned(), data)
            .unwrap();
    }

    // Step 2: Save; pack happens implicitly
    let path = save(&mut archive, dir.path(), "content.bin").unwrap();
    assert!(archive.is_sealed());

    // Step 3: Load it back
    let loaded = load(&path, BufferConfig::default()).unwrap();
    assert_eq!(loaded.name(), "hello_world");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.entries(), archive.entries());

    // Step 4: Extract from the object and straight from the file
    let parsed = dir.path().join("parsed");
    let written = extract(&loaded, &parsed).unwrap();
    assert_eq!(written.len(), 2);
    assert_eq!(fs::read(parsed.join("a.txt")).unwrap(), b"hello");
    assert_eq!(fs::read(parsed.join("b.bin")).unwrap(), [0u8, 1, 2, 255]);

    let again = dir.path().join("parsed_again");
    extract_file(&path, &again, BufferConfig::default()).unwrap();
    assert_eq!(fs::read(again.join("a.txt")).unwrap(), b"hello");
}

#[test]
fn test_demo_scenario_bytes() {
    let mut archive = Archive::new("demo");
    archive.add_entry("a.txt", Bytes::from_static(b"hello")).unwrap();
    archive.add_entry("b.bin", Bytes::from_static(b"\x00\x01\x02")).unwrap();
    archive.pack().unwrap();

    let data = archive.data().unwrap();
    assert_eq!(
        &data[..12],
        &[0x04, 0x00, 0x00, 0x00, 0x64, 0x65, 0x6D, 0x6F, 0x02, 0x00, 0x00, 0x00]
    );

    let decoded = Archive::from_bytes(data.clone(), BufferConfig::default()).unwrap();
    assert_eq!(decoded.name(), "demo");
    let names: Vec<_> = decoded.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["a.txt", "b.bin"]);
    assert_eq!(decoded.entries()[1].content.as_ref(), b"\x00\x01\x02");
}

#[test]
fn test_duplicate_names_preserved() {
    let mut archive = Archive::new("dupes");
    archive.add_entry("same", Bytes::from_static(b"one")).unwrap();
    archive.add_entry("same", Bytes::from_static(b"two")).unwrap();
    archive.pack().unwrap();

    let data = archive.data().unwrap().clone();
    let decoded = Archive::from_bytes(data, BufferConfig::default()).unwrap();
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded.entries()[0].content.as_ref(), b"one");
    assert_eq!(decoded.entries()[1].content.as_ref(), b"two");
}

#[test]
fn test_every_truncation_fails() {
    let mut archive = Archive::new("truncate me");
    archive.add_entry("first", Bytes::from_static(b"abcdef")).unwrap();
    archive.add_entry("", Bytes::new()).unwrap();
    archive.add_entry("third", Bytes::from_static(b"\x00")).unwrap();
    archive.pack().unwrap();

    let data = archive.data().unwrap();
    for cut in 0..data.len() {
        let result = Archive::from_bytes(data.slice(..cut), BufferConfig::default());
        assert!(
            matches!(
                result,
                Err(StashError::BufferUnderflow { .. }) | Err(StashError::Format(_))
            ),
            "truncation at {} decoded as {:?}",
            cut,
            result
        );
    }
}

#[test]
fn test_wrong_config_is_detected() {
    let config = BufferConfig::new(ByteOrder::Big, TextEncoding::Utf8);
    let mut archive = Archive::with_config("endian", config);
    archive.add_entry("x", Bytes::from_static(b"y")).unwrap();
    archive.pack().unwrap();

    // Big-endian length 6 reads as 0x06000000 little-endian
    let result = Archive::from_bytes(archive.data().unwrap().clone(), BufferConfig::default());
    assert!(matches!(result, Err(StashError::BufferUnderflow { .. })));
}

#[test]
fn test_corrupted_load_reports_format() {
    let dir = tempdir().unwrap();
    let mut archive = Archive::new("tail");
    archive.add_entry("x", Bytes::from_static(b"y")).unwrap();
    archive.pack().unwrap();

    let mut bytes = archive.data().unwrap().to_vec();
    bytes.extend_from_slice(b"junk");
    let path = dir.path().join("tail.bin");
    fs::write(&path, &bytes).unwrap();

    let result = load(&path, BufferConfig::default());
    assert!(matches!(result, Err(StashError::Format(_))));
}
