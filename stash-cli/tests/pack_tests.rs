use std::fs;
use tempfile::tempdir;

use stash_cli::{buffer_config, commands::pack, EncodingArg};
use stash_core::{file, BufferConfig, ByteOrder};

fn write_inputs(dir: &std::path::Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("b.bin"), [0u8, 1, 2]).unwrap();
    fs::write(dir.join("a.txt"), b"hello").unwrap();
    fs::create_dir(dir.join("nested")).unwrap();
    fs::write(dir.join("nested").join("skipped.txt"), b"no").unwrap();
}

#[test]
fn pack_directory_basic() {
    let td = tempdir().unwrap();
    let in_dir = td.path().join("content");
    let out_path = td.path().join("content.bin");
    write_inputs(&in_dir);

    pack::execute(
        in_dir.to_str().unwrap(),
        out_path.to_str().unwrap(),
        "hello_world",
        BufferConfig::default(),
        /*compress*/ false,
        /*progress*/ false,
    )
    .unwrap();

    let archive = file::load(&out_path, BufferConfig::default()).unwrap();
    assert_eq!(archive.name(), "hello_world");
    assert_eq!(archive.len(), 2);

    // sorted by path, names keep the discovered path
    let first = &archive.entries()[0];
    assert!(first.name.ends_with("a.txt"));
    assert_eq!(first.content.as_ref(), b"hello");
    assert!(archive.entries()[1].name.ends_with("b.bin"));
}

#[test]
fn pack_compressed_big_endian_with_progress() {
    let td = tempdir().unwrap();
    let in_dir = td.path().join("content");
    let out_path = td.path().join("content.bin.z");
    write_inputs(&in_dir);

    let config = buffer_config(true, EncodingArg::Utf16);
    assert_eq!(config.byte_order, ByteOrder::Big);

    pack::execute(
        in_dir.to_str().unwrap(),
        out_path.to_str().unwrap(),
        "squeezed",
        config,
        /*compress*/ true,
        /*progress*/ true,
    )
    .unwrap();

    assert!(file::load(&out_path, config).is_err());
    let archive = file::load_compressed(&out_path, config).unwrap();
    assert_eq!(archive.name(), "squeezed");
    assert_eq!(archive.len(), 2);
}

#[test]
fn pack_missing_input_directory_fails() {
    let td = tempdir().unwrap();
    let result = pack::execute(
        td.path().join("absent").to_str().unwrap(),
        td.path().join("out.bin").to_str().unwrap(),
        "none",
        BufferConfig::default(),
        false,
        false,
    );
    assert!(result.is_err());
}

#[test]
fn pack_ascii_rejects_non_ascii_file_name() {
    let td = tempdir().unwrap();
    let in_dir = td.path().join("content");
    fs::create_dir(&in_dir).unwrap();
    fs::write(in_dir.join("café.txt"), b"latte").unwrap();

    let result = pack::execute(
        in_dir.to_str().unwrap(),
        td.path().join("out.bin").to_str().unwrap(),
        "ascii",
        buffer_config(false, EncodingArg::Ascii),
        false,
        false,
    );
    assert!(result.is_err());
    assert!(!td.path().join("out.bin").exists());
}
