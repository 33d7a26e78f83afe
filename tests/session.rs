//! The file-selection loop against a real directory.

use h5browse::data::{DType, Cell, MemoryFile};
use h5browse::file_browser::Session;
use h5browse::ui::{Console, Theme};
use h5browse::{BrowseError, Config};
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};

fn run_session(
    dir: &Path,
    input: &str,
    mut open: impl FnMut(&Path) -> h5browse::Result<MemoryFile>,
) -> String {
    let config = Config::default().with_data_dir(dir);
    let mut console = Console::new(Cursor::new(input.to_string()), Vec::new(), Theme::plain());
    Session::new(config, |path: &Path| open(path))
        .run(&mut console)
        .unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

fn sample() -> MemoryFile {
    MemoryFile::new().with_dataset("/x", &[1], DType::Int { bits: 32, signed: true }, vec![Cell::Int(7)])
}

#[test]
fn leaving_the_root_returns_to_the_listing() {
    let dir = tempfile::tempdir().unwrap();
    File::create(dir.path().join("a.h5")).unwrap();
    File::create(dir.path().join("b.h5")).unwrap();
    File::create(dir.path().join("readme.txt")).unwrap();

    let mut opened: Vec<PathBuf> = Vec::new();
    let out = run_session(dir.path(), "2\nq\n1\nexit\n", |path| {
        opened.push(path.to_path_buf());
        Ok(sample())
    });

    let names: Vec<_> = opened.iter().filter_map(|p| p.file_name()).collect();
    assert_eq!(names, vec!["b.h5", "a.h5"]);
    assert!(out.contains("  1. a.h5"));
    assert!(!out.contains("readme.txt"));
    assert!(out.contains("Selected file: 'b.h5'"));
    assert!(out.contains("Selected file: 'a.h5'"));
    assert_eq!(out.matches("--- Select a .h5 file to browse ---").count(), 2);
    assert!(out.trim_end().ends_with("Exiting."));
}

#[test]
fn empty_directory_waits_for_retry() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_session(dir.path(), "\n", |_| Ok(sample()));

    assert_eq!(out.matches("no '.h5' files found").count(), 2);
    assert_eq!(out.matches("Press Enter to retry").count(), 2);
    assert!(out.contains("end input (Ctrl+D) to quit"));
    assert!(!out.contains("Ctrl+C"));
}

#[test]
fn bad_choices_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    File::create(dir.path().join("only.h5")).unwrap();

    let out = run_session(dir.path(), "9\n0\n-2\nabc\nEXIT\n", |_| Ok(sample()));
    assert!(out.contains("Invalid number 9: choose between 1 and 1."));
    assert!(out.contains("Invalid number 0: choose between 1 and 1."));
    assert!(out.contains("Invalid number -2: choose between 1 and 1."));
    assert!(out.contains("Invalid input 'abc'"));
    assert!(!out.contains("Selected file"));
}

#[test]
fn open_failures_go_back_to_the_listing() {
    let dir = tempfile::tempdir().unwrap();
    File::create(dir.path().join("broken.h5")).unwrap();

    let out = run_session(dir.path(), "1\nexit\n", |path| {
        Err(BrowseError::file_open(path.to_path_buf(), "not an HDF5 file"))
    });
    assert!(out.contains("Failed to open file"));
    assert!(out.contains("not an HDF5 file"));
    assert_eq!(out.matches("--- Select a .h5 file to browse ---").count(), 2);
}

#[test]
fn exit_inside_a_file_ends_the_session() {
    let dir = tempfile::tempdir().unwrap();
    File::create(dir.path().join("a.h5")).unwrap();

    let out = run_session(dir.path(), "1\n1\nexit\n", |_| Ok(sample()));
    assert!(out.contains("--- Current path: /x ---"));
    assert!(out.contains("(1 of 1 shown)"));
    assert_eq!(out.matches("--- Select a .h5 file to browse ---").count(), 1);
}
