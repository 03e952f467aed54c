//! Integration tests wiring `ScaffoldService` to the in-memory adapters.

use std::path::Path;

use chrono::NaiveDate;
use mkpost_adapters::{FixedClock, MemoryFilesystem};
use mkpost_core::{
    application::{ApplicationError, ScaffoldService},
    error::MkpostError,
};

fn march_5_service(fs: &MemoryFilesystem) -> ScaffoldService {
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    ScaffoldService::new(Box::new(fs.clone()), Box::new(FixedClock::new(date)))
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn scaffold_writes_full_template_into_empty_directory() {
    let fs = MemoryFilesystem::new();
    fs.add_dir("/content");

    let post = march_5_service(&fs)
        .scaffold("hello world", "/content", &tags(&["Python", "Pelican"]), "md")
        .unwrap();

    assert_eq!(post.path, Path::new("/content/2024-03-05_hello-world.md"));
    let content = fs.read_file(&post.path).unwrap();
    assert_eq!(
        content,
        "Title: Hello World\n\
         Date: 2024-03-05\n\
         Tags: Python, Pelican\n\
         Slug: hello-world\n\
         \n\
         Text here\n\
         \n"
    );
}

#[test]
fn scaffold_collapses_punctuation_into_clean_slug() {
    let fs = MemoryFilesystem::new();
    fs.add_dir("/content");

    let post = march_5_service(&fs)
        .scaffold("  PYTHON   tips & tricks!!", "/content", &[], "md")
        .unwrap();

    assert_eq!(post.slug, "python-tips-tricks");
    assert_eq!(post.path, Path::new("/content/2024-03-05_python-tips-tricks.md"));
}

#[test]
fn second_scaffold_same_day_same_title_conflicts() {
    let fs = MemoryFilesystem::new();
    fs.add_dir("/content");
    let service = march_5_service(&fs);

    service.scaffold("hello world", "/content", &[], "md").unwrap();
    let before = fs.read_file(Path::new("/content/2024-03-05_hello-world.md")).unwrap();

    let err = service.scaffold("hello world", "/content", &[], "md").unwrap_err();

    assert!(matches!(
        err,
        MkpostError::Application(ApplicationError::AlreadyExists { .. })
    ));
    // First file untouched.
    let after = fs.read_file(Path::new("/content/2024-03-05_hello-world.md")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn missing_directory_creates_nothing() {
    let fs = MemoryFilesystem::new();

    let err = march_5_service(&fs)
        .scaffold("hello world", "/content", &[], "md")
        .unwrap_err();

    assert!(matches!(
        err,
        MkpostError::Application(ApplicationError::NotADirectory { .. })
    ));
    assert!(fs.list_files().is_empty());
}
