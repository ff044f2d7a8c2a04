use treedoc::{
    BINARY_PLACEHOLDER,
    CONTENT_MARKER,
    DocError,
    Document,
    ExclusionPolicy,
    FileBlock,
    FileContent,
    OutputFormat,
    Preset,
    output,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
#[test]
fn test_backend_preset_rules() {
    let policy = Preset::Backend.policy();
    assert!(policy.excludes_file(".env"));
    assert!(policy.excludes_file(".DS_Store"));
    assert!(policy.excludes_file("module.pyc"));
    assert!(policy.excludes_file("server.log"));
    assert!(!policy.excludes_file("main.py"));
    assert!(!policy.excludes_file("local.env"));
    assert!(policy.excludes_dir_name("venv"));
    assert!(policy.excludes_dir_name("__pycache__"));
    assert!(!policy.excludes_dir_name("venvs"));
    assert_eq!(Preset::Backend.subdir(), None);
}
#[test]
fn test_frontend_preset_rules() {
    let policy = Preset::Frontend.policy();
    assert!(policy.excludes_file("logo.png"));
    assert!(policy.excludes_file("package.json"));
    assert!(policy.excludes_file("favicon.ico"));
    assert!(!policy.excludes_file("App.js"));
    assert!(!policy.excludes_file(".env"));
    assert!(policy.directories.is_empty());
    assert_eq!(Preset::Frontend.subdir(), Some(PathBuf::from("src")));
}
#[test]
fn test_dir_path_matches_components_only() {
    let policy = ExclusionPolicy::new().exclude_dir("venv");
    assert!(policy.excludes_dir_path(Path::new("/work/venv/lib")));
    assert!(policy.excludes_dir_path(Path::new("/venv")));
    assert!(!policy.excludes_dir_path(Path::new("/work/myvenv/lib")));
    assert!(!ExclusionPolicy::new().excludes_dir_path(Path::new("/work/venv")));
}
#[test]
fn test_merge_policies() {
    let merged = ExclusionPolicy::new()
        .exclude_file("a")
        .merge(ExclusionPolicy::new().exclude_extension(".b").exclude_dir("c"));
    assert!(merged.excludes_file("a"));
    assert!(merged.excludes_file("x.b"));
    assert!(merged.excludes_dir_name("c"));
}
#[test]
fn test_policy_from_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("policy.json");
    fs::write(&path, r#"{"extensions": [".md"], "directories": ["target"]}"#).unwrap();
    let policy = ExclusionPolicy::from_json_file(&path).unwrap();
    assert!(policy.excludes_file("README.md"));
    assert!(policy.excludes_dir_name("target"));
    assert!(policy.files.is_empty());
}
#[test]
fn test_policy_from_invalid_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("policy.json");
    fs::write(&path, "{ not json").unwrap();
    let err = ExclusionPolicy::from_json_file(&path).unwrap_err();
    assert!(matches!(err, DocError::Policy { .. }));
}
#[test]
fn test_placeholders() {
    assert_eq!(FileContent::Text("abc".into()).as_segment(), "abc");
    assert_eq!(FileContent::Binary.as_segment(), BINARY_PLACEHOLDER);
    assert_eq!(
        FileContent::Unreadable("Permission denied".into()).as_segment(),
        "// [Error reading file: Permission denied]\n"
    );
}
#[test]
fn test_policy_rejects_misspelled_key() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("policy.json");
    fs::write(&path, r#"{"directory": ["target"]}"#).unwrap();
    let err = ExclusionPolicy::from_json_file(&path).unwrap_err();
    match err {
        DocError::Policy { source, .. } => assert!(source.to_string().contains("directory")),
        other => panic!("expected policy error, got {:?}", other),
    }
}
#[test]
fn test_unreadable_file_error_names_path() {
    let err = DocError::UnreadableFile {
        path: PathBuf::from("x.bin"),
    };
    assert!(err.to_string().contains("x.bin"));
}
#[test]
fn test_document_segments_layout() {
    let document = Document {
        root: PathBuf::from("/work/root"),
        tree: vec!["root/".into(), "├── a.txt".into()],
        files: vec![FileBlock {
            path: PathBuf::from("/work/root/a.txt"),
            content: FileContent::Text("hello".into()),
        }],
    };
    let segments = document.segments();
    assert_eq!(
        segments,
        vec![
            "root/".to_string(),
            "├── a.txt".to_string(),
            CONTENT_MARKER.to_string(),
            "\n// File: /work/root/a.txt\n".to_string(),
            "hello".to_string(),
        ]
    );
    assert_eq!(
        document.render(),
        "root/\n├── a.txt\n\n\n// Content\n\n\n// File: /work/root/a.txt\n\nhello"
    );
}
#[test]
fn test_json_format_round_trips_document() {
    let document = Document {
        root: PathBuf::from("/work/root"),
        tree: vec!["root/".into(), "├── img.bin".into()],
        files: vec![FileBlock {
            path: PathBuf::from("/work/root/img.bin"),
            content: FileContent::Binary,
        }],
    };
    let json = output::format_document(&document, OutputFormat::Json).unwrap();
    let parsed: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.tree, document.tree);
    assert_eq!(parsed.files[0].content, FileContent::Binary);
    assert_eq!(OutputFormat::Json.extension(), "json");
}
