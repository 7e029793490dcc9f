use litdoc::constants::IGNORE_FILE;
use litdoc::error::Error;
use litdoc::ignore::parse_ignore_file;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_parse_ignore_file() {
    let temp_dir = TempDir::new().unwrap();
    let ignore_path = temp_dir.path().join(IGNORE_FILE);

    // Without an ignore file only the defaults apply
    let glob_set = parse_ignore_file(&ignore_path).unwrap();
    assert!(glob_set.is_match(".git/config"));
    assert!(glob_set.is_match("guide/.DS_Store"));
    assert!(glob_set.is_match("litdoc.yml"));
    assert!(!glob_set.is_match("drafts/todo.md"));

    let mut file = File::create(&ignore_path).unwrap();
    writeln!(file, "# drafts are private\ndrafts/**\n\n*.tmp.md").unwrap();

    let glob_set = parse_ignore_file(&ignore_path).unwrap();
    assert!(glob_set.is_match("drafts/todo.md"));
    assert!(glob_set.is_match("notes.tmp.md"));
    assert!(glob_set.is_match(".git/HEAD"));
    assert!(!glob_set.is_match("guide/intro.md"));
}

#[test]
fn test_invalid_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let ignore_path = temp_dir.path().join(IGNORE_FILE);
    std::fs::write(&ignore_path, "drafts/[a-\n").unwrap();

    assert!(matches!(parse_ignore_file(&ignore_path), Err(Error::IgnoreError(_))));
}
