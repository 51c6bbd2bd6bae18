use std::fs;
use std::path::Path;

use moviehub::{canonicalize_or_current, infer_app_name};
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_resolves_existing_relative_path() {
    let original = std::env::current_dir().expect("cwd");
    let tmp = tempdir().expect("tempdir");
    let subdir = tmp.path().join("nested");
    fs::create_dir_all(&subdir).expect("create nested");
    std::env::set_current_dir(tmp.path()).expect("chdir tmp");

    let result = canonicalize_or_current("nested").expect("canonicalize nested");
    assert_eq!(result, subdir.canonicalize().expect("canonicalize subdir"));

    std::env::set_current_dir(original).expect("restore cwd");
}

#[test]
fn canonicalize_or_current_joins_missing_path_onto_cwd() {
    let result = canonicalize_or_current("does-not-exist-yet").expect("resolve");
    assert!(result.is_absolute());
    assert!(result.ends_with("does-not-exist-yet"));
}

#[test]
fn infer_app_name_uses_last_path_component() {
    assert_eq!(infer_app_name(Path::new("/home/me/movies")), "movies");
    assert_eq!(infer_app_name(Path::new("/")), "moviehub");
}
