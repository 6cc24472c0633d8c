use std::fs;

use arinote::infrastructure::dataset::{PathValidationError, ProjectRootGuard};
use tempfile::TempDir;

fn create_project() -> (TempDir, ProjectRootGuard) {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("b/data/fda")).unwrap();
    fs::create_dir_all(dir.path().join("bx")).unwrap();
    let guard = ProjectRootGuard::new(dir.path().join("b")).unwrap();
    (dir, guard)
}

#[test]
fn given_path_inside_root_when_validating_then_accepted() {
    let (_dir, guard) = create_project();

    let resolved = guard.validate(guard.root().join("data/fda")).unwrap();

    assert!(resolved.starts_with(guard.root()));
}

#[test]
fn given_root_itself_when_validating_then_accepted() {
    let (_dir, guard) = create_project();
    assert_eq!(guard.validate(guard.root()).unwrap(), guard.root());
}

#[test]
fn given_nonexistent_path_inside_root_when_validating_then_accepted() {
    let (_dir, guard) = create_project();

    let resolved = guard
        .validate(guard.root().join("data/fda/processed/new"))
        .unwrap();

    assert_eq!(resolved, guard.root().join("data/fda/processed/new"));
}

#[test]
fn given_parent_dir_escape_when_validating_then_rejected() {
    let (_dir, guard) = create_project();

    let result = guard.validate(guard.root().join("data/../../outside.json"));

    assert!(matches!(result, Err(PathValidationError::OutsideRoot { .. })));
}

#[test]
fn given_escape_through_missing_dirs_when_validating_then_rejected() {
    let (_dir, guard) = create_project();

    let result = guard.validate(guard.root().join("missing/../../../etc/passwd"));

    assert!(matches!(result, Err(PathValidationError::OutsideRoot { .. })));
}

#[test]
fn given_absolute_path_outside_root_when_validating_then_rejected() {
    let (dir, guard) = create_project();
    let outside = dir.path().join("elsewhere.json");

    assert!(matches!(
        guard.validate(outside),
        Err(PathValidationError::OutsideRoot { .. })
    ));
}

#[test]
fn given_sibling_sharing_root_prefix_when_validating_then_rejected() {
    let (dir, guard) = create_project();

    let result = guard.validate(dir.path().join("bx/data.json"));

    assert!(matches!(result, Err(PathValidationError::OutsideRoot { .. })));
}

#[cfg(unix)]
#[test]
fn given_symlink_leaving_root_when_validating_then_rejected() {
    let (dir, guard) = create_project();
    std::os::unix::fs::symlink(dir.path().join("bx"), guard.root().join("link")).unwrap();

    let result = guard.validate(guard.root().join("link/data.json"));

    assert!(matches!(result, Err(PathValidationError::OutsideRoot { .. })));
}

#[test]
fn given_missing_root_when_creating_guard_then_unresolvable() {
    let dir = TempDir::new().unwrap();

    let result = ProjectRootGuard::new(dir.path().join("does-not-exist"));

    assert!(matches!(result, Err(PathValidationError::Unresolvable { .. })));
}

#[cfg(unix)]
#[test]
fn given_dangling_symlink_leaving_root_when_validating_then_rejected() {
    let (dir, guard) = create_project();
    std::os::unix::fs::symlink(dir.path().join("bx/new.json"), guard.root().join("link")).unwrap();

    let result = guard.validate(guard.root().join("link"));

    assert!(matches!(result, Err(PathValidationError::OutsideRoot { .. })));
}

#[cfg(unix)]
#[test]
fn given_dangling_relative_symlink_reached_through_parent_dir_when_validating_then_rejected() {
    let (_dir, guard) = create_project();
    std::os::unix::fs::symlink("../../bx/new.json", guard.root().join("data/link")).unwrap();

    let result = guard.validate(guard.root().join("missing/../data/link"));

    assert!(matches!(result, Err(PathValidationError::OutsideRoot { .. })));
}

#[cfg(unix)]
#[test]
fn given_dangling_symlink_staying_in_root_when_validating_then_resolves_to_target() {
    let (_dir, guard) = create_project();
    std::os::unix::fs::symlink("data/fda/new.json", guard.root().join("link")).unwrap();

    let resolved = guard.validate(guard.root().join("link")).unwrap();

    assert_eq!(resolved, guard.root().join("data/fda/new.json"));
}

#[cfg(unix)]
#[test]
fn given_symlink_loop_when_validating_then_unresolvable() {
    let (_dir, guard) = create_project();
    std::os::unix::fs::symlink("loop-b", guard.root().join("loop-a")).unwrap();
    std::os::unix::fs::symlink("loop-a", guard.root().join("loop-b")).unwrap();

    let result = guard.validate(guard.root().join("loop-a/file.json"));

    assert!(matches!(result, Err(PathValidationError::Unresolvable { .. })));
}
