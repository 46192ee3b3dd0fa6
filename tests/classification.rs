use junksweep::core::classifier::{classify, UserDirectories};
use junksweep::core::matcher::RootMatchers;
use junksweep::core::walker::walk_root;
use junksweep::utils::filesystem::{to_slash, with_trailing_slash};
use std::fs;
use tempfile::tempdir;

fn root_of(dir: &tempfile::TempDir) -> String {
    with_trailing_slash(to_slash(dir.path()))
}

#[test]
fn desktop_ini_is_kept_only_at_the_top_of_a_user_folder() {
    let dir = tempdir().unwrap();
    let root = root_of(&dir);
    fs::create_dir_all(dir.path().join("Users/alice/sub")).unwrap();
    fs::write(dir.path().join("Users/alice/Desktop.ini"), "[.ShellClassInfo]").unwrap();
    fs::write(dir.path().join("Users/alice/sub/Desktop.ini"), "[.ShellClassInfo]").unwrap();
    fs::write(dir.path().join("Users/Desktop.ini"), "[.ShellClassInfo]").unwrap();

    let user_dirs = UserDirectories::from_paths([format!("{}Users/alice/", root)]);
    let matchers = RootMatchers::compile(&root).unwrap();
    let tree = walk_root(&root).unwrap();
    let mut result = classify(&matchers, &tree, &user_dirs);
    result.matched_files.sort();

    assert_eq!(
        result.matched_files,
        vec![format!("{}Users/Desktop.ini", root), format!("{}Users/alice/sub/Desktop.ini", root)]
    );
}

#[test]
fn mixed_os_junk_is_partitioned_by_kind() {
    let dir = tempdir().unwrap();
    let root = root_of(&dir);
    for d in [".Spotlight-V100", ".fseventsd", "work/.Trash-1000/files", "System Volume Information", "FOUND.000"] {
        fs::create_dir_all(dir.path().join(d)).unwrap();
    }
    for f in ["work/.DS_Store", "work/notes.txt", "work/notes.txt~", "work/~$budget.xlsx", "work/.nfs0000abcd", "DumpStack.log"] {
        fs::write(dir.path().join(f), "x").unwrap();
    }

    let matchers = RootMatchers::compile(&root).unwrap();
    let tree = walk_root(&root).unwrap();
    let mut result = classify(&matchers, &tree, &UserDirectories::default());
    result.dedup();
    result.matched_directories.sort();
    result.matched_files.sort();

    let mut expected_dirs: Vec<String> = [".Spotlight-V100/", ".fseventsd/", "FOUND.000/", "System Volume Information/", "work/.Trash-1000/"]
        .iter()
        .map(|d| format!("{}{}", root, d))
        .collect();
    expected_dirs.sort();
    assert_eq!(result.matched_directories, expected_dirs);

    // `.DS_Store` is a directory rule; a plain `.DS_Store` file is not matched.
    let mut expected_files: Vec<String> = ["DumpStack.log", "work/.nfs0000abcd", "work/notes.txt~", "work/~$budget.xlsx"]
        .iter()
        .map(|f| format!("{}{}", root, f))
        .collect();
    expected_files.sort();
    assert_eq!(result.matched_files, expected_files);
}

#[test]
fn rescanning_an_unchanged_tree_gives_the_same_result() {
    let dir = tempdir().unwrap();
    let root = root_of(&dir);
    fs::create_dir_all(dir.path().join("a/.AppleDouble")).unwrap();
    fs::write(dir.path().join("a/Thumbs.db"), "x").unwrap();

    let matchers = RootMatchers::compile(&root).unwrap();
    let first = classify(&matchers, &walk_root(&root).unwrap(), &UserDirectories::default());
    let second = classify(&matchers, &walk_root(&root).unwrap(), &UserDirectories::default());
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}
