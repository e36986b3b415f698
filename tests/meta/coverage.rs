//! Checks that `tests/unit` mirrors `src` one file per source file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    /// Harness and module files carry no tests of their own
    fn is_structural(file_name: &str) -> bool {
        matches!(file_name, "main.rs" | "lib.rs" | "mod.rs")
    }

    /// Relative paths of every directory and `.rs` file under `dir`
    fn mirror_paths(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_| io::Error::other("entry outside scanned tree"))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative);
                mirror_paths(&path, base, paths)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn collect(root: &str) -> BTreeSet<String> {
        let root = Path::new(root);
        let mut paths = BTreeSet::new();
        if let Err(error) = mirror_paths(root, root, &mut paths) {
            panic!("failed to scan {}: {error}", root.display());
        }
        paths
    }

    fn file_name(relative: &str) -> &str {
        relative.rsplit('/').next().unwrap_or(relative)
    }

    // Tests every source file has a unit test file at the mirrored path
    // Verified by adding a source file with no test counterpart
    #[test]
    fn test_src_files_have_unit_tests() {
        let tests = collect(UNIT_DIR);
        let missing: Vec<String> = collect(SRC_DIR)
            .into_iter()
            .filter(|path| !is_structural(file_name(path)) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests every unit test file still has a source file to cover
    // Verified by deleting a source file and keeping its tests
    #[test]
    fn test_unit_tests_have_src_counterparts() {
        let sources = collect(SRC_DIR);
        let orphaned: Vec<String> = collect(UNIT_DIR)
            .into_iter()
            .filter(|path| file_name(path) != "mod.rs" && !sources.contains(path))
            .map(|path| format!("  - {UNIT_DIR}/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit tests without source files:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests no test file under tests/ is left without a #[test] function
    // Verified by adding an empty test file
    #[test]
    fn test_test_files_contain_tests() {
        let mut empty = Vec::new();
        for path in collect("tests") {
            let full = Path::new("tests").join(&path);
            if !full.is_file() || is_structural(file_name(&path)) {
                continue;
            }
            match fs::read_to_string(&full) {
                Ok(content) if content.contains("#[test]") => {}
                Ok(_) => empty.push(format!("  - {}", full.display())),
                Err(error) => panic!("failed to read {}: {error}", full.display()),
            }
        }

        assert!(
            empty.is_empty(),
            "test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
