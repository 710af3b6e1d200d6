#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    // Crate roots and module declarations carry no logic of their own
    fn is_wiring(path: &str) -> bool {
        matches!(path, "main.rs" | "lib.rs") || path.ends_with("mod.rs")
    }

    // Relative paths of every directory and `.rs` file below `root`
    fn tree(root: &str) -> Result<BTreeSet<String>, io::Error> {
        let base = Path::new(root);
        let mut found = BTreeSet::new();
        walk(base, base, &mut found)?;
        Ok(found)
    }

    fn walk(dir: &Path, base: &Path, found: &mut BTreeSet<String>) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Ok(relative) = path.strip_prefix(base) else {
                return Err(io::Error::other(format!(
                    "{} is outside {}",
                    path.display(),
                    base.display()
                )));
            };
            let relative = relative.to_string_lossy().into_owned();

            if path.is_dir() {
                found.insert(relative);
                walk(&path, base, found)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                found.insert(relative);
            }
        }
        Ok(())
    }

    fn mirrored_trees() -> (BTreeSet<String>, BTreeSet<String>) {
        let src = tree(SRC_ROOT)
            .unwrap_or_else(|error| unreachable!("Cannot read {SRC_ROOT}: {error}"));
        let unit = tree(UNIT_ROOT).unwrap_or_default();
        (src, unit)
    }

    // Tests every lattice, io and simulation source file has a unit test file at the same path
    #[test]
    fn test_every_module_has_unit_tests() {
        let (src, unit) = mirrored_trees();

        let untested: Vec<String> = src
            .iter()
            .filter(|path| !is_wiring(path) && !unit.contains(*path))
            .map(|path| format!("  src/{path} needs {UNIT_ROOT}/{path}"))
            .collect();

        assert!(
            untested.is_empty(),
            "Modules without unit tests:\n{}",
            untested.join("\n")
        );
    }

    // Tests no unit test file outlives the module it covered
    #[test]
    fn test_no_orphaned_unit_tests() {
        let (src, unit) = mirrored_trees();

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  {UNIT_ROOT}/{path} has no src/{path}"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without a module:\n{}",
            orphaned.join("\n")
        );
    }

    fn files_without_tests(dir: &Path, missing: &mut Vec<String>) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_dir() {
                files_without_tests(&path, missing)?;
                continue;
            }

            let is_harness_root = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name == "main.rs" || name == "mod.rs");
            if is_harness_root || !path.extension().is_some_and(|ext| ext == "rs") {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                missing.push(format!("  {}", path.display()));
            }
        }
        Ok(())
    }

    // Tests every test file under tests/ declares at least one test
    #[test]
    fn test_test_files_are_not_empty() {
        let mut missing = Vec::new();
        if let Err(error) = files_without_tests(Path::new("tests"), &mut missing) {
            unreachable!("Cannot scan tests: {error}");
        }

        assert!(
            missing.is_empty(),
            "Test files without a #[test]:\n{}",
            missing.join("\n")
        );
    }
}
