use std::path::Path;

use super::*;

fn default_filter() -> PatternFilter {
    PatternFilter::new(&[], &[], true, false)
}

#[test]
fn filter_by_default_extensions() {
    let filter = default_filter();

    assert!(filter.should_include(Path::new("src/main.rs")));
    assert!(filter.should_include(Path::new("cmd/app/main.go")));
    assert!(!filter.should_include(Path::new("assets/font.woff2")));
}

#[test]
fn custom_extensions_are_normalized_with_leading_dot() {
    let filter = PatternFilter::new(&["py".to_string(), ".go".to_string()], &[], true, false);

    assert!(filter.extensions().contains(".py"));
    assert!(filter.extensions().contains(".go"));
    assert!(filter.should_include(Path::new("main.py")));
    assert!(filter.should_include(Path::new("main.go")));
    assert!(!filter.should_include(Path::new("main.rs")));
}

#[test]
fn known_extensionless_files_are_included() {
    let filter = default_filter();

    assert!(filter.should_include(Path::new("Dockerfile")));
    assert!(filter.should_include(Path::new("deploy/Makefile")));
    assert!(!filter.should_include(Path::new("notes")));
    assert!(!filter.should_include(Path::new("LICENSE")));
}

#[test]
fn baseline_excludes_dependency_and_vcs_directories() {
    let filter = default_filter();

    assert!(!filter.should_include(Path::new("node_modules/react/index.js")));
    assert!(!filter.should_include(Path::new("web/node_modules/react/index.js")));
    assert!(!filter.should_include(Path::new(".git/config.json")));
    assert!(!filter.should_include(Path::new("dist/app.js")));
    assert!(filter.should_include(Path::new("distribution/app.js")));
}

#[test]
fn baseline_excludes_lockfiles_and_generated_code() {
    let filter = default_filter();

    assert!(!filter.should_include(Path::new("package-lock.json")));
    assert!(!filter.should_include(Path::new("api/service.pb.go")));
    assert!(!filter.should_include(Path::new("static/app.min.js")));
    assert!(filter.should_include(Path::new("package.json")));
}

#[test]
fn exclusion_beats_allowed_extension() {
    let filter = PatternFilter::new(&["lock".to_string()], &[], true, false);

    assert!(!filter.should_include(Path::new("Cargo.lock")));
}

#[test]
fn test_files_kept_unless_excluded() {
    let keep = default_filter();
    let drop = PatternFilter::new(&[], &[], true, true);

    for path in ["pkg/server_test.go", "tests/api.rs", "src/app.spec.ts", "test/helpers.js"] {
        assert!(keep.should_include(Path::new(path)), "{path} should be kept");
        assert!(!drop.should_include(Path::new(path)), "{path} should be dropped");
    }
    assert!(drop.excludes_tests());
    assert!(drop.should_include(Path::new("src/testing.go")));
}

#[test]
fn python_test_modules_and_target_dirs_are_not_special() {
    let drop_tests = PatternFilter::new(&[], &[], true, true);

    assert!(drop_tests.should_include(Path::new("pkg/test_util.py")));
    assert!(drop_tests.should_include(Path::new("pkg/util_test.py")));
    assert!(default_filter().should_include(Path::new("target/gen.rs")));
    assert!(default_filter().should_descend(Path::new("target")));
}

#[test]
fn custom_excludes_are_appended() {
    let filter = PatternFilter::new(&[], &[r"(^|/)fixtures($|/)".to_string()], true, false);

    assert!(!filter.should_include(Path::new("fixtures/data.json")));
    assert!(filter.should_include(Path::new("src/data.json")));
}

#[test]
fn invalid_custom_pattern_is_dropped_silently() {
    let baseline = default_filter().exclude_pattern_count();
    let filter = PatternFilter::new(
        &[],
        &["(unclosed".to_string(), r"\.gen\.ts$".to_string()],
        true,
        false,
    );

    assert_eq!(filter.exclude_pattern_count(), baseline + 1);
    assert!(!filter.should_include(Path::new("api.gen.ts")));
}

#[test]
fn ignore_rules_exclude_matching_paths() {
    let filter = default_filter().with_ignore_rules(IgnoreRules::parse("*.json\nscratch/\n"));

    assert!(!filter.should_include(Path::new("data.json")));
    assert!(!filter.should_include(Path::new("scratch/try.go")));
    assert!(filter.should_include(Path::new("main.go")));
}

#[test]
fn ignore_rules_dropped_when_not_honored() {
    let filter = PatternFilter::new(&[], &[], false, false)
        .with_ignore_rules(IgnoreRules::parse("*.go\n"));

    assert!(!filter.honors_ignore_file());
    assert!(filter.ignore_rules().is_none());
    assert!(filter.should_include(Path::new("main.go")));
}

#[test]
fn should_include_is_pure() {
    let filter = default_filter().with_ignore_rules(IgnoreRules::parse("gen/\n"));

    for path in ["a.go", "gen/b.go", "node_modules/c.js", "Makefile", "notes"] {
        let first = filter.should_include(Path::new(path));
        let second = filter.should_include(Path::new(path));
        assert_eq!(first, second, "{path}");
    }
}

#[test]
fn descend_prunes_excluded_directories() {
    let filter = default_filter();

    assert!(!filter.should_descend(Path::new("node_modules")));
    assert!(!filter.should_descend(Path::new("web/build")));
    assert!(filter.should_descend(Path::new("src")));
}

#[test]
fn descend_ignores_extension_allow_list() {
    let filter = PatternFilter::new(&["py".to_string()], &[], true, false);

    assert!(filter.should_descend(Path::new("pkg")));
}

#[test]
fn descend_prunes_rooted_ignored_directory() {
    let filter = default_filter().with_ignore_rules(IgnoreRules::parse("/generated\n"));

    assert!(!filter.should_descend(Path::new("generated")));
    assert!(filter.should_descend(Path::new("src/generated")));
}

#[test]
fn default_descend_uses_probe_path() {
    struct OutsideSkip;

    impl FileFilter for OutsideSkip {
        fn should_include(&self, path: &Path) -> bool {
            !path.starts_with("skip")
        }
    }

    assert!(OutsideSkip.should_descend(Path::new("src")));
    assert!(!OutsideSkip.should_descend(Path::new("skip")));
}
