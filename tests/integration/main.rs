//! Integration tests for compare-size

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const CACHE: &str = "dist/.sizecache.json";

    fn compare_size(dir: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("compare-size");
        cmd.current_dir(dir)
            .env_remove("COMPARE_SIZE_CONFIG")
            .env_remove("COMPARE_SIZE_CACHE");
        cmd
    }

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("dist")).unwrap();
        fs::write(temp.path().join("dist/app.js"), "x".repeat(200)).unwrap();
        temp
    }

    fn read_cache(dir: &Path) -> serde_json::Value {
        let text = fs::read_to_string(dir.join(CACHE)).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        compare_size(temp.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("artifact sizes"));
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        compare_size(temp.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("compare-size"));
    }

    #[test]
    fn compare_records_last_run() {
        let temp = project();

        compare_size(temp.path())
            .args(["compare", "dist/app.js"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Sizes"))
            .stdout(predicate::str::contains("dist/app.js"));

        let cache = read_cache(temp.path());
        assert_eq!(cache[" last run"]["dist/app.js"][""], 200);
        assert!(cache[" last run"]["dist/app.js"]["gz"].as_u64().unwrap() > 0);
        assert!(cache[""]["version"].is_number());
    }

    #[test]
    fn second_compare_shows_last_run() {
        let temp = project();

        compare_size(temp.path())
            .args(["compare", "dist/app.js", "--no-compress"])
            .assert()
            .success();

        fs::write(temp.path().join("dist/app.js"), "x".repeat(150)).unwrap();

        compare_size(temp.path())
            .args(["compare", "dist/app.js", "--no-compress"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Compared to last run"))
            .stdout(predicate::str::contains("-50"));
    }

    #[test]
    fn compare_without_files_fails() {
        let temp = project();

        compare_size(temp.path())
            .arg("compare")
            .assert()
            .failure()
            .stderr(predicate::str::contains("No files to compare"));
    }

    #[test]
    fn compare_unknown_compressor_fails() {
        let temp = project();

        compare_size(temp.path())
            .args(["compare", "dist/app.js", "--compress", "zz"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown compressor: zz"));
    }

    #[test]
    fn compare_uses_local_config() {
        let temp = project();
        fs::write(
            temp.path().join("compare-size.toml"),
            "[compare]\nfiles = [\"dist/app.js\"]\ncompressors = []\ncache = \"sizes.json\"\n",
        )
        .unwrap();

        compare_size(temp.path())
            .arg("compare")
            .assert()
            .success()
            .stdout(predicate::str::contains("dist/app.js"));

        assert!(temp.path().join("sizes.json").exists());
        assert!(!temp.path().join(CACHE).exists());
    }

    #[test]
    fn legacy_cache_is_upgraded() {
        let temp = project();
        fs::write(
            temp.path().join(CACHE),
            r#"{"dist/app.js": 180, "dist/app.js.gz": 20}"#,
        )
        .unwrap();

        compare_size(temp.path())
            .args(["compare", "dist/app.js", "--no-compress"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Compared to last run"))
            .stdout(predicate::str::contains("+20"));

        let cache = read_cache(temp.path());
        assert!(cache[""]["version"].is_number());
        assert_eq!(cache[" last run"]["dist/app.js"][""], 200);
        assert!(cache.get("dist/app.js").is_none());
    }

    #[test]
    fn missing_artifact_is_a_zero_row() {
        let temp = project();

        compare_size(temp.path())
            .args(["compare", "dist/unbuilt.js"])
            .assert()
            .success()
            .stdout(predicate::str::contains("dist/unbuilt.js"));

        let cache = read_cache(temp.path());
        assert_eq!(cache[" last run"]["dist/unbuilt.js"][""], 0);
        assert_eq!(cache[" last run"]["dist/unbuilt.js"]["gz"], 0);
    }

    #[test]
    fn add_without_data_fails() {
        let temp = project();

        compare_size(temp.path())
            .args(["add", "v1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No size data found"));

        assert!(!temp.path().join(CACHE).exists());
    }

    #[test]
    fn add_then_list() {
        let temp = project();

        compare_size(temp.path())
            .args(["compare", "dist/app.js"])
            .assert()
            .success();

        compare_size(temp.path())
            .args(["add", "v1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Last run saved as: v1"));

        compare_size(temp.path())
            .args(["list", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("v1"))
            .stdout(predicate::str::contains("last run").not());

        compare_size(temp.path())
            .args(["compare", "dist/app.js"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Compared to v1"));
    }

    #[test]
    fn list_empty_json() {
        let temp = project();

        compare_size(temp.path())
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[]"));
    }

    #[test]
    fn remove_label() {
        let temp = project();

        compare_size(temp.path())
            .args(["compare", "dist/app.js"])
            .assert()
            .success();
        compare_size(temp.path())
            .args(["add", "v1", "v2"])
            .assert()
            .success();

        compare_size(temp.path())
            .args(["remove", "v1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed: v1"));

        let cache = read_cache(temp.path());
        assert!(cache.get("v1").is_none());
        assert!(cache.get("v2").is_some());
    }

    #[test]
    fn prune_keeps_named_labels() {
        let temp = project();

        compare_size(temp.path())
            .args(["compare", "dist/app.js"])
            .assert()
            .success();
        compare_size(temp.path())
            .args(["add", "keep", "drop"])
            .assert()
            .success();

        compare_size(temp.path())
            .args(["prune", "keep"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed: drop"));

        let cache = read_cache(temp.path());
        assert!(cache.get("keep").is_some());
        assert!(cache.get("drop").is_none());
        assert!(cache.get(" last run").is_some());
    }

    #[test]
    fn prune_without_labels_deletes_cache() {
        let temp = project();

        compare_size(temp.path())
            .args(["compare", "dist/app.js"])
            .assert()
            .success();
        assert!(temp.path().join(CACHE).exists());

        compare_size(temp.path())
            .arg("prune")
            .assert()
            .success()
            .stdout(predicate::str::contains("Size cache deleted"))
            .stdout(predicate::str::contains("Removed:").not());
        assert!(!temp.path().join(CACHE).exists());
    }

    #[test]
    fn empty_deletes_cache() {
        let temp = project();

        compare_size(temp.path())
            .args(["compare", "dist/app.js"])
            .assert()
            .success();

        compare_size(temp.path())
            .arg("empty")
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed:").not());
        assert!(!temp.path().join(CACHE).exists());

        // Emptying again is not an error
        compare_size(temp.path()).arg("empty").assert().success();
    }
}
