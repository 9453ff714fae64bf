//! Edge case and error handling tests for modernapi


use assert_cmd::Command;
use harness::{TestRepo, run_analyze};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::symlink;

fn analyze_json(repo: &TestRepo) -> serde_json::Value {
    let (_stdout, stderr, code) = run_analyze(repo.path(), &["--no-ai", "--json", "out.json"]);
    assert_eq!(code, Some(0), "analyze should succeed: {}", stderr);
    serde_json::from_str(&repo.read("out.json")).expect("valid JSON report")
}

fn route_paths(report: &serde_json::Value) -> Vec<String> {
    report["routes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["path"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Decorator Parsing Edge Cases
// ============================================================================

#[test]
fn test_nested_parentheses_in_arguments() {
    let repo = TestRepo::new();
    repo.add_file(
        "main.py",
        r#"@app.get("/v1/items", dependencies=[Depends(auth(scope("read")))], tags=["items"])
def items():
    pass
"#,
    );

    let report = analyze_json(&repo);
    let route = &report["routes"][0];
    assert_eq!(route["path"], "/v1/items");
    assert_eq!(route["has_tags"], true, "tags= after nested calls is still seen");
    assert_eq!(route["score"], 100 - 25 - 10 - 5);
}

#[test]
fn test_unclosed_decorator_runs_to_end_of_file() {
    let repo = TestRepo::new();
    repo.add_file(
        "broken.py",
        "@app.get(\"/v1/broken\"\n\ndef handler():\n    return {\"summary\": 1}\nsummary = 'late'\n",
    );

    let report = analyze_json(&repo);
    let route = &report["routes"][0];
    assert_eq!(route["path"], "/v1/broken");
    // The argument text swallows the rest of the file, including `summary =`
    assert_eq!(route["has_summary"], true);
}

#[test]
fn test_unknown_path_for_computed_paths() {
    let repo = TestRepo::new();
    repo.add_file(
        "main.py",
        "@app.get(PREFIX + \"/items\")\ndef a(): pass\n\n@app.post()\ndef b(): pass\n",
    );

    let report = analyze_json(&repo);
    assert_eq!(route_paths(&report), vec!["UNKNOWN", "UNKNOWN"]);
    for route in report["routes"].as_array().unwrap() {
        assert_eq!(route["versioned"], false);
        assert_eq!(route["score"], 30);
    }
}

#[test]
fn test_path_keyword_takes_precedence() {
    let repo = TestRepo::new();
    repo.add_file(
        "main.py",
        "@router.put('/old', path='/v3/new', response_model=Out)\ndef f(): pass\n",
    );

    let report = analyze_json(&repo);
    assert_eq!(route_paths(&report), vec!["/v3/new"]);
    assert_eq!(report["routes"][0]["versioned"], true);
}

#[test]
fn test_generic_route_form_and_verb_case() {
    let repo = TestRepo::new();
    repo.add_file(
        "main.py",
        "@app.route('/v1/health', methods=['GET'])\ndef health(): pass\n\n@API.DELETE('/items')\ndef d(): pass\n",
    );

    let report = analyze_json(&repo);
    let routes = report["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0]["method"], "ROUTE");
    assert_eq!(routes[0]["path"], "/v1/health");
    assert_eq!(routes[1]["method"], "DELETE");
}

#[test]
fn test_non_route_decorators_ignored() {
    let repo = TestRepo::new();
    repo.add_file(
        "main.py",
        "@app.middleware('http')\n@pytest.fixture()\n@app.on_event('startup')\n@app.get('/only')\ndef f(): pass\n",
    );

    let report = analyze_json(&repo);
    assert_eq!(route_paths(&report), vec!["/only"]);
}

#[test]
fn test_unicode_content_around_decorators() {
    let repo = TestRepo::new();
    repo.add_file(
        "main.py",
        "# 日本語のコメント 🎉\n@app.get('/v1/héllo', summary='Grüße (hello)')\ndef f(): pass\n",
    );

    let report = analyze_json(&repo);
    assert_eq!(route_paths(&report), vec!["/v1/héllo"]);
    assert_eq!(report["routes"][0]["has_summary"], true);
}

#[test]
fn test_keyword_names_match_inside_longer_names() {
    let repo = TestRepo::new();
    repo.add_file(
        "main.py",
        "@app.get('/v1/x', response_model=Out, tags=['x'], summary='X', response_description='OK')\ndef f(): pass\n\n@app.get('/v1/y', response_model_exclude=None)\ndef g(): pass\n",
    );

    let report = analyze_json(&repo);
    let documented = &report["routes"][0];
    assert_eq!(documented["has_description"], true);
    assert_eq!(documented["score"], 100);
    assert_eq!(report["routes"][1]["has_response_model"], false);
}

// ============================================================================
// File System Edge Cases
// ============================================================================

#[test]
fn test_binary_and_empty_files_skipped() {
    let repo = TestRepo::new();
    fs::write(repo.path().join("blob.py"), [0x00, 0xFF, 0xFE, 0x80, 0x40]).unwrap();
    repo.add_file("empty.py", "");
    repo.add_file("ok.py", "@app.get('/ok')\n");

    let report = analyze_json(&repo);
    assert_eq!(route_paths(&report), vec!["/ok"]);
}

#[test]
fn test_symlinks_are_not_followed() {
    let repo = TestRepo::new();
    repo.add_file("real/api.py", "@app.get('/real')\n");
    symlink(repo.path().join("real/api.py"), repo.path().join("link.py"))
        .expect("Failed to create symlink");
    symlink(repo.path().join("real"), repo.path().join("linkdir"))
        .expect("Failed to create symlink");

    let report = analyze_json(&repo);
    assert_eq!(route_paths(&report), vec!["/real"]);
}

#[test]
fn test_broken_symlink() {
    let repo = TestRepo::new();
    repo.add_file("ok.py", "@app.get('/ok')\n");
    symlink(repo.path().join("missing.py"), repo.path().join("dangling.py"))
        .expect("Failed to create symlink");

    let report = analyze_json(&repo);
    assert_eq!(route_paths(&report), vec!["/ok"]);
}

#[test]
fn test_git_directory_always_skipped() {
    let repo = TestRepo::new();
    repo.add_file(".git/hooks/hook.py", "@app.get('/hook')\n");
    repo.add_file("app.py", "@app.get('/app')\n");

    let report = analyze_json(&repo);
    assert_eq!(route_paths(&report), vec!["/app"]);
}

#[test]
fn test_deeply_nested_tree() {
    let repo = TestRepo::new();
    let deep = (0..30).map(|i| format!("d{i}")).collect::<Vec<_>>().join("/");
    repo.add_file(&format!("{deep}/api.py"), "@app.get('/v9/deep')\n");

    let report = analyze_json(&repo);
    assert_eq!(route_paths(&report), vec!["/v9/deep"]);
}

#[test]
fn test_max_file_size_skips_large_files() {
    let repo = TestRepo::new();
    repo.add_file("small.py", "@app.get('/small')\n");
    repo.add_file("big.py", &format!("@app.get('/big')\n{}", "#".repeat(4096)));

    Command::cargo_bin("modernapi")
        .unwrap()
        .current_dir(repo.path())
        .env_remove("OPENAI_API_KEY")
        .args(["analyze", ".", "--no-ai", "--summary-only", "--max-file-size", "1K"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Routes analyzed: 1"));
}

// ============================================================================
// CLI Edge Cases
// ============================================================================

#[test]
fn test_missing_repo_argument() {
    Command::cargo_bin("modernapi")
        .unwrap()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<REPO_PATH>"));
}

#[test]
fn test_invalid_ai_timeout() {
    let repo = TestRepo::new();
    repo.add_file("main.py", "@app.get('/x')\n");

    Command::cargo_bin("modernapi")
        .unwrap()
        .current_dir(repo.path())
        .env_remove("OPENAI_API_KEY")
        .args(["analyze", ".", "--ai-timeout", "eventually"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid --ai-timeout"));
}

#[test]
fn test_unwritable_report_path() {
    let repo = TestRepo::new();
    repo.add_file("main.py", "@app.get('/x')\n");

    Command::cargo_bin("modernapi")
        .unwrap()
        .current_dir(repo.path())
        .env_remove("OPENAI_API_KEY")
        .args(["analyze", ".", "--no-ai", "-o", "missing/dir/report.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cannot write"));
}

#[test]
fn test_verbose_logging_goes_to_stderr() {
    let repo = TestRepo::new();
    repo.add_file("main.py", "@app.get('/x')\n");

    Command::cargo_bin("modernapi")
        .unwrap()
        .current_dir(repo.path())
        .env_remove("OPENAI_API_KEY")
        .env_remove("MODERNAPI_LOG")
        .args(["-v", "analyze", ".", "--no-ai", "--summary-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("collected candidate files").not())
        .stderr(predicate::str::contains("collected candidate files"));
}

#[test]
fn test_oversized_max_file_size_is_rejected() {
    let repo = TestRepo::new();
    repo.add_file("main.py", "@app.get('/x')\n");

    Command::cargo_bin("modernapi")
        .unwrap()
        .current_dir(repo.path())
        .env_remove("OPENAI_API_KEY")
        .args(["analyze", ".", "--no-ai", "--max-file-size", "99999999999G"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("size too large"));
}
