//! End-to-end push/pull/passthrough runs against a fake tool script

#![cfg(unix)]

mod common;

use common::TestEnv;
use serde_json::Value;

const PUSH_OK: &str = r#"
case "$1" in
  push) printf 'foo.gs\n  └─ bar.js\n  └─ Code.js\nPushed 3 files.\n' ;;
  pull) printf 'Cloned 2 files.\n└─ Code.js\n└─ appsscript.json\n' ;;
  *) echo "ran: $*" ;;
esac
"#;

#[test]
fn test_push_success_reports_count_and_files() {
    let env = TestEnv::new().with_fake_tool(PUSH_OK);

    let result = env.run(&["push"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("pushing..."));
    assert!(
        result.stdout.contains("✓ pushed 3 files\n  ↻ bar.js\n  ↻ Code.js\n"),
        "got:\n{}",
        result.stdout
    );
}

#[test]
fn test_sync_is_an_alias_for_push() {
    let env = TestEnv::new().with_fake_tool(PUSH_OK);

    let result = env.run(&["sync"]);

    assert!(result.success);
    assert!(result.stdout.contains("✓ pushed 3 files"));
}

#[test]
fn test_pull_and_fetch_report_pulled_files() {
    let env = TestEnv::new().with_fake_tool(PUSH_OK);

    for name in ["pull", "fetch"] {
        let result = env.run(&[name]);
        assert!(result.success, "{name}: {}", result.stderr);
        assert!(
            result.stdout.contains("✓ pulled 2 files\n↺ Code.js\n↺ appsscript.json\n"),
            "{name} got:\n{}",
            result.stdout
        );
    }
}

#[test]
fn test_passthrough_forwards_args_and_prints_stdout() {
    let env = TestEnv::new().with_fake_tool(PUSH_OK);

    let result = env.run(&["deployments", "--verbose-ish", "x"]);

    assert!(result.success);
    assert!(result.stdout.contains("running \"deployments --verbose-ish x\"..."));
    assert!(
        result
            .stdout
            .contains("✓ deployments --verbose-ish x\nran: deployments --verbose-ish x\n"),
        "got:\n{}",
        result.stdout
    );
}

#[test]
fn test_push_syntax_error_renders_excerpt() {
    let env = TestEnv::new().with_fake_tool(
        r#"echo "Push failed. Errors:" >&2
echo "Syntax error: Missing ; before statement. line: 3 file: src/Code" >&2
exit 1
"#,
    );
    env.write(
        "src/Code.js",
        "function a() {\n  var x = 1\n  var y = 2 3\n  return x;\n}\n",
    );

    let result = env.run(&["push"]);

    assert!(!result.success);
    assert!(
        result.stdout.contains(
            "✕ push failed because of syntax error\n\n\
             \x20  1 | function a() {\n\
             \x20  2 |   var x = 1\n\
             \x20> 3 |   var y = 2 3\n\
             \x20  4 |   return x;\n\
             \x20  5 | }\n"
        ),
        "got:\n{}",
        result.stdout
    );
}

#[test]
fn test_syntax_error_with_missing_local_file_falls_back_to_banner() {
    let env = TestEnv::new().with_fake_tool(
        "echo 'Syntax error. line: 9 file: Gone' >&2\nexit 1\n",
    );

    let result = env.run(&["push"]);

    assert!(!result.success);
    assert!(result.stdout.contains("✕ push failed\n"), "got:\n{}", result.stdout);
    assert!(result.stdout.contains("Gone.js"));
}

#[test]
fn test_generic_pull_failure_shows_raw_text() {
    let env = TestEnv::new().with_fake_tool("echo 'Error: unknown failure' >&2\nexit 1\n");

    let result = env.run(&["pull"]);

    assert!(!result.success);
    assert!(
        result.stdout.contains("✕ pull failed\nError: unknown failure\n"),
        "got:\n{}",
        result.stdout
    );
}

#[test]
fn test_missing_tool_is_reported_as_failure() {
    let env = TestEnv::new();

    let result = env.run_with_env(
        &["push"],
        &[("CLASP_SHELL_TOOL", "clasp-shell-no-such-binary")],
    );

    assert!(!result.success);
    assert!(result.stdout.contains("✕ push failed"));
    assert!(result.stdout.contains("failed to run 'clasp-shell-no-such-binary push'"));
}

#[test]
fn test_json_output_is_ndjson_event_stream() {
    let env = TestEnv::new().with_fake_tool(PUSH_OK);

    let result = env.run(&["--json", "push"]);

    assert!(result.success);
    let events: Vec<Value> = result
        .stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(events.len(), 2, "got:\n{}", result.stdout);
    assert_eq!(events[0]["event"], "invocation_started");
    assert_eq!(events[0]["operation"]["direction"], "push");
    assert_eq!(events[1]["event"], "invocation_succeeded");
    assert_eq!(events[1]["report"]["changed_file_count"], 3);
    assert_eq!(events[1]["report"]["change_lines"][0]["entry"], " bar.js");
}

#[test]
fn test_json_syntax_error_event_carries_excerpt() {
    let env = TestEnv::new()
        .with_fake_tool("echo 'syntax error. line: 1 file: Code' >&2\nexit 1\n");
    env.write("Code.js", "var = ;\n");

    let result = env.run(&["--json", "push"]);

    assert!(!result.success);
    let last: Value = serde_json::from_str(result.stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["event"], "syntax_error");
    assert_eq!(last["locator"]["file_path"], "Code");
    assert_eq!(last["locator"]["line_number"], 1);
    assert_eq!(last["excerpt"]["rows"][2]["text"], "var = ;");
}

#[test]
fn test_project_config_selects_tool_and_extension() {
    let env = TestEnv::new().with_fake_tool(
        "echo 'syntax error. line: 1 file: main' >&2\nexit 1\n",
    );
    env.write(
        ".clasp-shell.toml",
        &format!(
            "[tool]\ncommand = \"{}\"\nextension = \"ts\"\n",
            env.tool_command()
        ),
    );
    env.write("main.ts", "let x: number = ;\n");

    // config only, no env override
    let result = env.run_with_env(&["push"], &[("CLASP_SHELL_TOOL", "")]);

    assert!(!result.success);
    assert!(
        result.stdout.contains(" > 1 | let x: number = ;"),
        "got:\n{}\nstderr:\n{}",
        result.stdout,
        result.stderr
    );
}

#[test]
fn test_unknown_config_key_warns_on_stderr() {
    let env = TestEnv::new().with_fake_tool(PUSH_OK);
    env.write(".clasp-shell.toml", "[output]\ncolr = \"never\"\n");

    let result = env.run(&["push"]);

    assert!(result.success);
    assert!(
        result.stderr.contains("unknown config key 'colr'"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("did you mean 'color'?"));
}
