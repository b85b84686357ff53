//! Integration tests for request classification and responses

use edit_guard::{audit::AuditLogger, hook, Config, GuardEngine, GuardRequest, Outcome};

fn engine() -> GuardEngine {
    GuardEngine::new(Config::default())
}

fn request_json(tool: &str, key: &str, path: &str) -> String {
    format!(
        r#"{{"tool":"{}","{}":"{}"}}"#,
        tool,
        key,
        path.replace('\\', "\\\\").replace('"', "\\\"")
    )
}

fn warns(tool: &str, path: &str) -> bool {
    let input = GuardRequest::from_json(&request_json(tool, "file", path)).unwrap();
    engine().check(&input).unwrap().is_warn()
}

fn run(input: &str) -> (Outcome, String, String) {
    let mut logger = AuditLogger::default();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let outcome = hook::run(
        &engine(),
        &mut logger,
        input.as_bytes(),
        &mut stdout,
        &mut stderr,
    );
    (
        outcome,
        String::from_utf8(stdout).unwrap(),
        String::from_utf8(stderr).unwrap(),
    )
}

// ============================================================================
// System Directories - WARN
// ============================================================================

#[test]
fn test_unix_system_dirs_warn() {
    assert!(warns("Edit", "/etc/passwd"));
    assert!(warns("Edit", "/etc/nginx/nginx.conf"));
    assert!(warns("Write", "/usr/local/bin/tool"));
    assert!(warns("Write", "/USR/lib/x.so"));
}

#[test]
fn test_windows_system_dirs_warn() {
    assert!(warns("Write", r"C:\Windows\System32\x.dll"));
    assert!(warns("Write", r"c:\windows\win.ini"));
    assert!(warns("Edit", r"C:\Program Files\App\config.ini"));
    assert!(warns("Edit", r"D:\PROGRAM FILES\Tool\a.txt"));
}

#[test]
fn test_substring_matches_anywhere() {
    // textual match, not a path prefix
    assert!(warns("Edit", "/home/user/project/etc/app.conf"));
    assert!(warns("Edit", "relative/usr/file"));
}

// ============================================================================
// Everything Else - ALLOWED without warning
// ============================================================================

#[test]
fn test_user_files_quiet() {
    assert!(!warns("Edit", "/home/user/notes.txt"));
    assert!(!warns("Write", "src/main.rs"));
    assert!(!warns("Write", r"C:\Users\me\Documents\a.txt"));
}

#[test]
fn test_unnormalized_paths_quiet() {
    assert!(!warns("Edit", "/etc"));
    assert!(!warns("Edit", "/usr"));
    assert!(!warns("Write", "C:/Windows/System32/x.dll"));
    assert!(!warns("Write", r"C:\Windows"));
    assert!(!warns("Write", r"\ProgramFiles\x"));
}

#[test]
fn test_other_tools_quiet() {
    assert!(!warns("Read", "/etc/passwd"));
    assert!(!warns("Bash", "/etc/passwd"));
    assert!(!warns("edit", "/etc/passwd"));
    assert!(!warns("Write ", "/etc/passwd"));
}

#[test]
fn test_file_path_key() {
    let input =
        GuardRequest::from_json(&request_json("Write", "filePath", r"C:\Windows\System32\x.dll"))
            .unwrap();
    assert!(engine().check(&input).unwrap().is_warn());
}

// ============================================================================
// Full Hook Responses
// ============================================================================

#[test]
fn test_edit_etc_passwd_response() {
    let (outcome, stdout, stderr) = run(r#"{"tool": "Edit", "file": "/etc/passwd"}"#);
    assert!(!outcome.is_failure());
    assert_eq!(stdout, "{\"status\": \"allowed\"}\n");

    let warning: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(warning["status"], "warning");
    assert_eq!(warning["message"], "Writing to system directory: /etc/passwd");
}

#[test]
fn test_windows_response_keeps_original_path() {
    let (_, stdout, stderr) = run(r#"{"tool": "Write", "filePath": "C:\\Windows\\System32\\x.dll"}"#);
    assert_eq!(stdout, "{\"status\": \"allowed\"}\n");
    assert_eq!(
        stderr,
        "{\"status\": \"warning\", \"message\": \"Writing to system directory: C:\\\\Windows\\\\System32\\\\x.dll\"}\n"
    );
}

#[test]
fn test_read_response_quiet() {
    let (_, stdout, stderr) = run(r#"{"tool": "Read", "file": "/etc/passwd"}"#);
    assert_eq!(stdout, "{\"status\": \"allowed\"}\n");
    assert!(stderr.is_empty());
}

#[test]
fn test_missing_path_quiet() {
    let (outcome, stdout, stderr) = run(r#"{"tool": "Edit"}"#);
    assert!(!outcome.is_failure());
    assert_eq!(stdout, "{\"status\": \"allowed\"}\n");
    assert!(stderr.is_empty());
}

#[test]
fn test_empty_input_fails_quietly() {
    for input in ["", "   \n", "not json", "[1, 2]", r#"{"tool": "Edit", "file": 7}"#] {
        let (outcome, stdout, stderr) = run(input);
        assert!(outcome.is_failure(), "input {:?}", input);
        assert!(stdout.is_empty(), "input {:?}", input);

        let failure: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
        assert_eq!(failure["status"], "allowed");
        assert!(failure["error"].is_string());
        assert!(failure.get("message").is_none());
    }
}

#[test]
fn test_identical_input_identical_output() {
    let input = r#"{"tool": "Edit", "file": "/usr/share/x"}"#;
    let first = run(input);
    let second = run(input);
    assert_eq!(first, second);
}

// ============================================================================
// Loosely Typed Fields
// ============================================================================

#[test]
fn test_non_string_tool_is_allowed() {
    for input in [
        r#"{"tool": 5, "file": "/etc/x"}"#,
        r#"{"tool": null, "file": "/etc/x"}"#,
        r#"{"tool": ["Edit"], "file": "/etc/x"}"#,
    ] {
        let (outcome, stdout, stderr) = run(input);
        assert!(!outcome.is_failure(), "input {}", input);
        assert_eq!(stdout, "{\"status\": \"allowed\"}\n");
        assert!(stderr.is_empty());
    }
}

#[test]
fn test_non_string_path_on_unguarded_tool_is_allowed() {
    let (outcome, stdout, stderr) = run(r#"{"tool": "Read", "file": 5}"#);
    assert!(!outcome.is_failure());
    assert_eq!(stdout, "{\"status\": \"allowed\"}\n");
    assert!(stderr.is_empty());
}

#[test]
fn test_falsy_file_falls_back_to_file_path() {
    for file in ["0", "false", "[]", "{}", "\"\"", "null"] {
        let input = format!(
            r#"{{"tool": "Edit", "file": {}, "filePath": "/etc/x"}}"#,
            file
        );
        let (outcome, stdout, stderr) = run(&input);
        assert!(!outcome.is_failure(), "file = {}", file);
        assert_eq!(stdout, "{\"status\": \"allowed\"}\n");
        assert_eq!(
            stderr,
            "{\"status\": \"warning\", \"message\": \"Writing to system directory: /etc/x\"}\n"
        );
    }
}

#[test]
fn test_null_file_path_on_edit_fails() {
    let (outcome, stdout, stderr) = run(r#"{"tool": "Edit", "filePath": null}"#);
    assert!(outcome.is_failure());
    assert!(stdout.is_empty());

    let failure: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(failure["status"], "allowed");
    assert!(failure["error"].as_str().unwrap().contains("filePath"));
}

#[test]
fn test_truthy_non_string_path_on_write_fails() {
    let (outcome, stdout, _) = run(r#"{"tool": "Write", "file": 1, "filePath": "/etc/x"}"#);
    assert!(outcome.is_failure());
    assert!(stdout.is_empty());
}

#[test]
fn test_large_request_is_read_in_full() {
    let input = format!(
        r#"{{"tool": "Edit", "file": "/etc/x", "content": "{}"}}"#,
        "a".repeat(11 * 1024 * 1024)
    );
    let (outcome, stdout, stderr) = run(&input);
    assert!(!outcome.is_failure());
    assert_eq!(stdout, "{\"status\": \"allowed\"}\n");
    assert!(stderr.contains("/etc/x"));
}
