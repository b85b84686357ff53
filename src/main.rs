//! edit-guard - Pre-execution hook for agent file edits
//!
//! # Usage
//!
//! ```bash
//! # As a hook (reads JSON from stdin, writes JSON to stdout)
//! echo '{"tool":"Edit","file":"/etc/hosts"}' | edit-guard
//!
//! # With extra patterns or an audit log
//! edit-guard --config ~/.claude/edit-guard/config.toml
//! ```

use std::env;
use std::io;

use edit_guard::{audit::AuditLogger, config::Config, engine::GuardEngine, hook};

/// Print version information
fn print_version() {
    println!("edit-guard {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"edit-guard - Warn when agents edit files in system directories

USAGE:
    edit-guard [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -c, --config PATH       Path to config file

BEHAVIOR:
    Reads {{"tool": ..., "file"|"filePath": ...}} from stdin.
    Writes {{"status": "allowed"}} to stdout.
    Edit/Write on /etc/, /usr/, \Windows\ or \Program Files\ adds a
    {{"status": "warning", ...}} line on stderr. Always exits 0.

USAGE AS HOOK:
    Configure in ~/.claude/settings.json:
    {{
      "hooks": {{
        "PreToolUse": [{{
          "type": "command",
          "command": "~/.claude/edit-guard/edit-guard",
          "timeout": 5000,
          "tools": ["Edit", "Write"]
        }}]
      }}
    }}
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    config_path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            config_path: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--config=") => {
                    let path = arg.trim_start_matches("--config=");
                    result.config_path = Some(path.to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

fn main() {
    let args = Args::parse();

    // Handle help and version
    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    // Defaults unless a config file is given explicitly
    let config = match args.config_path {
        Some(ref path) => {
            let expanded = Config::expand_path(path);
            Config::load_from(&expanded).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to load config from {}: {}", path, e);
                Config::default()
            })
        }
        None => Config::default(),
    };

    let mut logger = AuditLogger::new(config.audit_path().as_deref());
    let engine = GuardEngine::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    hook::run(&engine, &mut logger, stdin.lock(), stdout.lock(), stderr.lock());
}
