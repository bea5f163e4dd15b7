use std::env;
use std::process::Command;

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap();
    let profile = env::var("PROFILE").unwrap();

    let full_version = if profile == "debug" {
        let git_hash = get_git_hash().unwrap_or_else(|| "unknown".to_string());

        if is_git_dirty() {
            format!("{}-dev+{}.dirty", version, git_hash)
        } else {
            format!("{}-dev+{}", version, git_hash)
        }
    } else {
        version
    };

    println!("cargo:rustc-env=AGENT_PARAM_VERSION={}", full_version);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}

fn get_git_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;

    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        None
    }
}

/// True when the working tree has staged or unstaged changes.
fn is_git_dirty() -> bool {
    ["diff --quiet", "diff --cached --quiet"].iter().any(|args| {
        Command::new("git")
            .args(args.split(' '))
            .status()
            .map(|status| !status.success())
            .unwrap_or(false)
    })
}
