use anyhow::Context;
use serde::Deserialize;

/// Dependencies each workspace crate must never take on.
const FORBIDDEN: &[(&str, &[&str])] = &[
    (
        "titlebattle-domain",
        &[
            "titlebattle-shared",
            "titlebattle-engine",
            "axum",
            "tokio",
            "reqwest",
            "rand",
            "tracing",
        ],
    ),
    (
        "titlebattle-shared",
        &["titlebattle-engine", "axum", "tokio", "reqwest"],
    ),
];

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
    /// `None` for normal dependencies, `Some("dev")` / `Some("build")` otherwise
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let violations = violations(&metadata);
    if !violations.is_empty() {
        for v in &violations {
            eprintln!("arch-check: {v}");
        }
        anyhow::bail!("{} architecture violation(s)", violations.len());
    }

    println!("arch-check: ok");
    Ok(())
}

fn violations(metadata: &Metadata) -> Vec<String> {
    let mut found = Vec::new();
    for package in &metadata.packages {
        let Some((_, forbidden)) = FORBIDDEN.iter().find(|(name, _)| *name == package.name) else {
            continue;
        };
        for dep in &package.dependencies {
            // Dev-dependencies may pull in test-only crates
            if dep.kind.is_some() {
                continue;
            }
            if forbidden.contains(&dep.name.as_str()) {
                found.push(format!("{} must not depend on {}", package.name, dep.name));
            }
        }
    }
    found
}
