//! End-to-end tests for the stylemark binary.

mod common;

use anyhow::Result;
use common::create_site;
use std::fs;
use std::process::Command;

/// Tests full binary execution generates valid output.
#[test]
fn test_full_workflow_e2e() -> Result<()> {
    // Arrange
    let site_dir = create_site(&[("index.md", "# Hello\n\n[Docs](https://example.com)\n")])?;
    let output = site_dir.path().join("public");

    // Act
    let status = Command::new(env!("CARGO_BIN_EXE_stylemark"))
        .arg(site_dir.path())
        .arg("-o")
        .arg(&output)
        .args(["--title", "E2E Test"])
        .status()?;

    // Assert
    assert!(status.success(), "Binary should exit successfully");
    let html = fs::read_to_string(output.join("index.html"))?;
    assert!(html.contains("<title>Hello - E2E Test</title>"), "{}", html);
    assert!(html.contains("rel=\"noopener noreferrer\""));
    assert!(output.join("assets/site.css").exists());
    assert!(output.join("assets/highlight.css").exists());
    Ok(())
}

/// Tests binary rejects a missing source directory.
#[test]
fn test_missing_source_fails_e2e() -> Result<()> {
    // Act
    let status = Command::new(env!("CARGO_BIN_EXE_stylemark"))
        .arg("definitely/missing/source")
        .status()?;

    // Assert
    assert!(!status.success(), "Missing source should fail");
    Ok(())
}

/// Tests binary rejects an unknown highlight theme.
#[test]
fn test_unknown_theme_fails_e2e() -> Result<()> {
    // Arrange
    let site_dir = create_site(&[("index.md", "# Hello\n")])?;

    // Act
    let status = Command::new(env!("CARGO_BIN_EXE_stylemark"))
        .arg(site_dir.path())
        .arg("-o")
        .arg(site_dir.path().join("public"))
        .args(["--theme", "no-such-theme"])
        .status()?;

    // Assert
    assert!(!status.success(), "Unknown theme should fail");
    assert!(
        !site_dir.path().join("public/index.html").exists(),
        "No pages are written when the theme is unknown"
    );
    Ok(())
}
