use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_cli_compress_decompress_cycle() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file_path = dir.path().join("file1.txt");
    fs::write(&file_path, "Hello, this is the first file.")?;

    let mut cmd = Command::cargo_bin("gzipper")?;
    cmd.arg("compress").arg(&file_path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("file1.txt.gz"));

    let compressed_path = dir.path().join("file1.txt.gz");
    assert!(compressed_path.exists());

    // Remove the original so decompression has to rebuild it.
    fs::remove_file(&file_path)?;

    let mut cmd = Command::cargo_bin("gzipper")?;
    cmd.arg("decompress").arg(&compressed_path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("file1.txt"));

    assert_eq!(fs::read_to_string(&file_path)?, "Hello, this is the first file.");

    Ok(())
}

#[test]
fn test_cli_compress_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), "a")?;
    fs::write(dir.path().join("b.log"), "b")?;
    fs::write(dir.path().join("c.exe"), "c")?;

    let mut cmd = Command::cargo_bin("gzipper")?;
    cmd.arg("compress").arg(dir.path());
    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains("a.txt.gz")
                .and(predicate::str::contains("b.log.gz"))
                .and(predicate::str::contains("2 file(s)")),
        );

    assert!(dir.path().join("a.txt.gz").exists());
    assert!(dir.path().join("b.log.gz").exists());
    assert!(!dir.path().join("c.exe.gz").exists());

    Ok(())
}

#[test]
fn test_cli_custom_extension_override() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let md_path = dir.path().join("notes.md");
    fs::write(&md_path, "# notes")?;

    let mut cmd = Command::cargo_bin("gzipper")?;
    cmd.arg("compress").arg(&md_path).arg("--ext").arg(".md");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("notes.md.gz"));

    assert!(dir.path().join("notes.md.gz").exists());

    Ok(())
}

#[test]
fn test_cli_missing_input_fails_with_reason() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("gzipper")?;
    cmd.arg("compress").arg("does_not_exist.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));

    Ok(())
}

#[test]
fn test_cli_unsupported_extension_fails_with_reason() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let exe_path = dir.path().join("tool.exe");
    fs::write(&exe_path, "MZ")?;

    let mut cmd = Command::cargo_bin("gzipper")?;
    cmd.arg("compress").arg(&exe_path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file type"));

    Ok(())
}
