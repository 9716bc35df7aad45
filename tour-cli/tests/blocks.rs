use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::tempdir;

fn tour_cli_binary() -> &'static str {
    env!("CARGO_BIN_EXE_tour-cli")
}

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("workspace root")
        .to_path_buf()
}

#[test]
fn blocks_prints_each_fence() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    let doc_path = tmp.path().join("DOC.md");
    fs::write(
        &doc_path,
        r#"# Strings

```js
const name = "fran"
console.log(`hello ${name}`)
```

```python
name = "fran"
print(f'hello {name}')
```
"#,
    )?;

    let output = Command::new(tour_cli_binary())
        .current_dir(workspace_root())
        .arg("blocks")
        .arg(&doc_path)
        .output()
        .expect("run tour-cli blocks");

    assert!(output.status.success(), "blocks should succeed");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "--- js (line 3)\nconst name = \"fran\"\nconsole.log(`hello ${name}`)\n\
         --- python (line 8)\nname = \"fran\"\nprint(f'hello {name}')\n"
    );

    let output = Command::new(tour_cli_binary())
        .current_dir(workspace_root())
        .arg("blocks")
        .arg(&doc_path)
        .args(["--lang", "python"])
        .output()
        .expect("run tour-cli blocks --lang python");

    assert!(output.status.success(), "filtered blocks should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("--- python (line 8)\n"), "{stdout}");
    assert!(!stdout.contains("console.log"), "{stdout}");
    Ok(())
}

#[test]
fn blocks_reports_unterminated_fence() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    let doc_path = tmp.path().join("broken.md");
    fs::write(&doc_path, "```rust\nfn main() {}\n")?;

    let output = Command::new(tour_cli_binary())
        .current_dir(workspace_root())
        .arg("blocks")
        .arg(&doc_path)
        .output()
        .expect("run tour-cli blocks on broken doc");

    assert!(!output.status.success(), "expected failure");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("tour.docs.parse("),
        "expected operation prefix, got: {stderr}"
    );
    assert!(
        stderr.contains("unterminated code block opened on line 1"),
        "expected line number, got: {stderr}"
    );
    assert!(
        stderr.contains("Caused by:"),
        "expected the parse error kept as the cause, got: {stderr}"
    );
    Ok(())
}

#[test]
fn blocks_reports_missing_file() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("absent.md");

    let output = Command::new(tour_cli_binary())
        .current_dir(workspace_root())
        .arg("blocks")
        .arg(&missing)
        .output()
        .expect("run tour-cli blocks on missing file");

    assert!(!output.status.success(), "expected failure");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tour.docs.read("), "got: {stderr}");
    assert!(stderr.contains("Caused by:"), "got: {stderr}");
    assert!(output.stdout.is_empty());
}
