use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn scribblepad_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scribblepad").expect("binary exists");
    // Keep the user's real config out of the tests.
    cmd.env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path());
    cmd
}

fn png_size(path: &std::path::Path) -> (i32, i32) {
    let bytes = fs::read(path).unwrap();
    let surface = cairo::ImageSurface::create_from_png(&mut Cursor::new(bytes)).unwrap();
    (surface.width(), surface.height())
}

#[test]
fn scribblepad_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    scribblepad_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Freehand sketchpad"));
}

#[test]
fn script_export_writes_upscaled_png() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("sketch.txt");
    fs::write(
        &script,
        "down 10 10\nmove 50 50\nup\nstamp on\nglyph ★\ndown 100 100\nmove 120 120\nup\nundo\nredo\n",
    )
    .unwrap();
    let output = temp.path().join("out").join("sketch.png");

    scribblepad_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("sketch.png"));

    assert_eq!(png_size(&output), (1024, 1024));
}

#[test]
fn script_reads_from_stdin_and_exports_inline() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("inline.png");

    scribblepad_cmd(&temp)
        .write_stdin(format!("down 1 1\nup\nexport {}\n", output.display()))
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn config_canvas_size_drives_export_resolution() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "[canvas]\nwidth = 100\nheight = 50\n").unwrap();
    let output = temp.path().join("small.png");
    let preview = temp.path().join("preview.png");

    scribblepad_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&output)
        .arg("--preview")
        .arg(&preview)
        .write_stdin("hover 5 5\n")
        .assert()
        .success();

    assert_eq!(png_size(&output), (400, 200));
    assert_eq!(png_size(&preview), (100, 50));
}

#[test]
fn invalid_script_reports_line() {
    let temp = TempDir::new().unwrap();
    scribblepad_cmd(&temp)
        .write_stdin("down 1 1\nwiggle\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown command 'wiggle'"));
}
