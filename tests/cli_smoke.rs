use std::path::PathBuf;

fn bin_path() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_keepsake")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "keepsake.exe"
            } else {
                "keepsake"
            });
            p
        })
}

fn write_fixture(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, include_str!("data/greeting.json")).unwrap();
    path
}

#[test]
fn cli_validate_accepts_fixture() {
    let greeting_path = write_fixture("greeting.json");
    let arg = greeting_path.to_string_lossy().to_string();

    let output = std::process::Command::new(bin_path())
        .args(["validate", "--in", arg.as_str()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("greeting for Meera from Arjun"));
}

#[test]
fn cli_sweep_reveal_column_is_monotone() {
    let greeting_path = write_fixture("greeting_sweep.json");
    let arg = greeting_path.to_string_lossy().to_string();

    let output = std::process::Command::new(bin_path())
        .args(["sweep", "--in", arg.as_str(), "--steps", "7"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let mut last = -1.0f64;
    let mut rows = 0;
    for line in stdout.lines().skip(2) {
        let cols: Vec<&str> = line.split_whitespace().collect();
        if cols.len() != 4 {
            continue;
        }
        let reveal: f64 = cols[2].parse().unwrap();
        assert!(reveal >= last);
        last = reveal;
        rows += 1;
    }
    assert_eq!(rows, 7);
    assert_eq!(last, 1.0);
}
