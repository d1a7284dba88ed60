use std::process::{Command, Output};

#[test]
fn rows() {
    testcase("paths", "paths", ["--format=rows"]);
}

#[test]
fn symbol_breakdown() {
    testcase("symbols", "symbols", ["-f", "tree", "--symbols"]);
    testcase("symbols", "symbols-without-symbols", ["-f", "tree"]);
}

#[test]
fn empty_input() {
    testcase("empty", "empty", ["--format=rows"]);
    testcase("empty", "empty", ["--format=tree"]);
}

#[test]
fn html_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("index.html");
    let output = run(["tests/inputs/paths.txt", "--title", "paths", "-o", out.to_str().unwrap()]);
    assert!(output.stdout.is_empty());

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>\n<title>paths</title>\n"));
    assert!(html.contains("    [\"Path\", \"Parent\", \"Size\", \"Value\"],\n    [\"1 KB \",null,0,0],\n"));
    assert!(html.contains("    [\"1 KB some_reall...\",\"1 KB \",1024,0],\n  ]);"));
    assert!(html.contains("maxDepth: 2,"));
}

#[test]
fn logs_statistics() {
    let output = Command::new(env!("CARGO_BIN_EXE_size-report"))
        .args(["tests/inputs/paths.txt", "-f", "rows"])
        .env("RUST_LOG", "info")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("matched 6 of 7 lines (1 with size zero skipped)"), "stderr:\n{stderr}");
    assert!(stderr.contains("4 distinct entries, 1066 bytes in total"), "stderr:\n{stderr}");
}

#[test]
fn empty_input_warns() {
    let output = Command::new(env!("CARGO_BIN_EXE_size-report"))
        .args(["tests/inputs/empty.txt", "-f", "rows"])
        .env("RUST_LOG", "info")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no sized symbols in input"), "stderr:\n{stderr}");
    assert!(stderr.contains("0 distinct entries, 0 bytes in total"), "stderr:\n{stderr}");
}

#[test]
fn invalid_size_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    std::fs::write(&input, "0000000000001000 000000000000000a T ok\ta.cc:1\n0000000000001000 00000000000000zz T bad\tb.cc:1\n").unwrap();
    let out = dir.path().join("out.html");

    let output = Command::new(env!("CARGO_BIN_EXE_size-report"))
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("input line 2"), "stderr:\n{stderr}");
    assert!(!out.exists(), "no partial report must be written");
}

fn run<const N: usize>(options: [&str; N]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_size-report"))
        .args(options)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "\nstdout:\n{}stderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn testcase<const N: usize>(input: &str, expected: &str, options: [&str; N]) {
    let output = Command::new(env!("CARGO_BIN_EXE_size-report"))
        .args(options)
        .arg(format!("tests/inputs/{input}.txt"))
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        output.status.success(),
        "\nstdout:\n{stdout}stderr:\n{stderr}"
    );

    let expected = std::fs::read_to_string(format!("tests/expected_outputs/{expected}.txt")).unwrap();

    // Ignore line ending differences, i.e., LF vs CRLF.
    let mut output_lines = stdout.lines();
    let mut expected_lines = expected.lines();
    loop {
        let output_line = output_lines.next();
        let expected_line = expected_lines.next();
        match (output_line, expected_line) {
            (None, None) => break,
            (output_line, expected_line) => assert_eq!(
                output_line, expected_line,
                "\noutput:\n{stdout}\nexpected:\n{expected}"
            ),
        }
    }
}
