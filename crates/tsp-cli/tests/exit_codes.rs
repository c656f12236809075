use std::io::Write;
use std::process::{Command, Output, Stdio};

fn tsp_exact(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tsp-exact"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn optimal_tour_from_stdin() {
    let output = tsp_exact(
        &["-"],
        r#"{ "costs": [[0, 10, 15, 20], [10, 0, 35, 25], [15, 35, 0, 30], [20, 25, 30, 0]] }"#,
    );
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("cost 80 via 0 -> "), "{stdout}");
}

#[test]
fn no_tour_exits_with_two() {
    let output = tsp_exact(&["-"], r#"{ "costs": [[0, 1, 1], [null, 0, 1], [null, 1, 0]] }"#);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim_end(), "no tour found");
}

#[test]
fn malformed_input_exits_with_one() {
    let output = tsp_exact(&["-"], "{ \"costs\": ");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().starts_with("error: "));
}

#[test]
fn unreadable_file_exits_with_one() {
    let output = tsp_exact(&["/nonexistent/problem.json"], "");
    assert_eq!(output.status.code(), Some(1));
}
