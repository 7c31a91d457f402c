use std::process::{Command, Output};

fn gogger(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gogger"))
        .args(args)
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run gogger")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

/// `DD-MM-YYYY HH:MM:SS`
fn looks_like_day_first_stamp(stamp: &str) -> bool {
    let bytes = stamp.as_bytes();
    bytes.len() == 19
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            10 => *b == b' ',
            13 | 16 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

#[test]
fn warn_line_on_stdout() {
    let out = gogger(&[
        "--project",
        "svc",
        "--time-format",
        "day-first",
        "--severity",
        "warn",
        "disk",
        "at",
        "90%",
    ]);
    assert!(out.status.success());
    let text = stdout(&out);
    let line = text.strip_suffix('\n').expect("newline terminated");
    assert!(!line.contains('\n'));
    let (stamp, rest) = line.split_at(19);
    assert!(looks_like_day_first_stamp(stamp), "{stamp:?}");
    assert_eq!(rest, " warn    [svc]: disk at 90%");
}

#[test]
fn filtered_message_prints_nothing() {
    let out = gogger(&["--severity", "verbose", "debug", "detail"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn fatal_does_not_change_exit_status() {
    let out = gogger(&["--severity", "fatal", "--level", "4", "bye"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains(" fatal   [gogger]: bye"));
}

#[test]
fn invalid_level_fails() {
    let out = gogger(&["--level", "5", "x"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("provided level (5) is invalid"), "{err}");
}

#[test]
fn custom_pattern_and_forced_color() {
    let out = Command::new(env!("CARGO_BIN_EXE_gogger"))
        .args(["--time-format", "STAMP", "--color", "--project", "api", "hi"])
        .env("CLICOLOR_FORCE", "1")
        .output()
        .expect("failed to run gogger");
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "STAMP \u{1b}[36minfo   \u{1b}[0m [\u{1b}[32mapi\u{1b}[0m]: hi\n"
    );
}
