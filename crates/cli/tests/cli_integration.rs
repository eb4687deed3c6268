use std::process::Command;

fn gnuflag() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gnuflag"))
}

#[test]
fn echoes_canonical_form() {
    let out = gnuflag()
        .args(["-vn3", "--output=out.txt", "input.txt"])
        .output()
        .expect("failed to run gnuflag");
    assert!(
        out.status.success(),
        "gnuflag failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, "-v -n 3 -o out.txt input.txt\n");
}

#[test]
fn terminator_keeps_option_lookalikes_positional() {
    let out = gnuflag()
        .args(["-v", "--", "-n3", "--quiet"])
        .output()
        .expect("failed to run gnuflag");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, "-v -n3 --quiet\n");
}

#[test]
fn unknown_flag_exits_with_usage() {
    let out = gnuflag()
        .arg("--frobnicate")
        .output()
        .expect("failed to run gnuflag");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("flag provided but not defined: --frobnicate"),
        "unexpected stderr:\n{stderr}"
    );
    assert!(
        stderr.contains("-v, --verbose"),
        "usage text missing from stderr:\n{stderr}"
    );
}

#[test]
fn missing_argument_is_reported() {
    let out = gnuflag()
        .arg("-o")
        .output()
        .expect("failed to run gnuflag");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("missing argument for -o"),
        "unexpected stderr:\n{stderr}"
    );
}

#[test]
fn help_prints_grouped_spellings() {
    let out = gnuflag()
        .arg("--help")
        .output()
        .expect("failed to run gnuflag --help");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage: gnuflag"), "{stdout}");
    assert!(stdout.contains("-o, --output string"), "{stdout}");
    assert!(stdout.contains("-n, --count int"), "{stdout}");
    assert!(stdout.contains("--timeout duration"), "{stdout}");
}
