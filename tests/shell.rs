use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const PROMPT: &str = "cssh$ ";

fn run_shell(dir: &Path, script: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cssh"))
        .current_dir(dir)
        .env_remove("CSSH_CONFIG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start cssh");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_runs_command_and_exits_cleanly_at_eof() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_shell(dir.path(), "echo hello\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), format!("{PROMPT}hello\n{PROMPT}"));
}

#[test]
fn test_exit_keyword_stops_the_loop() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_shell(dir.path(), "exit\necho never\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), PROMPT);
}

#[test]
fn test_blank_lines_do_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_shell(dir.path(), "\n  \t \n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), PROMPT.repeat(3));
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn test_output_redirection_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_shell(dir.path(), "echo hello > out.txt\n");
    assert_eq!(stdout_of(&output), PROMPT.repeat(2));
    assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "hello\n");
}

#[test]
fn test_truncate_then_append() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("log.txt"), "old contents that are long\n").unwrap();
    run_shell(dir.path(), "echo first > log.txt\necho second >> log.txt\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("log.txt")).unwrap(),
        "first\nsecond\n"
    );
}

#[test]
fn test_append_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    run_shell(dir.path(), "echo new >> fresh.txt\n");
    assert_eq!(fs::read_to_string(dir.path().join("fresh.txt")).unwrap(), "new\n");
}

#[test]
fn test_input_redirection_feeds_stdin() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in.txt"), "abc\n").unwrap();
    let output = run_shell(dir.path(), "cat < in.txt\n");
    assert_eq!(stdout_of(&output), format!("{PROMPT}abc\n{PROMPT}"));
}

#[test]
fn test_input_and_output_together() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in.txt"), "b\na\n").unwrap();
    let output = run_shell(dir.path(), "sort < in.txt > out.txt\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "a\nb\n");
}

#[test]
fn test_double_output_redirection_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_shell(dir.path(), "echo hi > a.txt >> b.txt\n");
    assert_eq!(
        stdout_of(&output),
        format!("{PROMPT}Error! Can't have two >'s or >>'s!\n{PROMPT}")
    );
    assert!(!dir.path().join("a.txt").exists());
    assert!(!dir.path().join("b.txt").exists());
}

#[test]
fn test_missing_program_does_not_stop_the_shell() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_shell(dir.path(), "notarealprogram123\necho still here\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), format!("{PROMPT}{PROMPT}still here\n{PROMPT}"));
    assert!(stderr_of(&output).contains("execvp: notarealprogram123"));
}

#[test]
fn test_missing_input_file_aborts_only_that_command() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_shell(dir.path(), "cat < missing.txt\necho after\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr_of(&output).contains("open: missing.txt"));
    assert_eq!(stdout_of(&output), format!("{PROMPT}{PROMPT}after\n{PROMPT}"));
}

#[cfg(unix)]
#[test]
fn test_created_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    run_shell(dir.path(), "echo x > perm.txt\n");
    let mode = fs::metadata(dir.path().join("perm.txt")).unwrap().permissions().mode();
    // umask can only clear bits.
    assert_eq!(mode & 0o777 & !0o644, 0);
    assert_ne!(mode & 0o600, 0);
}

#[test]
fn test_config_changes_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("cssh.conf");
    fs::write(&config, "prompt=% \nexit_keyword=quit\n").unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_cssh"))
        .current_dir(dir.path())
        .env("CSSH_CONFIG", &config)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"quit\necho no\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "% ");
}

#[cfg(target_os = "linux")]
#[test]
fn test_programs_start_with_default_sigpipe() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_shell(dir.path(), "grep SigIgn /proc/self/status\n");
    let stdout = stdout_of(&output);
    let mask = stdout
        .split("SigIgn:")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|hex| u64::from_str_radix(hex, 16).ok())
        .expect("no SigIgn line in child output");
    let sigpipe_bit = 1u64 << (libc::SIGPIPE - 1);
    assert_eq!(mask & sigpipe_bit, 0, "SIGPIPE ignored in child: {stdout}");
}

#[cfg(target_os = "linux")]
#[test]
fn test_unwritable_stdout_does_not_stop_commands() {
    let dir = tempfile::tempdir().unwrap();
    let full = fs::OpenOptions::new().write(true).open("/dev/full").unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_cssh"))
        .current_dir(dir.path())
        .env_remove("CSSH_CONFIG")
        .stdin(Stdio::piped())
        .stdout(Stdio::from(full))
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"echo a > x > y\ntouch made.txt\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));
    assert!(dir.path().join("made.txt").exists());
}
