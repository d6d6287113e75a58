use crate::common::{make_temp_dir, run_in, stdout_of, write_bogus_module};

#[test]
fn unknown_language_exits_with_fixed_message() {
    let dir = make_temp_dir("launch");
    let output = run_in(&dir, &["klingon"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "don't speak that language\n");
    assert!(output.stderr.is_empty(), "console logging is off by default");
}

#[test]
fn capitalised_language_is_not_recognised() {
    let dir = make_temp_dir("launch");
    let output = run_in(&dir, &["English"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "don't speak that language\n");
}

#[test]
fn missing_module_reports_loader_error() {
    let dir = make_temp_dir("launch");
    let output = run_in(&dir, &["chinese"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("chi.so"), "unexpected stdout: {stdout}");
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn no_arguments_load_the_english_module() {
    let dir = make_temp_dir("launch");
    let output = run_in::<&str>(&dir, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("eng.so"));
    assert_eq!(stdout_of(&output), stdout_of(&run_in(&dir, &["english"])));
}

#[test]
fn several_arguments_load_the_english_module() {
    let dir = make_temp_dir("launch");
    let output = run_in(&dir, &["swedish", "chinese"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), stdout_of(&run_in::<&str>(&dir, &[])));
}

#[test]
fn unloadable_module_reports_loader_error() {
    let dir = make_temp_dir("launch");
    write_bogus_module(&dir, "swe/swe.so");
    let output = run_in(&dir, &["swedish"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("swe.so"), "unexpected stdout: {stdout}");
    assert!(!stdout.contains("No such file"), "file exists: {stdout}");
}

#[cfg(unix)]
#[test]
fn non_utf8_selector_is_an_unknown_language() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = make_temp_dir("launch");
    let output = run_in(&dir, &[OsStr::from_bytes(b"eng\xfflish")]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "don't speak that language\n");
}
