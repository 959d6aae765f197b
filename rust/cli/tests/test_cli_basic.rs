use noughts_cli::run;

#[test]
fn help_lists_expected_commands() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(["noughts", "--help"], &mut out, &mut err);
    assert_eq!(code, 0, "--help should exit with code 0");

    let stdout = String::from_utf8_lossy(&out);
    for cmd in ["move", "state", "rename", "reset", "play", "cfg"] {
        assert!(stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
fn version_prints_version_and_exits_zero() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(["noughts", "--version"], &mut out, &mut err);
    assert_eq!(code, 0, "--version should exit 0");
    assert!(
        !String::from_utf8_lossy(&out).trim().is_empty(),
        "version should print some text"
    );
}

#[test]
fn unknown_subcommand_shows_command_list_on_stderr() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(["noughts", "unknown"], &mut out, &mut err);
    assert_eq!(code, 2, "unknown subcommand should exit 2");

    let stderr = String::from_utf8_lossy(&err);
    assert!(
        stderr.contains("Commands:"),
        "stderr should contain help Commands section\n---stderr---\n{}\n-----------",
        stderr
    );
    assert!(stderr.contains("move"), "stderr help excerpt should list `move`");
}

#[test]
fn malformed_coordinates_exit_nonzero() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(["noughts", "move", "one", "2"], &mut out, &mut err);
    assert_eq!(code, 2, "non-numeric coordinates should exit 2");
}

#[test]
fn missing_subcommand_exits_nonzero() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(["noughts"], &mut out, &mut err);
    assert_eq!(code, 2);
}
