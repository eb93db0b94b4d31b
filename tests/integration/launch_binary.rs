use crate::common::{expected_root, Sandbox};

fn server_script() -> String {
    expected_root()
        .join("src/server.ts")
        .to_string_lossy()
        .into_owned()
}

#[test]
fn no_arguments_runs_server_script_from_root() {
    let sandbox = Sandbox::with_fake_runtime();

    let output = sandbox.run(&[]);

    assert!(
        output.status.success(),
        "launcher should exit cleanly: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(sandbox.recorded_argv(), vec!["run".to_string(), server_script()]);
    assert_eq!(
        sandbox.recorded_cwd(),
        expected_root(),
        "server must run from the project root, not the caller's directory"
    );
}

#[test]
fn dev_flag_inserts_watch_before_script() {
    let sandbox = Sandbox::with_fake_runtime();

    let output = sandbox.run(&["--dev"]);

    assert!(output.status.success());
    assert_eq!(
        sandbox.recorded_argv(),
        vec!["run".to_string(), "--watch".to_string(), server_script()]
    );
}

#[test]
fn dev_flag_is_found_among_other_arguments() {
    let sandbox = Sandbox::with_fake_runtime();

    let output = sandbox.run(&["--port", "3000", "--dev", "extra"]);

    assert!(output.status.success());
    assert_eq!(
        sandbox.recorded_argv(),
        vec!["run".to_string(), "--watch".to_string(), server_script()]
    );
}

#[test]
fn unknown_arguments_are_ignored() {
    let sandbox = Sandbox::with_fake_runtime();

    let output = sandbox.run(&["--port", "3000", "serve"]);

    assert!(
        output.status.success(),
        "unknown arguments must not be a usage error: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(sandbox.recorded_argv(), vec!["run".to_string(), server_script()]);
}

#[test]
fn server_exit_code_is_not_forwarded() {
    let sandbox = Sandbox::with_fake_runtime();

    let output = sandbox
        .command(&[])
        .env("FAKE_BUN_EXIT_CODE", "7")
        .output()
        .expect("claudesk binary should start");

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn missing_runtime_fails_with_spawn_error() {
    let sandbox = Sandbox::with_executable("/nonexistent/claudesk-test/bun");

    let output = sandbox.run(&[]);

    assert!(!output.status.success(), "missing runtime must not succeed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to start `/nonexistent/claudesk-test/bun`"),
        "stderr should name the runtime: {stderr}"
    );
}

#[test]
fn invalid_config_fails_before_spawning() {
    let sandbox = Sandbox::with_config("[runtime]\nexecutable = \"\"\n");

    let output = sandbox.run(&[]);

    assert!(!output.status.success());
    assert!(!sandbox.path().join("argv.txt").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("runtime.executable"), "stderr: {stderr}");
}

#[test]
fn help_and_version_flags_still_launch_the_server() {
    for flag in ["--help", "-h", "--version", "-V"] {
        let sandbox = Sandbox::with_fake_runtime();

        let output = sandbox.run(&[flag]);

        assert!(
            output.status.success(),
            "{flag}: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        assert!(
            output.stdout.is_empty(),
            "{flag} must not print usage or version text"
        );
        assert_eq!(
            sandbox.recorded_argv(),
            vec!["run".to_string(), server_script()],
            "{flag} must be ignored"
        );
    }
}

#[test]
fn dev_flag_with_help_still_starts_watch_mode() {
    let sandbox = Sandbox::with_fake_runtime();

    let output = sandbox.run(&["--dev", "--help"]);

    assert!(output.status.success());
    assert_eq!(
        sandbox.recorded_argv(),
        vec!["run".to_string(), "--watch".to_string(), server_script()]
    );
}
