use std::io::Write;
use std::process::{Command, Output, Stdio};

const TEXTBOOK_FLAGS: [&str; 10] = [
    "--spot",
    "100",
    "--strike",
    "100",
    "--maturity",
    "1",
    "--rate",
    "0.05",
    "--volatility",
    "0.2",
];

/// Run the `pricer` binary with `args`, feeding `stdin` to it.
fn run_pricer(args: &[&str], stdin: &str, rust_log: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_pricer"));
    command
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    match rust_log {
        Some(level) => command.env("RUST_LOG", level),
        None => command.env_remove("RUST_LOG"),
    };

    let mut child = command.spawn().expect("pricer binary starts");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("stdin accepts input");
    child.wait_with_output().expect("pricer binary finishes")
}

fn write_config(name: &str, text: &str) -> std::path::PathBuf {
    let file_name = format!("pricer-bin-{}-{}.toml", name, std::process::id());
    let path = std::env::temp_dir().join(file_name);
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_textbook_contract_from_prompts() {
    let output = run_pricer(&[], "100\n100\n1\n0.05\n0.2\n", None);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("European Call Option Price: $10.45"));
    assert!(stdout.contains("European Put Option Price: $5.57"));
}

#[test]
fn test_textbook_contract_from_flags() {
    let output = run_pricer(&TEXTBOOK_FLAGS, "", None);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout.contains("Welcome"), "nothing should be prompted: {}", stdout);
    assert!(stdout.contains("European Call Option Price: $10.45"));
    assert!(stdout.contains("European Put Option Price: $5.57"));
}

#[test]
fn test_non_numeric_input_exits_with_failure() {
    let output = run_pricer(&[], "abc\n", None);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Parse error"), "stderr: {}", stderr);
}

#[test]
fn test_zero_maturity_exits_with_failure() {
    let mut args = TEXTBOOK_FLAGS.to_vec();
    args[5] = "0";
    let output = run_pricer(&args, "", None);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Arithmetic degeneracy"), "stderr: {}", stderr);
}

#[test]
fn test_zero_maturity_with_intrinsic_flag_succeeds() {
    let mut args = TEXTBOOK_FLAGS.to_vec();
    args[1] = "110";
    args[5] = "0";
    args.push("--intrinsic-on-degenerate");
    let output = run_pricer(&args, "", None);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("European Call Option Price: $10.00"));
    assert!(stdout.contains("European Put Option Price: $0.00"));
}

#[test]
fn test_flag_overrides_config_value() {
    let path = write_config("override", "[contract]\nspot = 50.0\nstrike = 100.0\n");
    let path_str = path.to_str().unwrap();
    let output = run_pricer(
        &["--config", path_str, "--spot", "100", "--maturity", "1"],
        "0.05\n0.2\n",
        None,
    );
    std::fs::remove_file(&path).unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    // Only rate and volatility are prompted for
    assert!(!stdout.contains("stock price (S0): "));
    assert!(stdout.contains("risk-free interest rate"));
    assert!(stdout.contains("European Call Option Price: $10.45"));
    assert!(stdout.contains("European Put Option Price: $5.57"));
}

#[test]
fn test_config_load_is_logged() {
    let path = write_config("logged", "[output]\nshow_banner = false\n");
    let path_str = path.to_str().unwrap();
    let mut args = vec!["--config", path_str];
    args.extend_from_slice(&TEXTBOOK_FLAGS);
    let output = run_pricer(&args, "", Some("info"));
    std::fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Loaded pricer config from"), "stderr: {}", stderr);
}

#[test]
fn test_generate_config_prints_template() {
    let output = run_pricer(&["--generate-config"], "", None);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("degenerate_policy = \"reject\""), "stdout: {}", stdout);
    assert!(stdout.contains("currency_symbol = \"$\""));
}
