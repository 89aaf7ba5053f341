use std::process::{Command, Output, Stdio};

fn bridge(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_serial_bridge"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run serial_bridge")
}

#[test]
fn no_arguments_is_a_usage_error() {
    let output = bridge(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_baud_rate_is_a_usage_error() {
    let output = bridge(&["/dev/ttyUSB0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("<baud>"));
}

#[test]
fn zero_baud_rate_is_rejected_before_opening() {
    let output = bridge(&["/dev/serial_bridge_does_not_exist", "0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("failed to open"));
}

#[test]
fn unopenable_device_exits_with_failure() {
    let output = bridge(&["/dev/serial_bridge_does_not_exist", "9600"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to open serial device /dev/serial_bridge_does_not_exist"));
}
