// tests/startup.rs
use std::process::Command;

#[test]
fn test_missing_chat_id_stops_before_polling() {
    let log_file = std::env::temp_dir().join(format!("homework_bot_startup_{}.log", std::process::id()));
    let _ = std::fs::remove_file(&log_file);

    let output = Command::new(env!("CARGO_BIN_EXE_homework-bot"))
        .env("PRACTICUM_TOKEN", "p-token")
        .env("TELEGRAM_TOKEN", "t-token")
        // Set but empty so a local .env cannot supply it.
        .env("TELEGRAM_CHAT_ID", "")
        .env("LOG_FILE", &log_file)
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run bot binary");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ERROR - Configuration error: Missing required environment variables: TELEGRAM_CHAT_ID - critical"));
    assert!(!stdout.contains("Polling every"));

    let logged = std::fs::read_to_string(&log_file).unwrap();
    assert!(logged.contains("TELEGRAM_CHAT_ID"));
    let _ = std::fs::remove_file(&log_file);
}
