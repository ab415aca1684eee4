pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // no ANSI color codes inside the JSON lines.
        .with_ansi(false)
        .json()
        .init();
}
