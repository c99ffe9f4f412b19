use shelf_logger::{LevelFilter, Logger};

#[test]
fn init_console_only_keeps_name() {
    let logger = Logger::builder()
        .name("integration-console-only")
        .console(true)
        .ansi(false)
        .level(LevelFilter::INFO)
        .env_filter("shelf_kernel=debug")
        .init()
        .expect("logger should initialize");

    tracing::info!("hello from integration test");
    assert_eq!(logger.name(), "integration-console-only");
}
