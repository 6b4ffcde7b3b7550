/// Configure tracing once for the whole process.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies. Output goes to
/// stderr so log lines never mix with the console on stdout.
///
/// ```bash
/// RUST_LOG=debug cargo run                                   # everything
/// RUST_LOG=sweet_shop::actors=info cargo run                 # catalog service only
/// cargo run -- --log-level info                              # same as RUST_LOG=info
/// ```
pub fn setup_tracing(default_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
