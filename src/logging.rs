use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Later calls are ignored.
pub fn init() {
    let env_filter = if let Ok(from_env) = EnvFilter::try_from_default_env() {
        from_env
    } else if cfg!(debug_assertions) {
        EnvFilter::new("info,tao=error,order_cart=debug,order_cart_lib=debug")
    } else {
        EnvFilter::new("warn,tao=error")
    };

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .with_writer(std::io::stdout);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!("Tracing initialized");
    }
}
