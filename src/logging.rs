use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` raises the crate level to
/// debug. Output goes to stderr so it can be redirected away from the
/// terminal UI.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "mtv_remote=debug"
    } else {
        "mtv_remote=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
