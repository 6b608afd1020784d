use tracing_subscriber::{fmt, prelude::*, EnvFilter};


/// Environment variable that overrides the log filter, same syntax as `RUST_LOG`
pub const LOG_ENV: &str = "NAVGRAPH_LOG";

/// Filter directive for the given CLI flags
/// An explicit level wins over `verbose`, a bare level is scoped to this crate
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("navgraph={level}"),
        (true, None) => "navgraph=debug".to_string(),
        (false, None) => "navgraph=warn".to_string(),
    }
}

/// Install a compact stderr subscriber
/// `NAVGRAPH_LOG` or `RUST_LOG` take precedence over the flags
pub fn init_tracing(verbose: bool, log_level: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(filter_directive(verbose, log_level)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(false, None), "navgraph=warn");
        assert_eq!(filter_directive(true, None), "navgraph=debug");
        assert_eq!(filter_directive(false, Some("trace")), "navgraph=trace");
        assert_eq!(filter_directive(true, Some("info")), "navgraph=info");
        assert_eq!(filter_directive(false, Some("navgraph=info,warn")), "navgraph=info,warn");
    }
}
