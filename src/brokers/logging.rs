use std::error::Error;

use tracing::{error, warn};

pub trait LoggingBroker: Send + Sync {
    fn log_warning(&self, message: &str);
    fn log_error(&self, error: &(dyn Error + 'static));
    fn log_critical(&self, error: &(dyn Error + 'static));
}

/// Renders an error followed by every source, separated by `: `.
pub fn error_chain(error: &(dyn Error + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }

    rendered
}

/// Forwards broker events to `tracing`. Critical events are `ERROR` events
/// tagged with `severity = "critical"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLoggingBroker;

impl LoggingBroker for TracingLoggingBroker {
    fn log_warning(&self, message: &str) {
        warn!("{}", message);
    }

    fn log_error(&self, error: &(dyn Error + 'static)) {
        error!(error = %error_chain(error), "{}", error);
    }

    fn log_critical(&self, error: &(dyn Error + 'static)) {
        error!(severity = "critical", error = %error_chain(error), "{}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer {
        message: &'static str,
        source: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl Error for Layer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.source.as_deref().map(|layer| layer as &(dyn Error + 'static))
        }
    }

    #[test]
    fn test_error_chain_includes_every_source() {
        let error = Layer {
            message: "Service dependency error occurred, contact support.",
            source: Some(Box::new(Layer {
                message: "database connection failed",
                source: Some(Box::new(Layer {
                    message: "pool timed out",
                    source: None,
                })),
            })),
        };

        assert_eq!(
            error_chain(&error),
            "Service dependency error occurred, contact support.: database connection failed: pool timed out"
        );
    }
}
