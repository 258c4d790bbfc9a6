use tracing::Level;

/// Installs a formatting subscriber as the global default.
///
/// Returns false when a subscriber was already installed, which leaves that
/// one in place.
pub fn setup_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .is_ok()
}
