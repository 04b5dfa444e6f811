//! Logging setup tests.

use geotext_core::logging;

#[test]
fn test_try_init_is_idempotent() {
    // The first call may or may not win depending on test ordering, but a second
    // call must never panic and must report that a subscriber already exists.
    let _ = logging::try_init();
    assert!(!logging::try_init());
    tracing::info!("subscriber installed");
}
