use super::*;

#[test]
fn verbosity_raises_level() {
    assert_eq!(level_for_verbosity(0), Level::ERROR);
    assert_eq!(level_for_verbosity(1), Level::INFO);
    assert_eq!(level_for_verbosity(2), Level::DEBUG);
    assert_eq!(level_for_verbosity(3), Level::TRACE);
    assert_eq!(level_for_verbosity(u8::MAX), Level::TRACE);
}

#[test]
fn init_twice_is_harmless() {
    init_logging(0);
    init_logging(2);
    tracing::error!("logging initialized");
}
