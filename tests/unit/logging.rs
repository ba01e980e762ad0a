use super::*;

// Env mutation and the global subscriber are process-wide, so everything
// lives in one test.
#[test]
fn log_dir_override_is_created_and_used() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("nested").join("logs");
    std::env::set_var("CADENZA_LOG_DIR", &log_dir);

    let resolved = resolve_log_dir().unwrap();
    assert_eq!(resolved, log_dir);
    assert!(log_dir.is_dir());

    if let Some(guard) = init() {
        assert_eq!(guard.log_dir(), log_dir.as_path());
        // A second init cannot install another global subscriber.
        assert!(init().is_none());
    }

    std::env::remove_var("CADENZA_LOG_DIR");
}
