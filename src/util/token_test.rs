use super::*;

// =============================================================
// Token store
// =============================================================

#[test]
fn read_after_clear_is_absent() {
    clear();
    assert!(read().is_none());
}

#[test]
fn save_overwrites_previous_credential() {
    save("t-old");
    save("t-new");
    assert_eq!(read().as_deref(), Some("t-new"));
    clear();
}

#[test]
fn clear_is_idempotent() {
    save("t-1");
    clear();
    clear();
    assert!(read().is_none());
}
