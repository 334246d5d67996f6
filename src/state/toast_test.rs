use super::*;

// =============================================================
// Toast queue
// =============================================================

#[test]
fn push_appends_and_returns_id() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Success, "Saved");
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, id);
    assert_eq!(state.toasts[0].message, "Saved");
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "one");
    let _second = state.push(ToastKind::Error, "two");

    state.dismiss(&first);

    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "two");
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastKind::Error, "kept");
    state.dismiss("missing");
    assert_eq!(state.toasts.len(), 1);
}
