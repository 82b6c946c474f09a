use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.success("saved");
    let b = state.error("failed");
    assert!(b > a);
    assert_eq!(state.toasts().len(), 2);
    assert_eq!(state.latest().map(|t| t.kind), Some(ToastKind::Error));
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.success("one");
    let b = state.success("two");
    state.dismiss(a);
    assert_eq!(state.toasts().iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    state.dismiss(999);
    assert_eq!(state.toasts().len(), 1);
}

#[test]
fn overflow_drops_oldest() {
    let mut state = ToastState::default();
    for i in 0..(MAX_VISIBLE + 2) {
        state.error(format!("e{i}"));
    }
    assert_eq!(state.toasts().len(), MAX_VISIBLE);
    assert_eq!(state.toasts()[0].message, "e2");
    assert_eq!(state.latest().map(|t| t.message.as_str()), Some("e4"));
}

#[test]
fn default_is_empty() {
    let state = ToastState::default();
    assert!(state.toasts().is_empty());
    assert!(state.latest().is_none());
}
