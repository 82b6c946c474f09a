use super::*;

#[test]
fn refcell_update_returns_closure_value() {
    let cell = RefCell::new(vec![1, 2]);
    let len = cell.update_with(|v| {
        v.push(3);
        v.len()
    });
    assert_eq!(len, Some(3));
    assert_eq!(cell.read_with(|v| v.iter().sum::<i32>()), Some(6));
}

#[test]
fn signal_update_and_read_round_trip() {
    let owner = Owner::new();
    owner.with(|| {
        let signal = RwSignal::new(String::from("a"));
        signal.update_with(|s| s.push('b'));
        assert_eq!(signal.read_with(Clone::clone), Some("ab".to_owned()));
    });
}

#[test]
fn disposed_signal_is_a_no_op() {
    let owner = Owner::new();
    let signal = owner.with(|| RwSignal::new(0_u32));
    signal.dispose();
    assert_eq!(signal.update_with(|v| *v += 1), None);
    assert_eq!(signal.read_with(|v| *v), None);
}
