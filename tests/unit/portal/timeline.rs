use super::*;

#[test]
fn timers_fire_in_deadline_order_once() {
    let mut tl = Timeline::new();
    tl.arm(2.0, 1, TimerAction::Faded);
    tl.arm(1.0, 1, TimerAction::Covered);
    tl.arm(5.0, 1, TimerAction::Settled);
    assert_eq!(tl.next_due(), Some(1.0));

    assert!(tl.take_due(0.5, 1).is_empty());
    assert_eq!(
        tl.take_due(2.0, 1),
        vec![TimerAction::Covered, TimerAction::Faded]
    );
    assert!(tl.take_due(2.0, 1).is_empty());
    assert_eq!(tl.len(), 1);
    assert_eq!(tl.next_due(), Some(5.0));
}

#[test]
fn stale_epoch_timers_are_dropped() {
    let mut tl = Timeline::new();
    tl.arm(1.0, 1, TimerAction::Covered);
    tl.arm(1.0, 2, TimerAction::Faded);
    assert_eq!(tl.take_due(1.0, 2), vec![TimerAction::Faded]);
    assert!(tl.is_empty());
}

#[test]
fn cancel_all_empties_the_queue() {
    let mut tl = Timeline::new();
    tl.arm(1.0, 1, TimerAction::AutoEnter);
    tl.cancel_all();
    assert!(tl.is_empty());
    assert_eq!(tl.next_due(), None);
}
