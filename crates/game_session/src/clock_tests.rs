use super::*;

#[test]
fn test_deadline_and_remaining() {
    let t0 = Instant::now();
    let clock = Clock::start(Duration::from_secs(60), t0);
    assert_eq!(clock.deadline(), t0 + Duration::from_secs(60));
    assert_eq!(clock.remaining(t0 + Duration::from_secs(15)), Duration::from_secs(45));
    assert!(!clock.is_expired(t0 + Duration::from_secs(59)));
    assert!(clock.is_expired(t0 + Duration::from_secs(60)));
    assert_eq!(clock.remaining(t0 + Duration::from_secs(90)), Duration::ZERO);
}

#[test]
fn test_reset_moves_deadline() {
    let t0 = Instant::now();
    let mut clock = Clock::start(Duration::from_secs(10), t0);
    let later = t0 + Duration::from_secs(8);
    clock.reset(later);
    assert_eq!(clock.deadline(), later + Duration::from_secs(10));
    assert!(!clock.is_expired(t0 + Duration::from_secs(12)));
}
