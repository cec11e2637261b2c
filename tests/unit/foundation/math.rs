use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn range_stays_in_bounds() {
    let mut rng = Rng64::new(9);
    for _ in 0..1_000 {
        let v = rng.range(-3.0, -1.0);
        assert!((-3.0..-1.0).contains(&v));
    }
}

#[test]
fn chance_extremes_are_exact() {
    let mut rng = Rng64::new(1);
    for _ in 0..100 {
        assert!(rng.chance(1.0));
        assert!(rng.chance(7.5));
        assert!(!rng.chance(0.0));
        assert!(!rng.chance(f64::NAN));
    }
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255(255, 255), 255);
    assert_eq!(mul_div255(0, 255), 0);
    assert_eq!(mul_div255(128, 255), 128);
    assert_eq!(mul_div255(255, 128), 128);
}
