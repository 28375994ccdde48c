use prime_sieve::prelude::*;

#[test]
fn full_matches_published_counts() {
    for &(limit, expected) in KNOWN_COUNTS.iter() {
        let sieve = Sieve::try_full(limit).unwrap();
        assert_eq!(sieve.query().count_primes(0, limit), expected, "pi({limit})");
    }
}

#[test]
fn segmented_matches_published_counts() {
    let config = SegmentConfig::default();
    for &(limit, expected) in KNOWN_COUNTS.iter() {
        let sieve = Sieve::try_segmented(limit, &config).unwrap();
        assert_eq!(sieve.query().count_primes(0, limit), expected, "pi({limit})");
    }
}

#[test]
fn larger_milestones() {
    let sieve = Sieve::try_segmented(100_000, &SegmentConfig::default()).unwrap();
    let query = sieve.query();
    assert_eq!(query.count_primes(0, 10_000), 1_229);
    assert_eq!(query.count_primes(0, 100_000), 9_592);
}

#[test]
fn selfcheck_runners_agree() {
    assert!(check_full().unwrap().iter().all(CheckOutcome::passed));
    let config = SegmentConfig { block_bytes: 4096 };
    assert!(check_segmented(&config).unwrap().iter().all(CheckOutcome::passed));
}
