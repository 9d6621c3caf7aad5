//! Timing comparison between accepted and rejected decapsulations.
//!
//! Both paths decrypt, re-encrypt and hash the same amount of data, then
//! select the output key without branching. These tests are noisy on
//! shared machines and unoptimised builds; run them with
//! `cargo test --release -p lwekem-tests -- --ignored`.

use lwekem_api::{Kem, Serialize};
use lwekem_internal::constant_time::ct_eq_words;
use lwekem_kem::lwe::Lwe512ParamsImpl;
use lwekem_kem::{Lwe512, LweCiphertext};
use lwekem_tests::constant_time::{generate_test_insights, TestConfig, TimingTester};
use lwekem_tests::seeded_rng;

#[test]
#[ignore = "timing-sensitive"]
fn decapsulation_accept_and_reject_take_equal_time() {
    let config = TestConfig::for_decapsulation();
    let mut rng = seeded_rng(61);
    let (pk, sk) = Lwe512::keypair(&mut rng).unwrap();
    let (valid, _) = Lwe512::encapsulate(&mut rng, &pk).unwrap();

    let mut bytes = valid.to_bytes();
    let last = bytes.len() - 4;
    bytes[last] ^= 1;
    let invalid = LweCiphertext::<Lwe512ParamsImpl>::from_bytes(&bytes).unwrap();

    for _ in 0..config.num_warmup {
        let _ = Lwe512::decapsulate(&sk, &valid);
        let _ = Lwe512::decapsulate(&sk, &invalid);
    }

    let tester = TimingTester::from_config(&config);
    let t_valid = tester.measure(|| {
        let _ = Lwe512::decapsulate(&sk, &valid);
    });
    let t_invalid = tester.measure(|| {
        let _ = Lwe512::decapsulate(&sk, &invalid);
    });

    let analysis = match tester.analyze_constant_time(&t_valid, &t_invalid, &config) {
        Ok(result) => result,
        Err(e) => panic!("Analysis error: {}", e),
    };
    println!("{}", generate_test_insights(&analysis, &config, "LWE-KEM-512 decapsulation"));

    assert!(
        analysis.is_constant_time,
        "decapsulation timing depends on acceptance: combined_score={:.3} (threshold: {:.3})",
        analysis.combined_score, config.combined_score_threshold
    );
}

#[test]
#[ignore = "timing-sensitive"]
fn word_comparison_ignores_mismatch_position() {
    let config = TestConfig::for_comparison();
    let a = vec![7u32; 1025];
    let mut early = a.clone();
    early[0] ^= 1;
    let mut late = a.clone();
    late[1024] ^= 1;

    for _ in 0..config.num_warmup {
        let _ = ct_eq_words(&a, &early);
        let _ = ct_eq_words(&a, &late);
    }

    let tester = TimingTester::from_config(&config);
    let t_early = tester.measure(|| {
        let _ = core::hint::black_box(ct_eq_words(&a, &early));
    });
    let t_late = tester.measure(|| {
        let _ = core::hint::black_box(ct_eq_words(&a, &late));
    });

    let analysis = tester
        .analyze_constant_time(&t_early, &t_late, &config)
        .unwrap();
    println!("{}", generate_test_insights(&analysis, &config, "ct_eq_words"));
    assert!(analysis.is_constant_time);
}
