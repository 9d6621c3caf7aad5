//! End-to-end checks across the PKE, the KEM transform and the batch runner.

use lwekem_api::{Kem, Serialize, SerializeSecret};
use lwekem_kem::lwe::{run_trials, Lwe1024ParamsImpl, Lwe512ParamsImpl, TrialOutcome};
use lwekem_kem::{
    run_batch, BatchConfig, CoinMode, Lwe1024, Lwe512, LweCiphertext, LweKemParams, LwePublicKey,
    LweSecretKey,
};
use lwekem_pke::{decrypt, encrypt, keygen, Coins, LweParams};
use lwekem_tests::{keypair, seeded_rng};
use rand::Rng;

/// Runs 1000 round trips and checks them against the recorded baseline.
///
/// Measured baseline at seeds 11-14: 0/1000 rejected and 0 bit errors for
/// each profile and coin mode. The batches are deterministic for a fixed
/// seed, so any rejection here is a regression. The general correctness
/// floor for other seeds is 99% acceptance.
fn assert_batch<P: LweKemParams>(mode: CoinMode, seed: u64) {
    let (pk, sk) = keypair::<P>(seed);
    let config = BatchConfig {
        trials: 1000,
        seed,
        mode,
        threads: None,
    };
    let report = run_batch(&pk, &sk, &config).unwrap();

    assert_eq!(report.trials, 1000);
    assert!(
        report.accepted * 100 >= report.trials * 99,
        "{} {:?}: only {} of {} trials accepted",
        P::NAME,
        mode,
        report.accepted,
        report.trials
    );
    assert_eq!(report.agreed, report.accepted);
    assert!(report.failure_rate() <= 0.01);

    assert_eq!(
        report.accepted, report.trials,
        "{} {:?}: baseline is 0 rejections at seed {}",
        P::NAME, mode, seed
    );
    assert_eq!(report.bit_errors, 0, "{} {:?}: baseline is 0 bit errors", P::NAME, mode);
    assert_eq!(report.failure_rate(), 0.0);
}

#[test]
fn batch_512_derived_coins() {
    assert_batch::<Lwe512ParamsImpl>(CoinMode::Derived, 11);
}

#[test]
fn batch_512_explicit_coins() {
    assert_batch::<Lwe512ParamsImpl>(CoinMode::Explicit, 12);
}

#[test]
fn batch_1024_derived_coins() {
    assert_batch::<Lwe1024ParamsImpl>(CoinMode::Derived, 13);
}

#[test]
fn batch_1024_explicit_coins() {
    assert_batch::<Lwe1024ParamsImpl>(CoinMode::Explicit, 14);
}

#[test]
fn batch_outcomes_do_not_depend_on_thread_count() {
    let (pk, sk) = keypair::<Lwe512ParamsImpl>(21);
    let run = |threads| {
        let config = BatchConfig {
            trials: 32,
            seed: 99,
            mode: CoinMode::Explicit,
            threads: Some(threads),
        };
        run_trials(&pk, &sk, &config).unwrap()
    };
    let single: Vec<TrialOutcome> = run(1);
    assert_eq!(single, run(3));
    assert!(single.iter().any(|o| o.bit == 0));
    assert!(single.iter().any(|o| o.bit == 1));
}

#[test]
fn pke_decrypts_both_bits() {
    for params in [LweParams::lwe_512(), LweParams::lwe_1024()] {
        let mut rng = seeded_rng(params.n() as u64);
        let (pk, sk) = keygen(&params, &mut rng).unwrap();
        for _ in 0..50 {
            for bit in [0u8, 1] {
                let coins = Coins::sample(&params, &mut rng).unwrap();
                let ct = encrypt(&params, &pk, &coins, bit).unwrap();
                assert_eq!(decrypt(&params, &sk, &ct).unwrap(), bit);
            }
        }
    }
}

#[test]
fn kem_trait_roundtrip() {
    fn roundtrip<K: Kem>(seed: u64)
    where
        K::SharedSecret: PartialEq + core::fmt::Debug,
    {
        let mut rng = seeded_rng(seed);
        let kp = K::keypair(&mut rng).unwrap();
        let pk = K::public_key(&kp);
        let sk = K::secret_key(&kp);
        for _ in 0..10 {
            let (ct, ss_enc) = K::encapsulate(&mut rng, &pk).unwrap();
            let ss_dec = K::decapsulate(&sk, &ct).unwrap();
            assert_eq!(ss_enc, ss_dec, "{}", K::name());
        }
    }
    roundtrip::<Lwe512>(31);
    roundtrip::<Lwe1024>(32);
}

#[test]
fn serialized_keys_and_ciphertexts_still_decapsulate() {
    let mut rng = seeded_rng(41);
    let (pk, sk) = Lwe512::keypair(&mut rng).unwrap();

    let pk2 = LwePublicKey::<Lwe512ParamsImpl>::from_bytes(&pk.to_bytes()).unwrap();
    let sk2 =
        LweSecretKey::<Lwe512ParamsImpl>::from_bytes(&sk.to_bytes_zeroizing()).unwrap();
    assert_eq!(pk2, pk);

    let (ct, ss) = Lwe512::encapsulate(&mut rng, &pk2).unwrap();
    let ct2 = LweCiphertext::<Lwe512ParamsImpl>::from_bytes(&ct.to_bytes()).unwrap();
    assert_eq!(Lwe512::decapsulate(&sk2, &ct2).unwrap(), ss);

    // Bytes for one profile are rejected by the other
    assert!(LwePublicKey::<Lwe1024ParamsImpl>::from_bytes(&pk.to_bytes()).is_err());
    assert!(LweCiphertext::<Lwe1024ParamsImpl>::from_bytes(&ct.to_bytes()).is_err());
}

#[test]
fn tampered_ciphertexts_are_implicitly_rejected() {
    let mut rng = seeded_rng(51);
    let (pk, sk) = Lwe512::keypair(&mut rng).unwrap();
    let params = LweParams::lwe_512();

    for trial in 0..120 {
        let explicit = trial % 2 == 0;
        let coins = Coins::sample(&params, &mut rng).unwrap();
        let bit = rng.gen_range(0..=1u8);

        let (ct, ss) = if explicit {
            Lwe512::encapsulate_with_coins(&pk, bit, &coins).unwrap()
        } else {
            Lwe512::encapsulate_bit(&pk, bit).unwrap()
        };

        // Work on the wire form so the test sees only the public API
        let mut bytes = ct.to_bytes();
        let header = 4;
        let body = bytes.len() - header;
        let word = rng.gen_range(0..body / 4);
        let offset = header + word * 4;
        let mut entry = [0u8; 4];
        entry.copy_from_slice(&bytes[offset..offset + 4]);
        // Step by one so the entry stays below q
        let x = u32::from_le_bytes(entry);
        let shifted = if x > 0 { x - 1 } else { x + 1 };
        bytes[offset..offset + 4].copy_from_slice(&shifted.to_le_bytes());
        let tampered = LweCiphertext::<Lwe512ParamsImpl>::from_bytes(&bytes).unwrap();
        assert_ne!(tampered, ct);

        let recovered = if explicit {
            Lwe512::decapsulate_with_coins(&sk, &tampered, &coins).unwrap()
        } else {
            Lwe512::decapsulate(&sk, &tampered).unwrap()
        };
        assert_ne!(recovered, ss, "trial {} produced the honest key", trial);

        // Rejection is deterministic in (sk, ct)
        let again = if explicit {
            Lwe512::decapsulate_with_coins(&sk, &tampered, &coins).unwrap()
        } else {
            Lwe512::decapsulate(&sk, &tampered).unwrap()
        };
        assert_eq!(recovered, again);
    }
}
