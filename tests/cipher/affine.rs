use classical_cipher_engine::consts::VALID_AFFINE_MULTIPLIERS;
use classical_cipher_engine::{affine, CipherError, Mode};

#[test]
fn test_affine_encrypt_and_decrypt() {
    let enc = affine("HELLO", 7, 3, Mode::Encrypt).unwrap();
    assert_eq!(enc.result, "AFCCX");
    assert_eq!(enc.steps[0].formula, "(7*7 + 3) mod 26 = 0");

    let dec = affine(&enc.result, 7, 3, Mode::Decrypt).unwrap();
    assert_eq!(dec.result, "HELLO");
    assert_eq!(dec.steps[0].formula, "15*(0 - 3) mod 26 = 7");
}

#[test]
fn test_affine_rejects_multiplier_sharing_factor_with_26() {
    let err = affine("HELLO", 4, 3, Mode::Encrypt).unwrap_err();
    assert!(matches!(err, CipherError::InvalidMultiplier(4)));
    assert!(err
        .to_string()
        .contains("1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25"));

    assert!(affine("HELLO", 13, 0, Mode::Encrypt).is_err());
    assert!(affine("HELLO", 0, 0, Mode::Encrypt).is_err());
}

#[test]
fn test_affine_extreme_multipliers_are_reduced_not_overflowed() {
    assert!(matches!(
        affine("HELLO", i64::MIN, 3, Mode::Encrypt),
        Err(CipherError::InvalidMultiplier(i64::MIN))
    ));
    // i64::MAX ≡ 7 and i64::MIN ≡ 18 (mod 26)
    let enc = affine("HELLO", i64::MAX, i64::MIN, Mode::Encrypt).unwrap();
    let same = affine("HELLO", 7, 18, Mode::Encrypt).unwrap();
    assert_eq!(enc.result, same.result);
    assert_eq!(enc.steps[0].key.as_deref(), Some("a=7, b=18"));
}

#[test]
fn test_affine_roundtrip_for_every_valid_multiplier() {
    let text = "The quick brown fox jumps over the lazy dog";
    for a in VALID_AFFINE_MULTIPLIERS {
        let enc = affine(text, a, 11, Mode::Encrypt).unwrap();
        let dec = affine(&enc.result, a, 11, Mode::Decrypt).unwrap();
        assert_eq!(dec.result, "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG", "a={a}");
    }
}
