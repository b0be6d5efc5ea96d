use classical_cipher_engine::core::{
    gcd, index_letter, letter_index, mod_inverse, modulo, normalize, normalize_to_alphabet,
};
use classical_cipher_engine::CipherError;

#[test]
fn test_normalize_uppercases_and_strips_non_letters() {
    assert_eq!(normalize("Hello, World! 123"), "HELLOWORLD");
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("ß é 42"), "");
}

#[test]
fn test_normalize_to_alphabet_drops_letters_past_the_end() {
    assert_eq!(normalize_to_alphabet("abcdefg", 5), "ABCDE");
    assert_eq!(normalize_to_alphabet("zebra", 5), "EBA");
}

#[test]
fn test_modulo_is_never_negative() {
    assert_eq!(modulo(-3, 26), 23);
    assert_eq!(modulo(-26, 26), 0);
    assert_eq!(modulo(53, 26), 1);
}

#[test]
fn test_gcd() {
    assert_eq!(gcd(4, 26), 2);
    assert_eq!(gcd(7, 26), 1);
    assert_eq!(gcd(0, 5), 5);
    assert_eq!(gcd(-4, 26), 2);
}

#[test]
fn test_gcd_handles_extreme_values() {
    assert_eq!(gcd(i64::MIN, 26), 2);
    assert_eq!(gcd(26, i64::MIN), 2);
    assert_eq!(gcd(i64::MIN + 1, 26), 1);
    assert_eq!(gcd(i64::MIN, 0), i64::MAX);
}

#[test]
fn test_mod_inverse() {
    assert_eq!(mod_inverse(7, 26).unwrap(), 15);
    assert_eq!(mod_inverse(25, 26).unwrap(), 25);
    assert_eq!(mod_inverse(-1, 26).unwrap(), 25);
    assert!(matches!(
        mod_inverse(2, 26),
        Err(CipherError::NoInverse { a: 2, m: 26 })
    ));
}

#[test]
fn test_mod_inverse_without_a_usable_modulus() {
    assert!(matches!(
        mod_inverse(3, 0),
        Err(CipherError::NoInverse { a: 3, m: 0 })
    ));
    assert!(matches!(
        mod_inverse(3, 1),
        Err(CipherError::NoInverse { a: 3, m: 1 })
    ));
    assert!(matches!(
        mod_inverse(3, -26),
        Err(CipherError::NoInverse { a: 3, m: -26 })
    ));
}

#[test]
fn test_mod_inverse_with_large_modulus() {
    // 2^61 - 1 is prime
    let m = (1i64 << 61) - 1;
    let inv = mod_inverse(3, m).unwrap();
    assert_eq!((i128::from(inv) * 3) % i128::from(m), 1);
    assert!(matches!(
        mod_inverse(i64::MIN, 26),
        Err(CipherError::NoInverse { a: 18, m: 26 })
    ));
}

#[test]
fn test_letter_index_roundtrip() {
    assert_eq!(letter_index('A'), Some(0));
    assert_eq!(letter_index('Z'), Some(25));
    assert_eq!(letter_index('a'), None);
    assert_eq!(index_letter(27), 'B');
    assert_eq!(index_letter(-1), 'Z');
}
