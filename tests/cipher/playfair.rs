use std::collections::HashSet;

use classical_cipher_engine::cipher::playfair::prepare_digraphs;
use classical_cipher_engine::core::PlayfairRule;
use classical_cipher_engine::{build_matrix, playfair, CipherError, Mode, StepDetail};

#[test]
fn test_build_matrix_keyword_first_then_alphabet() {
    let matrix = build_matrix("KEYWORD");
    let letters: String = matrix.letters().iter().collect();
    assert_eq!(letters, "KEYWORDABCFGHILMNPQSTUVXZ");
    assert_eq!(matrix.to_string().lines().next(), Some("K E Y W O"));
}

#[test]
fn test_build_matrix_has_25_distinct_letters_without_j() {
    for keyword in ["", "KEYWORD", "jumbled jackdaws", "PLAYFAIR EXAMPLE", "zzzz"] {
        let matrix = build_matrix(keyword);
        let unique: HashSet<char> = matrix.letters().iter().copied().collect();
        assert_eq!(matrix.letters().len(), 25);
        assert_eq!(unique.len(), 25);
        assert!(!unique.contains(&'J'));
        assert_eq!(matrix, build_matrix(keyword));
    }
}

#[test]
fn test_matrix_looks_up_j_as_i() {
    let matrix = build_matrix("KEYWORD");
    assert_eq!(matrix.position('J'), matrix.position('I'));
    assert_eq!(matrix.position('K'), Some((0, 0)));
    assert_eq!(matrix.at(4, 4), 'Z');
}

#[test]
fn test_prepare_digraphs_inserts_filler() {
    assert_eq!(prepare_digraphs("HELLO"), [['H', 'E'], ['L', 'X'], ['L', 'O']]);
    assert_eq!(
        prepare_digraphs("balloon"),
        [['B', 'A'], ['L', 'X'], ['L', 'O'], ['O', 'N']]
    );
    assert_eq!(prepare_digraphs("JAZZ"), [['I', 'A'], ['Z', 'X'], ['Z', 'X']]);
    assert!(prepare_digraphs("").is_empty());
}

#[test]
fn test_playfair_hello_keyword() {
    let out = playfair("HELLO", "KEYWORD", Mode::Encrypt).unwrap();
    assert_eq!(out.result, "GYIZSC");

    let inputs: Vec<&str> = out.steps.iter().map(|s| s.input.as_str()).collect();
    assert_eq!(inputs, ["HE", "LX", "LO"]);

    assert_eq!(
        out.steps[0].detail,
        StepDetail::Playfair(PlayfairRule::Rectangle {
            first: (2, 2),
            second: (0, 1),
        })
    );
    assert_eq!(out.steps[0].formula, "Rectangle, swap columns: [3,3] & [1,2]");
    assert_eq!(
        out.steps[2].detail,
        StepDetail::Playfair(PlayfairRule::SameColumn { column: 4, shift: 1 })
    );
    assert_eq!(out.steps[2].formula, "Same column (column 5), shift rows down");

    // filler is not removed on the way back
    let dec = playfair(&out.result, "KEYWORD", Mode::Decrypt).unwrap();
    assert_eq!(dec.result, "HELXLO");
}

#[test]
fn test_playfair_wikipedia_example() {
    let out = playfair(
        "Hide the gold in the tree stump",
        "playfair example",
        Mode::Encrypt,
    )
    .unwrap();
    assert_eq!(out.result, "BMODZBXDNABEKUDMUIXMMOUVIF");
    assert!(out.steps.iter().any(|s| matches!(
        s.detail,
        StepDetail::Playfair(PlayfairRule::SameRow { shift: 1, .. })
    )));

    let dec = playfair(&out.result, "playfair example", Mode::Decrypt).unwrap();
    assert_eq!(dec.result, "HIDETHEGOLDINTHETREXESTUMP");
}

#[test]
fn test_playfair_roundtrip_without_filler() {
    let enc = playfair("ATTACK", "MONARCHY", Mode::Encrypt).unwrap();
    let dec = playfair(&enc.result, "MONARCHY", Mode::Decrypt).unwrap();
    assert_eq!(dec.result, "ATTACK");
}

#[test]
fn test_playfair_rejects_empty_keyword() {
    let err = playfair("HELLO", "  42 ", Mode::Encrypt).unwrap_err();
    assert!(matches!(err, CipherError::EmptyKeyword));
}
