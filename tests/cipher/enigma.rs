use classical_cipher_engine::cipher::enigma::{reflector, rotor, REFLECTORS, ROTORS};
use classical_cipher_engine::{enigma, enigma_traced, CipherError, StepDetail};

const I_II_III: [&str; 3] = ["I", "II", "III"];

#[test]
fn test_enigma_known_output_from_aaa() {
    assert_eq!(enigma("AAAAA", &I_II_III, "B", &[0, 0, 0]).unwrap(), "BDZGO");
}

#[test]
fn test_enigma_is_reciprocal() {
    let settings = [
        (["I", "II", "III"], "B", [0, 3, 20]),
        (["V", "IV", "I"], "C", [12, 25, 7]),
        (["II", "V", "III"], "B", [25, 4, 21]),
    ];
    for (rotors, refl, pos) in settings {
        let enc = enigma("Hello World, attack at dawn", &rotors, refl, &pos).unwrap();
        let dec = enigma(&enc, &rotors, refl, &pos).unwrap();
        assert_eq!(dec, "HELLOWORLDATTACKATDAWN");
    }
}

#[test]
fn test_enigma_ignores_non_letters() {
    let a = enigma("hello world", &I_II_III, "B", &[0, 3, 20]).unwrap();
    let b = enigma("HELLOWORLD", &I_II_III, "B", &[0, 3, 20]).unwrap();
    assert_eq!(a, "IBXXXNVDFL");
    assert_eq!(a, b);
}

#[test]
fn test_enigma_double_stepping() {
    let out = enigma_traced("AAA", &I_II_III, "B", &[0, 3, 21]).unwrap();
    let positions: Vec<[usize; 3]> = out
        .steps
        .iter()
        .map(|s| match s.detail {
            StepDetail::Enigma { positions } => positions,
            _ => panic!("expected enigma detail"),
        })
        .collect();
    // right at V carries the middle to E, which then carries itself and the left
    assert_eq!(positions, [[0, 4, 22], [1, 5, 23], [1, 5, 24]]);
    assert_eq!(out.result, "QIB");
    assert_eq!(out.steps[1].key.as_deref(), Some("BFX"));
}

#[test]
fn test_enigma_trace_records_signal_path() {
    let out = enigma_traced("A", &I_II_III, "B", &[0, 0, 0]).unwrap();
    let step = &out.steps[0];
    assert_eq!(step.key.as_deref(), Some("AAB"));
    assert!(step.formula.starts_with("A → "));
    assert!(step.formula.ends_with(" → B"));
    assert_eq!(step.formula.split(" → ").count(), 8);
}

#[test]
fn test_enigma_catalog() {
    assert_eq!(ROTORS.len(), 5);
    assert_eq!(REFLECTORS.len(), 2);
    assert_eq!(rotor("I").unwrap().notch, 16);
    assert_eq!(rotor("V").unwrap().notch, 25);
    for refl in &REFLECTORS {
        // reflectors are involutions without fixed points
        for (i, &c) in refl.wiring.iter().enumerate() {
            let j = usize::from(c - b'A');
            assert_ne!(i, j);
            assert_eq!(usize::from(refl.wiring[j] - b'A'), i);
        }
    }
    assert!(reflector("C").is_ok());
}

#[test]
fn test_every_rotor_order_is_reciprocal_and_never_fixed() {
    let text = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
    for left in &ROTORS {
        for middle in &ROTORS {
            for right in &ROTORS {
                let order = [left.name, middle.name, right.name];
                if order[0] == order[1] || order[1] == order[2] || order[0] == order[2] {
                    continue;
                }
                let positions = [left.notch, (middle.notch + 25) % 26, right.notch];
                let enc = enigma(text, &order, "C", &positions).unwrap();
                assert!(
                    enc.bytes().zip(text.bytes()).all(|(c, p)| c != p),
                    "{order:?}"
                );
                assert_eq!(enigma(&enc, &order, "C", &positions).unwrap(), text, "{order:?}");
            }
        }
    }
}

#[test]
fn test_enigma_rejects_bad_settings() {
    assert!(matches!(
        enigma("A", &["I", "II", "VI"], "B", &[0, 0, 0]),
        Err(CipherError::UnknownRotor(name)) if name == "VI"
    ));
    assert!(matches!(
        enigma("A", &I_II_III, "A", &[0, 0, 0]),
        Err(CipherError::UnknownReflector(name)) if name == "A"
    ));
    assert!(matches!(
        enigma("A", &["I", "II"], "B", &[0, 0, 0]),
        Err(CipherError::InvalidRotorSelection {
            rotors: 2,
            positions: 3
        })
    ));
    assert!(matches!(
        enigma("A", &I_II_III, "B", &[0, 26, 0]),
        Err(CipherError::InvalidPosition(26))
    ));
}
