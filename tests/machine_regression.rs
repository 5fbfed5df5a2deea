//! Regression tests for the Naval A machine.
//!
//! Rotor-position readouts and ciphertexts are frozen vectors for the
//! `B Beta III IV I` rotor order. Any change in output indicates a
//! regression in the stepping or signal-path logic.

mod common;

use common::{apply, naval_a, naval_a_at, FIXED, MOVING, REFLECTORS};
use enigma::{EnigmaError, ErrorKind};

// ═══════════════════════════════════════════════════════════════════════
// Stepping
// ═══════════════════════════════════════════════════════════════════════

/// One key press from AXLE: only the fast rotor moves.
#[test]
fn single_symbol_from_axle() {
    let mut machine = naval_a_at("AXLE", "(YF) (ZH)");
    assert_eq!(machine.convert_message("Y").unwrap(), "Z");
    assert_eq!(machine.settings(), "AXLF");
}

/// Frozen readouts across the double step of the middle rotor and the
/// first carry into the slowest moving rotor.
#[test]
fn double_stepping_readouts() {
    let mut machine = naval_a_at("AXLE", "(YF) (ZH)");

    for _ in 0..12 {
        machine.convert_message("Y").unwrap();
    }
    assert_eq!(machine.settings(), "AXLQ");

    machine.convert_message("Y").unwrap();
    assert_eq!(machine.settings(), "AXMR");

    for _ in 0..597 {
        machine.convert_message("Y").unwrap();
    }
    assert_eq!(machine.settings(), "AXIQ");

    machine.convert_message("Y").unwrap();
    assert_eq!(machine.settings(), "AXJR");

    machine.convert_message("Y").unwrap();
    assert_eq!(machine.settings(), "AYKS");
}

/// Index-level conversion steps exactly like symbol-level conversion.
#[test]
fn index_conversion_matches_symbol_conversion() {
    let mut by_symbol = naval_a_at("AXLE", "(YF) (ZH)");
    let mut by_index = naval_a_at("AXLE", "(YF) (ZH)");
    let alpha = by_index.alphabet().clone();
    for ch in "HELLOWORLD".chars() {
        let expected = by_symbol.convert_message(&ch.to_string()).unwrap();
        let out = by_index.convert(alpha.to_int(ch).unwrap()).unwrap();
        assert_eq!(alpha.to_char(out).unwrap().to_string(), expected);
    }
    assert_eq!(by_symbol.settings(), by_index.settings());
}

// ═══════════════════════════════════════════════════════════════════════
// Messages
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn hiawatha_message() {
    let mut machine = naval_a_at("AXLE", "(HQ) (EX) (IP) (TR) (BY)");
    assert_eq!(
        machine.convert_message("FROM HIS SHOULDER HIAWATHA").unwrap(),
        "QVPQSOKOILPUBKJZPISFXDW"
    );
}

#[test]
fn hiawatha_message_decrypts() {
    let mut machine = naval_a();
    apply(&mut machine, "* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)");
    assert_eq!(
        machine.convert_message("QVPQS OKOIL PUBKJ ZPISF XDW").unwrap(),
        "FROMHISSHOULDERHIAWATHA"
    );
}

#[test]
fn encrypt_then_decrypt_restores_message() {
    let message = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";
    let line = "* C Gamma VIII VI V ZZMY (AQ) (BW) (CE)";

    let mut encoder = naval_a();
    apply(&mut encoder, line);
    let cipher = encoder.convert_message(message).unwrap();

    let mut decoder = naval_a();
    apply(&mut decoder, line);
    assert_eq!(
        decoder.convert_message(&cipher).unwrap(),
        message.replace(' ', "")
    );
}

#[test]
fn no_symbol_encrypts_to_itself() {
    let mut machine = naval_a_at("AAAA", "");
    let plain = "A".repeat(200);
    let cipher = machine.convert_message(&plain).unwrap();
    assert!(cipher.chars().all(|c| c != 'A'));
}

#[test]
fn setting_line_replaces_previous_state() {
    let mut machine = naval_a();
    apply(&mut machine, "* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)");
    let first = machine.convert_message("FROMHIS").unwrap();
    apply(&mut machine, "* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)");
    assert_eq!(machine.convert_message("FROMHIS").unwrap(), first);
}

// ═══════════════════════════════════════════════════════════════════════
// Configuration errors
// ═══════════════════════════════════════════════════════════════════════

/// Every non-reflector in slot 0 is rejected.
#[test]
fn non_reflector_in_first_slot_fails() {
    let mut machine = naval_a();
    for first in MOVING.iter().chain(FIXED.iter()) {
        let others: Vec<&str> = ["Beta", "III", "IV", "I"]
            .iter()
            .copied()
            .filter(|name| name != first)
            .chain(std::iter::once("II"))
            .take(4)
            .collect();
        let mut names = vec![*first];
        names.extend(others);
        let err = machine.insert_rotors(&names).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config, "{:?}", names);
        assert!(matches!(err, EnigmaError::MissingReflector(_)), "{:?}", names);
    }
}

#[test]
fn reflectors_accepted_in_first_slot() {
    let mut machine = naval_a();
    for reflector in REFLECTORS {
        machine
            .insert_rotors(&[reflector, "Gamma", "V", "VI", "VII"])
            .unwrap();
        machine.set_rotors("AAAA").unwrap();
        assert!(machine.convert_message("HELLO").is_ok());
    }
}

/// Wrong setting lengths fail whatever their content.
#[test]
fn wrong_setting_length_fails() {
    let mut machine = naval_a();
    for bad in ["", "A", "AXL", "AXLEE", "!!!", "axlexx", "AX LE"] {
        machine.insert_rotors(&["B", "Beta", "III", "IV", "I"]).unwrap();
        let err = machine.set_rotors(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config, "{:?}", bad);
        assert!(matches!(err, EnigmaError::WrongSettingLength { .. }));
        assert!(matches!(
            machine.convert_message("A"),
            Err(EnigmaError::NotConfigured)
        ));
    }
}

#[test]
fn unknown_and_duplicate_rotors_fail() {
    let mut machine = naval_a();
    assert!(matches!(
        machine.insert_rotors(&["B", "Beta", "III", "IV", "IX"]),
        Err(EnigmaError::UnknownRotor(name)) if name == "IX"
    ));
    assert!(matches!(
        machine.insert_rotors(&["B", "Beta", "III", "III", "I"]),
        Err(EnigmaError::DuplicateRotor(name)) if name == "III"
    ));
}

#[test]
fn moving_rotor_without_pawl_fails() {
    let mut machine = naval_a();
    assert!(matches!(
        machine.insert_rotors(&["B", "I", "III", "IV", "II"]),
        Err(EnigmaError::MisplacedMovingRotor { slot: 1, .. })
    ));
}

#[test]
fn bad_plugboard_leaves_machine_unconfigured() {
    let mut machine = naval_a();
    apply(&mut machine, "* B Beta III IV I AXLE");
    let setting = enigma::Setting::parse("* B Beta III IV I AXLE (A1)", 5).unwrap();
    assert!(machine.apply_setting(&setting).is_err());
    assert!(matches!(
        machine.convert_message("A"),
        Err(EnigmaError::NotConfigured)
    ));
}

#[test]
fn lowercase_message_is_a_lookup_error() {
    let mut machine = naval_a_at("AXLE", "");
    let err = machine.convert_message("hello").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);
}
