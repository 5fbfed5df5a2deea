//! Shared fixtures: the Naval A rotor catalog.

#![allow(dead_code)]

use enigma::{Machine, MachineConfig, Permutation, Setting};

/// Naval A configuration: 26 letters, 5 slots, 3 pawls.
pub const NAVAL_A: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ
 5 3
 I MQ      (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
 II ME     (FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)
 III MV    (ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)
 IV MJ     (AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)
 V MZ      (AVOLDRWFIUQ)(BZKSMNHYC) (EGTJPX)
 VI MZM    (AJQDVLEOZWIYTS) (CGMNHFUX) (BPRK)
 VII MZM   (ANOUPFRIMBZTLWKSVEGCJYDHXQ)
 VIII MZM  (AFLSETWUNDHOZVICQ) (BKJ) (GPXMRY)
 Beta N    (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
 Gamma N   (AFNIRLBSQWVXGUZDKMTPCOYJHE)
 B R       (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP)
           (RX) (SZ) (TV)
 C R       (AR) (BD) (CO) (EJ) (FN) (GT) (HK) (IV) (LM) (PW)
           (QZ) (SX) (UY)
";

/// Rotor names of the catalog, reflectors last.
pub const MOVING: [&str; 8] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII"];
pub const FIXED: [&str; 2] = ["Beta", "Gamma"];
pub const REFLECTORS: [&str; 2] = ["B", "C"];

/// Builds a fresh Naval A machine with no rotors inserted.
pub fn naval_a() -> Machine {
    MachineConfig::parse(NAVAL_A).unwrap().build().unwrap()
}

/// Builds a Naval A machine with `B Beta III IV I` at `setting`.
pub fn naval_a_at(setting: &str, plugboard: &str) -> Machine {
    let mut machine = naval_a();
    machine.insert_rotors(&["B", "Beta", "III", "IV", "I"]).unwrap();
    machine.set_rotors(setting).unwrap();
    let plug = Permutation::new(plugboard, machine.alphabet()).unwrap();
    machine.set_plugboard(Some(plug));
    machine
}

/// Applies a full setting line to `machine`.
pub fn apply(machine: &mut Machine, line: &str) {
    let setting = Setting::parse(line, machine.num_rotors()).unwrap();
    machine.apply_setting(&setting).unwrap();
}
