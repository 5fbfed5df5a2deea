//! Enigma rotor cipher machine simulator.
//!
//! Reproduces the stepping and signal path of the historical Enigma
//! machines, including the double-stepping anomaly of the middle rotor.
//! A machine is described by an alphabet, a number of rotor slots and
//! pawls, and a catalog of rotors; each message then picks rotors,
//! starting positions and plugboard wiring.
//!
//! # Architecture
//!
//! ```text
//! Alphabet     (symbol <-> index)
//!     ↓
//! Permutation  (cycle notation, forward + inverse)
//!     ↓
//! Rotor        (Moving | Fixed | Reflector, stored in a RotorArena)
//!     ↓
//! Machine      (slots -> plugboard -> rotors -> reflector -> rotors -> plugboard)
//! ```
//!
//! [`MachineConfig`], [`Setting`] and [`session`] handle the text formats
//! around the engine.
//!
//! # Examples
//!
//! ```
//! use enigma::{MachineConfig, Setting};
//!
//! let config = "ABCDEFGHIJKLMNOPQRSTUVWXYZ 5 3
//!     I MQ (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
//!     III MV (ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)
//!     IV MJ (AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)
//!     Beta N (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//!     B R (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)";
//! let mut machine = MachineConfig::parse(config).unwrap().build().unwrap();
//!
//! let setting = Setting::parse("* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)", 5).unwrap();
//! machine.apply_setting(&setting).unwrap();
//! let cipher = machine.convert_message("FROM HIS SHOULDER HIAWATHA").unwrap();
//! assert_eq!(cipher, "QVPQSOKOILPUBKJZPISFXDW");
//!
//! machine.apply_setting(&setting).unwrap();
//! assert_eq!(machine.convert_message(&cipher).unwrap(), "FROMHISSHOULDERHIAWATHA");
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
pub mod config;
mod machine;
mod permutation;
mod rotor;
pub mod session;
mod setting;
pub mod utils;

pub use alphabet::{Alphabet, UPPER};
pub use config::{MachineConfig, RotorSpec, RotorType};
pub use error::{EnigmaError, ErrorKind};
pub use machine::Machine;
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorArena, RotorId, RotorKind};
pub use setting::{Setting, SETTING_MARKER};
