//! Machine configuration text.
//!
//! The configuration lists the alphabet, the slot and pawl counts, then
//! every available rotor:
//!
//! ```text
//! ABCDEFGHIJKLMNOPQRSTUVWXYZ
//! 5 3
//! I     MQ  (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
//! Beta  N   (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//! B     R   (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP)
//!           (RX) (SZ) (TV)
//! ```
//!
//! Tokens are separated by any whitespace, so a rotor's cycles may continue
//! on the next line. The type tag is `M` (moving, followed by its notch
//! symbols), `N` (fixed) or `R` (reflector).

use std::str::FromStr;

use log::debug;

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::machine::Machine;
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// Rotor variant tag as written in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotorType {
    /// `M`: moving rotor.
    Moving,
    /// `N`: non-moving rotor.
    Fixed,
    /// `R`: reflector.
    Reflector,
}

impl RotorType {
    fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'M' => Some(RotorType::Moving),
            'N' => Some(RotorType::Fixed),
            'R' => Some(RotorType::Reflector),
            _ => None,
        }
    }
}

/// One rotor description, still in text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorSpec {
    /// Name used to select the rotor in a setting line.
    pub name: String,
    /// Variant of the rotor.
    pub rotor_type: RotorType,
    /// Notch symbols; only non-empty for moving rotors.
    pub notches: String,
    /// Wiring in cycle notation.
    pub cycles: String,
}

impl RotorSpec {
    /// Builds the rotor over `alphabet`.
    ///
    /// # Errors
    /// Any error from parsing the cycles or resolving the notches.
    pub fn build(&self, alphabet: &Alphabet) -> Result<Rotor, EnigmaError> {
        let perm = Permutation::new(&self.cycles, alphabet)?;
        Ok(match self.rotor_type {
            RotorType::Moving => Rotor::moving(&self.name, perm, &self.notches)?,
            RotorType::Fixed => Rotor::fixed(&self.name, perm),
            RotorType::Reflector => Rotor::reflector(&self.name, perm),
        })
    }
}

/// A parsed machine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Alphabet symbols, in order.
    pub alphabet: String,
    /// Number of rotor slots.
    pub num_rotors: usize,
    /// Number of pawls.
    pub pawls: usize,
    /// Available rotors.
    pub rotors: Vec<RotorSpec>,
}

impl MachineConfig {
    /// Parses configuration text.
    ///
    /// # Errors
    /// Returns [`EnigmaError::MalformedConfig`] when the layout is wrong
    /// (missing counts, non-numeric counts, truncated rotor description,
    /// unknown type tag, notches on a non-moving rotor).
    pub fn parse(text: &str) -> Result<Self, EnigmaError> {
        let mut tokens = text.split_whitespace().peekable();

        let alphabet = tokens
            .next()
            .ok_or_else(|| EnigmaError::MalformedConfig("missing alphabet".to_string()))?
            .to_string();
        let num_rotors = parse_count(tokens.next(), "rotor slot count")?;
        let pawls = parse_count(tokens.next(), "pawl count")?;

        let mut rotors = Vec::new();
        while let Some(name) = tokens.next() {
            let type_token = tokens.next().ok_or_else(|| {
                EnigmaError::MalformedConfig(format!("bad rotor description for {}", name))
            })?;
            let mut type_chars = type_token.chars();
            let rotor_type = type_chars
                .next()
                .and_then(RotorType::from_tag)
                .ok_or_else(|| {
                    EnigmaError::MalformedConfig(format!(
                        "unknown rotor type {:?} for {}",
                        type_token, name
                    ))
                })?;
            let notches: String = type_chars.collect();
            if rotor_type != RotorType::Moving && !notches.is_empty() {
                return Err(EnigmaError::MalformedConfig(format!(
                    "only moving rotors have notches, {} has {:?}",
                    name, notches
                )));
            }

            let mut cycles = Vec::new();
            while let Some(token) = tokens.next_if(|t| t.starts_with('(') && t.ends_with(')')) {
                cycles.push(token);
            }

            rotors.push(RotorSpec {
                name: name.to_string(),
                rotor_type,
                notches,
                cycles: cycles.join(" "),
            });
        }

        Ok(MachineConfig {
            alphabet,
            num_rotors,
            pawls,
            rotors,
        })
    }

    /// Builds the machine: alphabet first, then every rotor over it, then
    /// the machine holding them.
    ///
    /// # Errors
    /// Any alphabet, permutation, rotor or machine construction error.
    pub fn build(&self) -> Result<Machine, EnigmaError> {
        let alphabet = Alphabet::checked(&self.alphabet)?;
        let rotors = self
            .rotors
            .iter()
            .map(|spec| spec.build(&alphabet))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("configuration loaded: {} rotors", rotors.len());
        Machine::new(alphabet, self.num_rotors, self.pawls, rotors)
    }
}

impl FromStr for MachineConfig {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_count(token: Option<&str>, what: &str) -> Result<usize, EnigmaError> {
    let token =
        token.ok_or_else(|| EnigmaError::MalformedConfig(format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| EnigmaError::MalformedConfig(format!("{} {:?} is not a number", what, token)))
}
