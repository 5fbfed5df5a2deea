//! Error types for the Enigma library.
//!
//! Every failure belongs to one of two core kinds: a configuration problem
//! (bad rotor selection, malformed cycle text, wrong setting length...) or a
//! symbol lookup problem (a symbol outside the machine's alphabet). The
//! session layer adds a third kind for I/O failures on the message stream.

use thiserror::Error;

/// Coarse classification of an [`EnigmaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or inconsistent configuration or per-message setting.
    Config,
    /// A symbol or index that is not part of the alphabet.
    Lookup,
    /// Reading or writing the message stream failed.
    Io,
}

/// Errors produced by the Enigma library.
#[derive(Debug, Error)]
pub enum EnigmaError {
    /// No rotor with this name exists in the catalog.
    #[error("unable to find rotor named {0}")]
    UnknownRotor(String),
    /// The same catalog rotor was selected twice.
    #[error("duplicate rotor selected: {0}")]
    DuplicateRotor(String),
    /// Slot 0 holds a rotor that is not a reflector.
    #[error("the first rotor is not a reflector: {0}")]
    MissingReflector(String),
    /// A reflector was selected for a slot other than slot 0.
    #[error("reflector {name} placed in slot {slot}")]
    MisplacedReflector { name: String, slot: usize },
    /// A moving rotor was placed in a slot that has no pawl.
    #[error("moving rotor {name} placed in slot {slot}, which has no pawl")]
    MisplacedMovingRotor { name: String, slot: usize },
    /// The number of selected rotors differs from the number of slots.
    #[error("expected {expected} rotors, got {found}")]
    WrongRotorCount { expected: usize, found: usize },
    /// The rotor position string has the wrong length.
    #[error("wrong number of settings: expected {expected}, got {found}")]
    WrongSettingLength { expected: usize, found: usize },
    /// Cycle notation is syntactically broken (e.g. unbalanced parentheses).
    #[error("malformed cycle notation: {0}")]
    MalformedCycles(String),
    /// A cycle mentions a symbol outside the alphabet.
    #[error("cycle symbol {0:?} is not in the alphabet")]
    CycleSymbol(char),
    /// A symbol appears more than once across the cycles of one permutation.
    #[error("symbol {0:?} appears in more than one cycle position")]
    RepeatedCycleSymbol(char),
    /// The machine needs at least two rotor slots.
    #[error("a machine needs more than one rotor slot, got {0}")]
    InvalidSlotCount(usize),
    /// Pawl count outside `1..num_rotors`.
    #[error("pawl count {pawls} must be in 1..{num_rotors}")]
    InvalidPawlCount { pawls: usize, num_rotors: usize },
    /// Two catalog rotors share a name.
    #[error("rotor name {0} is defined more than once")]
    DuplicateRotorName(String),
    /// A rotor was built over a different alphabet than the machine's.
    #[error("rotor {0} uses a different alphabet than the machine")]
    AlphabetMismatch(String),
    /// The alphabet contains no symbols.
    #[error("the alphabet is empty")]
    EmptyAlphabet,
    /// The alphabet lists the same symbol twice.
    #[error("symbol {0:?} appears twice in the alphabet")]
    DuplicateSymbol(char),
    /// The alphabet contains a symbol reserved by the configuration syntax.
    #[error("symbol {0:?} is reserved and cannot be part of an alphabet")]
    ReservedSymbol(char),
    /// The configuration text does not follow the expected layout.
    #[error("configuration file has wrong format: {0}")]
    MalformedConfig(String),
    /// A per-message setting line does not follow the expected layout.
    #[error("malformed setting line: {0}")]
    MalformedSetting(String),
    /// Conversion was attempted before a valid rotor selection and setting.
    #[error("machine has no valid rotor setting")]
    NotConfigured,
    /// The symbol is not part of the alphabet.
    #[error("unable to find character {0:?} in alphabet")]
    SymbolNotInAlphabet(char),
    /// The index does not denote a symbol of the alphabet.
    #[error("index {index} is out of range for an alphabet of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EnigmaError {
    /// Returns the kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnigmaError::SymbolNotInAlphabet(_) | EnigmaError::IndexOutOfRange { .. } => {
                ErrorKind::Lookup
            }
            EnigmaError::Io(_) => ErrorKind::Io,
            _ => ErrorKind::Config,
        }
    }

    /// Returns `true` for configuration errors.
    pub fn is_config(&self) -> bool {
        self.kind() == ErrorKind::Config
    }

    /// Returns `true` for symbol lookup errors.
    pub fn is_lookup(&self) -> bool {
        self.kind() == ErrorKind::Lookup
    }
}
