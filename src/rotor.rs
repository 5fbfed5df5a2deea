//! Rotor: a permutation plus a rotational offset.
//!
//! Three variants share the same fields and differ only in how they move:
//!
//! | Variant     | `rotates()` | `reflecting()` | `at_notch()`          |
//! |-------------|-------------|----------------|-----------------------|
//! | `Moving`    | yes         | no             | setting is a notch    |
//! | `Fixed`     | no          | no             | never                 |
//! | `Reflector` | no          | yes            | never                 |
//!
//! The machine's rotor catalog is a [`RotorArena`]: rotors are stored once in
//! a contiguous `Vec` and the active slots of a machine refer to them by
//! [`RotorId`], so a setting applied through a slot is the setting of the
//! catalog rotor itself.

use std::collections::BTreeSet;
use std::fmt;

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::permutation::Permutation;

/// Unique identifier for a rotor within an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotorId(pub usize);

/// The closed set of rotor behaviours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
    /// Advances one position per step; may carry its left neighbour at a notch.
    Moving {
        /// Positions at which this rotor engages its left neighbour.
        notches: BTreeSet<usize>,
    },
    /// Never moves (e.g. the Beta and Gamma wheels).
    Fixed,
    /// Turns the signal back through the rotor stack; only valid in slot 0.
    Reflector,
}

/// A single rotor: name, wiring, and current rotational offset.
#[derive(Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    permutation: Permutation,
    setting: usize,
    kind: RotorKind,
}

impl Rotor {
    /// Creates a moving rotor whose notches are the symbols of `notches`.
    ///
    /// The rotor starts at setting 0.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolNotInAlphabet`] if a notch symbol is not
    /// part of the permutation's alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Permutation, Rotor};
    ///
    /// let alpha = Alphabet::default();
    /// let perm = Permutation::new("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)", &alpha).unwrap();
    /// let mut rotor = Rotor::moving("I", perm, "Q").unwrap();
    /// rotor.set_char('Q').unwrap();
    /// assert!(rotor.at_notch());
    /// rotor.advance();
    /// assert_eq!(rotor.setting(), 17);
    /// ```
    pub fn moving(name: &str, permutation: Permutation, notches: &str) -> Result<Self, EnigmaError> {
        let alphabet = permutation.alphabet();
        let notches = notches
            .chars()
            .map(|ch| alphabet.to_int(ch))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self::with_kind(name, permutation, RotorKind::Moving { notches }))
    }

    /// Creates a rotor that never moves.
    pub fn fixed(name: &str, permutation: Permutation) -> Self {
        Self::with_kind(name, permutation, RotorKind::Fixed)
    }

    /// Creates a reflector.
    ///
    /// The wiring of a physical reflector is a derangement; this is not
    /// enforced here (see [`Permutation::derangement`]).
    pub fn reflector(name: &str, permutation: Permutation) -> Self {
        Self::with_kind(name, permutation, RotorKind::Reflector)
    }

    fn with_kind(name: &str, permutation: Permutation, kind: RotorKind) -> Self {
        Rotor {
            name: name.to_string(),
            permutation,
            setting: 0,
            kind,
        }
    }

    /// Returns the rotor's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rotor's wiring.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Returns the alphabet the rotor is wired over.
    pub fn alphabet(&self) -> &Alphabet {
        self.permutation.alphabet()
    }

    /// Returns the variant of this rotor.
    pub fn kind(&self) -> &RotorKind {
        &self.kind
    }

    /// Returns the size of the rotor's alphabet.
    pub fn size(&self) -> usize {
        self.permutation.size()
    }

    /// Returns `true` iff this rotor can advance.
    pub fn rotates(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    /// Returns `true` iff this rotor is a reflector.
    pub fn reflecting(&self) -> bool {
        matches!(self.kind, RotorKind::Reflector)
    }

    /// Returns the current setting.
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Sets the rotor to position `posn`, taken modulo the alphabet size.
    pub fn set(&mut self, posn: usize) {
        self.setting = posn % self.size();
    }

    /// Sets the rotor to the position of symbol `ch`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolNotInAlphabet`] if `ch` is not a symbol.
    pub fn set_char(&mut self, ch: char) -> Result<(), EnigmaError> {
        let posn = self.alphabet().to_int(ch)?;
        self.set(posn);
        Ok(())
    }

    /// Converts contact `p` on the right into the contact it leaves on the left.
    ///
    /// The signal enters at `p + setting`, passes through the wiring, and
    /// is shifted back by `setting` on the way out.
    pub fn convert_forward(&self, p: usize) -> usize {
        let contact = self.permutation.permute(p % self.size() + self.setting);
        self.permutation
            .wrap(contact as isize - self.setting as isize)
    }

    /// Converts contact `e` on the left into the contact it leaves on the right.
    pub fn convert_backward(&self, e: usize) -> usize {
        let contact = self.permutation.invert(e % self.size() + self.setting);
        self.permutation
            .wrap(contact as isize - self.setting as isize)
    }

    /// Returns `true` iff a moving rotor currently sits at one of its notches.
    pub fn at_notch(&self) -> bool {
        match &self.kind {
            RotorKind::Moving { notches } => notches.contains(&self.setting),
            RotorKind::Fixed | RotorKind::Reflector => false,
        }
    }

    /// Advances a moving rotor by one position; a no-op for other variants.
    pub fn advance(&mut self) {
        if self.rotates() {
            self.setting = (self.setting + 1) % self.size();
        }
    }
}

impl fmt::Debug for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rotor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("setting", &self.setting)
            .field("permutation", &self.permutation)
            .finish()
    }
}

/// Arena holding the rotor catalog of a machine.
///
/// Rotors are looked up by name once, then addressed by [`RotorId`].
/// The arena owns every rotor; nothing else holds a reference into it, so
/// mutation through an id is visible to every slot holding that id.
#[derive(Debug, Clone, Default)]
pub struct RotorArena {
    rotors: Vec<Rotor>,
}

impl RotorArena {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        RotorArena { rotors: Vec::new() }
    }

    /// Creates a new empty arena with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        RotorArena {
            rotors: Vec::with_capacity(capacity),
        }
    }

    /// Adds `rotor` to the arena.
    ///
    /// # Errors
    /// Returns [`EnigmaError::DuplicateRotorName`] if a rotor of the same
    /// name is already present.
    pub fn insert(&mut self, rotor: Rotor) -> Result<RotorId, EnigmaError> {
        if self.find(rotor.name()).is_some() {
            return Err(EnigmaError::DuplicateRotorName(rotor.name().to_string()));
        }
        let id = RotorId(self.rotors.len());
        self.rotors.push(rotor);
        Ok(id)
    }

    /// Returns the id of the rotor named `name`.
    pub fn find(&self, name: &str) -> Option<RotorId> {
        self.iter().position(|r| r.name() == name).map(RotorId)
    }

    /// Returns the rotor with id `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this arena.
    pub fn get(&self, id: RotorId) -> &Rotor {
        &self.rotors[id.0]
    }

    /// Returns the rotor with id `id` for mutation.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this arena.
    pub fn get_mut(&mut self, id: RotorId) -> &mut Rotor {
        &mut self.rotors[id.0]
    }

    /// Returns the number of rotors in the arena.
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    /// Returns `true` if the arena holds no rotors.
    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    /// Iterates over all rotors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rotor> {
        self.rotors.iter()
    }
}
