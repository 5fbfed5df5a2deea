//! Machine: rotor slots, plugboard, stepping and signal path.
//!
//! Orchestrates the active rotors of an Enigma machine. Each symbol first
//! advances the rotors (including the double-stepping anomaly), then the
//! signal runs through the plugboard, right-to-left through the rotors, off
//! the reflector, left-to-right back through the rotors, and through the
//! plugboard again.

use log::{debug, trace};

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::permutation::Permutation;
use crate::rotor::{Rotor, RotorArena, RotorId};
use crate::setting::Setting;

/// An Enigma machine built over a fixed alphabet and rotor catalog.
///
/// # Lifecycle
///
/// A freshly built machine has no rotors in its slots and refuses to
/// convert. [`insert_rotors`](Self::insert_rotors) followed by
/// [`set_rotors`](Self::set_rotors) (or [`apply_setting`](Self::apply_setting)
/// for both plus the plugboard) make it ready. A failed call to any of
/// these clears the slots again, so a half-applied setting can never be
/// used to convert.
///
/// # Examples
///
/// ```
/// use enigma::{Alphabet, Machine, Permutation, Rotor};
///
/// let alpha = Alphabet::new("ABCD");
/// let rotors = vec![
///     Rotor::reflector("R", Permutation::new("(AC) (BD)", &alpha).unwrap()),
///     Rotor::moving("M", Permutation::new("(ABCD)", &alpha).unwrap(), "D").unwrap(),
/// ];
/// let mut machine = Machine::new(alpha, 2, 1, rotors).unwrap();
/// machine.insert_rotors(&["R", "M"]).unwrap();
/// machine.set_rotors("A").unwrap();
///
/// let cipher = machine.convert_message("ABCD").unwrap();
/// machine.set_rotors("A").unwrap();
/// assert_eq!(machine.convert_message(&cipher).unwrap(), "ABCD");
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    alphabet: Alphabet,
    num_rotors: usize,
    pawls: usize,
    catalog: RotorArena,
    slots: Vec<RotorId>,
    plugboard: Option<Permutation>,
}

impl Machine {
    /// Creates a machine with `num_rotors` slots and `pawls` pawls whose
    /// available rotors are `rotors`.
    ///
    /// # Errors
    /// - [`EnigmaError::EmptyAlphabet`] if `alphabet` has no symbols.
    /// - [`EnigmaError::InvalidSlotCount`] unless `num_rotors > 1`.
    /// - [`EnigmaError::InvalidPawlCount`] unless `1 <= pawls < num_rotors`.
    /// - [`EnigmaError::DuplicateRotorName`] if two rotors share a name.
    /// - [`EnigmaError::AlphabetMismatch`] if a rotor is wired over a
    ///   different alphabet.
    pub fn new<I>(
        alphabet: Alphabet,
        num_rotors: usize,
        pawls: usize,
        rotors: I,
    ) -> Result<Self, EnigmaError>
    where
        I: IntoIterator<Item = Rotor>,
    {
        if alphabet.size() == 0 {
            return Err(EnigmaError::EmptyAlphabet);
        }
        if num_rotors <= 1 {
            return Err(EnigmaError::InvalidSlotCount(num_rotors));
        }
        if pawls == 0 || pawls >= num_rotors {
            return Err(EnigmaError::InvalidPawlCount { pawls, num_rotors });
        }

        let rotors = rotors.into_iter();
        let mut catalog = RotorArena::with_capacity(rotors.size_hint().0);
        for rotor in rotors {
            if rotor.alphabet() != &alphabet {
                return Err(EnigmaError::AlphabetMismatch(rotor.name().to_string()));
            }
            catalog.insert(rotor)?;
        }

        debug!(
            "machine built: {} symbols, {} slots, {} pawls, {} rotors available",
            alphabet.size(),
            num_rotors,
            pawls,
            catalog.len()
        );

        Ok(Machine {
            alphabet,
            num_rotors,
            pawls,
            catalog,
            slots: Vec::with_capacity(num_rotors),
            plugboard: None,
        })
    }

    /// Returns the number of rotor slots.
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Returns the number of pawls, and thus of slots that may rotate.
    pub fn num_pawls(&self) -> usize {
        self.pawls
    }

    /// Returns the machine's alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the rotor catalog.
    pub fn catalog(&self) -> &RotorArena {
        &self.catalog
    }

    /// Returns the current plugboard, if any.
    pub fn plugboard(&self) -> Option<&Permutation> {
        self.plugboard.as_ref()
    }

    /// Returns the rotors currently in the slots, reflector first.
    pub fn active_rotors(&self) -> impl Iterator<Item = &Rotor> + '_ {
        self.slots.iter().map(|&id| self.catalog.get(id))
    }

    /// Returns `true` once every slot holds a rotor.
    pub fn is_configured(&self) -> bool {
        self.slots.len() == self.num_rotors
    }

    /// Places the rotors named `names` in the slots, `names[0]` being the
    /// reflector. Rotor settings are left as they are.
    ///
    /// # Errors
    /// Returns a configuration error, and leaves every slot empty, if:
    /// - the number of names differs from [`num_rotors`](Self::num_rotors);
    /// - a name is unknown or selected twice;
    /// - slot 0 is not a reflector, or a reflector is placed elsewhere;
    /// - a moving rotor is placed left of the rightmost `pawls` slots.
    pub fn insert_rotors<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), EnigmaError> {
        self.slots.clear();
        let slots = self.resolve_rotors(names)?;
        debug!(
            "rotors inserted: {}",
            names
                .iter()
                .map(|name| name.as_ref())
                .collect::<Vec<&str>>()
                .join(" ")
        );
        self.slots = slots;
        Ok(())
    }

    fn resolve_rotors<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<RotorId>, EnigmaError> {
        if names.len() != self.num_rotors {
            return Err(EnigmaError::WrongRotorCount {
                expected: self.num_rotors,
                found: names.len(),
            });
        }

        let first_moving_slot = self.num_rotors - self.pawls;
        let mut slots = Vec::with_capacity(self.num_rotors);
        for (slot, name) in names.iter().enumerate() {
            let name: &str = name.as_ref();
            let id = self
                .catalog
                .find(name)
                .ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))?;
            if slots.contains(&id) {
                return Err(EnigmaError::DuplicateRotor(name.to_string()));
            }

            let rotor = self.catalog.get(id);
            if slot == 0 && !rotor.reflecting() {
                return Err(EnigmaError::MissingReflector(name.to_string()));
            }
            if slot > 0 && rotor.reflecting() {
                return Err(EnigmaError::MisplacedReflector {
                    name: name.to_string(),
                    slot,
                });
            }
            if slot < first_moving_slot && rotor.rotates() {
                return Err(EnigmaError::MisplacedMovingRotor {
                    name: name.to_string(),
                    slot,
                });
            }
            slots.push(id);
        }
        Ok(slots)
    }

    /// Sets the rotors from `setting`, one symbol per slot starting at
    /// slot 1 (the reflector has no visible setting).
    ///
    /// # Errors
    /// - [`EnigmaError::NotConfigured`] if no rotors are inserted.
    /// - [`EnigmaError::WrongSettingLength`] unless `setting` has exactly
    ///   `num_rotors() - 1` symbols.
    /// - [`EnigmaError::SymbolNotInAlphabet`] for a symbol outside the alphabet.
    ///
    /// On error no rotor is moved and every slot is emptied.
    pub fn set_rotors(&mut self, setting: &str) -> Result<(), EnigmaError> {
        match self.resolve_positions(setting) {
            Ok(positions) => {
                for (&id, posn) in self.slots[1..].iter().zip(positions) {
                    self.catalog.get_mut(id).set(posn);
                }
                Ok(())
            }
            Err(err) => {
                self.slots.clear();
                Err(err)
            }
        }
    }

    fn resolve_positions(&self, setting: &str) -> Result<Vec<usize>, EnigmaError> {
        if !self.is_configured() {
            return Err(EnigmaError::NotConfigured);
        }
        let found = setting.chars().count();
        if found != self.num_rotors - 1 {
            return Err(EnigmaError::WrongSettingLength {
                expected: self.num_rotors - 1,
                found,
            });
        }
        setting.chars().map(|ch| self.alphabet.to_int(ch)).collect()
    }

    /// Replaces the plugboard; `None` means no plugboard (identity).
    pub fn set_plugboard(&mut self, plugboard: Option<Permutation>) {
        self.plugboard = plugboard;
    }

    /// Applies a full per-message setting: rotor selection, positions and
    /// plugboard.
    ///
    /// # Errors
    /// Any error of [`insert_rotors`](Self::insert_rotors),
    /// [`set_rotors`](Self::set_rotors), or of parsing the plugboard cycles.
    /// On error the machine is left unconfigured.
    pub fn apply_setting(&mut self, setting: &Setting) -> Result<(), EnigmaError> {
        let plugboard = match setting.plugboard() {
            Some(cycles) => match Permutation::new(cycles, &self.alphabet) {
                Ok(perm) => Some(perm),
                Err(err) => {
                    self.slots.clear();
                    return Err(err);
                }
            },
            None => None,
        };
        self.insert_rotors(setting.rotors())?;
        self.set_rotors(setting.positions())?;
        self.set_plugboard(plugboard);
        debug!("setting applied: {}", setting);
        Ok(())
    }

    /// Returns the positions of slots 1.. as symbols, leftmost first.
    pub fn settings(&self) -> String {
        self.slots
            .iter()
            .skip(1)
            .map(|&id| self.alphabet.symbol(self.catalog.get(id).setting()))
            .collect()
    }

    /// Converts symbol index `c` after first advancing the rotors.
    ///
    /// # Errors
    /// - [`EnigmaError::NotConfigured`] if the slots are not filled.
    /// - [`EnigmaError::IndexOutOfRange`] unless `c < alphabet().size()`.
    pub fn convert(&mut self, c: usize) -> Result<usize, EnigmaError> {
        if !self.is_configured() {
            return Err(EnigmaError::NotConfigured);
        }
        if c >= self.alphabet.size() {
            return Err(EnigmaError::IndexOutOfRange {
                index: c,
                size: self.alphabet.size(),
            });
        }

        self.advance_rotors();

        let mut c = match &self.plugboard {
            Some(plugboard) => plugboard.permute(c),
            None => c,
        };
        for &id in self.slots[1..].iter().rev() {
            c = self.catalog.get(id).convert_forward(c);
        }
        c = self.catalog.get(self.slots[0]).convert_forward(c);
        for &id in &self.slots[1..] {
            c = self.catalog.get(id).convert_backward(c);
        }
        if let Some(plugboard) = &self.plugboard {
            c = plugboard.invert(c);
        }
        Ok(c)
    }

    /// Advances the rotors for one key press.
    ///
    /// The rightmost rotor always steps. A rotor at its notch steps itself
    /// and its left neighbour, provided that neighbour rotates. All marks
    /// are taken from the positions before any rotor moves.
    fn advance_rotors(&mut self) {
        let n = self.slots.len();
        let mut marked = vec![false; n];
        marked[n - 1] = true;
        for i in (1..n).rev() {
            let rotor = self.catalog.get(self.slots[i]);
            let left = self.catalog.get(self.slots[i - 1]);
            if rotor.at_notch() && left.rotates() {
                marked[i] = true;
                marked[i - 1] = true;
            }
        }

        for (i, &id) in self.slots.iter().enumerate().skip(1) {
            let rotor = self.catalog.get_mut(id);
            if marked[i] && rotor.rotates() {
                rotor.advance();
                trace!("slot {} ({}) advanced to {}", i, rotor.name(), rotor.setting());
            }
        }
    }

    /// Converts every non-whitespace symbol of `msg`, dropping whitespace.
    ///
    /// # Errors
    /// - [`EnigmaError::SymbolNotInAlphabet`] at the first symbol outside
    ///   the alphabet; rotors stepped for earlier symbols stay stepped.
    /// - [`EnigmaError::NotConfigured`] if the slots are not filled.
    pub fn convert_message(&mut self, msg: &str) -> Result<String, EnigmaError> {
        let mut result = String::with_capacity(msg.len());
        for ch in msg.chars().filter(|ch| !ch.is_whitespace()) {
            let code = self.alphabet.to_int(ch)?;
            let converted = self.convert(code)?;
            result.push(self.alphabet.symbol(converted));
        }
        Ok(result)
    }
}
