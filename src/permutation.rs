//! Permutation: a bijection over alphabet indices in cycle notation.
//!
//! A permutation is parsed once from text such as `"(AELTPHQXRU) (BKNW) (S)"`.
//! Each parenthesised group is one cycle where `cycle[i]` maps to
//! `cycle[(i + 1) % len]`; symbols mentioned nowhere are fixed points.
//! Forward and inverse lookup tables are derived from the cycles at
//! construction, so [`permute`](Permutation::permute) and
//! [`invert`](Permutation::invert) are constant-time.

use std::fmt;

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;

/// A permutation of `0..alphabet.size()` expressed as disjoint cycles.
#[derive(Clone, PartialEq, Eq)]
pub struct Permutation {
    alphabet: Alphabet,
    cycles: Vec<Vec<usize>>,
    forward: Vec<usize>,
    backward: Vec<usize>,
}

impl Permutation {
    /// Parses `cycles` over `alphabet`.
    ///
    /// Whitespace between cycles is ignored and an empty group `()` adds
    /// nothing.
    ///
    /// # Errors
    /// - [`EnigmaError::MalformedCycles`] for unbalanced or nested
    ///   parentheses, or text outside any cycle.
    /// - [`EnigmaError::CycleSymbol`] if a cycle names a symbol outside
    ///   `alphabet`.
    /// - [`EnigmaError::RepeatedCycleSymbol`] if cycles are not disjoint.
    /// - [`EnigmaError::EmptyAlphabet`] if `alphabet` has no symbols.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Permutation};
    ///
    /// let perm = Permutation::new("(BACD)", &Alphabet::new("ABCD")).unwrap();
    /// assert_eq!(perm.permute_char('B').unwrap(), 'A');
    /// assert_eq!(perm.invert_char('B').unwrap(), 'D');
    /// ```
    pub fn new(cycles: &str, alphabet: &Alphabet) -> Result<Self, EnigmaError> {
        let mut parsed: Vec<Vec<usize>> = Vec::new();
        let mut current: Option<Vec<usize>> = None;

        for ch in cycles.chars() {
            match ch {
                '(' => {
                    if current.is_some() {
                        return Err(EnigmaError::MalformedCycles(format!(
                            "nested '(' in {:?}",
                            cycles
                        )));
                    }
                    current = Some(Vec::new());
                }
                ')' => match current.take() {
                    Some(cycle) if cycle.is_empty() => {}
                    Some(cycle) => parsed.push(cycle),
                    None => {
                        return Err(EnigmaError::MalformedCycles(format!(
                            "unmatched ')' in {:?}",
                            cycles
                        )));
                    }
                },
                c => match current.as_mut() {
                    Some(cycle) => {
                        let index = alphabet
                            .to_int(c)
                            .map_err(|_| EnigmaError::CycleSymbol(c))?;
                        cycle.push(index);
                    }
                    None if c.is_whitespace() => {}
                    None => {
                        return Err(EnigmaError::MalformedCycles(format!(
                            "{:?} outside of a cycle in {:?}",
                            c, cycles
                        )));
                    }
                },
            }
        }
        if current.is_some() {
            return Err(EnigmaError::MalformedCycles(format!(
                "unclosed '(' in {:?}",
                cycles
            )));
        }

        Self::from_cycles(parsed, alphabet)
    }

    /// The identity permutation over `alphabet`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::EmptyAlphabet`] if `alphabet` has no symbols.
    pub fn identity(alphabet: &Alphabet) -> Result<Self, EnigmaError> {
        let size = alphabet.size();
        if size == 0 {
            return Err(EnigmaError::EmptyAlphabet);
        }
        Ok(Permutation {
            alphabet: alphabet.clone(),
            cycles: Vec::new(),
            forward: (0..size).collect(),
            backward: (0..size).collect(),
        })
    }

    /// Builds the lookup tables from already-resolved cycles.
    fn from_cycles(cycles: Vec<Vec<usize>>, alphabet: &Alphabet) -> Result<Self, EnigmaError> {
        let mut perm = Self::identity(alphabet)?;
        let mut seen = vec![false; alphabet.size()];

        for cycle in &cycles {
            for (i, &from) in cycle.iter().enumerate() {
                if seen[from] {
                    return Err(EnigmaError::RepeatedCycleSymbol(alphabet.symbol(from)));
                }
                seen[from] = true;
                let to = cycle[(i + 1) % cycle.len()];
                perm.forward[from] = to;
                perm.backward[to] = from;
            }
        }

        perm.cycles = cycles;
        Ok(perm)
    }

    /// Returns the size of the alphabet this permutation acts on.
    pub fn size(&self) -> usize {
        self.alphabet.size()
    }

    /// Returns `p` modulo [`size`](Self::size), always non-negative.
    ///
    /// The size is never zero: construction rejects empty alphabets.
    pub fn wrap(&self, p: isize) -> usize {
        p.rem_euclid(self.size() as isize) as usize
    }

    /// Applies the permutation to `p` modulo the alphabet size.
    pub fn permute(&self, p: usize) -> usize {
        self.forward[p % self.size()]
    }

    /// Applies the inverse permutation to `c` modulo the alphabet size.
    pub fn invert(&self, c: usize) -> usize {
        self.backward[c % self.size()]
    }

    /// Applies the permutation to a symbol of the alphabet.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolNotInAlphabet`] if `p` is not a symbol.
    pub fn permute_char(&self, p: char) -> Result<char, EnigmaError> {
        let index = self.alphabet.to_int(p)?;
        Ok(self.alphabet.symbol(self.permute(index)))
    }

    /// Applies the inverse permutation to a symbol of the alphabet.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolNotInAlphabet`] if `c` is not a symbol.
    pub fn invert_char(&self, c: char) -> Result<char, EnigmaError> {
        let index = self.alphabet.to_int(c)?;
        Ok(self.alphabet.symbol(self.invert(index)))
    }

    /// Returns the alphabet this permutation was built over.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the cycles, as index sequences, in the order they were given.
    pub fn cycles(&self) -> &[Vec<usize>] {
        &self.cycles
    }

    /// Returns `true` iff no index maps to itself.
    ///
    /// Holds exactly when every cycle is longer than one and the cycles
    /// together cover the whole alphabet.
    pub fn derangement(&self) -> bool {
        let covered: usize = self.cycles.iter().map(Vec::len).sum();
        self.cycles.iter().all(|cycle| cycle.len() > 1) && covered == self.size()
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, cycle) in self.cycles.iter().enumerate() {
            if n > 0 {
                write!(f, " ")?;
            }
            write!(f, "(")?;
            for &index in cycle {
                write!(f, "{}", self.alphabet.symbol(index))?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permutation({:?})", self.to_string())
    }
}
