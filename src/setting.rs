//! Per-message setting lines.
//!
//! A setting line looks like
//!
//! ```text
//! * B Beta III IV I AXLE (YF) (ZH)
//! ```
//!
//! the `*` marker, one rotor name per slot (reflector first), the rotor
//! positions, and an optional plugboard in cycle notation.

use std::fmt;

use crate::error::EnigmaError;

/// Marker that opens a setting line.
pub const SETTING_MARKER: char = '*';

/// A parsed setting line, not yet applied to a machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    rotors: Vec<String>,
    positions: String,
    plugboard: Option<String>,
}

impl Setting {
    /// Returns `true` if `line` is a setting line (starts with the marker
    /// after optional leading whitespace).
    pub fn is_setting_line(line: &str) -> bool {
        line.trim_start().starts_with(SETTING_MARKER)
    }

    /// Parses a setting line for a machine with `num_rotors` slots.
    ///
    /// Only the layout is checked here; rotor names, positions and cycle
    /// symbols are validated against the machine by
    /// [`Machine::apply_setting`](crate::Machine::apply_setting).
    ///
    /// # Errors
    /// Returns [`EnigmaError::MalformedSetting`] if the marker is missing,
    /// there are too few tokens, or a token after the positions is not a
    /// parenthesised cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Setting;
    ///
    /// let setting = Setting::parse("* B Beta III IV I AXLE (YF) (ZH)", 5).unwrap();
    /// assert_eq!(setting.rotors(), ["B", "Beta", "III", "IV", "I"]);
    /// assert_eq!(setting.positions(), "AXLE");
    /// assert_eq!(setting.plugboard(), Some("(YF) (ZH)"));
    /// ```
    pub fn parse(line: &str, num_rotors: usize) -> Result<Self, EnigmaError> {
        let body = line
            .trim_start()
            .strip_prefix(SETTING_MARKER)
            .ok_or_else(|| EnigmaError::MalformedSetting(format!("missing '*' in {:?}", line)))?;

        let tokens: Vec<&str> = body.split_whitespace().collect();
        if tokens.len() < num_rotors + 1 {
            return Err(EnigmaError::MalformedSetting(format!(
                "expected {} rotor names and a position string in {:?}",
                num_rotors, line
            )));
        }

        let rotors = tokens[..num_rotors]
            .iter()
            .map(|name| name.to_string())
            .collect();
        let positions = tokens[num_rotors].to_string();

        let cycles = &tokens[num_rotors + 1..];
        if let Some(bad) = cycles
            .iter()
            .find(|token| !(token.starts_with('(') && token.ends_with(')')))
        {
            return Err(EnigmaError::MalformedSetting(format!(
                "unexpected {:?} after rotor positions",
                bad
            )));
        }
        let plugboard = if cycles.is_empty() {
            None
        } else {
            Some(cycles.join(" "))
        };

        Ok(Setting {
            rotors,
            positions,
            plugboard,
        })
    }

    /// Rotor names, reflector first.
    pub fn rotors(&self) -> &[String] {
        &self.rotors
    }

    /// Initial positions of slots 1.., leftmost first.
    pub fn positions(&self) -> &str {
        &self.positions
    }

    /// Plugboard cycles, if any.
    pub fn plugboard(&self) -> Option<&str> {
        self.plugboard.as_deref()
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", SETTING_MARKER, self.rotors.join(" "), self.positions)?;
        if let Some(plugboard) = &self.plugboard {
            write!(f, " {}", plugboard)?;
        }
        Ok(())
    }
}
