//! Message session: drives a machine over a stream of input lines.
//!
//! The input alternates setting lines (starting with `*`) and message
//! lines. The first line must be a setting. Each message line is converted
//! with the machine's current state and written in five-symbol groups.

use std::io::{BufRead, Write};

use log::debug;

use crate::error::EnigmaError;
use crate::machine::Machine;
use crate::setting::Setting;
use crate::utils::grouping::{group_symbols, GROUP_SIZE};

/// Processes every line of `input`, writing converted messages to `output`.
///
/// Returns the number of message lines converted.
///
/// # Errors
/// - [`EnigmaError::MalformedSetting`] if the first line is not a setting.
/// - Any error from applying a setting or converting a message.
/// - [`EnigmaError::Io`] if reading or writing fails.
///
/// Processing stops at the first error; output already written stays written.
///
/// # Examples
///
/// ```
/// use enigma::{session, MachineConfig};
///
/// let config = "ABCD 2 1  R R (AC) (BD)  M MD (ABCD)";
/// let mut machine = MachineConfig::parse(config).unwrap().build().unwrap();
///
/// let mut out = Vec::new();
/// session::process(&mut machine, "* R M A\nABCDAB\n".as_bytes(), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap().trim_end().len(), 7);
/// ```
pub fn process<R, W>(machine: &mut Machine, input: R, mut output: W) -> Result<usize, EnigmaError>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    let first = lines.next().transpose()?.unwrap_or_default();
    if !Setting::is_setting_line(&first) {
        return Err(EnigmaError::MalformedSetting(
            "first line of input is not a setting".to_string(),
        ));
    }
    configure(machine, &first)?;

    let mut converted = 0;
    for line in lines {
        let line = line?;
        if Setting::is_setting_line(&line) {
            configure(machine, &line)?;
            continue;
        }
        let message = machine.convert_message(&line)?;
        writeln!(output, "{}", group_symbols(&message, GROUP_SIZE))?;
        converted += 1;
    }
    output.flush()?;

    debug!("session finished: {} message lines", converted);
    Ok(converted)
}

fn configure(machine: &mut Machine, line: &str) -> Result<(), EnigmaError> {
    let setting = Setting::parse(line, machine.num_rotors())?;
    machine.apply_setting(&setting)
}
