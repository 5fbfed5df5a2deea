//! Output grouping for enciphered messages.
//!
//! Enigma traffic was transmitted in blocks of five letters. These helpers
//! split a converted message into such blocks for display.

/// Default number of symbols per output block.
pub const GROUP_SIZE: usize = 5;

/// Splits `msg` into blocks of `size` symbols joined by single spaces.
/// The last block may be shorter.
///
/// # Parameters
/// - `msg`: The message, without whitespace.
/// - `size`: Symbols per block; `0` leaves the message unsplit.
///
/// # Examples
///
/// ```
/// use enigma::utils::grouping::group_symbols;
///
/// assert_eq!(group_symbols("QVPQSOKOILPU", 5), "QVPQS OKOIL PU");
/// ```
pub fn group_symbols(msg: &str, size: usize) -> String {
    if size == 0 {
        return msg.to_string();
    }
    let mut out = String::with_capacity(msg.len() + msg.len() / size);
    for (i, ch) in msg.chars().enumerate() {
        if i != 0 && i % size == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
