//! Unix-style permission strings.
//!
//! The textual form is exactly nine characters matching
//! `[r-][w-][xsS-][r-][w-][xsS-][r-][w-][xtT-]`. The third character of each
//! triad carries both the execute bit and the triad's special flag
//! (setuid, setgid, sticky): lowercase `s`/`t` means the execute bit is set
//! too, uppercase means it is clear.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VfsError};

/// Read/write/execute bits for one of user, group or other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Triad {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl Triad {
    pub const fn new(read: bool, write: bool, execute: bool) -> Self {
        Self {
            read,
            write,
            execute,
        }
    }
}

/// A full permission set: three triads plus the special-mode flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permissions {
    pub user: Triad,
    pub group: Triad,
    pub other: Triad,
    pub setuid: bool,
    pub setgid: bool,
    pub sticky: bool,
}

/// Characters accepted at each of the nine positions.
const GRAMMAR: [&[u8]; 9] = [
    b"r-", b"w-", b"xsS-", b"r-", b"w-", b"xsS-", b"r-", b"w-", b"xtT-",
];

impl Permissions {
    /// Decode permission text, failing on anything outside the grammar.
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        let valid = bytes.len() == GRAMMAR.len()
            && bytes
                .iter()
                .zip(GRAMMAR.iter())
                .all(|(c, allowed)| allowed.contains(c));
        if !valid {
            return Err(VfsError::InvalidPermissions(text.to_string()));
        }

        let triad = |at: usize| Triad {
            read: bytes[at] == b'r',
            write: bytes[at + 1] == b'w',
            execute: matches!(bytes[at + 2], b'x' | b's' | b't'),
        };

        Ok(Self {
            user: triad(0),
            group: triad(3),
            other: triad(6),
            setuid: matches!(bytes[2], b's' | b'S'),
            setgid: matches!(bytes[5], b's' | b'S'),
            sticky: matches!(bytes[8], b't' | b'T'),
        })
    }
}

fn write_triad(
    f: &mut fmt::Formatter<'_>,
    triad: Triad,
    special: bool,
    lower: char,
    upper: char,
) -> fmt::Result {
    let r = if triad.read { 'r' } else { '-' };
    let w = if triad.write { 'w' } else { '-' };
    let x = match (special, triad.execute) {
        (true, true) => lower,
        (true, false) => upper,
        (false, true) => 'x',
        (false, false) => '-',
    };
    write!(f, "{r}{w}{x}")
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_triad(f, self.user, self.setuid, 's', 'S')?;
        write_triad(f, self.group, self.setgid, 's', 'S')?;
        write_triad(f, self.other, self.sticky, 't', 'T')
    }
}

impl FromStr for Permissions {
    type Err = VfsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Permissions {
    type Error = VfsError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Permissions> for String {
    fn from(perms: Permissions) -> Self {
        perms.to_string()
    }
}
