//! MIPS integer register names.
//!
//! Maps register codes 0-31 to their conventional assembler names. Codes 26 and
//! 27 (`k0`/`k1`, reserved for the kernel) are deliberately left unnamed, so
//! they can be neither rendered nor parsed.
//!
//! A register always renders with a `$` sigil: code 29 is `$sp`.

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, Result};

/// Sigil prefixed to every rendered register name.
pub const SIGIL: char = '$';

/// Number of register codes addressable by a 5-bit field.
pub const REGISTER_CODES: u32 = 32;

/// A named MIPS integer register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Register {
    /// Hardwired zero.
    Zero = 0,
    /// Assembler temporary.
    At = 1,
    /// Return value 0.
    V0 = 2,
    /// Return value 1.
    V1 = 3,
    /// Argument 0.
    A0 = 4,
    /// Argument 1.
    A1 = 5,
    /// Argument 2.
    A2 = 6,
    /// Argument 3.
    A3 = 7,
    /// Temporary 0.
    T0 = 8,
    /// Temporary 1.
    T1 = 9,
    /// Temporary 2.
    T2 = 10,
    /// Temporary 3.
    T3 = 11,
    /// Temporary 4.
    T4 = 12,
    /// Temporary 5.
    T5 = 13,
    /// Temporary 6.
    T6 = 14,
    /// Temporary 7.
    T7 = 15,
    /// Saved 0.
    S0 = 16,
    /// Saved 1.
    S1 = 17,
    /// Saved 2.
    S2 = 18,
    /// Saved 3.
    S3 = 19,
    /// Saved 4.
    S4 = 20,
    /// Saved 5.
    S5 = 21,
    /// Saved 6.
    S6 = 22,
    /// Saved 7.
    S7 = 23,
    /// Temporary 8.
    T8 = 24,
    /// Temporary 9.
    T9 = 25,
    /// Global pointer.
    Gp = 28,
    /// Stack pointer.
    Sp = 29,
    /// Frame pointer.
    Fp = 30,
    /// Return address.
    Ra = 31,
}

#[allow(clippy::enum_glob_use)]
use Register::*;

impl Register {
    /// Every named register in code order.
    pub const ALL: [Self; 30] = [
        Zero, At, V0, V1, A0, A1, A2, A3, T0, T1, T2, T3, T4, T5, T6, T7, S0, S1, S2, S3, S4, S5,
        S6, S7, T8, T9, Gp, Sp, Fp, Ra,
    ];

    /// Looks up the register for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRegisterCode`] for codes above 31 and for the
    /// reserved codes 26 and 27.
    pub fn from_code(code: u32) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|reg| reg.code() == code)
            .ok_or(Error::UnknownRegisterCode(code))
    }

    /// Returns the register's numeric code.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Returns the bare name without the sigil.
    pub const fn name(self) -> &'static str {
        match self {
            Zero => "zero",
            At => "at",
            V0 => "v0",
            V1 => "v1",
            A0 => "a0",
            A1 => "a1",
            A2 => "a2",
            A3 => "a3",
            T0 => "t0",
            T1 => "t1",
            T2 => "t2",
            T3 => "t3",
            T4 => "t4",
            T5 => "t5",
            T6 => "t6",
            T7 => "t7",
            S0 => "s0",
            S1 => "s1",
            S2 => "s2",
            S3 => "s3",
            S4 => "s4",
            S5 => "s5",
            S6 => "s6",
            S7 => "s7",
            T8 => "t8",
            T9 => "t9",
            Gp => "gp",
            Sp => "sp",
            Fp => "fp",
            Ra => "ra",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SIGIL}{}", self.name())
    }
}

impl TryFrom<u32> for Register {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self> {
        Self::from_code(code)
    }
}

impl FromStr for Register {
    type Err = Error;

    /// Accepts a name with or without the sigil (`"$sp"` or `"sp"`).
    fn from_str(s: &str) -> Result<Self> {
        let name = s.strip_prefix(SIGIL).unwrap_or(s);
        Self::ALL
            .iter()
            .copied()
            .find(|reg| reg.name() == name)
            .ok_or_else(|| Error::UnknownRegisterName(s.to_owned()))
    }
}

/// Renders register `code` as `$name`.
///
/// # Errors
///
/// Returns [`Error::UnknownRegisterCode`] if `code` has no name.
pub fn render(code: u32) -> Result<String> {
    Register::from_code(code).map(|reg| reg.to_string())
}
