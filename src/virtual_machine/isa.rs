//! Instruction Set Architecture (ISA) definitions.
//!
//! Defines the machine's instruction set. The
//! [`for_each_opcode!`](crate::for_each_opcode) macro holds the canonical
//! opcode table and invokes a callback macro for code generation, so other
//! modules can generate opcode-related code without duplicating the table.
//!
//! This module generates:
//! - The [`Opcode`] enum with nibble mappings
//! - `TryFrom<u8>` for decoding opcode nibbles
//!
//! # Instruction Format
//!
//! Instructions are one 32-bit word. The opcode lives in the top four bits.
//! Two layouts share the remaining 28:
//! - Standard (opcodes 0-12): register selectors A, B, C in bits 6-8, 3-5,
//!   and 0-2. Bits 9-27 carry nothing.
//! - Wide immediate (opcode 13): selector A in bits 25-27 and an unsigned
//!   25-bit value in bits 0-24.

use crate::virtual_machine::errors::Fault;

/// Invokes a callback macro with the complete opcode definition list.
///
/// This macro enables code generation for opcodes in multiple modules
/// without duplicating the opcode definitions.
#[macro_export]
macro_rules! for_each_opcode {
    ($callback:ident) => {
        $callback! {
            /// CMOV a, b, c ; if r[c] != 0 then r[a] = r[b]
            ConditionalMove = 0x0, "CMOV",
            /// INDEX a, b, c ; r[a] = array r[b] at offset r[c]
            ArrayIndex = 0x1, "INDEX",
            /// AMEND a, b, c ; array r[a] at offset r[b] = r[c]
            ArrayUpdate = 0x2, "AMEND",
            /// ADD a, b, c ; r[a] = r[b] + r[c], modulo 2^32
            Addition = 0x3, "ADD",
            /// MUL a, b, c ; r[a] = r[b] * r[c], modulo 2^32
            Multiplication = 0x4, "MUL",
            /// DIV a, b, c ; r[a] = r[b] / r[c], unsigned (trap on zero divisor)
            Division = 0x5, "DIV",
            /// NAND a, b, c ; r[a] = !(r[b] & r[c])
            Nand = 0x6, "NAND",
            /// HALT ; stop the machine
            Halt = 0x7, "HALT",
            /// ALLOC b, c ; r[b] = identifier of a fresh array of r[c] zero words
            Allocation = 0x8, "ALLOC",
            /// FREE c ; release the array identified by r[c]
            Deallocation = 0x9, "FREE",
            /// OUT c ; write the byte in r[c] to the console
            Output = 0xA, "OUT",
            /// IN c ; read one byte into r[c]; all ones once input ends
            Input = 0xB, "IN",
            /// LOADPROG b, c ; install a copy of array r[b] as the code array and jump to r[c]
            LoadProgram = 0xC, "LOADPROG",
            /// ORTHO a, value ; r[a] = value (wide-immediate layout)
            LoadImmediate = 0xD, "ORTHO",
        }
    };
}

macro_rules! define_opcodes {
    (
        $(
            $(#[$doc:meta])*
            $name:ident = $nibble:literal, $mnemonic:literal
        ),* $(,)?
    ) => {
        /// Operation selector, the top four bits of an instruction word.
        #[derive(Copy, Clone, Debug, Eq, PartialEq)]
        pub enum Opcode {
            $(
                $(#[$doc])*
                $name = $nibble,
            )*
        }

        impl TryFrom<u8> for Opcode {
            type Error = Fault;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $( $nibble => Ok(Opcode::$name), )*
                    _ => Err(Fault::InvalidOpcode { opcode: value }),
                }
            }
        }

        impl Opcode {
            /// Returns the assembly mnemonic for this opcode.
            pub const fn mnemonic(&self) -> &'static str {
                match self {
                    $( Opcode::$name => $mnemonic, )*
                }
            }
        }
    };
}

for_each_opcode!(define_opcodes);

/// Bit position of the opcode nibble.
const OPCODE_SHIFT: u32 = 28;
/// Bit position of selector A in the wide-immediate layout.
const IMMEDIATE_A_SHIFT: u32 = 25;
/// Mask for the 25-bit immediate value.
const IMMEDIATE_MASK: u32 = (1 << 25) - 1;
/// Mask for a 3-bit register selector.
const SELECTOR_MASK: u32 = 0x7;

/// A decoded instruction: opcode plus operand fields.
///
/// Standard-layout instructions populate the `a`, `b`, `c` selectors; the
/// wide-immediate layout populates `a` and `value`. Fields an opcode does
/// not consume are zero.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Operation {
    pub op: Opcode,
    /// Register selector A, always in 0..8.
    pub a: u8,
    /// Register selector B, always in 0..8.
    pub b: u8,
    /// Register selector C, always in 0..8.
    pub c: u8,
    /// Wide-immediate value, in 0..2^25.
    pub value: u32,
}

/// Decodes one instruction word.
///
/// Decoding is total over the defined opcodes; the only failure is an
/// opcode nibble of 14 or 15.
pub fn decode(word: u32) -> Result<Operation, Fault> {
    let op = Opcode::try_from((word >> OPCODE_SHIFT) as u8)?;
    Ok(match op {
        Opcode::LoadImmediate => Operation {
            op,
            a: ((word >> IMMEDIATE_A_SHIFT) & SELECTOR_MASK) as u8,
            b: 0,
            c: 0,
            value: word & IMMEDIATE_MASK,
        },
        _ => Operation {
            op,
            a: ((word >> 6) & SELECTOR_MASK) as u8,
            b: ((word >> 3) & SELECTOR_MASK) as u8,
            c: (word & SELECTOR_MASK) as u8,
            value: 0,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_standard_selectors() {
        // ADD with a=3, b=1, c=2
        let operation = decode(0x3000_00CA).unwrap();
        assert_eq!(operation.op, Opcode::Addition);
        assert_eq!((operation.a, operation.b, operation.c), (3, 1, 2));
    }

    #[test]
    fn decode_ignores_middle_bits() {
        // Bits 9-27 carry nothing in the standard layout.
        let plain = decode(0x7000_0000).unwrap();
        let noisy = decode(0x7FFF_FE00).unwrap();
        assert_eq!(plain, noisy);
    }

    #[test]
    fn decode_wide_immediate() {
        // ORTHO r1, 65
        let operation = decode(0xD200_0041).unwrap();
        assert_eq!(operation.op, Opcode::LoadImmediate);
        assert_eq!(operation.a, 1);
        assert_eq!(operation.value, 65);
    }

    #[test]
    fn decode_wide_immediate_max_value() {
        let operation = decode(0xDFFF_FFFF).unwrap();
        assert_eq!(operation.a, 7);
        assert_eq!(operation.value, (1 << 25) - 1);
    }

    #[test]
    fn decode_undefined_nibbles() {
        for word in [0xE000_0000u32, 0xF000_0000] {
            assert!(matches!(
                decode(word),
                Err(Fault::InvalidOpcode { opcode }) if opcode == (word >> 28) as u8
            ));
        }
    }

    #[test]
    fn mnemonics_are_distinct() {
        let mut seen = std::collections::BTreeSet::new();
        for nibble in 0..=13u8 {
            assert!(seen.insert(Opcode::try_from(nibble).unwrap().mnemonic()));
        }
    }
}
