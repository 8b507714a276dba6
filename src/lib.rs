//! Interpreter for a 32-bit word-oriented virtual machine.
//!
//! Provides the machine core, the program image loader, and console I/O
//! plumbing; the `um32` binary wires them to a program image file.

pub mod utils;
pub mod virtual_machine;
