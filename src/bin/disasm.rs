//! Program image disassembler CLI.
//!
//! Prints one line per word of an image: the offset, the raw word, and the
//! decoded mnemonic with the operand fields that opcode consumes. Words
//! with an undefined opcode nibble are listed as raw data.
//!
//! # Usage
//! ```text
//! disasm <image>
//! ```

use std::env;
use std::process;
use um32::virtual_machine::image::load_image;
use um32::virtual_machine::isa::{Opcode, Operation, decode};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() == 2 && (args[1] == "--help" || args[1] == "-h") {
        print_usage(&args[0]);
        process::exit(0);
    }
    if args.len() != 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let image = match load_image(&args[1]) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Could not load {}: {}", args[1], e);
            process::exit(1);
        }
    };

    for (offset, &word) in image.iter().enumerate() {
        match decode(word) {
            Ok(operation) => {
                println!("{offset:08}  {word:08X}  {}", render(&operation));
            }
            Err(_) => {
                println!("{offset:08}  {word:08X}  .word 0x{word:08X}");
            }
        }
    }
}

/// Formats an operation with only the fields its opcode consumes.
fn render(operation: &Operation) -> String {
    let Operation { op, a, b, c, value } = *operation;
    let mnemonic = op.mnemonic();
    match op {
        Opcode::Halt => mnemonic.to_string(),
        Opcode::Deallocation | Opcode::Output | Opcode::Input => {
            format!("{mnemonic} r{c}")
        }
        Opcode::Allocation | Opcode::LoadProgram => format!("{mnemonic} r{b}, r{c}"),
        Opcode::LoadImmediate => format!("{mnemonic} r{a}, {value}"),
        _ => format!("{mnemonic} r{a}, r{b}, r{c}"),
    }
}

const USAGE: &str = "\
Image Disassembler

USAGE:
    {program} <image>

ARGS:
    <image>    Program image file: a sequence of big-endian 32-bit words
";

fn print_usage(program: &str) {
    eprintln!("{}", USAGE.replace("{program}", program));
}
