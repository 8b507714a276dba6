//! Virtual machine driver.
//!
//! Loads a program image and executes it until the program halts or
//! faults.
//!
//! # Usage
//! ```text
//! um32 <image>
//! ```
//!
//! # Arguments
//! - `image`: Program image file, a sequence of big-endian 32-bit words
//!
//! # Exit status
//! 0 after a clean HALT; non-zero on a machine fault, a load failure, or
//! argument misuse.

use std::env;
use std::process;
use um32::utils::log::{self, Level};
use um32::virtual_machine::image::load_image;
use um32::virtual_machine::io::{Console, Stdio};
use um32::virtual_machine::vm::Machine;
use um32::{error, info};

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    log::init(Level::Warn);
    let args: Vec<String> = env::args().collect();

    if args.len() == 2 && (args[1] == "--help" || args[1] == "-h") {
        print_usage(&args[0]);
        return 0;
    }
    if args.len() != 2 {
        print_usage(&args[0]);
        return 1;
    }

    let image = match load_image(&args[1]) {
        Ok(image) => image,
        Err(e) => {
            println!("Could not load {}: {}", args[1], e);
            return 1;
        }
    };
    info!("loaded {} word image from {}", image.len(), args[1]);

    let mut console = Stdio::new();
    let mut machine = Machine::new(image);
    let mut status = match machine.run(&mut console) {
        Ok(()) => 0,
        Err(fault) => {
            error!("machine fault: {fault}");
            1
        }
    };

    // Whatever the program managed to print is preserved on both paths.
    if let Err(e) = console.flush() {
        error!("could not flush program output: {e}");
        status = 1;
    }
    status
}

const USAGE: &str = "\
Universal Machine

USAGE:
    {program} <image>

ARGS:
    <image>    Program image file: a sequence of big-endian 32-bit words

EXIT STATUS:
    0 after the program halts; non-zero on any machine fault or load error
";

/// Prints usage information to standard output.
fn print_usage(program: &str) {
    println!("{}", USAGE.replace("{program}", program));
}
