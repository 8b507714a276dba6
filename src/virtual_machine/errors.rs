use thiserror::Error;

/// Machine exceptions. Any of these terminates execution immediately.
#[derive(Debug, Error)]
pub enum Fault {
    /// Opcode nibble outside the defined instruction set.
    #[error("invalid opcode {opcode}")]
    InvalidOpcode { opcode: u8 },
    /// Division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// Output of a word that does not fit in one byte.
    #[error("output value {value} exceeds 255")]
    OutputOutOfRange { value: u32 },
    /// Access through an identifier with no live array behind it.
    #[error("array {id} is not allocated")]
    AbsentArray { id: u32 },
    /// Array access past the end of the identified array.
    #[error("offset {offset} out of bounds for array {id} of length {len}")]
    IndexOutOfBounds { id: u32, offset: u32, len: u32 },
    /// Deallocation of identifier 0, which names the executing code.
    #[error("cannot free the code array")]
    FreeCodeArray,
    /// Every identifier below the limit is live.
    #[error("identifier space exhausted ({limit} arrays live)")]
    IdentifiersExhausted { limit: u32 },
    /// The program counter left the code array.
    #[error("program counter {counter} outside code array of length {len}")]
    CounterOutOfBounds { counter: u32, len: u32 },
    /// Host stream failure during OUTPUT or INPUT.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors loading a program image, before any machine state exists.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A valid image holds at least one word.
    #[error("image is empty")]
    Empty,
    /// Images are a whole number of 4-byte words.
    #[error("image length {len} is not a multiple of 4")]
    TruncatedWord { len: usize },
}
