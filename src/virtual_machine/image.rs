//! Program image loading.
//!
//! An image on disk is a sequence of 4-byte big-endian words. The whole
//! file becomes the initial content of the code array, with the program
//! counter starting at its first word.

use crate::virtual_machine::errors::ImageError;
use std::fs;
use std::path::Path;

/// Size in bytes of one machine word on disk.
const WORD_BYTES: usize = 4;

/// Reads the image at `path` and decodes it to host-order words.
pub fn load_image(path: impl AsRef<Path>) -> Result<Vec<u32>, ImageError> {
    decode_image(&fs::read(path)?)
}

/// Decodes raw image bytes into words.
///
/// The byte length must be a positive multiple of 4.
pub fn decode_image(bytes: &[u8]) -> Result<Vec<u32>, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }
    if bytes.len() % WORD_BYTES != 0 {
        return Err(ImageError::TruncatedWord { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(WORD_BYTES)
        .map(|word| u32::from_be_bytes([word[0], word[1], word[2], word[3]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn decode_is_big_endian() {
        let words = decode_image(&[0x12, 0x34, 0x56, 0x78]).unwrap();
        assert_eq!(words, vec![0x1234_5678]);
    }

    #[test]
    fn decode_preserves_word_order() {
        let words = decode_image(&[0, 0, 0, 1, 0, 0, 0, 2, 0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
        assert_eq!(words, vec![1, 2, u32::MAX]);
    }

    #[test]
    fn decode_rejects_empty_input() {
        assert!(matches!(decode_image(&[]), Err(ImageError::Empty)));
    }

    #[test]
    fn decode_rejects_partial_words() {
        for len in [1usize, 2, 3, 5, 7] {
            let bytes = vec![0u8; len];
            assert!(matches!(
                decode_image(&bytes),
                Err(ImageError::TruncatedWord { len: l }) if l == len
            ));
        }
    }

    #[test]
    fn load_reads_a_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x70, 0x00, 0x00, 0x00]).unwrap();
        let words = load_image(file.path()).unwrap();
        assert_eq!(words, vec![0x7000_0000]);
    }

    #[test]
    fn load_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-image.um");
        assert!(matches!(load_image(missing), Err(ImageError::Io(_))));
    }
}
