//! Square text tiling
//!
//! Cell `(row, col)` of a `size`×`size` grid holds
//! `text[(row * size + col) % len]`, counted in chars.

use std::io::Write;

use crate::error::AppError;

/// Rows of a tiled grid, produced one at a time
pub(crate) struct TileRows {
    chars: Vec<char>,
    size: usize,
    remaining: usize,
    next: usize,
}

impl Iterator for TileRows {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let mut buf = String::new();
        for _ in 0..self.size {
            buf.push(self.chars[self.next]);
            self.next = (self.next + 1) % self.chars.len();
        }
        Some(buf)
    }
}

/// Tile `text` into a `size`×`size` grid
pub(crate) fn tile(text: &str, size: usize) -> Result<TileRows, AppError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Err(AppError::EmptyTileText);
    }
    Ok(TileRows {
        chars,
        size,
        remaining: size,
        next: 0,
    })
}

/// Print the grid for `text`, one row per line
pub(crate) fn print_tile<W: Write>(out: &mut W, text: &str, size: usize) -> Result<(), AppError> {
    for row in tile(text, size)? {
        writeln!(out, "{row}").map_err(AppError::Output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(text: &str, size: usize) -> String {
        let mut out = Vec::new();
        print_tile(&mut out, text, size).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn two_chars_size_three() {
        assert_eq!(printed("ab", 3), "aba\nbab\naba\n");
    }

    #[test]
    fn three_chars_size_five() {
        assert_eq!(
            tile("abc", 5).unwrap().collect::<Vec<_>>(),
            vec!["abcab", "cabca", "bcabc", "abcab", "cabca"]
        );
    }

    #[test]
    fn longer_text_than_row() {
        assert_eq!(
            tile("aybabtu", 5).unwrap().collect::<Vec<_>>(),
            vec!["aybab", "tuayb", "abtua", "ybabt", "uayba"]
        );
    }

    #[test]
    fn size_zero_prints_nothing() {
        assert_eq!(printed("abc", 0), "");
    }

    #[test]
    fn single_char_fills_grid() {
        let rows: Vec<String> = tile("x", 4).unwrap().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r == "xxxx"));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(tile("", 3), Err(AppError::EmptyTileText)));
        assert!(matches!(tile("", 0), Err(AppError::EmptyTileText)));
    }

    #[test]
    fn cells_follow_index_formula() {
        for text in ["ab", "abc", "hello", "äöü€"] {
            let chars: Vec<char> = text.chars().collect();
            for size in 0..9 {
                let rows: Vec<String> = tile(text, size).unwrap().collect();
                assert_eq!(rows.len(), size);
                for (r, row) in rows.iter().enumerate() {
                    let row: Vec<char> = row.chars().collect();
                    assert_eq!(row.len(), size);
                    for (c, ch) in row.iter().enumerate() {
                        assert_eq!(*ch, chars[(r * size + c) % chars.len()]);
                    }
                }
            }
        }
    }
}
