//! Piece-glyph lookup tables shared by FEN decode and encode.

use crate::board::{Color, Piece};

/// Type order observed in FEN/Zobrist: Pawn, King, Knight, Bishop, Rook, Queen.
const GLYPHS: [u8; 6] = [b'P', b'K', b'N', b'B', b'R', b'Q'];

pub fn piece_to_char(piece: Piece, color: Color) -> char {
    let glyph = GLYPHS[piece as usize] as char;
    match color {
        Color::White => glyph,
        Color::Black => glyph.to_ascii_lowercase(),
    }
}

pub fn char_to_piece(c: char) -> Option<(Piece, Color)> {
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let upper = c.to_ascii_uppercase() as u8;
    let type_index = GLYPHS.iter().position(|&g| g == upper)?;
    Some((Piece::from_index(type_index as u8), color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_glyph() {
        for &glyph in GLYPHS.iter() {
            let (piece, color) = char_to_piece(glyph as char).unwrap();
            assert_eq!(color, Color::White);
            assert_eq!(piece_to_char(piece, color), glyph as char);

            let lower = (glyph as char).to_ascii_lowercase();
            let (piece, color) = char_to_piece(lower).unwrap();
            assert_eq!(color, Color::Black);
            assert_eq!(piece_to_char(piece, color), lower);
        }
    }

    #[test]
    fn rejects_unknown_glyph() {
        assert!(char_to_piece('x').is_none());
    }
}
