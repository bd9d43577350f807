//! FEN decode/encode (§4.C). Fields five and six (halfmove/fullmove
//! counters) are accepted but discarded, per §4.C and the Non-goals in §1
//! (the engine tracks neither the halfmove clock nor position history).

use super::{char_to_piece, piece_to_char, Board, Color};
use crate::board::castle_bits::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use crate::errors::EngineError;
use crate::square::Square;

fn invalid(reason: impl Into<String>) -> EngineError {
    EngineError::InvalidFen(reason.into())
}

/// Decodes `fen`, assigning `depth` to the resulting position's remaining
/// search-depth counter (§4.C: "The search depth is supplied by the caller
/// at construction").
pub fn parse_fen(fen: &str, depth: i32) -> Result<Board, EngineError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(invalid(format!(
            "expected at least 4 space-separated fields, got {}",
            fields.len()
        )));
    }

    let mut board = Board::empty();
    parse_placement(fields[0], &mut board)?;

    board.side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(invalid(format!("bad side-to-move field: {other}"))),
    };

    board.castling_rights = parse_castling(fields[2])?;
    board.en_passant = parse_en_passant(fields[3])?;
    board.depth = depth;

    // Fields 5 and 6 (halfmove clock, fullmove number), if present, are
    // accepted for compatibility with standard FEN producers but not
    // modeled anywhere in this engine.

    board
        .validate()
        .map_err(|reason| invalid(format!("decoded position is inconsistent: {reason}")))?;

    Ok(board)
}

fn parse_placement(field: &str, board: &mut Board) -> Result<(), EngineError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid(format!(
            "expected 8 ranks separated by '/', got {}",
            ranks.len()
        )));
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0u8;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as u8;
            } else if let Some((piece, color)) = char_to_piece(c) {
                if file > 7 {
                    return Err(invalid(format!("rank {row} overflows 8 files")));
                }
                let sq = Square::from_file_row(file, row as u8);
                board.place(color, piece, sq);
                file += 1;
            } else {
                return Err(invalid(format!("unrecognized placement glyph '{c}'")));
            }
            if file > 8 {
                return Err(invalid(format!("rank {row} overflows 8 files")));
            }
        }
        if file != 8 {
            return Err(invalid(format!("rank {row} covers {file} files, expected 8")));
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<u8, EngineError> {
    if field == "-" {
        return Ok(0);
    }
    let mut rights = 0u8;
    for c in field.chars() {
        rights |= match c {
            'K' => CASTLE_WK,
            'Q' => CASTLE_WQ,
            'k' => CASTLE_BK,
            'q' => CASTLE_BQ,
            other => return Err(invalid(format!("bad castling glyph '{other}'"))),
        };
    }
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Option<Square>, EngineError> {
    if field == "-" {
        return Ok(None);
    }
    Square::from_algebraic(field)
        .map(Some)
        .ok_or_else(|| invalid(format!("bad en-passant square '{field}'")))
}

impl Board {
    /// Inverse of `parse_fen`. Castling rights serialize in canonical
    /// `KQkq` order; halfmove/fullmove fields are always emitted as `0 1`
    /// since this engine does not track them.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(64);

        for row in 0..8u8 {
            let mut empties = 0u8;
            for file in 0..8u8 {
                let sq = Square::from_file_row(file, row);
                match self.piece_at(sq) {
                    Some((color, piece)) => {
                        if empties > 0 {
                            out.push((b'0' + empties) as char);
                            empties = 0;
                        }
                        out.push(piece_to_char(piece, color));
                    }
                    None => empties += 1,
                }
            }
            if empties > 0 {
                out.push((b'0' + empties) as char);
            }
            if row != 7 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let mut castling = String::new();
        if self.has_castling(CASTLE_WK) {
            castling.push('K');
        }
        if self.has_castling(CASTLE_WQ) {
            castling.push('Q');
        }
        if self.has_castling(CASTLE_BK) {
            castling.push('k');
        }
        if self.has_castling(CASTLE_BQ) {
            castling.push('q');
        }
        out.push_str(if castling.is_empty() { "-" } else { &castling });

        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }

        out.push_str(" 0 1");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn startpos_round_trips() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let board = Board::from_str(fen).unwrap();
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn en_passant_field_round_trips() {
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1";
        let board = Board::from_str(fen).unwrap();
        assert_eq!(board.en_passant, Square::from_algebraic("d6"));
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn rejects_truncated_fen() {
        assert!(Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w").is_err());
    }

    #[test]
    fn rejects_bad_rank_width() {
        assert!(Board::from_str("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err());
    }

    #[test]
    fn kiwipete_round_trips() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let board = Board::from_str(fen).unwrap();
        assert_eq!(board.to_fen(), fen);
    }
}
