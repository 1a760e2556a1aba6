//! Word/whitespace splitting that preserves the input verbatim
//!
//! The loose matching mode classifies word pieces but must re-emit the
//! candidate exactly as received, so the splitter keeps every character:
//! concatenating the pieces of `split_pieces(text)` yields `text`.

/// A maximal run of word or whitespace characters, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece<'a> {
    /// Verbatim slice of the input
    pub text: &'a str,

    /// Whether this piece is entirely whitespace
    pub is_whitespace: bool,
}

/// Split text into alternating word and whitespace pieces.
///
/// "Word" here means any maximal run of non-whitespace characters, including
/// punctuation; classification into matchable words happens downstream.
pub fn split_pieces(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;

    for (pos, ch) in text.char_indices() {
        let whitespace = ch.is_whitespace();
        match in_whitespace {
            None => in_whitespace = Some(whitespace),
            Some(prev) if prev == whitespace => {}
            Some(prev) => {
                pieces.push(Piece {
                    text: &text[start..pos],
                    is_whitespace: prev,
                });
                start = pos;
                in_whitespace = Some(whitespace);
            }
        }
    }

    if let Some(whitespace) = in_whitespace {
        pieces.push(Piece {
            text: &text[start..],
            is_whitespace: whitespace,
        });
    }

    pieces
}
