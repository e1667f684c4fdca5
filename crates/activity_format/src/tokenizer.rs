//! Tokenizer for undelimited action streams.
//!
//! Tokens are written back to back with no separator. Boundaries are
//! recovered lexically:
//!
//! - leading whitespace before a token is skipped;
//! - a Message token runs until its second `'`;
//! - any other token runs until end of stream or until the next
//!   character is a letter, since every tag is a letter.
//!
//! Parameters that themselves contain letters (an unknown payload, a
//! non-finite number) split into extra tokens. That is a property of the
//! grammar and is not corrected here.

use crate::{Action, ActionKind};
use std::iter::{FusedIterator, Peekable};
use std::str::CharIndices;

const QUOTE: char = '\'';

/// Lazy iterator over the raw tokens of an action stream.
///
/// Yields borrowed slices of the input in stream order.
pub struct Tokenizer<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }

    /// Consume a Message body up to and including the closing quote.
    fn message_end(&mut self, mut end: usize) -> usize {
        let mut quotes = 0;
        for (index, ch) in self.chars.by_ref() {
            end = index + ch.len_utf8();
            if ch == QUOTE {
                quotes += 1;
                if quotes == 2 {
                    break;
                }
            }
        }
        end
    }

    /// Consume characters until the next one is a letter.
    fn plain_end(&mut self, mut end: usize) -> usize {
        while let Some(&(index, ch)) = self.chars.peek() {
            if ch.is_alphabetic() {
                break;
            }
            end = index + ch.len_utf8();
            self.chars.next();
        }
        end
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (start, tag) = loop {
            let (index, ch) = self.chars.next()?;
            if !ch.is_whitespace() {
                break (index, ch);
            }
        };

        let end = start + tag.len_utf8();
        let end = if tag == ActionKind::Message.tag() {
            self.message_end(end)
        } else {
            self.plain_end(end)
        };

        Some(&self.text[start..end])
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Split an action stream into raw tokens.
pub fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer::new(text)
}

/// Split and decode an action stream.
pub fn decode_stream(text: &str) -> impl Iterator<Item = Action> + '_ {
    tokenize(text).map(Action::decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyCode, MouseButton};

    fn tokens(text: &str) -> Vec<&str> {
        tokenize(text).collect()
    }

    #[test]
    fn test_split_concatenated_tokens() {
        assert_eq!(
            tokens("w150m10,20p10,20,0s1,2,-120d65u65c800,600"),
            ["w150", "m10,20", "p10,20,0", "s1,2,-120", "d65", "u65", "c800,600"]
        );
    }

    #[test]
    fn test_split_two_encoded_actions() {
        let first = Action::mouse_wheel(10.0, 20.0, -3);
        let second = Action::key_down(KeyCode::A);
        let stream = format!("{first}{second}");
        assert_eq!(tokens(&stream), [first.encode(), second.encode()]);
    }

    #[test]
    fn test_message_may_contain_letters() {
        assert_eq!(
            tokens("m1,2i'Sample Button Clicked!'r1,2,0"),
            ["m1,2", "i'Sample Button Clicked!'", "r1,2,0"]
        );
    }

    #[test]
    fn test_skips_whitespace_between_tokens() {
        assert_eq!(tokens("  w5 \n m1,2\t"), ["w5 \n ", "m1,2\t"]);
        let decoded: Vec<Action> = decode_stream("  w5 \n m1,2\t").collect();
        assert_eq!(decoded, [Action::pause(5), Action::mouse_move(1.0, 2.0)]);
    }

    #[test]
    fn test_unterminated_message_runs_to_end() {
        assert_eq!(tokens("w1i'never closed"), ["w1", "i'never closed"]);
    }

    #[test]
    fn test_lone_tags_split() {
        assert_eq!(tokens("xy"), ["x", "y"]);
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(tokens(""), Vec::<&str>::new());
        assert_eq!(tokens(" \t "), Vec::<&str>::new());
    }

    #[test]
    fn test_letter_in_payload_is_a_boundary() {
        // A non-finite coordinate mimics a tag and splits the token.
        let stream = Action::mouse_down(f64::NAN, 1.0, MouseButton::Left).encode();
        assert_eq!(tokens(&stream), ["p", "N", "a", "N,1,0"]);
    }

    #[test]
    fn test_fused() {
        let mut iter = tokenize("w1");
        assert_eq!(iter.next(), Some("w1"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
