// This file is part of twine, an embeddable command-oriented scripting
// language interpreter.
// Copyright (C) 2026 The Twine Authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The list parser: pure lexing into literal strings, no `$`/`[` substitution.
//!
//! A list token is a brace block (raw body, verbatim), a quoted string
//! (escape-processed, quotes removed), or a run of non-whitespace
//! characters. Lists never substitute variables or sub-commands; that is
//! what distinguishes [`parse_list`] from [`super::core::parse_commands`].

use super::lex::translate_escape;
use crate::error::{ParseError, Result};
use crate::parser::lex::Lexer;
use crate::source::RuneSource;

/// Parses `source` into its list elements.
pub fn parse_list<S: RuneSource>(source: S) -> Result<Vec<String>> {
    let mut lx = Lexer::new(source);
    let mut out = Vec::new();
    lx.skip_whitespace();
    while lx.peek().is_some() {
        out.push(parse_list_token(&mut lx)?);
        lx.skip_whitespace();
    }
    Ok(out)
}

/// Parses `s` into its list elements. Convenience wrapper for the common
/// in-memory-string case.
pub fn parse_list_str(s: &str) -> Result<Vec<String>> {
    parse_list(crate::source::of_str(s))
}

fn parse_list_token<S: RuneSource>(lx: &mut Lexer<S>) -> Result<String> {
    match lx.peek() {
        Some('{') => {
            lx.advance();
            lx.read_braced_raw()
        }
        Some('"') => parse_list_quoted(lx),
        Some(_) => Ok(parse_list_run(lx)),
        None => unreachable!("caller checked peek().is_some()"),
    }
}

fn parse_list_quoted<S: RuneSource>(lx: &mut Lexer<S>) -> Result<String> {
    lx.advance(); // consume opening '"'
    let mut s = String::new();
    loop {
        match lx.peek() {
            None => return Err(ParseError::UnclosedQuote),
            Some('"') => {
                lx.advance();
                break;
            }
            Some('\\') => {
                lx.advance();
                match lx.advance() {
                    Some(c) => s.push(translate_escape(c)),
                    None => return Err(ParseError::UnclosedQuote),
                }
            }
            Some(c) => {
                lx.advance();
                s.push(c);
            }
        }
    }
    Ok(s)
}

fn parse_list_run<S: RuneSource>(lx: &mut Lexer<S>) -> String {
    let mut s = String::new();
    while let Some(c) = lx.peek() {
        if super::lex::is_whitespace(c) {
            break;
        }
        s.push(c);
        lx.advance();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_words_split_on_whitespace() {
        assert_eq!(parse_list_str("a b  c").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn brace_element_is_raw() {
        assert_eq!(parse_list_str("{a b} c").unwrap(), vec!["a b", "c"]);
    }

    #[test]
    fn quoted_element_strips_quotes_and_applies_escapes() {
        assert_eq!(parse_list_str(r#""a b" "c\td""#).unwrap(), vec!["a b", "c\td"]);
    }

    #[test]
    fn list_does_not_substitute() {
        assert_eq!(parse_list_str("$x [y]").unwrap(), vec!["$x", "[y]"]);
    }

    #[test]
    fn empty_input_is_empty_list() {
        assert_eq!(parse_list_str("   ").unwrap(), Vec::<String>::new());
        assert_eq!(parse_list_str("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn round_trip_matches_join_rule() {
        let elems = parse_list_str("a {b c} {}").unwrap();
        assert_eq!(elems, vec!["a", "b c", ""]);
        let joined = twine_quote::join(&elems);
        let reparsed = parse_list_str(&joined).unwrap();
        assert_eq!(reparsed, elems);
    }
}
