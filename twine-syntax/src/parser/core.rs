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

//! The command parser: turns a character stream into a list of [`Command`]s.

use super::lex::{
    is_var_name_char, is_whitespace, is_word_char, translate_escape, Lexer,
};
use crate::error::{Found, ParseError, Result};
use crate::source::RuneSource;
use crate::syntax::{Command, QuotedPart, Token, VarRef};

/// Recursive-descent parser over a [`RuneSource`].
///
/// Construct one with [`Parser::new`] and call [`Parser::parse_commands`]
/// (or [`Parser::parse_command`] for a single command). Parse failures
/// unwind as a plain `Result`; nothing panics on malformed input.
pub struct Parser<S> {
    lexer: Lexer<S>,
}

impl<S: RuneSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Parser {
            lexer: Lexer::new(source),
        }
    }

    /// Parses the whole stream as a sequence of commands.
    ///
    /// Eats leading whitespace, then alternates between `#`-comments (valid
    /// only where a command would begin) and commands, separated by any run
    /// of separator-space, `;`, or whitespace.
    pub fn parse_commands(&mut self) -> Result<Vec<Command>> {
        let mut commands = Vec::new();
        self.lexer.skip_whitespace();
        while let Some(c) = self.lexer.peek() {
            if c == '#' {
                self.skip_comment();
            } else {
                commands.push(self.parse_command()?);
            }
            self.skip_command_separators();
        }
        Ok(commands)
    }

    /// Parses one command: a word, then alternating separator-space and
    /// words, stopping at end-of-line (`;`, `\n`, or end of stream). A
    /// command may have zero words.
    pub fn parse_command(&mut self) -> Result<Command> {
        let mut words = Vec::new();
        if self.at_command_end() {
            return Ok(Command { words });
        }
        words.push(self.parse_token(None)?);
        loop {
            self.lexer.skip_separator_space();
            if self.at_command_end() {
                break;
            }
            words.push(self.parse_token(None)?);
        }
        Ok(Command { words })
    }

    fn at_command_end(&self) -> bool {
        matches!(self.lexer.peek(), None | Some(';') | Some('\n'))
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.lexer.peek() {
            if c == '\n' {
                break;
            }
            self.lexer.advance();
        }
    }

    fn skip_command_separators(&mut self) {
        while matches!(self.lexer.peek(), Some(c) if super::lex::is_separator_space(c) || c == ';' || is_whitespace(c))
        {
            self.lexer.advance();
        }
    }

    /// Parses one word. `terminator`, when given, additionally stops a
    /// simple literal even on a character that would otherwise be a word
    /// character (used for the `(index)` suffix of a variable reference).
    fn parse_token(&mut self, terminator: Option<char>) -> Result<Token> {
        match self.lexer.peek() {
            Some('[') => self.parse_subcommand().map(Token::SubCommand),
            Some('{') => self.parse_block_or_expand(),
            Some('"') => self.parse_quoted().map(Token::Quoted),
            Some('$') => {
                self.lexer.advance();
                self.parse_var_ref().map(Token::VarRef)
            }
            Some(_) => self.parse_literal(terminator).map(Token::Literal),
            None => Err(ParseError::UnexpectedEof),
        }
    }

    fn parse_literal(&mut self, terminator: Option<char>) -> Result<String> {
        let mut s = String::new();
        loop {
            match self.lexer.peek() {
                None => break,
                Some(c) if Some(c) == terminator => break,
                Some('\\') => {
                    self.lexer.advance();
                    match self.lexer.advance() {
                        Some(c) => s.push(translate_escape(c)),
                        None => return Err(ParseError::UnexpectedEof),
                    }
                }
                Some(c) if is_word_char(c) => {
                    self.lexer.advance();
                    s.push(c);
                }
                Some(_) => break,
            }
        }
        if s.is_empty() {
            Err(ParseError::EmptyLiteral)
        } else {
            Ok(s)
        }
    }

    fn parse_subcommand(&mut self) -> Result<Command> {
        self.lexer.advance(); // consume '['
        self.lexer.skip_separator_space();
        let mut words = Vec::new();
        loop {
            match self.lexer.peek() {
                Some(']') => {
                    self.lexer.advance();
                    break;
                }
                None => return Err(ParseError::expected("']'", Found::Eof)),
                _ => {
                    words.push(self.parse_token(None)?);
                    self.lexer.skip_separator_space();
                }
            }
        }
        Ok(Command { words })
    }

    fn parse_block_or_expand(&mut self) -> Result<Token> {
        self.lexer.advance(); // consume '{'
        let body = self.lexer.read_braced_raw()?;
        if body == "*" {
            if let Some(c) = self.lexer.peek() {
                if !is_block_terminator(Some(c)) {
                    let inner = self.parse_token(None)?;
                    return Ok(Token::Expand(Box::new(inner)));
                }
            }
        }
        match self.lexer.peek() {
            None => {}
            Some(c) if is_block_terminator(Some(c)) => {}
            Some(c) => return Err(ParseError::GarbageAfterBlock(c)),
        }
        Ok(Token::Block(body))
    }

    fn parse_quoted(&mut self) -> Result<Vec<QuotedPart>> {
        self.lexer.advance(); // consume opening '"'
        let mut parts = Vec::new();
        let mut raw = String::new();
        loop {
            match self.lexer.peek() {
                None => return Err(ParseError::UnclosedQuote),
                Some('"') => {
                    self.lexer.advance();
                    break;
                }
                Some('$') => {
                    flush_raw(&mut parts, &mut raw);
                    self.lexer.advance();
                    parts.push(QuotedPart::VarRef(self.parse_var_ref()?));
                }
                Some('[') => {
                    flush_raw(&mut parts, &mut raw);
                    parts.push(QuotedPart::SubCommand(self.parse_subcommand()?));
                }
                Some('\\') => {
                    self.lexer.advance();
                    match self.lexer.advance() {
                        Some(c) => raw.push(translate_escape(c)),
                        None => return Err(ParseError::UnclosedQuote),
                    }
                }
                Some(c) => {
                    self.lexer.advance();
                    raw.push(c);
                }
            }
        }
        flush_raw(&mut parts, &mut raw);
        Ok(parts)
    }

    /// Parses a `$...` reference, assuming the leading `$` was already
    /// consumed.
    fn parse_var_ref(&mut self) -> Result<VarRef> {
        if self.lexer.eat('{') {
            let body = self.lexer.read_braced_raw()?;
            return var_ref_from_brace_body(&body);
        }
        let mut is_global = false;
        if self.lexer.eat(':') {
            match self.lexer.peek() {
                Some(':') => {
                    self.lexer.advance();
                    is_global = true;
                }
                Some(c) => return Err(ParseError::expected("':'", Found::Char(c))),
                None => return Err(ParseError::expected("':'", Found::Eof)),
            }
        }
        let name = self.read_var_name()?;
        let index = self.parse_optional_index()?;
        Ok(VarRef {
            is_global,
            name,
            index,
        })
    }

    fn read_var_name(&mut self) -> Result<String> {
        let mut s = String::new();
        while let Some(c) = self.lexer.peek() {
            if is_var_name_char(c) {
                s.push(c);
                self.lexer.advance();
            } else {
                break;
            }
        }
        if s.is_empty() {
            Err(ParseError::EmptyVariableName)
        } else {
            Ok(s)
        }
    }

    fn parse_optional_index(&mut self) -> Result<Option<Box<Token>>> {
        if !self.lexer.eat('(') {
            return Ok(None);
        }
        let token = self.parse_token(Some(')'))?;
        match self.lexer.peek() {
            Some(')') => {
                self.lexer.advance();
                Ok(Some(Box::new(token)))
            }
            Some(c) => Err(ParseError::expected("')'", Found::Char(c))),
            None => Err(ParseError::expected("')'", Found::Eof)),
        }
    }
}

/// What may legally follow a closing `}`: whitespace, `;`, `]`, or end of
/// stream. Shared by the "garbage after block" check and the `{*}`
/// expansion-prefix check, since both need the same notion of "nothing more
/// to read here": a `{*}` immediately before `]` (the last word of a
/// `[...]`) is a plain `*`-block, not the expansion marker.
fn is_block_terminator(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => is_whitespace(c) || c == ';' || c == ']',
    }
}

fn flush_raw(parts: &mut Vec<QuotedPart>, raw: &mut String) {
    if !raw.is_empty() {
        parts.push(QuotedPart::Raw(std::mem::take(raw)));
    }
}

/// Parses `body` as a variable reference's name portion: an optional
/// leading `::` marks global scope, and a trailing `(...)` becomes an
/// embedded index literal. Used both for `${...}` brace-captured names and
/// for re-deriving a [`VarRef`] from a value's string view.
pub fn var_ref_from_brace_body(body: &str) -> Result<VarRef> {
    let (is_global, rest) = match body.strip_prefix("::") {
        Some(r) => (true, r),
        None => (false, body),
    };
    if rest.is_empty() {
        return Err(ParseError::EmptyVariableName);
    }
    if let Some(open) = rest.find('(') {
        if rest.ends_with(')') {
            let name = rest[..open].to_string();
            let index_literal = rest[open + 1..rest.len() - 1].to_string();
            if name.is_empty() {
                return Err(ParseError::EmptyVariableName);
            }
            return Ok(VarRef {
                is_global,
                name,
                index: Some(Box::new(Token::Literal(index_literal))),
            });
        }
    }
    Ok(VarRef {
        is_global,
        name: rest.to_string(),
        index: None,
    })
}

/// Parses `s` as a sequence of commands. Convenience wrapper around
/// [`Parser::parse_commands`] for the common in-memory-string case.
pub fn parse_commands(s: &str) -> Result<Vec<Command>> {
    Parser::new(crate::source::of_str(s)).parse_commands()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn words(s: &str) -> Vec<Token> {
        let mut cmds = parse_commands(s).unwrap();
        assert_eq!(cmds.len(), 1);
        cmds.remove(0).words
    }

    #[test]
    fn empty_command_has_no_words() {
        let cmds = parse_commands("").unwrap();
        assert_eq!(cmds, Vec::new());
        let cmds = parse_commands(";").unwrap();
        assert_eq!(cmds, vec![Command { words: vec![] }]);
    }

    #[test]
    fn simple_words_split_on_separator_space() {
        let w = words("foo bar  baz");
        assert_eq!(
            w,
            vec![
                Token::Literal("foo".into()),
                Token::Literal("bar".into()),
                Token::Literal("baz".into()),
            ]
        );
    }

    #[test]
    fn comment_runs_to_end_of_line() {
        let cmds = parse_commands("# hello\nfoo").unwrap();
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].words, vec![Token::Literal("foo".into())]);
    }

    #[test]
    fn semicolon_separates_commands() {
        let cmds = parse_commands("foo; bar").unwrap();
        assert_eq!(cmds.len(), 2);
    }

    #[test]
    fn newline_separates_commands() {
        let cmds = parse_commands("foo\nbar").unwrap();
        assert_eq!(cmds.len(), 2);
    }

    #[test]
    fn brace_block_is_captured_raw() {
        let w = words("{a $b [c]}");
        assert_eq!(w, vec![Token::Block("a $b [c]".into())]);
    }

    #[test]
    fn nested_braces_are_balanced() {
        let w = words("{a {b} c}");
        assert_eq!(w, vec![Token::Block("a {b} c".into())]);
    }

    #[test]
    fn block_escape_preserves_backslash() {
        let w = words(r"{a\}b}");
        assert_eq!(w, vec![Token::Block(r"a\}b".into())]);
    }

    #[test]
    fn garbage_after_block_is_an_error() {
        assert_matches!(
            parse_commands("{a}b"),
            Err(ParseError::GarbageAfterBlock('b'))
        );
    }

    #[test]
    fn expand_prefix_wraps_next_token() {
        let w = words("{*}$x");
        assert_matches!(&w[0], Token::Expand(inner) if matches!(**inner, Token::VarRef(_)));
    }

    #[test]
    fn bare_star_block_with_trailing_space_is_not_expand() {
        let w = words("{*} x");
        assert_eq!(w[0], Token::Block("*".into()));
    }

    #[test]
    fn star_block_immediately_before_closing_bracket_is_a_plain_block() {
        let w = words("[foo {*}]");
        assert_matches!(&w[0], Token::SubCommand(cmd) if matches!(
            cmd.words.as_slice(),
            [Token::Literal(name), Token::Block(body)] if name == "foo" && body == "*"
        ));
    }

    #[test]
    fn quoted_string_interpolates_vars_and_commands() {
        let w = words(r#""hello $name [cmd] end""#);
        assert_eq!(w.len(), 1);
        assert_matches!(&w[0], Token::Quoted(parts) if parts.len() == 4);
    }

    #[test]
    fn quoted_string_escape_table() {
        let w = words(r#""a\tb\nc""#);
        assert_eq!(
            w,
            vec![Token::Quoted(vec![QuotedPart::Raw("a\tb\nc".into())])]
        );
    }

    #[test]
    fn unclosed_quote_is_an_error() {
        assert_matches!(parse_commands("\"abc"), Err(ParseError::UnclosedQuote));
    }

    #[test]
    fn simple_var_ref() {
        let w = words("$x");
        assert_eq!(
            w,
            vec![Token::VarRef(VarRef {
                is_global: false,
                name: "x".into(),
                index: None,
            })]
        );
    }

    #[test]
    fn global_var_ref() {
        let w = words("$::x");
        assert_matches!(&w[0], Token::VarRef(v) if v.is_global && v.name == "x");
    }

    #[test]
    fn braced_var_ref_with_index() {
        let w = words("${arr(1)}");
        assert_matches!(&w[0], Token::VarRef(v) if v.name == "arr");
        if let Token::VarRef(v) = &w[0] {
            assert_matches!(v.index.as_deref(), Some(Token::Literal(s)) if s == "1");
        }
    }

    #[test]
    fn indexed_var_ref() {
        let w = words("$arr(1)");
        assert_matches!(&w[0], Token::VarRef(v) if v.name == "arr");
    }

    #[test]
    fn subcommand_is_parsed_recursively() {
        let w = words("[foo bar]");
        assert_matches!(&w[0], Token::SubCommand(cmd) if cmd.words.len() == 2);
    }

    #[test]
    fn unclosed_subcommand_is_an_error() {
        assert_matches!(
            parse_commands("[foo"),
            Err(ParseError::Expected { found: Found::Eof, .. })
        );
    }

    #[test]
    fn literal_escape_survives_outside_quotes() {
        let w = words(r"a\nb");
        assert_eq!(w, vec![Token::Literal("a\nb".into())]);
    }
}
