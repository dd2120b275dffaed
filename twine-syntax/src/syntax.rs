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

//! The token tree: the parsed representation of a single command's words.

use std::fmt;

/// One lexical element of a command.
///
/// Every parsed word is exactly one of these variants; there is no open
/// extension point because the grammar is closed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    /// A finished string, already escape-processed.
    Literal(String),
    /// A raw string captured from a brace-delimited region, re-parsed on
    /// demand if evaluated as a command or list body.
    Block(String),
    /// An ordered sequence of sub-tokens from a `"..."` region.
    Quoted(Vec<QuotedPart>),
    /// A `$name`, `${name}`, or `$name(index)` reference.
    VarRef(VarRef),
    /// A full command captured from a `[...]` region.
    SubCommand(Command),
    /// A `{*}TOKEN` expansion wrapper.
    Expand(Box<Token>),
}

impl Token {
    /// Whether evaluating this token should splice its result into the
    /// surrounding argument vector rather than appending it as one value.
    #[must_use]
    pub fn is_expand(&self) -> bool {
        matches!(self, Token::Expand(_))
    }
}

/// One sub-token inside a quoted string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum QuotedPart {
    /// Literal text, already escape-processed.
    Raw(String),
    /// A nested `$`-reference.
    VarRef(VarRef),
    /// A nested `[...]` sub-command.
    SubCommand(Command),
}

/// A parsed `$name`, optionally global and/or indexed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VarRef {
    /// Whether the reference was written with a leading `::`.
    pub is_global: bool,
    /// The base variable name, without any `(index)` suffix.
    pub name: String,
    /// The `(index)` suffix, if any, as an as-yet-unevaluated token.
    pub index: Option<Box<Token>>,
}

impl fmt::Display for VarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_global {
            write!(f, "::")?;
        }
        write!(f, "{}", self.name)
    }
}

/// An ordered sequence of word tokens: the unit of execution.
///
/// A command may have zero words; evaluating it yields the empty value.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Command {
    pub words: Vec<Token>,
}

impl Command {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
