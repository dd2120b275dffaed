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

//! Parse failures.

use std::fmt;
use thiserror::Error;

/// What the parser actually found at the point of failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Found {
    Char(char),
    Eof,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "'{c}'"),
            Found::Eof => write!(f, "EOF"),
        }
    }
}

/// A syntax error raised while parsing source text.
///
/// Every parser entry point (`parse_commands`, `parse_list`) unwinds to one
/// of these; there is no partial result on failure.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    #[error("Expected {expected}, got {found}")]
    Expected {
        expected: &'static str,
        found: Found,
    },
    #[error("unclosed block")]
    UnclosedBlock,
    #[error("unclosed quote")]
    UnclosedQuote,
    #[error("unexpected EOF")]
    UnexpectedEof,
    #[error("empty literal")]
    EmptyLiteral,
    #[error("empty variable name")]
    EmptyVariableName,
    #[error("garbage after block: {0}")]
    GarbageAfterBlock(char),
}

impl ParseError {
    pub(crate) fn expected(expected: &'static str, found: Found) -> Self {
        ParseError::Expected { expected, found }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
