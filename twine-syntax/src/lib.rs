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

//! Lexer, parser, and token tree for the twine scripting language.
//!
//! This crate owns everything in the "leaves-first" dependency chain that
//! does not need a runtime value representation: the character stream
//! ([`source`]), the recursive-descent parser ([`parser`]), and the closed
//! token-tree sum type it produces ([`syntax`]).

pub mod error;
pub mod parser;
pub mod source;
pub mod syntax;

pub use error::{Found, ParseError};
pub use syntax::{Command, QuotedPart, Token, VarRef};
