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

//! The character stream the lexer pulls from.

/// A pull-based stream that produces one character at a time.
///
/// The parser never needs more than this: it advances the stream exactly
/// once per character it consumes and relies on the lexer for lookahead.
pub trait RuneSource {
    /// Reads and consumes the next character, or returns `None` at the end
    /// of the stream.
    fn read_one_rune(&mut self) -> Option<char>;
}

impl<I: Iterator<Item = char>> RuneSource for I {
    fn read_one_rune(&mut self) -> Option<char> {
        self.next()
    }
}

/// Convenience constructor for a [`RuneSource`] over an in-memory string.
#[must_use]
pub fn of_str(s: &str) -> impl RuneSource + '_ {
    s.chars()
}
