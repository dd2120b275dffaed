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

//! Recursive-descent parser: turns a character stream into commands or list
//! elements.

pub mod lex;

mod core;
mod list;

pub use self::core::{parse_commands, var_ref_from_brace_body, Parser};
pub use self::list::{parse_list, parse_list_str};
