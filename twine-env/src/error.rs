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

//! Failures raised by variable lookup, assignment, and linking.

use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum EnvError {
    #[error("variable not found: ${0}")]
    NotFound(String),
    #[error("cannot pop the global frame")]
    PopGlobal,
    #[error("no such ancestor frame: {0} levels up")]
    NoSuchAncestor(usize),
}

pub type Result<T> = std::result::Result<T, EnvError>;
