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

//! Failures raised by command dispatch, argument binding, and the built-in
//! control-flow codes that escape their handler.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("command not found: {0}")]
    CommandNotFound(String),
    #[error("wrong # args")]
    WrongArgs,
    #[error("arg count mismatch")]
    ArgCountMismatch,
    /// Raised by the `error` built-in with an arbitrary message.
    #[error("{0}")]
    User(String),
    /// A `Divert` reached the outermost `run`/`eval_string` call with no
    /// looping or procedure construct left to consume it.
    #[error("uncaught error: {0}")]
    UncaughtControl(&'static str),
    #[error(transparent)]
    Value(#[from] twine_value::ValueError),
    #[error(transparent)]
    Env(#[from] twine_env::EnvError),
}

pub type Result<T> = std::result::Result<T, EvalError>;
