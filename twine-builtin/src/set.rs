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

//! The **`set`** built-in.
//!
//! `set name` reads a variable; `set name value` writes it. Either way the
//! built-in's result is the value now stored under `name`.

use std::ops::ControlFlow;
use twine_semantics::{Command, EvalError, Flow, Interp};
use twine_value::Value;

pub struct Set;

impl Command for Set {
    fn call(&self, interp: &mut Interp, args: &[Value]) -> twine_semantics::Result<Flow> {
        match args {
            [name] => {
                let vr = name.as_var_ref()?;
                Ok(ControlFlow::Continue(interp.get_var(&vr)?))
            }
            [name, value] => {
                let vr = name.as_var_ref()?;
                interp.set_var(&vr, value.clone())?;
                Ok(ControlFlow::Continue(value.clone()))
            }
            _ => Err(EvalError::WrongArgs),
        }
    }
}
