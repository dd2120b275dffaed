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

//! The **`proc`** built-in: defines a user procedure.
//!
//! `proc name params body` parses `params` as a signature and `body` once
//! (eagerly, so a malformed body fails at definition time), then registers
//! `name` in the global command table. Re-defining a name overwrites the
//! previous command.

use std::ops::ControlFlow;
use std::rc::Rc;
use twine_semantics::{Command, EvalError, Flow, Interp, Proc};
use twine_value::Value;

pub struct ProcCmd;

impl Command for ProcCmd {
    fn call(&self, interp: &mut Interp, args: &[Value]) -> twine_semantics::Result<Flow> {
        let [name, params, body] = args else {
            return Err(EvalError::WrongArgs);
        };
        let proc = Proc::new(params, body)?;
        interp.set_cmd(name.as_string(), Some(Rc::new(proc)));
        Ok(ControlFlow::Continue(Value::empty()))
    }
}
