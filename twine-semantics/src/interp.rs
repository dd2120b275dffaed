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

//! The interpreter: command registry, environment chain, and the host-facing
//! entry points that parse and evaluate a script.

use crate::divert::{Divert, Flow};
use crate::error::{EvalError, Result};
use std::any::Any;
use std::collections::HashMap;
use std::ops::ControlFlow;
use std::rc::Rc;
use twine_env::{Env, VarKey};
use twine_syntax::VarRef;
use twine_value::Value;

/// A host-callable or user-defined procedure, invoked with already-evaluated
/// arguments (never raw tokens).
pub trait Command {
    fn call(&self, interp: &mut Interp, args: &[Value]) -> Result<Flow>;
}

/// Owns the command table, the environment chain, the last result/error, and
/// the channel registry. One instance serves one logical thread of control.
pub struct Interp {
    commands: HashMap<String, Rc<dyn Command>>,
    env: Env,
    channels: HashMap<String, Rc<dyn Any>>,
    retval: Value,
    /// The message of the last error raised by `eval_string`/`run`, kept as
    /// text since `EvalError` isn't `Clone` and the owned value is already
    /// handed back to the caller from that call.
    err: Option<String>,
}

impl Default for Interp {
    fn default() -> Self {
        Self::new()
    }
}

impl Interp {
    /// A bare interpreter: a fresh global frame, an empty command table, and
    /// no channels. `new_interp()`'s promise of a pre-registered built-in set
    /// is kept by the crate that assembles the built-ins on top of this.
    #[must_use]
    pub fn new() -> Self {
        Interp {
            commands: HashMap::new(),
            env: Env::new(),
            channels: HashMap::new(),
            retval: Value::empty(),
            err: None,
        }
    }

    #[must_use]
    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Env {
        &mut self.env
    }

    /// Registers `callable` under `name`, or unregisters it when `callable`
    /// is `None`.
    pub fn set_cmd(&mut self, name: &str, callable: Option<Rc<dyn Command>>) {
        match callable {
            Some(c) => {
                self.commands.insert(name.to_owned(), c);
            }
            None => {
                self.commands.remove(name);
            }
        }
    }

    #[must_use]
    pub fn has_cmd(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub(crate) fn lookup_cmd(&self, name: &str) -> Option<Rc<dyn Command>> {
        self.commands.get(name).cloned()
    }

    /// Registers an opaque channel handle under `name`.
    pub fn set_channel(&mut self, name: &str, handle: Rc<dyn Any>) {
        self.channels.insert(name.to_owned(), handle);
    }

    #[must_use]
    pub fn channel(&self, name: &str) -> Option<Rc<dyn Any>> {
        self.channels.get(name).cloned()
    }

    /// Reads a variable by its plain string-form name, ignoring the `::`
    /// global marker and array-index syntax (the raw host-facing accessor).
    pub fn get_var_raw(&self, name: &str) -> Result<Value> {
        Ok(self.env.get_var(&VarKey::simple(name))?)
    }

    pub fn set_var_raw(&self, name: &str, value: Value) -> Result<()> {
        Ok(self.env.set_var(&VarKey::simple(name), value)?)
    }

    /// Reads a variable given a parsed reference, resolving its optional
    /// array index (itself a token that may need evaluation) first.
    pub fn get_var(&mut self, vr: &VarRef) -> Result<Value> {
        let key = self.resolve_var_key(vr)?;
        Ok(self.env.get_var(&VarKey {
            is_global: vr.is_global,
            name: &vr.name,
            index: key.as_deref(),
        })?)
    }

    pub fn set_var(&mut self, vr: &VarRef, value: Value) -> Result<()> {
        let key = self.resolve_var_key(vr)?;
        Ok(self.env.set_var(
            &VarKey {
                is_global: vr.is_global,
                name: &vr.name,
                index: key.as_deref(),
            },
            value,
        )?)
    }

    fn resolve_var_key(&mut self, vr: &VarRef) -> Result<Option<String>> {
        match &vr.index {
            None => Ok(None),
            Some(token) => match self.eval_token(token)? {
                ControlFlow::Continue(v) => Ok(Some(v.as_string().to_owned())),
                ControlFlow::Break(d) => Err(EvalError::UncaughtControl(d.name())),
            },
        }
    }

    pub fn link_var(&mut self, level: usize, their_name: &str, my_name: &str) -> Result<()> {
        Ok(self.env.link_var(level, their_name, my_name)?)
    }

    /// Parses `s` as a command list and evaluates it, synthesizing an error
    /// for any `Divert` that escapes all the way to this entry point.
    pub fn eval_string(&mut self, s: &str) -> (Value, Option<EvalError>) {
        let commands = match twine_syntax::parser::parse_commands(s) {
            Ok(c) => c,
            Err(e) => return self.finish(Err(twine_value::ValueError::from(e).into())),
        };
        let result = self.eval_commands(&commands);
        self.finish(result)
    }

    /// Evaluates an already-parsed-or-parseable value as a script, per
    /// `eval_obj`.
    pub fn eval_obj(&mut self, value: &Value) -> Result<Flow> {
        let commands = value.as_commands()?;
        self.eval_commands(&commands)
    }

    /// Parses a rune source as a command list and evaluates it. Like
    /// `eval_string` but over the pull-based character stream directly,
    /// for hosts that read a script without first buffering it into a
    /// `String`.
    pub fn run<S: twine_syntax::source::RuneSource>(&mut self, source: S) -> (Value, Option<EvalError>) {
        let commands = match twine_syntax::parser::Parser::new(source).parse_commands() {
            Ok(c) => c,
            Err(e) => return self.finish(Err(twine_value::ValueError::from(e).into())),
        };
        let result = self.eval_commands(&commands);
        self.finish(result)
    }

    fn finish(&mut self, result: Result<Flow>) -> (Value, Option<EvalError>) {
        let (value, err) = match result {
            Ok(ControlFlow::Continue(v)) => (v, None),
            Ok(ControlFlow::Break(d)) => {
                let name = d.name();
                let v = match d {
                    Divert::Return(v) => v,
                    Divert::Break | Divert::Continue => Value::empty(),
                };
                (v, Some(EvalError::UncaughtControl(name)))
            }
            Err(e) => (Value::empty(), Some(e)),
        };
        self.retval = value.clone();
        self.err = err.as_ref().map(ToString::to_string);
        (value, err)
    }

    #[must_use]
    pub fn retval(&self) -> &Value {
        &self.retval
    }

    #[must_use]
    pub fn has_err(&self) -> bool {
        self.err.is_some()
    }

    pub fn clear_error(&mut self) {
        self.err = None;
    }
}
