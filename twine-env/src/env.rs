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

//! The environment chain: the current frame, the global frame, and the
//! operations that resolve variable references through link chains.

use crate::error::{EnvError, Result};
use crate::frame::{Entry, Frame};
use std::borrow::Cow;
use std::rc::Rc;
use twine_value::Value;

/// A resolved variable name, ready to look up in a frame's map.
///
/// Array indices are folded into a composite `name(index)` key in the same
/// map, per the core's choice not to model arrays as a separate type.
pub struct VarKey<'a> {
    pub is_global: bool,
    pub name: &'a str,
    pub index: Option<&'a str>,
}

impl<'a> VarKey<'a> {
    #[must_use]
    pub fn simple(name: &'a str) -> Self {
        VarKey {
            is_global: false,
            name,
            index: None,
        }
    }

    fn composite_key(&self) -> Cow<'a, str> {
        match self.index {
            Some(i) => Cow::Owned(format!("{}({i})", self.name)),
            None => Cow::Borrowed(self.name),
        }
    }
}

/// The interpreter's chain of stack frames.
pub struct Env {
    global: Rc<Frame>,
    current: Rc<Frame>,
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        let global = Frame::new_global();
        Env {
            current: Rc::clone(&global),
            global,
        }
    }

    /// Pushes a new frame on top of the chain, returning the depth it was
    /// pushed at (for diagnostics; callers don't need to track it).
    pub fn push_frame(&mut self) {
        self.current = Frame::new_child(&self.current);
    }

    /// Pops the current frame, discarding it. Errors if the current frame is
    /// the global frame.
    pub fn pop_frame(&mut self) -> Result<()> {
        match self.current.parent() {
            Some(parent) => {
                self.current = parent;
                Ok(())
            }
            None => Err(EnvError::PopGlobal),
        }
    }

    #[must_use]
    pub fn is_at_global(&self) -> bool {
        self.current.is_global()
    }

    fn start_frame(&self, is_global: bool) -> &Rc<Frame> {
        if is_global {
            &self.global
        } else {
            &self.current
        }
    }

    /// Reads a variable, following link entries to their terminal value.
    pub fn get_var(&self, key: &VarKey) -> Result<Value> {
        let start = Rc::clone(self.start_frame(key.is_global));
        let composite = key.composite_key();
        self.resolve_read(start, composite.into_owned())
    }

    fn resolve_read(&self, mut frame: Rc<Frame>, mut name: String) -> Result<Value> {
        loop {
            match frame.get_entry(&name) {
                Some(Entry::Value(v)) => return Ok(v),
                Some(Entry::Link {
                    frame: target,
                    name: target_name,
                }) => {
                    frame = target
                        .upgrade()
                        .ok_or_else(|| EnvError::NotFound(name.clone()))?;
                    name = target_name;
                }
                None => return Err(EnvError::NotFound(name)),
            }
        }
    }

    /// Follows link entries to their terminal `(frame, name)` pair, stopping
    /// at the first value-holding or absent entry. Used by both `set_var`
    /// and `unset_var` so writes land on the link's target, not the link
    /// itself.
    fn resolve_write(&self, mut frame: Rc<Frame>, mut name: String) -> Result<(Rc<Frame>, String)> {
        loop {
            match frame.get_entry(&name) {
                Some(Entry::Link {
                    frame: target,
                    name: target_name,
                }) => {
                    frame = target
                        .upgrade()
                        .ok_or_else(|| EnvError::NotFound(name.clone()))?;
                    name = target_name;
                }
                _ => return Ok((frame, name)),
            }
        }
    }

    /// Stores `value`, creating a fresh entry if none exists, or resolving
    /// an existing link chain to its terminal and storing there.
    pub fn set_var(&self, key: &VarKey, value: Value) -> Result<()> {
        let start = Rc::clone(self.start_frame(key.is_global));
        let composite = key.composite_key().into_owned();
        let (frame, name) = self.resolve_write(start, composite)?;
        frame.set_entry(&name, Entry::Value(value));
        Ok(())
    }

    /// Deletes a variable entry (the "setting to nil" case in the spec).
    pub fn unset_var(&self, key: &VarKey) -> Result<()> {
        let start = Rc::clone(self.start_frame(key.is_global));
        let composite = key.composite_key().into_owned();
        let (frame, name) = self.resolve_write(start, composite)?;
        frame.remove_entry(&name);
        Ok(())
    }

    /// Creates a link entry named `my_name` in the current frame, pointing
    /// to `their_name` in the frame `level` steps up the chain (0 is the
    /// current frame itself). Implements the upvar semantic: subsequent
    /// reads/writes of `my_name` here transparently read/write the target.
    pub fn link_var(&self, level: usize, their_name: &str, my_name: &str) -> Result<()> {
        let mut target = Rc::clone(&self.current);
        for _ in 0..level {
            target = target.parent().ok_or(EnvError::NoSuchAncestor(level))?;
        }
        self.current.set_entry(
            my_name,
            Entry::Link {
                frame: Rc::downgrade(&target),
                name: their_name.to_owned(),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let env = Env::new();
        env.set_var(&VarKey::simple("x"), Value::from_string("5"))
            .unwrap();
        assert_eq!(env.get_var(&VarKey::simple("x")).unwrap().as_string(), "5");
    }

    #[test]
    fn missing_variable_is_an_error() {
        let env = Env::new();
        assert_eq!(
            env.get_var(&VarKey::simple("missing")).unwrap_err(),
            EnvError::NotFound("missing".into())
        );
    }

    #[test]
    fn unset_deletes_the_entry() {
        let env = Env::new();
        env.set_var(&VarKey::simple("x"), Value::from_string("1"))
            .unwrap();
        env.unset_var(&VarKey::simple("x")).unwrap();
        assert!(env.get_var(&VarKey::simple("x")).is_err());
    }

    #[test]
    fn frames_are_popped_and_locals_do_not_leak() {
        let mut env = Env::new();
        env.set_var(&VarKey::simple("v"), Value::from_string("1"))
            .unwrap();
        env.push_frame();
        assert!(env.get_var(&VarKey::simple("v")).is_err());
        env.set_var(
            &VarKey {
                is_global: true,
                name: "v",
                index: None,
            },
            Value::from_string("2"),
        )
        .unwrap();
        env.pop_frame().unwrap();
        assert_eq!(env.get_var(&VarKey::simple("v")).unwrap().as_string(), "2");
    }

    #[test]
    fn cannot_pop_global_frame() {
        let mut env = Env::new();
        assert_eq!(env.pop_frame().unwrap_err(), EnvError::PopGlobal);
    }

    #[test]
    fn upvar_links_read_and_write_through_to_parent() {
        let mut env = Env::new();
        env.set_var(&VarKey::simple("v"), Value::from_string("1"))
            .unwrap();
        env.push_frame();
        env.link_var(1, "v", "w").unwrap();
        assert_eq!(env.get_var(&VarKey::simple("w")).unwrap().as_string(), "1");
        env.set_var(&VarKey::simple("w"), Value::from_string("42"))
            .unwrap();
        assert_eq!(
            env.get_var(&VarKey {
                is_global: true,
                name: "v",
                index: None,
            })
            .unwrap()
            .as_string(),
            "1" // global frame is not the caller here; v lives in the caller frame
        );
        env.pop_frame().unwrap();
        assert_eq!(env.get_var(&VarKey::simple("v")).unwrap().as_string(), "42");
    }

    #[test]
    fn link_across_a_popped_frame_errors_on_access() {
        let mut env = Env::new();
        env.push_frame();
        env.set_var(&VarKey::simple("v"), Value::from_string("1"))
            .unwrap();
        env.push_frame();
        env.link_var(1, "v", "w").unwrap();
        env.pop_frame().unwrap(); // pops the frame that owned `v`
        assert!(env.get_var(&VarKey::simple("w")).is_err());
    }

    #[test]
    fn array_index_is_a_composite_key() {
        let env = Env::new();
        let key = VarKey {
            is_global: false,
            name: "arr",
            index: Some("1"),
        };
        env.set_var(&key, Value::from_string("x")).unwrap();
        assert_eq!(env.get_var(&key).unwrap().as_string(), "x");
        assert!(env.get_var(&VarKey::simple("arr")).is_err());
    }
}
