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

//! A single stack frame: a name-to-entry map plus a parent link.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use twine_value::Value;

/// A variable entry: either a direct value, or a link forwarding to another
/// `(frame, name)` pair.
#[derive(Clone)]
pub enum Entry {
    Value(Value),
    Link { frame: Weak<Frame>, name: String },
}

/// One activation record in the call stack.
///
/// The *global* frame is the one with no parent. Frames are reference
/// counted so that an [`Entry::Link`] can hold a [`Weak`] pointer to an
/// ancestor without keeping it alive past its pop: reading through a link
/// whose target frame has been dropped is an error, not a dangling access.
pub struct Frame {
    vars: RefCell<HashMap<String, Entry>>,
    parent: Option<Rc<Frame>>,
}

impl Frame {
    #[must_use]
    pub fn new_global() -> Rc<Frame> {
        Rc::new(Frame {
            vars: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    #[must_use]
    pub fn new_child(parent: &Rc<Frame>) -> Rc<Frame> {
        Rc::new(Frame {
            vars: RefCell::new(HashMap::new()),
            parent: Some(Rc::clone(parent)),
        })
    }

    #[must_use]
    pub fn parent(&self) -> Option<Rc<Frame>> {
        self.parent.clone()
    }

    #[must_use]
    pub fn is_global(&self) -> bool {
        self.parent.is_none()
    }

    #[must_use]
    pub fn get_entry(&self, key: &str) -> Option<Entry> {
        self.vars.borrow().get(key).cloned()
    }

    pub fn set_entry(&self, key: &str, entry: Entry) {
        self.vars.borrow_mut().insert(key.to_owned(), entry);
    }

    pub fn remove_entry(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }
}
