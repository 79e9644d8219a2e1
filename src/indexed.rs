//! Singly linked stack with a maintained length, positional access and
//! forward iteration.

use std::fmt::{Debug, Formatter};

use log::{debug, trace};

use crate::stack::{link_last, unlink_all, Iter, Link};
use crate::{ListErr, Result};

pub use crate::stack::StackObj;

pub struct IndexedStack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> IndexedStack<T> {
    pub fn new() -> Self {
        IndexedStack { top: None, len: 0 }
    }

    pub fn top(&self) -> Option<&StackObj<T>> {
        self.top.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_back(&mut self, mut obj: StackObj<T>) {
        trace!("push_back: len {}", self.len);
        obj.next = None;
        link_last(&mut self.top, obj);
        self.len += 1;
    }

    pub fn push_front(&mut self, obj: StackObj<T>) {
        trace!("push_front: len {}", self.len);
        let mut obj = Box::new(obj);
        obj.next = self.top.take();
        self.top = Some(obj);
        self.len += 1;
    }

    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            return Ok(());
        }
        debug!("check_index: index {} rejected, len {}", index, self.len);
        Err(ListErr::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    pub fn get_node(&self, index: usize) -> Result<&StackObj<T>> {
        self.check_index(index)?;
        let mut current = self.top.as_deref();
        for _ in 0..index {
            current = current.and_then(|node| node.next.as_deref());
        }
        current.ok_or(ListErr::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    pub fn get_node_mut(&mut self, index: usize) -> Result<&mut StackObj<T>> {
        self.check_index(index)?;
        let len = self.len;
        let mut current = self.top.as_deref_mut();
        for _ in 0..index {
            current = current.and_then(|node| node.next.as_deref_mut());
        }
        current.ok_or(ListErr::IndexOutOfRange { index, len })
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.get_node(index).map(StackObj::data)
    }

    /// Overwrite the payload at `index` in place, returning the old one.
    pub fn set(&mut self, index: usize, data: T) -> Result<T> {
        let node = self.get_node_mut(index)?;
        trace!("set: index {}", index);
        Ok(std::mem::replace(&mut node.data, data))
    }

    /// A fresh walk from the top on every call.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }
}

impl<T> Default for IndexedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for IndexedStack<T> {
    fn drop(&mut self) {
        unlink_all(&mut self.top);
    }
}

impl<T: Debug> Debug for IndexedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter().map(StackObj::data)).finish()
    }
}

impl<'a, T> IntoIterator for &'a IndexedStack<T> {
    type Item = &'a StackObj<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
