//! Doubly linked list.
//!
//! Forward links own the next node, backward links are `Weak` so a list
//! never forms a reference cycle. Callers reach nodes through [`ObjRef`]
//! handles returned by [`LinkedList::get_obj_indx`] and friends.

use std::{
    cell::{Ref, RefCell},
    fmt::{Debug, Formatter},
    rc::{Rc, Weak},
};

use log::{debug, trace};

use crate::{ListErr, Result};

type Link<T> = Option<Rc<RefCell<ObjList<T>>>>;
type BackLink<T> = Option<Weak<RefCell<ObjList<T>>>>;

pub struct ObjList<T> {
    data: T,
    next: Link<T>,
    prev: BackLink<T>,
}

impl<T> ObjList<T> {
    pub fn new(data: T) -> Self {
        ObjList {
            data,
            next: None,
            prev: None,
        }
    }

    fn set_prev(&mut self, prev: &Link<T>) {
        self.prev = prev.as_ref().map(Rc::downgrade);
    }
    fn set_next(&mut self, next: &Link<T>) {
        self.next = next.clone();
    }
    fn get_prev(&self) -> Link<T> {
        self.prev.as_ref().and_then(Weak::upgrade)
    }
    fn get_next(&self) -> Link<T> {
        self.next.clone()
    }
}

/// Shared handle to a node of a [`LinkedList`].
///
/// A handle stays valid after its node is removed, but the node is then
/// detached: `next()` and `prev()` return `None`.
///
/// The `Ref` from [`ObjRef::data`] must be released before the owning list
/// is mutated again; an outstanding borrow makes the relinking panic.
pub struct ObjRef<T>(Rc<RefCell<ObjList<T>>>);

impl<T> Clone for ObjRef<T> {
    fn clone(&self) -> Self {
        ObjRef(Rc::clone(&self.0))
    }
}

impl<T> ObjRef<T> {
    pub fn data(&self) -> Ref<'_, T> {
        Ref::map(self.0.borrow(), |node| &node.data)
    }

    /// Replace the payload, returning the old one.
    pub fn set_data(&self, data: T) -> T {
        std::mem::replace(&mut self.0.borrow_mut().data, data)
    }

    pub fn next(&self) -> Option<ObjRef<T>> {
        self.0.borrow().get_next().map(ObjRef)
    }

    pub fn prev(&self) -> Option<ObjRef<T>> {
        self.0.borrow().get_prev().map(ObjRef)
    }

    /// True when both handles point at the same node.
    pub fn ptr_eq(&self, other: &ObjRef<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Debug> Debug for ObjRef<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ObjRef").field(&*self.data()).finish()
    }
}

pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<ObjRef<T>> {
        self.head.clone().map(ObjRef)
    }

    pub fn tail(&self) -> Option<ObjRef<T>> {
        self.tail.clone().map(ObjRef)
    }

    /// Append `obj` after the current tail.
    pub fn add_obj(&mut self, obj: ObjList<T>) {
        let new_node = Some(Rc::new(RefCell::new(obj)));
        trace!("add_obj: append at tail");
        if self.tail.is_none() {
            if let Some(node) = &new_node {
                let mut node = node.borrow_mut();
                node.set_prev(&None);
                node.set_next(&None);
            }
            self.head = new_node.clone();
            self.tail = new_node;
            return;
        }

        if let Some(tail) = &self.tail {
            tail.borrow_mut().set_next(&new_node);
        }
        if let Some(node) = &new_node {
            node.borrow_mut().set_prev(&self.tail);
        }
        self.tail = new_node;
    }

    /// Handle to the node at `index`, counting from the head.
    pub fn get_obj_indx(&self, index: usize) -> Result<ObjRef<T>> {
        let len = self.len();
        if index >= len {
            debug!("get_obj_indx: index {} rejected, len {}", index, len);
            return Err(ListErr::IndexOutOfRange { index, len });
        }

        let mut current = self.head.clone();
        for _ in 0..index {
            let next = current.as_ref().and_then(|node| node.borrow().get_next());
            current = next;
        }
        current
            .map(ObjRef)
            .ok_or(ListErr::IndexOutOfRange { index, len })
    }

    /// Unlink the node at `index`. The list is untouched when `index` is
    /// out of range.
    pub fn remove_obj(&mut self, index: usize) -> Result<()> {
        let ObjRef(current) = self.get_obj_indx(index)?;
        trace!("remove_obj: index {}", index);

        let prev = current.borrow().get_prev();
        let next = current.borrow().get_next();
        let is_head = self
            .head
            .as_ref()
            .map_or(false, |head| Rc::ptr_eq(head, &current));
        let is_tail = self
            .tail
            .as_ref()
            .map_or(false, |tail| Rc::ptr_eq(tail, &current));

        if is_head {
            self.head = next;
            if let Some(head) = &self.head {
                head.borrow_mut().set_prev(&None);
            }
        } else if is_tail {
            self.tail = prev;
            if let Some(tail) = &self.tail {
                tail.borrow_mut().set_next(&None);
            }
        } else if let (Some(p), Some(n)) = (&prev, &next) {
            p.borrow_mut().set_next(&next);
            n.borrow_mut().set_prev(&prev);
        }

        if self.head.is_none() {
            self.tail = None;
        }

        // detach, so outstanding handles do not keep the rest of the list alive
        let mut node = current.borrow_mut();
        node.set_next(&None);
        node.set_prev(&None);
        Ok(())
    }

    /// Number of nodes, counted by walking from the head.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut current = self.head.clone();
        while let Some(node) = current {
            count += 1;
            current = node.borrow().get_next();
        }
        count
    }

    /// Payload at `index`.
    pub fn at(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        let node = self.get_obj_indx(index)?;
        let data = node.data().clone();
        Ok(data)
    }

    /// Handles from head to tail. Each call starts a fresh walk.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            next: self.head.clone(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.tail.take();
        let mut current = self.head.take();
        while let Some(node) = current {
            current = node.try_borrow_mut().ok().and_then(|mut node| node.next.take());
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for node in self.iter() {
            list.entry(&*node.data());
        }
        list.finish()
    }
}

pub struct Iter<T> {
    next: Link<T>,
}

impl<T> Iterator for Iter<T> {
    type Item = ObjRef<T>;

    fn next(&mut self) -> Option<ObjRef<T>> {
        let node = self.next.take()?;
        self.next = node.borrow().get_next();
        Some(ObjRef(node))
    }
}
