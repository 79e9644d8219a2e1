//! Singly linked stack that grows and shrinks at the back.

use std::{
    fmt::{Debug, Formatter},
    ops::AddAssign,
};

use log::trace;

pub(crate) type Link<T> = Option<Box<StackObj<T>>>;

pub struct StackObj<T> {
    pub(crate) data: T,
    pub(crate) next: Link<T>,
}

impl<T> StackObj<T> {
    pub fn new(data: T) -> Self {
        StackObj { data, next: None }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn next(&self) -> Option<&StackObj<T>> {
        self.next.as_deref()
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: Debug> Debug for StackObj<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StackObj").field(&self.data).finish()
    }
}

/// Link `obj` after the last node reachable from `top`.
pub(crate) fn link_last<T>(top: &mut Link<T>, obj: StackObj<T>) {
    let mut cursor = top;
    while let Some(node) = cursor {
        cursor = &mut node.next;
    }
    *cursor = Some(Box::new(obj));
}

/// Tear a chain down node by node instead of recursively.
pub(crate) fn unlink_all<T>(top: &mut Link<T>) {
    let mut current = top.take();
    while let Some(mut node) = current {
        current = node.next.take();
    }
}

pub struct Stack<T> {
    top: Link<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { top: None }
    }

    pub fn top(&self) -> Option<&StackObj<T>> {
        self.top.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Counts nodes by walking from the top.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn push_back(&mut self, mut obj: StackObj<T>) {
        trace!("push_back");
        obj.next = None;
        link_last(&mut self.top, obj);
    }

    /// Detach and return the last node, `None` on an empty stack.
    pub fn pop_back(&mut self) -> Option<StackObj<T>> {
        let top = self.top.as_mut()?;
        if top.next.is_none() {
            trace!("pop_back: last node");
            return self.top.take().map(|node| *node);
        }

        let mut current = top;
        while current.next.as_ref().map_or(false, |node| node.next.is_some()) {
            current = current.next.as_mut()?;
        }
        trace!("pop_back");
        current.next.take().map(|node| *node)
    }

    /// Push one node and hand the stack back for chaining.
    pub fn append(&mut self, obj: StackObj<T>) -> &mut Self {
        self.push_back(obj);
        self
    }

    /// Wrap every value in a node and push them in order.
    pub fn extend<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        for data in values {
            self.push_back(StackObj::new(data));
        }
        self
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AddAssign<StackObj<T>> for Stack<T> {
    fn add_assign(&mut self, obj: StackObj<T>) {
        self.append(obj);
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        unlink_all(&mut self.top);
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter().map(StackObj::data)).finish()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a StackObj<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Forward walk over the nodes of a singly linked chain.
pub struct Iter<'a, T> {
    pub(crate) next: Option<&'a StackObj<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a StackObj<T>;

    fn next(&mut self) -> Option<&'a StackObj<T>> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(stack: &Stack<String>) -> Vec<String> {
        stack.iter().map(|node| node.data().clone()).collect()
    }

    #[test]
    fn test_push_back() {
        let mut st = Stack::new();
        st.push_back(StackObj::new("1".to_string()));
        assert_eq!(st.top().unwrap().data(), "1");
        st.push_back(StackObj::new("2".to_string()));
        st.push_back(StackObj::new("3".to_string()));
        assert_eq!(values(&st), vec!["1", "2", "3"]);
        assert_eq!(st.len(), 3);
        assert_eq!(st.top().unwrap().data(), "1");
    }

    #[test]
    fn test_pop_back() {
        let mut st: Stack<String> = Stack::new();
        assert!(st.pop_back().is_none());

        st.extend(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(st.pop_back().unwrap().into_data(), "c");
        assert_eq!(st.pop_back().unwrap().into_data(), "b");
        assert_eq!(values(&st), vec!["a"]);

        let last = st.pop_back().unwrap();
        assert!(last.next().is_none());
        assert_eq!(last.into_data(), "a");
        assert!(st.is_empty());
        assert!(st.pop_back().is_none());
    }

    #[test]
    fn test_popped_node_is_detached() {
        let mut st = Stack::new();
        st.extend(1..=3);
        let node = st.pop_back().unwrap();
        assert!(node.next().is_none());
        st.push_back(node);
        assert_eq!(st.iter().map(|n| *n.data()).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_append_and_extend_chain() {
        let mut st = Stack::new();
        st.append(StackObj::new("1".to_string()))
            .append(StackObj::new("2".to_string()))
            .extend(vec!["x".to_string(), "y".to_string()]);
        st += StackObj::new("3".to_string());
        assert_eq!(values(&st), vec!["1", "2", "x", "y", "3"]);
        assert_eq!(format!("{:?}", st), r#"["1", "2", "x", "y", "3"]"#);
    }

    #[test]
    fn test_extend_empty() {
        let mut st: Stack<i32> = Stack::new();
        st.extend(Vec::new());
        assert!(st.is_empty());
        assert_eq!(st.len(), 0);
    }

    #[test]
    fn test_drop_long_stack() {
        let mut st = Stack::new();
        // built front-first, push_back would walk the whole chain each time
        let mut chain: Link<i32> = None;
        for i in 0..200_000 {
            chain = Some(Box::new(StackObj { data: i, next: chain }));
        }
        st.top = chain;
        drop(st);
    }
}
