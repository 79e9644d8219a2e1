//! Smoke scenarios replayed by the `linked-lists` binary.

use std::error::Error;

use log::info;

use crate::arg::{Arg, Scenario};
use crate::indexed::IndexedStack;
use crate::list::{LinkedList, ObjList};
use crate::stack::{Stack, StackObj};
use crate::ListErr;

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn check(cond: bool, message: &str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(message.into())
    }
}

pub fn run(arg: &Arg) -> Result<()> {
    match arg.get_scenario() {
        Scenario::Doubly => doubly()?,
        Scenario::Stack => stack()?,
        Scenario::Indexed => indexed()?,
        Scenario::All => {
            doubly()?;
            stack()?;
            indexed()?;
        }
    }

    if arg.get_count() > 0 {
        let len = drain(arg.get_count())?;
        info!("drain: {} values appended and removed, len {}", arg.get_count(), len);
    }
    Ok(())
}

pub fn doubly() -> Result<()> {
    let mut ln = LinkedList::new();
    ln.add_obj(ObjList::new("A".to_string()));
    ln.add_obj(ObjList::new("B".to_string()));
    ln.add_obj(ObjList::new("C".to_string()));
    ln.remove_obj(2)?;
    check(ln.len() == 2, "wrong length after remove_obj")?;

    ln.add_obj(ObjList::new("D".to_string()));
    check(ln.at(2)? == "D", "wrong value at index 2")?;
    check(ln.len() == 3, "wrong length after add_obj")?;
    check(ln.at(1)? == "B", "wrong value at index 1")?;

    let forward = ln.iter().count();
    let mut backward = 0;
    let mut current = ln.tail();
    while let Some(node) = current {
        backward += 1;
        current = node.prev();
    }
    check(forward == 3, "forward walk missed nodes")?;
    check(backward == 3, "backward walk missed nodes")?;

    info!("doubly: {:?}", ln);
    Ok(())
}

pub fn stack() -> Result<()> {
    let mut st = Stack::new();
    st.push_back(StackObj::new("1".to_string()));
    check(st.top().map(StackObj::data).map(String::as_str) == Some("1"), "wrong top")?;

    st.append(StackObj::new("2".to_string()))
        .append(StackObj::new("3".to_string()));
    st += StackObj::new("4".to_string());
    st.extend(vec!["data_1".to_string(), "data_2".to_string()]);
    st.extend(vec!["data_3".to_string(), "data_4".to_string()]);
    st += StackObj::new("225".to_string());
    st.pop_back();

    let expected = ["1", "2", "3", "4", "data_1", "data_2", "data_3", "data_4"];
    let values: Vec<&str> = st.iter().map(|node| node.data().as_str()).collect();
    check(values == expected, "wrong stack contents after append and extend")?;

    info!("stack: {:?}", st);
    Ok(())
}

pub fn indexed() -> Result<()> {
    let mut st = IndexedStack::new();
    st.push_back(StackObj::new("1".to_string()));
    st.push_front(StackObj::new("2".to_string()));
    check(st.get(0)? == "2" && st.get(1)? == "1", "wrong values by index")?;

    st.set(0, "0".to_string())?;
    check(st.get(0)? == "0", "set did not overwrite index 0")?;
    check(st.iter().count() == st.len(), "iteration length mismatch")?;

    match st.get(3) {
        Err(ListErr::IndexOutOfRange { .. }) => {}
        Ok(_) => return Err("index 3 should be out of range".into()),
    }

    info!("indexed: {:?}", st);
    Ok(())
}

/// Append `count` values, then remove them from the front one by one.
/// Returns the final length, which is zero on success.
pub fn drain(count: usize) -> Result<usize> {
    let mut ln = LinkedList::new();
    for i in 0..count {
        ln.add_obj(ObjList::new(i));
    }
    check(ln.len() == count, "wrong length after appending")?;

    for i in 0..count {
        check(ln.at(0)? == i, "values left the list out of order")?;
        ln.remove_obj(0)?;
    }
    check(ln.head().is_none() && ln.tail().is_none(), "ends not cleared")?;
    Ok(ln.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_scenarios() {
        assert!(doubly().is_ok());
        assert!(stack().is_ok());
        assert!(indexed().is_ok());
    }

    #[test]
    fn test_drain() {
        assert_eq!(drain(50).unwrap(), 0);
        assert_eq!(drain(0).unwrap(), 0);
    }

    #[test]
    fn test_run_all() {
        let arg = Arg::parse_from(["linked-lists", "--count", "8"]);
        assert!(run(&arg).is_ok());
    }
}
