mod err;

pub mod arg;
pub mod demo;
pub mod indexed;
pub mod list;
pub mod stack;

pub use arg::Arg;
pub use err::ListErr;
pub use indexed::IndexedStack;
pub use list::{LinkedList, ObjList, ObjRef};
pub use stack::{Stack, StackObj};

pub type Result<T> = std::result::Result<T, ListErr>;
