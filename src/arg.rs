use clap::{Parser, ValueEnum};
use marco::Getter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// append, remove by index, read back on a doubly linked list
    Doubly,
    /// back push/pop and bulk append on the basic stack
    Stack,
    /// front/back push, indexed get/set and iteration on the indexed stack
    Indexed,
    All,
}

/// Replay the linked list smoke scenarios.
#[derive(Parser, Debug, Getter)]
#[command(author, version, about, long_about)]
pub struct Arg {
    #[clap(long, value_enum, default_value = "all")]
    scenario: Scenario,

    /// extra values to append to and drain from a doubly linked list
    #[clap(short, long, default_value = "0")]
    count: usize,
}

impl Arg {
    pub fn parse() -> Self {
        Arg::parse_from(std::env::args())
    }
}
