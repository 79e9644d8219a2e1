use linked_lists::arg::Arg;
use linked_lists::demo;

use log::error;

extern crate env_logger;

fn main() {
    env_logger::init();
    let arg = Arg::parse();

    if let Err(e) = demo::run(&arg) {
        error!("scenario failed: {}", e);
        std::process::exit(1);
    }
}
