//! Removes duplicate words by inserting them into an ordered set.

use ordcontract::demo;

fn main() {
    env_logger::init();

    println!("{}", demo::word_list());
}
