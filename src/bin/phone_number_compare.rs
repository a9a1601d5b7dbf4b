//! Compares two phone numbers that only differ in their line number.

use ordcontract::demo;

fn main() {
    env_logger::init();

    println!("{}", demo::phone_number_compare());
}
