//! Shows keys that comparators built on subtraction order incorrectly.

use ordcontract::demo;

fn main() {
    env_logger::init();

    println!("{}", demo::difference_comparators());
}
