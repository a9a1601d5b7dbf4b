//! Inserts `1.0` and `1.00` into a hash-based set and an order-based set.

use ordcontract::demo;

fn main() {
    env_logger::init();

    match demo::decimal_sets() {
        Ok(report) => println!("{}", report),
        // The demonstration always exits successfully
        Err(error) => log::error!("Failed to run the decimal demonstration: {}", error),
    }
}
