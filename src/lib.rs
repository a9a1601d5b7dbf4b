/*!
ordcontract is a small collection of demonstrations of the contract between equality and ordering.
Sorted and hashed collections assume that a type's ordering agrees with its equality. This crate
shows what that agreement looks like when it holds, how to compose multi-field orderings that keep
it, and what happens to collections when it is broken.

The demonstrations cover:

- A phone number ordered field by field ([`PhoneNumber`]) and the same ordering composed from key
  extractors ([`ComparatorChain`]).
- Duplicate elimination through an order-based set ([`demo::word_list`]).
- A decimal whose ordering ignores scale while its equality does not ([`Decimal`]), and the
  resulting disagreement between hash-based and order-based sets ([`demo::decimal_sets`]).
- Comparators that subtract keys and the overflow and floating point problems that come with them
  ([`pitfall`]).

Each scenario in [`demo`] has a matching binary under `src/bin` that prints its report.
*/

#![warn(missing_debug_implementations, missing_docs)]

pub mod chain;
pub use chain::ComparatorChain;

pub mod comparator;
pub use comparator::{Comparator, NaturalOrder};

pub mod config;

pub mod containers;
pub use containers::{ComparatorSet, SetMembership};

pub mod decimal;
pub use decimal::Decimal;

pub mod demo;

mod errors;
pub use errors::{ContractError, ContractResult};

pub mod operand;
pub use operand::{compare_operands, equals_operands, Operand, OperandKind};

pub mod phone_number;
pub use phone_number::PhoneNumber;

pub mod pitfall;
