#![no_std]

#[cfg(test)]
extern crate std;

pub mod narrow;

pub use narrow::{
    Category, classify, narrow_classified, narrow_to_single_precision, narrows_exactly,
};
