mod quotient_force;

pub use quotient_force::*;

#[cfg(test)]
mod quotient_force_tests;
