pub mod boundary;
pub mod predicate;

#[cfg(feature = "std")]
pub mod unwind;

#[cfg(feature = "serde")]
pub mod serialization;
