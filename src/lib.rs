//! A *finite enumeration* is a type with a finite, ordered, bounded domain:
//! every member has a zero-based index, a successor and a predecessor, and
//! the whole domain can be walked from bottom to top. This library defines
//! that contract — the [`BoundedOrder`] and [`Enum`] traits — and the
//! algorithms built on it: range construction, chain unfolding, cardinality
//! inference, full-domain enumeration, reversible mapping and a mixed-radix
//! composition of several enumerations into one integer.
//!
//! An `Enum` is an *instance value*, built once and passed by reference
//! into every algorithm. Nothing is resolved ambiently: the instance for
//! the primitive types is [`Canonical`], and ad-hoc instances can be
//! synthesized at runtime from an explicit value list with [`ConstEnum`].
//!
//! ## Usage
//!
//! Ranges and unfolds are lazy iterators over an instance:
//!
//! ```
//! use finite_enum::{from_then_to, from_to, up_from_incl, Canonical};
//!
//! let ints = Canonical::<i32>::new();
//! assert_eq!(from_to(&ints, 0, &3).collect::<Vec<_>>(), [0, 1, 2, 3]);
//! assert_eq!(from_then_to(&ints, 0, &2, &6).collect::<Vec<_>>(), [0, 2, 4, 6]);
//!
//! let bools = Canonical::<bool>::new();
//! assert_eq!(up_from_incl(&bools, false).collect::<Vec<_>>(), [false, true]);
//! ```
//!
//! The whole domain is available as [`universe`], and any projection of it
//! can be reversed with [`inverse_map`]:
//!
//! ```
//! use finite_enum::{inverse_map, universe, Canonical};
//!
//! let bools = Canonical::<bool>::new();
//! assert_eq!(universe(&bools).collect::<Vec<_>>(), [false, true]);
//!
//! let by_name = inverse_map(&bools, |b| b.to_string());
//! assert_eq!(by_name.get(&"true".to_string()), Some(&true));
//! ```
//!
//! Types without a handwritten instance get one from their value list:
//!
//! ```
//! use finite_enum::{universe, ConstEnum, Enum};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
//! enum Suit {
//! 	Clubs,
//! 	Diamonds,
//! 	Hearts,
//! 	Spades,
//! }
//!
//! let suits = ConstEnum::new(vec![
//! 	Suit::Clubs,
//! 	Suit::Diamonds,
//! 	Suit::Hearts,
//! 	Suit::Spades,
//! ])?;
//! assert_eq!(suits.cardinality(), 4);
//! assert_eq!(suits.from_enum(&Suit::Hearts), 2);
//! assert_eq!(universe(&suits).count(), 4);
//! # Ok::<_, finite_enum::DomainError>(())
//! ```
//!
//! Compound indices collapse into one integer positionally, each component
//! cardinality acting as the radix of its position:
//!
//! ```
//! use finite_enum::from_product_formula;
//!
//! // (day, hour, minute, second) within a week.
//! assert_eq!(from_product_formula(&[(1, 7), (0, 24), (0, 60), (1, 60)]), 86401);
//! ```
mod canonical;
mod constant;
mod enumeration;
mod inverse;
mod order;
mod product;
mod range;
mod unfold;
pub mod util;

#[cfg(feature = "serde")]
mod serde;

pub use canonical::Canonical;
pub use constant::{ConstEnum, DomainError};
pub use enumeration::{default_cardinality, Enum};
pub use inverse::{inverse_map, InverseMap};
pub use order::BoundedOrder;
pub use product::from_product_formula;
pub use range::{from_then_to, from_to, universe, Progression};
pub use unfold::{down_from_excl, down_from_incl, up_from_excl, up_from_incl, DownFrom, UpFrom};
