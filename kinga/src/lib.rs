//! 謹賀新年 greeting card.
//!
//! Shuffles the four characters 謹, 賀, 新, 年 and shows a celebratory card
//! when the shuffle lands on 謹賀新年, a plain one otherwise. The crate keeps
//! the same split the server relies on:
//!
//! - **[`core`]**: Pure, deterministic logic (symbols, shuffle, card state).
//!   No I/O; randomness is injected through [`core::permutation::PermutationSource`].
//! - **[`io`]**: Environment and file based configuration.
//!
//! [`render`] turns a card view plus site metadata into the page markup.

pub mod core;
pub mod io;
pub mod logging;
pub mod render;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
