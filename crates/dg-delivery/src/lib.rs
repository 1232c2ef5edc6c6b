//! `dg-delivery` — outstanding delivery targets and target selection.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`points`]   | `DeliveryPoints` — sorted set of undelivered cells    |
//! | [`selector`] | `nearest_target` — greedy Manhattan selection         |

pub mod points;
pub mod selector;

#[cfg(test)]
mod tests;

pub use points::DeliveryPoints;
pub use selector::nearest_target;
