//! Foundation types for the Gated NFT Registry (GNR).
//!
//! This crate provides the identity, monetary, and token types used
//! throughout the registry. Every other GNR crate depends on `gnr-types`.
//!
//! # Key Types
//!
//! - [`Address`] — Opaque account identity derived from key material
//! - [`TokenId`] — Monotone non-fungible token identifier
//! - [`Mutez`] — Non-negative monetary amount with checked arithmetic
//! - [`TokenMetadata`] — Immutable per-token metadata record

pub mod address;
pub mod amount;
pub mod error;
pub mod token;

pub use address::{Address, KeyMaterial};
pub use amount::Mutez;
pub use error::TypeError;
pub use token::{TokenId, TokenInfo, TokenMetadata};
