//! Dark-matter halo catalog types and providers.
//!
//! A `HaloCatalog` is a read-only snapshot of halo records identified by
//! `(simname, redshift, halo_finder, version_name)`. Catalogs are obtained
//! through a `CatalogProvider`; the `FakeProvider` generates a deterministic
//! synthetic catalog for tests and demos.

pub mod catalog;
pub mod fake;
pub mod halo;

#[cfg(test)]
mod fake_test;

pub use catalog::{CatalogError, CatalogIdentity, CatalogProvider, HaloCatalog, IdentityField};
pub use fake::FakeProvider;
pub use halo::Halo;
