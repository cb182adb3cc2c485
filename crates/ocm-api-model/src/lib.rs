// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client-side model of the OpenShift Cluster Manager (OCM) API.
//!
//! Each type exposed by the API is represented by three pieces:
//!
//! - an immutable value type, e.g. [`clustersmgmt::v1::UpgradePolicy`], whose
//!   attributes are all optional. Each attribute has two getters: one that
//!   returns the zero value of the attribute type when the attribute is
//!   absent, and a `get_` variant that returns `None` instead. An attribute
//!   explicitly set to its zero value is present.
//! - a builder, e.g. [`clustersmgmt::v1::UpgradePolicyBuilder`], with one
//!   chainable setter per attribute and a `build` method.
//! - a JSON codec, implemented as `serde` impls and driven by the functions in
//!   [`json`].
//!
//! Types with identity ([`Resource`]s) also carry an identifier, a self link,
//! and a flag marking them as links to a resource rather than full bodies,
//! and can be collected in [`List`]s.
//!
//! This crate has few opinions about what constitutes a valid object: if
//! something decodes, then as far as this crate is concerned it is a valid
//! object. Consumers, of course, will generally be more discriminating.

mod attribute;
mod error;
mod list;
mod macros;
mod resource;

pub mod clustersmgmt;
pub mod json;

pub use attribute::Attribute;
pub use error::BuildError;
pub use list::{list_kind_of, List, ListBuilder};
pub use resource::{kind_of, Resource};
