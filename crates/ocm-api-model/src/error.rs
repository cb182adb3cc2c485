// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Error produced when a builder cannot be turned into a value.
///
/// The model has no validation rules of its own, so no attribute currently
/// fails to build and this type has no values. Builders still return
/// `Result<_, BuildError>` and forward failures of nested builders with `?`,
/// which keeps the signature stable if a rule is ever added.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {}
