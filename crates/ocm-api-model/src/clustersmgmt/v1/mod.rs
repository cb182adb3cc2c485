// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Types of version 1 of the clusters management service.
//!
//! Every resource `X` comes with `XBuilder`, `XList` and `XListBuilder`;
//! every type without identity comes with `XBuilder` only.

mod add_on;
mod add_on_installation;
mod aws_machine_pool;
mod azure;
mod cloud_provider;
mod cluster;
mod enums;
mod machine_pool;
mod upgrade_policy;
mod version;

pub use add_on::*;
pub use add_on_installation::*;
pub use aws_machine_pool::*;
pub use azure::*;
pub use cloud_provider::*;
pub use cluster::*;
pub use enums::*;
pub use machine_pool::*;
pub use upgrade_policy::*;
pub use version::*;
