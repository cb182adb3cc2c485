// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::Attribute;

/// A model object with identity: it has a kind, and may carry an identifier,
/// a self link, and the flag marking it as a link stub rather than a full
/// body.
///
/// The kind strings are the tags used on the wire. The nil kinds are local
/// sentinels for absent references and never appear in a payload.
pub trait Resource: Attribute {
    const KIND: &'static str;
    const LINK_KIND: &'static str;
    const NIL_KIND: &'static str;
    const LIST_KIND: &'static str;
    const LIST_LINK_KIND: &'static str;
    const LIST_NIL_KIND: &'static str;

    /// Returns true if this object is a link to a resource.
    fn link(&self) -> bool;

    fn kind(&self) -> &'static str {
        if self.link() {
            Self::LINK_KIND
        } else {
            Self::KIND
        }
    }
}

/// Returns the kind of a possibly absent object.
pub fn kind_of<T: Resource>(object: Option<&T>) -> &'static str {
    object.map_or(T::NIL_KIND, |object| object.kind())
}
