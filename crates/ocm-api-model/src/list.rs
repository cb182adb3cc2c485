// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordered collections of resources.
//!
//! A [`List`] is what a resource holds when one of its attributes refers to a
//! collection of other resources, e.g. the add-ons installed on a cluster.
//! Besides the items themselves it may carry a self link and the link flag,
//! in which case it stands for a collection that lives elsewhere and whose
//! items have not been fetched.
//!
//! As an attribute a list is encoded as an object with `kind`, `href` and
//! `items` keys. The top-level list codecs in [`crate::json`] encode the items
//! alone, as a bare array.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{Attribute, BuildError, Resource};

/// An ordered collection of resources of type `T`.
#[derive(Clone, Debug, PartialEq)]
pub struct List<T> {
    link: bool,
    href: Option<String>,
    items: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self { link: false, href: None, items: Vec::new() }
    }
}

impl<T: Resource> List<T> {
    pub fn builder() -> ListBuilder<T> {
        ListBuilder::new()
    }

    pub fn to_builder(&self) -> ListBuilder<T> {
        ListBuilder::from(self)
    }

    pub fn kind(&self) -> &'static str {
        if self.link {
            T::LIST_LINK_KIND
        } else {
            T::LIST_KIND
        }
    }

    /// Returns true if this is a link to a list.
    pub fn link(&self) -> bool {
        self.link
    }

    pub fn href(&self) -> &str {
        self.href.as_deref().unwrap_or_default()
    }

    pub fn get_href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, or `None` if there is no such item.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns a copy of the items. The copy is independent of the list, so
    /// it can be modified freely; [`List::items`] and [`List::each`] avoid the
    /// allocation when that isn't needed.
    pub fn slice(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Calls `f` on each item, in order, until it returns false.
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        for item in &self.items {
            if !f(item) {
                break;
            }
        }
    }

    /// Calls `f` on each index and item, in order, until it returns false.
    pub fn range<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        for (index, item) in self.items.iter().enumerate() {
            if !f(index, item) {
                break;
            }
        }
    }

    // The setters below are used while assembling a decoded list.

    pub fn set_link(&mut self, link: bool) {
        self.link = link;
    }

    pub fn set_href(&mut self, href: impl Into<String>) {
        self.href = Some(href.into());
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Returns the kind of a possibly absent list.
pub fn list_kind_of<T: Resource>(list: Option<&List<T>>) -> &'static str {
    list.map_or(T::LIST_NIL_KIND, |list| list.kind())
}

/// Builder of [`List`] values.
#[derive(Clone, Debug)]
pub struct ListBuilder<T: Attribute> {
    link: bool,
    href: Option<String>,
    items: Vec<T::Builder>,
}

impl<T: Attribute> Default for ListBuilder<T> {
    fn default() -> Self {
        Self { link: false, href: None, items: Vec::new() }
    }
}

impl<T: Resource> ListBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag that indicates if this is a link.
    pub fn link(mut self, value: bool) -> Self {
        self.link = value;
        self
    }

    pub fn href(mut self, value: impl Into<String>) -> Self {
        self.href = Some(value.into());
        self
    }

    /// Replaces the items of the list.
    pub fn items<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<T::Builder>,
    {
        self.items = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resets the builder to mirror `list`. Does nothing if `list` is `None`.
    pub fn copy(self, list: Option<&List<T>>) -> Self {
        match list {
            Some(list) => Self::from(list),
            None => self,
        }
    }

    pub fn build(&self) -> Result<List<T>, BuildError> {
        Ok(List {
            link: self.link,
            href: self.href.clone(),
            items: self.items.iter().map(T::build).collect::<Result<_, _>>()?,
        })
    }
}

impl<T: Resource> From<&List<T>> for ListBuilder<T> {
    fn from(list: &List<T>) -> Self {
        Self {
            link: list.link,
            href: list.href.clone(),
            items: list.items.iter().map(T::to_builder).collect(),
        }
    }
}

impl<T: Resource> Attribute for List<T> {
    type Builder = ListBuilder<T>;
    type Ref<'a> = Option<&'a List<T>> where Self: 'a;

    fn build(builder: &Self::Builder) -> Result<Self, BuildError> {
        builder.build()
    }

    fn to_builder(&self) -> Self::Builder {
        ListBuilder::from(self)
    }

    fn view(&self) -> Self::Ref<'_> {
        Some(self)
    }

    fn zero<'a>() -> Self::Ref<'a>
    where
        Self: 'a,
    {
        None
    }
}

impl<T: Resource> Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", self.kind())?;
        if let Some(href) = &self.href {
            map.serialize_entry("href", href)?;
        }
        map.serialize_entry("items", &self.items)?;
        map.end()
    }
}

impl<'de, T: Resource> Deserialize<'de> for List<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ListVisitor<T>(PhantomData<T>);

        impl<'de, T: Resource> Visitor<'de> for ListVisitor<T> {
            type Value = List<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "an object of kind {}", T::LIST_KIND)
            }

            fn visit_map<A>(self, mut map: A) -> Result<List<T>, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut list = List::default();
                while let Some(field) = map.next_key::<String>()? {
                    match field.as_str() {
                        "kind" => {
                            let kind = map.next_value::<String>()?;
                            list.set_link(kind == T::LIST_LINK_KIND);
                        }
                        "href" => {
                            list.href = map.next_value()?;
                        }
                        "items" => {
                            let items: Option<Vec<T>> = map.next_value()?;
                            list.set_items(items.unwrap_or_default());
                        }
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                Ok(list)
            }
        }

        deserializer.deserialize_map(ListVisitor(PhantomData))
    }
}
