// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Generators for the model types.
//
// Each model type is declared as a table of attributes. An attribute line
// reads `name: mode Type = "json_name",` where the mode selects how the
// attribute is stored and how its builder setter looks:
//
// - `value`:   stored as `Type`, setter takes `impl Into<Type>`
// - `object`:  a nested model object, setter takes `impl Into<Option<TypeBuilder>>`
// - `list`:    a `List<Type>` of resources, setter takes `impl Into<Option<ListBuilder<Type>>>`
// - `items`:   a `Vec<Type>`, setter takes any iterator of `Type` builders
// - `entries`: a `BTreeMap<String, Type>`, setter takes any iterator of pairs
//
// Attributes are encoded in declaration order, after `kind`, `id` and `href`
// for resources, so the table order is the wire order.
//
// The macros take syntax matching the struct definition so that grepping for
// `struct Cluster` finds the corresponding invocation.

/// Storage type of an attribute.
macro_rules! attribute_type {
    (value $ty:ty) => { $ty };
    (object $ty:ty) => { $ty };
    (list $ty:ty) => { $crate::List<$ty> };
    (items $ty:ty) => { ::std::vec::Vec<$ty> };
    (entries $ty:ty) => {
        ::std::collections::BTreeMap<::std::string::String, $ty>
    };
}
pub(crate) use attribute_type;

/// Builder setter of an attribute.
macro_rules! attribute_setter {
    ($(#[$meta:meta])* value $field:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field(
            mut self,
            value: impl Into<<$ty as $crate::Attribute>::Builder>,
        ) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
    ($(#[$meta:meta])* object $field:ident: $ty:ty) => {
        $(#[$meta])*
        ///
        /// Passing `None` clears the attribute.
        pub fn $field(
            mut self,
            value: impl Into<Option<<$ty as $crate::Attribute>::Builder>>,
        ) -> Self {
            self.$field = value.into();
            self
        }
    };
    ($(#[$meta:meta])* list $field:ident: $ty:ty) => {
        $(#[$meta])*
        ///
        /// Passing `None` clears the attribute.
        pub fn $field(
            mut self,
            value: impl Into<Option<$crate::ListBuilder<$ty>>>,
        ) -> Self {
            self.$field = value.into();
            self
        }
    };
    ($(#[$meta:meta])* items $field:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field<I>(mut self, values: I) -> Self
        where
            I: IntoIterator,
            I::Item: Into<<$ty as $crate::Attribute>::Builder>,
        {
            self.$field = Some(values.into_iter().map(Into::into).collect());
            self
        }
    };
    ($(#[$meta:meta])* entries $field:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field<I, K, V>(mut self, entries: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<<$ty as $crate::Attribute>::Builder>,
        {
            self.$field = Some(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            );
            self
        }
    };
}
pub(crate) use attribute_setter;

/// Defines a resource: a model object with a kind, an optional identifier and
/// self link, and a link flag. Generates the value type, its builder, list
/// aliases, and the JSON codec.
macro_rules! define_class {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($kind:literal) {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $mode:ident $ty:ty = $json:literal,
            )*
        }
    ) => {
        ::paste::paste! {
            $(#[$meta])*
            #[derive(Clone, Debug, Default, PartialEq)]
            pub struct $name {
                link: bool,
                id: Option<String>,
                href: Option<String>,
                $(
                    $field: Option<$crate::macros::attribute_type!($mode $ty)>,
                )*
            }

            /// Mutable accumulator of attribute values. Setters consume and
            /// return the builder so calls can be chained.
            #[derive(Clone, Debug, Default)]
            pub struct [<$name Builder>] {
                link: bool,
                id: Option<String>,
                href: Option<String>,
                $(
                    $field: Option<
                        <$crate::macros::attribute_type!($mode $ty)
                            as $crate::Attribute>::Builder
                    >,
                )*
            }

            pub type [<$name List>] = $crate::List<$name>;
            pub type [<$name ListBuilder>] = $crate::ListBuilder<$name>;

            impl $crate::Resource for $name {
                const KIND: &'static str = $kind;
                const LINK_KIND: &'static str = concat!($kind, "Link");
                const NIL_KIND: &'static str = concat!($kind, "Nil");
                const LIST_KIND: &'static str = concat!($kind, "List");
                const LIST_LINK_KIND: &'static str = concat!($kind, "ListLink");
                const LIST_NIL_KIND: &'static str = concat!($kind, "ListNil");

                fn link(&self) -> bool {
                    self.link
                }
            }

            impl $name {
                pub fn builder() -> [<$name Builder>] {
                    [<$name Builder>]::new()
                }

                /// Returns a builder initialized with a copy of this object.
                pub fn to_builder(&self) -> [<$name Builder>] {
                    [<$name Builder>]::from(self)
                }

                pub fn kind(&self) -> &'static str {
                    $crate::Resource::kind(self)
                }

                /// Returns true if this is a link.
                pub fn link(&self) -> bool {
                    self.link
                }

                pub fn id(&self) -> &str {
                    self.id.as_deref().unwrap_or_default()
                }

                pub fn get_id(&self) -> Option<&str> {
                    self.id.as_deref()
                }

                pub fn href(&self) -> &str {
                    self.href.as_deref().unwrap_or_default()
                }

                pub fn get_href(&self) -> Option<&str> {
                    self.href.as_deref()
                }

                /// Returns true if no attribute has a value. The link flag
                /// doesn't count.
                pub fn is_empty(&self) -> bool {
                    self.id.is_none()
                        && self.href.is_none()
                        $(&& self.$field.is_none())*
                }

                $(
                    $(#[$fmeta])*
                    pub fn $field(
                        &self,
                    ) -> <$crate::macros::attribute_type!($mode $ty)
                        as $crate::Attribute>::Ref<'_>
                    {
                        match &self.$field {
                            Some(value) => $crate::Attribute::view(value),
                            None => <$crate::macros::attribute_type!($mode $ty)
                                as $crate::Attribute>::zero(),
                        }
                    }

                    /// Returns the attribute value, or `None` if it has no
                    /// value.
                    pub fn [<get_ $field>](
                        &self,
                    ) -> Option<
                        <$crate::macros::attribute_type!($mode $ty)
                            as $crate::Attribute>::Ref<'_>
                    > {
                        self.$field.as_ref().map($crate::Attribute::view)
                    }
                )*
            }

            impl [<$name Builder>] {
                pub fn new() -> Self {
                    <Self as Default>::default()
                }

                /// Sets the flag that indicates if this is a link.
                pub fn link(mut self, value: bool) -> Self {
                    self.link = value;
                    self
                }

                pub fn id(mut self, value: impl Into<String>) -> Self {
                    self.id = Some(value.into());
                    self
                }

                pub fn href(mut self, value: impl Into<String>) -> Self {
                    self.href = Some(value.into());
                    self
                }

                /// Returns true if no attribute has a value. The link flag
                /// doesn't count.
                pub fn is_empty(&self) -> bool {
                    self.id.is_none()
                        && self.href.is_none()
                        $(&& self.$field.is_none())*
                }

                $(
                    $crate::macros::attribute_setter!(
                        $(#[$fmeta])* $mode $field: $ty
                    );
                )*

                /// Resets the builder to mirror `object`. Does nothing if
                /// `object` is `None`.
                pub fn copy(self, object: Option<&$name>) -> Self {
                    match object {
                        Some(object) => Self::from(object),
                        None => self,
                    }
                }

                pub fn build(&self) -> Result<$name, $crate::BuildError> {
                    Ok($name {
                        link: self.link,
                        id: self.id.clone(),
                        href: self.href.clone(),
                        $(
                            $field: self
                                .$field
                                .as_ref()
                                .map(<$crate::macros::attribute_type!($mode $ty)
                                    as $crate::Attribute>::build)
                                .transpose()?,
                        )*
                    })
                }
            }

            impl From<&$name> for [<$name Builder>] {
                fn from(object: &$name) -> Self {
                    Self {
                        link: object.link,
                        id: object.id.clone(),
                        href: object.href.clone(),
                        $(
                            $field: object
                                .$field
                                .as_ref()
                                .map($crate::Attribute::to_builder),
                        )*
                    }
                }
            }

            impl $crate::Attribute for $name {
                type Builder = [<$name Builder>];
                type Ref<'a> = Option<&'a $name> where Self: 'a;

                fn build(
                    builder: &Self::Builder,
                ) -> Result<Self, $crate::BuildError> {
                    builder.build()
                }

                fn to_builder(&self) -> Self::Builder {
                    [<$name Builder>]::from(self)
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

            impl ::serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    use ::serde::ser::SerializeMap;

                    let mut map = serializer.serialize_map(None)?;
                    map.serialize_entry("kind", $crate::Resource::kind(self))?;
                    if let Some(id) = &self.id {
                        map.serialize_entry("id", id)?;
                    }
                    if let Some(href) = &self.href {
                        map.serialize_entry("href", href)?;
                    }
                    $(
                        if let Some(value) = &self.$field {
                            $crate::Attribute::check_encodable::<S::Error>(
                                value,
                            )?;
                            map.serialize_entry($json, value)?;
                        }
                    )*
                    map.end()
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    struct ObjectVisitor;

                    impl<'de> ::serde::de::Visitor<'de> for ObjectVisitor {
                        type Value = $name;

                        fn expecting(
                            &self,
                            f: &mut ::std::fmt::Formatter<'_>,
                        ) -> ::std::fmt::Result {
                            f.write_str(concat!("an object of kind ", $kind))
                        }

                        fn visit_map<A>(
                            self,
                            mut map: A,
                        ) -> Result<$name, A::Error>
                        where
                            A: ::serde::de::MapAccess<'de>,
                        {
                            let mut object = <$name as Default>::default();
                            while let Some(field) = map.next_key::<String>()? {
                                match field.as_str() {
                                    "kind" => {
                                        let kind = map.next_value::<String>()?;
                                        object.link = kind
                                            == <$name as $crate::Resource>::LINK_KIND;
                                    }
                                    "id" => object.id = map.next_value()?,
                                    "href" => object.href = map.next_value()?,
                                    $(
                                        $json => object.$field = map.next_value()?,
                                    )*
                                    _ => {
                                        map.next_value::<::serde::de::IgnoredAny>()?;
                                    }
                                }
                            }
                            Ok(object)
                        }
                    }

                    deserializer.deserialize_map(ObjectVisitor)
                }
            }
        }
    };
}
pub(crate) use define_class;

/// Defines a model object without identity: no kind, identifier, self link
/// or link flag. Otherwise generates the same builder, accessors and codec as
/// [`define_class`].
macro_rules! define_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $mode:ident $ty:ty = $json:literal,
            )*
        }
    ) => {
        ::paste::paste! {
            $(#[$meta])*
            #[derive(Clone, Debug, Default, PartialEq)]
            pub struct $name {
                $(
                    $field: Option<$crate::macros::attribute_type!($mode $ty)>,
                )*
            }

            /// Mutable accumulator of attribute values. Setters consume and
            /// return the builder so calls can be chained.
            #[derive(Clone, Debug, Default)]
            pub struct [<$name Builder>] {
                $(
                    $field: Option<
                        <$crate::macros::attribute_type!($mode $ty)
                            as $crate::Attribute>::Builder
                    >,
                )*
            }

            impl $name {
                pub fn builder() -> [<$name Builder>] {
                    [<$name Builder>]::new()
                }

                /// Returns a builder initialized with a copy of this object.
                pub fn to_builder(&self) -> [<$name Builder>] {
                    [<$name Builder>]::from(self)
                }

                /// Returns true if no attribute has a value.
                pub fn is_empty(&self) -> bool {
                    true $(&& self.$field.is_none())*
                }

                $(
                    $(#[$fmeta])*
                    pub fn $field(
                        &self,
                    ) -> <$crate::macros::attribute_type!($mode $ty)
                        as $crate::Attribute>::Ref<'_>
                    {
                        match &self.$field {
                            Some(value) => $crate::Attribute::view(value),
                            None => <$crate::macros::attribute_type!($mode $ty)
                                as $crate::Attribute>::zero(),
                        }
                    }

                    /// Returns the attribute value, or `None` if it has no
                    /// value.
                    pub fn [<get_ $field>](
                        &self,
                    ) -> Option<
                        <$crate::macros::attribute_type!($mode $ty)
                            as $crate::Attribute>::Ref<'_>
                    > {
                        self.$field.as_ref().map($crate::Attribute::view)
                    }
                )*
            }

            impl [<$name Builder>] {
                pub fn new() -> Self {
                    <Self as Default>::default()
                }

                /// Returns true if no attribute has a value.
                pub fn is_empty(&self) -> bool {
                    true $(&& self.$field.is_none())*
                }

                $(
                    $crate::macros::attribute_setter!(
                        $(#[$fmeta])* $mode $field: $ty
                    );
                )*

                /// Resets the builder to mirror `object`. Does nothing if
                /// `object` is `None`.
                pub fn copy(self, object: Option<&$name>) -> Self {
                    match object {
                        Some(object) => Self::from(object),
                        None => self,
                    }
                }

                pub fn build(&self) -> Result<$name, $crate::BuildError> {
                    Ok($name {
                        $(
                            $field: self
                                .$field
                                .as_ref()
                                .map(<$crate::macros::attribute_type!($mode $ty)
                                    as $crate::Attribute>::build)
                                .transpose()?,
                        )*
                    })
                }
            }

            impl From<&$name> for [<$name Builder>] {
                fn from(object: &$name) -> Self {
                    Self {
                        $(
                            $field: object
                                .$field
                                .as_ref()
                                .map($crate::Attribute::to_builder),
                        )*
                    }
                }
            }

            impl $crate::Attribute for $name {
                type Builder = [<$name Builder>];
                type Ref<'a> = Option<&'a $name> where Self: 'a;

                fn build(
                    builder: &Self::Builder,
                ) -> Result<Self, $crate::BuildError> {
                    builder.build()
                }

                fn to_builder(&self) -> Self::Builder {
                    [<$name Builder>]::from(self)
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

            impl ::serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    use ::serde::ser::SerializeMap;

                    let mut map = serializer.serialize_map(None)?;
                    $(
                        if let Some(value) = &self.$field {
                            $crate::Attribute::check_encodable::<S::Error>(
                                value,
                            )?;
                            map.serialize_entry($json, value)?;
                        }
                    )*
                    map.end()
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    struct ObjectVisitor;

                    impl<'de> ::serde::de::Visitor<'de> for ObjectVisitor {
                        type Value = $name;

                        fn expecting(
                            &self,
                            f: &mut ::std::fmt::Formatter<'_>,
                        ) -> ::std::fmt::Result {
                            f.write_str(concat!(
                                "an object of type ",
                                stringify!($name)
                            ))
                        }

                        fn visit_map<A>(
                            self,
                            mut map: A,
                        ) -> Result<$name, A::Error>
                        where
                            A: ::serde::de::MapAccess<'de>,
                        {
                            let mut object = <$name as Default>::default();
                            while let Some(field) = map.next_key::<String>()? {
                                match field.as_str() {
                                    $(
                                        $json => object.$field = map.next_value()?,
                                    )*
                                    _ => {
                                        map.next_value::<::serde::de::IgnoredAny>()?;
                                    }
                                }
                            }
                            Ok(object)
                        }
                    }

                    deserializer.deserialize_map(ObjectVisitor)
                }
            }
        }
    };
}
pub(crate) use define_struct;

/// Defines a string-valued enumeration. Values this version of the model
/// doesn't know about decode into `Other` and encode back verbatim.
macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value unknown to this version of the model, kept verbatim.
            Other(String),
        }

        impl $name {
            /// The values known to this version of the model.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Other(String::new())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }

        impl $crate::Attribute for $name {
            type Builder = $name;
            type Ref<'a> = &'a $name where Self: 'a;

            fn build(builder: &$name) -> Result<Self, $crate::BuildError> {
                Ok(builder.clone())
            }

            fn to_builder(&self) -> $name {
                self.clone()
            }

            fn view(&self) -> Self::Ref<'_> {
                self
            }

            fn zero<'a>() -> Self::Ref<'a>
            where
                Self: 'a,
            {
                static ZERO: $name = $name::Other(String::new());
                &ZERO
            }
        }
    };
}
pub(crate) use define_enum;
