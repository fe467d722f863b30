use std::any::{Any, TypeId, type_name};
use std::fmt;

/// Runtime descriptor for one possible output type of a choice
///
/// Identity is the `TypeId`; the name is carried only for diagnostics and
/// does not participate in comparisons.
#[derive(Debug, Clone, Copy, Eq)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    pub fn of<V: Any>() -> Self {
        TypeTag {
            id: TypeId::of::<V>(),
            name: type_name::<V>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Deduplicate a list of type descriptors, preserving first-occurrence order
///
/// Alternatives that share an output type collapse to a single entry, so a
/// choice built from them exposes that type once. Lists here are a handful
/// of entries long; a linear scan keeps the ordering guarantee trivial.
pub fn dedup_tags(tags: impl IntoIterator<Item = TypeTag>) -> Vec<TypeTag> {
    let mut deduped: Vec<TypeTag> = Vec::new();
    for tag in tags {
        if !deduped.contains(&tag) {
            deduped.push(tag);
        }
    }
    deduped
}

/// A value carrying one of several possible alternative types
///
/// The runtime rendition of a sum type: a choice yields a `Variant` tagged
/// with the type of whichever branch matched. Two branches of the same
/// output type produce indistinguishable variants. Wrapping a `Variant` in
/// a `Variant` flattens to the inner one, so nested choices never stack
/// sums.
pub struct Variant {
    tag: TypeTag,
    value: Box<dyn Any>,
}

impl Variant {
    pub fn wrap<V: Any>(value: V) -> Self {
        let boxed: Box<dyn Any> = Box::new(value);
        match boxed.downcast::<Variant>() {
            Ok(inner) => *inner,
            Err(other) => Variant {
                tag: TypeTag::of::<V>(),
                value: other,
            },
        }
    }

    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    pub fn is<V: Any>(&self) -> bool {
        self.tag == TypeTag::of::<V>()
    }

    /// Recover the value if it has type `V`, handing the variant back intact
    /// otherwise
    pub fn downcast<V: Any>(self) -> Result<V, Variant> {
        match self.value.downcast::<V>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Variant {
                tag: self.tag,
                value,
            }),
        }
    }

    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.value.downcast_ref::<V>()
    }

    /// Recover the value, panicking if it has a different type
    ///
    /// The variant analogue of `unwrap_value`: asking for the wrong arm of
    /// the sum is a programming error.
    pub fn unwrap_as<V: Any>(self) -> V {
        let tag = self.tag;
        match self.downcast::<V>() {
            Ok(value) => value,
            Err(_) => panic!(
                "invariant violation: variant holds {}, not {}",
                tag.name(),
                type_name::<V>()
            ),
        }
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant").field("tag", &self.tag).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tag_identity_ignores_name() {
        assert_eq!(TypeTag::of::<u8>(), TypeTag::of::<u8>());
        assert_ne!(TypeTag::of::<u8>(), TypeTag::of::<char>());
        assert_ne!(TypeTag::of::<Vec<u8>>(), TypeTag::of::<Vec<char>>());
    }

    #[test]
    fn test_dedup_preserves_first_occurrence_order() {
        let tags = vec![
            TypeTag::of::<u8>(),
            TypeTag::of::<Vec<u8>>(),
            TypeTag::of::<u8>(),
            TypeTag::of::<char>(),
            TypeTag::of::<Vec<u8>>(),
        ];

        let deduped = dedup_tags(tags);
        assert_eq!(
            deduped,
            vec![
                TypeTag::of::<u8>(),
                TypeTag::of::<Vec<u8>>(),
                TypeTag::of::<char>(),
            ]
        );
    }

    #[test]
    fn test_dedup_identical_collapse_to_one() {
        let tags = vec![TypeTag::of::<u8>(), TypeTag::of::<u8>()];
        assert_eq!(dedup_tags(tags).len(), 1);
    }

    #[test]
    fn test_dedup_empty() {
        assert_eq!(dedup_tags(vec![]), vec![]);
    }

    #[test]
    fn test_wrap_and_downcast() {
        let variant = Variant::wrap(42u8);
        assert!(variant.is::<u8>());
        assert!(!variant.is::<char>());
        assert_eq!(variant.tag(), TypeTag::of::<u8>());
        assert_eq!(variant.downcast::<u8>().unwrap(), 42);
    }

    #[test]
    fn test_downcast_wrong_type_returns_variant() {
        let variant = Variant::wrap("word".to_string());

        let variant = variant.downcast::<u8>().unwrap_err();
        assert!(variant.is::<String>());
        assert_eq!(variant.downcast::<String>().unwrap(), "word");
    }

    #[test]
    fn test_downcast_ref() {
        let variant = Variant::wrap(vec![1u8, 2, 3]);
        assert_eq!(variant.downcast_ref::<Vec<u8>>(), Some(&vec![1u8, 2, 3]));
        assert_eq!(variant.downcast_ref::<char>(), None);
    }

    #[test]
    fn test_nested_wrap_flattens() {
        let inner = Variant::wrap('z');
        let outer = Variant::wrap(inner);

        // Still tagged as char, not as Variant
        assert!(outer.is::<char>());
        assert_eq!(outer.unwrap_as::<char>(), 'z');
    }

    #[test]
    fn test_deeply_nested_wrap_flattens() {
        let variant = Variant::wrap(Variant::wrap(Variant::wrap(7u32)));
        assert!(variant.is::<u32>());
        assert_eq!(variant.unwrap_as::<u32>(), 7);
    }

    #[test]
    #[should_panic(expected = "invariant violation")]
    fn test_unwrap_as_wrong_type_panics() {
        let variant = Variant::wrap(1u8);
        let _ = variant.unwrap_as::<char>();
    }

    #[test]
    fn test_debug_names_tag() {
        let variant = Variant::wrap(5u8);
        let rendered = format!("{:?}", variant);
        assert!(rendered.contains("u8"));
    }
}
