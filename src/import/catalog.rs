//! Post-import introspection handle.

use crate::volume::{ImportObject, ParamValue};

enum CatalogObject<'t> {
    Borrowed(&'t dyn ImportObject),
    Owned(Box<dyn ImportObject>),
}

/// Immutable result of a successful import.
///
/// Pairs a descriptive name with the imported object, for introspection
/// (listing the parameters that were applied, reporting the object kind)
/// without re-parsing the source file. Performs no further I/O or mutation.
///
/// Most loaders fill a caller-owned target and return a borrowing catalog;
/// loaders that construct their own object (descriptor files) return an
/// owning one.
pub struct Catalog<'t> {
    name: String,
    object: CatalogObject<'t>,
}

impl std::fmt::Debug for Catalog<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

impl<'t> Catalog<'t> {
    /// Create a catalog referencing a caller-owned object.
    pub fn borrowed(name: impl Into<String>, object: &'t dyn ImportObject) -> Self {
        Self {
            name: name.into(),
            object: CatalogObject::Borrowed(object),
        }
    }

    /// Create a catalog owning a loader-constructed object.
    pub fn owned(name: impl Into<String>, object: Box<dyn ImportObject>) -> Self {
        Self {
            name: name.into(),
            object: CatalogObject::Owned(object),
        }
    }

    /// The catalog's descriptive name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The imported object.
    pub fn object(&self) -> &dyn ImportObject {
        match &self.object {
            CatalogObject::Borrowed(object) => *object,
            CatalogObject::Owned(object) => object.as_ref(),
        }
    }

    /// Kind tag of the imported object.
    pub fn kind(&self) -> &'static str {
        self.object().kind()
    }

    /// Parameters that were applied to the imported object, sorted by name.
    pub fn parameters(&self) -> Vec<(&str, &ParamValue)> {
        self.object().params().entries()
    }

    /// Take ownership of the imported object, when the catalog owns it.
    pub fn into_object(self) -> Option<Box<dyn ImportObject>> {
        match self.object {
            CatalogObject::Borrowed(_) => None,
            CatalogObject::Owned(object) => Some(object),
        }
    }
}
