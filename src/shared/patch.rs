// src/shared/patch.rs
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit partial-update semantics)
// ──────────────────────────────────────────────────────────
// - omitted field => Unset (requires #[serde(default)] on the field)
// - null          => Null
// - value         => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

impl PatchField<String> {
    /// Blank strings clear the field, like an explicit null.
    pub fn apply_to(self, target: &mut Option<String>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *target = None,
            PatchField::Value(v) => {
                let v = v.trim();
                *target = (!v.is_empty()).then(|| v.to_string());
            }
        }
    }
}
