use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit merge-patch semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep current value
// - Null: explicitly null => clear the field (only for optional fields)
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//
// Patch structs must mark every PatchField with
// #[serde(skip_serializing_if = "PatchField::is_unset")] so that Unset
// fields are omitted from PUT bodies entirely.
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

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

impl<T: Clone> PatchField<T> {
    /// Merge this cell into an optional slot: Unset keeps the current
    /// value, Null clears it, Value replaces it.
    pub fn apply_to(&self, slot: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *slot = None,
            PatchField::Value(v) => *slot = Some(v.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        let field: PatchField<String> = PatchField::default();
        assert!(field.is_unset());
    }

    #[test]
    fn test_apply_to_keeps_value_when_unset() {
        let mut slot = Some("keep".to_string());
        PatchField::<String>::Unset.apply_to(&mut slot);
        assert_eq!(slot.as_deref(), Some("keep"));
    }

    #[test]
    fn test_apply_to_clears_value_when_null() {
        let mut slot = Some("gone".to_string());
        PatchField::<String>::Null.apply_to(&mut slot);
        assert_eq!(slot, None);
    }

    #[test]
    fn test_apply_to_replaces_value() {
        let mut slot = Some("old".to_string());
        PatchField::Value("new".to_string()).apply_to(&mut slot);
        assert_eq!(slot.as_deref(), Some("new"));
    }

    #[test]
    fn test_serialize_skips_unset_and_emits_null() {
        #[derive(Serialize)]
        struct Body {
            #[serde(skip_serializing_if = "PatchField::is_unset")]
            a: PatchField<u32>,
            #[serde(skip_serializing_if = "PatchField::is_unset")]
            b: PatchField<u32>,
            #[serde(skip_serializing_if = "PatchField::is_unset")]
            c: PatchField<u32>,
        }

        let json = serde_json::to_value(Body {
            a: PatchField::Unset,
            b: PatchField::Null,
            c: PatchField::Value(7),
        })
        .unwrap();

        assert_eq!(json, serde_json::json!({ "b": null, "c": 7 }));
    }
}
