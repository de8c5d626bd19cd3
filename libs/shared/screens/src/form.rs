use std::collections::BTreeMap;

use serde::Serialize;

use crate::resource::Entity;

/// One row of a validation rule table: field name, predicate, message shown
/// when the predicate fails. Rules run only at submit time.
pub struct Rule<D> {
    pub field: &'static str,
    pub message: &'static str,
    pub check: fn(&D) -> bool,
}

impl<D> Rule<D> {
    pub fn new(field: &'static str, message: &'static str, check: fn(&D) -> bool) -> Self {
        Self {
            field,
            message,
            check,
        }
    }
}

/// Field-scoped validation errors. At most one message per field; the first
/// failing rule wins, matching how the original forms reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, &'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors.get(field).copied()
    }

    pub fn clear_field(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, *m))
    }

    fn insert_first(&mut self, field: &'static str, message: &'static str) {
        self.errors.entry(field).or_insert(message);
    }
}

/// The per-entity draft contract. A draft is the in-progress local copy of an
/// entity being edited; it holds form-shaped values (numbers as text) and is
/// re-initialized from the entity every time the dialog opens.
pub trait FormModel: Clone {
    type Entity: Entity;
    type Payload: Serialize;

    /// `None` means create mode; `Some` pre-populates every field from the
    /// existing record.
    fn from_entity(entity: Option<&Self::Entity>) -> Self;

    /// The declarative validation table for this entity's form.
    fn rules() -> Vec<Rule<Self>>;

    /// Coerce the validated draft into the wire shape (string amounts become
    /// numbers, create-only fields drop out, and so on).
    fn normalize(&self) -> Self::Payload;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// The modal create/edit screen. Owns the draft and its errors; never talks
/// to the network for persistence. `submit` hands the normalized payload up
/// to the list screen's save handler.
pub struct FormScreen<D: FormModel> {
    mode: FormMode,
    draft: D,
    errors: FieldErrors,
}

impl<D: FormModel> FormScreen<D> {
    pub fn open(entity: Option<&D::Entity>) -> Self {
        Self {
            mode: if entity.is_some() {
                FormMode::Edit
            } else {
                FormMode::Create
            },
            draft: D::from_entity(entity),
            errors: FieldErrors::default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Apply an edit to one field. Clears that field's error and no other;
    /// re-validation happens only at the next submit.
    pub fn edit(&mut self, field: &'static str, apply: impl FnOnce(&mut D)) {
        apply(&mut self.draft);
        self.errors.clear_field(field);
    }

    /// Validate and, if clean, return the normalized payload for the list
    /// screen to persist. On failure the errors are populated and the caller
    /// gets nothing - the save callback must not run.
    pub fn submit(&mut self) -> Option<D::Payload> {
        let mut errors = FieldErrors::default();
        for rule in D::rules() {
            if !(rule.check)(&self.draft) {
                errors.insert_first(rule.field, rule.message);
            }
        }

        if errors.is_empty() {
            self.errors = FieldErrors::default();
            Some(self.draft.normalize())
        } else {
            self.errors = errors;
            None
        }
    }
}
