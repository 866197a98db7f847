//! Form Drafts
//!
//! Text the user has typed into the create/edit forms. Identifiers chosen
//! from drop-downs live in the selectors, not here.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    PlanId,
    PlanName,
    PlanEditName,
    BucketId,
    BucketName,
    BucketEditName,
    TaskId,
    TaskTitle,
    TaskPercent,
    TaskEditTitle,
    TaskEditPercent,
}

impl FormField {
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::PlanId | FormField::BucketId | FormField::TaskId => "ID",
            FormField::PlanName | FormField::BucketName => "Name",
            FormField::PlanEditName | FormField::BucketEditName => "New name",
            FormField::TaskTitle | FormField::TaskEditTitle => "Title",
            FormField::TaskPercent | FormField::TaskEditPercent => "% complete",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            FormField::PlanId
                | FormField::BucketId
                | FormField::TaskId
                | FormField::TaskPercent
                | FormField::TaskEditPercent
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forms {
    fields: BTreeMap<FormField, String>,
}

impl Forms {
    pub fn get(&self, field: FormField) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }
}
