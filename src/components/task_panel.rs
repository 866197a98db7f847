//! Task Panel Component

use leptos::prelude::*;

use super::{ActionButton, SelectorField, TextField};
use crate::forms::FormField;
use crate::mutation::FormAction;
use crate::selector::SelectorId;

/// Create, edit and delete tasks.
///
/// The bucket drop-downs only offer buckets of the plan chosen next to them.
#[component]
pub fn TaskPanel() -> impl IntoView {
    view! {
        <div class="card crud-card">
            <h3>"📝 Tasks"</h3>

            <div class="form-row">
                <TextField field=FormField::TaskId />
                <TextField field=FormField::TaskTitle />
                <TextField field=FormField::TaskPercent />
                <SelectorField id=SelectorId::TaskCreatePlan />
                <SelectorField id=SelectorId::TaskCreateBucket />
                <ActionButton action=FormAction::CreateTask label="Create" />
            </div>

            <div class="form-row">
                <SelectorField id=SelectorId::TaskEdit />
                <TextField field=FormField::TaskEditTitle />
                <TextField field=FormField::TaskEditPercent />
                <SelectorField id=SelectorId::TaskEditPlan />
                <SelectorField id=SelectorId::TaskEditBucket />
                <ActionButton action=FormAction::UpdateTask label="Save" />
            </div>

            <div class="form-row">
                <SelectorField id=SelectorId::TaskDelete />
                <ActionButton action=FormAction::DeleteTask label="Delete" variant="btn-danger" />
            </div>
        </div>
    }
}
