//! Plan Panel Component

use leptos::prelude::*;

use super::{ActionButton, SelectorField, TextField};
use crate::forms::FormField;
use crate::mutation::FormAction;
use crate::selector::SelectorId;

/// Create, rename and delete plans
#[component]
pub fn PlanPanel() -> impl IntoView {
    view! {
        <div class="card crud-card">
            <h3>"📁 Plans"</h3>

            <div class="form-row">
                <TextField field=FormField::PlanId />
                <TextField field=FormField::PlanName />
                <ActionButton action=FormAction::CreatePlan label="Create" />
            </div>

            <div class="form-row">
                <SelectorField id=SelectorId::ManagePlan />
                <TextField field=FormField::PlanEditName />
                <ActionButton action=FormAction::UpdatePlan label="Rename" />
                <ActionButton action=FormAction::DeletePlan label="Delete" variant="btn-danger" />
            </div>

            <p class="hint">"Deleting here does not remove the plan from the remote planning service."</p>
        </div>
    }
}
