//! Bucket Panel Component

use leptos::prelude::*;

use super::{ActionButton, SelectorField, TextField};
use crate::forms::FormField;
use crate::mutation::FormAction;
use crate::selector::SelectorId;

/// Create, edit and delete buckets. A bucket can be moved to another plan.
#[component]
pub fn BucketPanel() -> impl IntoView {
    view! {
        <div class="card crud-card">
            <h3>"🗄️ Buckets"</h3>

            <div class="form-row">
                <TextField field=FormField::BucketId />
                <TextField field=FormField::BucketName />
                <SelectorField id=SelectorId::BucketCreatePlan />
                <ActionButton action=FormAction::CreateBucket label="Create" />
            </div>

            <div class="form-row">
                <SelectorField id=SelectorId::ManageBucket />
                <TextField field=FormField::BucketEditName />
                <SelectorField id=SelectorId::BucketEditPlan />
                <ActionButton action=FormAction::UpdateBucket label="Save" />
                <ActionButton action=FormAction::DeleteBucket label="Delete" variant="btn-danger" />
            </div>
        </div>
    }
}
