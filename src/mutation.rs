//! Mutation Controller Logic
//!
//! Turns a form submission into a validated backend call. Each mutation
//! declares which flat collections it invalidates; the aggregate summary
//! is never among them and only changes on an explicit full refresh.

use serde_json::Value;

use crate::api::{self, BucketChanges, NewBucket, NewPlan, PlanChanges, TaskBody, Transport};
use crate::cache::Collection;
use crate::error::{DashboardError, Result};
use crate::forms::{FormField, Forms};
use crate::selector::{SelectorId, Selectors};

/// Buttons on the create/edit/delete forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormAction {
    CreatePlan,
    UpdatePlan,
    DeletePlan,
    CreateBucket,
    UpdateBucket,
    DeleteBucket,
    CreateTask,
    UpdateTask,
    DeleteTask,
}

/// A validated write, ready to send
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreatePlan(NewPlan),
    UpdatePlan { id: i64, changes: PlanChanges },
    DeletePlan { id: i64 },
    CreateBucket(NewBucket),
    UpdateBucket { id: i64, changes: BucketChanges },
    DeleteBucket { id: i64 },
    CreateTask(TaskBody),
    UpdateTask(TaskBody),
    DeleteTask { id: i64 },
}

impl FormAction {
    /// Validate the form behind this action. Fails before any network call.
    pub fn build(self, forms: &Forms, selectors: &Selectors) -> Result<Mutation> {
        let field = |f: FormField| forms.get(f).trim();
        let chosen = |s: SelectorId| selectors.value(s).unwrap_or("");

        match self {
            FormAction::CreatePlan => {
                let (id, name) = (field(FormField::PlanId), field(FormField::PlanName));
                if id.is_empty() || name.is_empty() {
                    return Err(DashboardError::validation("Name and ID are required"));
                }
                Ok(Mutation::CreatePlan(NewPlan {
                    id: parse_id("Plan ID", id)?,
                    name: name.to_string(),
                }))
            }
            FormAction::UpdatePlan => {
                let (id, name) = (chosen(SelectorId::ManagePlan), field(FormField::PlanEditName));
                if id.is_empty() || name.is_empty() {
                    return Err(DashboardError::validation("ID and name are required"));
                }
                Ok(Mutation::UpdatePlan {
                    id: parse_id("Plan ID", id)?,
                    changes: PlanChanges { name: name.to_string() },
                })
            }
            FormAction::DeletePlan => Ok(Mutation::DeletePlan {
                id: parse_selected("Plan", chosen(SelectorId::ManagePlan))?,
            }),
            FormAction::CreateBucket => {
                let (id, name, plan) = (
                    field(FormField::BucketId),
                    field(FormField::BucketName),
                    chosen(SelectorId::BucketCreatePlan),
                );
                if id.is_empty() || name.is_empty() || plan.is_empty() {
                    return Err(DashboardError::validation("Missing required fields"));
                }
                Ok(Mutation::CreateBucket(NewBucket {
                    id: parse_id("Bucket ID", id)?,
                    name: name.to_string(),
                    plan_id: parse_id("Plan ID", plan)?,
                }))
            }
            FormAction::UpdateBucket => {
                let (id, name, plan) = (
                    chosen(SelectorId::ManageBucket),
                    field(FormField::BucketEditName),
                    chosen(SelectorId::BucketEditPlan),
                );
                if id.is_empty() || name.is_empty() {
                    return Err(DashboardError::validation("ID and name are required"));
                }
                let plan_id = if plan.is_empty() { None } else { Some(parse_id("Plan ID", plan)?) };
                Ok(Mutation::UpdateBucket {
                    id: parse_id("Bucket ID", id)?,
                    changes: BucketChanges { name: name.to_string(), plan_id },
                })
            }
            FormAction::DeleteBucket => Ok(Mutation::DeleteBucket {
                id: parse_selected("Bucket", chosen(SelectorId::ManageBucket))?,
            }),
            FormAction::CreateTask => {
                let (id, title, bucket, plan) = (
                    field(FormField::TaskId),
                    field(FormField::TaskTitle),
                    chosen(SelectorId::TaskCreateBucket),
                    chosen(SelectorId::TaskCreatePlan),
                );
                if id.is_empty() || title.is_empty() || bucket.is_empty() || plan.is_empty() {
                    return Err(DashboardError::validation("ID, title, bucket and plan are required"));
                }
                Ok(Mutation::CreateTask(TaskBody {
                    id: parse_id("Task ID", id)?,
                    title: title.to_string(),
                    percent_complete: field(FormField::TaskPercent).parse::<i64>().unwrap_or(0),
                    bucket_id: parse_id("Bucket ID", bucket)?,
                    plan_id: parse_id("Plan ID", plan)?,
                }))
            }
            FormAction::UpdateTask => {
                let id = parse_selected("Task", chosen(SelectorId::TaskEdit))?;
                let percent = field(FormField::TaskEditPercent);
                let percent_complete = percent
                    .parse::<i64>()
                    .map_err(|_| DashboardError::validation(format!("Invalid percent complete: {:?}", percent)))?;
                Ok(Mutation::UpdateTask(TaskBody {
                    id,
                    title: field(FormField::TaskEditTitle).to_string(),
                    percent_complete,
                    bucket_id: parse_id("Bucket ID", chosen(SelectorId::TaskEditBucket))?,
                    plan_id: parse_id("Plan ID", chosen(SelectorId::TaskEditPlan))?,
                }))
            }
            FormAction::DeleteTask => Ok(Mutation::DeleteTask {
                id: parse_selected("Task", chosen(SelectorId::TaskDelete))?,
            }),
        }
    }
}

impl Mutation {
    /// Flat collections to re-fetch after this mutation succeeds
    pub fn affected_collections(&self) -> &'static [Collection] {
        match self {
            Mutation::CreatePlan(_) | Mutation::UpdatePlan { .. } | Mutation::DeletePlan { .. } => &[Collection::Plans],
            Mutation::CreateBucket(_) | Mutation::UpdateBucket { .. } | Mutation::DeleteBucket { .. } => {
                &[Collection::Buckets]
            }
            Mutation::CreateTask(_) | Mutation::UpdateTask(_) | Mutation::DeleteTask { .. } => &[Collection::Tasks],
        }
    }

    /// Consent prompt shown before destructive calls
    pub fn confirmation_prompt(&self) -> Option<&'static str> {
        match self {
            Mutation::DeletePlan { .. } => Some(
                "Delete this plan? Note: this does not delete the plan on the remote planning service.",
            ),
            Mutation::DeleteBucket { .. } => Some("Delete this bucket?"),
            Mutation::DeleteTask { .. } => Some("Delete this task?"),
            _ => None,
        }
    }

    pub fn success_message(&self) -> String {
        match self {
            Mutation::CreatePlan(plan) => format!("Plan \"{}\" created", plan.name),
            Mutation::UpdatePlan { id, .. } => format!("Plan {} updated", id),
            Mutation::DeletePlan { id } => format!("Plan {} deleted", id),
            Mutation::CreateBucket(bucket) => format!("Bucket \"{}\" created", bucket.name),
            Mutation::UpdateBucket { id, .. } => format!("Bucket {} updated", id),
            Mutation::DeleteBucket { id } => format!("Bucket {} deleted", id),
            Mutation::CreateTask(task) => format!("Task \"{}\" created", task.title),
            Mutation::UpdateTask(task) => format!("Task #{} updated", task.id),
            Mutation::DeleteTask { id } => format!("Task #{} deleted", id),
        }
    }

    pub async fn send<T: Transport + ?Sized>(&self, transport: &T) -> Result<Value> {
        match self {
            Mutation::CreatePlan(plan) => api::create_plan(transport, plan).await,
            Mutation::UpdatePlan { id, changes } => api::update_plan(transport, *id, changes).await,
            Mutation::DeletePlan { id } => api::delete_plan(transport, *id).await,
            Mutation::CreateBucket(bucket) => api::create_bucket(transport, bucket).await,
            Mutation::UpdateBucket { id, changes } => api::update_bucket(transport, *id, changes).await,
            Mutation::DeleteBucket { id } => api::delete_bucket(transport, *id).await,
            Mutation::CreateTask(task) => api::create_task(transport, task).await,
            Mutation::UpdateTask(task) => api::update_task(transport, task).await,
            Mutation::DeleteTask { id } => api::delete_task(transport, *id).await,
        }
    }
}

/// Identifiers always travel as integers
pub fn parse_id(label: &str, text: &str) -> Result<i64> {
    text.trim()
        .parse()
        .map_err(|_| DashboardError::validation(format!("{} must be an integer, got {:?}", label, text)))
}

fn parse_selected(entity: &str, value: &str) -> Result<i64> {
    if value.is_empty() {
        return Err(DashboardError::validation(format!("{} ID is required", entity)));
    }
    parse_id(&format!("{} ID", entity), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{EntityCache, Listing};
    use crate::models::{Bucket, Plan, Task};

    fn selectors_with_data() -> Selectors {
        let mut cache = EntityCache::default();
        cache.replace(Listing::Plans(vec![Plan { id: 1, name: "Launch".into() }]));
        cache.replace(Listing::Buckets(vec![Bucket { id: 10, name: "Todo".into(), plan_id: 1 }]));
        cache.replace(Listing::Tasks(vec![Task {
            id: 5,
            title: "Write".into(),
            percent_complete: 20,
            bucket_id: 10,
            plan_id: 1,
        }]));
        let mut selectors = Selectors::default();
        selectors.populate_all(&cache);
        selectors
    }

    #[test]
    fn test_create_plan_requires_id_and_name() {
        let mut forms = Forms::default();
        forms.set(FormField::PlanName, "Launch");
        let err = FormAction::CreatePlan.build(&forms, &Selectors::default()).unwrap_err();
        assert_eq!(err, DashboardError::validation("Name and ID are required"));

        forms.set(FormField::PlanId, " 42 ");
        let mutation = FormAction::CreatePlan.build(&forms, &Selectors::default()).unwrap();
        assert_eq!(mutation, Mutation::CreatePlan(NewPlan { id: 42, name: "Launch".into() }));
    }

    #[test]
    fn test_identifiers_must_be_integers() {
        let mut forms = Forms::default();
        forms.set(FormField::PlanId, "abc");
        forms.set(FormField::PlanName, "Launch");
        let err = FormAction::CreatePlan.build(&forms, &Selectors::default()).unwrap_err();
        assert!(matches!(err, DashboardError::Validation(msg) if msg.contains("Plan ID")));
    }

    #[test]
    fn test_create_task_defaults_percent_to_zero() {
        let mut selectors = selectors_with_data();
        selectors.select(SelectorId::TaskCreatePlan, "1");
        selectors.select(SelectorId::TaskCreateBucket, "10");
        let mut forms = Forms::default();
        forms.set(FormField::TaskId, "6");
        forms.set(FormField::TaskTitle, "Review");
        forms.set(FormField::TaskPercent, "lots");

        match FormAction::CreateTask.build(&forms, &selectors).unwrap() {
            Mutation::CreateTask(body) => {
                assert_eq!(body.percent_complete, 0);
                assert_eq!((body.bucket_id, body.plan_id), (10, 1));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_create_task_requires_bucket_and_plan() {
        let mut forms = Forms::default();
        forms.set(FormField::TaskId, "6");
        forms.set(FormField::TaskTitle, "Review");
        let result = FormAction::CreateTask.build(&forms, &selectors_with_data());
        assert!(matches!(result, Err(DashboardError::Validation(_))));
    }

    #[test]
    fn test_update_task_rejects_bad_percent() {
        let mut selectors = selectors_with_data();
        selectors.select(SelectorId::TaskEdit, "5");
        let mut forms = Forms::default();
        forms.set(FormField::TaskEditPercent, "");
        let result = FormAction::UpdateTask.build(&forms, &selectors);
        assert!(matches!(result, Err(DashboardError::Validation(_))));
    }

    #[test]
    fn test_update_bucket_omits_unset_plan() {
        let mut selectors = selectors_with_data();
        selectors.select(SelectorId::ManageBucket, "10");
        let mut forms = Forms::default();
        forms.set(FormField::BucketEditName, "Doing");

        let mutation = FormAction::UpdateBucket.build(&forms, &selectors).unwrap();
        assert_eq!(
            mutation,
            Mutation::UpdateBucket { id: 10, changes: BucketChanges { name: "Doing".into(), plan_id: None } }
        );
    }

    #[test]
    fn test_delete_requires_selection() {
        let result = FormAction::DeleteTask.build(&Forms::default(), &selectors_with_data());
        assert_eq!(result, Err(DashboardError::validation("Task ID is required")));
    }

    #[test]
    fn test_every_delete_asks_for_confirmation() {
        for mutation in [
            Mutation::DeletePlan { id: 1 },
            Mutation::DeleteBucket { id: 1 },
            Mutation::DeleteTask { id: 1 },
        ] {
            assert!(mutation.confirmation_prompt().is_some(), "{:?}", mutation);
        }
        assert!(Mutation::CreatePlan(NewPlan { id: 1, name: "x".into() })
            .confirmation_prompt()
            .is_none());
    }

    #[test]
    fn test_affected_collections_are_flat_only() {
        let update = Mutation::UpdateTask(TaskBody {
            id: 5,
            title: "Write".into(),
            percent_complete: 80,
            bucket_id: 10,
            plan_id: 1,
        });
        assert_eq!(update.affected_collections(), &[Collection::Tasks]);
        assert_eq!(Mutation::DeletePlan { id: 1 }.affected_collections(), &[Collection::Plans]);
        assert_eq!(Mutation::DeleteBucket { id: 1 }.affected_collections(), &[Collection::Buckets]);
    }
}
