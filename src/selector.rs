//! Selector Synchronizer
//!
//! Option lists for every drop-down, rebuilt from the entity cache while
//! keeping the user's choice when it is still offered.

use std::collections::BTreeMap;

use crate::cache::EntityCache;
use crate::models::Bucket;

/// Value of the placeholder option
pub const PLACEHOLDER_VALUE: &str = "";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// One drop-down: its options (placeholder first) and the chosen value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorState {
    pub options: Vec<SelectOption>,
    pub selected: String,
}

impl SelectorState {
    /// Rebuild the option list. The previous choice survives only if one of
    /// the new records carries it; otherwise the placeholder is selected.
    pub fn populate<I>(&mut self, placeholder: &str, records: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let previous = std::mem::take(&mut self.selected);

        self.options.clear();
        self.options.push(SelectOption {
            value: PLACEHOLDER_VALUE.to_string(),
            label: placeholder.to_string(),
        });
        for (value, label) in records {
            self.options.push(SelectOption {
                label: format!("{} ({})", label, value),
                value,
            });
        }

        self.selected = if self.has_value(&previous) {
            previous
        } else {
            PLACEHOLDER_VALUE.to_string()
        };
    }

    /// Choose a value; unknown values fall back to the placeholder
    pub fn select(&mut self, value: &str) {
        self.selected = if self.has_value(value) {
            value.to_string()
        } else {
            PLACEHOLDER_VALUE.to_string()
        };
    }

    pub fn has_value(&self, value: &str) -> bool {
        value != PLACEHOLDER_VALUE && self.options.iter().any(|o| o.value == value)
    }

    /// Chosen value, `None` while the placeholder is selected
    pub fn value(&self) -> Option<&str> {
        if self.selected == PLACEHOLDER_VALUE {
            None
        } else {
            Some(&self.selected)
        }
    }
}

/// Every drop-down the dashboard shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelectorId {
    /// Plan being renamed or deleted
    ManagePlan,
    /// Plan for a new bucket
    BucketCreatePlan,
    /// Plan for a new task
    TaskCreatePlan,
    /// Bucket for a new task, narrowed by `TaskCreatePlan`
    TaskCreateBucket,
    /// Bucket being edited or deleted
    ManageBucket,
    /// Plan of the bucket being edited
    BucketEditPlan,
    /// Task being edited
    TaskEdit,
    /// Plan of the task being edited
    TaskEditPlan,
    /// Bucket of the task being edited, narrowed by `TaskEditPlan`
    TaskEditBucket,
    /// Task being deleted
    TaskDelete,
}

impl SelectorId {
    pub const ALL: [SelectorId; 10] = [
        SelectorId::ManagePlan,
        SelectorId::BucketCreatePlan,
        SelectorId::TaskCreatePlan,
        SelectorId::TaskCreateBucket,
        SelectorId::ManageBucket,
        SelectorId::BucketEditPlan,
        SelectorId::TaskEdit,
        SelectorId::TaskEditPlan,
        SelectorId::TaskEditBucket,
        SelectorId::TaskDelete,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            SelectorId::ManagePlan | SelectorId::BucketCreatePlan | SelectorId::TaskCreatePlan => "Select plan...",
            SelectorId::BucketEditPlan => "Associated plan...",
            SelectorId::TaskEditPlan => "Plan...",
            SelectorId::TaskCreateBucket | SelectorId::ManageBucket | SelectorId::TaskEditBucket => "Select bucket...",
            SelectorId::TaskEdit | SelectorId::TaskDelete => "Select task...",
        }
    }

    /// Bucket selectors whose options depend on a plan selector
    pub fn narrowed_by(self) -> Option<SelectorId> {
        match self {
            SelectorId::TaskCreateBucket => Some(SelectorId::TaskCreatePlan),
            SelectorId::TaskEditBucket => Some(SelectorId::TaskEditPlan),
            _ => None,
        }
    }

    /// Bucket selector narrowed by this plan selector
    pub fn governs(self) -> Option<SelectorId> {
        SelectorId::ALL.into_iter().find(|id| id.narrowed_by() == Some(self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    states: BTreeMap<SelectorId, SelectorState>,
}

impl Default for Selectors {
    fn default() -> Self {
        let mut selectors = Self { states: BTreeMap::new() };
        for id in SelectorId::ALL {
            selectors.state_mut(id).populate(id.placeholder(), std::iter::empty());
        }
        selectors
    }
}

impl Selectors {
    pub fn get(&self, id: SelectorId) -> Option<&SelectorState> {
        self.states.get(&id)
    }

    pub fn state_mut(&mut self, id: SelectorId) -> &mut SelectorState {
        self.states.entry(id).or_default()
    }

    /// Chosen value of a selector, `None` on the placeholder
    pub fn value(&self, id: SelectorId) -> Option<&str> {
        self.get(id).and_then(SelectorState::value)
    }

    pub fn select(&mut self, id: SelectorId, value: &str) {
        self.state_mut(id).select(value);
    }

    /// Rebuild every selector from the cache, plan-narrowed ones included
    pub fn populate_all(&mut self, cache: &EntityCache) {
        for id in SelectorId::ALL {
            if id.narrowed_by().is_some() {
                continue;
            }
            let records: Vec<(String, String)> = match id {
                SelectorId::ManageBucket => cache
                    .buckets
                    .iter()
                    .map(|b| (b.id.to_string(), b.name.clone()))
                    .collect(),
                SelectorId::TaskEdit | SelectorId::TaskDelete => cache
                    .tasks
                    .iter()
                    .map(|t| (t.id.to_string(), t.title.clone()))
                    .collect(),
                _ => cache
                    .plans
                    .iter()
                    .map(|p| (p.id.to_string(), p.name.clone()))
                    .collect(),
            };
            self.state_mut(id).populate(id.placeholder(), records);
        }
        for id in SelectorId::ALL {
            if let Some(governing) = id.narrowed_by() {
                self.narrow_buckets(governing, id, &cache.buckets);
            }
        }
    }

    /// Offer only the buckets of the plan chosen in `plan_selector`
    /// (all buckets while it shows the placeholder).
    pub fn narrow_buckets(&mut self, plan_selector: SelectorId, bucket_selector: SelectorId, buckets: &[Bucket]) {
        let plan = self.value(plan_selector).map(str::to_string);
        let records = buckets_for_plan(buckets, plan.as_deref())
            .map(|b| (b.id.to_string(), b.name.clone()))
            .collect::<Vec<_>>();
        self.state_mut(bucket_selector)
            .populate(bucket_selector.placeholder(), records);
    }
}

pub fn buckets_for_plan<'a>(buckets: &'a [Bucket], plan: Option<&'a str>) -> impl Iterator<Item = &'a Bucket> + 'a {
    buckets
        .iter()
        .filter(move |b| plan.map_or(true, |p| b.plan_id.to_string() == p))
}
