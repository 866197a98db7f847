//! Entity Cache
//!
//! Last-known-good flat collections. Every successful list call replaces
//! a collection wholesale; failures never touch it.

use crate::models::{Bucket, Plan, Task};

/// The three flat collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Collection {
    Plans,
    Buckets,
    Tasks,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Plans, Collection::Buckets, Collection::Tasks];

    pub fn path(self) -> &'static str {
        match self {
            Collection::Plans => "/plans",
            Collection::Buckets => "/buckets",
            Collection::Tasks => "/tasks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Collection::Plans => "Plans",
            Collection::Buckets => "Buckets",
            Collection::Tasks => "Tasks",
        }
    }
}

/// A freshly fetched collection, ready to replace the cached one
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Plans(Vec<Plan>),
    Buckets(Vec<Bucket>),
    Tasks(Vec<Task>),
}

impl Listing {
    pub fn len(&self) -> usize {
        match self {
            Listing::Plans(v) => v.len(),
            Listing::Buckets(v) => v.len(),
            Listing::Tasks(v) => v.len(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityCache {
    pub plans: Vec<Plan>,
    pub buckets: Vec<Bucket>,
    pub tasks: Vec<Task>,
}

impl EntityCache {
    /// Replace (never merge) the collection the listing belongs to
    pub fn replace(&mut self, listing: Listing) {
        match listing {
            Listing::Plans(plans) => self.plans = plans,
            Listing::Buckets(buckets) => self.buckets = buckets,
            Listing::Tasks(tasks) => self.tasks = tasks,
        }
    }

    pub fn plan(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id.to_string() == id)
    }

    pub fn bucket(&self, id: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.id.to_string() == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id.to_string() == id)
    }
}
