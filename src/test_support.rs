//! Test helpers: scripted transport, shared state, fixtures.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::{json, Value};

use crate::api::{Method, Transport};
use crate::error::{DashboardError, Result};
use crate::state::{DashboardState, StateHandle};

pub type SharedState = Rc<RefCell<DashboardState>>;

pub fn shared_state() -> SharedState {
    Rc::new(RefCell::new(DashboardState::default()))
}

impl StateHandle for SharedState {
    fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R> {
        self.try_borrow().ok().map(|state| f(&state))
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut state| f(&mut state))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

enum Reply {
    Now(Result<Value>),
    Later(oneshot::Receiver<Result<Value>>),
}

#[derive(Default)]
struct MockInner {
    replies: RefCell<HashMap<(Method, String), VecDeque<Reply>>>,
    calls: RefCell<Vec<Call>>,
}

/// Transport answering from per-route reply queues, in call order
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<MockInner>,
}

impl MockTransport {
    fn push(&self, method: Method, path: &str, reply: Reply) {
        self.inner
            .replies
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub fn ok(&self, method: Method, path: &str, value: Value) {
        self.push(method, path, Reply::Now(Ok(value)));
    }

    pub fn fail(&self, method: Method, path: &str, error: DashboardError) {
        self.push(method, path, Reply::Now(Err(error)));
    }

    /// Reply delivered later through the returned sender
    pub fn deferred(&self, method: Method, path: &str) -> oneshot::Sender<Result<Value>> {
        let (tx, rx) = oneshot::channel();
        self.push(method, path, Reply::Later(rx));
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.calls.borrow().clone()
    }

    pub fn calls_to(&self, method: Method, path: &str) -> usize {
        self.inner
            .calls
            .borrow()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }

    async fn answer(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        self.inner.calls.borrow_mut().push(Call {
            method,
            path: path.to_string(),
            body,
        });
        let reply = self
            .inner
            .replies
            .borrow_mut()
            .get_mut(&(method, path.to_string()))
            .and_then(VecDeque::pop_front);
        match reply {
            Some(Reply::Now(result)) => result,
            Some(Reply::Later(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(DashboardError::Transport("reply dropped".into()))),
            None => Err(DashboardError::Transport(format!(
                "no reply scripted for {:?} {}",
                method, path
            ))),
        }
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        self.answer(method, path, body).await
    }

    async fn query(&self, document: &str, variables: Value) -> Result<Value> {
        let body = json!({ "query": document, "variables": variables });
        self.answer(Method::Post, "/graphql", Some(body)).await
    }
}

/// Give other futures in a `join!` one turn
pub async fn yield_now() {
    struct YieldNow(bool);

    impl Future for YieldNow {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    YieldNow(false).await
}

// ========================
// Fixtures
// ========================

pub fn plans_json() -> Value {
    json!([{ "id": 1, "name": "Launch" }])
}

pub fn buckets_json() -> Value {
    json!([
        { "id": 10, "name": "Todo", "plan_id": 1 },
        { "id": 11, "name": "Doing", "plan_id": 1 }
    ])
}

/// Task 5 carries `percent`; task 6 is always complete
pub fn tasks_json(percent: i64) -> Value {
    json!([
        { "id": 5, "title": "Draft copy", "percent_complete": percent, "bucket_id": 10, "plan_id": 1 },
        { "id": 6, "title": "Book venue", "percent_complete": 100, "bucket_id": 11, "plan_id": 1 }
    ])
}

pub fn summary_json(percent: i64) -> Value {
    json!({
        "data": {
            "plans": [{
                "id": 1,
                "name": "Launch",
                "buckets": [
                    {
                        "id": 10, "name": "Todo", "planId": 1,
                        "tasks": [{ "id": 5, "title": "Draft copy", "percentComplete": percent, "bucketId": 10, "planId": 1 }]
                    },
                    {
                        "id": 11, "name": "Doing", "planId": 1,
                        "tasks": [{ "id": 6, "title": "Book venue", "percentComplete": 100, "bucketId": 11, "planId": 1 }]
                    }
                ]
            }]
        }
    })
}

pub fn device_flow_json() -> Value {
    json!({
        "user_code": "ABCD-1234",
        "verification_uri": "https://login.example.org/device",
        "device_code": "opaque-device-code",
        "interval": 5
    })
}
