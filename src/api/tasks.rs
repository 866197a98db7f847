//! Task Endpoints

use serde::Serialize;
use serde_json::Value;

use super::{decode, encode, Method, Transport};
use crate::error::Result;
use crate::models::Task;

/// Body for both create and full update; the backend replaces every field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskBody {
    pub id: i64,
    pub title: String,
    pub percent_complete: i64,
    pub bucket_id: i64,
    pub plan_id: i64,
}

pub async fn list_tasks<T: Transport + ?Sized>(transport: &T) -> Result<Vec<Task>> {
    let value = transport.request(Method::Get, "/tasks", None).await?;
    decode(value)
}

pub async fn create_task<T: Transport + ?Sized>(transport: &T, task: &TaskBody) -> Result<Value> {
    transport.request(Method::Post, "/tasks", Some(encode(task)?)).await
}

pub async fn update_task<T: Transport + ?Sized>(transport: &T, task: &TaskBody) -> Result<Value> {
    transport
        .request(Method::Put, &format!("/tasks/{}", task.id), Some(encode(task)?))
        .await
}

pub async fn delete_task<T: Transport + ?Sized>(transport: &T, id: i64) -> Result<Value> {
    transport.request(Method::Delete, &format!("/tasks/{}", id), None).await
}
