//! Plan Endpoints

use serde::Serialize;
use serde_json::Value;

use super::{decode, encode, Method, Transport};
use crate::error::Result;
use crate::models::Plan;

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPlan {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanChanges {
    pub name: String,
}

// ========================
// Calls
// ========================

pub async fn list_plans<T: Transport + ?Sized>(transport: &T) -> Result<Vec<Plan>> {
    let value = transport.request(Method::Get, "/plans", None).await?;
    decode(value)
}

pub async fn create_plan<T: Transport + ?Sized>(transport: &T, plan: &NewPlan) -> Result<Value> {
    transport.request(Method::Post, "/plans", Some(encode(plan)?)).await
}

pub async fn update_plan<T: Transport + ?Sized>(transport: &T, id: i64, changes: &PlanChanges) -> Result<Value> {
    transport
        .request(Method::Put, &format!("/plans/{}", id), Some(encode(changes)?))
        .await
}

pub async fn delete_plan<T: Transport + ?Sized>(transport: &T, id: i64) -> Result<Value> {
    transport.request(Method::Delete, &format!("/plans/{}", id), None).await
}
