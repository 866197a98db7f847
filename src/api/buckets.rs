//! Bucket Endpoints

use serde::Serialize;
use serde_json::Value;

use super::{decode, encode, Method, Transport};
use crate::error::Result;
use crate::models::Bucket;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBucket {
    pub id: i64,
    pub name: String,
    pub plan_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketChanges {
    pub name: String,
    /// Left out when the edit form has no plan chosen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<i64>,
}

pub async fn list_buckets<T: Transport + ?Sized>(transport: &T) -> Result<Vec<Bucket>> {
    let value = transport.request(Method::Get, "/buckets", None).await?;
    decode(value)
}

pub async fn create_bucket<T: Transport + ?Sized>(transport: &T, bucket: &NewBucket) -> Result<Value> {
    transport.request(Method::Post, "/buckets", Some(encode(bucket)?)).await
}

pub async fn update_bucket<T: Transport + ?Sized>(transport: &T, id: i64, changes: &BucketChanges) -> Result<Value> {
    transport
        .request(Method::Put, &format!("/buckets/{}", id), Some(encode(changes)?))
        .await
}

pub async fn delete_bucket<T: Transport + ?Sized>(transport: &T, id: i64) -> Result<Value> {
    transport.request(Method::Delete, &format!("/buckets/{}", id), None).await
}
