//! JSON Schema descriptions of every entity, served at `GET /schema`.
//!
//! Consumed by database viewers and admin tooling; kept in sync with the
//! models by hand.

use axum::Json;
use serde_json::{json, Value};

/// GET /schema
pub async fn entity_schemas() -> Json<Value> {
    Json(json!({
        "model": {
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "Full name" },
                "city": { "type": "string", "description": "Home city" },
                "bio": { "type": "string" },
                "experience_years": { "type": "integer", "minimum": 0, "maximum": 50, "default": 0 },
                "hourly_rate": { "type": "number", "minimum": 0 },
                "skills": { "type": "array", "items": { "type": "string" }, "default": [] },
                "photos": { "type": "array", "items": { "type": "string" }, "default": [] },
                "instagram": { "type": "string" },
                "phone": { "type": "string" }
            },
            "required": ["name", "city"]
        },
        "club": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "city": { "type": "string" },
                "contact_name": { "type": "string" },
                "contact_email": { "type": "string" },
                "contact_phone": { "type": "string" }
            },
            "required": ["name", "city"]
        },
        "gig": {
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "club_name": { "type": "string" },
                "city": { "type": "string" },
                "date": { "type": "string", "description": "ISO date or friendly date string" },
                "location": { "type": "string" },
                "pay": { "type": "string", "description": "Compensation details e.g. $50/hr + tips" },
                "dress_code": { "type": "string" },
                "requirements": { "type": "array", "items": { "type": "string" }, "default": [] },
                "spots": { "type": "integer", "minimum": 1, "default": 1 },
                "notes": { "type": "string" }
            },
            "required": ["title", "club_name", "city", "date"]
        },
        "application": {
            "type": "object",
            "properties": {
                "gig_id": { "type": "string" },
                "model_id": { "type": "string" },
                "message": { "type": "string" },
                "status": { "type": "string", "enum": ["pending", "approved", "rejected"], "default": "pending" },
                "applied_at": { "type": "string", "format": "date-time" }
            },
            "required": ["gig_id", "model_id"]
        },
        "message": {
            "type": "object",
            "properties": {
                "thread_id": { "type": "string" },
                "sender": { "type": "string" },
                "text": { "type": "string" },
                "pii_flag": { "type": "boolean", "readOnly": true },
                "pii_reason": { "type": "string", "readOnly": true }
            },
            "required": ["thread_id", "sender", "text"]
        },
        "contract": {
            "type": "object",
            "properties": {
                "client_id": { "type": "string" },
                "client_name": { "type": "string" },
                "talent_id": { "type": "string" },
                "venue": { "type": "string" },
                "city": { "type": "string" },
                "role": { "type": "string" },
                "date": { "type": "string" },
                "start_time": { "type": "string" },
                "end_time": { "type": "string" },
                "base_pay": { "type": "string" },
                "gratuity": { "type": "string" },
                "contract_text": { "type": "string" },
                "status": { "type": "string", "enum": ["pending", "active", "completed"], "readOnly": true },
                "signed_talent_at": { "type": "string", "format": "date-time", "readOnly": true },
                "signed_client_at": { "type": "string", "format": "date-time", "readOnly": true },
                "check_in": { "type": "string", "format": "date-time", "readOnly": true },
                "check_out": { "type": "string", "format": "date-time", "readOnly": true }
            },
            "required": ["talent_id"]
        },
        "report": {
            "type": "object",
            "properties": {
                "reporter": { "type": "string" },
                "category": { "type": "string" },
                "subject": { "type": "string" },
                "details": { "type": "string" },
                "contract_id": { "type": "string" }
            },
            "required": ["subject"]
        }
    }))
}
