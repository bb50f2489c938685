#![allow(dead_code)]

use docnode::{Schema, Setting};
use std::sync::Arc;

/// A small OpenAPI 2.0 subset used across the integration tests.
pub fn open_api_schema() -> Arc<Schema> {
    let mut schema = Schema::new();
    schema
        .declare("Root", "swagger", Setting::scalar().with_default("2.0"))
        .declare("Root", "info", Setting::node("Info"))
        .declare("Root", "host", Setting::scalar().with_default("localhost:3000"))
        .declare("Root", "basePath", Setting::scalar())
        .declare("Root", "paths", Setting::map_of("PathItem").with_default(serde_json::json!({})))
        .declare("Root", "definitions", Setting::map_of("Schema"))
        .declare("Root", "tags", Setting::list_of("Tag"));

    schema
        .declare("Info", "title", Setting::scalar().required())
        .declare("Info", "description", Setting::scalar())
        .declare("Info", "version", Setting::scalar().with_default("1.0"));

    schema
        .declare("PathItem", "get", Setting::node("Operation"))
        .declare("PathItem", "post", Setting::node("Operation"))
        .declare("PathItem", "parameters", Setting::list_of("Parameter"));

    schema
        .declare("Operation", "summary", Setting::scalar())
        .declare("Operation", "tags", Setting::scalar())
        .declare("Operation", "parameters", Setting::list_of("Parameter"))
        .declare("Operation", "responses", Setting::map_of("Response"));

    schema
        .declare("Parameter", "name", Setting::scalar().required())
        .declare("Parameter", "in", Setting::scalar().required())
        .declare("Parameter", "type", Setting::scalar())
        .declare("Parameter", "schema", Setting::node("Schema"));

    schema
        .declare("Response", "description", Setting::scalar().required())
        .declare("Response", "schema", Setting::node("Schema"));

    schema
        .declare("Schema", "type", Setting::scalar())
        .declare("Schema", "properties", Setting::map_of("Schema"))
        .declare("Schema", "items", Setting::node("Schema"))
        .declare("Schema", "required", Setting::scalar());

    schema
        .declare("Tag", "name", Setting::scalar().required())
        .declare("Tag", "description", Setting::scalar());

    Arc::new(schema)
}

pub fn orders_document() -> serde_json::Value {
    serde_json::json!({
        "swagger": "2.0",
        "info": {"title": "Example API", "description": "Orders", "version": "2.1"},
        "host": "api.example.com",
        "paths": {
            "/orders": {
                "get": {
                    "summary": "List orders",
                    "tags": ["Orders"],
                    "responses": {
                        "200": {
                            "description": "OK",
                            "schema": {"type": "array", "items": {"$ref": "#/definitions/Order"}}
                        }
                    }
                },
                "post": {
                    "summary": "Create order",
                    "parameters": [
                        {"name": "body", "in": "body", "schema": {"$ref": "#/definitions/Order"}}
                    ],
                    "responses": {"201": {"description": "Created"}}
                }
            }
        },
        "definitions": {
            "Order": {
                "type": "object",
                "required": ["name"],
                "properties": {
                    "name": {"type": "string"},
                    "amount": {"type": "number"}
                }
            }
        },
        "tags": [{"name": "Orders", "description": "Orders resource"}]
    })
}
