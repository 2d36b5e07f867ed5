//! Shared test schemas.

#![allow(dead_code)]

use viewdef_core::{RecordSchema, SchemaField};

/// `accounts` with two string columns between the system fields.
pub fn accounts_schema() -> RecordSchema {
    RecordSchema::new("MyApp.Account", "accounts").with_system_fields(vec![
        SchemaField::string("description"),
        SchemaField::string("number"),
    ])
}

/// `account_receivables` with a string and a float column.
pub fn receivables_schema() -> RecordSchema {
    RecordSchema::new("MyApp.Billing.AccountReceivable", "account_receivables")
        .with_system_fields(vec![
            SchemaField::string("description"),
            SchemaField::float("amount"),
        ])
}

/// One field of every known primitive type plus an unmapped one.
pub fn every_type_schema() -> RecordSchema {
    RecordSchema::from_json(
        r#"{
            "type_name": "inventory::StockItem",
            "source": "stock_items",
            "fields": [
                { "name": "id", "type": "id" },
                { "name": "quantity", "type": "integer" },
                { "name": "weight", "type": "float" },
                { "name": "unit_price", "type": "decimal" },
                { "name": "sku", "type": "string" },
                { "name": "thumbnail", "type": "binary" },
                { "name": "external_ref", "type": "binary_id" },
                { "name": "received_at", "type": "naive_datetime" },
                { "name": "audited_at", "type": "utc_datetime_usec" },
                { "name": "pickup_time", "type": "time" },
                { "name": "batch", "type": "uuid" },
                { "name": "active", "type": "boolean" },
                { "name": "inserted_at", "type": "naive_datetime" },
                { "name": "updated_at", "type": "naive_datetime" }
            ]
        }"#,
    )
    .expect("fixture schema parses")
}
