//! Cache key formats, `{system}:{collection}:{id}`.
//!
//! Keys that do not name a single row or document by id put an `@` segment after the
//! collection. Row ids and document ids never start with `@`, so a row with id `all` cannot
//! share a key with the whole table.

/// Row by primary key
pub fn record(table: &str, id: &str) -> String {
    format!("db:{}:{}", table, id)
}

/// Batch of rows by primary key
pub fn records(table: &str, ids: &[&str]) -> String {
    format!("db:{}:@many:{}", table, ids.join(","))
}

/// Every row of a table
pub fn all_records(table: &str) -> String {
    format!("db:{}:@all", table)
}

/// Row by name
pub fn record_by_name(table: &str, name: &str) -> String {
    format!("db:{}:@name:{}", table, name)
}

/// Prefix shared by every key for a table
pub fn table_prefix(table: &str) -> String {
    format!("db:{}:", table)
}

/// Document by `_id`
pub fn document(doc_type: &str, document_id: &str) -> String {
    format!("cms:{}:{}", doc_type, document_id)
}

/// Document found by reverse lookup on its external-id field
pub fn external_document(doc_type: &str, record_id: &str) -> String {
    format!("cms:{}:@external:{}", doc_type, record_id)
}

pub fn documents(doc_type: &str, document_ids: &[&str]) -> String {
    format!("cms:{}:@many:{}", doc_type, document_ids.join(","))
}

pub fn external_documents(doc_type: &str, record_ids: &[&str]) -> String {
    format!("cms:{}:@external-many:{}", doc_type, record_ids.join(","))
}

/// Prefix shared by every key for a document type
pub fn document_type_prefix(doc_type: &str) -> String {
    format!("cms:{}:", doc_type)
}
