//! Endpoint template registry.
//!
//! A fixed mapping from logical operations to URL path templates,
//! parameterized by API version and, for record operations, object type,
//! record id, and fields. Resolution is pure string substitution; nothing
//! is sanitized or escaped beyond the query/search handling noted below.

/// A logical REST endpoint, ready to be resolved against an API version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// List of available API versions. The only path without a version
    /// segment.
    Versions,
    /// Org usage limits.
    Limits,
    /// List of resources available under a version.
    Resources,
    /// List of object types.
    SObjects,
    /// Object metadata; also the create target for POSTs.
    SObject { object: &'a str },
    /// Full field/describe metadata for an object.
    Describe { object: &'a str },
    /// A single record by id.
    Record { object: &'a str, id: &'a str },
    /// A partial record restricted to the given fields.
    RecordFields {
        object: &'a str,
        id: &'a str,
        fields: &'a [&'a str],
    },
    /// Record(s) addressed by an external-id field value. The value is
    /// URL-encoded; the field name is substituted verbatim.
    RecordByExternalId {
        object: &'a str,
        field: &'a str,
        value: &'a str,
    },
    /// A SOQL query. Spaces are replaced with `+` before substitution.
    Query { soql: &'a str },
    /// A SOSL search. The search text is URL-encoded.
    Search { sosl: &'a str },
}

impl Endpoint<'_> {
    /// Resolve this endpoint to a path under the instance URL.
    pub fn resolve(&self, version: &str) -> String {
        match self {
            Endpoint::Versions => "/services/data/".to_string(),
            Endpoint::Limits => format!("/services/data/v{version}/limits/"),
            Endpoint::Resources => format!("/services/data/v{version}/"),
            Endpoint::SObjects => format!("/services/data/v{version}/sobjects/"),
            Endpoint::SObject { object } => {
                format!("/services/data/v{version}/sobjects/{object}/")
            }
            Endpoint::Describe { object } => {
                format!("/services/data/v{version}/sobjects/{object}/describe/")
            }
            Endpoint::Record { object, id } => {
                format!("/services/data/v{version}/sobjects/{object}/{id}")
            }
            Endpoint::RecordFields { object, id, fields } => {
                format!(
                    "/services/data/v{version}/sobjects/{object}/{id}?fields={}",
                    fields.join(",")
                )
            }
            Endpoint::RecordByExternalId {
                object,
                field,
                value,
            } => {
                format!(
                    "/services/data/v{version}/sobjects/{object}/{field}/{}",
                    urlencoding::encode(value)
                )
            }
            Endpoint::Query { soql } => {
                format!(
                    "/services/data/v{version}/query?q={}",
                    soql.replace(' ', "+")
                )
            }
            Endpoint::Search { sosl } => {
                format!(
                    "/services/data/v{version}/search?q={}",
                    urlencoding::encode(sosl)
                )
            }
        }
    }
}
