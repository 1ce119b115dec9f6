use serde::Serialize;
use utoipa::openapi::content::Content;
use utoipa::openapi::path::{OperationBuilder, ParameterBuilder, ParameterIn, PathItem, PathItemType};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::response::Response;
use utoipa::openapi::schema::{ObjectBuilder, Ref, Schema, SchemaType};
use utoipa::openapi::{RefOr, Required};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorBody { pub error: String, pub message: Option<String> }

#[derive(ToSchema)]
pub struct ProviderDoc {
    pub name: String,
    pub slug: String,
    pub asn: Option<i64>,
    pub account: Option<String>,
    pub portal_url: Option<String>,
    pub noc_contact: Option<String>,
    pub admin_contact: Option<String>,
    pub comments: Option<String>,
}

#[derive(ToSchema)]
pub struct CircuitTypeDoc { pub name: String, pub slug: String }

#[derive(ToSchema)]
pub struct SiteDoc {
    pub name: String,
    pub slug: String,
    pub facility: Option<String>,
    pub comments: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CircuitDoc {
    pub cid: String,
    /// Provider id
    pub provider: i32,
    /// Circuit type id
    #[serde(rename = "type")]
    pub circuit_type: i32,
    #[schema(example = "2016-02-23")]
    pub install_date: Option<String>,
    /// Kbps
    pub commit_rate: Option<i32>,
    pub description: Option<String>,
    pub comments: Option<String>,
}

#[derive(ToSchema)]
pub struct CircuitTerminationDoc {
    /// Circuit id
    pub circuit: i32,
    #[schema(example = "A")]
    pub term_side: String,
    /// Site id
    pub site: i32,
    /// Kbps
    pub port_speed: i32,
    pub upstream_speed: Option<i32>,
    pub xconnect_id: Option<String>,
    pub pp_info: Option<String>,
}

/// `(url segment, tag, request schema)` for every mounted resource.
const RESOURCES: [(&str, &str, &str); 5] = [
    ("provider", "provider", "ProviderDoc"),
    ("circuittype", "circuit type", "CircuitTypeDoc"),
    ("circuit", "circuit", "CircuitDoc"),
    ("circuittermination", "circuit termination", "CircuitTerminationDoc"),
    ("site", "site", "SiteDoc"),
];

/// Adds the five CRUD operations of each resource; the handlers are generic
/// so they cannot carry `#[utoipa::path]` themselves.
struct ResourcePaths;

fn schema_content(schema: &str) -> Content {
    Content::new(Ref::from_schema_name(schema))
}

fn error_response(description: &str) -> Response {
    let mut res = Response::new(description);
    res.content.insert("application/json".into(), schema_content("ErrorBody"));
    res
}

fn operation(tag: &str, summary: String, id_param: bool) -> OperationBuilder {
    let mut op = OperationBuilder::new()
        .tag(tag)
        .summary(Some(summary))
        .response("401", error_response("Missing or invalid token"));
    if id_param {
        let id_schema = RefOr::T(Schema::Object(ObjectBuilder::new().schema_type(SchemaType::Integer).build()));
        op = op
            .parameter(
                ParameterBuilder::new()
                    .name("id")
                    .parameter_in(ParameterIn::Path)
                    .required(Required::True)
                    .schema(Some(id_schema)),
            )
            .response("404", error_response("No record with this id"));
    }
    op
}

impl Modify for ResourcePaths {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for (segment, tag, schema) in RESOURCES {
            let body = || {
                RequestBodyBuilder::new()
                    .content("application/json", schema_content(schema))
                    .content("application/x-www-form-urlencoded", schema_content(schema))
                    .required(Some(Required::True))
                    .build()
            };

            let mut collection = PathItem::new(
                PathItemType::Get,
                operation(tag, format!("List {tag} records"), false).response("200", Response::new("Paged records")),
            );
            collection.operations.insert(
                PathItemType::Post,
                operation(tag, format!("Create a {tag}"), false)
                    .request_body(Some(body()))
                    .response("201", Response::new("Created"))
                    .response("400", error_response("Validation failed"))
                    .response("403", error_response("Read-only token"))
                    .build(),
            );

            let mut item = PathItem::new(
                PathItemType::Get,
                operation(tag, format!("Get a {tag}"), true).response("200", Response::new("The record")),
            );
            item.operations.insert(
                PathItemType::Put,
                operation(tag, format!("Replace a {tag}"), true)
                    .request_body(Some(body()))
                    .response("200", Response::new("Updated"))
                    .response("400", error_response("Validation failed"))
                    .response("403", error_response("Read-only token"))
                    .build(),
            );
            item.operations.insert(
                PathItemType::Delete,
                operation(tag, format!("Delete a {tag}"), true)
                    .response("204", Response::new("Deleted"))
                    .response("403", error_response("Read-only token"))
                    .response("409", error_response("Still referenced"))
                    .build(),
            );

            openapi.paths.paths.insert(format!("/{segment}/"), collection);
            openapi.paths.paths.insert(format!("/{segment}/{{id}}/"), item);
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::openapi_json,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            ProviderDoc,
            CircuitTypeDoc,
            SiteDoc,
            CircuitDoc,
            CircuitTerminationDoc,
        )
    ),
    modifiers(&ResourcePaths),
    tags(
        (name = "health"),
        (name = "provider"),
        (name = "circuit type"),
        (name = "circuit"),
        (name = "circuit termination"),
        (name = "site")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_resource_path() {
        let doc = ApiDoc::openapi();
        for (segment, _, _) in RESOURCES {
            assert!(doc.paths.paths.contains_key(&format!("/{segment}/")), "{segment}");
            let item = &doc.paths.paths[&format!("/{segment}/{{id}}/")];
            assert!(item.operations.contains_key(&PathItemType::Delete));
        }
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
