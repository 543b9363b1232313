use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of a record; `id` is ignored on create and replaced by the path id on update.
#[derive(ToSchema)]
pub struct RecordDoc {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::records::list,
        crate::routes::records::get,
        crate::routes::records::create,
        crate::routes::records::update,
        crate::routes::records::delete,
    ),
    components(
        schemas(
            HealthResponse,
            RecordDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "records")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_record_routes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/records"));
        assert!(paths.contains_key("/records/{id}"));
        assert!(paths.contains_key("/health"));
        assert!(doc["components"]["schemas"].get("RecordDoc").is_some());
    }
}
