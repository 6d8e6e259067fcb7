use super::{EndpointDef, HttpMethod, ParamDef, ParamKind};

pub(super) static ENDPOINTS: &[EndpointDef] = &[
    EndpointDef {
        name: "create_draft_postman_collection",
        description: "Create a new draft postman collection",
        method: HttpMethod::Post,
        path: "/api/v1/schema/draft-postman-collection/",
        params: &[ParamDef::body(
            "content",
            ParamKind::String,
            "Postman collection content",
        )
        .required()],
    },
    EndpointDef {
        name: "list_draft_postman_collections",
        description: "List all draft postman collections created by the current user",
        method: HttpMethod::Get,
        path: "/api/v1/schema/draft-postman-collection/",
        params: &[],
    },
    // No trailing slash on this one; the backend routes it that way.
    EndpointDef {
        name: "get_draft_postman_collection_by_id",
        description: "Retrieve a draft postman collection by ID",
        method: HttpMethod::Get,
        path: "/api/v1/schema/draft-postman-collection/{id}",
        params: &[ParamDef::path(
            "id",
            ParamKind::Integer,
            "Draft collection ID",
        )],
    },
];
