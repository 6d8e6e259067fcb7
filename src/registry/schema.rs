use super::{EndpointDef, HttpMethod, ParamDef, ParamKind};

const SCHEMA_BODY: &[ParamDef] = &[
    ParamDef::body("name", ParamKind::String, "Schema name").required(),
    ParamDef::body("description", ParamKind::String, "Free-form description"),
    ParamDef::body("scope", ParamKind::Integer, "Scope identifier"),
    ParamDef::body(
        "json_content",
        ParamKind::Object,
        "Schema document as a JSON object",
    ),
    ParamDef::body("workspace", ParamKind::Integer, "Owning workspace ID"),
];

pub(super) static ENDPOINTS: &[EndpointDef] = &[
    EndpointDef {
        name: "list_schemas",
        description: "List schemas the user has access to",
        method: HttpMethod::Get,
        path: "/api/v1/schema/",
        params: &[
            ParamDef::query("search", ParamKind::String, "Text filter"),
            ParamDef::query("page", ParamKind::Integer, "Page number"),
            ParamDef::query("per_page", ParamKind::Integer, "Page size"),
            ParamDef::query(
                "workspaces",
                ParamKind::String,
                "Comma-separated workspace IDs",
            ),
        ],
    },
    EndpointDef {
        name: "create_schema",
        description: "Create a new schema. json_content should be a JSON object.",
        method: HttpMethod::Post,
        path: "/api/v1/schema/",
        params: SCHEMA_BODY,
    },
    EndpointDef {
        name: "get_schema_by_id",
        description: "Retrieve a schema by its ID",
        method: HttpMethod::Get,
        path: "/api/v1/schema/{id}/",
        params: &[ParamDef::path("id", ParamKind::Integer, "Schema ID")],
    },
    EndpointDef {
        name: "update_schema",
        description: "Update a schema (full update). json_content should be a JSON object.",
        method: HttpMethod::Put,
        path: "/api/v1/schema/{id}/",
        params: &[
            ParamDef::path("id", ParamKind::Integer, "Schema ID"),
            ParamDef::body("name", ParamKind::String, "Schema name").required(),
            ParamDef::body("description", ParamKind::String, "Free-form description"),
            ParamDef::body("scope", ParamKind::Integer, "Scope identifier"),
            ParamDef::body(
                "json_content",
                ParamKind::Object,
                "Schema document as a JSON object",
            ),
            ParamDef::body("workspace", ParamKind::Integer, "Owning workspace ID"),
        ],
    },
    EndpointDef {
        name: "patch_schema",
        description: "Partially update a schema. json_content should be a JSON object.",
        method: HttpMethod::Patch,
        path: "/api/v1/schema/{id}/",
        params: &[
            ParamDef::path("id", ParamKind::Integer, "Schema ID"),
            ParamDef::body("name", ParamKind::String, "Schema name"),
            ParamDef::body("description", ParamKind::String, "Free-form description"),
            ParamDef::body("scope", ParamKind::Integer, "Scope identifier"),
            ParamDef::body(
                "json_content",
                ParamKind::Object,
                "Schema document as a JSON object",
            ),
            ParamDef::body("workspace", ParamKind::Integer, "Owning workspace ID"),
        ],
    },
    EndpointDef {
        name: "get_schema_by_slug",
        description: "Retrieve a schema by its slug",
        method: HttpMethod::Get,
        path: "/api/v1/schema/slug/{slug}/",
        params: &[ParamDef::path("slug", ParamKind::String, "Schema slug")],
    },
];
