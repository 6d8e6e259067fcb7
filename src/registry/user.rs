use super::{EndpointDef, HttpMethod, ParamDef, ParamKind};

pub(super) static ENDPOINTS: &[EndpointDef] = &[
    EndpointDef {
        name: "search_users",
        description: "Search users",
        method: HttpMethod::Get,
        path: "/api/v1/user/users/search/",
        params: &[
            ParamDef::query("search_q", ParamKind::String, "Name or email fragment"),
            ParamDef::query(
                "exclude_ids",
                ParamKind::String,
                "Comma-separated user IDs to leave out",
            ),
        ],
    },
    EndpointDef {
        name: "create_user",
        description: "Create a user",
        method: HttpMethod::Post,
        path: "/api/v1/user/users/",
        params: &[
            ParamDef::body("email", ParamKind::String, "Email address").required(),
            ParamDef::body("full_name", ParamKind::String, "Display name").required(),
            ParamDef::body("avatar_url", ParamKind::String, "Avatar image URL"),
            ParamDef::body("system_role", ParamKind::Integer, "System role code"),
            ParamDef::body("status", ParamKind::Integer, "Account status code"),
        ],
    },
];
