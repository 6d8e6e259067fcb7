use super::{EndpointDef, HttpMethod, ParamDef, ParamKind};

pub(super) static ENDPOINTS: &[EndpointDef] = &[
    EndpointDef {
        name: "list_workspaces",
        description: "List workspaces the current user is a member of",
        method: HttpMethod::Get,
        path: "/api/v1/user/workspaces",
        params: &[],
    },
    EndpointDef {
        name: "create_workspace",
        description: "Create a workspace",
        method: HttpMethod::Post,
        path: "/api/v1/user/workspaces",
        params: &[
            ParamDef::body("name", ParamKind::String, "Workspace name").required(),
            ParamDef::body("description", ParamKind::String, "Free-form description"),
            ParamDef::body("hosts", ParamKind::String, "Allowed hosts"),
            ParamDef::body("members", ParamKind::String, "Member user IDs"),
        ],
    },
    EndpointDef {
        name: "get_workspace_by_id",
        description: "Retrieve a workspace by its ID",
        method: HttpMethod::Get,
        path: "/api/v1/user/workspaces/{id}",
        params: &[ParamDef::path("id", ParamKind::Integer, "Workspace ID")],
    },
    EndpointDef {
        name: "list_simple_workspaces",
        description: "List all workspaces (simple)",
        method: HttpMethod::Get,
        path: "/api/v1/user/workspaces/simple",
        params: &[],
    },
    // Same route as get_workspace_by_id; the backend's detail view already
    // embeds members.
    EndpointDef {
        name: "get_workspace_with_members",
        description: "Retrieve a workspace by its ID (with members)",
        method: HttpMethod::Get,
        path: "/api/v1/user/workspaces/{id}",
        params: &[ParamDef::path("id", ParamKind::Integer, "Workspace ID")],
    },
];
