use super::dto::ToolListResponse;
use super::routes;
use crate::application::tooling::ToolDescriptor;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "station-sampler", description = "Tool invocation and development routes"),
    paths(
        routes::tools::list_tools_handler,
        routes::tools::invoke_tool_handler,
        routes::dev::stations_handler,
        routes::dev::geocode_handler
    ),
    components(schemas(ToolListResponse, ToolDescriptor)),
    tags(
        (name = "tools", description = "Registered tools and their invocation"),
        (name = "dev", description = "Development harness with environment secrets")
    )
)]
pub struct ApiDoc;
