//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "WEB 420 RESTful APIs",
        version = "1.0.0",
        description = "Composers, persons, teams and account signup/login over MongoDB"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_users::ApiDoc),
        (path = "/api/composers", api = domain_composers::ApiDoc),
        (path = "/api/persons", api = domain_persons::ApiDoc),
        (path = "/api/teams", api = domain_teams::ApiDoc)
    ),
    tags(
        (name = "Users", description = "Account signup and login"),
        (name = "Composers", description = "Composer management endpoints"),
        (name = "Persons", description = "Person records"),
        (name = "Teams", description = "Teams and their player rosters")
    )
)]
pub struct ApiDoc;
