// OpenAPI specification generation
//
// Used by the server for Swagger UI and by the export-openapi binary.

use crate::api;
use crate::api::ListResponse;
use crate::auth;
use east_store_core::{AdminIdentity, Artwork, ContentSetting, SizeCardTemplate};
use utoipa::OpenApi;

/// OpenAPI documentation for the East Store API
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::routes::check_session,
        auth::routes::login,
        auth::routes::logout,
        api::admin::get_overview,
        api::artworks::create_artwork,
        api::artworks::list_artworks,
        api::artworks::get_artwork,
        api::artworks::update_artwork,
        api::artworks::delete_artwork,
        api::settings::list_settings,
        api::settings::get_setting,
        api::settings::put_setting,
        api::settings::delete_setting,
        api::size_cards::create_size_card,
        api::size_cards::list_size_cards,
        api::size_cards::get_size_card,
        api::size_cards::update_size_card,
        api::size_cards::delete_size_card,
    ),
    components(
        schemas(
            AdminIdentity,
            auth::LoginRequest, auth::AuthCheckResponse,
            api::admin::AdminOverview,
            Artwork,
            api::artworks::CreateArtworkRequest, api::artworks::UpdateArtworkRequest,
            ContentSetting,
            api::settings::PutSettingRequest,
            SizeCardTemplate,
            api::size_cards::CreateSizeCardRequest, api::size_cards::UpdateSizeCardRequest,
            api::ErrorResponse,
            ListResponse<Artwork>,
            ListResponse<ContentSetting>,
            ListResponse<SizeCardTemplate>,
        )
    ),
    tags(
        (name = "auth", description = "Admin session endpoints"),
        (name = "admin", description = "Admin dashboard (requires the session cookie)"),
        (name = "artworks", description = "Artwork gallery management"),
        (name = "settings", description = "Site content settings"),
        (name = "size-cards", description = "Size-card template management")
    ),
    info(
        title = "East Store API",
        version = "0.1.0",
        description = "Catalog and admin API for the East Store site",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI spec as a pretty-printed JSON string
    pub fn to_json() -> Result<String, serde_json::Error> {
        Self::openapi().to_pretty_json()
    }
}
