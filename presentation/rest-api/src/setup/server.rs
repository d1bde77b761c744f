use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Cors,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;
use poem_openapi::error::{ContentTypeError, ParseRequestPayloadError};

use crate::api::error::invalid_body;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, config.cors, Some(addr.clone()));

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Assembles the routes, docs and middleware. `addr` is advertised as the
    /// server URL in the OpenAPI document.
    pub fn app(container: DependencyContainer, cors: Cors, addr: Option<String>) -> impl Endpoint {
        let mut api_service = OpenApiService::new(
            (
                container.health_api,
                container.grocery_item_api,
                container.category_api,
            ),
            "Grocery List API",
            env!("CARGO_PKG_VERSION"),
        );
        if let Some(addr) = addr {
            api_service = api_service.server(format!("http://{}", addr));
        }
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .catch_error(invalid_body::<ParseRequestPayloadError>)
            .catch_error(invalid_body::<ContentTypeError>)
            .with(cors)
            .with(Tracing)
    }
}
