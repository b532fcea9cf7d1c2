pub mod models;
pub mod routes;
pub mod service;
pub mod validation;

use async_trait::async_trait;
use axum::Router;
use library_http::auth::ApiKeySecret;
use library_kernel::{InitCtx, Migration, Module};

use routes::BooksState;
use service::BookService;

pub(crate) const MODULE_NAME: &str = "books";

/// `PageCount` and `ReleaseDate` are TEXT columns; SQLite's type coercion
/// round-trips the integer and the ISO date transparently.
pub(crate) const BOOKS_TABLE_DDL: &str = "\
    CREATE TABLE IF NOT EXISTS Books (
        Isbn TEXT PRIMARY KEY,
        Title TEXT NOT NULL,
        Author TEXT NOT NULL,
        ShortDescription TEXT NOT NULL,
        PageCount TEXT NOT NULL,
        ReleaseDate TEXT NOT NULL)";

/// Book catalog module: CRUD plus title search over the `Books` table.
pub struct BooksModule;

impl BooksModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self, ctx: &InitCtx<'_>) -> Router {
        let state = BooksState {
            books: BookService::new(ctx.db.clone()),
            api_key: ApiKeySecret::new(&ctx.settings.auth.api_key),
        };

        routes::router(state)
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_init",
            up: BOOKS_TABLE_DDL,
        }]
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new())
}
