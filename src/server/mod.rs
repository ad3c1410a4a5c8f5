//! HTTP server: routing, locale cookies, static files and graceful shutdown

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::Html,
    routing::get,
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tower_http::{
    services::ServeDir, set_header::SetResponseHeaderLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::content::{
    build_index, is_valid_slug, FileReader, FrontMatter, MarkdownRenderer, PostReader,
};
use crate::error::PageError;
use crate::i18n::{Lang, LANG_COOKIE_MAX_AGE, LANG_KEY};
use crate::pages;
use crate::templates::PageTemplate;
use crate::Blog;

/// Shared, read-only state handed to every request
pub struct AppState {
    template: PageTemplate,
    renderer: MarkdownRenderer,
    reader: Arc<dyn PostReader>,
    posts_dir: PathBuf,
}

impl AppState {
    pub fn new(
        template: PageTemplate,
        renderer: MarkdownRenderer,
        reader: Arc<dyn PostReader>,
        posts_dir: PathBuf,
    ) -> Self {
        Self {
            template,
            renderer,
            reader,
            posts_dir,
        }
    }

    /// Build the state for a blog, failing if the page template cannot be loaded
    pub fn from_blog(blog: &Blog) -> Result<Self> {
        let template = PageTemplate::load(&blog.template_path)?;
        let renderer = MarkdownRenderer::new(&blog.config.highlight_theme)?;
        let reader = Arc::new(FileReader::new(&blog.posts_dir));

        Ok(Self::new(
            template,
            renderer,
            reader,
            blog.posts_dir.clone(),
        ))
    }
}

/// Raw query pairs; a repeated or odd `lang` must still resolve a locale
type QueryPairs = Vec<(String, String)>;

/// Build the application router
pub fn router(blog: &Blog, state: Arc<AppState>) -> Router {
    let pages = Router::new()
        .route("/", get(home_handler))
        .route("/contact", get(contact_handler))
        // Captures the whole remainder so `/posts/../x` reaches slug validation
        .route("/posts/*slug", get(post_handler))
        .route("/posts/", get(empty_slug_handler))
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    Router::new()
        .merge(pages)
        .nest_service("/static", ServeDir::new(&blog.static_dir))
        .nest_service("/images", ServeDir::new(&blog.images_dir))
        .fallback(not_found_handler)
        .layer(TimeoutLayer::new(blog.config.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// Start the server and run until a shutdown signal arrives
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(AppState::from_blog(blog)?);
    let app = router(blog, state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Blog running at http://localhost:{}", port);

    serve_until_shutdown(
        listener,
        app,
        blog.config.shutdown_grace(),
        shutdown_signal(),
    )
    .await
}

/// Serve until `signal` resolves, then give in-flight requests `grace` to finish
async fn serve_until_shutdown<F>(
    listener: tokio::net::TcpListener,
    app: Router,
    grace: Duration,
    signal: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (stopping_tx, stopping_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            tracing::info!("Shutting down gracefully...");
            let _ = stopping_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    let grace_elapsed = async move {
        match stopping_rx.await {
            Ok(()) => tokio::time::sleep(grace).await,
            // The server finished on its own
            Err(_) => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        result = &mut server => result?,
        _ = grace_elapsed => {
            tracing::warn!(
                "Shutdown grace period of {:?} elapsed, dropping open connections",
                grace
            );
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Resolve the locale and remember it in a year-long cookie
fn resolve_lang(query: &[(String, String)], jar: CookieJar) -> (Lang, CookieJar) {
    let requested = query
        .iter()
        .find(|(key, _)| key == LANG_KEY)
        .map(|(_, value)| value.as_str());
    let lang = Lang::resolve(requested, jar.get(LANG_KEY).map(|cookie| cookie.value()));

    let cookie = Cookie::build((LANG_KEY, lang.code()))
        .path("/")
        .max_age(time::Duration::seconds(LANG_COOKIE_MAX_AGE))
        .same_site(SameSite::Lax)
        .http_only(false);

    (lang, jar.add(cookie))
}

/// Run filesystem work off the async workers
async fn blocking<T, F>(f: F) -> Result<T, PageError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| PageError::Render(format!("blocking task failed: {}", e)))
}

/// Home page listing posts for the resolved locale
async fn home_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QueryPairs>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), PageError> {
    let (lang, jar) = resolve_lang(&query, jar);

    let posts_dir = state.posts_dir.clone();
    let posts = blocking(move || build_index(&posts_dir, lang))
        .await?
        .map_err(PageError::ListPosts)?;

    let page = pages::home_page(lang, &posts);
    let html = state.template.render(&page)?;

    Ok((jar, Html(html)))
}

/// About/contact page in the resolved locale
async fn contact_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QueryPairs>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), PageError> {
    let (lang, jar) = resolve_lang(&query, jar);

    let page = pages::contact_page(lang);
    let html = state.template.render(&page)?;

    Ok((jar, Html(html)))
}

/// Individual post
async fn post_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Html<String>, PageError> {
    if !is_valid_slug(&slug) {
        return Err(PageError::InvalidSlug);
    }

    let reader = Arc::clone(&state.reader);
    let read_slug = slug.clone();
    let raw = blocking(move || reader.read(&read_slug)).await??;

    let (fm, body) = FrontMatter::parse(&raw);
    let body_html = state.renderer.render(body)?;

    let page = pages::post_page(&slug, &fm, &body_html);
    let html = state.template.render(&page)?;

    Ok(Html(html))
}

/// `/posts/` with nothing after it
async fn empty_slug_handler() -> PageError {
    PageError::InvalidSlug
}

async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
