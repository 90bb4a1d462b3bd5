use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post},
    Router,
};
use domain::services::{MediaStore, MediaUrls};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, security_headers_middleware, submission_rate_limit,
    trace_id, RateLimiterState,
};
use crate::routes::{
    albums, books, contact, events, health, hero, links, news, newsletter, notices, publications,
    site_text, uploads, videos,
};
use crate::services::LocalMediaStore;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    /// Turns stored media paths into absolute URLs.
    pub media: MediaUrls,
    pub media_store: Arc<dyn MediaStore>,
    pub rate_limiter: Option<Arc<RateLimiterState>>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    // Submissions are only limited when submissions_per_minute > 0
    let rate_limiter = if config.security.submissions_per_minute > 0 {
        Some(Arc::new(RateLimiterState::new(
            config.security.submissions_per_minute,
        )))
    } else {
        None
    };

    let state = AppState {
        pool,
        config: config.clone(),
        media: MediaUrls::new(config.media.base_url.clone()),
        media_store: Arc::new(LocalMediaStore::new(&config.media.root)),
        rate_limiter,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let rate_limited = || middleware::from_fn_with_state(state.clone(), submission_rate_limit);

    let content_routes = Router::new()
        // News
        .route("/api/news", get(news::list_news).post(news::create_news))
        .route("/api/news/featured", get(news::featured_news))
        .route(
            "/api/news/:key",
            get(news::get_news)
                .put(news::update_news)
                .patch(news::update_news)
                .delete(news::delete_news),
        )
        .route("/api/news/:key/images", post(news::add_news_image))
        .route(
            "/api/news/:key/images/:image_id",
            delete(news::delete_news_image),
        )
        // Notices
        .route(
            "/api/notices",
            get(notices::list_notices).post(notices::create_notice),
        )
        .route(
            "/api/notices/:id",
            get(notices::get_notice)
                .put(notices::update_notice)
                .patch(notices::update_notice)
                .delete(notices::delete_notice),
        )
        .route("/api/notices/:id/images", post(notices::add_notice_image))
        .route(
            "/api/notices/:id/images/:image_id",
            delete(notices::delete_notice_image),
        )
        // Downloads
        .route(
            "/api/publications",
            get(publications::list_publications).post(publications::create_publication),
        )
        .route(
            "/api/publications/:id",
            get(publications::get_publication)
                .put(publications::update_publication)
                .patch(publications::update_publication)
                .delete(publications::delete_publication),
        )
        .route(
            "/api/download-categories",
            get(publications::list_download_categories)
                .post(publications::create_download_category),
        )
        .route(
            "/api/download-categories/:id",
            get(publications::get_download_category)
                .put(publications::update_download_category)
                .patch(publications::update_download_category)
                .delete(publications::delete_download_category),
        )
        // Videos
        .route(
            "/api/videos",
            get(videos::list_videos).post(videos::create_video),
        )
        .route(
            "/api/videos/:id",
            get(videos::get_video)
                .put(videos::update_video)
                .patch(videos::update_video)
                .delete(videos::delete_video),
        )
        // Albums and gallery
        .route(
            "/api/albums",
            get(albums::list_albums).post(albums::create_album),
        )
        .route(
            "/api/albums/:id",
            get(albums::get_album)
                .put(albums::update_album)
                .patch(albums::update_album)
                .delete(albums::delete_album),
        )
        .route(
            "/api/gallery",
            get(albums::list_gallery_images).post(albums::create_gallery_image),
        )
        .route(
            "/api/gallery/:id",
            get(albums::get_gallery_image)
                .put(albums::update_gallery_image)
                .patch(albums::update_gallery_image)
                .delete(albums::delete_gallery_image),
        )
        // Events and stats
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/api/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .patch(events::update_event)
                .delete(events::delete_event),
        )
        .route("/api/stats", get(events::list_stats).post(events::create_stat))
        .route(
            "/api/stats/:id",
            get(events::get_stat)
                .put(events::update_stat)
                .patch(events::update_stat)
                .delete(events::delete_stat),
        )
        // Links
        .route("/api/links", get(links::list_links).post(links::create_link))
        .route(
            "/api/links/:id",
            get(links::get_link)
                .put(links::update_link)
                .patch(links::update_link)
                .delete(links::delete_link),
        )
        .route(
            "/api/footer-links",
            get(links::list_footer_links).post(links::create_footer_link),
        )
        .route(
            "/api/footer-links/:id",
            get(links::get_footer_link)
                .put(links::update_footer_link)
                .patch(links::update_footer_link)
                .delete(links::delete_footer_link),
        )
        // Hero
        .route("/api/slides", get(hero::list_slides).post(hero::create_slide))
        .route(
            "/api/slides/:id",
            get(hero::get_slide)
                .put(hero::update_slide)
                .patch(hero::update_slide)
                .delete(hero::delete_slide),
        )
        .route(
            "/api/hero-intro",
            get(hero::list_hero_intros).post(hero::create_hero_intro),
        )
        .route(
            "/api/hero-intro/:id",
            get(hero::get_hero_intro)
                .put(hero::update_hero_intro)
                .patch(hero::update_hero_intro)
                .delete(hero::delete_hero_intro),
        )
        // Site text
        .route(
            "/api/about-sections",
            get(site_text::list_about_sections).post(site_text::create_about_section),
        )
        .route(
            "/api/about-sections/:id",
            get(site_text::get_about_section)
                .put(site_text::update_about_section)
                .patch(site_text::update_about_section)
                .delete(site_text::delete_about_section),
        )
        .route(
            "/api/text-snippets",
            get(site_text::list_text_snippets).post(site_text::create_text_snippet),
        )
        .route(
            "/api/text-snippets/:id",
            get(site_text::get_text_snippet)
                .put(site_text::update_text_snippet)
                .patch(site_text::update_text_snippet)
                .delete(site_text::delete_text_snippet),
        )
        .route(
            "/api/footer-about",
            get(site_text::list_footer_abouts).post(site_text::create_footer_about),
        )
        .route(
            "/api/footer-about/:id",
            get(site_text::get_footer_about)
                .put(site_text::update_footer_about)
                .patch(site_text::update_footer_about)
                .delete(site_text::delete_footer_about),
        )
        // Library
        .route(
            "/api/book-categories",
            get(books::list_book_categories).post(books::create_book_category),
        )
        .route(
            "/api/book-categories/:id",
            get(books::get_book_category)
                .put(books::update_book_category)
                .patch(books::update_book_category)
                .delete(books::delete_book_category),
        )
        .route("/api/books", get(books::list_books).post(books::create_book))
        .route("/api/books/latest", get(books::latest_books))
        .route(
            "/api/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .patch(books::update_book)
                .delete(books::delete_book),
        )
        .route("/api/books/:id/images", post(books::add_book_image))
        .route(
            "/api/books/:id/images/:image_id",
            delete(books::delete_book_image),
        )
        // Contact details
        .route(
            "/api/contact-info",
            get(contact::list_contact_infos).post(contact::create_contact_info),
        )
        .route(
            "/api/contact-info/:id",
            get(contact::get_contact_info)
                .put(contact::update_contact_info)
                .patch(contact::update_contact_info)
                .delete(contact::delete_contact_info),
        )
        // Public submissions: only POST is rate limited
        .route(
            "/api/newsletter",
            post(newsletter::subscribe)
                .route_layer(rate_limited())
                .get(newsletter::list_subscriptions),
        )
        .route(
            "/api/contact",
            post(contact::create_contact_message)
                .route_layer(rate_limited())
                .get(contact::list_contact_messages),
        )
        .layer(DefaultBodyLimit::max(config.server.max_body_size));

    let upload_routes = Router::new()
        .route("/api/uploads/*folder", post(uploads::upload_media))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.media.max_upload_bytes));

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    let mut router = Router::new()
        .merge(public_routes)
        .merge(content_routes)
        .merge(upload_routes);

    if config.media.serve {
        router = router.nest_service("/media", ServeDir::new(&config.media.root));
    }

    router
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
