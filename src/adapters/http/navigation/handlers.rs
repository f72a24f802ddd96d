//! HTTP handlers for the navigation endpoints.
//!
//! Client storage travels in cookies: the request's `Cookie` header is the
//! storage snapshot and logout answers with expiring `Set-Cookie` headers.

use axum::http::header::LOCATION;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::adapters::storage::CookieStorage;
use crate::application::handlers::{LogoutHandler, RenderNavigationHandler};

/// GET /navigation
pub async fn get_navigation(headers: HeaderMap) -> Html<String> {
    let storage = CookieStorage::from_headers(&headers);
    Html(RenderNavigationHandler::new().handle(&storage))
}

/// POST /logout
pub async fn post_logout(headers: HeaderMap) -> Response {
    let mut storage = CookieStorage::from_headers(&headers);
    let outcome = LogoutHandler::new().handle(&mut storage);

    let mut response = StatusCode::SEE_OTHER.into_response();
    response
        .headers_mut()
        .insert(LOCATION, HeaderValue::from_static(outcome.redirect_to));
    storage.write_to(response.headers_mut());
    response
}
