//! Explicit session credentials.
//!
//! A [`Session`] holds the cookies the backend hands out. It starts empty,
//! picks up the session cookie from the signup or login response, is sent
//! with every later request, and is cleared on logout.
//!
//! Cookies live in a [`cookie_store::CookieStore`] behind an `RwLock`, so a
//! single session can be shared by concurrent calls. Domain, path, and expiry
//! rules are applied both when a cookie is stored and when a request picks
//! its cookies.

use crate::executor::ClientError;
use cookie::Cookie;
use cookie_store::CookieStore;
use log::{trace, warn};
use reqwest::header::{HeaderMap, SET_COOKIE};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::RwLock;
use url::Url;

/// Cookie credentials attached to every request.
#[derive(Debug, Default)]
pub struct Session {
    store: RwLock<CookieStore>,
}

impl Session {
    /// Creates an empty, unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session from known cookie pairs, scoped to the host of
    /// `url` with path `/`.
    pub fn from_cookies<I, K, V>(url: &Url, cookies: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut store = CookieStore::default();
        for (name, value) in cookies {
            let pair: (String, String) = (name.into(), value.into());
            let cookie = Cookie::build(pair).path("/").build();
            if let Err(e) = store.insert_raw(&cookie, url) {
                warn!("Cannot store cookie `{}` for {}: {}", cookie.name(), url, e);
            }
        }

        Self {
            store: RwLock::new(store),
        }
    }

    /// Returns `true` if no unexpired cookies are held.
    pub fn is_empty(&self) -> bool {
        self.store
            .read()
            .map(|store| store.iter_unexpired().next().is_none())
            .unwrap_or(true)
    }

    /// Gets the value of an unexpired cookie by name, whatever its scope.
    pub fn cookie(&self, name: &str) -> Option<String> {
        let store = self.store.read().ok()?;
        let value = store
            .iter_unexpired()
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value().to_string());
        value
    }

    /// Copies the unexpired cookies out of the session as name/value pairs.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.store
            .read()
            .map(|store| {
                store
                    .iter_unexpired()
                    .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Renders the `Cookie` request header for `url`, or `None` when no
    /// stored cookie matches it.
    pub fn cookie_header(&self, url: &Url) -> Option<String> {
        let header = self
            .store
            .read()
            .ok()?
            .get_request_values(url)
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ");

        if header.is_empty() {
            return None;
        }
        Some(header)
    }

    /// Applies one `Set-Cookie` header value received from `url`.
    ///
    /// An already expired cookie removes the stored one. Unparseable headers
    /// are ignored.
    pub fn store_set_cookie(&self, header: &str, url: &Url) {
        self.store_cookies(std::iter::once(header), url);
    }

    /// Applies every `Set-Cookie` header of a response received from `url`.
    pub fn store_response_cookies(&self, headers: &HeaderMap, url: &Url) {
        self.store_cookies(
            headers
                .get_all(SET_COOKIE)
                .iter()
                .filter_map(|value| value.to_str().ok()),
            url,
        );
    }

    fn store_cookies<'a>(&self, headers: impl Iterator<Item = &'a str>, url: &Url) {
        let cookies = headers.filter_map(|header| match Cookie::parse(header.to_owned()) {
            Ok(cookie) => {
                trace!("Session cookie `{}` received from {}", cookie.name(), url);
                Some(cookie)
            }
            Err(e) => {
                trace!("Ignoring malformed Set-Cookie header: {}", e);
                None
            }
        });

        match self.store.write() {
            Ok(mut store) => store.store_response_cookies(cookies, url),
            Err(_) => warn!("Session cookie store is poisoned; cookies from {} dropped", url),
        }
    }

    /// Drops all cookies.
    pub fn clear(&self) {
        if let Ok(mut store) = self.store.write() {
            store.clear();
        }
    }

    /// Writes the cookies to a JSON file, including session cookies that
    /// carry no expiry.
    pub fn save(&self, path: &Path) -> Result<(), ClientError> {
        let store = self
            .store
            .read()
            .map_err(|_| ClientError::SessionStore("cookie store lock poisoned".to_string()))?;

        let mut writer = BufWriter::new(File::create(path)?);
        cookie_store::serde::json::save_incl_expired_and_nonpersistent(&store, &mut writer)
            .map_err(|e| ClientError::SessionStore(e.to_string()))?;
        writer.flush()?;
        Ok(())
    }

    /// Reads cookies written by [`save`](Self::save). A missing file yields
    /// an empty session.
    pub fn load(path: &Path) -> Result<Self, ClientError> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let reader = BufReader::new(File::open(path)?);
        let store = cookie_store::serde::json::load_all(reader)
            .map_err(|e| ClientError::SessionStore(e.to_string()))?;
        Ok(Self {
            store: RwLock::new(store),
        })
    }
}
