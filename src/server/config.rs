//! HTTP server configuration derived from the environment.

use std::net::SocketAddr;
use std::{env, fs, io};

use actix_web::cookie::Key;
use tracing::warn;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) session_key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) demo_data: bool,
}

impl ServerConfig {
    /// Construct a configuration from explicit values.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, session_key: Key, cookie_secure: bool, demo_data: bool)
        -> Self {
        Self {
            bind_addr,
            session_key,
            cookie_secure,
            demo_data,
        }
    }

    /// Read configuration from the environment.
    ///
    /// - `HOSPITAL_BIND`: listen address, default `0.0.0.0:8080`.
    /// - `SESSION_KEY_FILE`: path to the session key material; in debug
    ///   builds (or with `SESSION_ALLOW_EPHEMERAL=1`) a missing file falls
    ///   back to a generated throwaway key.
    /// - `SESSION_COOKIE_SECURE`: `0` disables the `Secure` cookie flag.
    /// - `HOSPITAL_DEMO_DATA`: `1` seeds the in-memory store with the demo
    ///   dashboard world.
    pub fn from_env() -> io::Result<Self> {
        let bind_addr = env::var("HOSPITAL_BIND")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_owned())
            .parse::<SocketAddr>()
            .map_err(|e| io::Error::other(format!("invalid HOSPITAL_BIND: {e}")))?;

        let key_path =
            env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
        let session_key = match fs::read(&key_path) {
            Ok(bytes) => Key::derive_from(&bytes),
            Err(e) => {
                let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
                if cfg!(debug_assertions) || allow_dev {
                    warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                    Key::generate()
                } else {
                    return Err(io::Error::other(format!(
                        "failed to read session key at {key_path}: {e}"
                    )));
                }
            }
        };

        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|v| v != "0")
            .unwrap_or(true);
        let demo_data = env::var("HOSPITAL_DEMO_DATA")
            .map(|v| v == "1")
            .unwrap_or(false);

        Ok(Self::new(bind_addr, session_key, cookie_secure, demo_data))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
