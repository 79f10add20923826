use std::{env, io::Write};

use log::*;
use obk_common::Secret;
use rand::{distributions::Alphanumeric, thread_rng, Rng};
use tempfile::NamedTempFile;

const DEFAULT_OBK_HOST: &str = "127.0.0.1";
const DEFAULT_OBK_PORT: u16 = 8360;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The shared secret that authorizes catalog mutations. Wrapped in [`Secret`], so it cannot
    /// appear in logs or error output.
    pub admin_key: Secret<String>,
    /// When true, the catalog starts with the five demo matchups instead of empty.
    pub seed_demo: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_OBK_HOST.to_string(),
            port: DEFAULT_OBK_PORT,
            admin_key: Secret::default(),
            seed_demo: false,
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16, admin_key: Secret<String>) -> Self {
        Self { host: host.to_string(), port, admin_key, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("OBK_HOST").ok().unwrap_or_else(|| DEFAULT_OBK_HOST.into());
        let port = env::var("OBK_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for OBK_PORT. {e} Using the default, {DEFAULT_OBK_PORT}, instead."
                    );
                    DEFAULT_OBK_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_OBK_PORT);
        let admin_key = admin_key_from_env();
        let seed_demo = env::var("OBK_SEED_DEMO").map(|s| &s == "1" || &s == "true").unwrap_or(false);
        if seed_demo {
            info!("🪛️ OBK_SEED_DEMO is set. The catalog will start with the demo matchups.");
        }
        Self { host, port, admin_key, seed_demo }
    }
}

fn admin_key_from_env() -> Secret<String> {
    match env::var("OBK_ADMIN_KEY") {
        Ok(key) if !key.trim().is_empty() => Secret::new(key),
        _ => {
            warn!(
                "🚨️🚨️🚨️ OBK_ADMIN_KEY is not set. I'm using a random credential for this session. Catalog \
                 mutations will be impossible unless you read it from the file mentioned below. DO NOT operate on \
                 production like this. 🚨️🚨️🚨️"
            );
            let key: String = thread_rng().sample_iter(&Alphanumeric).take(32).map(char::from).collect();
            // Written to a file rather than logged: log output often ends up in shared places.
            match NamedTempFile::new().ok().and_then(|f| f.keep().ok()) {
                Some((mut f, p)) => match writeln!(f, "{key}") {
                    Ok(()) => warn!(
                        "🚨️ The admin credential for this session was written to {}.",
                        p.to_str().unwrap_or("???")
                    ),
                    Err(e) => warn!("🪛️ Could not write the session admin credential to the temporary file. {e}"),
                },
                None => warn!("🪛️ Could not create a temporary file for the session admin credential."),
            }
            Secret::new(key)
        },
    }
}
