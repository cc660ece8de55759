//! Rendering of the generated `.env` file.

/// Keys written to `.env`, in file order.
pub const ENV_KEYS: [&str; 6] = [
    "DJANGO_DEBUG",
    "DJANGO_SECRET_KEY",
    "DJANGO_ALLOWED_HOSTS",
    "DATABASE_URL",
    "DJANGO_SUPERUSER_EMAIL",
    "DJANGO_SUPERUSER_PASSWORD",
];

/// Contents of a freshly generated environment file.
///
/// Values are placed literally after `=`: no quoting, no escaping.
#[derive(Debug, Clone, Copy)]
pub struct EnvFile<'a> {
    /// URL-safe secret for `DJANGO_SECRET_KEY`.
    pub secret_key: &'a str,
    /// Normalized project name, used as the database name.
    pub project_name: &'a str,
}

impl EnvFile<'_> {
    #[must_use]
    pub fn database_url(&self) -> String {
        format!("postgres:///{}", self.project_name)
    }

    /// Key/value pairs in file order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, String); 6] {
        let [debug, secret, hosts, database, email, password] = ENV_KEYS;
        [
            (debug, "True".to_string()),
            (secret, self.secret_key.to_string()),
            (hosts, "*".to_string()),
            (database, self.database_url()),
            (email, String::new()),
            (password, String::new()),
        ]
    }

    /// One `KEY=VALUE` line per entry, each newline-terminated.
    #[must_use]
    pub fn render(&self) -> String {
        self.entries()
            .iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect()
    }
}
