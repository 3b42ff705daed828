//! Static wiring for the consuming web runtime.
//!
//! Nothing here reads the environment: these are the plugin list, middleware
//! chain, template setup and file locations the site is built around. Paths
//! are resolved against the project base directory.

use std::path::{Path, PathBuf};

use serde::Serialize;

pub const INSTALLED_APPS: &[&str] = &[
    "django.contrib.admin",
    "django.contrib.auth",
    "django.contrib.contenttypes",
    "django.contrib.sessions",
    "django.contrib.messages",
    "django.contrib.staticfiles",
    "allauth",
    "allauth.account",
    "allauth.socialaccount",
    "allauth.socialaccount.providers.github",
    "allauth.socialaccount.providers.google",
];

/// Order matters: each entry wraps the ones after it.
pub const MIDDLEWARE: &[&str] = &[
    "django.middleware.security.SecurityMiddleware",
    "django.contrib.sessions.middleware.SessionMiddleware",
    "django.middleware.common.CommonMiddleware",
    "django.middleware.csrf.CsrfViewMiddleware",
    "django.contrib.auth.middleware.AuthenticationMiddleware",
    "django.contrib.messages.middleware.MessageMiddleware",
    "django.middleware.clickjacking.XFrameOptionsMiddleware",
];

// `request` appears twice; the social login app asks for it explicitly.
pub const CONTEXT_PROCESSORS: &[&str] = &[
    "django.template.context_processors.debug",
    "django.template.context_processors.request",
    "django.contrib.auth.context_processors.auth",
    "django.contrib.messages.context_processors.messages",
    "django.template.context_processors.request",
];

pub const PASSWORD_VALIDATORS: &[&str] = &[
    "django.contrib.auth.password_validation.UserAttributeSimilarityValidator",
    "django.contrib.auth.password_validation.MinimumLengthValidator",
    "django.contrib.auth.password_validation.CommonPasswordValidator",
    "django.contrib.auth.password_validation.NumericPasswordValidator",
];

pub const AUTHENTICATION_BACKENDS: &[&str] = &[
    "django.contrib.auth.backends.ModelBackend",
    "allauth.account.auth_backends.AuthenticationBackend",
];

pub const TEMPLATE_BACKEND: &str = "django.template.backends.django.DjangoTemplates";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateConfig {
    pub backend: String,
    pub dirs: Vec<PathBuf>,
    pub app_dirs: bool,
    pub context_processors: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct I18nConfig {
    pub language_code: String,
    pub time_zone: String,
    pub use_i18n: bool,
    pub use_l10n: bool,
    pub use_tz: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language_code: "en-us".to_string(),
            time_zone: "Asia/Kolkata".to_string(),
            use_i18n: true,
            use_l10n: true,
            use_tz: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilesConfig {
    pub static_url: String,
    pub static_root: PathBuf,
    /// Extra directories collected into `static_root`.
    pub staticfiles_dirs: Vec<PathBuf>,
    pub media_url: String,
    pub media_root: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthRoutes {
    pub login_url: String,
    pub login_redirect_url: String,
    pub logout_redirect_url: String,
}

impl Default for AuthRoutes {
    fn default() -> Self {
        Self {
            login_url: "login".to_string(),
            login_redirect_url: "/".to_string(),
            logout_redirect_url: "login".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteLayout {
    pub installed_apps: Vec<String>,
    pub middleware: Vec<String>,
    pub root_urlconf: String,
    pub wsgi_application: String,
    pub templates: Vec<TemplateConfig>,
    pub password_validators: Vec<String>,
    pub authentication_backends: Vec<String>,
    pub i18n: I18nConfig,
    pub files: FilesConfig,
    pub auth_routes: AuthRoutes,
    pub default_auto_field: String,
}

impl SiteLayout {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            installed_apps: owned(INSTALLED_APPS),
            middleware: owned(MIDDLEWARE),
            root_urlconf: "core.urls".to_string(),
            wsgi_application: "core.wsgi.application".to_string(),
            templates: vec![TemplateConfig {
                backend: TEMPLATE_BACKEND.to_string(),
                dirs: vec![base_dir.join("templates")],
                app_dirs: true,
                context_processors: owned(CONTEXT_PROCESSORS),
            }],
            password_validators: owned(PASSWORD_VALIDATORS),
            authentication_backends: owned(AUTHENTICATION_BACKENDS),
            i18n: I18nConfig::default(),
            files: FilesConfig {
                static_url: "public/".to_string(),
                static_root: base_dir.join("public"),
                staticfiles_dirs: vec![base_dir.join("media"), base_dir.join("assets")],
                media_url: "/media/".to_string(),
                media_root: base_dir.join("media"),
            },
            auth_routes: AuthRoutes::default(),
            default_auto_field: "django.db.models.BigAutoField".to_string(),
        }
    }

    pub fn has_app(&self, app: &str) -> bool {
        self.installed_apps.iter().any(|a| a == app)
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
