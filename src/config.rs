use crate::cli::{Args, OutputMode, UseGitignoreMode, DEFAULT_ROOT, MAX_INDENT, MAX_MARGIN};
use crate::errors::AppError;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "docnav.toml";

/// Values read from the `[nav]` table of a config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    pub strip_suffix: Option<String>,
    pub indent: Option<usize>,
    pub margin: Option<usize>,
    pub exclude: Vec<String>,
    pub all: Option<bool>,
    pub use_gitignore: Option<UseGitignoreMode>,
    pub output: Option<OutputMode>,
    pub display_root: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| match e {
                AppError::Config(msg) => AppError::Config(format!("{}: {}", path.display(), msg)),
                other => other,
            })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let value: toml::Value =
            toml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;

        let mut config = FileConfig::default();
        let Some(nav) = value.get("nav") else {
            return Ok(config);
        };
        let Some(table) = nav.as_table() else {
            return Err(AppError::Config("[nav] must be a table".to_string()));
        };

        if let Some(v) = table.get("root") {
            config.root = Some(PathBuf::from(expect_str(v, "root")?));
        }
        if let Some(v) = table.get("strip_suffix") {
            config.strip_suffix = Some(expect_str(v, "strip_suffix")?.to_string());
        }
        if let Some(v) = table.get("indent") {
            config.indent = Some(expect_count(v, "indent", 1, MAX_INDENT)?);
        }
        if let Some(v) = table.get("margin") {
            config.margin = Some(expect_count(v, "margin", 0, MAX_MARGIN)?);
        }
        if let Some(v) = table.get("exclude") {
            let items = v
                .as_array()
                .ok_or_else(|| wrong_type("exclude", "an array of strings"))?;
            for item in items {
                config.exclude.push(expect_str(item, "exclude")?.to_string());
            }
        }
        if let Some(v) = table.get("all") {
            config.all = Some(v.as_bool().ok_or_else(|| wrong_type("all", "a boolean"))?);
        }
        if let Some(v) = table.get("use_gitignore") {
            let raw = expect_str(v, "use_gitignore")?;
            config.use_gitignore = Some(UseGitignoreMode::parse(raw).ok_or_else(|| {
                AppError::Config(format!(
                    "nav.use_gitignore must be one of auto, always, never (got '{}')",
                    raw
                ))
            })?);
        }
        if let Some(v) = table.get("output") {
            let raw = expect_str(v, "output")?;
            config.output = Some(OutputMode::parse(raw).ok_or_else(|| {
                AppError::Config(format!(
                    "nav.output must be mkdocs or markdown (got '{}')",
                    raw
                ))
            })?);
        }
        if let Some(v) = table.get("display_root") {
            config.display_root = Some(PathBuf::from(expect_str(v, "display_root")?));
        }

        Ok(config)
    }
}

fn wrong_type(key: &str, expected: &str) -> AppError {
    AppError::Config(format!("nav.{} must be {}", key, expected))
}

fn expect_str<'a>(value: &'a toml::Value, key: &str) -> Result<&'a str, AppError> {
    value.as_str().ok_or_else(|| wrong_type(key, "a string"))
}

fn expect_count(
    value: &toml::Value,
    key: &str,
    min: usize,
    max: usize,
) -> Result<usize, AppError> {
    value
        .as_integer()
        .and_then(|n| usize::try_from(n).ok())
        .filter(|n| (min..=max).contains(n))
        .ok_or_else(|| wrong_type(key, &format!("an integer from {} to {}", min, max)))
}

/// Find and load the config file the arguments point at, if any.
pub fn locate(args: &Args) -> Result<Option<FileConfig>, AppError> {
    if args.no_config {
        return Ok(None);
    }
    if let Some(path) = &args.config {
        return FileConfig::load(path).map(Some);
    }
    let implicit = Path::new(DEFAULT_CONFIG_FILE);
    if implicit.is_file() {
        return FileConfig::load(implicit).map(Some);
    }
    Ok(None)
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub root: PathBuf,
    pub strip_suffix: String,
    pub indent: usize,
    pub margin: usize,
    pub exclude: Vec<String>,
    pub include_hidden: bool,
    pub use_gitignore: UseGitignoreMode,
    pub output: OutputMode,
    pub display_root: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            strip_suffix: ".md".to_string(),
            indent: 4,
            margin: 2,
            exclude: Vec::new(),
            include_hidden: true,
            use_gitignore: UseGitignoreMode::Never,
            output: OutputMode::Mkdocs,
            display_root: None,
        }
    }
}

impl Settings {
    /// Layer command-line flags over the config file over the defaults.
    /// Exclude globs from both sources are combined.
    pub fn resolve(args: &Args, file: Option<FileConfig>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Settings::default();

        let mut exclude = file.exclude;
        exclude.extend(args.exclude.iter().cloned());

        Self {
            root: args.root.clone().or(file.root).unwrap_or(defaults.root),
            strip_suffix: args
                .strip_suffix
                .clone()
                .or(file.strip_suffix)
                .unwrap_or(defaults.strip_suffix),
            indent: args.indent.or(file.indent).unwrap_or(defaults.indent),
            margin: args.margin.or(file.margin).unwrap_or(defaults.margin),
            exclude,
            include_hidden: args
                .hidden_override()
                .or(file.all)
                .unwrap_or(defaults.include_hidden),
            use_gitignore: args
                .use_gitignore
                .or(file.use_gitignore)
                .unwrap_or(defaults.use_gitignore),
            output: args.output.or(file.output).unwrap_or(defaults.output),
            display_root: args.display_root.clone().or(file.display_root),
        }
    }
}
