/// Extensions collected when no allow-list is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".go", ".py", ".js", ".jsx", ".ts", ".tsx", ".vue", ".svelte", ".mjs", ".cjs", ".yaml",
    ".yml", ".json", ".toml", ".md", ".txt", ".sh", ".bash", ".c", ".cpp", ".h", ".hpp", ".rs",
    ".java", ".rb", ".php", ".swift", ".kt",
];

/// Extensionless files that are still worth collecting.
pub const PROJECT_FILE_NAMES: &[&str] = &[
    "Makefile",
    "Dockerfile",
    "Rakefile",
    "Gemfile",
    "Procfile",
    "Vagrantfile",
];

/// Dependency, artifact, VCS and binary patterns that are always excluded.
pub const BASELINE_EXCLUDES: &[&str] = &[
    r"(^|/)node_modules($|/)",
    r"(^|/)venv($|/)",
    r"(^|/)\.venv($|/)",
    r"(^|/)__pycache__($|/)",
    r"(^|/)\.git($|/)",
    r"(^|/)dist($|/)",
    r"(^|/)build($|/)",
    r"(^|/)\.egg-info($|/)",
    r"(^|/)\.tox($|/)",
    r"(^|/)coverage($|/)",
    r"(^|/)\.next($|/)",
    r"(^|/)vendor($|/)",
    r"(^|/)bin($|/)",
    r"(^|/)tmp($|/)",
    r"\.lock$",
    r"-lock\.json$",
    r"-lock\.yaml$",
    r"Pipfile\.lock$",
    r"\.gitignore$",
    r"\.exe$",
    r"\.so$",
    r"\.dylib$",
    r"\.dll$",
    r"_templ\.go$",
    r"\.(jpg|jpeg|png|gif|bmp|svg|ico|webp|tiff|tif|psd|raw|heic|avif)$",
    r"\.pyc$",
    r"\.pyo$",
    r"\.pyd$",
    r"\.egg$",
    r"(^|/)\.eggs($|/)",
    r"(^|/)\.pytest_cache($|/)",
    r"(^|/)\.mypy_cache($|/)",
    r"\.pb\.go$",
    r"_gen\.go$",
    r"\.min\.js$",
    r"\.bundle\.js$",
    r"\.eslintcache",
    r"(^|/)\.nyc_output($|/)",
    r"(^|/)\.yarn($|/)",
    r"(^|/)\.npm($|/)",
    r"(^|/)cypress($|/)",
    r"(^|/)jest-cache($|/)",
];

/// Test sources, appended only when test exclusion is requested.
pub const TEST_EXCLUDES: &[&str] = &[
    r"_test\.go$",
    r"(^|/)tests?($|/)",
    r"\.test\.(js|ts|jsx|tsx)$",
    r"\.spec\.(js|ts|jsx|tsx)$",
];
