use std::collections::HashMap;

use crate::config::CustomLanguageConfig;
use crate::path_utils::{dotted_extension, file_name};

/// A fence tag and the file names that map to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub tag: String,
    /// Extensions without the leading dot; matched case-sensitively.
    pub extensions: Vec<String>,
    /// Exact names of extensionless files.
    pub file_names: Vec<String>,
}

impl Language {
    #[must_use]
    pub fn new(tag: &str, extensions: Vec<&str>) -> Self {
        Self {
            tag: tag.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            file_names: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_file_names(mut self, file_names: Vec<&str>) -> Self {
        self.file_names = file_names.into_iter().map(String::from).collect();
        self
    }
}

#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    extension_map: HashMap<String, usize>,
    file_name_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
            file_name_map: HashMap::new(),
        }
    }

    /// Register a language. Later registrations win on overlapping names.
    pub fn register(&mut self, language: Language) {
        let idx = self.languages.len();
        for ext in &language.extensions {
            self.extension_map
                .insert(ext.trim_start_matches('.').to_string(), idx);
        }
        for name in &language.file_names {
            self.file_name_map.insert(name.clone(), idx);
        }
        self.languages.push(language);
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.extension_map
            .get(ext)
            .map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn get_by_file_name(&self, name: &str) -> Option<&Language> {
        self.file_name_map
            .get(name)
            .map(|&idx| &self.languages[idx])
    }

    /// Fence tag for a `/`-separated path, or `""` when nothing matches.
    #[must_use]
    pub fn tag_for(&self, path: &str) -> &str {
        let name = file_name(path);
        let language = match dotted_extension(name) {
            Some(ext) => self.get_by_extension(&ext[1..]),
            None => self.get_by_file_name(name),
        };
        language.map_or("", |lang| lang.tag.as_str())
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }

    /// Built-in languages extended (or overridden) by configured ones.
    #[must_use]
    pub fn with_custom_languages(custom: &HashMap<String, CustomLanguageConfig>) -> Self {
        let mut registry = Self::default();

        let mut tags: Vec<&String> = custom.keys().collect();
        tags.sort();

        for tag in tags {
            let config = &custom[tag];
            registry.register(Language {
                tag: tag.clone(),
                extensions: config.extensions.clone(),
                file_names: config.file_names.clone(),
            });
        }

        registry
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(Language::new("go", vec!["go"]));
        registry.register(Language::new("python", vec!["py"]));
        registry.register(Language::new("javascript", vec!["js", "mjs", "cjs"]));
        registry.register(Language::new("jsx", vec!["jsx"]));
        registry.register(Language::new("typescript", vec!["ts"]));
        registry.register(Language::new("tsx", vec!["tsx"]));
        registry.register(Language::new("vue", vec!["vue"]));
        registry.register(Language::new("svelte", vec!["svelte"]));
        registry.register(Language::new("rust", vec!["rs"]));
        registry.register(Language::new("java", vec!["java"]));
        registry.register(Language::new("c", vec!["c", "h"]));
        registry.register(Language::new("cpp", vec!["cpp", "cc", "cxx", "hpp", "hh"]));
        registry.register(Language::new("csharp", vec!["cs"]));
        registry.register(
            Language::new("ruby", vec!["rb"]).with_file_names(vec![
                "Rakefile",
                "Gemfile",
                "Vagrantfile",
            ]),
        );
        registry.register(Language::new("php", vec!["php"]));
        registry.register(Language::new("swift", vec!["swift"]));
        registry.register(Language::new("kotlin", vec!["kt", "kts"]));
        registry.register(Language::new("scala", vec!["scala"]));
        registry.register(Language::new("bash", vec!["sh", "bash", "env"]));
        registry.register(Language::new("zsh", vec!["zsh"]));
        registry.register(Language::new("fish", vec!["fish"]));
        registry.register(
            Language::new("yaml", vec!["yaml", "yml"]).with_file_names(vec!["Procfile"]),
        );
        registry.register(Language::new("json", vec!["json"]));
        registry.register(Language::new("xml", vec!["xml"]));
        registry.register(Language::new("html", vec!["html", "htm"]));
        registry.register(Language::new("css", vec!["css"]));
        registry.register(Language::new("scss", vec!["scss"]));
        registry.register(Language::new("sass", vec!["sass"]));
        registry.register(Language::new("less", vec!["less"]));
        registry.register(Language::new("markdown", vec!["md", "markdown"]));
        registry.register(Language::new("sql", vec!["sql"]));
        registry.register(Language::new("toml", vec!["toml"]).with_file_names(vec!["Cargo"]));
        registry.register(Language::new("ini", vec!["ini"]));
        registry.register(Language::new("conf", vec!["conf"]));
        registry.register(Language::new("text", vec!["txt"]));
        registry.register(
            Language::new("dockerfile", vec!["dockerfile"]).with_file_names(vec!["Dockerfile"]),
        );
        registry.register(Language::new("makefile", vec![]).with_file_names(vec!["Makefile"]));
        registry.register(Language::new("perl", vec!["pl", "pm"]));
        registry.register(Language::new("lua", vec!["lua"]));
        registry.register(Language::new("vim", vec!["vim"]));
        registry.register(Language::new("elixir", vec!["ex", "exs"]));
        registry.register(Language::new("erlang", vec!["erl", "hrl"]));
        registry.register(Language::new("clojure", vec!["clj", "cljs"]));
        registry.register(Language::new("dart", vec!["dart"]));
        registry.register(Language::new("r", vec!["r", "R"]));
        registry.register(Language::new("objective-c", vec!["m", "mm"]));
        registry.register(Language::new("groovy", vec!["groovy"]));
        registry.register(Language::new("gradle", vec!["gradle"]));
        registry.register(Language::new("terraform", vec!["tf"]));
        registry.register(Language::new("hcl", vec!["hcl"]));

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
