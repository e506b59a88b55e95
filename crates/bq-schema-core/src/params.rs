//! The comma-separated plugin parameter (`--bq-schema_opt=...`).

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginParams {
    /// `M<file>=<package>`: package to assume for files declaring none.
    pub package_overrides: HashMap<String, String>,
    /// Treat each file as holding a single table named after the file.
    pub single_message: bool,
}

impl PluginParams {
    pub fn parse(parameter: Option<&str>) -> Self {
        let mut params = PluginParams::default();
        let Some(parameter) = parameter else {
            return params;
        };

        for token in parameter.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if token == "single-message" {
                params.single_message = true;
                continue;
            }
            match token.strip_prefix('M').and_then(|rest| rest.split_once('=')) {
                Some((file, package)) if !file.is_empty() => {
                    params
                        .package_overrides
                        .insert(file.to_string(), package.to_string());
                }
                _ => tracing::debug!(%token, "ignoring unrecognized plugin parameter"),
            }
        }

        params
    }

    /// Package to use for `file_name` when it declares `declared`.
    pub fn package_for<'p>(&'p self, file_name: &str, declared: &'p str) -> &'p str {
        if !declared.is_empty() {
            return declared;
        }
        self.package_overrides
            .get(file_name)
            .map(String::as_str)
            .unwrap_or(declared)
    }
}
