use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Expansion happens on the raw config text before deserialization, so
/// config structs use plain String/SecretString. Referencing an unset
/// variable is an error.
pub fn expand_env(input: &str) -> Result<String, String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"\{\{\s*env\.([A-Za-z0-9_]+)\s*\}\}").expect("must be valid regex")
    });

    let mut missing = None;
    let expanded = re.replace_all(input, |caps: &regex::Captures<'_>| {
        let var = &caps[1];
        std::env::var(var).unwrap_or_else(|_| {
            missing.get_or_insert_with(|| var.to_owned());
            String::new()
        })
    });

    match missing {
        Some(var) => Err(format!("environment variable not found: `{var}`")),
        None => Ok(expanded.into_owned()),
    }
}
