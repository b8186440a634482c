pub mod classes;
pub mod log;
pub mod show;

use std::path::Path;

use gs_core::Registry;

/// Build the registry: shipped archetypes plus any from `classes`.
fn load_registry(classes: Option<&Path>) -> Result<Registry, String> {
    let mut registry = Registry::builtin().map_err(|e| e.to_string())?;
    if let Some(path) = classes {
        tracing::debug!("Reading class definitions from {}", path.display());
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        registry
            .extend_from_json(&json)
            .map_err(|e| e.to_string())?;
    }
    Ok(registry)
}
