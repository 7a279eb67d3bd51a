use itertools::Itertools;
use serde_json::Value;

/// Renders the compiled-artifact side data of one version as a flat text
/// listing for side-by-side display.
///
/// Every entry of `ruleDefinitions` becomes a `// Rule: {name}` header
/// followed by its generated content; missing pieces render as explanatory
/// comment lines instead of failing. This is presentation only and takes
/// no part in the structural comparison.
pub fn render_rule_listing(artifact: &Value) -> String {
    if artifact.is_null() {
        return "// Snapshot is null or undefined.".to_string();
    }

    let definitions = artifact
        .get("ruleDefinitions")
        .and_then(Value::as_array)
        .filter(|definitions| !definitions.is_empty());
    let Some(definitions) = definitions else {
        let keys = artifact
            .as_object()
            .map(|map| map.keys().join(", "))
            .unwrap_or_default();
        return format!("// No DRL content found in snapshot.\n// Snapshot keys: {}", keys);
    };

    definitions
        .iter()
        .map(|definition| {
            let name = definition
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("(unnamed)");
            let content = ["drlContent", "drl"].iter().find_map(|key| {
                definition
                    .get(*key)
                    .and_then(Value::as_str)
                    .filter(|content| !content.is_empty())
            });
            match content {
                Some(content) => format!("// Rule: {}\n{}", name, content),
                None => format!("// Rule: {}\n// (No DRL generated for this rule)", name),
            }
        })
        .join("\n\n")
}
