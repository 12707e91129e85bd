use anyhow::Context;
use regex::Regex;
use serde_json::Value;

const WHITESPACE_RUN_REGEX: &str = r"\s+";

/// Undoes a layer of string escaping around pasted JSON, e.g. a log line
/// holding `{\"msg\":\"ok\"}`: literal `\n`/`\t` escapes are dropped,
/// whitespace runs collapse to one space and `\"` becomes `"`.
pub fn unescape(input: &str) -> anyhow::Result<String> {
    let re = Regex::new(WHITESPACE_RUN_REGEX)
        .with_context(|| format!("invalid whitespace regex: {WHITESPACE_RUN_REGEX}"))?;

    let stripped = input.replace("\\n", "").replace("\\t", "");
    Ok(re.replace_all(&stripped, " ").replace("\\\"", "\""))
}

fn parse(input: &str) -> anyhow::Result<Value> {
    serde_json::from_str(input).map_err(|e| anyhow::anyhow!("invalid JSON: {e}"))
}

/// Pretty-prints JSON with 2-space indentation, keeping key order.
pub fn pretty(input: &str) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&parse(input)?)?)
}

pub fn minify(input: &str) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&parse(input)?)?)
}
