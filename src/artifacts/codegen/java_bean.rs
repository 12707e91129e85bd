use crate::artifacts::codegen::{DATE_PREFIX_REGEX, JAVA_IDENTIFIER_REGEX};
use anyhow::Context;
use derive_new::new;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashSet};

pub const DEFAULT_CLASS_NAME: &str = "MyClass";
const INDENT: &str = "    ";
const MAP_FIELD_THRESHOLD: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, new)]
struct Field {
    name: String,
    java_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
struct ClassDef {
    name: String,
    fields: Vec<Field>,
}

/// Derives Java bean classes from the shape of a JSON object.
///
/// Nested objects become `public static class` members named after their
/// capitalized key. Classes are recorded once per name; the first definition
/// wins and the root class name is reserved up front.
pub struct JavaBeanGenerator {
    date_re: Regex,
    reserved: HashSet<String>,
    classes: Vec<ClassDef>,
}

impl JavaBeanGenerator {
    pub fn new() -> anyhow::Result<Self> {
        let date_re = Regex::new(DATE_PREFIX_REGEX)
            .with_context(|| format!("invalid date regex: {DATE_PREFIX_REGEX}"))?;

        Ok(Self {
            date_re,
            reserved: HashSet::new(),
            classes: Vec::new(),
        })
    }

    pub fn generate(mut self, json: &str, class_name: &str) -> anyhow::Result<String> {
        let identifier_re = Regex::new(JAVA_IDENTIFIER_REGEX)
            .with_context(|| format!("invalid identifier regex: {JAVA_IDENTIFIER_REGEX}"))?;
        if !identifier_re.is_match(class_name) {
            anyhow::bail!("invalid Java class name: {class_name}");
        }

        let value: Value = serde_json::from_str(json).context("invalid JSON input")?;
        let Value::Object(object) = value else {
            anyhow::bail!("JSON root must be an object to generate a class");
        };

        self.process_class(class_name, &object);
        tracing::debug!(classes = self.classes.len(), "collected class definitions");

        let root_index = self
            .classes
            .iter()
            .position(|class| class.name == class_name)
            .ok_or_else(|| anyhow::anyhow!("root class {class_name} was not generated"))?;
        let root = self.classes.remove(root_index);

        Ok(self.render(&root))
    }

    fn process_class(&mut self, name: &str, object: &Map<String, Value>) {
        if !self.reserved.insert(name.to_string()) {
            return;
        }

        let fields = object
            .iter()
            .map(|(key, value)| Field::new(key.clone(), self.detect_type(key, value)))
            .collect();

        self.classes.push(ClassDef::new(name.to_string(), fields));
    }

    fn detect_type(&mut self, key: &str, value: &Value) -> String {
        match value {
            Value::Array(items) => match items.first() {
                Some(first) => format!("List<{}>", boxed(&self.detect_type(key, first))),
                None => "List<Object>".to_string(),
            },
            Value::Object(object) => {
                let all_scalar = object
                    .values()
                    .all(|v| matches!(v, Value::String(_) | Value::Number(_) | Value::Bool(_)));
                if all_scalar && object.len() > MAP_FIELD_THRESHOLD {
                    return "Map<String, Object>".to_string();
                }

                let nested_name = capitalize(key);
                self.process_class(&nested_name, object);
                nested_name
            }
            Value::String(s) if self.date_re.is_match(s) => "Date".to_string(),
            Value::String(_) => "String".to_string(),
            Value::Number(n) if is_integral(n) => "int".to_string(),
            Value::Number(_) => "double".to_string(),
            Value::Bool(_) => "boolean".to_string(),
            Value::Null => "Object".to_string(),
        }
    }

    fn render(&self, root: &ClassDef) -> String {
        let mut lines = Vec::new();

        let imports = self.imports(root);
        if !imports.is_empty() {
            lines.extend(imports.into_iter().map(|import| format!("import {import};")));
            lines.push(String::new());
        }

        lines.push(format!("public class {} {{", root.name));
        lines.extend(class_body(root, 1));
        for nested in &self.classes {
            lines.push(String::new());
            lines.push(format!("{INDENT}public static class {} {{", nested.name));
            lines.extend(class_body(nested, 2));
            lines.push(format!("{INDENT}}}"));
        }
        lines.push("}".to_string());

        lines.join("\n")
    }

    fn imports(&self, root: &ClassDef) -> BTreeSet<&'static str> {
        std::iter::once(root)
            .chain(self.classes.iter())
            .flat_map(|class| class.fields.iter())
            .flat_map(|field| {
                let ty = field.java_type.as_str();
                [
                    ty.contains("List<").then_some("java.util.List"),
                    ty.contains("Map<").then_some("java.util.Map"),
                    mentions_date(ty).then_some("java.util.Date"),
                ]
            })
            .flatten()
            .collect()
    }
}

fn class_body(class: &ClassDef, level: usize) -> Vec<String> {
    let pad = INDENT.repeat(level);
    let inner = INDENT.repeat(level + 1);
    let mut lines = Vec::new();

    for field in &class.fields {
        lines.push(format!("{pad}private {} {};", field.java_type, field.name));
    }

    for Field { name, java_type } in &class.fields {
        let accessor = capitalize(name);
        lines.push(String::new());
        lines.push(format!("{pad}public {java_type} get{accessor}() {{"));
        lines.push(format!("{inner}return {name};"));
        lines.push(format!("{pad}}}"));
        lines.push(String::new());
        lines.push(format!("{pad}public void set{accessor}({java_type} {name}) {{"));
        lines.push(format!("{inner}this.{name} = {name};"));
        lines.push(format!("{pad}}}"));
    }

    lines
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn boxed(java_type: &str) -> String {
    match java_type {
        "int" => "Integer",
        "double" => "Double",
        "boolean" => "Boolean",
        other => other,
    }
    .to_string()
}

fn is_integral(n: &serde_json::Number) -> bool {
    n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
}

fn mentions_date(java_type: &str) -> bool {
    java_type
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == "Date")
}

pub fn generate_java_bean(json: &str, class_name: &str) -> anyhow::Result<String> {
    JavaBeanGenerator::new()?.generate(json, class_name)
}
