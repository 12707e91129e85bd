use std::collections::BTreeMap;
use std::fmt::Display;

/// Tool groups, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Format,
    Convert,
    Crypto,
    Diff,
    Generate,
    Codegen,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Format => "format",
            Category::Convert => "convert",
            Category::Crypto => "crypto",
            Category::Diff => "diff",
            Category::Generate => "generate",
            Category::Codegen => "codegen",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInfo {
    pub category: Category,
    pub summary: &'static str,
}

/// Every tool, keyed by its subcommand name.
pub static TOOLS: phf::Map<&'static str, ToolInfo> = phf::phf_map! {
    "format-json" => ToolInfo { category: Category::Format, summary: "Pretty-print or minify JSON" },
    "format-xml" => ToolInfo { category: Category::Format, summary: "Re-indent an XML document" },
    "base64" => ToolInfo { category: Category::Convert, summary: "Encode or decode Base64 text" },
    "case" => ToolInfo { category: Category::Convert, summary: "Convert text to upper, lower, title or sentence case" },
    "ascii" => ToolInfo { category: Category::Convert, summary: "Convert text to character codes and back" },
    "unicode" => ToolInfo { category: Category::Convert, summary: "Escape text as Unicode code units and back" },
    "reverse" => ToolInfo { category: Category::Convert, summary: "Reverse characters, words or sentences" },
    "caesar" => ToolInfo { category: Category::Crypto, summary: "Encrypt or decrypt with a Caesar cipher" },
    "diff" => ToolInfo { category: Category::Diff, summary: "Compare two texts by character, word or line" },
    "json-diff" => ToolInfo { category: Category::Diff, summary: "Compare two JSON documents ignoring key order" },
    "ascii-art" => ToolInfo { category: Category::Generate, summary: "Render text as a three-row ASCII banner" },
    "java-bean" => ToolInfo { category: Category::Codegen, summary: "Generate a Java bean class from a JSON object" },
};

/// Tools grouped by category in display order, sorted by name within a group.
pub fn tools_by_category() -> Vec<(Category, Vec<(&'static str, &'static ToolInfo)>)> {
    let mut groups: BTreeMap<Category, Vec<(&'static str, &'static ToolInfo)>> = BTreeMap::new();

    for (name, info) in TOOLS.entries() {
        groups.entry(info.category).or_default().push((*name, info));
    }

    groups
        .into_iter()
        .map(|(category, mut tools)| {
            tools.sort_by_key(|(name, _)| *name);
            (category, tools)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_groups_follow_category_order() {
        let categories = tools_by_category()
            .into_iter()
            .map(|(category, _)| category.to_string())
            .collect::<Vec<_>>();

        assert_eq!(
            categories,
            vec!["format", "convert", "crypto", "diff", "generate", "codegen"]
        );
    }

    #[test]
    fn test_tools_sorted_within_group() {
        let groups = tools_by_category();
        let (_, convert) = &groups[1];

        assert_eq!(
            convert.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            vec!["ascii", "base64", "case", "reverse", "unicode"]
        );
    }

    #[test]
    fn test_every_tool_is_listed_once() {
        let listed = tools_by_category()
            .iter()
            .map(|(_, tools)| tools.len())
            .sum::<usize>();
        assert_eq!(listed, TOOLS.len());
    }
}
