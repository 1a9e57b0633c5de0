// File: ./src/index.rs
//! Structural metadata index for one markdown document.
//!
//! This is the stand-in for a hosting application's metadata cache: a
//! single pass over the content recording front-matter tag declarations,
//! body tag occurrences and link/embed occurrences with their anchor
//! lines. It is deliberately not a markdown parser; it only knows the
//! handful of shapes the extraction engine cares about.

/// A `#tag` occurrence in the document body. `tag` keeps its leading `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLocation {
    pub tag: String,
    pub line: usize,
}

/// A `[[wikilink]]`, `![[embed]]` or `[label](target)` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub target: String,
    pub label: Option<String>,
    pub line: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentStructure {
    pub tags: Vec<TagLocation>,
    pub links: Vec<LinkRecord>,
    /// Tag labels declared in front matter, without `#`.
    pub frontmatter_tags: Vec<String>,
}

impl DocumentStructure {
    /// Every tag token known for the document: body occurrences plus
    /// front-matter declarations. Used for corpus-level tag membership.
    pub fn all_tag_tokens(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .map(|t| t.tag.as_str())
            .chain(self.frontmatter_tags.iter().map(|t| t.as_str()))
    }
}

fn is_tag_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '/')
}

/// Parses the `tags:` entry of a front-matter block. Accepts the three
/// shapes found in the wild: `tags: [a, b]`, `tags: a, b` and a block list
/// of `- a` lines.
fn frontmatter_tags(frontmatter: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < frontmatter.len() {
        let line = frontmatter[i].trim_end();
        if let Some(value) = line.strip_prefix("tags:").or_else(|| line.strip_prefix("tag:")) {
            let value = value.trim();
            if value.is_empty() {
                // Block list: consume following "- tag" lines.
                let mut j = i + 1;
                while j < frontmatter.len() {
                    let entry = frontmatter[j].trim();
                    if let Some(tag) = entry.strip_prefix("- ") {
                        out.push(clean_fm_tag(tag));
                        j += 1;
                    } else {
                        break;
                    }
                }
                i = j;
                continue;
            }
            let value = value
                .strip_prefix('[')
                .and_then(|v| v.strip_suffix(']'))
                .unwrap_or(value);
            for tag in value.split(',') {
                let tag = clean_fm_tag(tag);
                if !tag.is_empty() {
                    out.push(tag);
                }
            }
        }
        i += 1;
    }
    out
}

fn clean_fm_tag(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim_start_matches('#')
        .to_string()
}

fn scan_line_tags(line: &str, line_no: usize, out: &mut Vec<TagLocation>) {
    let mut rest = line;
    let mut offset = 0;
    while let Some(found) = rest.find('#') {
        let at = offset + found;
        let boundary = line[..at]
            .chars()
            .next_back()
            .map(|c| c.is_whitespace())
            .unwrap_or(true);
        let token_len = line[at + 1..]
            .find(|c| !is_tag_char(c))
            .unwrap_or(line.len() - at - 1);
        if boundary && token_len > 0 {
            out.push(TagLocation {
                tag: line[at..at + 1 + token_len].to_string(),
                line: line_no,
            });
            offset = at + 1 + token_len;
        } else {
            offset = at + 1;
        }
        rest = &line[offset..];
    }
}

fn scan_line_links(line: &str, line_no: usize, out: &mut Vec<LinkRecord>) {
    // Wiki links and embeds.
    let mut rest = line;
    while let Some(start) = rest.find("[[") {
        let Some(end) = rest[start + 2..].find("]]") else {
            break;
        };
        let inner = &rest[start + 2..start + 2 + end];
        let (target, label) = match inner.split_once('|') {
            Some((t, l)) => (t, Some(l.to_string())),
            None => (inner, None),
        };
        if !target.is_empty() {
            out.push(LinkRecord {
                target: target.to_string(),
                label,
                line: line_no,
            });
        }
        rest = &rest[start + 2 + end + 2..];
    }

    // Plain markdown links; wiki syntax was consumed above, so a stray
    // `[label](target)` left in `line` is scanned on its own.
    let mut rest = line;
    while let Some(start) = rest.find("](") {
        let Some(open) = rest[..start].rfind('[') else {
            rest = &rest[start + 2..];
            continue;
        };
        let Some(close) = rest[start + 2..].find(')') else {
            break;
        };
        let label = &rest[open + 1..start];
        let target = &rest[start + 2..start + 2 + close];
        // Skip the tail of a wiki link: its label region contains "[[".
        if !target.is_empty() && !label.contains('[') && !label.contains(']') {
            out.push(LinkRecord {
                target: target.to_string(),
                label: if label.is_empty() {
                    None
                } else {
                    Some(label.to_string())
                },
                line: line_no,
            });
        }
        rest = &rest[start + 2 + close + 1..];
    }
}

/// Indexes one document's content.
pub fn index_document(content: &str) -> DocumentStructure {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut structure = DocumentStructure::default();

    // Front matter: a `---` fence on the very first line, closed by the
    // next `---`/`...` line. Body scanning starts after the close.
    let mut body_start = 0;
    if lines.first().map(|l| l.trim_end() == "---").unwrap_or(false) {
        if let Some(close) = lines
            .iter()
            .skip(1)
            .position(|l| matches!(l.trim_end(), "---" | "..."))
        {
            structure.frontmatter_tags = frontmatter_tags(&lines[1..close + 1]);
            body_start = close + 2;
        }
    }

    let mut in_code_fence = false;
    for (line_no, line) in lines.iter().enumerate().skip(body_start) {
        if line.trim_start().starts_with("```") {
            in_code_fence = !in_code_fence;
            continue;
        }
        if in_code_fence {
            continue;
        }
        scan_line_tags(line, line_no, &mut structure.tags);
        scan_line_links(line, line_no, &mut structure.links);
    }

    structure
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_body_tags_with_line_numbers() {
        let s = index_document("intro\n#todo things\n- [ ] item #urgent\n");
        assert_eq!(s.tags.len(), 2);
        assert_eq!(s.tags[0].tag, "#todo");
        assert_eq!(s.tags[0].line, 1);
        assert_eq!(s.tags[1].tag, "#urgent");
        assert_eq!(s.tags[1].line, 2);
    }

    #[test]
    fn frontmatter_tag_shapes() {
        let inline = index_document("---\ntags: [todo, work]\n---\nbody\n");
        assert_eq!(inline.frontmatter_tags, vec!["todo", "work"]);

        let plain = index_document("---\ntags: todo, work\n---\n");
        assert_eq!(plain.frontmatter_tags, vec!["todo", "work"]);

        let block = index_document("---\ntags:\n  - todo\n  - work\n---\n");
        assert_eq!(block.frontmatter_tags, vec!["todo", "work"]);
    }

    #[test]
    fn frontmatter_is_not_a_body_tag() {
        let s = index_document("---\ntags: [todo]\n---\nno tags here\n");
        assert!(s.tags.is_empty());
    }

    #[test]
    fn links_carry_targets_labels_and_lines() {
        let s = index_document("a [[Note]] and [[Other|alias]]\nsee [docs](https://e.org)\n");
        assert_eq!(s.links.len(), 3);
        assert_eq!(s.links[0].target, "Note");
        assert_eq!(s.links[0].label, None);
        assert_eq!(s.links[1].label.as_deref(), Some("alias"));
        assert_eq!(s.links[2].target, "https://e.org");
        assert_eq!(s.links[2].line, 1);
    }

    #[test]
    fn code_fences_are_skipped() {
        let s = index_document("```\n#not-a-tag\n```\n#real\n");
        assert_eq!(s.tags.len(), 1);
        assert_eq!(s.tags[0].tag, "#real");
        assert_eq!(s.tags[0].line, 3);
    }
}
