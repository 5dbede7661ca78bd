//! Markdown-lite rendering for AI-generated text.
//!
//! Supports a small, flat subset: ATX headings 1-3, `**bold**`, `*italic*`,
//! `` `code` ``, `- ` and `1. ` list items, pipe tables and paragraphs.
//! Nothing nests beyond inline formatting inside a block. Anything that
//! does not match a rule stays literal text.
//!
//! The output is not escaped. It is meant for text produced by the
//! analytics backend's AI service, never for user input.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,3}) (.*)$").unwrap());

static UNORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^- (.*)$").unwrap());

static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\. (.*)$").unwrap());

static TABLE_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)*\|?\s*$").unwrap()
});

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Which rendering rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownFlavor {
    /// Narrative insights: tables enabled, paragraph lines joined as-is.
    Insight,
    /// Chat answers: no tables, single newlines become `<br/>`.
    Chat,
}

impl MarkdownFlavor {
    /// Chat answers use section headings only; a leading `# ` stays text.
    fn allows_heading(self, level: usize) -> bool {
        match self {
            Self::Insight => true,
            Self::Chat => level >= 2,
        }
    }
}

/// Render narrative insight text.
pub fn render_insight(text: &str) -> String {
    render(text, MarkdownFlavor::Insight)
}

/// Render a conversational answer.
pub fn render_chat(text: &str) -> String {
    render(text, MarkdownFlavor::Chat)
}

/// Render `text` to an HTML fragment. Pure and deterministic.
pub fn render(text: &str, flavor: MarkdownFlavor) -> String {
    let text = text.replace("\r\n", "\n");
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out = Writer::new(flavor);

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if line.trim().is_empty() {
            out.flush_paragraph();
            i += 1;
            continue;
        }

        if let Some(caps) = HEADING_RE.captures(line)
            && flavor.allows_heading(caps[1].len())
        {
            out.flush_paragraph();
            let level = caps[1].len();
            out.block(format!(
                "<h{level}>{}</h{level}>",
                inline(caps[2].trim())
            ));
            i += 1;
            continue;
        }

        if let Some(kind) = ListKind::of(line) {
            out.flush_paragraph();
            let start = i;
            while i < lines.len() && ListKind::of(lines[i]) == Some(kind) {
                i += 1;
            }
            out.block(list(kind, &lines[start..i]));
            continue;
        }

        if flavor == MarkdownFlavor::Insight
            && let Some(rows) = table_rows(&lines[i..])
        {
            out.flush_paragraph();
            out.block(table(&lines[i..i + rows]));
            i += rows;
            continue;
        }

        out.push_line(line);
        i += 1;
    }

    out.finish()
}

/// Apply bold, italic and code spans, in that order.
fn inline(text: &str) -> String {
    let text = BOLD_RE.replace_all(text, "<strong>$1</strong>");
    let text = ITALIC_RE.replace_all(&text, "<em>$1</em>");
    CODE_RE.replace_all(&text, "<code>$1</code>").into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn of(line: &str) -> Option<Self> {
        if UNORDERED_RE.is_match(line) {
            Some(Self::Unordered)
        } else if ORDERED_RE.is_match(line) {
            Some(Self::Ordered)
        } else {
            None
        }
    }

    fn item<'a>(self, line: &'a str) -> &'a str {
        let re = match self {
            Self::Unordered => &*UNORDERED_RE,
            Self::Ordered => &*ORDERED_RE,
        };
        re.captures(line)
            .and_then(|c| c.get(1))
            .map_or("", |m| m.as_str())
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

fn list(kind: ListKind, lines: &[&str]) -> String {
    let items: String = lines
        .iter()
        .map(|line| format!("<li>{}</li>", inline(kind.item(line).trim())))
        .collect();
    format!("<{tag}>{items}</{tag}>", tag = kind.tag())
}

/// Number of lines forming a table at the start of `lines`, if any.
///
/// Requires a header row, a separator row and at least one data row, all
/// containing `|`.
fn table_rows(lines: &[&str]) -> Option<usize> {
    let [header, separator, ..] = lines else {
        return None;
    };
    if !header.contains('|') || !separator.contains('|') || !TABLE_SEPARATOR_RE.is_match(separator)
    {
        return None;
    }
    let body = lines[2..]
        .iter()
        .take_while(|l| !l.trim().is_empty() && l.contains('|'))
        .count();
    (body > 0).then_some(2 + body)
}

fn cells(row: &str) -> Vec<String> {
    let row = row.trim();
    let row = row.strip_prefix('|').unwrap_or(row);
    let row = row.strip_suffix('|').unwrap_or(row);
    row.split('|').map(|cell| inline(cell.trim())).collect()
}

fn table(lines: &[&str]) -> String {
    let head: String = cells(lines[0])
        .into_iter()
        .map(|c| format!("<th>{c}</th>"))
        .collect();
    let body: String = lines[2..]
        .iter()
        .map(|row| {
            let tds: String = cells(row)
                .into_iter()
                .map(|c| format!("<td>{c}</td>"))
                .collect();
            format!("<tr>{tds}</tr>")
        })
        .collect();
    format!("<table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>")
}

/// Accumulates blocks and the paragraph currently being built.
struct Writer {
    flavor: MarkdownFlavor,
    blocks: Vec<String>,
    paragraph: Vec<String>,
}

impl Writer {
    fn new(flavor: MarkdownFlavor) -> Self {
        Self {
            flavor,
            blocks: Vec::new(),
            paragraph: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.paragraph.push(inline(line.trim()));
    }

    fn block(&mut self, html: String) {
        self.blocks.push(html);
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let separator = match self.flavor {
            MarkdownFlavor::Insight => "\n",
            MarkdownFlavor::Chat => "<br/>",
        };
        let body = self.paragraph.join(separator);
        self.paragraph.clear();
        if !body.is_empty() {
            self.blocks.push(format!("<p>{body}</p>"));
        }
    }

    fn finish(mut self) -> String {
        self.flush_paragraph();
        self.blocks.join("\n")
    }
}
