use crate::constant::MINIMUM_DESCRIPTION_WIDTH;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Two columns: a fixed-width left column, and a word-wrapped right column.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    left: usize,
    padding: usize,
    right: usize,
}

impl ColumnRenderer {
    /// Produce a renderer whose right column takes up whatever `total_width` leaves over.
    /// The right column never drops below the minimum description width.
    pub(crate) fn guided(left: usize, padding: usize, total_width: usize) -> Self {
        let non_right = left + padding;

        let right = if non_right + MINIMUM_DESCRIPTION_WIDTH <= total_width {
            total_width - non_right
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_right} do not fit within the total {total_width}.  Selecting right: {MINIMUM_DESCRIPTION_WIDTH}.");
            }

            MINIMUM_DESCRIPTION_WIDTH
        };

        Self::new(left, padding, right)
    }

    pub(crate) fn new(left: usize, padding: usize, right: usize) -> Self {
        Self {
            left,
            padding,
            right,
        }
    }

    pub(crate) fn render(&self, left: &str, right: &str) -> Vec<String> {
        let left_width = self.left;
        let indent = self.left + self.padding;
        let padding = format!("{:width$}", "", width = self.padding);
        let mut out = Vec::default();

        for (i, part) in chunk(right, self.right).iter().enumerate() {
            if i == 0 {
                out.push(format!("{left:left_width$}{padding}{part}"));
            } else {
                out.push(format!("{:indent$}{part}", ""));
            }
        }

        if out.is_empty() {
            out.push(left.to_string());
        }

        out
    }
}

/// Lay out `items` after `head`, separated by spaces, starting a new line (indented by `indent`) whenever the next item would exceed `width`.
/// Items are never split.
pub(crate) fn flow(head: &str, indent: usize, items: &[String], width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = head.to_string();
    let mut current_length = head.chars().count();

    for item in items {
        let item_length = item.chars().count();

        if current_length + 1 + item_length <= width {
            current.push(' ');
            current.push_str(item);
            current_length += 1 + item_length;
        } else {
            lines.push(std::mem::take(&mut current));
            current = format!("{:indent$}{item}", "");
            current_length = indent + item_length;
        }
    }

    lines.push(current);
    lines
}

/// Word-wrap `paragraph` into lines of at most `width` characters, hyphenating words that are too long.
pub(crate) fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    // Hyphenation needs room for at least one character and the hyphen.
    let width = std::cmp::max(width, 2);
    let mut lines = Vec::default();
    let mut current = String::default();
    let mut current_length = 0;

    for word in paragraph.split(' ') {
        if word.is_empty() {
            continue;
        }

        let word_length = word.chars().count();

        if current.is_empty() {
            current_length = hyphenate(width, &mut lines, &mut current, word);
        } else if current_length + word_length + 1 <= width {
            current.push(' ');
            current.push_str(word);
            current_length += word_length + 1;
        } else {
            lines.push(std::mem::take(&mut current));
            current_length = hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// Returns the length of what remains in `current`.
fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) -> usize {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let piece: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{piece}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
    characters.len() - left
}

/// Where the help output goes.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }
}
