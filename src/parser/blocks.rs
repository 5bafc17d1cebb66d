//! Brace-delimited block segmentation shared by both dump grammars.
//!
//! A block opens at a line whose trimmed end is `{` and closes at the line
//! that brings the brace depth back to zero — a bare `}` at the block's own
//! level. Indented closing braces belong to nested blocks and never terminate
//! an outer block. One-line constructs such as `extension X {}` change no
//! depth and stay plain lines.

/// A declaration block: its header line and the body lines between the braces
#[derive(Debug)]
pub(crate) struct Block<'a> {
    pub header: &'a str,
    pub body: &'a [&'a str],
}

/// One element found while walking lines at a single nesting depth
#[derive(Debug)]
pub(crate) enum BlockItem<'a> {
    /// A line outside any block at this depth
    Line(&'a str),
    /// A complete block, nested structure intact inside `body`
    Block(Block<'a>),
}

pub(crate) fn opens_block(line: &str) -> bool {
    line.trim_end().ends_with('{')
}

pub(crate) fn closes_block(line: &str) -> bool {
    line.trim() == "}"
}

/// Split `lines` into plain lines and complete blocks at the current depth
///
/// The same scan is reused at every nesting level: a block's `body` is handed
/// back to `scan_items` to walk its members. An opener with no matching close
/// is skipped silently, per the best-effort grammar policy.
pub(crate) fn scan_items<'a>(lines: &'a [&'a str]) -> Vec<BlockItem<'a>> {
    let mut items = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];
        if !opens_block(line) {
            items.push(BlockItem::Line(line));
            index += 1;
            continue;
        }

        let mut depth = 1;
        let mut end = index + 1;
        while end < lines.len() {
            if opens_block(lines[end]) {
                depth += 1;
            } else if closes_block(lines[end]) {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            end += 1;
        }

        if depth == 0 {
            items.push(BlockItem::Block(Block {
                header: line,
                body: &lines[index + 1..end],
            }));
            index = end + 1;
        } else {
            // unterminated opener
            index += 1;
        }
    }

    items
}

#[cfg(test)]
mod block_tests {
    use super::*;

    fn blocks<'a>(lines: &'a [&'a str]) -> Vec<&'a str> {
        scan_items(lines)
            .into_iter()
            .filter_map(|item| match item {
                BlockItem::Block(block) => Some(block.header),
                BlockItem::Line(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_top_level_blocks_only() {
        let lines = vec![
            "public class Outer {",
            "  public class Inner {",
            "  }",
            "}",
            "public enum Beta {",
            "}",
        ];
        assert_eq!(blocks(&lines), vec!["public class Outer {", "public enum Beta {"]);
    }

    #[test]
    fn test_indented_close_does_not_terminate() {
        let lines = vec!["public class Outer {", "  var x: Int {", "    get", "  }", "}"];
        let items = scan_items(&lines);
        assert_eq!(items.len(), 1);
        match &items[0] {
            BlockItem::Block(block) => assert_eq!(block.body.len(), 3),
            BlockItem::Line(_) => panic!("expected a block"),
        }
    }

    #[test]
    fn test_one_liner_is_a_plain_line() {
        let lines = vec!["extension X : Hashable {}"];
        let items = scan_items(&lines);
        assert!(matches!(items[0], BlockItem::Line(_)));
    }

    #[test]
    fn test_unterminated_opener_is_skipped() {
        let lines = vec!["public class Broken {", "public enum Fine {", "}"];
        // the broken opener swallows nothing once its scan fails
        assert_eq!(blocks(&lines), vec!["public enum Fine {"]);
    }

    #[test]
    fn test_nested_body_rescans_cleanly() {
        let lines = vec![
            "public class Outer {",
            "  public func top()",
            "  public class Inner {",
            "    public func deep()",
            "  }",
            "}",
        ];
        let items = scan_items(&lines);
        let BlockItem::Block(outer) = &items[0] else {
            panic!("expected a block")
        };
        let inner_items = scan_items(outer.body);
        assert_eq!(inner_items.len(), 2);
        assert!(matches!(inner_items[0], BlockItem::Line("  public func top()")));
        assert!(matches!(&inner_items[1], BlockItem::Block(b) if b.body.len() == 1));
    }
}
