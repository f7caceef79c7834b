//! Line wrapping.
//!
//! Layout walks tokens left to right and top to bottom, deciding where each
//! one starts. It knows nothing about pixels or fonts: text width comes from
//! the `measure` callback, so the same code runs against the canvas or a
//! fixed-advance stub.

use crate::tokenize::Token;

/// Page measurements that drive wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margins: f32,
    pub font_size: f32,
    pub line_spacing: f32,
}

impl PageGeometry {
    /// Baseline of the first line.
    pub fn start_y(&self) -> f32 {
        self.margins + self.font_size
    }

    fn right_edge(&self) -> f32 {
        self.width - self.margins
    }
}

/// A piece of text anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub text: &'a str,
    pub x: f32,
    pub y: f32,
    /// Zero-based line index.
    pub line: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout<'a> {
    pub placements: Vec<Placement<'a>>,
    /// Number of lines the cursor visited.
    pub lines: usize,
    /// Whether text was dropped because it ran off the bottom of the page.
    pub truncated: bool,
}

struct Cursor {
    x: f32,
    y: f32,
    line: usize,
}

impl Cursor {
    fn new_line(&mut self, geometry: &PageGeometry) {
        self.x = geometry.margins;
        self.y += geometry.line_spacing;
        self.line += 1;
    }
}

/// Lay out `tokens` on a page.
pub fn layout_tokens<'a>(
    tokens: &[Token<'a>],
    geometry: &PageGeometry,
    mut measure: impl FnMut(&str) -> f32,
) -> Layout<'a> {
    let mut layout = Layout {
        placements: Vec::new(),
        lines: 1,
        truncated: false,
    };
    let mut cursor = Cursor {
        x: geometry.margins,
        y: geometry.start_y(),
        line: 0,
    };

    'tokens: for (idx, token) in tokens.iter().enumerate() {
        if cursor.y > geometry.height {
            layout.truncated = any_text(&tokens[idx..]);
            break;
        }

        if token.has_newline() {
            for (fragment_idx, fragment) in token.text.split('\n').enumerate() {
                if fragment_idx > 0 {
                    cursor.new_line(geometry);
                    if cursor.y > geometry.height {
                        // Only trailing newlines left means nothing was lost
                        layout.truncated = any_text(&tokens[idx + 1..])
                            || !fragment_rest_is_blank(token.text, fragment_idx);
                        break 'tokens;
                    }
                }
                if fragment.is_empty() {
                    continue;
                }
                layout.placements.push(Placement {
                    text: fragment,
                    x: cursor.x,
                    y: cursor.y,
                    line: cursor.line,
                });
                cursor.x += measure(fragment);
            }
            continue;
        }

        let width = measure(token.text);
        if cursor.x + width > geometry.right_edge() && cursor.x > geometry.margins {
            cursor.new_line(geometry);
            log::trace!(
                target: "handscript",
                "wrap before {:?} onto line {}",
                token.text,
                cursor.line
            );
        }

        if cursor.y > geometry.height {
            // Dropping only whitespace loses nothing
            layout.truncated = any_text(&tokens[idx..]);
            break;
        }

        layout.placements.push(Placement {
            text: token.text,
            x: cursor.x,
            y: cursor.y,
            line: cursor.line,
        });
        cursor.x += width;
    }

    layout.lines = cursor.line + 1;
    if layout.truncated {
        log::debug!(target: "handscript", "text truncated after {} lines", layout.lines);
    }
    layout
}

fn any_text(tokens: &[Token<'_>]) -> bool {
    tokens.iter().any(|t| !t.text.trim().is_empty())
}

fn fragment_rest_is_blank(text: &str, from_fragment: usize) -> bool {
    text.split('\n')
        .skip(from_fragment)
        .all(|fragment| fragment.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    const ADVANCE: f32 = 10.0;

    fn fixed(text: &str) -> f32 {
        text.chars().count() as f32 * ADVANCE
    }

    fn geometry(width: f32, height: f32) -> PageGeometry {
        PageGeometry {
            width,
            height,
            margins: 10.0,
            font_size: 10.0,
            line_spacing: 20.0,
        }
    }

    fn visible<'a>(layout: &'a Layout<'_>) -> Vec<&'a Placement<'a>> {
        layout
            .placements
            .iter()
            .filter(|p| !p.text.trim().is_empty())
            .collect()
    }

    #[test]
    fn test_newline_starts_next_line() {
        let tokens = tokenize("Hi\nBye");
        let layout = layout_tokens(&tokens, &geometry(200.0, 200.0), fixed);
        let placed = visible(&layout);
        assert_eq!(placed.len(), 2);
        assert_eq!((placed[0].text, placed[0].x, placed[0].y), ("Hi", 10.0, 20.0));
        assert_eq!((placed[1].text, placed[1].x, placed[1].y), ("Bye", 10.0, 40.0));
        assert_eq!(placed[1].y - placed[0].y, 20.0);
        assert_eq!(layout.lines, 2);
        assert!(!layout.truncated);
    }

    #[test]
    fn test_blank_lines_advance_once_each() {
        let tokens = tokenize("a\n\n\nb");
        let layout = layout_tokens(&tokens, &geometry(200.0, 500.0), fixed);
        let placed = visible(&layout);
        assert_eq!(placed[1].y - placed[0].y, 3.0 * 20.0);
        assert_eq!(placed[1].line, 3);
    }

    #[test]
    fn test_cjk_wraps_per_character() {
        // Right edge at 40 leaves room for three 10px glyphs from x = 10
        let tokens = tokenize("一二三四五六七八九十");
        let layout = layout_tokens(&tokens, &geometry(50.0, 500.0), fixed);
        assert_eq!(layout.placements.len(), 10);

        let mut per_line = vec![0; layout.lines];
        for placement in &layout.placements {
            per_line[placement.line] += 1;
        }
        assert_eq!(per_line, vec![3, 3, 3, 1]);
        assert!(layout
            .placements
            .iter()
            .all(|p| p.x + ADVANCE <= 40.0 + f32::EPSILON));
    }

    #[test]
    fn test_words_stay_whole() {
        let tokens = tokenize("alpha beta gamma");
        let layout = layout_tokens(&tokens, &geometry(80.0, 500.0), fixed);
        let words: Vec<(&str, usize)> = visible(&layout).iter().map(|p| (p.text, p.line)).collect();
        assert_eq!(words, vec![("alpha", 0), ("beta", 1), ("gamma", 2)]);
    }

    #[test]
    fn test_wrapped_lines_start_at_margin() {
        let tokens = tokenize("the quick brown fox jumps over the lazy dog again and again");
        let layout = layout_tokens(&tokens, &geometry(120.0, 1000.0), fixed);
        assert!(layout.lines > 1);
        for line in 1..layout.lines {
            let first = layout
                .placements
                .iter()
                .find(|p| p.line == line)
                .unwrap();
            assert_eq!(first.x, 10.0);
        }
    }

    #[test]
    fn test_overlong_word_is_not_wrapped_at_margin() {
        let tokens = tokenize("supercalifragilistic");
        let layout = layout_tokens(&tokens, &geometry(60.0, 200.0), fixed);
        assert_eq!(layout.placements.len(), 1);
        assert_eq!(layout.placements[0].x, 10.0);
        assert_eq!(layout.lines, 1);
    }

    #[test]
    fn test_truncates_at_page_bottom() {
        let text = "word ".repeat(200);
        let tokens = tokenize(&text);
        let page = geometry(100.0, 100.0);
        let layout = layout_tokens(&tokens, &page, fixed);
        assert!(layout.truncated);
        assert!(layout.placements.iter().all(|p| p.y <= page.height));
        assert!(layout.placements.len() < tokens.len());
    }

    #[test]
    fn test_newline_past_bottom_stops() {
        let tokens = tokenize("one\ntwo\nthree\nfour\nfive\nsix");
        let page = geometry(200.0, 60.0);
        let layout = layout_tokens(&tokens, &page, fixed);
        let texts: Vec<&str> = visible(&layout).iter().map(|p| p.text).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert!(layout.truncated);
    }

    #[test]
    fn test_trailing_newline_is_not_truncation() {
        let tokens = tokenize("one\ntwo\nthree\n");
        let layout = layout_tokens(&tokens, &geometry(200.0, 60.0), fixed);
        assert_eq!(visible(&layout).len(), 3);
        assert!(!layout.truncated);
    }

    #[test]
    fn test_trailing_space_is_not_truncation() {
        // The word fills the only line; the space wraps below the page
        let tokens = tokenize("aaaaaa ");
        let page = geometry(80.0, 30.0);
        let layout = layout_tokens(&tokens, &page, fixed);
        let texts: Vec<&str> = layout.placements.iter().map(|p| p.text).collect();
        assert_eq!(texts, vec!["aaaaaa"]);
        assert!(!layout.truncated);
    }

    #[test]
    fn test_dropped_word_after_space_is_truncation() {
        let tokens = tokenize("aaaaaa b");
        let layout = layout_tokens(&tokens, &geometry(80.0, 30.0), fixed);
        assert!(layout.truncated);
    }

    #[test]
    fn test_empty_text() {
        let layout = layout_tokens(&[], &geometry(200.0, 200.0), fixed);
        assert!(layout.placements.is_empty());
        assert_eq!(layout.lines, 1);
        assert!(!layout.truncated);
    }

    #[test]
    fn test_zero_width_measure_never_wraps() {
        let tokens = tokenize("no fonts means no width at all");
        let layout = layout_tokens(&tokens, &geometry(50.0, 200.0), |_| 0.0);
        assert!(layout.placements.iter().all(|p| p.line == 0 && p.x == 10.0));
    }
}
