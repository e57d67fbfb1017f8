//! Text layout and pagination for markdown pages.
//!
//! The layout engine turns a title and a plain-text body into a sequence of
//! A4 pages of positioned lines. Lines wrap greedily at word boundaries
//! against the usable width; the vertical cursor runs top-down and a new
//! page starts when a source line would begin below the bottom margin.
//!
//! Two quirks are deliberate and match the historical renderer: a single
//! word wider than the page is emitted unbroken, and when a wrapped line
//! overflows the page mid-way its remaining segments are dropped rather
//! than carried over.

use crate::text::metrics::Font;

/// Page geometry and type sizes for generated text pages.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Page width in points.
    pub page_width: f64,
    /// Page height in points.
    pub page_height: f64,
    /// Margin on all four sides, in points.
    pub margin: f64,
    /// Vertical advance per body line, in points.
    pub line_height: f64,
    /// Body font size in points.
    pub body_size: f64,
    /// Title font size in points.
    pub title_size: f64,
    /// Vertical advance after the title, in points.
    pub title_advance: f64,
}

impl Default for LayoutOptions {
    /// A4 portrait with the canonical sizes: 50 pt margins, 16 pt line
    /// height, 11 pt body, 16 pt bold title followed by a 30 pt advance.
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 50.0,
            line_height: 16.0,
            body_size: 11.0,
            title_size: 16.0,
            title_advance: 30.0,
        }
    }
}

impl LayoutOptions {
    /// Horizontal space available to text.
    pub fn usable_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    /// Lowest vertical offset (from the page top) a line may start at.
    pub fn max_y(&self) -> f64 {
        self.page_height - self.margin
    }
}

/// One positioned line of text.
#[derive(Debug, Clone)]
pub struct TextLine {
    /// The text to draw (not yet encoded).
    pub text: String,
    /// Font the line is set in.
    pub font: Font,
    /// Font size in points.
    pub size: f64,
    /// Vertical offset from the page top, in points.
    pub y: f64,
}

/// One laid-out page.
#[derive(Debug, Clone, Default)]
pub struct TextPage {
    /// Lines on this page, in drawing order.
    pub lines: Vec<TextLine>,
}

/// Lay out a titled plain-text document into pages.
///
/// The title is drawn bold on the first page only; the body follows,
/// wrapping and paginating per `opts`. Always produces at least one page,
/// even for an empty body.
pub fn layout_document(title: &str, body: &str, opts: &LayoutOptions) -> Vec<TextPage> {
    let mut layout = Layout::new(opts);
    layout.place_title(title);

    for line in body.lines() {
        if layout.y > opts.max_y() {
            layout.start_page();
        }
        if line.trim().is_empty() {
            layout.y += opts.line_height / 2.0;
        } else {
            layout.place_wrapped(line);
        }
    }

    layout.finish()
}

struct Layout<'a> {
    opts: &'a LayoutOptions,
    pages: Vec<TextPage>,
    current: TextPage,
    y: f64,
}

impl<'a> Layout<'a> {
    fn new(opts: &'a LayoutOptions) -> Self {
        Self {
            opts,
            pages: Vec::new(),
            current: TextPage::default(),
            y: opts.margin,
        }
    }

    fn start_page(&mut self) {
        let full = std::mem::take(&mut self.current);
        self.pages.push(full);
        self.y = self.opts.margin;
    }

    fn place_title(&mut self, title: &str) {
        self.current.lines.push(TextLine {
            text: title.to_string(),
            font: Font::HelveticaBold,
            size: self.opts.title_size,
            y: self.y,
        });
        self.y += self.opts.title_advance;
    }

    fn emit_body_line(&mut self, text: String) {
        self.current.lines.push(TextLine {
            text,
            font: Font::Helvetica,
            size: self.opts.body_size,
            y: self.y,
        });
        self.y += self.opts.line_height;
    }

    /// Wrap one source line greedily and emit its segments.
    ///
    /// Stops early when a segment lands past the bottom margin; the rest
    /// of the source line is dropped.
    fn place_wrapped(&mut self, line: &str) {
        let usable = self.opts.usable_width();
        let size = self.opts.body_size;
        let mut current = String::new();

        for word in line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if Font::Helvetica.text_width(&candidate, size) > usable && !current.is_empty() {
                self.emit_body_line(current);
                if self.y > self.opts.max_y() {
                    return;
                }
                current = word.to_string();
            } else {
                current = candidate;
            }
        }

        if !current.is_empty() {
            self.emit_body_line(current);
        }
    }

    fn finish(mut self) -> Vec<TextPage> {
        self.pages.push(self.current);
        self.pages
    }
}
