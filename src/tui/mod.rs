// TUI module for rendering the terminal interface
pub mod colors;
pub mod helpers;
pub mod input;

// Re-exports
pub use colors::*;
pub use helpers::{centered_rect, tree_indent, truncate_left};
pub use input::{handle_key_event, handle_prompt_input, KeyAction, PromptAction};

use crate::app::{App, Display, Focus, OpenPrompt};
use crate::preview::highlight::expand_tabs;
use crate::preview::{
    calculate_resize_dimensions, image_to_halfblock_lines, Highlighter, MetadataEntry, Preview,
};
use image::GenericImageView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table,
        TableState, Wrap,
    },
    Frame,
};

/// UI view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Main browsing view
    Browsing,
    /// Help overlay visible
    Help,
    /// Open-path prompt visible
    OpenPrompt,
    /// Welcome screen shown on first launch
    Welcome,
}

struct RenderedLines {
    generation: u64,
    size: (u16, u16),
    lines: Vec<Line<'static>>,
}

/// Draws frames, keeping the last highlighted or rasterised content
/// until the display or the pane size changes
pub struct Renderer {
    highlighter: Highlighter,
    rendered: Option<RenderedLines>,
}

impl Renderer {
    pub fn new(theme: &str) -> Self {
        Self {
            highlighter: Highlighter::new(theme),
            rendered: None,
        }
    }

    /// Pane label: the syntax name for code, else the preview kind
    fn preview_label(&self, preview: &Preview) -> String {
        match preview {
            Preview::Code { extension, .. } => self
                .highlighter
                .syntax_name(extension)
                .unwrap_or_else(|| preview.kind_label().to_string()),
            _ => preview.kind_label().to_string(),
        }
    }

    fn preview_lines(
        &mut self,
        generation: u64,
        preview: &Preview,
        area: Rect,
    ) -> Vec<Line<'static>> {
        let size = (area.width, area.height);
        if let Some(rendered) = &self.rendered {
            if rendered.generation == generation && rendered.size == size {
                return rendered.lines.clone();
            }
        }

        let lines = match preview {
            Preview::Code { content, extension } => self
                .highlighter
                .highlight(content, extension)
                .unwrap_or_else(|e| {
                    log::debug!("falling back to plain text for .{}: {}", extension, e);
                    plain_lines(content)
                }),
            Preview::Text(content) => plain_lines(content),
            Preview::Image(img) => {
                let (width, height) = img.dimensions();
                let (w, h) = calculate_resize_dimensions(
                    width,
                    height,
                    area.width as u32,
                    area.height as u32 * 2,
                );
                image_to_halfblock_lines(img, w, h)
            }
            Preview::Metadata { .. } => Vec::new(),
        };

        self.rendered = Some(RenderedLines {
            generation,
            size,
            lines: lines.clone(),
        });
        lines
    }
}

fn plain_lines(content: &str) -> Vec<Line<'static>> {
    content
        .lines()
        .map(|line| Line::from(expand_tabs(line)))
        .collect()
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { BORDER_FOCUSED } else { BORDER_COLOR };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(title)
}

/// Renders the whole screen plus the overlay for `view`
pub fn render(frame: &mut Frame, app: &App, view: &ViewState, renderer: &mut Renderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with active path
            Constraint::Min(0),    // Tabs and content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(chunks[1]);

    render_tabs(frame, body[0], app);
    render_content(frame, body[1], app, renderer);
    render_footer(frame, chunks[2], app);

    match view {
        ViewState::Browsing => {}
        ViewState::Help => render_help_overlay(frame),
        ViewState::Welcome => render_welcome_overlay(frame),
        ViewState::OpenPrompt => render_open_prompt(frame, &app.prompt, app.status.as_deref()),
    }
}

/// Header shows the active tab's full path, like a window title
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    const LABEL: &str = " fsview ";
    let room = (area.width as usize).saturating_sub(LABEL.len() + 3);
    let title = app.title().unwrap_or_else(|| "No tab open".to_string());

    let line = Line::from(vec![
        Span::styled(
            LABEL,
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(truncate_left(&title, room), Style::default().fg(TEXT_PRIMARY)),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER_COLOR)),
    );

    frame.render_widget(header, area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .tabs()
        .iter()
        .map(|tab| {
            let style = if tab.is_active {
                Style::default()
                    .fg(ACTIVE_TAB_FG)
                    .bg(ACTIVE_TAB_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_PRIMARY)
            };
            ListItem::new(format!("{} {}", tab.icon(), tab.display_name())).style(style)
        })
        .collect();

    let list = List::new(items).block(pane_block(
        format!(" Tabs ({}) ", app.tabs().len()),
        app.focus == Focus::Tabs,
    ));

    // Selecting the active tab keeps it scrolled into view
    let mut state = ListState::default().with_selected(app.navigator().active_index());
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_content(frame: &mut Frame, area: Rect, app: &App, renderer: &mut Renderer) {
    let focused = app.focus == Focus::Content;
    let name = app
        .active_tab()
        .map(|tab| tab.display_name())
        .unwrap_or_default();

    match app.display() {
        Display::Directory { tree, .. } => {
            let title = if *tree {
                format!(" {} (tree) ", name)
            } else {
                format!(" {} ", name)
            };
            render_directory(frame, area, app, pane_block(title, focused));
        }
        Display::Preview(Preview::Metadata { title, entries }) => {
            render_metadata(frame, area, entries, pane_block(format!(" {} ", title), focused));
        }
        Display::Preview(preview) => {
            let label = renderer.preview_label(preview);
            let block = pane_block(format!(" {} · {} ", name, label), focused);
            let inner = block.inner(area);
            let lines = renderer.preview_lines(app.generation(), preview, inner);

            let paragraph = match preview {
                Preview::Image(_) => Paragraph::new(lines).alignment(Alignment::Center),
                Preview::Text(_) => Paragraph::new(lines)
                    .style(Style::default().fg(TEXT_PRIMARY))
                    .wrap(Wrap { trim: false })
                    .scroll((app.scroll, 0)),
                _ => Paragraph::new(lines).scroll((app.scroll, 0)),
            };
            frame.render_widget(paragraph.block(block), area);
        }
        Display::Placeholder(message) => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    message.clone(),
                    Style::default()
                        .fg(ACCENT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )),
            ];
            let paragraph = Paragraph::new(lines)
                .block(pane_block(format!(" {} ", name), focused))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
        Display::Empty => {
            let paragraph = Paragraph::new(Span::styled(
                "No tab open. Press o to open a path.",
                Style::default().fg(TEXT_SECONDARY),
            ))
            .block(pane_block(" Content ".to_string(), focused))
            .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
        }
    }
}

fn render_directory(frame: &mut Frame, area: Rect, app: &App, block: Block<'static>) {
    let rows = app.rows();
    if rows.is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            "This folder is empty",
            Style::default().fg(TEXT_SECONDARY),
        ))
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|(depth, entry)| {
            let color = if entry.is_directory {
                ACCENT_SECONDARY
            } else {
                TEXT_PRIMARY
            };
            Row::new(vec![
                Cell::from(format!(
                    "{}{} {}",
                    tree_indent(*depth),
                    entry.icon(),
                    entry.name
                ))
                .style(Style::default().fg(color)),
                Cell::from(entry.type_label()).style(Style::default().fg(TEXT_SECONDARY)),
            ])
        })
        .collect();

    let header = Row::new(vec!["Name", "Type"]).style(
        Style::default()
            .fg(ACCENT_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(table_rows, [Constraint::Min(20), Constraint::Length(8)])
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(SELECTION_BG).add_modifier(Modifier::BOLD));

    let mut state = TableState::default().with_selected(Some(app.entry_cursor));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_metadata(
    frame: &mut Frame,
    area: Rect,
    entries: &[MetadataEntry],
    block: Block<'static>,
) {
    let rows: Vec<Row> = entries
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.key.clone()).style(Style::default().fg(TEXT_SECONDARY)),
                Cell::from(entry.value.clone()).style(Style::default().fg(TEXT_PRIMARY)),
            ])
        })
        .collect();

    let header = Row::new(vec!["Property", "Value"]).style(
        Style::default()
            .fg(ACCENT_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(10)])
        .header(header)
        .block(block);

    frame.render_widget(table, area);
}

/// Renders the footer with controls, or the latest status message
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(ACCENT_PRIMARY),
        )),
        None => {
            let key = |k: &'static str| {
                Span::styled(
                    k,
                    Style::default()
                        .fg(ACCENT_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                )
            };
            let label = |l: &'static str| Span::styled(l, Style::default().fg(TEXT_SECONDARY));
            let sep = || Span::raw("  │  ");
            Line::from(vec![
                key("Enter "),
                label("Open"),
                sep(),
                key("Tab "),
                label("Next tab"),
                sep(),
                key("←→ "),
                label("Focus"),
                sep(),
                key("o "),
                label("Open path"),
                sep(),
                key("i "),
                label("Info"),
                sep(),
                key("? "),
                label("Help"),
                sep(),
                key("q "),
                label("Quit"),
            ])
        }
    };

    let footer = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

fn help_row(keys: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", keys), Style::default().fg(ACCENT_SECONDARY)),
        Span::raw(action),
    ])
}

/// Renders the help overlay
pub fn render_help_overlay(frame: &mut Frame) {
    let help_area = centered_rect(60, 80, frame.area());

    // Clear background
    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let help_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        help_row("↑↓ / k j", "Move cursor or switch tab"),
        help_row("PgUp PgDn", "Scroll a page"),
        help_row("Enter", "Open entry in a tab"),
        help_row("Tab S-Tab", "Next / previous tab"),
        help_row("← / h", "Focus tab list"),
        help_row("→ / l", "Focus content"),
        Line::from(""),
        help_row("o", "Open a path"),
        help_row("i", "File information"),
        help_row("t", "Toggle tree view"),
        help_row("r / F5", "Refresh"),
        Line::from(""),
        help_row("q / Esc", "Quit"),
        help_row("?", "Toggle help"),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(help_lines).style(Style::default().fg(TEXT_PRIMARY));

    frame.render_widget(paragraph, inner);
}

/// Renders the welcome dialog overlay
pub fn render_welcome_overlay(frame: &mut Frame) {
    let area = centered_rect(70, 70, frame.area());

    // Clear background
    frame.render_widget(Clear, area);

    let bullet = |text: &'static str| {
        Line::from(vec![
            Span::styled("  •  ", Style::default().fg(ACCENT_SECONDARY)),
            Span::styled(text, Style::default().fg(TEXT_PRIMARY)),
        ])
    };

    let welcome_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to fsview!",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Browse folders and preview files in tabs.",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(""),
        bullet("Enter opens the highlighted entry in its own tab"),
        bullet("Opening the same path again reuses its tab"),
        bullet("Code is highlighted, images are drawn in the terminal"),
        bullet("Binary files show a table of file information"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to start",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(welcome_lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
                .style(Style::default().bg(BG_DARK)),
        );

    frame.render_widget(paragraph, area);
}

/// Renders the open-path prompt with its filter and last error
pub fn render_open_prompt(frame: &mut Frame, prompt: &OpenPrompt, status: Option<&str>) {
    let area = centered_rect(70, 30, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Open ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Path: ", Style::default().fg(TEXT_SECONDARY)),
            Span::styled(prompt.input.clone(), Style::default().fg(TEXT_PRIMARY)),
            Span::styled("▏", Style::default().fg(ACCENT_HIGHLIGHT)),
        ]),
        Line::from(vec![
            Span::styled(" Filter: ", Style::default().fg(TEXT_SECONDARY)),
            Span::styled(prompt.filter.label(), Style::default().fg(ACCENT_SECONDARY)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Enter open  │  Tab filter  │  Esc cancel",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    if let Some(status) = status {
        lines.push(Line::from(Span::styled(
            format!(" {}", status),
            Style::default().fg(ACCENT_PRIMARY),
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppOptions;
    use crate::preview::highlight::DEFAULT_THEME;
    use ratatui::{backend::TestBackend, Terminal};
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("readme.txt"), "hello from readme").unwrap();
        fs::write(dir.path().join("lib.rs"), "pub fn answer() -> u32 { 42 }").unwrap();
        dir
    }

    fn draw(app: &App, view: ViewState) -> Terminal<TestBackend> {
        let mut renderer = Renderer::new(DEFAULT_THEME);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| render(frame, app, &view, &mut renderer))
            .unwrap();
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    mod layout_tests {
        use super::*;

        #[test]
        fn test_render_directory_listing() {
            let dir = fixture();
            let app = App::new(dir.path(), AppOptions::default());
            let terminal = draw(&app, ViewState::Browsing);
            let text = buffer_text(&terminal);

            assert!(text.contains("docs"));
            assert!(text.contains("Folder"));
            assert!(text.contains("readme.txt"));
            assert!(text.contains("File"));
            assert!(text.contains("Tabs (1)"));
        }

        #[test]
        fn test_render_text_preview() {
            let dir = fixture();
            let mut app = App::new(dir.path(), AppOptions::default());
            app.open(&dir.path().join("readme.txt"), "readme.txt", false);

            let text = buffer_text(&draw(&app, ViewState::Browsing));

            assert!(text.contains("hello from readme"));
            assert!(text.contains("Tabs (2)"));
        }

        #[test]
        fn test_render_code_preview() {
            let dir = fixture();
            let mut app = App::new(dir.path(), AppOptions::default());
            app.open(&dir.path().join("lib.rs"), "lib.rs", false);

            let text = buffer_text(&draw(&app, ViewState::Browsing));

            assert!(text.contains("answer"));
            assert!(text.contains("lib.rs · Rust"));
        }

        #[test]
        fn test_render_placeholder() {
            let dir = fixture();
            let mut app = App::new(dir.path(), AppOptions::default());
            app.open(&dir.path().join("gone.txt"), "gone.txt", false);

            let text = buffer_text(&draw(&app, ViewState::Browsing));

            assert!(text.contains("Error loading file"));
        }

        #[test]
        fn test_render_file_info_table() {
            let dir = fixture();
            let mut app = App::new(dir.path(), AppOptions::default());
            app.open(&dir.path().join("readme.txt"), "readme.txt", false);
            app.show_file_info();

            let text = buffer_text(&draw(&app, ViewState::Browsing));

            assert!(text.contains("File Information: readme.txt"));
            assert!(text.contains("File Size"));
            assert!(text.contains(".TXT"));
        }

        #[test]
        fn test_active_tab_is_highlighted() {
            let dir = fixture();
            let mut app = App::new(dir.path(), AppOptions::default());
            app.open(&dir.path().join("readme.txt"), "readme.txt", false);

            let terminal = draw(&app, ViewState::Browsing);
            let buffer = terminal.backend().buffer();
            let width = buffer.area.width as usize;

            // Wide icons leave reset continuation cells, so look across the
            // whole tab column rather than at a fixed x
            let tab_columns = 1..width / 4 - 1;
            let highlighted_rows: Vec<usize> = (0..buffer.area.height as usize)
                .filter(|y| {
                    tab_columns
                        .clone()
                        .any(|x| buffer.content()[y * width + x].bg == ACTIVE_TAB_BG)
                })
                .collect();
            assert_eq!(highlighted_rows.len(), 1);

            let row = highlighted_rows[0];
            let line: String = buffer.content()[row * width..row * width + width / 4]
                .iter()
                .map(|c| c.symbol())
                .collect();
            assert!(line.contains("readme.txt"));
        }

        #[test]
        fn test_header_shows_active_path() {
            let dir = fixture();
            let mut app = App::new(dir.path(), AppOptions::default());
            app.open(&dir.path().join("lib.rs"), "lib.rs", false);

            let text = buffer_text(&draw(&app, ViewState::Browsing));

            assert!(text.contains("fsview"));
            assert!(text.contains("lib.rs"));
        }

        #[test]
        fn test_render_status_in_footer() {
            let dir = fixture();
            let mut app = App::new(dir.path(), AppOptions::default());
            app.status = Some("something went wrong".to_string());

            let text = buffer_text(&draw(&app, ViewState::Browsing));

            assert!(text.contains("something went wrong"));
            assert!(!text.contains("Next tab"));
        }
    }

    mod overlay_tests {
        use super::*;

        #[test]
        fn test_render_help_overlay() {
            let dir = fixture();
            let app = App::new(dir.path(), AppOptions::default());
            let text = buffer_text(&draw(&app, ViewState::Help));

            assert!(text.contains("Keyboard Shortcuts"));
            assert!(text.contains("Toggle tree view"));
        }

        #[test]
        fn test_render_welcome_overlay() {
            let dir = fixture();
            let app = App::new(dir.path(), AppOptions::default());
            let text = buffer_text(&draw(&app, ViewState::Welcome));

            assert!(text.contains("Welcome to fsview!"));
        }

        #[test]
        fn test_render_open_prompt() {
            let dir = fixture();
            let mut app = App::new(dir.path(), AppOptions::default());
            app.prompt.input = "docs".to_string();
            app.prompt.filter = app.prompt.filter.next();

            let text = buffer_text(&draw(&app, ViewState::OpenPrompt));

            assert!(text.contains("Path: docs"));
            assert!(text.contains("Text files (*.txt)"));
        }
    }

    mod renderer_tests {
        use super::*;

        #[test]
        fn test_lines_reused_for_same_generation() {
            let mut renderer = Renderer::new(DEFAULT_THEME);
            let preview = Preview::Text("one\ntwo".to_string());
            let area = Rect::new(0, 0, 40, 10);

            let first = renderer.preview_lines(1, &preview, area);
            // A different payload under the same key returns the cached lines
            let other = Preview::Text("changed".to_string());
            let second = renderer.preview_lines(1, &other, area);

            assert_eq!(first, second);
            assert_eq!(first.len(), 2);
        }

        #[test]
        fn test_code_label_names_syntax() {
            let renderer = Renderer::new(DEFAULT_THEME);
            let code = |ext: &str| Preview::Code {
                content: String::new(),
                extension: ext.to_string(),
            };

            assert_eq!(renderer.preview_label(&code("py")), "Python");
            assert_eq!(renderer.preview_label(&code("ts")), "JavaScript");
            assert_eq!(renderer.preview_label(&code("zzz")), "Code");
            assert_eq!(renderer.preview_label(&Preview::Text(String::new())), "Text");
        }

        #[test]
        fn test_lines_rebuilt_on_resize() {
            let mut renderer = Renderer::new(DEFAULT_THEME);
            let img = image::RgbImage::from_fn(40, 40, |_, _| image::Rgb([10, 200, 30]));
            let preview = Preview::Image(std::sync::Arc::new(image::DynamicImage::ImageRgb8(img)));

            let small = renderer.preview_lines(1, &preview, Rect::new(0, 0, 10, 5));
            let large = renderer.preview_lines(1, &preview, Rect::new(0, 0, 40, 20));

            assert_eq!(small.len(), 5);
            assert_eq!(large.len(), 20);
        }
    }
}
