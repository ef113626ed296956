//! Page layout and section rendering.

use glyphfolio_content::{LETTER_HEIGHT, Profile, banner_width, build_banner};
use glyphfolio_core::{ColorTheme, Section};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::form::{ContactForm, FormFocus};

/// Terminals narrower than this get single-column grids.
const NARROW_WIDTH: u16 = 60;

/// Height of the header: banner plus navigation bar.
pub const HEADER_HEIGHT: u16 = LETTER_HEIGHT as u16 + 2;

/// Everything the page needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub profile: &'a Profile,
    pub section: Section,
    pub scroll: u16,
    pub form: &'a ContactForm,
    pub theme: ColorTheme,
    pub background_on: bool,
}

/// Render the page on top of whatever is already in the frame.
pub fn render(frame: &mut Frame, view: &PageView) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT), // Banner + navigation
        Constraint::Length(1),             // Spacing
        Constraint::Fill(1),               // Section body
        Constraint::Length(2),             // Footer
        Constraint::Length(1),             // Help text
    ])
    .split(frame.area());

    render_header(frame, chunks[0], view);
    render_section(frame, chunks[2], view);
    render_footer(frame, chunks[3], view);
    render_help(frame, chunks[4], view);
}

fn render_header(frame: &mut Frame, area: Rect, view: &PageView) {
    let accent = Style::new().fg(view.theme.accent());
    let [banner_area, nav_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

    // Fall back to plain text when the block letters do not fit
    let banner: Vec<Line> = if banner_width(view.profile.name) <= banner_area.width as usize {
        build_banner(view.profile.name)
            .into_iter()
            .map(|s| Line::from(s).style(accent))
            .collect()
    } else {
        vec![Line::from(view.profile.name.bold().fg(view.theme.accent()))]
    };
    frame.render_widget(
        Paragraph::new(banner).alignment(Alignment::Center),
        banner_area,
    );

    frame.render_widget(nav_line(view.section, view.theme), nav_area);
}

/// Navigation bar with the active section highlighted.
pub fn nav_line(active: Section, theme: ColorTheme) -> Line<'static> {
    let mut spans = Vec::with_capacity(Section::ALL.len() * 2);
    for (i, section) in Section::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(" · ".dark_gray());
        }
        let label = format!("{} {}", i + 1, section.label());
        if section == active {
            spans.push(Span::styled(
                label,
                Style::new()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            spans.push(Span::styled(label, Style::new().fg(theme.body())));
        }
    }
    Line::from(spans).centered()
}

fn render_section(frame: &mut Frame, area: Rect, view: &PageView) {
    let [heading_area, body_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);

    let heading = Line::from(view.section.heading().bold().fg(view.theme.accent()));
    frame.render_widget(heading, heading_area);

    match view.section {
        Section::About => render_about(frame, body_area, view),
        Section::Skills => render_skills(frame, body_area, view),
        Section::Projects => render_projects(frame, body_area, view),
        Section::Testimonials => render_testimonials(frame, body_area, view),
        Section::Contact => render_contact(frame, body_area, view),
    }
}

fn render_about(frame: &mut Frame, area: Rect, view: &PageView) {
    // Style spans only; an area style would recolor background glyphs
    let bio = Paragraph::new(view.profile.bio.fg(view.theme.body()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .scroll((view.scroll, 0));
    frame.render_widget(bio, area);
}

fn render_skills(frame: &mut Frame, area: Rect, view: &PageView) {
    let cards: Vec<Text> = view
        .profile
        .skills
        .iter()
        .map(|skill| {
            Text::from(vec![
                Line::from(skill.icon.to_string().fg(view.theme.accent())).centered(),
                Line::from(skill.name.bold().fg(view.theme.accent())).centered(),
                Line::from(skill.description.fg(view.theme.body())).centered(),
            ])
        })
        .collect();
    render_grid(frame, area, cards, 7, view);
}

fn render_projects(frame: &mut Frame, area: Rect, view: &PageView) {
    let cards: Vec<Text> = view
        .profile
        .projects
        .iter()
        .map(|project| {
            Text::from(vec![
                Line::from(project.title.bold().fg(view.theme.accent())),
                Line::from(project.description.fg(view.theme.body())),
            ])
        })
        .collect();
    render_grid(frame, area, cards, 6, view);
}

fn render_testimonials(frame: &mut Frame, area: Rect, view: &PageView) {
    let cards: Vec<Text> = view
        .profile
        .testimonials
        .iter()
        .map(|testimonial| {
            Text::from(vec![
                Line::from(format!("\"{}\"", testimonial.feedback).fg(view.theme.body())),
                Line::from(format!("- {}", testimonial.name).fg(view.theme.accent())),
            ])
        })
        .collect();
    render_grid(frame, area, cards, 7, view);
}

/// Lines the About bio may scroll.
const ABOUT_MAX_SCROLL: u16 = 8;

/// Columns a card section uses when the terminal is wide enough.
fn preferred_columns(section: Section) -> usize {
    match section {
        Section::Skills | Section::Testimonials => 3,
        Section::Projects => 2,
        Section::About | Section::Contact => 1,
    }
}

/// Largest scroll offset for `section` on a terminal `width` cells wide.
/// Card sections scroll by rows of cards.
pub fn max_scroll(profile: &Profile, section: Section, width: u16) -> u16 {
    match section {
        Section::About => ABOUT_MAX_SCROLL,
        Section::Contact => 0,
        grid => {
            let columns = grid_columns(width, preferred_columns(grid));
            let rows = profile.item_count(grid).div_ceil(columns);
            rows.saturating_sub(1) as u16
        }
    }
}

/// Number of grid columns that fit in `width`.
pub fn grid_columns(width: u16, preferred: usize) -> usize {
    if width < NARROW_WIDTH { 1 } else { preferred.max(1) }
}

/// Lay out cards in rows of bordered boxes, skipping `view.scroll` rows.
fn render_grid(
    frame: &mut Frame,
    area: Rect,
    cards: Vec<Text<'static>>,
    card_height: u16,
    view: &PageView,
) {
    let columns = grid_columns(area.width, preferred_columns(view.section));
    let rows: Vec<Vec<Text>> = cards
        .chunks(columns)
        .map(<[Text<'static>]>::to_vec)
        .collect();
    let skip = (view.scroll as usize).min(rows.len().saturating_sub(1));

    let visible_rows = (area.height / card_height.max(1)) as usize;
    let row_areas = Layout::vertical(vec![Constraint::Length(card_height); visible_rows]).split(area);

    for (row, row_area) in rows.into_iter().skip(skip).zip(row_areas.iter()) {
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .spacing(1)
            .split(*row_area);
        for (card, cell) in row.into_iter().zip(cells.iter()) {
            let block = Block::bordered().border_style(Style::new().fg(view.theme.border()));
            frame.render_widget(Clear, *cell);
            frame.render_widget(
                Paragraph::new(card).block(block).wrap(Wrap { trim: true }),
                *cell,
            );
        }
    }
}

fn render_contact(frame: &mut Frame, area: Rect, view: &PageView) {
    let form = view.form;
    let fields = [FormFocus::Name, FormFocus::Email, FormFocus::Message];

    let mut constraints: Vec<Constraint> = view
        .profile
        .contact_fields
        .iter()
        .flat_map(|field| [Constraint::Length(1), Constraint::Length(field.rows + 2)])
        .collect();
    constraints.push(Constraint::Length(1)); // Spacing
    constraints.push(Constraint::Length(1)); // Button
    let chunks = Layout::vertical(constraints).split(area);

    for (i, (field, focus)) in view.profile.contact_fields.iter().zip(fields).enumerate() {
        let focused = form.is_editing() && form.focus() == focus;
        let border = if focused {
            view.theme.accent()
        } else {
            view.theme.border()
        };

        frame.render_widget(
            Line::from(field.label.fg(view.theme.accent())),
            chunks[i * 2],
        );

        let value = form.value(focus);
        let body = Style::new().fg(view.theme.body());
        // A trailing newline keeps its empty row
        let mut text: Text = value
            .split('\n')
            .map(|line| Line::styled(line, body))
            .collect();
        if focused {
            text.push_span("▏".fg(view.theme.accent()));
        }
        let input_area = chunks[i * 2 + 1];
        // Keep the cursor line visible once the text outgrows the box
        let overflow = (text.lines.len() as u16).saturating_sub(field.rows);
        frame.render_widget(Clear, input_area);
        frame.render_widget(
            Paragraph::new(text)
                .block(Block::bordered().border_style(Style::new().fg(border)))
                .scroll((overflow, 0)),
            input_area,
        );
    }

    let button_focused = form.is_editing() && form.focus() == FormFocus::Submit;
    let button_style = if button_focused {
        Style::new().fg(Color::Black).bg(view.theme.accent())
    } else {
        Style::new().fg(view.theme.accent()).add_modifier(Modifier::REVERSED)
    };
    let button = Line::from(Span::styled(
        format!(" {} ", view.profile.submit_label),
        button_style,
    ));
    if let Some(button_area) = chunks.last() {
        frame.render_widget(button, *button_area);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, view: &PageView) {
    let mut links: Vec<Span> = Vec::new();
    for (i, &link) in view.profile.social_links.iter().enumerate() {
        if i > 0 {
            links.push("  ".into());
        }
        links.push(link.fg(view.theme.accent()));
    }
    let footer = Paragraph::new(vec![
        Line::from(view.profile.copyright.fg(view.theme.accent())),
        Line::from(links),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn render_help(frame: &mut Frame, area: Rect, view: &PageView) {
    let color = view.theme.accent();
    let help = if view.form.is_editing() {
        Line::from(vec![
            "tab".bold().fg(color),
            " next field  ".dark_gray(),
            "enter".bold().fg(color),
            " newline/next  ".dark_gray(),
            "esc".bold().fg(color),
            " leave form".dark_gray(),
        ])
    } else {
        let background = if view.background_on {
            " background off  "
        } else {
            " background on  "
        };
        let mut spans = vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "tab/1-5".bold().fg(color),
            " section  ".dark_gray(),
            "↑↓".bold().fg(color),
            " scroll  ".dark_gray(),
            "b".bold().fg(color),
            background.dark_gray(),
            "c".bold().fg(color),
            " cycle color".dark_gray(),
        ];
        if view.section == Section::Contact {
            spans.push("  enter".bold().fg(color));
            spans.push(" edit form".dark_gray());
        }
        Line::from(spans)
    };
    frame.render_widget(help.centered(), area);
}
