//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. `draw`
//! also returns a `HitMap` describing what each clickable region does, so
//! the event loop can translate mouse clicks into app actions.

mod page;

pub use page::*;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::{App, FieldRef, LoginField, LoginForm, Overlay, QrSlot, Section};
use crate::config::UiSettings;
use crate::portfolio::{AlbumKind, ProfileField};

/// What a click on a region does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Page { album: AlbumKind, pair: usize },
    Field(FieldRef),
    Prev(AlbumKind),
    Next(AlbumKind),
    Qr(QrSlot),
    Login,
    Logout,
    Reset,
    /// Anywhere on an overlay that closes on click.
    Dismiss,
    /// Anywhere on an overlay that swallows clicks.
    Inert,
}

/// Clickable regions in paint order; later regions sit on top.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under the cell at `column`/`row`.
    pub fn resolve(&self, column: u16, row: u16) -> Option<&HitTarget> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| target)
    }
}

/// Editor highlighting shared by the hero section and the pages.
pub struct FieldMarks {
    pub editing: bool,
    pub selected: Option<FieldRef>,
    pub active: Option<FieldRef>,
}

impl FieldMarks {
    fn from_app(app: &App) -> Self {
        Self {
            editing: app.is_editing(),
            selected: app.selected_field(),
            active: app.editing.clone(),
        }
    }

    pub fn style(&self, field: &FieldRef, base: Style) -> Style {
        if self.active.as_ref() == Some(field) {
            base.add_modifier(Modifier::REVERSED)
        } else if self.selected.as_ref() == Some(field) {
            base.add_modifier(Modifier::UNDERLINED)
        } else {
            base
        }
    }

    pub fn display(&self, field: &FieldRef, value: &str) -> String {
        if self.active.as_ref() == Some(field) {
            format!("{value}▏")
        } else {
            value.to_string()
        }
    }
}

fn field_label(field: &FieldRef) -> String {
    match field {
        FieldRef::Profile(f) => f.label().to_string(),
        FieldRef::Photo { album, id, field } => {
            format!("{} {id} {}", album.label(), field.label())
        }
    }
}

/// Render the controls help text for the current mode.
fn controls_text(app: &App) -> String {
    if let Some(field) = &app.editing {
        return format!("editing {} | [enter/esc] done | [backspace] delete", field_label(field));
    }

    let mut parts: Vec<String> = ["[tab] section", "[h/l] portrait", "[k/j] landscape", "[1/2] qr"]
        .into_iter()
        .map(String::from)
        .collect();
    if app.is_editing() {
        if let Some(field) = app.selected_field() {
            parts.push(format!("[f] field: {}", field_label(&field)));
        }
        parts.extend(["[enter] edit", "[x] save & exit", "[R] reset"].map(String::from));
    } else {
        parts.push("[a] artist login".to_string());
    }
    parts.push("[q] quit".to_string());
    parts.join(" | ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width: width.min(r.width),
        height: height.min(r.height),
    }
}

fn section_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        block.border_style(Style::default().add_modifier(Modifier::DIM))
    }
}

/// Render one profile field and register its click region in edit mode.
fn render_profile_field(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    marks: &FieldMarks,
    field: ProfileField,
    base: Style,
    hits: &mut HitMap,
) {
    let field_ref = FieldRef::Profile(field);
    let value = app.data.profile.field(field);
    let paragraph = Paragraph::new(marks.display(&field_ref, value))
        .style(marks.style(&field_ref, base))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
    if marks.editing {
        hits.push(area, HitTarget::Field(field_ref));
    }
}

fn draw_hero(frame: &mut Frame, area: Rect, app: &App, marks: &FieldMarks, hits: &mut HitMap) {
    let block = section_block(" profile ", app.focus == Section::Profile).padding(Padding {
        left: 1,
        right: 1,
        top: 0,
        bottom: 0,
    });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .split(cols[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(cols[1]);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let italic = Style::default().add_modifier(Modifier::ITALIC);
    render_profile_field(frame, left[0], app, marks, ProfileField::Name, bold, hits);
    render_profile_field(frame, left[1], app, marks, ProfileField::Title, italic, hits);
    render_profile_field(frame, left[2], app, marks, ProfileField::Bio, Style::default(), hits);

    frame.render_widget(Paragraph::new("avatar").dim(), right[0]);
    render_profile_field(
        frame,
        right[1],
        app,
        marks,
        ProfileField::AvatarUrl,
        Style::default().add_modifier(Modifier::DIM),
        hits,
    );
    frame.render_widget(Paragraph::new("social").dim(), right[2]);
    render_profile_field(frame, right[3], app, marks, ProfileField::SocialLink, Style::default(), hits);
}

fn draw_album(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    album: AlbumKind,
    title: &str,
    marks: &FieldMarks,
    hits: &mut HitMap,
) {
    let block = section_block(title, app.focus == Section::Album(album));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(inner);

    let pairs = app.pairs(album);
    let book = app.book(album);
    render_book(frame, rows[0], album, &pairs, book, marks, hits);

    let (prev_label, next_label) = match renderer_for(album).hinge() {
        Hinge::Vertical => ("‹ prev", "next ›"),
        Hinge::Horizontal => ("˄ prev", "next ˅"),
    };
    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(8), Constraint::Min(1), Constraint::Length(8)])
        .split(rows[1]);

    let prev = Paragraph::new(prev_label);
    let next = Paragraph::new(next_label).alignment(Alignment::Right);
    frame.render_widget(if book.is_closed() { prev.dim() } else { prev }, controls[0]);
    frame.render_widget(if book.is_finished() { next.dim() } else { next }, controls[2]);
    frame.render_widget(
        Paragraph::new(format!("{} / {}", book.index(), book.pair_count())).alignment(Alignment::Center),
        controls[1],
    );
    hits.push(controls[0], HitTarget::Prev(album));
    hits.push(controls[2], HitTarget::Next(album));
}

fn draw_contact(frame: &mut Frame, area: Rect, app: &App, marks: &FieldMarks, hits: &mut HitMap) {
    let block = section_block(" contact ", app.focus == Section::Contact);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(inner);

    for (slot, col, title) in [(QrSlot::First, cols[0], " QR 1 "), (QrSlot::Second, cols[1], " QR 2 ")] {
        let qr_block = Block::default().borders(Borders::ALL).title(title);
        let qr_inner = qr_block.inner(col);
        frame.render_widget(qr_block, col);
        hits.push(col, HitTarget::Qr(slot));
        render_profile_field(
            frame,
            qr_inner,
            app,
            marks,
            slot.field(),
            Style::default().add_modifier(Modifier::DIM),
            hits,
        );
    }

    let actions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(cols[2]);
    frame.render_widget(
        Paragraph::new(app.data.profile.social_link.as_str()).alignment(Alignment::Right),
        actions[0],
    );
    if app.is_editing() {
        frame.render_widget(
            Paragraph::new("[x] save & exit").alignment(Alignment::Right).bold(),
            actions[1],
        );
        frame.render_widget(
            Paragraph::new("[R] reset data")
                .alignment(Alignment::Right)
                .fg(Color::Red),
            actions[2],
        );
        hits.push(actions[1], HitTarget::Logout);
        hits.push(actions[2], HitTarget::Reset);
    } else {
        frame.render_widget(
            Paragraph::new("[a] artist login").alignment(Alignment::Right).dim(),
            actions[1],
        );
        hits.push(actions[1], HitTarget::Login);
    }
}

fn draw_login(frame: &mut Frame, area: Rect, form: &LoginForm) {
    let popup = centered_rect_sized(48, 9, area);
    frame.render_widget(Clear, popup);

    let masked: String = "•".repeat(form.passphrase.chars().count());
    let marker = |field: LoginField| if form.active == field { "> " } else { "  " };
    let mut lines = vec![
        Line::from(vec![
            Span::raw(marker(LoginField::Username)),
            Span::raw("username   "),
            Span::styled(form.username.as_str(), Style::default().add_modifier(Modifier::UNDERLINED)),
        ]),
        Line::from(vec![
            Span::raw(marker(LoginField::Passphrase)),
            Span::raw("passphrase "),
            Span::styled(masked, Style::default().add_modifier(Modifier::UNDERLINED)),
        ]),
        Line::from(""),
    ];
    if let Some(err) = &form.error {
        lines.push(Line::from(Span::styled(err.as_str(), Style::default().fg(Color::Red))));
    }
    lines.push(Line::from("[tab] switch  [enter] authenticate  [esc] close").dim());

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" artist login ")
            .padding(Padding {
                left: 1,
                right: 1,
                top: 1,
                bottom: 0,
            }),
    );
    frame.render_widget(paragraph, popup);
}

fn draw_qr(frame: &mut Frame, area: Rect, app: &App, slot: QrSlot) {
    let popup = centered_rect_sized(72, 9, area);
    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new(app.data.profile.field(slot.field()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" scan to connect (any key closes) ")
                .padding(Padding {
                    left: 1,
                    right: 1,
                    top: 1,
                    bottom: 0,
                }),
        );
    frame.render_widget(paragraph, popup);
}

fn draw_confirm_reset(frame: &mut Frame, area: Rect) {
    let popup = centered_rect_sized(52, 5, area);
    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new("Reset all content to the defaults?\n[y] reset   [any other key] keep")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" reset "));
    frame.render_widget(paragraph, popup);
}

/// Render the entire UI into `frame` and return the clickable regions.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) -> HitMap {
    let mut hits = HitMap::default();
    let marks = FieldMarks::from_app(app);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Min(12),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = if app.is_editing() { " folio · editing " } else { " folio " };
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    draw_hero(frame, chunks[1], app, &marks, &mut hits);

    let books = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    draw_album(
        frame,
        books[0],
        app,
        AlbumKind::Portrait,
        &ui_settings.portrait_title,
        &marks,
        &mut hits,
    );
    draw_album(
        frame,
        books[1],
        app,
        AlbumKind::Landscape,
        &ui_settings.landscape_title,
        &marks,
        &mut hits,
    );

    draw_contact(frame, chunks[3], app, &marks, &mut hits);

    let footer = Paragraph::new(controls_text(app))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    let full = frame.area();
    match &app.overlay {
        Overlay::None => {}
        Overlay::Login(form) => {
            draw_login(frame, full, form);
            hits.push(full, HitTarget::Inert);
        }
        Overlay::Qr(slot) => {
            draw_qr(frame, full, app, *slot);
            hits.push(full, HitTarget::Dismiss);
        }
        Overlay::ConfirmReset => {
            draw_confirm_reset(frame, full);
            hits.push(full, HitTarget::Inert);
        }
    }

    hits
}

#[cfg(test)]
mod tests;
