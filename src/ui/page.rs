//! Flip-book page rendering.
//!
//! `PageRenderer` owns everything orientation-specific: where the hinge is,
//! which half a turned page lands on and how captions are laid out on each
//! face. Book navigation and pairing are shared by both implementations.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::FieldRef;
use crate::book::{FlipController, Pair};
use crate::portfolio::{AlbumKind, Photo, PhotoField};

use super::{FieldMarks, HitMap, HitTarget};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Hinge {
    /// Pages turn right to left around a vertical spine.
    Vertical,
    /// Pages turn bottom to top around a horizontal spine.
    Horizontal,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

/// One page and its derived flip state.
pub struct PageView<'a> {
    pub album: AlbumKind,
    pub position: usize,
    pub pair: &'a Pair,
    pub flipped: bool,
    pub z_order: usize,
    pub editing: bool,
}

impl PageView<'_> {
    pub fn face(&self) -> Face {
        if self.flipped { Face::Back } else { Face::Front }
    }

    pub fn photo(&self) -> &Photo {
        match self.face() {
            Face::Front => &self.pair.front,
            Face::Back => &self.pair.back,
        }
    }

    /// 1-based number of the photo shown on the visible face.
    fn photo_number(&self) -> usize {
        match self.face() {
            Face::Front => self.position * 2 + 1,
            Face::Back => self.position * 2 + 2,
        }
    }
}

/// Where the parts of one face go.
pub struct FaceLayout {
    pub image: Rect,
    pub caption: Rect,
    pub date: Rect,
    pub alignment: Alignment,
}

pub trait PageRenderer {
    fn hinge(&self) -> Hinge;

    /// Split the book into the half holding turned pages and the half
    /// holding pages still to turn.
    fn halves(&self, area: Rect) -> (Rect, Rect) {
        let direction = match self.hinge() {
            Hinge::Vertical => Direction::Horizontal,
            Hinge::Horizontal => Direction::Vertical,
        };
        let chunks = Layout::default()
            .direction(direction)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        (chunks[0], chunks[1])
    }

    fn face_layout(&self, inner: Rect, face: Face) -> FaceLayout;

    /// Draw one page: its front on the open half when not flipped, its back
    /// on the turned half when flipped.
    fn render(&self, frame: &mut Frame, book: Rect, page: &PageView, marks: &FieldMarks, hits: &mut HitMap) {
        let (turned_half, open_half) = self.halves(book);
        let area = if page.flipped { turned_half } else { open_half };
        let photo = page.photo();
        let placeholder = page.flipped && page.pair.placeholder_back;

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", page.photo_number()));
        if !page.flipped {
            block = block.title_bottom(Line::from(format!(" {} to go ", page.z_order)).right_aligned());
        }
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);
        hits.push(
            area,
            HitTarget::Page {
                album: page.album,
                pair: page.position,
            },
        );

        let layout = self.face_layout(inner, page.face());
        let field = |f: PhotoField| FieldRef::Photo {
            album: page.album,
            id: photo.id.clone(),
            field: f,
        };

        let image_block = Block::default().borders(Borders::ALL).title(" ▣ ");
        let image_inner = image_block.inner(layout.image);
        frame.render_widget(image_block, layout.image);
        let url_field = field(PhotoField::Url);
        let url = Paragraph::new(marks.display(&url_field, &photo.url))
            .style(marks.style(&url_field, Style::default().add_modifier(Modifier::DIM)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(url, image_inner);

        let caption_field = field(PhotoField::Caption);
        let caption = Paragraph::new(Line::from(Span::styled(
            marks.display(&caption_field, &photo.caption),
            marks.style(&caption_field, Style::default().add_modifier(Modifier::BOLD)),
        )))
        .alignment(layout.alignment);
        frame.render_widget(caption, layout.caption);

        let date_field = field(PhotoField::Date);
        let date = Paragraph::new(marks.display(&date_field, &photo.date))
            .style(marks.style(&date_field, Style::default().add_modifier(Modifier::ITALIC)))
            .alignment(layout.alignment);
        frame.render_widget(date, layout.date);

        if page.editing && !placeholder {
            hits.push(image_inner, HitTarget::Field(url_field));
            hits.push(layout.caption, HitTarget::Field(caption_field));
            hits.push(layout.date, HitTarget::Field(date_field));
        }
    }
}

pub struct PortraitRenderer;

impl PageRenderer for PortraitRenderer {
    fn hinge(&self) -> Hinge {
        Hinge::Vertical
    }

    fn face_layout(&self, inner: Rect, face: Face) -> FaceLayout {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
            .split(inner);
        // Mirrored across the spine.
        let alignment = match face {
            Face::Front => Alignment::Left,
            Face::Back => Alignment::Right,
        };
        FaceLayout {
            image: rows[0],
            caption: rows[1],
            date: rows[2],
            alignment,
        }
    }
}

pub struct LandscapeRenderer;

impl PageRenderer for LandscapeRenderer {
    fn hinge(&self) -> Hinge {
        Hinge::Horizontal
    }

    fn face_layout(&self, inner: Rect, face: Face) -> FaceLayout {
        match face {
            Face::Front => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
                    .split(inner);
                FaceLayout {
                    image: rows[0],
                    caption: rows[1],
                    date: rows[2],
                    alignment: Alignment::Left,
                }
            }
            Face::Back => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
                    .split(inner);
                FaceLayout {
                    image: rows[2],
                    caption: rows[1],
                    date: rows[0],
                    alignment: Alignment::Left,
                }
            }
        }
    }
}

pub fn renderer_for(album: AlbumKind) -> &'static dyn PageRenderer {
    match album {
        AlbumKind::Portrait => &PortraitRenderer,
        AlbumKind::Landscape => &LandscapeRenderer,
    }
}

/// Draw a whole book: covers first, then every page in stacking order so the
/// topmost page of each half ends up visible (and on top in `hits`).
pub fn render_book(
    frame: &mut Frame,
    area: Rect,
    album: AlbumKind,
    pairs: &[Pair],
    book: &FlipController,
    marks: &FieldMarks,
    hits: &mut HitMap,
) {
    let renderer = renderer_for(album);
    let (turned_half, open_half) = renderer.halves(area);

    let cover = |text: &'static str| {
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(Block::default().borders(Borders::ALL))
    };
    frame.render_widget(cover("inside cover"), turned_half);
    let end_text = if pairs.is_empty() { "empty album" } else { "fin" };
    frame.render_widget(cover(end_text), open_half);

    for i in book.paint_order() {
        let Some(pair) = pairs.get(i) else {
            continue;
        };
        let page = PageView {
            album,
            position: i,
            pair,
            flipped: book.flipped(i),
            z_order: book.z_order(i),
            editing: marks.editing,
        };
        renderer.render(frame, area, &page, marks, hits);
    }
}
