use ratatui::{Terminal, backend::TestBackend};

use super::*;
use crate::app::{Action, Mode};
use crate::portfolio::{Photo, PhotoField, builtin_defaults};

fn render(app: &App) -> HitMap {
    let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
    let mut hits = HitMap::default();
    terminal
        .draw(|f| hits = draw(f, app, &UiSettings::default()))
        .unwrap();
    hits
}

fn area_of(hits: &HitMap, target: &HitTarget) -> Option<Rect> {
    hits.regions
        .iter()
        .rev()
        .find(|(_, t)| t == target)
        .map(|(area, _)| *area)
}

fn center(area: Rect) -> (u16, u16) {
    (area.x + area.width / 2, area.y + area.height / 2)
}

#[test]
fn hit_map_prefers_latest_region() {
    let mut hits = HitMap::default();
    hits.push(Rect::new(0, 0, 10, 10), HitTarget::Login);
    hits.push(Rect::new(2, 2, 2, 2), HitTarget::Logout);
    hits.push(Rect::new(5, 5, 0, 3), HitTarget::Reset);

    assert_eq!(hits.regions.len(), 2);
    assert_eq!(hits.resolve(3, 3), Some(&HitTarget::Logout));
    assert_eq!(hits.resolve(8, 8), Some(&HitTarget::Login));
    assert_eq!(hits.resolve(20, 20), None);
}

#[test]
fn closed_book_shows_first_page_on_top() {
    let app = App::new(builtin_defaults());
    let hits = render(&app);

    let first = HitTarget::Page {
        album: AlbumKind::Portrait,
        pair: 0,
    };
    let area = area_of(&hits, &first).expect("first portrait page is drawn");
    let (x, y) = center(area);
    assert_eq!(hits.resolve(x, y), Some(&first));

    assert!(hits.regions.iter().all(|(_, t)| !matches!(t, HitTarget::Field(_))));
    assert!(area_of(&hits, &HitTarget::Login).is_some());
    assert!(area_of(&hits, &HitTarget::Logout).is_none());
}

#[test]
fn field_click_wins_over_page_in_edit_mode() {
    let mut app = App::new(builtin_defaults());
    app.mode = Mode::Editing;
    let hits = render(&app);

    let caption = HitTarget::Field(FieldRef::Photo {
        album: AlbumKind::Landscape,
        id: "l1".to_string(),
        field: PhotoField::Caption,
    });
    let area = area_of(&hits, &caption).expect("caption is editable");
    let (x, y) = center(area);
    assert_eq!(hits.resolve(x, y), Some(&caption));

    assert!(area_of(&hits, &HitTarget::Logout).is_some());
    assert!(area_of(&hits, &HitTarget::Reset).is_some());
    assert!(area_of(&hits, &HitTarget::Login).is_none());
}

#[test]
fn placeholder_page_has_no_field_regions() {
    let mut data = builtin_defaults();
    data.portrait_photos.truncate(5);
    let mut app = App::new(data);
    app.mode = Mode::Editing;
    for _ in 0..3 {
        app.update(Action::Advance(AlbumKind::Portrait));
    }
    let hits = render(&app);

    assert!(area_of(
        &hits,
        &HitTarget::Page {
            album: AlbumKind::Portrait,
            pair: 2,
        }
    )
    .is_some());
    assert!(hits.regions.iter().all(|(_, t)| match t {
        HitTarget::Field(FieldRef::Photo { id, .. }) => !id.starts_with("placeholder"),
        _ => true,
    }));
}

#[test]
fn real_photo_with_placeholder_like_id_gets_field_regions() {
    let mut data = builtin_defaults();
    data.portrait_photos = vec![
        Photo::new("placeholder-a", "https://img/a", "Alpha", "2021"),
        Photo::new("p2", "https://img/b", "Beta", "2022"),
    ];
    let mut app = App::new(data);
    app.mode = Mode::Editing;
    let hits = render(&app);

    let caption = HitTarget::Field(FieldRef::Photo {
        album: AlbumKind::Portrait,
        id: "placeholder-a".to_string(),
        field: PhotoField::Caption,
    });
    let area = area_of(&hits, &caption).expect("real photo is editable");
    let (x, y) = center(area);
    assert_eq!(hits.resolve(x, y), Some(&caption));
}

#[test]
fn login_overlay_swallows_clicks() {
    let mut app = App::new(builtin_defaults());
    app.update(Action::OpenLogin);
    let hits = render(&app);
    assert_eq!(hits.resolve(1, 1), Some(&HitTarget::Inert));
    assert_eq!(hits.resolve(60, 30), Some(&HitTarget::Inert));
}

#[test]
fn qr_overlay_closes_on_click() {
    let mut app = App::new(builtin_defaults());
    app.update(Action::ZoomQr(QrSlot::First));
    let hits = render(&app);
    assert_eq!(hits.resolve(60, 30), Some(&HitTarget::Dismiss));
}

#[test]
fn active_field_is_marked() {
    let marks = FieldMarks {
        editing: true,
        selected: None,
        active: Some(FieldRef::Profile(ProfileField::Name)),
    };
    let name = FieldRef::Profile(ProfileField::Name);
    let bio = FieldRef::Profile(ProfileField::Bio);
    assert_eq!(marks.display(&name, "Alex"), "Alex▏");
    assert_eq!(marks.display(&bio, "Hello"), "Hello");
    assert!(marks.style(&name, Style::default()).add_modifier.contains(Modifier::REVERSED));
}
