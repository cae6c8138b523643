// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Frame rendering into a backend-neutral display list.
//!
//! `render_frame` is a pure function of its `FrameInput`: the same scene,
//! draft, viewport and options always produce the same `DisplayList`. All
//! geometry in the list is already in screen (or export) pixels, so a
//! backend only has to fill, stroke and place text.

mod annotations;
mod draft;
mod grid;

pub use annotations::{dimension_text, format_feet};
pub use grid::{GridBand, grid_band};

use crate::editing::{Draft, EditSession, ViewPort};
use crate::model::{FreehandPath, Placement, PlacementShape, Room, Scene, TextLabel, Wall};
use crate::theme;
use crate::tools::ToolBox;
use kurbo::{BezPath, Cap, Ellipse, Join, Point, Shape, Size, Stroke, Vec2};
use peniko::Color;

/// Tolerance used when flattening curves to paths
const SHAPE_TOLERANCE: f64 = 0.1;

/// Horizontal alignment of a text item around its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// One drawing command
#[derive(Debug, Clone)]
pub enum DrawItem {
    Fill {
        path: BezPath,
        color: Color,
    },
    Stroke {
        path: BezPath,
        color: Color,
        style: Stroke,
    },
    /// Text placed with its baseline at `position`
    Text {
        text: String,
        position: Point,
        size: f64,
        color: Color,
        anchor: TextAnchor,
    },
}

/// Ordered drawing commands for one frame
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub size: Size,
    pub items: Vec<DrawItem>,
}

impl DisplayList {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            items: Vec::new(),
        }
    }

    pub fn fill(&mut self, shape: &impl Shape, color: Color) {
        self.items.push(DrawItem::Fill {
            path: shape.to_path(SHAPE_TOLERANCE),
            color,
        });
    }

    pub fn stroke(&mut self, shape: &impl Shape, color: Color, style: Stroke) {
        self.items.push(DrawItem::Stroke {
            path: shape.to_path(SHAPE_TOLERANCE),
            color,
            style,
        });
    }

    /// Text vertically centred on `center`
    pub fn text(
        &mut self,
        text: impl Into<String>,
        center: Point,
        size: f64,
        color: Color,
        anchor: TextAnchor,
    ) {
        // Baseline sits about a third of the font size below the centre
        let position = center + Vec2::new(0.0, size * 0.35);
        self.items.push(DrawItem::Text {
            text: text.into(),
            position,
            size,
            color,
            anchor,
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the text items only
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// What to include in a frame
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_grid: bool,
    pub show_rulers: bool,
    pub show_draft: bool,
    pub background: Color,
    /// Closure radius in screen pixels, for the closure target highlight
    pub closure_radius: f64,
}

impl RenderOptions {
    /// Everything, for the live canvas
    pub fn live(closure_radius: f64) -> Self {
        Self {
            show_grid: true,
            show_rulers: true,
            show_draft: true,
            background: theme::canvas::BACKGROUND,
            closure_radius,
        }
    }

    /// Committed content only, on the export background
    pub fn export() -> Self {
        Self {
            show_grid: false,
            show_rulers: false,
            show_draft: false,
            background: theme::canvas::EXPORT_BACKGROUND,
            closure_radius: 0.0,
        }
    }
}

/// Everything one frame depends on
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub scene: &'a Scene,
    pub draft: &'a Draft,
    pub viewport: &'a ViewPort,
    pub canvas_size: Size,
    /// Pointer position in grid space
    pub hover: Option<Point>,
    pub tool: Option<&'a ToolBox>,
    /// Narrow viewport: always annotate room dimensions
    pub compact: bool,
    pub options: RenderOptions,
}

impl EditSession {
    /// Frame input for the live canvas
    pub fn frame_input(&self) -> FrameInput<'_> {
        FrameInput {
            scene: &self.scene,
            draft: &self.draft,
            viewport: &self.viewport,
            canvas_size: self.canvas_size,
            hover: self.hover,
            tool: Some(&self.current_tool),
            compact: self.is_compact(),
            options: RenderOptions::live(self.config.interaction.closure_radius),
        }
    }
}

/// Render a frame
pub fn render_frame(input: &FrameInput) -> DisplayList {
    let mut list = DisplayList::new(input.canvas_size);
    list.fill(&input.canvas_size.to_rect(), input.options.background);

    if input.options.show_grid {
        grid::draw_grid(&mut list, input.viewport, input.canvas_size);
    }

    draw_scene(&mut list, input);

    if input.options.show_draft {
        draft::draw_draft(&mut list, input);
        if let Some(tool) = input.tool {
            tool.overlay(input, &mut list);
        }
    }

    // Rulers go on top so content scrolls underneath them
    if input.options.show_rulers {
        grid::draw_rulers(&mut list, input.viewport, input.canvas_size);
    }

    list
}

fn draw_scene(list: &mut DisplayList, input: &FrameInput) {
    let vp = input.viewport;
    let scene = input.scene;

    for room in &scene.rooms {
        draw_room(list, room, vp, input.compact);
    }
    for placement in &scene.placements {
        draw_placement(list, placement, vp);
    }
    for wall in &scene.walls {
        draw_wall(list, wall, vp);
    }
    for path in &scene.paths {
        draw_path(list, path, vp);
    }

    // A label being re-edited is drawn by the draft overlay instead
    let editing = match input.draft {
        Draft::Text { editing, .. } if input.options.show_draft => *editing,
        _ => None,
    };
    for label in scene.labels.iter().filter(|l| Some(l.id) != editing) {
        draw_label(list, label, vp);
    }
}

/// Screen-space polygon through grid points
pub(crate) fn screen_path(points: &[Point], vp: &ViewPort, closed: bool) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter().map(|&p| vp.to_screen(p));
    if let Some(first) = iter.next() {
        path.move_to(first);
        for p in iter {
            path.line_to(p);
        }
        if closed {
            path.close_path();
        }
    }
    path
}

fn draw_room(list: &mut DisplayList, room: &Room, vp: &ViewPort, compact: bool) {
    if room.points.len() < 2 {
        return;
    }
    let outline = screen_path(&room.points, vp, true);
    list.fill(&outline, room.color.with_alpha(theme::room::FILL_ALPHA));

    let (color, width) = if room.selected {
        (theme::selection::HIGHLIGHT, theme::size::ROOM_SELECTED_WIDTH)
    } else {
        (theme::room::OUTLINE, theme::size::ROOM_OUTLINE_WIDTH)
    };
    list.stroke(&outline, color, Stroke::new(width).with_join(Join::Miter));

    let Some(center) = crate::geometry::polygon_centroid(&room.points) else {
        return;
    };
    let center = vp.to_screen(center);
    let size = theme::size::ROOM_FONT_SIZE * vp.zoom_factor();
    list.text(
        room.label.clone(),
        center - Vec2::new(0.0, size * 0.6),
        size,
        theme::room::TEXT,
        TextAnchor::Middle,
    );
    list.text(
        format!("{} sq ft", format_area(room.area)),
        center + Vec2::new(0.0, size * 0.6),
        size * 0.85,
        theme::room::TEXT,
        TextAnchor::Middle,
    );

    if compact || room.selected || room.is_axis_aligned_rectangle() {
        annotations::draw_dimensions(list, room, vp, center + Vec2::new(0.0, size * 1.8));
    }
}

fn format_area(area: f64) -> String {
    if (area - area.round()).abs() < 0.05 {
        format!("{:.0}", area)
    } else {
        format!("{:.1}", area)
    }
}

fn draw_placement(list: &mut DisplayList, placement: &Placement, vp: &ViewPort) {
    let rect = vp.affine().transform_rect_bbox(placement.bounds());
    let outline = Stroke::new(1.0);
    match placement.shape {
        PlacementShape::Rect => {
            list.fill(&rect, placement.color);
            list.stroke(&rect, theme::entity::PLACEMENT_OUTLINE, outline);
        }
        PlacementShape::Ellipse => {
            let ellipse = Ellipse::from_rect(rect);
            list.fill(&ellipse, placement.color);
            list.stroke(&ellipse, theme::entity::PLACEMENT_OUTLINE, outline);
        }
    }

    let size = theme::size::DIMENSION_FONT_SIZE * vp.zoom_factor();
    if size * placement.kind.chars().count() as f64 * theme::size::GLYPH_ADVANCE < rect.width() {
        list.text(
            placement.kind.clone(),
            rect.center(),
            size,
            theme::entity::PLACEMENT_OUTLINE,
            TextAnchor::Middle,
        );
    }
}

fn draw_wall(list: &mut DisplayList, wall: &Wall, vp: &ViewPort) {
    let line = kurbo::Line::new(vp.to_screen(wall.start), vp.to_screen(wall.end));
    let width = vp.grid_len_to_screen(theme::size::WALL_THICKNESS);
    list.stroke(&line, theme::entity::WALL, Stroke::new(width).with_caps(Cap::Square));
}

fn draw_path(list: &mut DisplayList, path: &FreehandPath, vp: &ViewPort) {
    if path.points.len() < 2 {
        return;
    }
    let style = Stroke::new(path.stroke_width * vp.zoom_factor())
        .with_caps(Cap::Round)
        .with_join(Join::Round);
    list.stroke(&screen_path(&path.points, vp, false), path.color, style);
}

fn draw_label(list: &mut DisplayList, label: &TextLabel, vp: &ViewPort) {
    list.text(
        label.text.clone(),
        vp.to_screen(label.position),
        label.font_size * vp.zoom_factor(),
        label.color,
        TextAnchor::Middle,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entity;

    fn square(side: f64) -> Room {
        Room::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(side, 0.0),
                Point::new(side, side),
                Point::new(0.0, side),
            ],
            "Room 1",
            theme::room::palette_color(0),
        )
    }

    fn count_fills(list: &DisplayList) -> usize {
        list.items
            .iter()
            .filter(|i| matches!(i, DrawItem::Fill { .. }))
            .count()
    }

    #[test]
    fn render_is_deterministic() {
        let mut session = EditSession::default();
        session.canvas_size = Size::new(1024.0, 768.0);
        session.scene.push(Entity::Room(square(4.0)));
        let a = render_frame(&session.frame_input());
        let b = render_frame(&session.frame_input());
        assert_eq!(a.len(), b.len());
        assert_eq!(a.texts().collect::<Vec<_>>(), b.texts().collect::<Vec<_>>());
    }

    #[test]
    fn room_shows_name_and_area() {
        let mut session = EditSession::default();
        session.canvas_size = Size::new(1024.0, 768.0);
        session.scene.push(Entity::Room(square(4.0)));
        let list = render_frame(&session.frame_input());
        let texts: Vec<&str> = list.texts().collect();
        assert!(texts.contains(&"Room 1"));
        assert!(texts.contains(&"16 sq ft"));
        // Square rooms are rectangles, so they carry dimensions
        assert!(texts.contains(&"4' × 4'"));
    }

    #[test]
    fn irregular_room_dimensions_depend_on_context() {
        let room = Room::new(
            vec![Point::new(0.0, 0.0), Point::new(6.0, 0.0), Point::new(3.0, 4.0)],
            "Room 1",
            theme::room::palette_color(0),
        );
        let id = room.id;
        let mut session = EditSession::default();
        session.canvas_size = Size::new(1024.0, 768.0);
        session.scene.push(Entity::Room(room));

        let has_dims = |s: &EditSession| {
            render_frame(&s.frame_input())
                .texts()
                .any(|t| t == "6' × 4'")
        };
        assert!(!has_dims(&session));

        session.scene.room_mut(id).unwrap().selected = true;
        assert!(has_dims(&session));

        session.scene.room_mut(id).unwrap().selected = false;
        session.canvas_size = Size::new(600.0, 800.0);
        assert!(has_dims(&session));
    }

    #[test]
    fn placement_follows_zoom_and_pan() {
        let payload = crate::model::PlacementPayload {
            kind: "desk".to_string(),
            width: 4.0,
            height: 2.0,
            color: None,
            shape: PlacementShape::Rect,
        };
        let placement = Placement::from_payload(&payload, Point::new(5.0, 5.0)).unwrap();
        let mut session = EditSession::default();
        session.canvas_size = Size::new(1024.0, 768.0);
        session.viewport.zoom_percent = 200.0;
        session.viewport.offset = Vec2::new(10.0, 0.0);
        session.scene.push(Entity::Placement(placement));

        let list = render_frame(&session.frame_input());
        let fills: Vec<kurbo::Rect> = list
            .items
            .iter()
            .filter_map(|item| match item {
                DrawItem::Fill { path, .. } => Some(path.bounding_box()),
                _ => None,
            })
            .collect();
        assert!(fills.contains(&kurbo::Rect::new(130.0, 160.0, 290.0, 240.0)));
    }

    #[test]
    fn rotated_room_is_not_annotated_unless_selected() {
        let room = Room::new(
            vec![
                Point::new(0.0, 3.0),
                Point::new(3.0, 0.0),
                Point::new(6.0, 3.0),
                Point::new(3.0, 6.0),
            ],
            "Room 1",
            theme::room::palette_color(0),
        );
        let id = room.id;
        let mut session = EditSession::default();
        session.canvas_size = Size::new(1024.0, 768.0);
        session.scene.push(Entity::Room(room));

        let texts = |s: &EditSession| {
            render_frame(&s.frame_input())
                .texts()
                .map(str::to_string)
                .collect::<Vec<_>>()
        };
        let plain = texts(&session);
        assert!(plain.iter().any(|t| t == "18 sq ft"));
        assert!(!plain.iter().any(|t| t.contains(" × ")));

        // Selected, it shows its real side lengths, not the 6' bounding box
        session.scene.room_mut(id).unwrap().selected = true;
        let selected = texts(&session);
        assert!(selected.iter().any(|t| t == "4.2' × 4.2'"));
        assert!(!selected.iter().any(|t| t == "6' × 6'"));
    }

    #[test]
    fn export_options_skip_grid_and_draft() {
        let mut session = EditSession::default();
        session.canvas_size = Size::new(800.0, 600.0);
        session.draft = Draft::Room {
            points: vec![Point::new(1.0, 1.0), Point::new(3.0, 1.0)],
            closed: false,
        };
        let mut input = session.frame_input();
        input.options = RenderOptions::export();
        let list = render_frame(&input);
        // Background only
        assert_eq!(list.len(), 1);
        assert_eq!(count_fills(&list), 1);
    }

    #[test]
    fn edited_label_is_not_drawn_twice() {
        let mut session = EditSession::default();
        session.canvas_size = Size::new(800.0, 600.0);
        let label = TextLabel::new(Point::new(2.0, 2.0), "Porch");
        let id = label.id;
        session.scene.push(Entity::Label(label));
        session.edit_label(id);
        session.insert_text("!");

        let list = render_frame(&session.frame_input());
        let texts: Vec<&str> = list.texts().collect();
        assert!(!texts.contains(&"Porch"));
        assert!(texts.iter().any(|t| t.starts_with("Porch!")));
    }

    #[test]
    fn screen_path_applies_viewport() {
        let mut vp = ViewPort::new();
        vp.offset = Vec2::new(10.0, 0.0);
        let path = screen_path(&[Point::new(1.0, 1.0), Point::new(2.0, 1.0)], &vp, false);
        let points: Vec<Point> = path.elements().iter().filter_map(|el| el.end_point()).collect();
        assert_eq!(points, vec![Point::new(30.0, 20.0), Point::new(50.0, 20.0)]);
    }
}
