//! Scene canvas collaborator.
//!
//! The overlay never draws or hit-tests user shapes itself; it talks to a
//! [`SceneCanvas`] for object counts, zoom and size. [`MemoryScene`] is the
//! in-process implementation used by tests and headless hosts.

use std::fmt;
use std::str::FromStr;

use designcanvas_core::{CanvasSize, DocPoint, Error};
use serde::{Deserialize, Serialize};

/// Outline colour of placed rectangles and circles.
pub const SHAPE_STROKE: &str = "#374151";

/// Fill used until the user picks another colour.
pub const DEFAULT_FILL: &str = "#3b82f6";

/// Toolbar palette.
pub const PALETTE: [&str; 8] = [
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899", "#6b7280", "#000000",
];

const RECT_WIDTH: f64 = 100.0;
const RECT_HEIGHT: f64 = 50.0;
const CIRCLE_RADIUS: f64 = 30.0;
const TEXT_CONTENT: &str = "Text";
const TEXT_SIZE: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Rectangle,
    Circle,
    Text,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Select, Tool::Rectangle, Tool::Circle, Tool::Text];

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Text => "Text",
        }
    }

    /// Whether pressing on the canvas with this tool creates an object.
    pub fn places_objects(&self) -> bool {
        !matches!(self, Tool::Select)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Tool {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "select" => Ok(Tool::Select),
            "rectangle" => Ok(Tool::Rectangle),
            "circle" => Ok(Tool::Circle),
            "text" => Ok(Tool::Text),
            other => Err(Error::other(format!("Unknown tool: {}", other))),
        }
    }
}

/// Active tool and fill colour.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    active: Tool,
    color: String,
}

impl ToolState {
    pub fn new() -> Self {
        Self {
            active: Tool::Select,
            color: DEFAULT_FILL.to_string(),
        }
    }

    pub fn active(&self) -> Tool {
        self.active
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.active = tool;
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }

    /// Drops back to selection after a shape has been placed.
    pub fn placement_done(&mut self) {
        self.active = Tool::Select;
    }
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
    Text { content: String, font_size: f64 },
}

/// A user-placed object in document space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub shape: Shape,
    pub left: f64,
    pub top: f64,
    pub fill: String,
    pub stroke: Option<String>,
}

impl SceneObject {
    /// Builds the object `tool` creates when pressed at `point`.
    fn for_tool(id: ObjectId, tool: Tool, point: DocPoint, fill: &str) -> Option<Self> {
        let (shape, left, top, stroke) = match tool {
            Tool::Select => return None,
            Tool::Rectangle => (
                Shape::Rectangle {
                    width: RECT_WIDTH,
                    height: RECT_HEIGHT,
                },
                point.x - RECT_WIDTH / 2.0,
                point.y - RECT_HEIGHT / 2.0,
                Some(SHAPE_STROKE.to_string()),
            ),
            Tool::Circle => (
                Shape::Circle {
                    radius: CIRCLE_RADIUS,
                },
                point.x - CIRCLE_RADIUS,
                point.y - CIRCLE_RADIUS,
                Some(SHAPE_STROKE.to_string()),
            ),
            Tool::Text => (
                Shape::Text {
                    content: TEXT_CONTENT.to_string(),
                    font_size: TEXT_SIZE,
                },
                point.x,
                point.y,
                None,
            ),
        };
        Some(Self {
            id,
            shape,
            left,
            top,
            fill: fill.to_string(),
            stroke,
        })
    }
}

/// Contract the overlay expects from the shape-rendering canvas.
///
/// Background decorations (grid lines) are never counted as objects.
pub trait SceneCanvas: Send {
    /// Number of user-visible objects.
    fn object_count(&self) -> usize;

    fn has_objects(&self) -> bool {
        self.object_count() > 0
    }

    /// Places the object `tool` creates at `point`, if any.
    fn place(&mut self, tool: Tool, point: DocPoint, fill: &str) -> Option<ObjectId>;

    /// Removes every user object. Returns how many were removed.
    fn clear(&mut self) -> usize;

    fn zoom(&self) -> f64;

    fn set_zoom(&mut self, zoom: f64);

    fn resize(&mut self, size: CanvasSize);
}

#[derive(Debug, Clone)]
pub struct MemoryScene {
    objects: Vec<SceneObject>,
    next_id: u64,
    zoom: f64,
    size: CanvasSize,
}

impl MemoryScene {
    pub fn new(size: CanvasSize) -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
            zoom: 1.0,
            size,
        }
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Removes one object. Returns true if it existed.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| o.id != id);
        self.objects.len() != before
    }
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new(CanvasSize::default())
    }
}

impl SceneCanvas for MemoryScene {
    fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn place(&mut self, tool: Tool, point: DocPoint, fill: &str) -> Option<ObjectId> {
        let id = ObjectId(self.next_id);
        let object = SceneObject::for_tool(id, tool, point, fill)?;
        self.next_id += 1;
        self.objects.push(object);
        Some(id)
    }

    fn clear(&mut self) -> usize {
        let removed = self.objects.len();
        self.objects.clear();
        removed
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    fn resize(&mut self, size: CanvasSize) {
        self.size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_centred_on_pointer() {
        let mut scene = MemoryScene::default();
        let id = scene
            .place(Tool::Rectangle, DocPoint::new(200.0, 100.0), DEFAULT_FILL)
            .unwrap();
        let obj = scene.get(id).unwrap();
        assert_eq!((obj.left, obj.top), (150.0, 75.0));
        assert_eq!(obj.stroke.as_deref(), Some(SHAPE_STROKE));
        assert_eq!(
            obj.shape,
            Shape::Rectangle {
                width: 100.0,
                height: 50.0
            }
        );
    }

    #[test]
    fn test_circle_and_text() {
        let mut scene = MemoryScene::default();
        let circle = scene
            .place(Tool::Circle, DocPoint::new(50.0, 50.0), "#ef4444")
            .unwrap();
        let text = scene
            .place(Tool::Text, DocPoint::new(10.0, 20.0), "#000000")
            .unwrap();

        let circle = scene.get(circle).unwrap();
        assert_eq!((circle.left, circle.top), (20.0, 20.0));
        assert_eq!(circle.fill, "#ef4444");

        let text = scene.get(text).unwrap();
        assert_eq!((text.left, text.top), (10.0, 20.0));
        assert!(text.stroke.is_none());
        assert_eq!(
            text.shape,
            Shape::Text {
                content: "Text".to_string(),
                font_size: 16.0
            }
        );
    }

    #[test]
    fn test_select_places_nothing() {
        let mut scene = MemoryScene::default();
        assert!(scene
            .place(Tool::Select, DocPoint::new(0.0, 0.0), DEFAULT_FILL)
            .is_none());
        assert!(!scene.has_objects());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut scene = MemoryScene::default();
        let a = scene
            .place(Tool::Rectangle, DocPoint::new(0.0, 0.0), DEFAULT_FILL)
            .unwrap();
        scene.place(Tool::Circle, DocPoint::new(0.0, 0.0), DEFAULT_FILL);
        assert_ne!(a, scene.objects()[1].id);
        assert!(scene.remove(a));
        assert!(!scene.remove(a));
        assert_eq!(scene.clear(), 1);
        assert_eq!(scene.clear(), 0);
    }

    #[test]
    fn test_tool_parse_and_revert() {
        assert_eq!("Circle".parse::<Tool>().unwrap(), Tool::Circle);
        assert!("lasso".parse::<Tool>().is_err());

        let mut tools = ToolState::new();
        tools.set_tool(Tool::Text);
        assert!(tools.active().places_objects());
        tools.placement_done();
        assert_eq!(tools.active(), Tool::Select);
        assert_eq!(tools.color(), PALETTE[0]);
    }
}
