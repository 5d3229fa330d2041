// Rectangle Handle System (HWND-like)
// Tracks the rects painted for bound nodes so the event loop can hit-test
// pointer events and route them back to the tree
//
// Usage:
//   let mut registry = RectRegistry::new();
//   let handle = registry.register(Some("nav:/build"), rect);
//   // Later...
//   if let Some(name) = registry.hit_test(column, row) {
//       // dispatch a click to the node bound to `name`
//   }

use ratatui::layout::Rect;
use std::collections::HashMap;

/// Handle to a registered rectangle (similar to Windows HWND)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectHandle(u64);

impl RectHandle {
    /// Get the internal ID of this handle
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Metrics for a registered rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectMetrics {
    /// Top-left X coordinate
    pub x: u16,
    /// Top-left Y coordinate
    pub y: u16,
    /// Width of the rectangle
    pub width: u16,
    /// Height of the rectangle
    pub height: u16,
}

impl RectMetrics {
    /// Whether the given cell lies inside this rectangle
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

impl From<Rect> for RectMetrics {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl From<RectMetrics> for Rect {
    fn from(metrics: RectMetrics) -> Self {
        Self {
            x: metrics.x,
            y: metrics.y,
            width: metrics.width,
            height: metrics.height,
        }
    }
}

/// Registry entry for a rectangle
#[derive(Debug, Clone)]
struct RegistryEntry {
    /// Optional name/identifier for the rectangle
    name: Option<String>,
    /// Current metrics (position and size)
    metrics: RectMetrics,
}

/// Registry for tracking painted rectangles with handles.
/// Registration order is paint order: later entries are painted on top,
/// so hit-testing walks the entries newest-first.
#[derive(Debug, Clone)]
pub struct RectRegistry {
    /// Map of handle ID to registry entry
    handles: HashMap<u64, RegistryEntry>,
    /// Map of name to handle ID (for lookup by name)
    name_to_handle: HashMap<String, u64>,
    /// Registration order (handle IDs, oldest first)
    order: Vec<u64>,
    /// Next handle ID to assign
    next_id: u64,
}

impl RectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
            name_to_handle: HashMap::new(),
            order: Vec::new(),
            next_id: 1, // Start at 1, 0 can be used as invalid handle
        }
    }

    /// Register a rectangle, optionally under a name.
    /// Re-registering a name replaces the previous entry for that name.
    pub fn register(&mut self, name: Option<&str>, rect: Rect) -> RectHandle {
        if let Some(name) = name {
            if let Some(&existing) = self.name_to_handle.get(name) {
                self.handles.remove(&existing);
                self.order.retain(|&id| id != existing);
            }
        }

        let id = self.next_id;
        self.next_id += 1;

        self.handles.insert(
            id,
            RegistryEntry {
                name: name.map(str::to_string),
                metrics: rect.into(),
            },
        );
        self.order.push(id);
        if let Some(name) = name {
            self.name_to_handle.insert(name.to_string(), id);
        }

        RectHandle(id)
    }

    /// Update the metrics for an existing handle
    pub fn update(&mut self, handle: RectHandle, rect: Rect) {
        if let Some(entry) = self.handles.get_mut(&handle.0) {
            entry.metrics = rect.into();
        }
    }

    /// Get the metrics for a handle
    pub fn get_metrics(&self, handle: RectHandle) -> Option<RectMetrics> {
        self.handles.get(&handle.0).map(|entry| entry.metrics)
    }

    /// Look up a handle by name
    pub fn get_handle(&self, name: &str) -> Option<RectHandle> {
        self.name_to_handle.get(name).copied().map(RectHandle)
    }

    /// Get the metrics for a named rectangle
    pub fn get_metrics_by_name(&self, name: &str) -> Option<RectMetrics> {
        self.get_handle(name).and_then(|h| self.get_metrics(h))
    }

    /// Find the topmost named rectangle containing the given cell.
    /// Later registrations shadow earlier ones, matching paint order.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&str> {
        self.order.iter().rev().find_map(|id| {
            let entry = self.handles.get(id)?;
            if entry.metrics.contains(x, y) {
                entry.name.as_deref()
            } else {
                None
            }
        })
    }

    /// Clear all registered rectangles (called before each repaint)
    pub fn clear(&mut self) {
        self.handles.clear();
        self.name_to_handle.clear();
        self.order.clear();
        self.next_id = 1; // Reset ID counter
    }

    /// Check if a handle exists
    pub fn exists(&self, handle: RectHandle) -> bool {
        self.handles.contains_key(&handle.0)
    }

    /// Check if a name exists
    pub fn name_exists(&self, name: &str) -> bool {
        self.name_to_handle.contains_key(name)
    }
}

impl Default for RectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_query() {
        let mut registry = RectRegistry::new();
        let rect = Rect {
            x: 10,
            y: 20,
            width: 100,
            height: 50,
        };

        let handle = registry.register(Some("test-window"), rect);

        let metrics = registry.get_metrics(handle).unwrap();
        assert_eq!(metrics.x, 10);
        assert_eq!(metrics.y, 20);
        assert_eq!(metrics.width, 100);
        assert_eq!(metrics.height, 50);
    }

    #[test]
    fn test_lookup_by_name() {
        let mut registry = RectRegistry::new();
        let rect = Rect { x: 10, y: 20, width: 100, height: 50 };
        let handle = registry.register(Some("my-window"), rect);

        let found_handle = registry.get_handle("my-window").unwrap();
        assert_eq!(handle, found_handle);

        let metrics = registry.get_metrics_by_name("my-window").unwrap();
        assert_eq!(metrics.x, 10);
    }

    #[test]
    fn test_hit_test_topmost_wins() {
        let mut registry = RectRegistry::new();
        registry.register(Some("page"), Rect { x: 0, y: 0, width: 80, height: 24 });
        registry.register(Some("overlay"), Rect { x: 0, y: 0, width: 80, height: 24 });
        registry.register(Some("panel"), Rect { x: 0, y: 0, width: 40, height: 24 });

        // Panel shadows the overlay on its half, overlay shadows the page
        assert_eq!(registry.hit_test(10, 5), Some("panel"));
        assert_eq!(registry.hit_test(60, 5), Some("overlay"));
        assert_eq!(registry.hit_test(81, 5), None);
    }

    #[test]
    fn test_reregister_replaces_named_entry() {
        let mut registry = RectRegistry::new();
        registry.register(Some("nav"), Rect { x: 0, y: 0, width: 10, height: 1 });
        registry.register(Some("nav"), Rect { x: 0, y: 5, width: 10, height: 1 });

        let metrics = registry.get_metrics_by_name("nav").unwrap();
        assert_eq!(metrics.y, 5);
        assert_eq!(registry.hit_test(2, 0), None);
    }

    #[test]
    fn test_clear_resets_registry() {
        let mut registry = RectRegistry::new();
        let handle = registry.register(Some("gone"), Rect { x: 0, y: 0, width: 5, height: 5 });
        registry.clear();

        assert!(!registry.exists(handle));
        assert!(!registry.name_exists("gone"));
        assert_eq!(registry.hit_test(1, 1), None);
    }
}
