use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

/// Index of a revealable element, assigned in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Axis-aligned rectangle in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width.max(0.0), y + height.max(0.0)),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn area(&self) -> f32 {
        let s = self.size();
        s.x * s.y
    }

    /// Overlap with `other`, or `None` when they are disjoint. Touching
    /// edges produce a zero-area overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min.x <= max.x && min.y <= max.y).then_some(Rect { min, max })
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x <= self.max.x && p.y <= self.max.y
    }
}

/// Snapshot of the visible part of the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll: Vec2,
    pub size: Vec2,
}

impl Viewport {
    pub fn new(scroll_x: f32, scroll_y: f32, width: f32, height: f32) -> Self {
        Self {
            scroll: Vec2::new(scroll_x, scroll_y),
            size: Vec2::new(width, height),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.scroll.x, self.scroll.y, self.size.x, self.size.y)
    }
}

/// Fraction of `bounds` that lies inside `viewport`, in `[0, 1]`.
///
/// Zero-area elements are either fully in (their corner lies inside the
/// viewport) or fully out.
pub fn visible_ratio(bounds: &Rect, viewport: &Rect) -> f32 {
    let area = bounds.area();
    if area <= 0.0 {
        return if viewport.contains_point(bounds.min) {
            1.0
        } else {
            0.0
        };
    }
    match bounds.intersection(viewport) {
        Some(overlap) => (overlap.area() / area).clamp(0.0, 1.0),
        None => 0.0,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEvent {
    pub element: ElementId,
    pub visible: bool,
    pub ratio: f32,
}

/// Turns viewport snapshots into per-element visibility reports.
///
/// The first poll after `observe` reports the element's state; later polls
/// only report elements whose visibility flipped.
pub trait VisibilityWatcher {
    /// Start watching `element`, or replace its bounds if already watched.
    fn observe(&mut self, element: ElementId, bounds: Rect);
    fn unobserve(&mut self, element: ElementId);
    fn disconnect(&mut self);
    fn poll(&mut self, viewport: &Viewport) -> Vec<VisibilityEvent>;
}

struct Watched {
    element: ElementId,
    bounds: Rect,
    last_visible: Option<bool>,
}

/// Geometric containment test against host-provided viewport snapshots.
pub struct GeometricWatcher {
    threshold: f32,
    watched: Vec<Watched>,
    index: FnvHashMap<ElementId, usize>,
}

impl GeometricWatcher {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            watched: Vec::new(),
            index: FnvHashMap::default(),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.watched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    fn is_visible(&self, ratio: f32, bounds: &Rect, viewport: &Rect) -> bool {
        // A threshold of zero still requires some contact with the viewport.
        bounds.intersection(viewport).is_some() && ratio >= self.threshold
    }
}

impl VisibilityWatcher for GeometricWatcher {
    fn observe(&mut self, element: ElementId, bounds: Rect) {
        if let Some(&i) = self.index.get(&element) {
            self.watched[i].bounds = bounds;
            return;
        }
        self.index.insert(element, self.watched.len());
        self.watched.push(Watched {
            element,
            bounds,
            last_visible: None,
        });
    }

    fn unobserve(&mut self, element: ElementId) {
        if self.index.remove(&element).is_none() {
            return;
        }
        self.watched.retain(|w| w.element != element);
        for (i, w) in self.watched.iter().enumerate() {
            self.index.insert(w.element, i);
        }
    }

    fn disconnect(&mut self) {
        self.watched.clear();
        self.index.clear();
    }

    fn poll(&mut self, viewport: &Viewport) -> Vec<VisibilityEvent> {
        let view = viewport.rect();
        let mut events = Vec::new();
        for i in 0..self.watched.len() {
            let bounds = self.watched[i].bounds;
            let ratio = visible_ratio(&bounds, &view);
            let visible = self.is_visible(ratio, &bounds, &view);
            let w = &mut self.watched[i];
            if w.last_visible != Some(visible) {
                w.last_visible = Some(visible);
                events.push(VisibilityEvent {
                    element: w.element,
                    visible,
                    ratio,
                });
            }
        }
        events
    }
}

/// Reveal state of one registered element. Only ever goes false -> true.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealableElement {
    has_been_revealed: bool,
}

impl RevealableElement {
    #[inline]
    pub fn has_been_revealed(&self) -> bool {
        self.has_been_revealed
    }
}

pub type Revealed = SmallVec<[ElementId; 8]>;

/// One-shot reveal bookkeeping on top of a [`VisibilityWatcher`].
pub struct RevealObserver<W = GeometricWatcher> {
    watcher: W,
    elements: FnvHashMap<ElementId, RevealableElement>,
    next_id: u32,
    connected: bool,
}

impl<W: VisibilityWatcher> RevealObserver<W> {
    pub fn new(watcher: W) -> Self {
        Self {
            watcher,
            elements: FnvHashMap::default(),
            next_id: 0,
            connected: true,
        }
    }

    /// Add an element to the watched set. Returns `None` once disconnected.
    pub fn register(&mut self, bounds: Rect) -> Option<ElementId> {
        if !self.connected {
            return None;
        }
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, RevealableElement::default());
        self.watcher.observe(id, bounds);
        Some(id)
    }

    /// Update layout of an element that has not revealed yet.
    pub fn refresh_bounds(&mut self, element: ElementId, bounds: Rect) {
        if !self.connected {
            return;
        }
        if let Some(state) = self.elements.get(&element) {
            if !state.has_been_revealed {
                self.watcher.observe(element, bounds);
            }
        }
    }

    /// Feed a viewport snapshot and return the elements revealed by it.
    pub fn update(&mut self, viewport: &Viewport) -> Revealed {
        let mut revealed = Revealed::new();
        if !self.connected {
            return revealed;
        }
        for ev in self.watcher.poll(viewport) {
            if !ev.visible {
                continue;
            }
            let Some(state) = self.elements.get_mut(&ev.element) else {
                continue;
            };
            if state.has_been_revealed {
                continue;
            }
            state.has_been_revealed = true;
            self.watcher.unobserve(ev.element);
            log::debug!("[reveal] element {} at ratio {:.2}", ev.element.0, ev.ratio);
            revealed.push(ev.element);
        }
        revealed
    }

    pub fn is_revealed(&self, element: ElementId) -> bool {
        self.elements
            .get(&element)
            .map(RevealableElement::has_been_revealed)
            .unwrap_or(false)
    }

    pub fn element(&self, element: ElementId) -> Option<&RevealableElement> {
        self.elements.get(&element)
    }

    pub fn registered(&self) -> usize {
        self.elements.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.elements.values().filter(|e| e.has_been_revealed).count()
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
        self.watcher.disconnect();
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn watcher(&self) -> &W {
        &self.watcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_half_visible_element() {
        let view = Rect::new(0.0, 0.0, 100.0, 100.0);
        let el = Rect::new(0.0, 50.0, 100.0, 100.0);
        assert!((visible_ratio(&el, &view) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_area_element_is_point_test() {
        let view = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(visible_ratio(&Rect::new(10.0, 10.0, 0.0, 0.0), &view), 1.0);
        assert_eq!(visible_ratio(&Rect::new(10.0, 200.0, 0.0, 0.0), &view), 0.0);
    }

    #[test]
    fn unobserve_keeps_index_consistent() {
        let mut w = GeometricWatcher::new(0.1);
        w.observe(ElementId(0), Rect::new(0.0, 0.0, 10.0, 10.0));
        w.observe(ElementId(1), Rect::new(0.0, 500.0, 10.0, 10.0));
        w.observe(ElementId(2), Rect::new(0.0, 900.0, 10.0, 10.0));
        w.unobserve(ElementId(0));
        w.observe(ElementId(2), Rect::new(0.0, 5.0, 10.0, 10.0));
        assert_eq!(w.len(), 2);
        let events = w.poll(&Viewport::new(0.0, 0.0, 100.0, 100.0));
        let visible: Vec<_> = events.iter().filter(|e| e.visible).map(|e| e.element).collect();
        assert_eq!(visible, vec![ElementId(2)]);
    }
}
