// Bridge: the drawing abstraction evolves independently of the renderers
// that put its shapes on screen.

/// Implementation side of the split. Renderers know pixels and paths,
/// nothing about shape logic.
pub trait Renderer {
    fn render_circle(&self, radius: f64) -> String;
}

pub struct VectorRenderer;

impl Renderer for VectorRenderer {
    fn render_circle(&self, radius: f64) -> String {
        format!("drawing a circle of radius {} with vector paths", radius)
    }
}

pub struct RasterRenderer;

impl Renderer for RasterRenderer {
    fn render_circle(&self, radius: f64) -> String {
        format!("rasterizing a circle of radius {} into pixels", radius)
    }
}

/// Abstraction side: shape logic, handed a renderer at construction and
/// otherwise unaware of rendering details.
pub struct Circle {
    radius: f64,
    renderer: Box<dyn Renderer>,
}

impl Circle {
    pub fn new(radius: f64, renderer: Box<dyn Renderer>) -> Self {
        Self { radius, renderer }
    }

    pub fn draw(&self) -> String {
        self.renderer.render_circle(self.radius)
    }

    // The abstraction grows here without touching any renderer.
    pub fn resize(&mut self, factor: f64) {
        self.radius *= factor;
    }
}
