//! The demo composition: outlined rectangles, both fills, circles and text

use canvas::Surface;
use font::FontTable;
use math::{Color, Point};
use settings::Settings;

/// Outline the axis-aligned rectangle spanned by two corners
fn outline_rectangle<S: Surface>(
    surface: &mut S,
    top_left: Point,
    bottom_right: Point,
    color: Color,
) {
    let top_right = Point::new(bottom_right.x, top_left.y);
    let bottom_left = Point::new(top_left.x, bottom_right.y);

    render::draw_line(surface, top_left, top_right, color);
    render::draw_line(surface, bottom_left, bottom_right, color);
    render::draw_line(surface, top_left, bottom_left, color);
    render::draw_line(surface, top_right, bottom_right, color);
}

pub fn draw<S: Surface>(surface: &mut S, font: &FontTable, settings: &Settings) {
    outline_rectangle(surface, Point::new(50, 100), Point::new(300, 300), Color::WHITE);
    outline_rectangle(surface, Point::new(350, 100), Point::new(500, 300), Color::WHITE);

    // Recolor the border of the first rectangle, then fill its inside
    render::boundary_replace_fill(surface, Point::new(50, 100), Color::WHITE, Color::YELLOW);
    render::interior_bounded_fill(surface, Point::new(51, 101), Color::YELLOW, Color::RED);

    render::draw_circle(surface, Point::new(100, 400), 50, Color::GREEN);
    render::draw_filled_circle(surface, Point::new(250, 400), 50, Color::BLUE);

    if font.is_empty() {
        log::warn!("No glyphs available, skipping text");
        return;
    }

    for (text, y) in [("G O I D A ", 500), ("1 3 3 7", 600)] {
        font::draw_text(
            surface,
            Point::new(50, y),
            text,
            font,
            Color::WHITE,
            settings.space_width,
            settings.text_scale,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::draw;
    use canvas::{Canvas, Surface};
    use font::FontTable;
    use math::Color;
    use settings::Settings;
    use std::path::Path;

    fn render(font: &FontTable) -> Canvas {
        let settings = Settings::default();
        let mut canvas = Canvas::new(settings.width, settings.height, settings.background);
        draw(&mut canvas, font, &settings);
        canvas
    }

    #[test]
    fn rectangles_and_fills() {
        let canvas = render(&FontTable::empty());

        // First rectangle: yellow border around a red inside
        assert_eq!(canvas.get_pixel(50, 100), Color::YELLOW);
        assert_eq!(canvas.get_pixel(300, 300), Color::YELLOW);
        assert_eq!(canvas.get_pixel(175, 200), Color::RED);
        assert_eq!(canvas.get_pixel(51, 101), Color::RED);
        assert_eq!(canvas.count(Color::RED), 249 * 199);

        // Second rectangle is untouched by both fills
        assert_eq!(canvas.get_pixel(350, 100), Color::WHITE);
        assert_eq!(canvas.get_pixel(425, 200), Color::BLACK);
        assert_eq!(canvas.count(Color::WHITE), 2 * (151 + 201) - 4);
    }

    #[test]
    fn circles() {
        let canvas = render(&FontTable::empty());

        assert_eq!(canvas.get_pixel(150, 400), Color::GREEN);
        assert_eq!(canvas.get_pixel(100, 350), Color::GREEN);
        assert_eq!(canvas.get_pixel(100, 400), Color::BLACK);

        assert_eq!(canvas.get_pixel(250, 400), Color::BLUE);
        assert_eq!(canvas.get_pixel(300, 400), Color::BLUE);
        assert_eq!(canvas.get_pixel(301, 400), Color::BLACK);
    }

    #[test]
    fn text_needs_a_font() {
        let without_font = render(&FontTable::empty());
        let white_without_text = without_font.count(Color::WHITE);

        // Tests run inside the package directory, the asset lives at the workspace root
        let workspace = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
        let font = font::load_font(workspace.join(Settings::default().font));
        let with_font = render(&font);
        assert!(with_font.count(Color::WHITE) > white_without_text);

        // Top left pixel of the scaled 'G' (first row is 0x7C, so column 1 is set)
        assert_eq!(with_font.get_pixel(50 + 3, 500), Color::WHITE);
        assert_eq!(with_font.get_pixel(50, 500), Color::BLACK);
        assert_eq!(without_font.get_pixel(53, 500), Color::BLACK);
    }
}
