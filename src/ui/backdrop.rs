use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2, pos2};

use crate::ui::UI_CONFIG;

const GRID_MINOR: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 13);
const GRID_MAJOR: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 20);

/// One layer of the square grid behind the Home and Terminal pages.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GridLayer {
    pub spacing: f32,
    pub color: Color32,
    /// Pixels of shift per unit of pointer offset.
    pub parallax: f32,
}

pub(crate) const HOME_GRID: [GridLayer; 2] = [
    GridLayer {
        spacing: 40.0,
        color: GRID_MINOR,
        parallax: 12.0,
    },
    GridLayer {
        spacing: 160.0,
        color: GRID_MAJOR,
        parallax: 24.0,
    },
];

pub(crate) const STATIC_GRID: [GridLayer; 1] = [GridLayer {
    spacing: 40.0,
    color: GRID_MINOR,
    parallax: 0.0,
}];

/// Positions of grid lines along one axis of length `extent`, with the whole
/// pattern shifted by `shift` (wrapped into one period).
pub(crate) fn line_offsets(extent: f32, spacing: f32, shift: f32) -> Vec<f32> {
    if spacing <= 0.0 || extent <= 0.0 {
        return Vec::new();
    }
    let start = shift.rem_euclid(spacing);
    let count = ((extent - start) / spacing).floor().max(0.0) as usize + 1;
    (0..count)
        .map(|i| start + i as f32 * spacing)
        .filter(|&x| x <= extent)
        .collect()
}

/// `pointer` is the pointer offset from the page centre, normalised to
/// -1..=1 on both axes.
pub(crate) fn paint_grid(painter: &Painter, rect: Rect, pointer: Vec2, layers: &[GridLayer]) {
    for layer in layers {
        let shift = pointer * layer.parallax;
        let stroke = Stroke::new(1.0, layer.color);
        for x in line_offsets(rect.width(), layer.spacing, shift.x) {
            let x = rect.left() + x;
            painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
        }
        for y in line_offsets(rect.height(), layer.spacing, shift.y) {
            let y = rect.top() + y;
            painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
        }
    }
}

/// Soft accent glow that follows the pointer.
pub(crate) fn paint_spotlight(painter: &Painter, center: Pos2, radius: f32) {
    let rings = 6;
    for i in 0..rings {
        let t = i as f32 / rings as f32;
        let color = UI_CONFIG.colors.accent.gamma_multiply(0.02 * (1.0 - t));
        painter.circle_filled(center, radius * (1.0 - t * 0.8), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_cover_extent_evenly() {
        let xs = line_offsets(100.0, 40.0, 0.0);
        assert_eq!(xs, vec![0.0, 40.0, 80.0]);
    }

    #[test]
    fn shift_wraps_into_one_period() {
        let a = line_offsets(200.0, 40.0, 15.0);
        let b = line_offsets(200.0, 40.0, 55.0);
        let c = line_offsets(200.0, 40.0, -25.0);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a[0], 15.0);
    }

    #[test]
    fn degenerate_inputs_draw_nothing() {
        assert!(line_offsets(0.0, 40.0, 0.0).is_empty());
        assert!(line_offsets(100.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn offsets_stay_inside_extent() {
        for shift in [-300.0, -1.0, 0.0, 7.5, 39.9, 1000.0] {
            for x in line_offsets(333.0, 40.0, shift) {
                assert!((0.0..=333.0).contains(&x), "shift {shift}: {x}");
            }
        }
    }
}
