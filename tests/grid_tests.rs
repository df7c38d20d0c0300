//! Grid tests - clearing and disk rasterization

use ascii_bounce::core::Grid;
use ascii_bounce::types::{Pixel, Point};

fn filled(grid: &Grid) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for i in 0..grid.height() {
        for j in 0..grid.width() {
            if grid.get(i, j) == Some(Pixel::Fill) {
                out.push((i, j));
            }
        }
    }
    out
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(6, 9);
    assert_eq!(grid.height(), 6);
    assert_eq!(grid.width(), 9);
    assert_eq!(grid.cells().len(), 54);
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(4, 4);
    assert_eq!(grid.get(4, 0), None);
    assert_eq!(grid.get(0, 4), None);
    assert_eq!(grid.get(3, 3), Some(Pixel::Empty));
}

#[test]
fn test_grid_set_out_of_bounds() {
    let mut grid = Grid::new(4, 4);
    assert!(!grid.set(4, 0, Pixel::Fill));
    assert!(!grid.set(0, 4, Pixel::Fill));
    assert_eq!(grid.filled_count(), 0);

    assert!(grid.set(2, 3, Pixel::Fill));
    assert_eq!(grid.get(2, 3), Some(Pixel::Fill));
}

#[test]
fn test_clear_sets_every_cell() {
    let mut grid = Grid::new(5, 7);
    grid.clear(Pixel::Fill);
    assert_eq!(grid.filled_count(), 35);
    grid.clear(Pixel::Empty);
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_circle_exact_at_origin() {
    for r in 0..6 {
        let mut grid = Grid::new(10, 10);
        grid.circle(Point::new(0, 0), r);

        let r2 = (r * r) as usize;
        let mut expected = Vec::new();
        for i in 0..10usize {
            for j in 0..10usize {
                if i * i + j * j <= r2 {
                    expected.push((i, j));
                }
            }
        }
        assert_eq!(filled(&grid), expected, "radius {}", r);
    }
}

#[test]
fn test_circle_zero_radius_fills_center_only() {
    let mut grid = Grid::new(5, 5);
    grid.circle(Point::new(2, 3), 0);
    assert_eq!(filled(&grid), vec![(2, 3)]);
}

#[test]
fn test_circle_negative_radius_is_noop() {
    let mut grid = Grid::new(5, 5);
    grid.circle(Point::new(2, 2), -1);
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_circle_clips_at_edges() {
    // Centers on and beyond every edge; nothing panics and only in-disk
    // cells inside the grid are set.
    let centers = [
        Point::new(-3, 4),
        Point::new(4, -3),
        Point::new(10, 4),
        Point::new(4, 12),
        Point::new(-2, -2),
        Point::new(9, 11),
    ];
    for c in centers {
        let mut grid = Grid::new(8, 10);
        grid.circle(c, 4);
        for (i, j) in filled(&grid) {
            let dx = i as i32 - c.x;
            let dy = j as i32 - c.y;
            assert!(dx * dx + dy * dy <= 16, "({}, {}) outside disk {:?}", i, j, c);
        }
    }
}

#[test]
fn test_circle_far_off_grid_leaves_grid_empty() {
    let mut grid = Grid::new(8, 8);
    grid.circle(Point::new(100, 100), 5);
    grid.circle(Point::new(-100, 4), 5);
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_circle_keeps_existing_fill() {
    let mut grid = Grid::new(8, 8);
    grid.set(7, 7, Pixel::Fill);
    grid.circle(Point::new(1, 1), 1);
    assert_eq!(grid.get(7, 7), Some(Pixel::Fill));
    assert_eq!(grid.filled_count(), 6);
}

#[test]
fn test_circle_is_idempotent() {
    let mut once = Grid::new(16, 16);
    once.circle(Point::new(7, 9), 5);

    let mut twice = once.clone();
    twice.circle(Point::new(7, 9), 5);

    assert_eq!(once, twice);
}

#[test]
fn test_scenario_diamond_on_4x4() {
    let mut grid = Grid::new(4, 4);
    grid.clear(Pixel::Empty);
    grid.circle(Point::new(1, 1), 1);
    assert_eq!(filled(&grid), vec![(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
}

#[test]
fn test_rows_match_cells() {
    let mut grid = Grid::new(3, 4);
    grid.set(1, 2, Pixel::Fill);
    let rows: Vec<&[Pixel]> = grid.rows().collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], &[Pixel::Empty, Pixel::Empty, Pixel::Fill, Pixel::Empty]);
    assert_eq!(grid.row(1), Some(rows[1]));
    assert_eq!(grid.row(3), None);
}
