//! Mesh builder tests - vertex counts, colors and geometry

use proptest::prelude::*;

use farm_grid::core::Grid;
use farm_grid::mesh::palette::{
    BORDER_COLOR, CHECKER_OFFSET, CROP_PLANTED_COLOR, EMPTY_COLOR, SOIL_COLOR,
};
use farm_grid::mesh::{
    build_meshes, vertex_count, vertices, MeshBuilder, MeshLayout, Rgb, FLOATS_PER_VERTEX,
};
use farm_grid::types::{GrowthStage, TerrainKind};

fn shaded(c: Rgb) -> Rgb {
    [c[0] + CHECKER_OFFSET, c[1] + CHECKER_OFFSET, c[2] + CHECKER_OFFSET]
}

/// Colors of the six records of cell (x, y) in a tile fill buffer.
fn cell_colors(tiles: &[f32], width: i32, x: i32, y: i32) -> Vec<Rgb> {
    let start = ((y * width + x) * 6) as usize;
    vertices(tiles).skip(start).take(6).map(|v| v.color).collect()
}

#[test]
fn test_soil_and_crop_scenario() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.tile_mut(1, 1).unwrap().terrain = TerrainKind::Soil;
    let crop = grid.tile_mut(2, 0).unwrap();
    crop.terrain = TerrainKind::Crop;
    crop.growth = GrowthStage::Planted;

    let meshes = build_meshes(&grid, (0, 0));
    assert_eq!(vertex_count(&meshes.tiles), 54);
    assert_eq!(meshes.tiles.len(), 54 * FLOATS_PER_VERTEX);

    for y in 0..3 {
        for x in 0..3 {
            let base = match (x, y) {
                (1, 1) => SOIL_COLOR,
                (2, 0) => CROP_PLANTED_COLOR,
                _ => EMPTY_COLOR,
            };
            let expected = if (x + y) % 2 == 0 { shaded(base) } else { base };
            let colors = cell_colors(&meshes.tiles, 3, x, y);
            assert_eq!(colors.len(), 6);
            assert!(
                colors.iter().all(|c| *c == expected),
                "cell ({}, {}) colors {:?}",
                x,
                y,
                colors
            );
        }
    }
}

#[test]
fn test_row_zero_is_top_column_zero_is_left() {
    let grid = Grid::new(2, 2).unwrap();
    let builder = MeshBuilder::default();
    let top_left = builder.cell_rect(&grid, 0, 0);
    let bottom_right = builder.cell_rect(&grid, 1, 1);

    assert!(top_left.top > bottom_right.top);
    assert!(top_left.left < bottom_right.left);
}

#[test]
fn test_border_color_is_uniform() {
    let grid = Grid::new(4, 2).unwrap();
    let meshes = build_meshes(&grid, (3, 1));
    assert!(vertices(&meshes.borders).all(|v| v.color == BORDER_COLOR));
}

#[test]
fn test_agent_marker_follows_farmer_cell() {
    let grid = Grid::new(4, 4).unwrap();
    let builder = MeshBuilder::default();
    let meshes = builder.build(&grid, (3, 2));
    let cell = builder.cell_rect(&grid, 3, 2);

    let (sx, sy) = vertices(&meshes.agent).fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
    let (cx, cy) = (sx / 6.0, sy / 6.0);
    assert!(cell.contains(cx, cy));
}

#[test]
fn test_gap_separates_neighbours() {
    let grid = Grid::new(2, 1).unwrap();
    let builder = MeshBuilder::new(MeshLayout::default().with_gap(0.05));
    let a = builder.cell_rect(&grid, 0, 0);
    let b = builder.cell_rect(&grid, 1, 0);
    assert!((b.left - a.right - 0.05).abs() < 1e-5);
}

#[test]
fn test_gap_wider_than_cell_still_builds() {
    let grid = Grid::new(8, 1).unwrap();
    let meshes = MeshBuilder::new(MeshLayout::default().with_gap(0.27)).build(&grid, (0, 0));
    assert_eq!(vertex_count(&meshes.tiles), 6 * 8);
    assert_eq!(vertex_count(&meshes.borders), 24 * 8);
    assert!(vertices(&meshes.borders).all(|v| (-1.0..=1.0).contains(&v.x)));
}

proptest! {
    #[test]
    fn prop_vertex_counts(w in 1i32..24, h in 1i32..24, ax in -5i32..30, ay in -5i32..30) {
        let grid = Grid::new(w, h).unwrap();
        let meshes = build_meshes(&grid, (ax, ay));
        let cells = (w * h) as usize;

        prop_assert_eq!(vertex_count(&meshes.tiles), 6 * cells);
        prop_assert_eq!(vertex_count(&meshes.borders), 24 * cells);
        prop_assert_eq!(vertex_count(&meshes.agent), 6);
        prop_assert_eq!(meshes.tiles.len() % FLOATS_PER_VERTEX, 0);
    }

    #[test]
    fn prop_all_vertices_inside_ndc(w in 1i32..16, h in 1i32..16, gap in 0.0f32..0.5) {
        let grid = Grid::new(w, h).unwrap();
        let meshes = MeshBuilder::new(MeshLayout::default().with_gap(gap)).build(&grid, (0, 0));
        for buf in [&meshes.tiles, &meshes.borders, &meshes.agent] {
            for v in vertices(buf) {
                prop_assert!(v.x.is_finite() && v.y.is_finite());
                prop_assert!((-1.0..=1.0).contains(&v.x));
                prop_assert!((-1.0..=1.0).contains(&v.y));
                prop_assert!(v.color.iter().all(|c| (0.0..=1.0).contains(c)));
            }
        }
    }
}
