use dashboard::geometry::{Region, Size};
use dashboard::layouts::DashboardLayout;

const CONTAINERS: [(i32, i32); 6] = [
    (720, 520),
    (1000, 300),
    (300, 1000),
    (150, 150),
    (64, 48),
    (0, 0),
];

const DESIRED: [(usize, usize); 7] = [(0, 0), (2, 0), (0, 2), (3, 3), (2, 3), (5, 1), (1, 7)];

fn all_arrangements() -> impl Iterator<Item = (usize, Size, DashboardLayout)> {
    (1..=30).flat_map(|count| {
        CONTAINERS.into_iter().flat_map(move |(w, h)| {
            DESIRED.into_iter().map(move |(cols, rows)| {
                let layout = DashboardLayout::new(Size::new(40, 30))
                    .with_desired_cols(cols)
                    .with_desired_rows(rows);
                (count, Size::new(w, h), layout)
            })
        })
    })
}

#[test]
fn test_grid_never_under_provisions_or_wastes_a_row() {
    for (count, container, layout) in all_arrangements() {
        let a = layout.arrangement(count, container).unwrap();
        assert!(
            a.rows * a.cols >= count,
            "{count} items in {}x{} (cols x rows) for {container:?} {layout:?}",
            a.cols,
            a.rows
        );
        assert!(
            (a.rows - 1) * a.cols < count,
            "{count} items leave an empty row in {}x{} for {container:?} {layout:?}",
            a.cols,
            a.rows
        );
    }
}

#[test]
fn test_gaps_and_boxes_are_never_negative() {
    for (count, container, layout) in all_arrangements() {
        let a = layout.arrangement(count, container).unwrap();
        assert!(a.h_gap >= 0 && a.v_gap >= 0);
        assert!(a.cell_width >= 0 && a.cell_height >= 0);
        for i in 0..count {
            let region = a.region_for(i);
            assert!(region.width >= 0 && region.height >= 0);
        }
    }
}

#[test]
fn test_placements_never_overlap() {
    for (count, container, layout) in all_arrangements() {
        let a = layout.arrangement(count, container).unwrap();
        let regions: Vec<Region> = (0..count).map(|i| a.region_for(i)).collect();
        for (i, first) in regions.iter().enumerate() {
            for second in &regions[i + 1..] {
                assert!(
                    first.intersection(second).is_empty(),
                    "{first:?} overlaps {second:?} for {count} items in {container:?}"
                );
            }
        }
    }
}

#[test]
fn test_zero_gap_rows_tile_the_container_width() {
    // Cells wider than the container force the horizontal gap to zero.
    let layout = DashboardLayout::new(Size::new(100, 10)).with_desired_cols(4);
    let a = layout.arrangement(8, Size::new(203, 100)).unwrap();
    assert_eq!(a.h_gap, 0);

    for row in 0..a.rows {
        let regions: Vec<Region> = (0..a.cols).map(|col| a.region_for(row * a.cols + col)).collect();
        assert_eq!(regions[0].x, 0);
        for pair in regions.windows(2) {
            assert_eq!(pair[0].right(), pair[1].x);
        }
        assert_eq!(regions[a.cols - 1].right(), 203);
    }
}

#[test]
fn test_identical_inputs_give_identical_outputs() {
    for (count, container, layout) in all_arrangements() {
        assert_eq!(
            layout.arrangement(count, container),
            layout.arrangement(count, container)
        );
    }
}
