use super::*;

fn analytic_disk_count(r: i32) -> usize {
    let mut n = 0;
    for py in -r..r {
        for px in -r..r {
            if px * px + py * py < r * r {
                n += 1;
            }
        }
    }
    n
}

#[test]
fn radius_zero_is_rejected() {
    assert!(BrushMask::new(0).is_err());
}

#[test]
fn radius_three_has_twenty_five_opaque_cells() {
    let mask = BrushMask::new(3).unwrap();
    assert_eq!(mask.side(), 6);
    assert_eq!(mask.opaque_count(), 25);
    assert_eq!(mask.opaque_cells().count(), 25);
}

#[test]
fn opaque_count_matches_disk_for_several_radii() {
    for r in [1, 2, 5, 10, 17] {
        let mask = BrushMask::new(r as u32).unwrap();
        assert_eq!(mask.opaque_count(), analytic_disk_count(r), "radius {r}");
    }
}

#[test]
fn radius_one_is_a_single_pixel() {
    let mask = BrushMask::new(1).unwrap();
    let cells: Vec<_> = mask.opaque_cells().collect();
    assert_eq!(cells, vec![(0, 0, Bgra8::INK)]);
}

#[test]
fn cells_are_ink_inside_and_transparent_outside() {
    let mask = BrushMask::new(4).unwrap();
    assert_eq!(mask.cell(0, 0), Some(Bgra8::INK));
    assert_eq!(mask.cell(-3, -2), Some(Bgra8::INK));
    // 16 is not strictly below r² = 16.
    assert_eq!(mask.cell(-4, 0), Some(Bgra8::TRANSPARENT));
    assert_eq!(mask.cell(-4, -4), Some(Bgra8::TRANSPARENT));
    assert_eq!(mask.cell(4, 0), None);
    assert_eq!(mask.cell(0, -5), None);
}
