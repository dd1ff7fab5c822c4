//! Seat number computation.

/// Computes the human-facing seat number for a cell.
///
/// Numbers follow the vertical snake: an even column is numbered
/// top-to-bottom (`col * rows + row + 1`), an odd column bottom-to-top
/// (`col * rows + (rows - row)`). Over a full grid the numbers are a
/// bijection onto `1..=rows*columns`, independent of occupancy.
///
/// Pure function with no hidden state; report generators call it to
/// reconstruct seat numbers without re-running allocation.
///
/// # Examples
///
/// ```
/// use examseat::grid::seat_number_for;
///
/// // 5-row room: column 0 runs 1..=5 top-down,
/// // column 1 runs 6..=10 bottom-up.
/// assert_eq!(seat_number_for(0, 0, 5), "1");
/// assert_eq!(seat_number_for(4, 0, 5), "5");
/// assert_eq!(seat_number_for(4, 1, 5), "6");
/// assert_eq!(seat_number_for(0, 1, 5), "10");
/// ```
pub fn seat_number_for(row: usize, col: usize, total_rows: usize) -> String {
    let number = if col % 2 == 0 {
        col * total_rows + row + 1
    } else {
        col * total_rows + (total_rows - row)
    };
    number.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_even_column_numbers_top_down() {
        assert_eq!(seat_number_for(0, 0, 5), "1");
        assert_eq!(seat_number_for(1, 0, 5), "2");
        assert_eq!(seat_number_for(4, 0, 5), "5");
        assert_eq!(seat_number_for(0, 2, 5), "11");
    }

    #[test]
    fn test_odd_column_numbers_bottom_up() {
        assert_eq!(seat_number_for(4, 1, 5), "6");
        assert_eq!(seat_number_for(3, 1, 5), "7");
        assert_eq!(seat_number_for(0, 1, 5), "10");
        assert_eq!(seat_number_for(4, 3, 5), "16");
    }

    #[test]
    fn test_numbering_is_pure() {
        assert_eq!(seat_number_for(2, 3, 7), seat_number_for(2, 3, 7));
    }

    proptest! {
        // Over any room shape, the numbers cover 1..=rows*cols exactly.
        #[test]
        fn test_numbering_bijection(rows in 1usize..=25, cols in 1usize..=25) {
            let mut seen = HashSet::new();
            for r in 0..rows {
                for c in 0..cols {
                    let n: usize = seat_number_for(r, c, rows).parse().unwrap();
                    prop_assert!(n >= 1 && n <= rows * cols);
                    prop_assert!(seen.insert(n), "duplicate seat number {}", n);
                }
            }
            prop_assert_eq!(seen.len(), rows * cols);
        }
    }
}
