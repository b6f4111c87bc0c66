//! In-place partition around a pivot element.

/// Partitions `data` around the element at `pivot` and returns the index
/// where that element ends up.
///
/// After the call every element before the returned index is `<=` the
/// pivot value and every element after it is `>=` the pivot value, so the
/// returned index holds exactly the value that would sit there if `data`
/// were sorted. Elements equal to the pivot may land on either side.
///
/// The scan is Hoare-style: the pivot is parked at the front, two cursors
/// walk inwards from both ends and swap pairs that sit on the wrong side,
/// and the pivot is dropped into the slot where the cursors cross. Both
/// cursors stop on elements equal to the pivot, which keeps runs of
/// duplicates split evenly instead of degrading to a one-sided partition.
///
/// Runs in a single pass with constant extra space.
///
/// # Panics
///
/// Panics if `pivot` is out of bounds.
pub fn partition<T: PartialOrd + Copy>(data: &mut [T], pivot: usize) -> usize {
    assert!(pivot < data.len(), "pivot index is out of bounds");
    if data.len() == 1 {
        return 0;
    }

    data.swap(0, pivot);
    let value = data[0];
    let mut i = 1;
    let mut j = data.len() - 1;

    // Everything in 1..i is <= value, everything in j+1.. is >= value,
    // and i <= j + 1 holds between iterations.
    loop {
        while i <= j && data[i] < value {
            i += 1;
        }
        while i <= j && value < data[j] {
            j -= 1;
        }
        if i >= j {
            break;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }

    data.swap(0, j);
    j
}
