//! Top-down merge sort.

/// Sort a slice in place with merge sort.
///
/// The slice is split at `len / 2`, both halves are sorted recursively and
/// merged back. On ties the element from the left half goes first, so the
/// sort is stable.
pub fn merge_sort<T: PartialOrd + Clone>(array: &mut [T]) {
    if array.len() <= 1 {
        return;
    }

    let middle = array.len() / 2;
    let mut left = array[..middle].to_vec();
    let mut right = array[middle..].to_vec();

    merge_sort(&mut left);
    merge_sort(&mut right);

    let (mut l, mut r, mut sorted) = (0, 0, 0);
    while l < left.len() && r < right.len() {
        if left[l] <= right[r] {
            array[sorted] = left[l].clone();
            l += 1;
        } else {
            array[sorted] = right[r].clone();
            r += 1;
        }
        sorted += 1;
    }

    for item in left[l..].iter().chain(&right[r..]) {
        array[sorted] = item.clone();
        sorted += 1;
    }
}

/// Consume a vector and return it sorted.
pub fn merge_sorted<T: PartialOrd + Clone>(mut values: Vec<T>) -> Vec<T> {
    merge_sort(&mut values);
    values
}
