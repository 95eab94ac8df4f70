/// Merge-based win detection for Hangman rounds.
///
/// The word is considered fully revealed when every distinct letter of the
/// secret appears in the guessed set. Both sides are merge-sorted and walked
/// with two pointers, so the check is a plain sorted-subset scan.

fn merge(left: &[char], right: &[char]) -> Vec<char> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

pub fn merge_sort(letters: &[char]) -> Vec<char> {
    if letters.len() <= 1 {
        return letters.to_vec();
    }
    let mid = letters.len() / 2;
    merge(&merge_sort(&letters[..mid]), &merge_sort(&letters[mid..]))
}

/// Distinct letters of `word`, in first-seen order.
pub fn unique_letters(word: &str) -> Vec<char> {
    let mut seen = Vec::new();
    for c in word.chars() {
        if !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen
}

/// True iff every distinct letter of `secret` is present in `guessed`.
pub fn covers(secret: &str, guessed: &[char]) -> bool {
    let want = merge_sort(&unique_letters(secret));
    let have = merge_sort(guessed);
    let (mut i, mut j) = (0, 0);
    while i < want.len() {
        if j >= have.len() {
            return false;
        }
        if want[i] < have[j] {
            // `have` is sorted, so the wanted letter can't appear later
            return false;
        }
        if want[i] == have[j] {
            i += 1;
        }
        j += 1;
    }
    true
}
