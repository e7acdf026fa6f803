//! Conditioning-set enumeration: the full power set in increasing-size order.

/// Every subset of `items`, sizes 0..=len, smallest first; subsets of equal
/// size preserve the input order.
pub fn conditioning_sets(items: &[String]) -> Vec<Vec<String>> {
    let n = items.len();
    let mut sets = Vec::with_capacity(1usize << n);
    for size in 0..=n {
        emit_combinations(items, size, &mut sets);
    }
    sets
}

fn emit_combinations(items: &[String], size: usize, out: &mut Vec<Vec<String>>) {
    let n = items.len();
    if size == 0 {
        out.push(Vec::new());
        return;
    }

    let mut idx: Vec<usize> = (0..size).collect();
    loop {
        out.push(idx.iter().map(|&i| items[i].clone()).collect());

        // Rightmost index that can still advance.
        let mut i = size;
        while i > 0 && idx[i - 1] == n - size + (i - 1) {
            i -= 1;
        }
        if i == 0 {
            return;
        }
        idx[i - 1] += 1;
        for j in i..size {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_input_yields_only_the_empty_set() {
        assert_eq!(conditioning_sets(&[]), vec![Vec::<String>::new()]);
    }

    #[test]
    fn power_set_size_is_two_to_the_n() {
        for n in 0..=6 {
            let names: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
            assert_eq!(conditioning_sets(&names).len(), 1 << n);
        }
    }

    #[test]
    fn sizes_are_non_decreasing() {
        let sets = conditioning_sets(&items(&["a", "b", "c", "d"]));
        for window in sets.windows(2) {
            assert!(window[0].len() <= window[1].len());
        }
    }

    #[test]
    fn equal_size_subsets_follow_input_order() {
        let sets = conditioning_sets(&items(&["a", "b", "c"]));
        assert_eq!(
            sets,
            vec![
                vec![],
                vec!["a".to_string()],
                vec!["b".to_string()],
                vec!["c".to_string()],
                vec!["a".to_string(), "b".to_string()],
                vec!["a".to_string(), "c".to_string()],
                vec!["b".to_string(), "c".to_string()],
                vec!["a".to_string(), "b".to_string(), "c".to_string()],
            ]
        );
    }
}
