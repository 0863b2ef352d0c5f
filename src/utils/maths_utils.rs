use argminmax::ArgMinMax;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmin();
    vec[max_index]
}

pub fn get_min_max(vec: &[f64]) -> (f64, f64) {
    (get_min(vec), get_max(vec))
}

// Normalizes by the largest absolute value, so every output lands in 0.0 to 1.0
// regardless of sign. Used to map signed impact magnitudes onto a gradient.
// Name: `Max-Abs normalization` or `L∞ normalization`
pub fn normalize_abs_max(vec: &[f64]) -> Vec<f64> {
    let magnitudes: Vec<f64> = vec.iter().map(|x| x.abs()).collect();
    let max_value = get_max(&magnitudes);

    match max_value {
        val if val <= 0.0 => vec![0.0; vec.len()],
        val => magnitudes.iter().map(|&x| x / val).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_over_unordered_values() {
        let values = [61.2, 18.4, 117.3, 42.0];
        assert_eq!(get_min_max(&values), (18.4, 117.3));
    }

    #[test]
    fn normalize_abs_max_ignores_sign() {
        let normalized = normalize_abs_max(&[-10.0, 5.0, 2.5]);
        assert_eq!(normalized, vec![1.0, 0.5, 0.25]);
    }

    #[test]
    fn normalize_abs_max_with_all_zero_input() {
        assert_eq!(normalize_abs_max(&[0.0, 0.0]), vec![0.0, 0.0]);
    }
}
