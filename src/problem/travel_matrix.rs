pub trait TravelMatrix {
    fn distance(&self, from: usize, to: usize) -> f64;
}

/// Dense row-major matrix of Euclidean distances.
#[derive(Debug, Clone)]
pub struct FixSizedTravelMatrix {
    n: usize,
    data: Vec<f64>,
}

impl FixSizedTravelMatrix {
    pub fn with_euclidean_distances(coords: &[(f64, f64)]) -> Self {
        let n = coords.len();
        let mut data = vec![0.0; n * n];

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (xi, yi) = coords[i];
                let (xj, yj) = coords[j];
                data[i * n + j] = (xi - xj).hypot(yi - yj);
            }
        }

        Self { n, data }
    }

    #[inline(always)]
    fn idx(&self, from: usize, to: usize) -> usize {
        debug_assert!(from < self.n);
        debug_assert!(to < self.n);
        from * self.n + to
    }
}

impl TravelMatrix for FixSizedTravelMatrix {
    #[inline(always)]
    fn distance(&self, from: usize, to: usize) -> f64 {
        self.data[self.idx(from, to)]
    }
}
