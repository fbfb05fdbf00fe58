use crate::swatch::Swatch;
use log::debug;
use rand::Rng;

// a centroid has to move by more than this squared distance in an update step
// to count as changed for convergence purposes
const CONVERGENCE_THRESHOLD: u32 = 1;

/// An iterative K-means clusterer over RGB samples.
///
/// The random source used to initialize centroids is injected, so callers can
/// supply a seeded generator to make clustering fully deterministic.
pub struct KmeansClusterer<R> {
    cluster_count: usize,
    max_iterations: usize,
    rng: R,
}

#[derive(Clone, Copy, Default)]
struct Centroid {
    red: u8,
    green: u8,
    blue: u8,
}

// per-cluster channel sums and sample count for one assignment pass
#[derive(Clone, Copy, Default)]
struct ClusterAccum {
    red: u32,
    green: u32,
    blue: u32,
    count: u32,
}

impl<R> KmeansClusterer<R>
where
    R: Rng,
{
    pub fn new(cluster_count: usize, max_iterations: usize, rng: R) -> Self {
        Self {
            cluster_count,
            max_iterations,
            rng,
        }
    }

    /// Cluster the given samples into `cluster_count` colors, ordered by
    /// descending cluster population. Returns an empty vec when there are no
    /// samples or the cluster count is 0.
    pub fn cluster(mut self, samples: &[(u8, u8, u8)]) -> Vec<Swatch> {
        if samples.is_empty() || self.cluster_count == 0 {
            return Vec::new();
        }

        debug!(
            "clustering {} samples into {} clusters",
            samples.len(),
            self.cluster_count
        );

        // draw every centroid from an independent uniform random sample, with
        // replacement. duplicates are not corrected here; they resolve through
        // empty-cluster reinitialization in the update step
        let mut centroids: Vec<Centroid> = (0..self.cluster_count)
            .map(|_| self.random_centroid(samples))
            .collect();

        // populations from the latest assignment pass, kept for ranking
        let mut populations = vec![0u32; self.cluster_count];

        for iteration in 0..self.max_iterations {
            // assignment: accumulate each sample into its nearest centroid
            let mut accums = vec![ClusterAccum::default(); self.cluster_count];
            for &(red, green, blue) in samples {
                let accum = &mut accums[nearest_centroid(&centroids, (red, green, blue))];

                accum.red += red as u32;
                accum.green += green as u32;
                accum.blue += blue as u32;
                accum.count += 1;
            }

            for (population, accum) in populations.iter_mut().zip(&accums) {
                *population = accum.count;
            }

            // update: move each populated centroid to the truncated mean of its
            // assigned samples. an empty cluster is reinitialized from a fresh
            // random sample, which never counts as movement
            let mut converged = true;
            for (centroid, accum) in centroids.iter_mut().zip(&accums) {
                if accum.count == 0 {
                    *centroid = self.random_centroid(samples);
                    continue;
                }

                let updated = Centroid {
                    red: (accum.red / accum.count) as u8,
                    green: (accum.green / accum.count) as u8,
                    blue: (accum.blue / accum.count) as u8,
                };

                if distance_squared(centroid.rgb(), updated.rgb()) > CONVERGENCE_THRESHOLD {
                    converged = false;
                }

                *centroid = updated;
            }

            if converged {
                debug!("converged after {} iterations", iteration + 1);
                break;
            }
        }

        let mut swatches: Vec<Swatch> = centroids
            .iter()
            .zip(populations)
            .map(|(centroid, population)| Swatch::new(centroid.rgb(), population))
            .collect();

        // the sort is stable: equally populated clusters keep their centroid
        // order, and reinitialized empty clusters (population 0) end up last
        swatches.sort_by(|lhs, rhs| rhs.population().cmp(&lhs.population()));

        swatches
    }

    fn random_centroid(&mut self, samples: &[(u8, u8, u8)]) -> Centroid {
        let (red, green, blue) = samples[self.rng.gen_range(0..samples.len())];

        Centroid { red, green, blue }
    }
}

impl Centroid {
    fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

fn nearest_centroid(centroids: &[Centroid], sample: (u8, u8, u8)) -> usize {
    let mut nearest = 0;
    let mut nearest_distance = distance_squared(centroids[0].rgb(), sample);

    // strict comparison: on a tie the lowest centroid index wins
    for (index, centroid) in centroids.iter().enumerate().skip(1) {
        let distance = distance_squared(centroid.rgb(), sample);

        if distance < nearest_distance {
            nearest = index;
            nearest_distance = distance;
        }
    }

    nearest
}

fn distance_squared((lr, lg, lb): (u8, u8, u8), (rr, rg, rb): (u8, u8, u8)) -> u32 {
    let dr = lr as i32 - rr as i32;
    let dg = lg as i32 - rg as i32;
    let db = lb as i32 - rb as i32;

    (dr * dr + dg * dg + db * db) as u32
}
