use crate::core::models::matrix::DistanceMatrix;
use crate::core::models::tree::{Merge, MergeTree};
use std::collections::BTreeMap;

/// Builds a merge tree from a distance matrix using average-linkage (UPGMA)
/// semantics: the two closest clusters merge, and the distance from the merged
/// cluster to any other is the unweighted mean of all pairwise member
/// distances.
///
/// Fewer than two structures is a benign degenerate case producing an empty
/// merge list.
pub fn linkage(matrix: &DistanceMatrix) -> MergeTree {
    let n = matrix.len();
    if n < 2 {
        return MergeTree::new(n, Vec::new());
    }

    // Expand the condensed upper triangle into a full working matrix.
    let condensed = matrix.condensed();
    let mut dist = vec![vec![0.0; n]; n];
    let mut next = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            dist[i][j] = condensed[next];
            dist[j][i] = condensed[next];
            next += 1;
        }
    }

    // Working state over active clusters; entry k tracks the node id and the
    // member count of the cluster currently stored in row/column k.
    let mut active: Vec<usize> = (0..n).collect();
    let mut sizes: Vec<usize> = vec![1; n];
    let mut merges: Vec<Merge> = Vec::with_capacity(n - 1);
    let mut n_active = n;

    while n_active > 1 {
        let (mut min_i, mut min_j) = (0, 1);
        let mut min_dist = dist[0][1];
        for i in 0..n_active {
            for j in (i + 1)..n_active {
                if dist[i][j] < min_dist {
                    min_dist = dist[i][j];
                    min_i = i;
                    min_j = j;
                }
            }
        }

        let size_i = sizes[min_i];
        let size_j = sizes[min_j];
        let (left, right) = {
            let (a, b) = (active[min_i], active[min_j]);
            (a.min(b), a.max(b))
        };
        merges.push(Merge {
            left,
            right,
            distance: min_dist,
            size: size_i + size_j,
        });

        // UPGMA update: unweighted mean over all member pairs.
        for k in 0..n_active {
            if k == min_i || k == min_j {
                continue;
            }
            let d_new = (dist[min_i][k] * size_i as f64 + dist[min_j][k] * size_j as f64)
                / (size_i + size_j) as f64;
            dist[min_i][k] = d_new;
            dist[k][min_i] = d_new;
        }

        active[min_i] = n + merges.len() - 1;
        sizes[min_i] = size_i + size_j;

        // Remove min_j by swapping with the last active entry.
        let last = n_active - 1;
        if min_j != last {
            active[min_j] = active[last];
            sizes[min_j] = sizes[last];
            for k in 0..n_active {
                dist[min_j][k] = dist[last][k];
                dist[k][min_j] = dist[k][last];
            }
        }
        n_active -= 1;
    }

    MergeTree::new(n, merges)
}

/// Extracts flat clusters by cutting the tree at `threshold`: two leaves share
/// a cluster iff every merge on the path between them occurs at a distance at
/// or below the threshold.
///
/// Returns one label per leaf, numbered from 1 in leaf order.
pub fn flat_clusters(tree: &MergeTree, threshold: f64) -> Vec<usize> {
    let n = tree.leaf_count();
    let total = n + tree.merges().len();
    let mut parent: Vec<usize> = (0..total).collect();

    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }

    for (offset, merge) in tree.merges().iter().enumerate() {
        if merge.distance <= threshold {
            let node = n + offset;
            let left_root = find(&mut parent, merge.left);
            let right_root = find(&mut parent, merge.right);
            parent[left_root] = node;
            parent[right_root] = node;
        }
    }

    let mut labels = Vec::with_capacity(n);
    let mut numbered: BTreeMap<usize, usize> = BTreeMap::new();
    for leaf in 0..n {
        let root = find(&mut parent, leaf);
        let next = numbered.len() + 1;
        let label = *numbered.entry(root).or_insert(next);
        labels.push(label);
    }
    labels
}

/// Groups the structure identifiers by flat-cluster label at the given
/// threshold. Recomputed fresh for every call; nothing is cached.
pub fn group_clusters(
    tree: &MergeTree,
    labels: &[String],
    threshold: f64,
) -> BTreeMap<usize, Vec<String>> {
    let assignments = flat_clusters(tree, threshold);
    let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (leaf, cluster) in assignments.into_iter().enumerate() {
        groups
            .entry(cluster)
            .or_default()
            .push(labels[leaf].clone());
    }
    groups
}
