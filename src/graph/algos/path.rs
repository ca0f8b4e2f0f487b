//! Path reconstruction from predecessor links

use crate::error::{GraphError, Result};
use crate::graph::types::Vertex;

/// Walk predecessor links from `target` back to `source` and return the
/// vertices in source-to-target order.
///
/// A missing link before reaching `source` means `target` is unreachable.
/// `max_len` bounds the walk (a simple path never has more vertices than the
/// graph), so corrupt links that loop are reported instead of spinning.
pub fn reconstruct_path<P>(
    source: Vertex,
    target: Vertex,
    predecessor: P,
    max_len: usize,
) -> Result<Vec<Vertex>>
where
    P: Fn(Vertex) -> Option<Vertex>,
{
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        match predecessor(current) {
            Some(pred) => {
                path.push(pred);
                current = pred;
            }
            None => {
                return Err(GraphError::Unreachable {
                    origin: source,
                    target,
                })
            }
        }
        if path.len() > max_len {
            return Err(GraphError::invalid_value(
                "predecessor chain",
                format!("loops before reaching {} from {}", source, target),
            ));
        }
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_reconstruct_path() {
        let preds: HashMap<Vertex, Vertex> = [(2, 1), (5, 2), (8, 5)].into_iter().collect();
        let path = reconstruct_path(1, 8, |v| preds.get(&v).copied(), 8).unwrap();
        assert_eq!(path, vec![1, 2, 5, 8]);
    }

    #[test]
    fn test_path_to_source_is_single_vertex() {
        let path = reconstruct_path(3, 3, |_| None, 1).unwrap();
        assert_eq!(path, vec![3]);
    }

    #[test]
    fn test_missing_link_is_unreachable() {
        let preds: HashMap<Vertex, Vertex> = [(4, 3)].into_iter().collect();
        let err = reconstruct_path(1, 4, |v| preds.get(&v).copied(), 4).unwrap_err();
        assert!(matches!(
            err,
            GraphError::Unreachable {
                origin: 1,
                target: 4
            }
        ));
    }

    #[test]
    fn test_looping_links_are_rejected() {
        let preds: HashMap<Vertex, Vertex> = [(2, 3), (3, 2)].into_iter().collect();
        let err = reconstruct_path(1, 2, |v| preds.get(&v).copied(), 3).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
