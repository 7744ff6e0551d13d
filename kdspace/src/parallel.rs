//! Tree construction on multiple threads using [rayon](https://github.com/rayon-rs/rayon).
//!
//! Disjoint subtrees are built concurrently, each over its own half of the data. The resulting node
//! storage is identical to the one of a sequential build.

use crate::{
    math::Scalar,
    sequential,
    tree::{
        partition::{Context, Step, Task},
        BoundingBox, BuildReport, Node, NodeExtension, NodeKind, Split, Splitter,
    },
    Coordinate,
};

/// Number of items under which a subtree is built on a single thread.
const SEQUENTIAL_THRESHOLD: usize = 1 << 12;

/// Builds the nodes of a tree over `data`, reordering it so that every node covers a contiguous
/// range of items.
pub(crate) fn build<T, S, C, P, X, const D: usize>(
    context: &Context<'_, C, P>,
    data: &mut [T],
) -> (Vec<Node<S, D, X>>, BuildReport)
where
    T: Send,
    C: Coordinate<T, Scalar = S> + Sync,
    P: Splitter<S, D> + Sync,
    X: NodeExtension<T, S, D> + Send,
    S: Scalar + Send + Sync,
{
    if data.is_empty() {
        return (Vec::new(), BuildReport::default());
    }

    let bbox = BoundingBox::enclosing(&*data, context.coordinate);
    build_subtree(context, data, Task::root(bbox))
}

/// Builds the subtree of `task` with node indices relative to its root.
fn build_subtree<T, S, C, P, X, const D: usize>(
    context: &Context<'_, C, P>,
    data: &mut [T],
    task: Task<S, D>,
) -> (Vec<Node<S, D, X>>, BuildReport)
where
    T: Send,
    C: Coordinate<T, Scalar = S> + Sync,
    P: Splitter<S, D> + Sync,
    X: NodeExtension<T, S, D> + Send,
    S: Scalar + Send + Sync,
{
    let mut report = BuildReport::default();

    if data.len() <= SEQUENTIAL_THRESHOLD {
        let mut nodes = Vec::new();
        sequential::build_node(context, &mut nodes, data, task, &mut report);
        return (nodes, report);
    }

    let extension = X::compute(&task.bbox, data, context.coordinate);
    let step = context.step(data, &task);
    let mut root = task.node(0, data.len(), extension);

    match step {
        Step::Leaf(reason) => {
            report.record_leaf(reason, data.len(), task.depth);
            (vec![root], report)
        }
        Step::Split(hyperplane, mid) => {
            report.record_node(task.depth);

            let (lower_task, upper_task) = task.split(&hyperplane, mid);
            let (lower_data, upper_data) = data.split_at_mut(mid);
            let ((mut lower, lower_report), (mut upper, upper_report)) = rayon::join(
                || build_subtree(context, lower_data, lower_task),
                || build_subtree(context, upper_data, upper_task),
            );

            let (lower_id, upper_id) = (1, 1 + lower.len());
            lower.iter_mut().for_each(|node| node.shift(lower_id));
            upper.iter_mut().for_each(|node| node.shift(upper_id));

            root.kind = NodeKind::Internal(Split {
                hyperplane,
                lower: lower_id,
                upper: upper_id,
            });
            root.nodes.end = upper_id + upper.len();

            let mut nodes = Vec::with_capacity(root.nodes.end);
            nodes.push(root);
            nodes.append(&mut lower);
            nodes.append(&mut upper);

            report.merge(&lower_report);
            report.merge(&upper_report);

            (nodes, report)
        }
    }
}
