//! Tree construction on the calling thread.

use crate::{
    math::Scalar,
    tree::{
        partition::{Context, Step, Task},
        BoundingBox, BuildReport, Node, NodeExtension, NodeID, NodeKind, Split, Splitter,
    },
    Coordinate,
};

/// Builds the nodes of a tree over `data`, reordering it so that every node covers a contiguous
/// range of items.
pub(crate) fn build<T, S, C, P, X, const D: usize>(
    context: &Context<'_, C, P>,
    data: &mut [T],
) -> (Vec<Node<S, D, X>>, BuildReport)
where
    C: Coordinate<T, Scalar = S>,
    P: Splitter<S, D>,
    X: NodeExtension<T, S, D>,
    S: Scalar,
{
    let mut report = BuildReport::default();
    if data.is_empty() {
        return (Vec::new(), report);
    }

    let bbox = BoundingBox::enclosing(&*data, context.coordinate);
    let mut nodes = Vec::with_capacity(2 * data.len() / context.config.bucket_size + 1);
    build_node(context, &mut nodes, data, Task::root(bbox), &mut report);

    (nodes, report)
}

/// Recursively builds the subtree of `task`, appending its nodes depth first to `nodes`.
///
/// `data` holds exactly the items of the subtree. Returns the index of the subtree's root.
pub(crate) fn build_node<T, S, C, P, X, const D: usize>(
    context: &Context<'_, C, P>,
    nodes: &mut Vec<Node<S, D, X>>,
    data: &mut [T],
    task: Task<S, D>,
    report: &mut BuildReport,
) -> NodeID
where
    C: Coordinate<T, Scalar = S>,
    P: Splitter<S, D>,
    X: NodeExtension<T, S, D>,
    S: Scalar,
{
    let id = nodes.len();
    let extension = X::compute(&task.bbox, data, context.coordinate);
    let step = context.step(data, &task);
    nodes.push(task.node(id, data.len(), extension));

    match step {
        Step::Leaf(reason) => report.record_leaf(reason, data.len(), task.depth),
        Step::Split(hyperplane, mid) => {
            report.record_node(task.depth);

            let (lower_task, upper_task) = task.split(&hyperplane, mid);
            let (lower_data, upper_data) = data.split_at_mut(mid);
            let lower = build_node(context, nodes, lower_data, lower_task, report);
            let upper = build_node(context, nodes, upper_data, upper_task, report);

            let end = nodes.len();
            let node = &mut nodes[id];
            node.kind = NodeKind::Internal(Split {
                hyperplane,
                lower,
                upper,
            });
            node.nodes.end = end;
        }
    }

    id
}
