/// Axis-aligned bounding boxes.
pub mod bbox;
/// Tree configuration.
pub mod config;
/// Nodes of the tree and handles to traverse them.
pub mod node;
/// Build diagnostics.
pub mod report;
/// Splitting hyperplanes and strategies.
pub mod split;

pub(crate) mod partition;

pub use bbox::*;
pub use config::*;
pub use node::*;
pub use report::*;
pub use split::*;

use crate::{math::Scalar, sequential, Coordinate, Error, Intrinsic};
use partition::Context;

/// K-d tree over a collection of items of type `T` in `D` dimensions.
///
/// The tree owns its items. They are located with the [`Coordinate`] accessor `C` and the space
/// they occupy is recursively split in two by the [`Splitter`] `P` until every leaf holds at most
/// [`bucket_size`](Config::bucket_size) items. Every node carries an extension `X` computed from
/// its items (see [`NodeExtension`]).
///
/// Building reorders the items so that each node covers a contiguous range of them. Inserting or
/// mutating items invalidates the structure until the next [`build`](KdTree::build).
///
/// ```
/// # use kdspace::prelude::*;
/// let mut tree = KdTree::<[f64; 2], 2, _, _>::new(Intrinsic, RotatingSplit::default())?;
/// tree.insert_all([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.5, 0.5]])?;
/// tree.build();
///
/// let root = tree.root()?;
/// assert_eq!(root.hyperplane(), Some(&Hyperplane::new(0, 0.5)));
///
/// let (lower, upper) = root.children()?;
/// assert!(lower.data().iter().all(|p| p[0] < 0.5));
/// assert!(upper.data().iter().all(|p| p[0] >= 0.5));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct KdTree<T, const D: usize, C = Intrinsic, P = MedianSplit, X = ()>
where
    C: Coordinate<T>,
{
    data: Vec<T>,
    nodes: Vec<Node<C::Scalar, D, X>>,
    coordinate: C,
    splitter: P,
    config: Config,
    built: bool,
}

impl<T, const D: usize, C, P, X> KdTree<T, D, C, P, X>
where
    C: Coordinate<T>,
{
    /// Creates a new empty [`KdTree`] with the default [`Config`].
    #[inline]
    pub fn new(coordinate: C, splitter: P) -> Result<Self, Error> {
        Self::with_config(coordinate, splitter, Config::default())
    }

    /// Creates a new empty [`KdTree`] with the given [`Config`].
    ///
    /// Fails if `D` is zero or if the configuration is invalid.
    pub fn with_config(coordinate: C, splitter: P, config: Config) -> Result<Self, Error> {
        if D == 0 {
            return Err(Error::ZeroDimension);
        }
        config.validate()?;

        Ok(Self {
            data: Vec::new(),
            nodes: Vec::new(),
            coordinate,
            splitter,
            config,
            built: false,
        })
    }

    /// Creates a new unbuilt [`KdTree`] holding the given items.
    pub fn from_items<I>(
        items: I,
        coordinate: C,
        splitter: P,
        config: Config,
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::with_config(coordinate, splitter, config)?;
        tree.insert_all(items)?;
        Ok(tree)
    }

    /// Adds an item to the tree, failing if its dimension is not `D`.
    #[inline]
    pub fn insert(&mut self, item: T) -> Result<(), Error> {
        let found = self.coordinate.dimension(&item);
        if found != D {
            return Err(Error::DimensionMismatch { expected: D, found });
        }

        self.data.push(item);
        self.built = false;
        Ok(())
    }

    /// Adds all the given items to the tree.
    ///
    /// If one of them has the wrong dimension, none of them is added.
    pub fn insert_all<I>(&mut self, items: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        let (len, built) = (self.data.len(), self.built);

        for item in items {
            if let Err(error) = self.insert(item) {
                self.data.truncate(len);
                self.built = built;
                return Err(error);
            }
        }

        Ok(())
    }

    /// Builds the tree on the calling thread, replacing any previous structure.
    ///
    /// Items are partitioned in place and the partition is not stable: building the same items
    /// again produces the same nodes, but the items of a leaf may come in a different order.
    pub fn build(&mut self) -> BuildReport
    where
        C::Scalar: Scalar,
        P: Splitter<C::Scalar, D>,
        X: NodeExtension<T, C::Scalar, D>,
    {
        let context = Context {
            coordinate: &self.coordinate,
            splitter: &self.splitter,
            config: self.config,
        };

        let (nodes, report) = sequential::build(&context, &mut self.data);
        self.nodes = nodes;
        self.built = true;
        report
    }

    /// Builds the tree using multiple threads, replacing any previous structure.
    ///
    /// The result is identical to [`build`](KdTree::build).
    #[cfg(feature = "parallel")]
    pub fn build_parallel(&mut self) -> BuildReport
    where
        T: Send,
        C: Sync,
        C::Scalar: Scalar + Send + Sync,
        P: Splitter<C::Scalar, D> + Sync,
        X: NodeExtension<T, C::Scalar, D> + Send,
    {
        let context = Context {
            coordinate: &self.coordinate,
            splitter: &self.splitter,
            config: self.config,
        };

        let (nodes, report) = crate::parallel::build(&context, &mut self.data);
        self.nodes = nodes;
        self.built = true;
        report
    }

    /// Returns true if the tree was built since its items were last modified.
    #[inline]
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Returns the root of the tree.
    ///
    /// Fails if the tree is not built or if it was built without items.
    #[inline]
    pub fn root(&self) -> Result<NodeRef<'_, T, C::Scalar, D, X>, Error> {
        if self.nodes()?.is_empty() {
            return Err(Error::Empty);
        }
        self.node(0)
    }

    /// Returns the node with the given index.
    #[inline]
    pub fn node(&self, id: NodeID) -> Result<NodeRef<'_, T, C::Scalar, D, X>, Error> {
        NodeRef::new(id, self.nodes()?, &self.data)
    }

    /// Returns the box of the root, the smallest box containing every item.
    #[inline]
    pub fn bounding_box(&self) -> Result<&BoundingBox<[C::Scalar; D]>, Error> {
        self.root().map(|root| root.bbox())
    }

    /// Returns all the nodes in depth-first order, the lower subtree of a node preceding its upper
    /// subtree.
    #[inline]
    pub fn nodes(&self) -> Result<&[Node<C::Scalar, D, X>], Error> {
        if self.built {
            Ok(&self.nodes)
        } else {
            Err(Error::NotBuilt)
        }
    }

    /// Returns an iterator over the leaves in depth-first order.
    ///
    /// The items of the leaves, in that order, are exactly the items of the tree.
    #[inline]
    pub fn leaves(&self) -> Result<impl Iterator<Item = NodeRef<'_, T, C::Scalar, D, X>>, Error> {
        let (nodes, data) = (self.nodes()?, &self.data[..]);
        Ok((0..nodes.len())
            .filter(move |&id| nodes[id].is_leaf())
            .filter_map(move |id| NodeRef::new(id, nodes, data).ok()))
    }

    /// Returns the items of the tree, in the order of the nodes if it is built.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the items of the tree mutably. The tree has to be built again afterwards.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.built = false;
        &mut self.data
    }

    /// Consumes the tree and returns its items.
    #[inline]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Removes every item and node from the tree.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
        self.nodes.clear();
        self.built = false;
    }

    /// Returns the number of items in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the tree contains no item.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the [`Config`] of the tree.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the [`Coordinate`] accessor of the tree.
    #[inline]
    pub fn coordinate(&self) -> &C {
        &self.coordinate
    }

    /// Returns the [`Splitter`] of the tree.
    #[inline]
    pub fn splitter(&self) -> &P {
        &self.splitter
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::FnCoordinate;
    use rand::prelude::*;
    use std::fmt::Debug;

    /// Random points on a coarse grid, so that many of them share coordinates.
    pub fn random_points<const D: usize>(count: usize, seed: u64) -> Vec<[f64; D]> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| std::array::from_fn(|_| f64::from(rng.gen_range(-50..50)) / 10.0))
            .collect()
    }

    pub fn sorted<const D: usize>(mut points: Vec<[f64; D]>) -> Vec<[f64; D]> {
        points.sort_by(|a, b| a.partial_cmp(b).unwrap());
        points
    }

    /// Checks the structural properties of a built tree and that `report` describes it.
    pub fn check_invariants<T, C, P, X, const D: usize>(
        tree: &KdTree<T, D, C, P, X>,
        report: &BuildReport,
    )
    where
        C: Coordinate<T>,
        C::Scalar: Scalar + Debug,
    {
        let nodes = tree.nodes().unwrap();
        let data = tree.data();
        let coordinate = tree.coordinate();

        assert_eq!(report.node_count, nodes.len());
        if data.is_empty() {
            assert!(nodes.is_empty());
            return;
        }

        assert_eq!(nodes[0].data_range(), 0..data.len());
        assert_eq!(nodes[0].node_range(), 0..nodes.len());

        let (mut covered, mut leaves, mut oversized, mut depth) = (0, 0, 0, 0);
        for (id, node) in nodes.iter().enumerate() {
            assert_eq!(node.node_range().start, id);
            depth = depth.max(node.depth());

            for item in &data[node.data_range()] {
                assert!(node.bbox().contains(&coordinate.point(item)));
            }

            let Some(split) = node.split() else {
                assert_eq!(node.node_range().len(), 1);
                assert_eq!(node.data_range().start, covered);
                covered = node.data_range().end;
                leaves += 1;
                oversized += usize::from(node.len() > tree.config().bucket_size);
                continue;
            };

            let (lower, upper) = (&nodes[split.lower], &nodes[split.upper]);
            let hyperplane = split.hyperplane;

            assert_eq!(split.lower, id + 1);
            assert_eq!(split.upper, lower.node_range().end);
            assert_eq!(upper.node_range().end, node.node_range().end);

            assert_eq!(lower.data_range().start, node.data_range().start);
            assert_eq!(lower.data_range().end, upper.data_range().start);
            assert_eq!(upper.data_range().end, node.data_range().end);

            assert_eq!((lower.depth(), upper.depth()), (node.depth() + 1, node.depth() + 1));
            assert_eq!(lower.bbox().max[hyperplane.dimension], hyperplane.anchor);
            assert_eq!(upper.bbox().min[hyperplane.dimension], hyperplane.anchor);

            for item in &data[lower.data_range()] {
                assert!(hyperplane.is_lower(&coordinate.coordinate(item, hyperplane.dimension)));
            }
            for item in &data[upper.data_range()] {
                assert!(!hyperplane.is_lower(&coordinate.coordinate(item, hyperplane.dimension)));
            }
        }

        assert_eq!(covered, data.len());
        assert_eq!(report.leaf_count, leaves);
        assert_eq!(report.oversized_leaves(), oversized);
        assert_eq!(report.depth, depth);
    }

    fn tree_of<const D: usize, P>(
        points: &[[f64; D]],
        splitter: P,
        bucket_size: usize,
    ) -> KdTree<[f64; D], D, Intrinsic, P> {
        KdTree::from_items(
            points.iter().copied(),
            Intrinsic,
            splitter,
            Config::with_bucket_size(bucket_size),
        )
        .unwrap()
    }

    #[test]
    fn five_points_rotating() {
        let points = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.5, 0.5]];
        let mut tree = tree_of(&points, RotatingSplit::default(), 2);
        let report = tree.build();
        check_invariants(&tree, &report);

        let root = tree.root().unwrap();
        assert_eq!(root.hyperplane(), Some(&Hyperplane::new(0, 0.5)));
        assert_eq!(tree.bounding_box().unwrap(), &BoundingBox::new([0.0, 0.0], [1.0, 1.0]));

        let (lower, upper) = root.children().unwrap();
        assert!(lower.is_leaf());
        assert_eq!(lower.data().len(), 2);
        assert_eq!(upper.node().splitting_dimension(), Some(1));
        assert_eq!(upper.node().splitting_position(), Some(0.5));

        assert_eq!(tree.nodes().unwrap().len(), 5);
        assert!(tree.leaves().unwrap().all(|leaf| leaf.data().len() <= 2));
        assert_eq!(tree.leaves().unwrap().map(|leaf| leaf.data().len()).sum::<usize>(), 5);
        assert!(report.is_clean());
    }

    #[test]
    fn coincident_points_form_one_leaf() {
        let points = [[2.0, 2.0]; 5];

        for splitter in [Strategy::from(RotatingSplit::default()), Strategy::default()] {
            let mut tree = tree_of(&points, splitter, 2);
            let report = tree.build();
            check_invariants(&tree, &report);

            let root = tree.root().unwrap();
            assert!(root.is_leaf());
            assert_eq!(root.data().len(), 5);
            assert_eq!(report.forced_leaves, 1);
            assert_eq!(report.largest_leaf, 5);
        }
    }

    #[test]
    fn ties_go_upper() {
        let points = [[1.0], [2.0], [1.0], [0.0], [1.0]];
        let mut tree = tree_of(&points, MedianSplit::default(), 1);
        let report = tree.build();
        check_invariants(&tree, &report);

        let (lower, upper) = tree.root().unwrap().children().unwrap();
        assert_eq!(lower.hyperplane(), None);
        assert_eq!(tree.root().unwrap().hyperplane(), Some(&Hyperplane::new(0, 1.0)));
        assert_eq!(lower.data(), &[[0.0]]);
        assert_eq!(sorted(upper.data().to_vec()), [[1.0], [1.0], [1.0], [2.0]]);
        assert_eq!(report.forced_leaves, 1);
    }

    #[test]
    fn random_points_hold_invariants() {
        let splitters = [
            Strategy::default(),
            Strategy::from(MedianSplit::rotating()),
            Strategy::from(RotatingSplit::default()),
            Strategy::from(RotatingSplit { start_axis: 2 }),
        ];

        for (seed, splitter) in splitters.into_iter().enumerate() {
            for bucket_size in [1, 4, 16] {
                let points = random_points::<3>(1000, seed as u64);
                let mut tree = tree_of(&points, splitter, bucket_size);
                let report = tree.build();

                check_invariants(&tree, &report);
                assert_eq!(sorted(tree.data().to_vec()), sorted(points));
            }
        }
    }

    /// Random integer points over the whole range of `i32`, many of them on its bounds.
    fn random_integer_points(count: usize, seed: u64) -> Vec<[i32; 2]> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut coordinate = move || match rng.gen_range(0..8) {
            0 => i32::MIN,
            1 => i32::MAX,
            2 => i32::MAX - 1,
            3 => rng.gen_range(-3..3),
            _ => rng.gen(),
        };
        (0..count).map(|_| [coordinate(), coordinate()]).collect()
    }

    #[test]
    fn integer_points_hold_invariants() {
        let splitters = [
            Strategy::default(),
            Strategy::from(MedianSplit::rotating()),
            Strategy::from(RotatingSplit::default()),
        ];

        for (seed, splitter) in splitters.into_iter().enumerate() {
            let extremes = [[i32::MIN, 0], [i32::MAX, 0], [0, 1]];
            let mut tree = KdTree::<_, 2, _, _>::from_items(
                extremes,
                Intrinsic,
                splitter,
                Config::with_bucket_size(1),
            )
            .unwrap();
            let report = tree.build();
            check_invariants(&tree, &report);
            assert!(report.is_clean());
            assert_eq!(report.leaf_count, 3);

            for bucket_size in [1, 4] {
                let points = random_integer_points(500, seed as u64);
                let mut tree = KdTree::<_, 2, _, _>::from_items(
                    points.iter().copied(),
                    Intrinsic,
                    splitter,
                    Config::with_bucket_size(bucket_size),
                )
                .unwrap();
                let report = tree.build();
                check_invariants(&tree, &report);

                for leaf in tree.leaves().unwrap() {
                    let items = leaf.data();
                    assert!(items.len() <= bucket_size || items.iter().all(|p| *p == items[0]));
                }

                let (mut expected, mut data) = (points, tree.data().to_vec());
                expected.sort_unstable();
                data.sort_unstable();
                assert_eq!(data, expected);
            }
        }
    }

    #[test]
    fn adjacent_integers_are_separated() {
        let mut tree = KdTree::<_, 1, _, _>::from_items(
            [[1i64], [0], [1], [0]],
            Intrinsic,
            RotatingSplit::default(),
            Config::with_bucket_size(2),
        )
        .unwrap();
        let report = tree.build();
        check_invariants(&tree, &report);

        assert!(report.is_clean());
        let (lower, upper) = tree.root().unwrap().children().unwrap();
        assert_eq!(lower.data(), &[[0], [0]]);
        assert_eq!(upper.data(), &[[1], [1]]);
        assert_eq!(tree.root().unwrap().hyperplane(), Some(&Hyperplane::new(0, 1)));
    }

    #[test]
    fn rebuild_is_idempotent() {
        for splitter in [Strategy::default(), Strategy::from(RotatingSplit::default())] {
            let mut tree = tree_of(&random_points::<2>(500, 3), splitter, 4);
            let first = tree.build();
            let nodes = tree.nodes().unwrap().to_vec();
            let leaves: Vec<_> = tree
                .leaves()
                .unwrap()
                .map(|leaf| sorted(leaf.data().to_vec()))
                .collect();

            let second = tree.build();
            assert_eq!(first, second);
            assert_eq!(tree.nodes().unwrap(), &nodes[..]);
            assert!(tree
                .leaves()
                .unwrap()
                .zip(leaves)
                .all(|(leaf, data)| sorted(leaf.data().to_vec()) == data));
        }
    }

    #[test]
    fn depth_limit_forces_leaves() {
        let config = Config {
            bucket_size: 1,
            max_depth: 3,
        };
        let points = random_points::<2>(200, 11);
        let mut tree =
            KdTree::<_, 2>::from_items(points, Intrinsic, MedianSplit::default(), config).unwrap();
        let report = tree.build();

        check_invariants(&tree, &report);
        assert_eq!(report.depth, 3);
        assert_eq!(report.leaf_count, 8);
        assert_eq!(report.depth_limited_leaves, 8);
    }

    #[test]
    fn tight_bounds_enclose_node_items() {
        let mut tree = KdTree::<[f64; 2], 2, _, _, TightBounds<f64, 2>>::from_items(
            random_points::<2>(300, 5),
            Intrinsic,
            RotatingSplit::default(),
            Config::with_bucket_size(3),
        )
        .unwrap();
        tree.build();

        for id in 0..tree.nodes().unwrap().len() {
            let node = tree.node(id).unwrap();
            let TightBounds(bounds) = node.extension();

            assert_eq!(bounds, &BoundingBox::enclosing(node.data(), &Intrinsic));
            if !node.data().is_empty() {
                assert!(node.bbox().contains_box(bounds));
            }
        }
    }

    #[test]
    fn empty_tree() {
        let mut tree = KdTree::<[f32; 3], 3>::new(Intrinsic, MedianSplit::default()).unwrap();
        assert_eq!(tree.root().unwrap_err(), Error::NotBuilt);

        let report = tree.build();
        assert_eq!(report, BuildReport::default());
        assert!(tree.is_built());
        assert_eq!(tree.root().unwrap_err(), Error::Empty);
        assert_eq!(tree.bounding_box().unwrap_err(), Error::Empty);
        assert_eq!(tree.leaves().unwrap().count(), 0);
    }

    #[test]
    fn configuration_errors() {
        let zero = Config::with_bucket_size(0);
        assert_eq!(
            KdTree::<[f64; 2], 2>::with_config(Intrinsic, MedianSplit::default(), zero)
                .unwrap_err(),
            Error::InvalidBucketSize
        );
        assert_eq!(
            KdTree::<[f64; 0], 0>::new(Intrinsic, MedianSplit::default()).unwrap_err(),
            Error::ZeroDimension
        );
    }

    struct Dynamic;

    impl Coordinate<Vec<f64>> for Dynamic {
        type Scalar = f64;

        fn coordinate(&self, item: &Vec<f64>, axis: usize) -> f64 {
            item[axis]
        }

        fn dimension(&self, item: &Vec<f64>) -> usize {
            item.len()
        }
    }

    #[test]
    fn dimension_mismatch_is_atomic() {
        let mut tree = KdTree::<Vec<f64>, 2, _, _>::new(Dynamic, RotatingSplit::default()).unwrap();
        tree.insert(vec![0.0, 1.0]).unwrap();
        tree.build();

        let error = tree
            .insert_all([vec![1.0, 1.0], vec![2.0, 2.0, 2.0], vec![3.0, 3.0]])
            .unwrap_err();
        assert_eq!(error, Error::DimensionMismatch { expected: 2, found: 3 });
        assert_eq!(tree.len(), 1);
        assert!(tree.is_built());

        assert_eq!(tree.insert(vec![1.0]), Err(Error::DimensionMismatch { expected: 2, found: 1 }));
        tree.insert(vec![5.0, 5.0]).unwrap();
        assert_eq!(tree.root().unwrap_err(), Error::NotBuilt);
    }

    #[test]
    fn node_access_errors() {
        let mut tree = tree_of(&random_points::<2>(20, 1), MedianSplit::default(), 4);
        tree.build();

        let leaf = tree.leaves().unwrap().next().unwrap();
        assert_eq!(leaf.children().unwrap_err(), Error::LeafHasNoChildren(leaf.id()));
        assert_eq!(leaf.lower().unwrap_err(), Error::LeafHasNoChildren(leaf.id()));

        let count = tree.nodes().unwrap().len();
        assert_eq!(tree.node(count).unwrap_err(), Error::UnknownNode(count));
        assert_eq!(tree.root().unwrap().subtree().len(), count);
    }

    #[test]
    fn mutation_invalidates() {
        let mut tree = tree_of(&random_points::<2>(50, 2), MedianSplit::default(), 4);
        tree.build();

        tree.data_mut()[0] = [100.0, 100.0];
        assert_eq!(tree.nodes().unwrap_err(), Error::NotBuilt);

        let report = tree.build();
        check_invariants(&tree, &report);
        assert_eq!(tree.bounding_box().unwrap().max, [100.0, 100.0]);

        tree.clear();
        assert!(tree.is_empty() && !tree.is_built());
        assert!(tree.into_data().is_empty());
    }

    #[test]
    fn function_accessor() {
        struct Star {
            name: &'static str,
            right_ascension: f32,
            declination: f32,
        }

        let accessor = FnCoordinate::new(2, |star: &Star, axis: usize| match axis {
            0 => star.right_ascension,
            _ => star.declination,
        });
        let stars = [
            ("Sirius", 101.3, -16.7),
            ("Canopus", 96.0, -52.7),
            ("Arcturus", 213.9, 19.2),
            ("Vega", 279.2, 38.8),
        ]
        .map(|(name, right_ascension, declination)| Star {
            name,
            right_ascension,
            declination,
        });

        let mut tree = KdTree::<Star, 2, _, _>::from_items(
            stars,
            accessor,
            MedianSplit::default(),
            Config::with_bucket_size(1),
        )
        .unwrap();
        let report = tree.build();
        check_invariants(&tree, &report);

        let root = tree.root().unwrap();
        assert_eq!(root.hyperplane(), Some(&Hyperplane::new(0, 213.9)));
        assert_eq!(root.upper().unwrap().data().len(), 2);
        assert!(tree.leaves().unwrap().any(|leaf| leaf.data()[0].name == "Vega"));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_build_matches() {
        let points = random_points::<2>(20_000, 9);
        let mut sequential = tree_of(&points, MedianSplit::default(), 8);
        let mut parallel = tree_of(&points, MedianSplit::default(), 8);

        assert_eq!(sequential.build(), parallel.build_parallel());
        assert_eq!(sequential.nodes().unwrap(), parallel.nodes().unwrap());
        assert_eq!(sequential.data(), parallel.data());
    }
}
