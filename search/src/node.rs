//! Search nodes and the arena-backed search tree.
//!
//! Nodes are stored in a [`SearchTree`] and addressed by index; each node
//! records its parent's index. Siblings share the ancestor chain by index,
//! so the tree has no reference cycles and no shared ownership.

use std::cell::OnceCell;
use std::hash::{Hash, Hasher};

use crate::contract::SearchProblem;
use crate::error::SearchError;

/// Index of a node in its [`SearchTree`].
pub type NodeId = usize;

/// An immutable node in the search tree.
///
/// Equality and hashing are defined by `state` only: two nodes reaching the
/// same state via different paths are equal for frontier and explored-set
/// purposes.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Index of this node in its tree.
    pub node_id: NodeId,
    /// Parent node index (`None` for root).
    pub parent_id: Option<NodeId>,
    /// The state this node wraps.
    pub state: S,
    /// The action that produced this node from its parent (`None` for root).
    pub action: Option<A>,
    /// Accumulated path cost `g`.
    pub path_cost: i64,
    /// Tree depth (root = 0).
    pub depth: u32,
    evaluation: OnceCell<i64>,
}

impl<S, A> SearchNode<S, A> {
    /// The evaluation value `f(self)`, computed by `f` on first access and
    /// cached on the node. Later calls return the cached value and never
    /// invoke `f` again.
    pub fn evaluation(&self, f: impl FnOnce(&Self) -> i64) -> i64 {
        *self.evaluation.get_or_init(|| f(self))
    }

    /// The cached evaluation, if it has been computed.
    #[must_use]
    pub fn cached_evaluation(&self) -> Option<i64> {
        self.evaluation.get().copied()
    }
}

impl<S: PartialEq, A> PartialEq for SearchNode<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, A> Eq for SearchNode<S, A> {}

impl<S: Hash, A> Hash for SearchNode<S, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

/// Arena of every node created during a search.
///
/// The root is always node `0`. Nodes are never removed, so any node id
/// handed out stays valid for the lifetime of the tree.
#[derive(Debug, Clone)]
pub struct SearchTree<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S: Clone, A: Clone> SearchTree<S, A> {
    /// Create a tree holding only the root node for `root_state`.
    #[must_use]
    pub fn new(root_state: S) -> Self {
        Self {
            nodes: vec![SearchNode {
                node_id: 0,
                parent_id: None,
                state: root_state,
                action: None,
                path_cost: 0,
                depth: 0,
                evaluation: OnceCell::new(),
            }],
        }
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &SearchNode<S, A> {
        &self.nodes[0]
    }

    /// Look up a node by id.
    #[must_use]
    pub fn get(&self, node_id: NodeId) -> Option<&SearchNode<S, A>> {
        self.nodes.get(node_id)
    }

    /// Number of nodes created so far, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create one child of `node_id` per action the problem offers, in
    /// action order, and return their ids.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError::InvalidAction`] from the problem's `result`.
    /// Returns [`SearchError::KeyNotFound`] if `node_id` is not in the tree.
    pub fn expand<P>(&mut self, node_id: NodeId, problem: &P) -> Result<Vec<NodeId>, SearchError>
    where
        P: SearchProblem<State = S, Action = A> + ?Sized,
    {
        let Some(parent) = self.nodes.get(node_id) else {
            return Err(SearchError::KeyNotFound {
                state: format!("node #{node_id}"),
            });
        };
        let parent_state = parent.state.clone();
        let parent_cost = parent.path_cost;
        let child_depth = parent.depth + 1;

        let actions = problem.actions(&parent_state);
        let mut children = Vec::with_capacity(actions.len());
        for action in actions {
            let next_state = problem.result(&parent_state, &action)?;
            let path_cost = problem.path_cost(parent_cost, &parent_state, &action, &next_state);
            let child_id = self.nodes.len();
            self.nodes.push(SearchNode {
                node_id: child_id,
                parent_id: Some(node_id),
                state: next_state,
                action: Some(action),
                path_cost,
                depth: child_depth,
                evaluation: OnceCell::new(),
            });
            children.push(child_id);
        }
        Ok(children)
    }

    /// Nodes from the root to `node_id`, inclusive. Empty for an unknown id.
    #[must_use]
    pub fn path(&self, node_id: NodeId) -> Vec<&SearchNode<S, A>> {
        let mut path = Vec::new();
        let mut current = self.get(node_id);
        while let Some(node) = current {
            path.push(node);
            current = node.parent_id.and_then(|id| self.get(id));
        }
        path.reverse();
        path
    }

    /// Actions along [`path`](Self::path), excluding the root's absent action.
    #[must_use]
    pub fn solution(&self, node_id: NodeId) -> Vec<A> {
        self.path(node_id)
            .into_iter()
            .filter_map(|node| node.action.clone())
            .collect()
    }
}
