use easel::errors::{Error, Result};
use easel::math::prelude::*;
use easel::utils::prelude::Arena;
use easel::video::guard::{BindingGuard, Bindings};
use easel::video::{Canvas, ShaderHandle, TextureHandle};

use crate::element::{Camera, Element};
use crate::NodeId;

use super::node::Node;
use super::transform::Transform;

/// A simple scene graph that used to store and manipulate the position, orientation and
/// scaling of the objects. We do also keep a tree relationship between nodes, so you can
/// access properties of transformation in both local and world space.
///
/// All the nodes live in one arena. A node exclusively owns its children, and removing
/// a node removes its whole subtree. There is no way to reparent a node.
pub struct SceneGraph {
    nodes: Arena<NodeId, Node>,
    root: NodeId,
}

impl Default for SceneGraph {
    fn default() -> Self {
        SceneGraph::new()
    }
}

impl SceneGraph {
    /// Creates a graph with an empty group node as root. The local frame of the root is
    /// the world frame as long as its transform is left untouched.
    pub fn new() -> Self {
        let mut nodes = Arena::new();

        let mut node = Node::new(None, Element::Group);
        node.name = "Root".into();
        let root = nodes.insert(node);

        SceneGraph { nodes, root }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Gets the number of alive nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(node)
    }

    /// Creates a new node as the last child of `parent`.
    pub fn add_child<T>(&mut self, parent: NodeId, element: T) -> Result<NodeId>
    where
        T: Into<Element>,
    {
        if !self.nodes.contains(parent) {
            return Err(Error::NodeHandleInvalid(parent.to_string()));
        }

        let child = self.nodes.insert(Node::new(Some(parent), element.into()));
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }

        trace!("[SceneGraph] Adds {} under {}.", child, parent);
        Ok(child)
    }

    /// Removes a node and all of its descendants, returns the removed nodes in tree
    /// order. The root itself is never removed, only its descendants.
    pub fn remove(&mut self, node: NodeId) -> Result<Vec<NodeId>> {
        let parent = self.get(node)?.parent;

        let mut removes = Vec::new();
        if node != self.root {
            removes.push(node);
        }

        removes.extend(self.descendants(node));

        if let Some(parent) = parent {
            if let Some(v) = self.nodes.get_mut(parent) {
                v.children.retain(|&mut child| child != node);
            }
        } else if let Some(v) = self.nodes.get_mut(node) {
            v.children.clear();
        }

        self.nodes.remove_all(removes.iter().cloned());

        debug!("[SceneGraph] Removes {} nodes from {}.", removes.len(), node);
        Ok(removes)
    }

    #[inline]
    fn get(&self, node: NodeId) -> Result<&Node> {
        self.nodes
            .get(node)
            .ok_or_else(|| Error::NodeHandleInvalid(node.to_string()))
    }

    #[inline]
    fn get_mut(&mut self, node: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(node)
            .ok_or_else(|| Error::NodeHandleInvalid(node.to_string()))
    }
}

impl SceneGraph {
    #[inline]
    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node)
    }

    #[inline]
    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node)
    }

    /// Gets the parent node.
    #[inline]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|v| v.parent)
    }

    /// Returns true if this is the root of the graph.
    #[inline]
    pub fn is_root(&self, node: NodeId) -> bool {
        node == self.root
    }

    /// Returns true if this is the leaf of a hierarchy, aka. has no child.
    #[inline]
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.nodes
            .get(node)
            .map(|v| v.children.is_empty())
            .unwrap_or(false)
    }

    /// Returns an iterator of its ancestors, from parent to root.
    #[inline]
    pub fn ancestors(&self, node: NodeId) -> Ancestors {
        Ancestors {
            cursor: self.parent(node),
            graph: self,
        }
    }

    /// Return true if rhs is one of the ancestor of lhs.
    #[inline]
    pub fn is_ancestor(&self, lhs: NodeId, rhs: NodeId) -> bool {
        self.ancestors(lhs).any(|v| v == rhs)
    }

    /// Returns an iterator of its children, in insertion order.
    #[inline]
    pub fn children(&self, node: NodeId) -> Children {
        let children = self
            .nodes
            .get(node)
            .map(|v| &v.children[..])
            .unwrap_or(&[]);

        Children {
            iter: children.iter(),
        }
    }

    /// Returns an iterator of its descendants in tree order (depth first, children in
    /// insertion order).
    #[inline]
    pub fn descendants(&self, node: NodeId) -> Descendants {
        let stack = self.children(node).rev().collect();
        Descendants { graph: self, stack }
    }

    #[inline]
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|v| v.name.as_ref())
    }

    #[inline]
    pub fn set_name<T: AsRef<str>>(&mut self, node: NodeId, name: T) -> Result<()> {
        self.get_mut(node)?.name = name.as_ref().into();
        Ok(())
    }

    #[inline]
    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node).map(|v| &v.element)
    }

    #[inline]
    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node).map(|v| &mut v.element)
    }

    /// Gets the camera element of `node`.
    pub fn camera(&self, node: NodeId) -> Result<&Camera> {
        match self.get(node)?.element {
            Element::Camera(ref camera) => Ok(camera),
            _ => Err(Error::NotACamera(node.to_string())),
        }
    }

    /// Gets the mutable camera element of `node`.
    pub fn camera_mut(&mut self, node: NodeId) -> Result<&mut Camera> {
        match self.get_mut(node)?.element {
            Element::Camera(ref mut camera) => Ok(camera),
            _ => Err(Error::NotACamera(node.to_string())),
        }
    }

    /// Gets all the camera nodes in tree order.
    pub fn cameras(&self) -> Vec<NodeId> {
        ::std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .filter(|&v| self.camera(v).is_ok())
            .collect()
    }

    /// Sets the texture bound while drawing `node` and its subtree.
    pub fn set_texture(&mut self, node: NodeId, texture: Option<TextureHandle>) -> Result<()> {
        self.get_mut(node)?.bindings.texture = texture;
        Ok(())
    }

    /// Sets the shader bound while drawing `node` and its subtree.
    pub fn set_shader(&mut self, node: NodeId, shader: Option<ShaderHandle>) -> Result<()> {
        self.get_mut(node)?.bindings.shader = shader;
        Ok(())
    }
}

impl SceneGraph {
    /// Gets the transform in local space.
    #[inline]
    pub fn local_transform(&self, node: NodeId) -> Option<Transform> {
        self.nodes.get(node).map(|v| v.transform)
    }

    #[inline]
    pub fn local_transform_mut(&mut self, node: NodeId) -> Option<&mut Transform> {
        self.nodes.get_mut(node).map(|v| &mut v.transform)
    }

    /// Overwrites the position, orientation and scaling of `node`.
    pub fn set_transform<T1, T2, T3>(
        &mut self,
        node: NodeId,
        position: T1,
        orientation: T2,
        scaling: T3,
    ) -> Result<()>
    where
        T1: Into<Vector3<f32>>,
        T2: Into<Vector3<f32>>,
        T3: Into<Vector3<f32>>,
    {
        self.get_mut(node)?
            .transform
            .set(position, orientation, scaling);
        Ok(())
    }

    /// Moves the node in the direction and distance of translation, expressed in the
    /// parent frame.
    #[inline]
    pub fn translate<T>(&mut self, node: NodeId, translation: T) -> Result<()>
    where
        T: Into<Vector3<f32>>,
    {
        self.get_mut(node)?.transform.position += translation.into();
        Ok(())
    }

    /// Adds Euler angles, in degrees, to the orientation of the node.
    #[inline]
    pub fn rotate<T>(&mut self, node: NodeId, degrees: T) -> Result<()>
    where
        T: Into<Vector3<f32>>,
    {
        self.get_mut(node)?.transform.orientation += degrees.into();
        Ok(())
    }

    /// Sets the per-axis scaling of the node.
    #[inline]
    pub fn set_scaling<T>(&mut self, node: NodeId, scaling: T) -> Result<()>
    where
        T: Into<Vector3<f32>>,
    {
        self.get_mut(node)?.transform.scaling = scaling.into();
        Ok(())
    }

    /// Gets the matrix that maps the local frame of `node` onto the world frame, which
    /// is the composition of the local->parent transforms from root to `node`.
    pub fn local_to_world(&self, node: NodeId) -> Option<Matrix4<f32>> {
        self.nodes.get(node).map(|v| {
            self.ancestors(node)
                .filter_map(|v| self.nodes.get(v))
                .fold(v.transform.local_to_parent(), |acc, rhs| {
                    rhs.transform.local_to_parent() * acc
                })
        })
    }

    /// Gets the matrix that maps the world frame onto the local frame of `node`. It's
    /// composed in the exact reverse order of `local_to_world`, and is used by cameras
    /// as view matrix.
    pub fn world_to_local(&self, node: NodeId) -> Option<Matrix4<f32>> {
        self.nodes.get(node).map(|v| {
            self.ancestors(node)
                .filter_map(|v| self.nodes.get(v))
                .fold(v.transform.parent_to_local(), |acc, rhs| {
                    acc * rhs.transform.parent_to_local()
                })
        })
    }

    /// Gets the position of `node` in world space.
    #[inline]
    pub fn world_position(&self, node: NodeId) -> Option<Point3<f32>> {
        self.local_to_world(node)
            .map(|m| m.transform_point(Point3::new(0.0, 0.0, 0.0)))
    }
}

impl SceneGraph {
    /// Runs the update hook of `node`. This is a per-node hook, the subtree is not
    /// visited.
    pub fn update(&mut self, node: NodeId, dt: f32) -> Result<()> {
        self.get_mut(node)?.element.update(dt);
        Ok(())
    }

    /// Draws `node` and its subtree.
    ///
    /// `transform` maps the parent frame of `node` onto the destination space, usually
    /// the view space of a camera. Every node receives the composition of it with the
    /// local->parent transforms down to itself as model-view, binds its texture and
    /// shader, draws its element, and then recurses into its children in insertion
    /// order. Bindings are restored once the subtree is done.
    pub fn draw_subtree(
        &self,
        node: NodeId,
        transform: &Matrix4<f32>,
        canvas: &mut dyn Canvas,
        dt: f32,
    ) -> Result<()> {
        let node = self.get(node)?;
        self.draw_node(node, transform, Bindings::default(), canvas, dt);
        Ok(())
    }

    fn draw_node(
        &self,
        node: &Node,
        parent: &Matrix4<f32>,
        inherited: Bindings,
        canvas: &mut dyn Canvas,
        dt: f32,
    ) {
        let transform = *parent * node.transform.local_to_parent();
        let bindings = inherited.inherit(node.bindings);

        let mut canvas = BindingGuard::new(canvas, node.bindings, inherited);
        canvas.set_model_view(&transform);
        node.element.draw(&mut *canvas, dt);

        for &child in &node.children {
            if let Some(child) = self.nodes.get(child) {
                self.draw_node(child, &transform, bindings, &mut *canvas, dt);
            }
        }
    }
}

/// An iterator of its ancestors.
pub struct Ancestors<'a> {
    graph: &'a SceneGraph,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.cursor.and_then(|v| self.graph.parent(v));
        ::std::mem::replace(&mut self.cursor, next)
    }
}

/// An iterator of its children.
pub struct Children<'a> {
    iter: ::std::slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeId;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().cloned()
    }
}

impl<'a> DoubleEndedIterator for Children<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().cloned()
    }
}

/// An iterator of its descendants, in tree order.
pub struct Descendants<'a> {
    graph: &'a SceneGraph,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(self.graph.children(node).rev());
        Some(node)
    }
}
