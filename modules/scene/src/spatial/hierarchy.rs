use std::fmt;

use easel::math::prelude::Vector3;

use crate::element::Element;
use crate::NodeId;

use super::graph::SceneGraph;

/// Printable view of a subtree. Every node prints its element type and name, followed
/// by its local scaling, rotation and position, indented by two spaces per level.
pub struct Hierarchy<'a> {
    graph: &'a SceneGraph,
    node: NodeId,
}

impl SceneGraph {
    /// Gets a printable view of the subtree starting at `node`.
    #[inline]
    pub fn hierarchy(&self, node: NodeId) -> Hierarchy {
        Hierarchy { graph: self, node }
    }

    /// Logs the whole graph.
    pub fn print_hierarchy(&self) {
        info!("[SceneGraph] Hierarchy:\n{}", self.hierarchy(self.root()));
    }
}

struct Vec3(Vector3<f32>);

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "vec3({:.6}, {:.6}, {:.6})", self.0.x, self.0.y, self.0.z)
    }
}

impl<'a> Hierarchy<'a> {
    fn write(&self, f: &mut fmt::Formatter, node: NodeId, indent: usize) -> fmt::Result {
        let v = match self.graph.node(node) {
            Some(v) => v,
            None => return Ok(()),
        };

        let name: &str = v.name.as_ref();
        if name.is_empty() {
            writeln!(f, "{:indent$}{}", "", v.element.type_name(), indent = indent)?;
        } else {
            writeln!(
                f,
                "{:indent$}{} \"{}\"",
                "",
                v.element.type_name(),
                name,
                indent = indent
            )?;
        }

        let pad = indent + 2;
        let t = &v.transform;
        writeln!(f, "{:pad$}Scaling  = {}", "", Vec3(t.scaling), pad = pad)?;
        writeln!(f, "{:pad$}Rotation = {}", "", Vec3(t.orientation), pad = pad)?;
        writeln!(f, "{:pad$}Position = {}", "", Vec3(t.position), pad = pad)?;

        if let Element::Camera(ref camera) = v.element {
            writeln!(f, "{:pad$}Projection = {:?}", "", camera.projection(), pad = pad)?;
        }

        for child in self.graph.children(node) {
            self.write(f, child, pad)?;
        }

        Ok(())
    }
}

impl<'a> fmt::Display for Hierarchy<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write(f, self.node, 0)
    }
}
